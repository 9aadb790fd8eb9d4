//! 인증 서비스 모듈
//!
//! HMAC-SHA256으로 서명된 JWT 액세스 토큰을 검증합니다.

pub mod token_service;

pub use token_service::*;
