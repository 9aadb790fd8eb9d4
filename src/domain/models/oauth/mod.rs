//! # OAuth Domain Models
//!
//! 인가 요청 URL과 state 저장 항목을 정의합니다.
//!
//! ```text
//! 1. /zoom/oauth/init/      AuthorizationRequest 생성, OAuthStateEntry 저장
//! 2. (사용자 동의)           Zoom → redirect_uri?code=..&state=..
//! 3. /zoom/oauth/callback/  OAuthStateEntry 소비 후 코드 교환
//! ```

pub mod authorization_request;
pub mod oauth_state;

pub use authorization_request::*;
pub use oauth_state::*;
