//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, Rate Limiting, CORS 설정
//! - [`auth_config`] - Zoom OAuth, JWT, OAuth 세션 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리 (Environment Separation)
//!
//! `PROFILE`에 따라 `.env.dev` / `.env.prod` 파일을 로드하고, 그 위에 실제 환경 변수가 적용됩니다.
//!
//! ### 2. 기동 시점 검증 (Fail Fast)
//!
//! Zoom OAuth 필수 설정은 [`ZoomOAuthConfig::from_env`]에서 한 번 검증됩니다.
//! 누락 시 `ConfigurationError`로 서버가 기동되지 않습니다. 요청 처리 중에는
//! 전역 환경을 다시 읽지 않고, 생성자로 전달된 설정 구조체만 사용합니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 데이터 저장소
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="tutor_marketplace_dev"
//! export REDIS_URL="redis://localhost:6379"
//!
//! # Zoom OAuth
//! export ZOOM_CLIENT_ID="your-client-id"
//! export ZOOM_CLIENT_SECRET="your-client-secret"
//! export ZOOM_REDIRECT_URI="https://yourdomain.com/zoom/oauth/callback/"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
