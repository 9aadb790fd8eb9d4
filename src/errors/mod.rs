//! 에러 타입 모듈
//!
//! - [`errors`] - 애플리케이션 전역 `AppError`
//! - [`oauth_errors`] - Zoom OAuth 플로우 전용 `ZoomOAuthError`

pub mod errors;
pub mod oauth_errors;

pub use errors::AppError;
pub use oauth_errors::ZoomOAuthError;
