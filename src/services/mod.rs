//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성자로 의존성을 받아 `main`에서 조립되고, 핸들러에는 `web::Data`로 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::zoom::ZoomOAuthService;
//!
//! let zoom = ZoomOAuthService::new(config, ttl_secs, state_store, token_store)?;
//! let authorize_url = zoom.begin_authorization(&user.user_id).await?;
//! ```

pub mod auth;
pub mod tutors;
pub mod zoom;
