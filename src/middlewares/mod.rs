//! 미들웨어 모듈
//!
//! # 인증 미들웨어 (AuthMiddleware)
//!
//! - `Authorization: Bearer <jwt>` 헤더 또는 `access_token` 쿠키에서 토큰 추출
//! - `web::Data<TokenService>`로 검증 후 `AuthenticatedUser`를 request extension에 저장
//! - 선택적/강제 인증 모드 지원
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! App::new()
//!     .app_data(web::Data::new(TokenService::from_config()))
//!     // 콜백은 state로 사용자를 찾으므로 인증 스코프보다 먼저, 바깥에 등록
//!     .service(handlers::zoom::zoom_oauth_callback)
//!     .service(
//!         web::scope("/zoom/oauth")
//!             .wrap(AuthMiddleware::required())
//!             .service(handlers::zoom::zoom_oauth_init)
//!     )
//!     .service(
//!         web::scope("/api/tutors")
//!             .wrap(AuthMiddleware::optional())   // 변경 핸들러는 AuthenticatedUser 추출자로 401 처리
//!             .service(handlers::tutors::list_tutors)
//!             .service(handlers::tutors::create_tutor)
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
