//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다. 라우트 등록은 [`crate::routes`]에서 합니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories / Stores - 데이터 접근             ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`zoom`**: Zoom 계정 연결 (OAuth 시작/콜백, 상태, 갱신, 해제)
//! - **`tutors`**: 튜터 프로필 CRUD
//! - **`pages`**: 정적 안내 페이지 (home, about, contact, blog)
//!
//! ## 에러 처리
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하고, `?`로 전파된 에러는
//! `AppError`의 `ResponseError` 구현이 JSON 응답으로 바꿉니다.
//! 예외는 Zoom 콜백으로, 브라우저가 직접 도착하는 곳이라 실패를 리다이렉트로 응답합니다.

pub mod pages;
pub mod tutors;
pub mod zoom;
