//! # Data Transfer Objects
//!
//! HTTP 경계에서 주고받는 요청/응답 타입입니다.
//!
//! ```text
//! dto/
//! ├── tutors/   - 튜터 CRUD 요청, 목록 필터, 응답
//! └── zoom/     - OAuth 콜백 쿼리, 토큰 엔드포인트 응답, 연결 상태
//! ```

pub mod tutors;
pub mod zoom;
