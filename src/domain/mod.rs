//! # Domain Layer Module
//!
//! ```text
//! domain/
//! ├── entities  - MongoDB에 저장되는 튜터 프로필, Zoom 자격 증명
//! ├── dto       - HTTP 요청/응답 타입
//! └── models    - 인증 사용자, JWT 클레임, OAuth 인가 요청과 state
//! ```

pub mod entities;
pub mod dto;
pub mod models;
