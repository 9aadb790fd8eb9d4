//! 튜터 마켓플레이스 백엔드
//!
//! 튜터 프로필 관리와 튜터 계정의 Zoom 연결(OAuth 2.0 Authorization Code)을 제공하는
//! Actix-web 서비스입니다.
//!
//! # Features
//!
//! - **튜터 프로필**: 목록/조회/생성/수정/삭제, 언어·국가·온라인 필터
//! - **Zoom 연결**: 인증 시작, 콜백 토큰 교환, 상태 조회, 토큰 갱신, 연결 해제
//! - **JWT 인증**: Bearer 헤더 또는 `access_token` 쿠키
//! - **MongoDB**: 튜터 프로필과 Zoom 자격 증명 저장
//! - **Redis**: OAuth state 저장(일회용, TTL)과 조회 캐시
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직, Zoom 토큰 엔드포인트 호출
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (trait 뒤에 숨긴 저장소)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! 서비스는 `main`에서 한 번 생성되어 `web::Data`로 핸들러에 주입됩니다.

pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;

#[cfg(test)]
pub(crate) mod test_support;
