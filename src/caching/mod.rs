//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 캐시와 JSON 기반 객체 직렬화를 제공합니다.
//!
//! # 주요 기능
//!
//! - 튜터 단건 조회 캐시 (TTL 10분)
//! - OAuth state 일회용 저장 (GETDEL로 소비)
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
