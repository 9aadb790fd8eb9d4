//! 데이터 액세스 계층
//!
//! MongoDB를 주 저장소로, Redis를 캐시와 일회용 state 저장소로 사용합니다.
//! 리포지토리는 `Arc<Database>`, `Arc<RedisClient>`를 생성자로 받아 `main`에서 조립됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::tutors::TutorRepository;
//!
//! let tutor_repo = TutorRepository::new(database.clone(), redis.clone());
//! let tutor = tutor_repo.find_by_id("507f1f77bcf86cd799439011").await?;
//! ```

pub mod tutors;
pub mod zoom;
