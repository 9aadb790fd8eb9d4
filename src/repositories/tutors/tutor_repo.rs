//! # 튜터 리포지토리 구현
//!
//! `tutors` 컬렉션의 데이터 액세스 계층입니다. 단건 조회는 Redis에 10분간 캐시됩니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    caching::redis::RedisClient,
    db::Database,
    domain::{
        dto::tutors::{TutorListQuery, UpdateTutorRequest},
        entities::tutors::Tutor,
    },
    errors::AppError,
};

const COLLECTION: &str = "tutors";
const CACHE_TTL_SECS: u64 = 600;

/// 튜터 저장소
///
/// 서비스는 `Arc<dyn TutorStore>`로 의존합니다. 잘못된 ID 형식은 `ValidationError`입니다.
#[async_trait]
pub trait TutorStore: Send + Sync {
    /// 필터에 맞는 튜터 목록 (최신순)
    async fn find_all(&self, query: &TutorListQuery) -> Result<Vec<Tutor>, AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Tutor>, AppError>;

    /// 이메일은 소문자로 정규화된 값으로 조회합니다.
    async fn find_by_email(&self, email: &str) -> Result<Option<Tutor>, AppError>;

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Tutor>, AppError>;

    /// 새 튜터 저장. 이메일/계정 중복은 `ConflictError`
    async fn create(&self, tutor: Tutor) -> Result<Tutor, AppError>;

    /// 전달된 필드만 갱신하고 최신 문서를 반환합니다. 없으면 `None`
    async fn update(&self, id: &str, changes: &UpdateTutorRequest) -> Result<Option<Tutor>, AppError>;

    /// 삭제 여부 반환 (없으면 false)
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}

/// 튜터 ID 문자열을 ObjectId로 변환
pub(crate) fn parse_tutor_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
}

/// MongoDB 기반 [`TutorStore`]
///
/// ## 캐싱 전략
///
/// - **키 패턴**: `tutor:{id}`
/// - **TTL**: 600초
/// - 수정/삭제 시 해당 키를 무효화합니다. 목록 조회는 캐시하지 않습니다.
///
/// ## 인덱스
///
/// - `email` (unique)
/// - `user_id` (unique, sparse) - 계정당 튜터 프로필 하나
/// - `created_at` (desc)
pub struct TutorRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl TutorRepository {
    pub fn new(db: Arc<Database>, redis: Arc<RedisClient>) -> Self {
        Self { db, redis }
    }

    fn collection(&self) -> Collection<Tutor> {
        self.db.collection::<Tutor>(COLLECTION)
    }

    fn cache_key(id: &str) -> String {
        format!("tutor:{}", id)
    }

    async fn invalidate_cache(&self, id: &str) {
        if let Err(e) = self.redis.del(&Self::cache_key(id)).await {
            log::warn!("튜터 캐시 무효화 실패 ({}): {}", id, e);
        }
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .sparse(true)
                .name("user_id_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, user_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl TutorStore for TutorRepository {
    async fn find_all(&self, query: &TutorListQuery) -> Result<Vec<Tutor>, AppError> {
        let cursor = self.collection()
            .find(query.to_filter())
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 조회 (캐시 우선)
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 잘못된 ObjectId 형식
    /// * `AppError::DatabaseError` - 데이터베이스 오류
    async fn find_by_id(&self, id: &str) -> Result<Option<Tutor>, AppError> {
        let object_id = parse_tutor_id(id)?;
        let cache_key = Self::cache_key(id);

        if let Ok(Some(cached)) = self.redis.get::<Tutor>(&cache_key).await {
            return Ok(Some(cached));
        }

        let tutor = self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref tutor) = tutor {
            if let Err(e) = self.redis.set_with_expiry(&cache_key, tutor, CACHE_TTL_SECS).await {
                log::warn!("튜터 캐시 저장 실패 ({}): {}", id, e);
            }
        }

        Ok(tutor)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Tutor>, AppError> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Tutor>, AppError> {
        self.collection()
            .find_one(doc! { "user_id": user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 튜터 저장
    ///
    /// 이메일/계정 중복은 서비스에서 먼저 확인하지만, 동시 요청은 유니크 인덱스가
    /// 막으므로 중복 키 에러도 `ConflictError`로 변환합니다.
    async fn create(&self, mut tutor: Tutor) -> Result<Tutor, AppError> {
        let result = self.collection()
            .insert_one(&tutor)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError("이미 등록된 튜터입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        tutor.id = result.inserted_id.as_object_id();

        Ok(tutor)
    }

    /// `$set` 부분 업데이트 후 최신 문서 반환
    async fn update(&self, id: &str, changes: &UpdateTutorRequest) -> Result<Option<Tutor>, AppError> {
        let object_id = parse_tutor_id(id)?;
        let mut set_doc = changes.to_set_document();
        set_doc.insert("updated_at", DateTime::now());

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self.collection()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": set_doc })
            .with_options(options)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError("이미 사용 중인 이메일입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        if updated.is_some() {
            self.invalidate_cache(id).await;
        }

        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = parse_tutor_id(id)?;

        let result = self.collection()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            self.invalidate_cache(id).await;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

/// E11000 duplicate key
pub(crate) fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    match *err.kind {
        ErrorKind::Write(WriteFailure::WriteError(ref write_error)) => write_error.code == 11000,
        // findAndModify는 쓰기 에러 대신 커맨드 에러로 돌려줌
        ErrorKind::Command(ref command_error) => command_error.code == 11000,
        _ => false,
    }
}
