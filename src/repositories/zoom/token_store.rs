//! # Zoom 자격 증명 저장소
//!
//! 교환된 토큰 쌍을 정확히 하나의 프로필에 붙여 저장합니다.
//! `profile_id` 유니크 인덱스와 upsert 한 번으로 재연결/갱신이 기존 문서를 덮어씁니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{
    bson::{doc, DateTime},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    db::Database,
    domain::{dto::zoom::ZoomTokenResponse, entities::zoom::ZoomCredentials},
    errors::AppError,
};

const COLLECTION: &str = "zoom_credentials";

/// 프로필 단위 토큰 저장소
#[async_trait]
pub trait ProfileTokenStore: Send + Sync {
    /// 토큰 쌍을 프로필에 저장(upsert)하고 저장된 문서를 반환합니다.
    async fn save(&self, profile_id: &str, token: &ZoomTokenResponse) -> Result<ZoomCredentials, AppError>;

    async fn load(&self, profile_id: &str) -> Result<Option<ZoomCredentials>, AppError>;

    /// 삭제 여부 반환 (없으면 false)
    async fn delete(&self, profile_id: &str) -> Result<bool, AppError>;
}

/// MongoDB 기반 [`ProfileTokenStore`]
pub struct MongoProfileTokenStore {
    db: Arc<Database>,
}

impl MongoProfileTokenStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<ZoomCredentials> {
        self.db.collection::<ZoomCredentials>(COLLECTION)
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let profile_index = IndexModel::builder()
            .keys(doc! { "profile_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("profile_id_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([profile_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ProfileTokenStore for MongoProfileTokenStore {
    async fn save(&self, profile_id: &str, token: &ZoomTokenResponse) -> Result<ZoomCredentials, AppError> {
        let now = DateTime::now();

        let update = doc! {
            "$set": {
                "access_token": token.access_token.as_str(),
                "refresh_token": token.refresh_token.as_str(),
                "token_type": token.token_type.as_str(),
                "scope": token.scope.clone(),
                "expires_at": token.expires_at(),
                "updated_at": now,
            },
            "$setOnInsert": {
                "created_at": now,
            },
        };

        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(doc! { "profile_id": profile_id }, update)
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .ok_or_else(|| AppError::DatabaseError("upsert 결과 문서가 없습니다".to_string()))
    }

    async fn load(&self, profile_id: &str) -> Result<Option<ZoomCredentials>, AppError> {
        self.collection()
            .find_one(doc! { "profile_id": profile_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn delete(&self, profile_id: &str) -> Result<bool, AppError> {
        let result = self.collection()
            .delete_one(doc! { "profile_id": profile_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
