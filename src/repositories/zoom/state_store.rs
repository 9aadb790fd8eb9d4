use std::sync::Arc;
use async_trait::async_trait;
use crate::{
    caching::redis::RedisClient,
    domain::models::oauth::{state_key, OAuthStateEntry},
    errors::AppError,
};

/// OAuth state 일회용 저장소
///
/// `take`는 원자적으로 읽고 지웁니다. 같은 state로 동시에 들어온 콜백 중 하나만 값을 받습니다.
#[async_trait]
pub trait OAuthStateStore: Send + Sync {
    async fn save(&self, state: &str, entry: &OAuthStateEntry, ttl_secs: u64) -> Result<(), AppError>;

    async fn take(&self, state: &str) -> Result<Option<OAuthStateEntry>, AppError>;
}

/// Redis 기반 [`OAuthStateStore`] (SETEX / GETDEL)
pub struct RedisOAuthStateStore {
    redis: Arc<RedisClient>,
}

impl RedisOAuthStateStore {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl OAuthStateStore for RedisOAuthStateStore {
    async fn save(&self, state: &str, entry: &OAuthStateEntry, ttl_secs: u64) -> Result<(), AppError> {
        self.redis
            .set_with_expiry(&state_key(state), entry, ttl_secs)
            .await?;
        Ok(())
    }

    async fn take(&self, state: &str) -> Result<Option<OAuthStateEntry>, AppError> {
        Ok(self.redis.take::<OAuthStateEntry>(&state_key(state)).await?)
    }
}
