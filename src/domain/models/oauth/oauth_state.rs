use serde::{Deserialize, Serialize};

/// Redis 키 접두사. 전체 키는 `zoom_oauth_state:<state>`
pub const ZOOM_OAUTH_STATE_PREFIX: &str = "zoom_oauth_state";

/// 인가 흐름을 시작한 프로필과 state 값의 바인딩
///
/// 콜백에서 한 번 소비되면 사라집니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthStateEntry {
    pub profile_id: String,
    /// Unix timestamp (초)
    pub created_at: i64,
}

impl OAuthStateEntry {
    pub fn new(profile_id: &str) -> Self {
        Self {
            profile_id: profile_id.to_string(),
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// 추측 불가능한 state 값 (UUID v4, 하이픈 제거)
pub fn generate_state() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

pub fn state_key(state: &str) -> String {
    format!("{}:{}", ZOOM_OAUTH_STATE_PREFIX, state)
}
