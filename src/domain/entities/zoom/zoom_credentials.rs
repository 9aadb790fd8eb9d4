use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 프로필에 연결된 Zoom OAuth 토큰 쌍 (`zoom_credentials` 컬렉션)
///
/// `profile_id`에 유니크 인덱스가 걸려 있어 프로필당 한 건만 존재합니다.
/// 재연결/갱신 시에는 같은 문서가 덮어써집니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoomCredentials {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub profile_id: String,
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// 액세스 토큰 만료 시각 (`expires_in`이 없으면 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl ZoomCredentials {
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at <= DateTime::now(),
            None => false,
        }
    }
}
