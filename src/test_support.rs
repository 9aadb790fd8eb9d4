//! 테스트 전용 저장소 구현과 설정 헬퍼

use std::collections::HashMap;
use std::sync::Mutex;
use async_trait::async_trait;
use mongodb::bson::{self, oid::ObjectId, DateTime};
use crate::{
    config::ZoomOAuthConfig,
    domain::{
        dto::{
            tutors::{TutorListQuery, UpdateTutorRequest},
            zoom::ZoomTokenResponse,
        },
        entities::{tutors::Tutor, zoom::ZoomCredentials},
        models::oauth::OAuthStateEntry,
    },
    errors::AppError,
    repositories::{
        tutors::{parse_tutor_id, TutorStore},
        zoom::{OAuthStateStore, ProfileTokenStore},
    },
};

pub const TEST_CLIENT_ID: &str = "X";
pub const TEST_CLIENT_SECRET: &str = "zoom-secret";
pub const TEST_REDIRECT_URI: &str = "https://app.example.com/zoom/oauth/callback/";
pub const TEST_JWT_SECRET: &str = "test-jwt-secret";

/// `base_url`을 모의 서버로 향하게 한 설정 (타임아웃 1초)
pub fn zoom_config(base_url: &str) -> ZoomOAuthConfig {
    ZoomOAuthConfig {
        client_id: TEST_CLIENT_ID.to_string(),
        redirect_uri: TEST_REDIRECT_URI.to_string(),
        basic_credentials: ZoomOAuthConfig::encode_basic_credentials(TEST_CLIENT_ID, TEST_CLIENT_SECRET),
        base_url: base_url.trim_end_matches('/').to_string(),
        http_timeout_secs: 1,
        success_redirect: "/".to_string(),
        error_redirect: "/".to_string(),
    }
}

/// TTL은 무시합니다.
#[derive(Default)]
pub struct InMemoryStateStore {
    entries: Mutex<HashMap<String, OAuthStateEntry>>,
}

impl InMemoryStateStore {
    pub fn insert(&self, state: &str, profile_id: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(state.to_string(), OAuthStateEntry::new(profile_id));
    }

    pub fn profile_for(&self, state: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap()
            .get(state)
            .map(|entry| entry.profile_id.clone())
    }
}

#[async_trait]
impl OAuthStateStore for InMemoryStateStore {
    async fn save(&self, state: &str, entry: &OAuthStateEntry, _ttl_secs: u64) -> Result<(), AppError> {
        self.entries.lock().unwrap().insert(state.to_string(), entry.clone());
        Ok(())
    }

    async fn take(&self, state: &str) -> Result<Option<OAuthStateEntry>, AppError> {
        Ok(self.entries.lock().unwrap().remove(state))
    }
}

#[derive(Default)]
pub struct InMemoryTokenStore {
    records: Mutex<HashMap<String, ZoomCredentials>>,
}

impl InMemoryTokenStore {
    pub fn insert(&self, profile_id: &str, access_token: &str, refresh_token: &str) {
        let now = DateTime::now();
        self.records.lock().unwrap().insert(
            profile_id.to_string(),
            ZoomCredentials {
                id: None,
                profile_id: profile_id.to_string(),
                access_token: access_token.to_string(),
                refresh_token: refresh_token.to_string(),
                token_type: "bearer".to_string(),
                scope: None,
                expires_at: None,
                created_at: now,
                updated_at: now,
            },
        );
    }

    pub fn get(&self, profile_id: &str) -> Option<ZoomCredentials> {
        self.records.lock().unwrap().get(profile_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl ProfileTokenStore for InMemoryTokenStore {
    async fn save(&self, profile_id: &str, token: &ZoomTokenResponse) -> Result<ZoomCredentials, AppError> {
        let now = DateTime::now();
        let mut records = self.records.lock().unwrap();
        let created_at = records.get(profile_id).map(|c| c.created_at).unwrap_or(now);

        let credentials = ZoomCredentials {
            id: None,
            profile_id: profile_id.to_string(),
            access_token: token.access_token.clone(),
            refresh_token: token.refresh_token.clone(),
            token_type: token.token_type.clone(),
            scope: token.scope.clone(),
            expires_at: token.expires_at(),
            created_at,
            updated_at: now,
        };

        records.insert(profile_id.to_string(), credentials.clone());
        Ok(credentials)
    }

    async fn load(&self, profile_id: &str) -> Result<Option<ZoomCredentials>, AppError> {
        Ok(self.get(profile_id))
    }

    async fn delete(&self, profile_id: &str) -> Result<bool, AppError> {
        Ok(self.records.lock().unwrap().remove(profile_id).is_some())
    }
}

/// 항상 저장에 실패하는 토큰 저장소
pub struct FailingTokenStore;

#[async_trait]
impl ProfileTokenStore for FailingTokenStore {
    async fn save(&self, _profile_id: &str, _token: &ZoomTokenResponse) -> Result<ZoomCredentials, AppError> {
        Err(AppError::DatabaseError("connection reset".to_string()))
    }

    async fn load(&self, _profile_id: &str) -> Result<Option<ZoomCredentials>, AppError> {
        Err(AppError::DatabaseError("connection reset".to_string()))
    }

    async fn delete(&self, _profile_id: &str) -> Result<bool, AppError> {
        Err(AppError::DatabaseError("connection reset".to_string()))
    }
}

/// 메모리 튜터 저장소
///
/// 유니크 인덱스(email, user_id)와 `$set` 부분 갱신을 흉내 냅니다.
#[derive(Default)]
pub struct InMemoryTutorStore {
    tutors: Mutex<Vec<Tutor>>,
}

impl InMemoryTutorStore {
    pub fn len(&self) -> usize {
        self.tutors.lock().unwrap().len()
    }

    pub fn get(&self, id: &str) -> Option<Tutor> {
        let object_id = ObjectId::parse_str(id).ok()?;
        self.tutors
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == Some(object_id))
            .cloned()
    }
}

#[async_trait]
impl TutorStore for InMemoryTutorStore {
    async fn find_all(&self, query: &TutorListQuery) -> Result<Vec<Tutor>, AppError> {
        let mut tutors: Vec<Tutor> = self.tutors
            .lock()
            .unwrap()
            .iter()
            .filter(|t| query.language.is_none_or(|l| t.language == l))
            .filter(|t| query.country.is_none_or(|c| t.country == c))
            .filter(|t| query.online.is_none_or(|o| t.online == o))
            .cloned()
            .collect();

        tutors.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tutors)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Tutor>, AppError> {
        let object_id = parse_tutor_id(id)?;
        Ok(self.tutors
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == Some(object_id))
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Tutor>, AppError> {
        Ok(self.tutors.lock().unwrap().iter().find(|t| t.email == email).cloned())
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Tutor>, AppError> {
        Ok(self.tutors.lock().unwrap().iter().find(|t| t.is_owned_by(user_id)).cloned())
    }

    async fn create(&self, mut tutor: Tutor) -> Result<Tutor, AppError> {
        let mut tutors = self.tutors.lock().unwrap();
        let duplicate = tutors.iter().any(|t| {
            t.email == tutor.email || (tutor.user_id.is_some() && t.user_id == tutor.user_id)
        });
        if duplicate {
            return Err(AppError::ConflictError("이미 등록된 튜터입니다".to_string()));
        }

        tutor.id = Some(ObjectId::new());
        tutors.push(tutor.clone());
        Ok(tutor)
    }

    async fn update(&self, id: &str, changes: &UpdateTutorRequest) -> Result<Option<Tutor>, AppError> {
        let object_id = parse_tutor_id(id)?;
        let mut tutors = self.tutors.lock().unwrap();
        let Some(slot) = tutors.iter_mut().find(|t| t.id == Some(object_id)) else {
            return Ok(None);
        };

        let mut document = bson::to_document(&*slot)
            .map_err(|e| AppError::InternalError(e.to_string()))?;
        for (key, value) in changes.to_set_document() {
            document.insert(key, value);
        }
        document.insert("updated_at", DateTime::now());

        *slot = bson::from_document(document)
            .map_err(|e| AppError::InternalError(e.to_string()))?;
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = parse_tutor_id(id)?;
        let mut tutors = self.tutors.lock().unwrap();
        let before = tutors.len();
        tutors.retain(|t| t.id != Some(object_id));
        Ok(tutors.len() < before)
    }
}
