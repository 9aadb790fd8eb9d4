//! Zoom OAuth 2.0 연동 서비스
//!
//! 튜터 프로필과 Zoom 계정을 Authorization Code Grant로 연결합니다.
//!
//! ## 인증 플로우
//!
//! ```text
//! 1. begin_authorization     → state 저장, Zoom 인증 페이지 URL 반환
//! 2. (사용자 동의)            → Zoom이 redirect_uri?code=..&state=.. 로 리다이렉트
//! 3. complete_authorization  → state 소비 → 코드 교환 → 토큰 저장
//! ```
//!
//! 콜백 처리는 `AWAITING_CODE → EXCHANGING → { PERSISTED | FAILED }` 순서로만 진행하며,
//! 실패는 저장 단계 이전에 단락됩니다.

use std::sync::Arc;
use std::time::Duration;
use reqwest::{header, Client};
use crate::{
    config::ZoomOAuthConfig,
    domain::{
        dto::zoom::{ZoomCallbackQuery, ZoomConnectionStatus, ZoomTokenResponse},
        entities::zoom::ZoomCredentials,
        models::oauth::{generate_state, AuthorizationRequest, OAuthStateEntry},
    },
    errors::ZoomOAuthError,
    repositories::zoom::{OAuthStateStore, ProfileTokenStore},
};

const MAX_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Zoom OAuth 서비스
///
/// `web::Data<ZoomOAuthService>`로 공유됩니다. 내부 `reqwest::Client`는 연결 풀을 가지며
/// 모든 요청에 `ZOOM_HTTP_TIMEOUT_SECS` 타임아웃이 적용됩니다.
pub struct ZoomOAuthService {
    config: ZoomOAuthConfig,
    http: Client,
    state_ttl_secs: u64,
    state_store: Arc<dyn OAuthStateStore>,
    token_store: Arc<dyn ProfileTokenStore>,
}

impl ZoomOAuthService {
    /// # Errors
    ///
    /// * `ZoomOAuthError::Configuration` - HTTP 클라이언트 생성 실패
    pub fn new(
        config: ZoomOAuthConfig,
        state_ttl_secs: u64,
        state_store: Arc<dyn OAuthStateStore>,
        token_store: Arc<dyn ProfileTokenStore>,
    ) -> Result<Self, ZoomOAuthError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .connect_timeout(Duration::from_secs(config.http_timeout_secs.min(MAX_CONNECT_TIMEOUT_SECS)))
            .build()
            .map_err(|e| ZoomOAuthError::Configuration(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self {
            config,
            http,
            state_ttl_secs,
            state_store,
            token_store,
        })
    }

    /// 인가 요청 URL 생성
    ///
    /// 새 state를 만들어 프로필에 바인딩한 뒤
    /// `authorize_url?response_type=code&client_id=..&redirect_uri=..&state=..`를 반환합니다.
    pub async fn begin_authorization(&self, profile_id: &str) -> Result<String, ZoomOAuthError> {
        let state = generate_state();

        self.state_store
            .save(&state, &OAuthStateEntry::new(profile_id), self.state_ttl_secs)
            .await
            .map_err(|e| ZoomOAuthError::StateStoreFailure(e.to_string()))?;

        log::info!("Zoom 연결 시작: profile {}", profile_id);

        let request = AuthorizationRequest::new(&self.config.client_id, &self.config.redirect_uri, &state);
        Ok(request.to_url(&self.config.authorize_url()))
    }

    /// 콜백 처리: state 확인, 코드 교환, 토큰 저장
    ///
    /// # Errors
    ///
    /// * `ProviderDenied` - 콜백에 `error`가 있음 (네트워크 호출 없음)
    /// * `MissingAuthorizationCode` / `MissingState` - 파라미터 누락 (네트워크 호출 없음)
    /// * `InvalidState` - 알 수 없거나 만료/재사용된 state (네트워크 호출 없음)
    /// * `TokenExchangeFailure` - 네트워크 오류, 타임아웃, 2xx 이외 응답
    /// * `MalformedProviderResponse` - 필수 필드가 없는 토큰 응답
    /// * `PersistenceFailure` - 토큰 저장 실패
    pub async fn complete_authorization(&self, query: &ZoomCallbackQuery) -> Result<ZoomCredentials, ZoomOAuthError> {
        if let Some(error) = &query.error {
            let detail = match &query.error_description {
                Some(description) => format!("{}: {}", error, description),
                None => error.clone(),
            };
            return Err(ZoomOAuthError::ProviderDenied(detail));
        }

        let code = query.code.as_deref().ok_or(ZoomOAuthError::MissingAuthorizationCode)?;
        let state = query.state.as_deref().ok_or(ZoomOAuthError::MissingState)?;

        let entry = self.state_store
            .take(state)
            .await
            .map_err(|e| ZoomOAuthError::StateStoreFailure(e.to_string()))?
            .ok_or(ZoomOAuthError::InvalidState)?;

        let token = self
            .request_token(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.config.redirect_uri.as_str()),
            ])
            .await?;

        let credentials = self.token_store
            .save(&entry.profile_id, &token)
            .await
            .map_err(|e| ZoomOAuthError::PersistenceFailure(e.to_string()))?;

        log::info!("Zoom 계정 연결 완료: profile {}", entry.profile_id);

        Ok(credentials)
    }

    /// 저장된 refresh token으로 토큰 쌍 갱신
    ///
    /// Zoom은 갱신 시 refresh token도 새로 발급하므로 두 값을 모두 덮어씁니다.
    pub async fn refresh_credentials(&self, profile_id: &str) -> Result<ZoomCredentials, ZoomOAuthError> {
        let current = self.token_store
            .load(profile_id)
            .await
            .map_err(|e| ZoomOAuthError::PersistenceFailure(e.to_string()))?
            .ok_or(ZoomOAuthError::NotConnected)?;

        let token = self
            .request_token(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", current.refresh_token.as_str()),
            ])
            .await?;

        let credentials = self.token_store
            .save(profile_id, &token)
            .await
            .map_err(|e| ZoomOAuthError::PersistenceFailure(e.to_string()))?;

        log::info!("Zoom 토큰 갱신 완료: profile {}", profile_id);

        Ok(credentials)
    }

    pub async fn connection_status(&self, profile_id: &str) -> Result<ZoomConnectionStatus, ZoomOAuthError> {
        let credentials = self.token_store
            .load(profile_id)
            .await
            .map_err(|e| ZoomOAuthError::PersistenceFailure(e.to_string()))?;

        Ok(credentials
            .as_ref()
            .map(ZoomConnectionStatus::from)
            .unwrap_or_else(ZoomConnectionStatus::disconnected))
    }

    /// 연결 해제. 저장된 자격 증명이 있었는지 반환합니다.
    pub async fn disconnect(&self, profile_id: &str) -> Result<bool, ZoomOAuthError> {
        let removed = self.token_store
            .delete(profile_id)
            .await
            .map_err(|e| ZoomOAuthError::PersistenceFailure(e.to_string()))?;

        if removed {
            log::info!("Zoom 연결 해제: profile {}", profile_id);
        }

        Ok(removed)
    }

    pub fn success_redirect(&self) -> &str {
        &self.config.success_redirect
    }

    /// 실패 시 리다이렉트 URL (`zoom_error`, `message` 쿼리 포함)
    pub fn error_redirect_url(&self, err: &ZoomOAuthError) -> String {
        let base = &self.config.error_redirect;
        let separator = if base.contains('?') { '&' } else { '?' };

        format!(
            "{}{}zoom_error={}&message={}",
            base,
            separator,
            urlencoding::encode(err.code()),
            urlencoding::encode(err.user_message()),
        )
    }

    /// 토큰 엔드포인트 호출
    ///
    /// `Authorization: Basic` 헤더와 form 본문으로 POST 합니다.
    async fn request_token(&self, params: &[(&str, &str)]) -> Result<ZoomTokenResponse, ZoomOAuthError> {
        let response = self.http
            .post(self.config.token_url())
            .header(header::AUTHORIZATION, self.config.authorization_header())
            .form(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    log::error!("Zoom 토큰 요청 타임아웃 ({}초)", self.config.http_timeout_secs);
                    ZoomOAuthError::TokenExchangeFailure("request timed out".to_string())
                } else {
                    log::error!("Zoom 토큰 요청 실패: {}", e);
                    ZoomOAuthError::TokenExchangeFailure(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ZoomOAuthError::TokenExchangeFailure(format!("응답 본문 읽기 실패: {}", e)))?;

        if !status.is_success() {
            log::error!(
                "Zoom 토큰 엔드포인트 오류: status={}, body={}",
                status,
                String::from_utf8_lossy(&body)
            );
            return Err(ZoomOAuthError::TokenExchangeFailure(format!("status {}", status)));
        }

        ZoomTokenResponse::parse(&body).inspect_err(|e| {
            log::error!("Zoom 토큰 응답 형식 오류: {}", e);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{zoom_config, InMemoryStateStore, InMemoryTokenStore};
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service_with(
        config: ZoomOAuthConfig,
        states: Arc<InMemoryStateStore>,
        tokens: Arc<InMemoryTokenStore>,
    ) -> ZoomOAuthService {
        ZoomOAuthService::new(config, 600, states, tokens).unwrap()
    }

    #[test]
    fn test_error_redirect_url() {
        let mut config = zoom_config("http://localhost:1");
        let service = service_with(config.clone(), Arc::default(), Arc::default());

        let url = service.error_redirect_url(&ZoomOAuthError::InvalidState);
        assert!(url.starts_with("/?zoom_error=invalid_state&message="));
        assert_ne!(url, "/");

        config.error_redirect = "/dashboard?tab=zoom".to_string();
        let service = service_with(config, Arc::default(), Arc::default());

        let url = service.error_redirect_url(&ZoomOAuthError::TokenExchangeFailure("400".into()));
        assert!(url.starts_with("/dashboard?tab=zoom&zoom_error=token_exchange_failed&message="));
    }

    #[actix_web::test]
    async fn test_begin_authorization_binds_state_to_profile() {
        let states = Arc::new(InMemoryStateStore::default());
        let service = service_with(zoom_config("https://zoom.example"), states.clone(), Arc::default());

        let url = service.begin_authorization("user-1").await.unwrap();
        let parsed = reqwest::Url::parse(&url).unwrap();
        let state = parsed
            .query_pairs()
            .find(|(k, _)| k == "state")
            .map(|(_, v)| v.into_owned())
            .unwrap();

        assert_eq!(parsed.path(), "/oauth/authorize");
        assert_eq!(states.profile_for(&state).as_deref(), Some("user-1"));
    }

    #[actix_web::test]
    async fn test_missing_code_is_checked_before_state_is_consumed() {
        let states = Arc::new(InMemoryStateStore::default());
        states.insert("s1", "user-1");
        let service = service_with(zoom_config("http://localhost:1"), states.clone(), Arc::default());

        let query = ZoomCallbackQuery {
            state: Some("s1".to_string()),
            ..Default::default()
        };

        let err = service.complete_authorization(&query).await.unwrap_err();
        assert!(matches!(err, ZoomOAuthError::MissingAuthorizationCode));
        assert!(states.profile_for("s1").is_some());
    }

    #[actix_web::test]
    async fn test_refresh_rotates_tokens() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .and(body_string_contains("grant_type=refresh_token"))
            .and(body_string_contains("refresh_token=r1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "t2",
                "refresh_token": "r2",
                "expires_in": 3600
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tokens = Arc::new(InMemoryTokenStore::default());
        tokens.insert("user-1", "t1", "r1");
        let service = service_with(zoom_config(&server.uri()), Arc::default(), tokens.clone());

        let credentials = service.refresh_credentials("user-1").await.unwrap();
        assert_eq!(credentials.access_token, "t2");
        assert_eq!(tokens.get("user-1").unwrap().refresh_token, "r2");
        assert!(credentials.expires_at.is_some());
    }

    #[actix_web::test]
    async fn test_refresh_without_credentials_is_not_connected() {
        let service = service_with(zoom_config("http://localhost:1"), Arc::default(), Arc::default());

        let err = service.refresh_credentials("user-1").await.unwrap_err();
        assert!(matches!(err, ZoomOAuthError::NotConnected));
    }

    #[actix_web::test]
    async fn test_status_and_disconnect() {
        let tokens = Arc::new(InMemoryTokenStore::default());
        tokens.insert("user-1", "t1", "r1");
        let service = service_with(zoom_config("http://localhost:1"), Arc::default(), tokens.clone());

        assert!(service.connection_status("user-1").await.unwrap().connected);
        assert!(!service.connection_status("user-2").await.unwrap().connected);

        assert!(service.disconnect("user-1").await.unwrap());
        assert!(!service.disconnect("user-1").await.unwrap());
        assert!(!service.connection_status("user-1").await.unwrap().connected);
    }
}
