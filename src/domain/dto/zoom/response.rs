//! Zoom OAuth 응답 DTO
//!
//! 토큰 엔드포인트 응답은 먼저 느슨한 [`RawZoomTokenResponse`]로 받은 뒤
//! [`ZoomTokenResponse`]로 변환하며 필수 필드를 검사합니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::zoom::ZoomCredentials;
use crate::errors::ZoomOAuthError;

/// 토큰 엔드포인트의 JSON 본문 그대로
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawZoomTokenResponse {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<i64>,
    pub scope: Option<String>,
}

/// 검증된 토큰 응답
///
/// `access_token`과 `refresh_token`은 비어 있지 않음이 보장됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoomTokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: Option<i64>,
    pub scope: Option<String>,
}

impl ZoomTokenResponse {
    /// 응답 본문을 파싱하고 필수 필드를 검증합니다.
    pub fn parse(body: &[u8]) -> Result<Self, ZoomOAuthError> {
        let raw: RawZoomTokenResponse = serde_json::from_slice(body)
            .map_err(|e| ZoomOAuthError::MalformedProviderResponse(format!("JSON 파싱 실패: {}", e)))?;

        Self::try_from(raw)
    }

    /// 현재 시각 기준 만료 시각
    ///
    /// 표현할 수 없을 만큼 큰 `expires_in`은 만료 없음으로 취급합니다.
    pub fn expires_at(&self) -> Option<DateTime> {
        let now = DateTime::now().timestamp_millis();
        self.expires_in
            .filter(|secs| *secs > 0)
            .and_then(|secs| secs.checked_mul(1000))
            .and_then(|millis| now.checked_add(millis))
            .map(DateTime::from_millis)
    }
}

impl TryFrom<RawZoomTokenResponse> for ZoomTokenResponse {
    type Error = ZoomOAuthError;

    fn try_from(raw: RawZoomTokenResponse) -> Result<Self, Self::Error> {
        let access_token = non_empty(raw.access_token)
            .ok_or_else(|| ZoomOAuthError::MalformedProviderResponse("access_token 누락".to_string()))?;
        let refresh_token = non_empty(raw.refresh_token)
            .ok_or_else(|| ZoomOAuthError::MalformedProviderResponse("refresh_token 누락".to_string()))?;

        Ok(Self {
            access_token,
            refresh_token,
            token_type: non_empty(raw.token_type).unwrap_or_else(|| "bearer".to_string()),
            expires_in: raw.expires_in,
            scope: non_empty(raw.scope),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// `GET /zoom/oauth/status/` 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoomConnectionStatus {
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired: Option<bool>,
}

impl ZoomConnectionStatus {
    pub fn disconnected() -> Self {
        Self {
            connected: false,
            expires_at: None,
            scope: None,
            expired: None,
        }
    }
}

impl From<&ZoomCredentials> for ZoomConnectionStatus {
    fn from(credentials: &ZoomCredentials) -> Self {
        Self {
            connected: true,
            expires_at: credentials
                .expires_at
                .and_then(|at| at.try_to_rfc3339_string().ok()),
            scope: credentials.scope.clone(),
            expired: Some(credentials.is_expired()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_response() {
        let token = ZoomTokenResponse::parse(br#"{"access_token":"t1","refresh_token":"r1"}"#).unwrap();

        assert_eq!(token.access_token, "t1");
        assert_eq!(token.refresh_token, "r1");
        assert_eq!(token.token_type, "bearer");
        assert!(token.expires_at().is_none());
    }

    #[test]
    fn test_parse_full_response() {
        let body = br#"{
            "access_token": "t1",
            "token_type": "bearer",
            "refresh_token": "r1",
            "expires_in": 3599,
            "scope": "meeting:write user:read"
        }"#;

        let token = ZoomTokenResponse::parse(body).unwrap();
        assert_eq!(token.scope.as_deref(), Some("meeting:write user:read"));
        assert!(token.expires_at().unwrap() > DateTime::now());
    }

    #[test]
    fn test_missing_or_empty_required_fields_are_malformed() {
        for body in [
            &br#"{"refresh_token":"r1"}"#[..],
            br#"{"access_token":"t1"}"#,
            br#"{"access_token":"","refresh_token":"r1"}"#,
            br#"{"access_token":"t1","refresh_token":"  "}"#,
            br#"<html>gateway error</html>"#,
        ] {
            let err = ZoomTokenResponse::parse(body).unwrap_err();
            assert!(matches!(err, ZoomOAuthError::MalformedProviderResponse(_)), "body: {:?}", body);
        }
    }

    #[test]
    fn test_huge_expires_in_means_no_expiry() {
        for body in [
            &br#"{"access_token":"t1","refresh_token":"r1","expires_in":9223372036854775807}"#[..],
            br#"{"access_token":"t1","refresh_token":"r1","expires_in":9223372036854775}"#,
        ] {
            let token = ZoomTokenResponse::parse(body).unwrap();
            assert!(token.expires_at().is_none(), "body: {:?}", body);
        }
    }
}
