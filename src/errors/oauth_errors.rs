//! Zoom OAuth 플로우 전용 에러
//!
//! 콜백 처리 중 발생하는 실패는 모두 이 타입으로 표현되며, 토큰 저장 이전에
//! 단락(short-circuit)됩니다. 핸들러는 [`ZoomOAuthError::is_client_error`]로
//! 400 JSON 응답과 에러 리다이렉트 중 하나를 선택합니다.

use thiserror::Error;
use crate::errors::errors::AppError;

#[derive(Error, Debug)]
pub enum ZoomOAuthError {
    /// 클라이언트 ID, 시크릿, 리다이렉트 URI 등 필수 설정 누락
    #[error("Zoom OAuth configuration error: {0}")]
    Configuration(String),

    /// 콜백에 `code` 파라미터가 없음
    #[error("authorization code is missing from the callback")]
    MissingAuthorizationCode,

    /// 콜백에 `state` 파라미터가 없음
    #[error("state is missing from the callback")]
    MissingState,

    /// 알 수 없거나 만료되었거나 이미 사용된 state
    #[error("state is unknown, expired or already used")]
    InvalidState,

    /// 사용자가 Zoom 동의 화면에서 거부했거나 프로바이더가 에러를 돌려줌
    #[error("Zoom denied the authorization request: {0}")]
    ProviderDenied(String),

    /// 토큰 엔드포인트 호출 실패 (네트워크, 타임아웃, 2xx 이외 응답)
    #[error("Zoom token exchange failed: {0}")]
    TokenExchangeFailure(String),

    /// 토큰 응답 JSON이 기대한 형태가 아님
    #[error("Zoom returned a malformed token response: {0}")]
    MalformedProviderResponse(String),

    /// 토큰을 프로필에 저장하지 못함
    #[error("failed to persist Zoom tokens: {0}")]
    PersistenceFailure(String),

    /// state 저장소 접근 실패
    #[error("OAuth state store failure: {0}")]
    StateStoreFailure(String),

    /// 해당 프로필에 연결된 Zoom 계정이 없음
    #[error("no Zoom account is connected to this profile")]
    NotConnected,
}

impl ZoomOAuthError {
    /// 에러 리다이렉트 쿼리와 JSON 응답에 쓰이는 안정적인 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            ZoomOAuthError::Configuration(_) => "configuration_error",
            ZoomOAuthError::MissingAuthorizationCode => "missing_authorization_code",
            ZoomOAuthError::MissingState => "missing_state",
            ZoomOAuthError::InvalidState => "invalid_state",
            ZoomOAuthError::ProviderDenied(_) => "access_denied",
            ZoomOAuthError::TokenExchangeFailure(_) => "token_exchange_failed",
            ZoomOAuthError::MalformedProviderResponse(_) => "malformed_provider_response",
            ZoomOAuthError::PersistenceFailure(_) => "persistence_failed",
            ZoomOAuthError::StateStoreFailure(_) => "state_store_failed",
            ZoomOAuthError::NotConnected => "not_connected",
        }
    }

    /// 최종 사용자에게 보여줄 수 있는 메시지
    ///
    /// 내부 에러 상세(응답 본문, DB 에러 등)는 포함하지 않습니다.
    pub fn user_message(&self) -> &'static str {
        match self {
            ZoomOAuthError::MissingAuthorizationCode => "Zoom did not return an authorization code. Please start the connection again.",
            ZoomOAuthError::MissingState => "The Zoom callback is missing its state parameter. Please start the connection again.",
            ZoomOAuthError::InvalidState => "This Zoom connection link has expired or was already used. Please start the connection again.",
            ZoomOAuthError::ProviderDenied(_) => "Zoom access was not granted.",
            ZoomOAuthError::TokenExchangeFailure(_) => "We could not complete the Zoom connection. Please try again.",
            ZoomOAuthError::MalformedProviderResponse(_) => "Zoom returned an unexpected response. Please try again later.",
            ZoomOAuthError::PersistenceFailure(_) | ZoomOAuthError::StateStoreFailure(_) => "We could not save your Zoom connection. Please try again later.",
            ZoomOAuthError::Configuration(_) => "Zoom integration is not configured.",
            ZoomOAuthError::NotConnected => "No Zoom account is connected.",
        }
    }

    /// 요청 자체가 잘못된 경우 (400 응답 대상)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ZoomOAuthError::MissingAuthorizationCode | ZoomOAuthError::MissingState
        )
    }
}

impl From<ZoomOAuthError> for AppError {
    fn from(e: ZoomOAuthError) -> Self {
        match e {
            ZoomOAuthError::Configuration(msg) => AppError::ConfigurationError(msg),
            ZoomOAuthError::MissingAuthorizationCode | ZoomOAuthError::MissingState => {
                AppError::ValidationError(e.to_string())
            }
            ZoomOAuthError::InvalidState | ZoomOAuthError::ProviderDenied(_) => {
                AppError::AuthenticationError(e.to_string())
            }
            ZoomOAuthError::TokenExchangeFailure(_) | ZoomOAuthError::MalformedProviderResponse(_) => {
                AppError::ExternalServiceError(e.to_string())
            }
            ZoomOAuthError::PersistenceFailure(msg) => AppError::DatabaseError(msg),
            ZoomOAuthError::StateStoreFailure(msg) => AppError::RedisError(msg),
            ZoomOAuthError::NotConnected => AppError::NotFound(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_only_missing_parameters_are_client_errors() {
        assert!(ZoomOAuthError::MissingAuthorizationCode.is_client_error());
        assert!(ZoomOAuthError::MissingState.is_client_error());

        assert!(!ZoomOAuthError::InvalidState.is_client_error());
        assert!(!ZoomOAuthError::TokenExchangeFailure("400".into()).is_client_error());
        assert!(!ZoomOAuthError::MalformedProviderResponse("eof".into()).is_client_error());
    }

    #[test]
    fn test_user_message_hides_internal_details() {
        let error = ZoomOAuthError::TokenExchangeFailure("invalid_grant: secret=abc".into());

        assert!(!error.user_message().contains("secret"));
        assert_eq!(error.code(), "token_exchange_failed");
    }

    #[test]
    fn test_conversion_into_app_error_status() {
        let cases = [
            (ZoomOAuthError::MissingAuthorizationCode, StatusCode::BAD_REQUEST),
            (ZoomOAuthError::InvalidState, StatusCode::UNAUTHORIZED),
            (ZoomOAuthError::TokenExchangeFailure("timeout".into()), StatusCode::BAD_GATEWAY),
            (ZoomOAuthError::MalformedProviderResponse("eof".into()), StatusCode::BAD_GATEWAY),
            (ZoomOAuthError::NotConnected, StatusCode::NOT_FOUND),
            (ZoomOAuthError::PersistenceFailure("down".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            let app_error: AppError = error.into();
            assert_eq!(app_error.error_response().status(), expected);
        }
    }
}
