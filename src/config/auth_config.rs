//! # Authentication Configuration Module
//!
//! Zoom OAuth 클라이언트, JWT 검증, OAuth 세션 등 인증 관련 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### Zoom OAuth 설정
//! ```bash
//! export ZOOM_CLIENT_ID="your-zoom-client-id"
//! export ZOOM_REDIRECT_URI="https://yourdomain.com/zoom/oauth/callback/"
//!
//! # 둘 중 하나
//! export ZOOM_CLIENT_SECRET="your-zoom-client-secret"
//! export ZOOM_AUTH_HEADER="base64(client_id:client_secret)"
//! ```
//!
//! ### 선택 설정
//! ```bash
//! export ZOOM_OAUTH_BASE_URL="https://zoom.us"
//! export ZOOM_HTTP_TIMEOUT_SECS="10"
//! export ZOOM_SUCCESS_REDIRECT="/"
//! export ZOOM_ERROR_REDIRECT="/"
//! export OAUTH_SESSION_TIMEOUT_MINUTES="10"
//! export JWT_SECRET="your-super-secret-jwt-key"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{JwtConfig, ZoomOAuthConfig};
//!
//! // 기동 시 한 번만 로드하고 서비스 생성자에 전달
//! let zoom_config = ZoomOAuthConfig::from_env()?;
//! let secret = JwtConfig::secret();
//! ```

use std::env;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use crate::errors::errors::AppError;

const DEFAULT_ZOOM_BASE_URL: &str = "https://zoom.us";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Zoom OAuth 2.0 클라이언트 설정
///
/// 프로세스 전역 상태를 직접 읽지 않도록, 기동 시 한 번 만들어
/// [`ZoomOAuthService`](crate::services::zoom::ZoomOAuthService) 생성자에 넘깁니다.
///
/// ## 보안 고려사항
///
/// - `basic_credentials`는 클라이언트 시크릿과 동등한 비밀 값입니다. 로그에 출력하지 마세요.
/// - 프로덕션에서는 HTTPS redirect URI만 사용하세요.
#[derive(Clone)]
pub struct ZoomOAuthConfig {
    /// Zoom 앱의 Client ID
    pub client_id: String,
    /// Zoom 앱에 등록된 콜백 URI
    pub redirect_uri: String,
    /// `base64(client_id:client_secret)` - `Authorization: Basic` 헤더 값
    pub basic_credentials: String,
    /// 인증/토큰 엔드포인트의 기준 URL (기본값 `https://zoom.us`)
    pub base_url: String,
    /// 토큰 엔드포인트 호출 타임아웃 (초)
    pub http_timeout_secs: u64,
    /// 연결 성공 후 이동할 경로
    pub success_redirect: String,
    /// 연결 실패 시 이동할 경로 (`zoom_error`, `message` 쿼리가 붙음)
    pub error_redirect: String,
}

impl std::fmt::Debug for ZoomOAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZoomOAuthConfig")
            .field("client_id", &self.client_id)
            .field("redirect_uri", &self.redirect_uri)
            .field("basic_credentials", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("success_redirect", &self.success_redirect)
            .field("error_redirect", &self.error_redirect)
            .finish()
    }
}

impl ZoomOAuthConfig {
    /// 환경 변수에서 Zoom OAuth 설정을 로드합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - `ZOOM_CLIENT_ID`, `ZOOM_REDIRECT_URI`가 없거나
    ///   `ZOOM_AUTH_HEADER`와 `ZOOM_CLIENT_SECRET`이 모두 없는 경우.
    ///   기동 시점의 치명적 에러로 취급해야 합니다.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 키 조회 함수로 설정을 구성합니다.
    ///
    /// 빈 문자열은 설정되지 않은 것으로 취급합니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let require = |key: &str| {
            get(key).ok_or_else(|| AppError::ConfigurationError(format!("{} must be set", key)))
        };

        let client_id = require("ZOOM_CLIENT_ID")?;
        let redirect_uri = require("ZOOM_REDIRECT_URI")?;

        let basic_credentials = match (get("ZOOM_AUTH_HEADER"), get("ZOOM_CLIENT_SECRET")) {
            (Some(header), _) => header
                .strip_prefix("Basic ")
                .map(|h| h.trim().to_string())
                .unwrap_or(header),
            (None, Some(secret)) => Self::encode_basic_credentials(&client_id, &secret),
            (None, None) => {
                return Err(AppError::ConfigurationError(
                    "ZOOM_AUTH_HEADER or ZOOM_CLIENT_SECRET must be set".to_string(),
                ));
            }
        };

        let http_timeout_secs = match get("ZOOM_HTTP_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| AppError::ConfigurationError(format!(
                    "ZOOM_HTTP_TIMEOUT_SECS must be a positive integer, got '{}'", raw
                )))?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        let base_url = get("ZOOM_OAUTH_BASE_URL")
            .unwrap_or_else(|| DEFAULT_ZOOM_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client_id,
            redirect_uri,
            basic_credentials,
            base_url,
            http_timeout_secs,
            success_redirect: get("ZOOM_SUCCESS_REDIRECT").unwrap_or_else(|| "/".to_string()),
            error_redirect: get("ZOOM_ERROR_REDIRECT").unwrap_or_else(|| "/".to_string()),
        })
    }

    /// `base64(client_id:client_secret)`을 계산합니다.
    pub fn encode_basic_credentials(client_id: &str, client_secret: &str) -> String {
        STANDARD.encode(format!("{}:{}", client_id, client_secret))
    }

    /// 사용자를 보낼 Zoom 인증 페이지 URL
    pub fn authorize_url(&self) -> String {
        format!("{}/oauth/authorize", self.base_url)
    }

    /// 서버 간 토큰 교환 엔드포인트 URL
    pub fn token_url(&self) -> String {
        format!("{}/oauth/token", self.base_url)
    }

    /// 토큰 엔드포인트 호출에 쓰는 `Authorization` 헤더 값
    pub fn authorization_header(&self) -> String {
        format!("Basic {}", self.basic_credentials)
    }
}

/// JSON Web Token (JWT) 검증 설정
///
/// 이 서비스는 인증 서비스가 발급한 HS256 액세스 토큰을 검증해
/// 현재 사용자(튜터)를 식별합니다.
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명 검증에 사용할 비밀키를 반환합니다.
    ///
    /// 환경 변수가 설정되지 않은 경우 개발용 기본값을 사용하며 경고 로그가 출력됩니다.
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    /// JWT 액세스 토큰의 만료 시간 (시간 단위, 기본값 24)
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }
}

/// OAuth 일반 설정
///
/// ## OAuth State 매개변수
///
/// state는 인증을 시작한 프로필과 콜백을 묶는 일회용 값입니다.
/// 이 설정은 state가 유효한 최대 시간을 정합니다.
pub struct OAuthConfig;

impl OAuthConfig {
    /// OAuth 세션 타임아웃을 분 단위로 반환합니다. (기본값 10분)
    pub fn session_timeout_minutes() -> i64 {
        env::var("OAUTH_SESSION_TIMEOUT_MINUTES")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .ok()
            .filter(|m: &i64| *m > 0)
            .unwrap_or(10)
    }

    /// OAuth 세션 타임아웃 (초)
    pub fn session_timeout_secs() -> u64 {
        Self::session_timeout_minutes() as u64 * 60
    }
}
