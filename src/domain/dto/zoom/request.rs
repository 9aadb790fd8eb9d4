use serde::Deserialize;
use crate::utils::string_utils::deserialize_optional_string;

/// Zoom 인가 서버가 리다이렉트하며 붙여주는 콜백 쿼리
///
/// 모든 필드가 선택적입니다. 누락과 빈 값의 처리 순서는 콜백 핸들러가 결정합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ZoomCallbackQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub code: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub state: Option<String>,

    /// 사용자가 동의 화면에서 거부한 경우 (`access_denied` 등)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub error: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub error_description: Option<String>,
}
