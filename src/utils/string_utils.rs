//! # 문자열 유틸리티
//!
//! 요청 DTO의 문자열 필드를 정리하는 공통 함수들입니다.

use serde::Deserialize;
use crate::errors::AppError;

/// 필수 문자열을 trim 하여 반환합니다. 비어 있으면 `ValidationError`.
///
/// ```rust,ignore
/// assert_eq!(require_trimmed("  Ana  ", "name").unwrap(), "Ana");
/// assert!(require_trimmed("   ", "name").is_err());
/// ```
pub fn require_trimmed(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 빈 문자열/공백뿐인 값은 None, 나머지는 trim 한 값
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// `#[serde(default, deserialize_with = "deserialize_optional_string")]` 용 역직렬화 함수
///
/// JSON 본문과 쿼리 문자열 모두에서 `""`, `"   "`, `null`을 None으로 취급합니다.
/// 콜백 쿼리의 `code=` 처럼 값 없이 전달된 파라미터도 누락과 같게 처리됩니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Query {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        code: Option<String>,
    }

    #[test]
    fn test_require_trimmed() {
        assert_eq!(require_trimmed("  Ana  ", "name").unwrap(), "Ana");
        assert!(matches!(require_trimmed("\t\n", "name"), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  abc ".to_string())), Some("abc".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_blank_json_field_becomes_none() {
        let parsed: Query = serde_json::from_str(r#"{"code": "  "}"#).unwrap();
        assert_eq!(parsed.code, None);

        let parsed: Query = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(parsed.code, None);

        let parsed: Query = serde_json::from_str(r#"{"code": " abc123 "}"#).unwrap();
        assert_eq!(parsed.code.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_blank_query_parameter_becomes_none() {
        let query = actix_web::web::Query::<Query>::from_query("code=&state=x").unwrap();
        assert_eq!(query.code, None);

        let query = actix_web::web::Query::<Query>::from_query("code=abc123").unwrap();
        assert_eq!(query.code.as_deref(), Some("abc123"));
    }
}
