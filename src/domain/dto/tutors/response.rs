use serde::{Deserialize, Serialize};
use crate::domain::entities::tutors::{Country, Expertise, Language, Tutor};

/// 튜터 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutorResponse {
    pub id: String,
    pub user_id: Option<String>,
    pub name: String,
    pub email: String,
    pub language: Language,
    /// 화면 표시용 언어 이름
    pub language_name: String,
    pub expertise: Expertise,
    pub price: f64,
    pub description: String,
    pub country: Country,
    pub is_native: bool,
    pub image_url: Option<String>,
    pub online: bool,
    pub is_approved: bool,
    /// RFC 3339
    pub created_at: String,
    pub updated_at: String,
}

impl From<Tutor> for TutorResponse {
    fn from(tutor: Tutor) -> Self {
        let Tutor {
            id,
            user_id,
            name,
            email,
            language,
            expertise,
            price,
            description,
            country,
            is_native,
            image_url,
            online,
            is_approved,
            created_at,
            updated_at,
        } = tutor;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id,
            name,
            email,
            language_name: language.display_name().to_string(),
            language,
            expertise,
            price,
            description,
            country,
            is_native,
            image_url,
            online,
            is_approved,
            created_at: created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}
