//! 튜터 API 요청 DTO
//!
//! 생성/수정 요청의 형식 검증은 `validator`로, 이메일 중복 같은 저장소 의존 규칙은
//! 서비스 계층에서 처리합니다.

use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::tutors::{Country, Expertise, Language};
use crate::utils::string_utils::deserialize_optional_string;

/// 튜터 프로필 생성 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTutorRequest {
    #[validate(length(min = 1, max = 100, message = "이름은 1-100자 사이여야 합니다"))]
    pub name: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    pub language: Language,

    #[serde(default)]
    pub expertise: Expertise,

    /// 시간당 수업료 (소수점 둘째 자리까지 저장)
    #[validate(range(min = 0.0, max = 9999.99, message = "가격은 0 이상 10000 미만이어야 합니다"))]
    pub price: f64,

    #[validate(length(min = 1, max = 2000, message = "소개글은 1-2000자 사이여야 합니다"))]
    pub description: String,

    pub country: Country,

    #[serde(default)]
    pub is_native: bool,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(url(message = "이미지 URL 형식이 올바르지 않습니다"))]
    pub image_url: Option<String>,

    #[serde(default)]
    pub online: bool,
}

/// 튜터 프로필 수정 요청
///
/// 전달된 필드만 갱신합니다. 승인 여부(`is_approved`)는 관리자만 바꿀 수 있어
/// 이 DTO에 포함되지 않습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTutorRequest {
    #[validate(length(min = 1, max = 100, message = "이름은 1-100자 사이여야 합니다"))]
    pub name: Option<String>,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    pub language: Option<Language>,
    pub expertise: Option<Expertise>,

    #[validate(range(min = 0.0, max = 9999.99, message = "가격은 0 이상 10000 미만이어야 합니다"))]
    pub price: Option<f64>,

    #[validate(length(min = 1, max = 2000, message = "소개글은 1-2000자 사이여야 합니다"))]
    pub description: Option<String>,

    pub country: Option<Country>,
    pub is_native: Option<bool>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(url(message = "이미지 URL 형식이 올바르지 않습니다"))]
    pub image_url: Option<String>,

    pub online: Option<bool>,
}

impl UpdateTutorRequest {
    pub fn is_empty(&self) -> bool {
        self.to_set_document().is_empty()
    }

    /// `$set`에 들어갈 필드 문서. `updated_at`은 저장소에서 추가합니다.
    pub fn to_set_document(&self) -> Document {
        let mut set = Document::new();

        if let Some(name) = &self.name {
            set.insert("name", name.trim());
        }
        if let Some(email) = &self.email {
            set.insert("email", email.trim().to_lowercase());
        }
        if let Some(language) = self.language {
            set.insert("language", language.as_str());
        }
        if let Some(expertise) = self.expertise {
            set.insert("expertise", expertise.as_str());
        }
        if let Some(price) = self.price {
            set.insert("price", crate::domain::entities::tutors::round_price(price));
        }
        if let Some(description) = &self.description {
            set.insert("description", description.trim());
        }
        if let Some(country) = self.country {
            set.insert("country", country.as_str());
        }
        if let Some(is_native) = self.is_native {
            set.insert("is_native", is_native);
        }
        if let Some(image_url) = &self.image_url {
            set.insert("image_url", image_url.as_str());
        }
        if let Some(online) = self.online {
            set.insert("online", online);
        }

        set
    }
}

/// 튜터 목록 필터 (`GET /api/tutors/?language=Korean&online=true`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TutorListQuery {
    pub language: Option<Language>,
    pub country: Option<Country>,
    pub online: Option<bool>,
}

impl TutorListQuery {
    pub fn to_filter(&self) -> Document {
        let mut filter = doc! {};

        if let Some(language) = self.language {
            filter.insert("language", language.as_str());
        }
        if let Some(country) = self.country {
            filter.insert("country", country.as_str());
        }
        if let Some(online) = self.online {
            filter.insert("online", online);
        }

        filter
    }
}
