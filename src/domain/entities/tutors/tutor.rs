use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::entities::tutors::choices::{Country, Expertise, Language};

/// 튜터 프로필 엔티티 (`tutors` 컬렉션)
///
/// 계정(`user_id`)과 1:1 관계이며, 승인(`is_approved`) 전까지는 공개 목록에 노출되더라도
/// 예약을 받을 수 없습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tutor {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 프로필을 소유한 계정 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub name: String,
    pub email: String,
    pub language: Language,
    #[serde(default)]
    pub expertise: Expertise,
    /// 시간당 수업료
    pub price: f64,
    pub description: String,
    pub country: Country,
    pub is_native: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub online: bool,
    pub is_approved: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Tutor {
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 요청한 사용자가 이 프로필을 수정/삭제할 수 있는지
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id.as_deref() == Some(user_id)
    }
}

/// 소수점 둘째 자리까지 반올림
pub fn round_price(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tutor(user_id: Option<&str>) -> Tutor {
        let now = DateTime::now();
        Tutor {
            id: Some(ObjectId::new()),
            user_id: user_id.map(str::to_string),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            language: Language::Spanish,
            expertise: Expertise::NativeSpeaker,
            price: 25.0,
            description: "Conversational Spanish".to_string(),
            country: Country::Spain,
            is_native: true,
            image_url: None,
            online: false,
            is_approved: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_ownership() {
        assert!(tutor(Some("user-1")).is_owned_by("user-1"));
        assert!(!tutor(Some("user-1")).is_owned_by("user-2"));
        assert!(!tutor(None).is_owned_by("user-1"));
    }

    #[test]
    fn test_round_price() {
        assert_eq!(round_price(19.999), 20.0);
        assert_eq!(round_price(12.344), 12.34);
        assert_eq!(round_price(0.0), 0.0);
    }

    #[test]
    fn test_missing_expertise_defaults_on_deserialize() {
        let json = serde_json::json!({
            "name": "Kenji",
            "email": "kenji@example.com",
            "language": "Japanese",
            "price": 30.0,
            "description": "JLPT prep",
            "country": "Japan",
            "is_native": true,
            "online": true,
            "is_approved": true,
            "created_at": { "$date": { "$numberLong": "0" } },
            "updated_at": { "$date": { "$numberLong": "0" } }
        });

        let tutor: Tutor = mongodb::bson::from_bson(mongodb::bson::to_bson(&json).unwrap()).unwrap();
        assert_eq!(tutor.expertise, Expertise::CommunityInstructor);
        assert!(tutor.id.is_none());
    }
}
