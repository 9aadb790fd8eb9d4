//! 튜터 프로필의 선택형 필드
//!
//! 저장/직렬화 값은 각 변형의 키 문자열이며, 화면 표시용 이름은 `display_name()`으로 얻습니다.

use serde::{Deserialize, Serialize};

/// 강의 언어
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    English,
    Spanish,
    French,
    German,
    Japanese,
    Korean,
    Mandarin,
    Arabic,
    Russian,
    Italian,
    Portuguese,
    Hindi,
    Swedish,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
            Language::Mandarin => "Mandarin",
            Language::Arabic => "Arabic",
            Language::Russian => "Russian",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
            Language::Hindi => "Hindi",
            Language::Swedish => "Swedish",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Mandarin => "Mandarin Chinese",
            other => other.as_str(),
        }
    }
}

/// 튜터 전문성 등급
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Expertise {
    #[default]
    #[serde(rename = "Community Instructor")]
    CommunityInstructor,
    #[serde(rename = "Native Speaker")]
    NativeSpeaker,
    #[serde(rename = "Certified Educator")]
    CertifiedEducator,
    #[serde(rename = "Language Specialist")]
    LanguageSpecialist,
    #[serde(rename = "ESL Specialist")]
    EslSpecialist,
}

impl Expertise {
    pub fn as_str(&self) -> &'static str {
        match self {
            Expertise::CommunityInstructor => "Community Instructor",
            Expertise::NativeSpeaker => "Native Speaker",
            Expertise::CertifiedEducator => "Certified Educator",
            Expertise::LanguageSpecialist => "Language Specialist",
            Expertise::EslSpecialist => "ESL Specialist",
        }
    }
}

/// 튜터 거주 국가
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "USA")]
    Usa,
    Spain,
    France,
    Germany,
    Japan,
    #[serde(rename = "South Korea")]
    SouthKorea,
    China,
    Egypt,
    Russia,
    Italy,
    Portugal,
    India,
    #[serde(rename = "United Kingdom")]
    UnitedKingdom,
    Canada,
    Australia,
    Mexico,
}

impl Country {
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Usa => "USA",
            Country::Spain => "Spain",
            Country::France => "France",
            Country::Germany => "Germany",
            Country::Japan => "Japan",
            Country::SouthKorea => "South Korea",
            Country::China => "China",
            Country::Egypt => "Egypt",
            Country::Russia => "Russia",
            Country::Italy => "Italy",
            Country::Portugal => "Portugal",
            Country::India => "India",
            Country::UnitedKingdom => "United Kingdom",
            Country::Canada => "Canada",
            Country::Australia => "Australia",
            Country::Mexico => "Mexico",
        }
    }
}
