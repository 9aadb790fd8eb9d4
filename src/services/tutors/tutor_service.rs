//! 튜터 프로필 비즈니스 로직
//!
//! 형식 검증은 DTO의 `validator` 규칙이, 중복/소유권 규칙은 이 서비스가 담당합니다.

use std::sync::Arc;
use mongodb::bson::DateTime;
use validator::Validate;
use crate::{
    domain::{
        dto::tutors::{CreateTutorRequest, TutorListQuery, TutorResponse, UpdateTutorRequest},
        entities::tutors::{round_price, Tutor},
        models::auth::AuthenticatedUser,
    },
    errors::AppError,
    repositories::tutors::TutorStore,
    utils::string_utils::require_trimmed,
};

pub struct TutorService {
    repo: Arc<dyn TutorStore>,
}

impl TutorService {
    pub fn new(repo: Arc<dyn TutorStore>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, query: &TutorListQuery) -> Result<Vec<TutorResponse>, AppError> {
        let tutors = self.repo.find_all(query).await?;
        Ok(tutors.into_iter().map(TutorResponse::from).collect())
    }

    pub async fn get(&self, id: &str) -> Result<TutorResponse, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .map(TutorResponse::from)
            .ok_or_else(|| AppError::NotFound("튜터를 찾을 수 없습니다".to_string()))
    }

    /// 튜터 프로필 생성
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 형식 검증 실패
    /// * `ConflictError` - 이메일 중복, 또는 이미 프로필이 있는 계정
    pub async fn create(&self, user: &AuthenticatedUser, request: CreateTutorRequest) -> Result<TutorResponse, AppError> {
        request.validate()?;
        let tutor = build_tutor(&user.user_id, request)?;

        if self.repo.find_by_email(&tutor.email).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        if self.repo.find_by_user_id(&user.user_id).await?.is_some() {
            return Err(AppError::ConflictError("이미 튜터 프로필이 등록된 계정입니다".to_string()));
        }

        let created = self.repo.create(tutor).await?;
        log::info!("튜터 프로필 생성: {} (user {})", created.id_string().unwrap_or_default(), user.user_id);

        Ok(TutorResponse::from(created))
    }

    pub async fn update(
        &self,
        user: &AuthenticatedUser,
        id: &str,
        request: UpdateTutorRequest,
    ) -> Result<TutorResponse, AppError> {
        request.validate()?;

        if request.is_empty() {
            return Err(AppError::ValidationError("수정할 항목이 없습니다".to_string()));
        }
        if let Some(name) = &request.name {
            require_trimmed(name, "이름")?;
        }
        if let Some(description) = &request.description {
            require_trimmed(description, "소개글")?;
        }

        let tutor = self.find_existing(id).await?;
        ensure_can_modify(user, &tutor)?;

        if let Some(email) = request.email.as_deref().map(|e| e.trim().to_lowercase()) {
            if email != tutor.email && self.repo.find_by_email(&email).await?.is_some() {
                return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
            }
        }

        self.repo
            .update(id, &request)
            .await?
            .map(TutorResponse::from)
            .ok_or_else(|| AppError::NotFound("튜터를 찾을 수 없습니다".to_string()))
    }

    pub async fn delete(&self, user: &AuthenticatedUser, id: &str) -> Result<(), AppError> {
        let tutor = self.find_existing(id).await?;
        ensure_can_modify(user, &tutor)?;

        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound("튜터를 찾을 수 없습니다".to_string()));
        }

        log::info!("튜터 프로필 삭제: {} (by {})", id, user.user_id);
        Ok(())
    }

    async fn find_existing(&self, id: &str) -> Result<Tutor, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("튜터를 찾을 수 없습니다".to_string()))
    }
}

/// 소유자 또는 관리자만 수정/삭제 가능
pub fn ensure_can_modify(user: &AuthenticatedUser, tutor: &Tutor) -> Result<(), AppError> {
    if user.is_admin() || tutor.is_owned_by(&user.user_id) {
        Ok(())
    } else {
        Err(AppError::AuthorizationError("이 튜터 프로필을 수정할 권한이 없습니다".to_string()))
    }
}

/// 요청으로 새 엔티티를 만듭니다. 승인 전 상태로 시작합니다.
fn build_tutor(user_id: &str, request: CreateTutorRequest) -> Result<Tutor, AppError> {
    let now = DateTime::now();

    Ok(Tutor {
        id: None,
        user_id: Some(user_id.to_string()),
        name: require_trimmed(&request.name, "이름")?,
        email: require_trimmed(&request.email, "이메일")?.to_lowercase(),
        language: request.language,
        expertise: request.expertise,
        price: round_price(request.price),
        description: require_trimmed(&request.description, "소개글")?,
        country: request.country,
        is_native: request.is_native,
        image_url: request.image_url,
        online: request.online,
        is_approved: false,
        created_at: now,
        updated_at: now,
    })
}
