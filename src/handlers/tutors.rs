//! # Tutor HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 인증 | 상태 코드 |
//! |--------|------|------|------|-----------|
//! | `GET` | `/api/tutors/` | 목록 (`language`, `country`, `online` 필터) | - | 200 OK |
//! | `GET` | `/api/tutors/{id}/` | 단건 조회 | - | 200 OK |
//! | `POST` | `/api/tutors/` | 내 튜터 프로필 생성 | 필요 | 201 Created |
//! | `PUT` | `/api/tutors/{id}/` | 수정 (소유자/관리자) | 필요 | 200 OK |
//! | `PATCH` | `/api/tutors/{id}/` | 부분 수정, `PUT`과 동일 | 필요 | 200 OK |
//! | `DELETE` | `/api/tutors/{id}/` | 삭제 (소유자/관리자) | 필요 | 204 No Content |

use actix_web::{delete, get, patch, post, put, web, HttpResponse};
use crate::{
    domain::{
        dto::tutors::{CreateTutorRequest, TutorListQuery, UpdateTutorRequest},
        models::auth::AuthenticatedUser,
    },
    errors::AppError,
    services::tutors::TutorService,
};

/// 튜터 목록 조회
///
/// # 사용 예제
///
/// ```bash
/// curl "http://localhost:8080/api/tutors/?language=Spanish&online=true"
/// ```
#[get("/")]
pub async fn list_tutors(
    query: web::Query<TutorListQuery>,
    tutors: web::Data<TutorService>,
) -> Result<HttpResponse, AppError> {
    let items = tutors.list(&query).await?;
    Ok(HttpResponse::Ok().json(items))
}

#[get("/{id}/")]
pub async fn get_tutor(
    id: web::Path<String>,
    tutors: web::Data<TutorService>,
) -> Result<HttpResponse, AppError> {
    let tutor = tutors.get(&id).await?;
    Ok(HttpResponse::Ok().json(tutor))
}

/// 튜터 프로필 생성
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "Sofia Rossi",
///   "email": "sofia@example.com",
///   "language": "Italian",
///   "expertise": "Language Specialist",
///   "price": 18.5,
///   "description": "Italian for travellers",
///   "country": "Italy",
///   "is_native": true,
///   "online": true
/// }
/// ```
///
/// ## 실패 사례
///
/// - 400 검증 실패
/// - 401 인증 없음
/// - 409 이메일 중복, 이미 프로필이 있는 계정
#[post("/")]
pub async fn create_tutor(
    user: AuthenticatedUser,
    payload: web::Json<CreateTutorRequest>,
    tutors: web::Data<TutorService>,
) -> Result<HttpResponse, AppError> {
    let created = tutors.create(&user, payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

/// 튜터 프로필 수정
///
/// 본문에 있는 필드만 바뀝니다. 이름/소개글은 공백만으로 채울 수 없습니다.
#[put("/{id}/")]
pub async fn update_tutor(
    user: AuthenticatedUser,
    id: web::Path<String>,
    payload: web::Json<UpdateTutorRequest>,
    tutors: web::Data<TutorService>,
) -> Result<HttpResponse, AppError> {
    apply_update(&user, &id, payload.into_inner(), &tutors).await
}

#[patch("/{id}/")]
pub async fn partial_update_tutor(
    user: AuthenticatedUser,
    id: web::Path<String>,
    payload: web::Json<UpdateTutorRequest>,
    tutors: web::Data<TutorService>,
) -> Result<HttpResponse, AppError> {
    apply_update(&user, &id, payload.into_inner(), &tutors).await
}

async fn apply_update(
    user: &AuthenticatedUser,
    id: &str,
    request: UpdateTutorRequest,
    tutors: &TutorService,
) -> Result<HttpResponse, AppError> {
    let updated = tutors.update(user, id, request).await?;
    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/{id}/")]
pub async fn delete_tutor(
    user: AuthenticatedUser,
    id: web::Path<String>,
    tutors: web::Data<TutorService>,
) -> Result<HttpResponse, AppError> {
    tutors.delete(&user, &id).await?;
    Ok(HttpResponse::NoContent().finish())
}
