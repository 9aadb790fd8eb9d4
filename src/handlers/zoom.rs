//! Zoom OAuth HTTP Handlers
//!
//! - `GET    /zoom/oauth/init/`      인증 필요. Zoom 인증 페이지로 302
//! - `GET    /zoom/oauth/callback/`  Zoom이 호출. 결과 페이지로 302 (파라미터 누락은 400)
//! - `GET    /zoom/oauth/status/`    인증 필요. 연결 상태
//! - `POST   /zoom/oauth/refresh/`   인증 필요. 토큰 갱신
//! - `DELETE /zoom/oauth/`           인증 필요. 연결 해제
use actix_web::{delete, get, http::header, post, web, HttpResponse};
use serde_json::json;
use crate::{
    domain::{
        dto::zoom::{ZoomCallbackQuery, ZoomConnectionStatus},
        models::auth::AuthenticatedUser,
    },
    errors::AppError,
    services::zoom::ZoomOAuthService,
};

fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Zoom 연결 시작
///
/// # Endpoint
/// `GET /zoom/oauth/init/`
#[get("/init/")]
pub async fn zoom_oauth_init(
    user: AuthenticatedUser,
    zoom: web::Data<ZoomOAuthService>,
) -> Result<HttpResponse, AppError> {
    let authorize_url = zoom.begin_authorization(&user.user_id).await?;

    Ok(redirect_to(&authorize_url))
}

/// Zoom 콜백 처리
///
/// 사용자 브라우저가 도착하는 엔드포인트라 실패도 에러 페이지로의 리다이렉트로 응답합니다.
/// `code`/`state` 누락만 400 JSON입니다.
///
/// # Endpoint
/// `GET /zoom/oauth/callback/?code={code}&state={state}`
#[get("/zoom/oauth/callback/")]
pub async fn zoom_oauth_callback(
    query: web::Query<ZoomCallbackQuery>,
    zoom: web::Data<ZoomOAuthService>,
) -> HttpResponse {
    match zoom.complete_authorization(&query).await {
        Ok(credentials) => {
            log::info!("Zoom 콜백 성공: profile {}", credentials.profile_id);
            redirect_to(zoom.success_redirect())
        },
        Err(err) if err.is_client_error() => {
            log::warn!("Zoom 콜백 요청 오류: {}", err);
            HttpResponse::BadRequest().json(json!({
                "error": err.code(),
                "message": err.user_message(),
            }))
        },
        Err(err) => {
            log::warn!("Zoom 콜백 실패: {}", err);
            redirect_to(&zoom.error_redirect_url(&err))
        },
    }
}

#[get("/status/")]
pub async fn zoom_connection_status(
    user: AuthenticatedUser,
    zoom: web::Data<ZoomOAuthService>,
) -> Result<HttpResponse, AppError> {
    let status = zoom.connection_status(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(status))
}

/// # Endpoint
/// `POST /zoom/oauth/refresh/`
///
/// 연결된 계정이 없으면 404, Zoom 호출 실패는 502
#[post("/refresh/")]
pub async fn zoom_refresh_tokens(
    user: AuthenticatedUser,
    zoom: web::Data<ZoomOAuthService>,
) -> Result<HttpResponse, AppError> {
    let credentials = zoom.refresh_credentials(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(ZoomConnectionStatus::from(&credentials)))
}

#[delete("/")]
pub async fn zoom_disconnect(
    user: AuthenticatedUser,
    zoom: web::Data<ZoomOAuthService>,
) -> Result<HttpResponse, AppError> {
    zoom.disconnect(&user.user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
