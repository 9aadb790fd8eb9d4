//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 사용자 정보를 추출합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::models::auth::AuthMode;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
pub struct AuthMiddleware {
    mode: AuthMode,
}

impl AuthMiddleware {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode }
    }

    /// 토큰이 없거나 무효하면 401
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 토큰이 있으면 검증, 없어도 진행
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, http::StatusCode, test, web, App, HttpResponse};
    use actix_web::cookie::Cookie;
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::services::auth::TokenService;
    use crate::test_support::TEST_JWT_SECRET;

    #[get("/me")]
    async fn me(user: Option<web::ReqData<AuthenticatedUser>>) -> HttpResponse {
        match user {
            Some(user) => HttpResponse::Ok().body(user.user_id.clone()),
            None => HttpResponse::Ok().body("anonymous"),
        }
    }

    fn token_service() -> TokenService {
        TokenService::new(TEST_JWT_SECRET, 1)
    }

    fn bearer(user_id: &str) -> String {
        let token = token_service().issue_access_token(user_id, &["user".to_string()]).unwrap();
        format!("Bearer {}", token)
    }

    #[actix_web::test]
    async fn test_required_rejects_missing_token() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(token_service()))
                .service(web::scope("").wrap(AuthMiddleware::required()).service(me)),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/me").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "authentication_required");
    }

    #[actix_web::test]
    async fn test_required_accepts_bearer_and_cookie() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(token_service()))
                .service(web::scope("").wrap(AuthMiddleware::required()).service(me)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", bearer("user-1")))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "user-1");

        let token = token_service().issue_access_token("user-2", &[]).unwrap();
        let req = test::TestRequest::get()
            .uri("/me")
            .cookie(Cookie::new("access_token", token))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "user-2");
    }

    #[actix_web::test]
    async fn test_optional_passes_through_invalid_token() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(token_service()))
                .service(web::scope("").wrap(AuthMiddleware::optional()).service(me)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "anonymous");
    }
}
