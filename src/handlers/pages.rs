//! 정적 안내 페이지 API
//!
//! 프론트엔드 정적 페이지에서 쓰는 고정 JSON을 반환합니다.

use actix_web::{get, HttpResponse, Responder};
use serde_json::json;

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Backend running. React app is at http://localhost:3000")
}

#[get("/api/home/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Welcome to the Home Page API",
        "inventory": ["Widget 1", "Widget 2", "Widget 3"],
        "greeting": "Thank you for visiting",
    }))
}

fn contact_details() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "contact_address": "1481 Mt Pleasant, Harare.",
        "contact_email": "info@ljshop.com",
    }))
}

/// 연락처 페이지와 같은 내용
#[get("/api/about/")]
pub async fn about() -> impl Responder {
    contact_details()
}

#[get("/api/contact/")]
pub async fn contact() -> impl Responder {
    contact_details()
}

#[get("/api/blog/")]
pub async fn blog() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Welcome to the Blog Page API",
        "posts": [
            {"title": "First Post", "content": "This is the content of the first post."},
            {"title": "Second Post", "content": "This is the content of the second post."},
        ],
    }))
}
