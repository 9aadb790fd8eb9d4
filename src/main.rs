//! 튜터 마켓플레이스 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB, Redis 연결을 설정하고 서비스들을 `web::Data`로 등록합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::{self, TrailingSlash};
use actix_web::{web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use tutor_marketplace_backend::caching::redis::RedisClient;
use tutor_marketplace_backend::config::{
    CorsConfig, Environment, OAuthConfig, RateLimitConfig, ServerConfig, ZoomOAuthConfig,
};
use tutor_marketplace_backend::db::Database;
use tutor_marketplace_backend::repositories::tutors::TutorRepository;
use tutor_marketplace_backend::repositories::zoom::{MongoProfileTokenStore, RedisOAuthStateStore};
use tutor_marketplace_backend::routes::configure_all_routes;
use tutor_marketplace_backend::services::auth::TokenService;
use tutor_marketplace_backend::services::tutors::TutorService;
use tutor_marketplace_backend::services::zoom::ZoomOAuthService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    let environment = Environment::current();
    init_logging(&environment);

    info!("🚀 튜터 마켓플레이스 백엔드 시작중... ({:?})", environment);

    // Zoom 설정은 기동 시점에 한 번만 검증
    let zoom_config = ZoomOAuthConfig::from_env().expect("Zoom OAuth 설정 오류");
    info!("Zoom OAuth 설정 로드됨: {:?}", zoom_config);

    let (database, redis_client) = initialize_data_stores().await;

    let tutor_repo = Arc::new(TutorRepository::new(database.clone(), redis_client.clone()));
    let token_store = Arc::new(MongoProfileTokenStore::new(database.clone()));
    let state_store = Arc::new(RedisOAuthStateStore::new(redis_client.clone()));

    if let Err(e) = tutor_repo.create_indexes().await {
        warn!("튜터 인덱스 생성 실패: {}", e);
    }
    if let Err(e) = token_store.create_indexes().await {
        warn!("Zoom 자격 증명 인덱스 생성 실패: {}", e);
    }

    let zoom_service = Arc::new(
        ZoomOAuthService::new(zoom_config, OAuthConfig::session_timeout_secs(), state_store, token_store)
            .expect("Zoom OAuth 서비스 초기화 실패"),
    );
    let tutor_service = Arc::new(TutorService::new(tutor_repo));
    let token_service = Arc::new(TokenService::from_config());

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(zoom_service, tutor_service, token_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
/// 경로는 항상 슬래시로 끝나도록 정규화됩니다 (`/health` → `/health/`).
async fn start_http_server(
    zoom_service: Arc<ZoomOAuthService>,
    tutor_service: Arc<TutorService>,
    token_service: Arc<TokenService>,
) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health/", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let zoom_data = web::Data::from(zoom_service);
    let tutor_data = web::Data::from(tutor_service);
    let token_data = web::Data::from(token_service);

    HttpServer::new(move || {
        App::new()
            .app_data(zoom_data.clone())
            .app_data(tutor_data.clone())
            .app_data(token_data.clone())

            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::new(TrailingSlash::Always))

            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 운영 환경은 `info`, 그 외에는 `info,actix_web=debug`
///
/// ```bash
/// RUST_LOG=tutor_marketplace_backend::services=debug cargo run
/// ```
fn init_logging(environment: &Environment) {
    let default_filter = if environment.is_production() {
        "info"
    } else {
        "info,actix_web=debug"
    };

    env_logger::init_from_env(Env::default().default_filter_or(default_filter));
}

/// MongoDB와 Redis 연결을 초기화합니다
///
/// # Panics
///
/// * MongoDB 또는 Redis 연결 실패 시
async fn initialize_data_stores() -> (Arc<Database>, Arc<RedisClient>) {
    info!("📡 데이터베이스 연결 중...");

    let database = Arc::new(
        Database::new()
            .await
            .expect("데이터베이스 연결 실패")
    );
    info!("✅ MongoDB 데이터베이스: {}", database.database_name());

    let redis_client = Arc::new(
        RedisClient::new()
            .await
            .expect("Redis 연결 실패")
    );

    (database, redis_client)
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ALLOWED_ORIGINS`에서 읽습니다.
fn configure_cors() -> Cors {
    CorsConfig::allowed_origins()
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            header::ACCESS_CONTROL_REQUEST_METHOD,
        ])
        // 자격 증명(쿠키 등) 지원
        .supports_credentials()
        .max_age(3600)
}
