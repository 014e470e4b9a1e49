//! # deploy-profile 웹 서버 진입점
//!
//! 무중단 배포에서 "지금 이 인스턴스가 어떤 프로파일로 떠 있는지"를
//! 알려주는 작은 서버입니다.
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정 로딩 (HOST, PORT, PROFILES_ACTIVE)
//! 4. 호스트 환경(Environment) 구성 및 라우터 설정
//! 5. HTTP 서버 시작

mod config;
mod environment;
mod error;
mod routes;
mod services;

use anyhow::Result;
use config::Config;
use environment::StaticEnvironment;
use routes::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG가 없으면 이 크레이트와 tower_http, axum을 debug 레벨로 출력합니다.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deploy_profile=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    let config = Config::from_env();
    tracing::info!(
        "Starting deploy-profile server on {}:{} (active profiles: {:?})",
        config.host,
        config.port,
        config.active_profiles
    );

    // ── 4단계: 애플리케이션 상태와 라우터 ──
    // 프로파일은 실행 중 바뀌지 않으므로 시작 시점의 스냅샷을 주입합니다.
    let state = AppState::new(StaticEnvironment::new(config.active_profiles.clone()));
    let app = routes::router(state);

    // ── 5단계: 서버 시작 ──
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
