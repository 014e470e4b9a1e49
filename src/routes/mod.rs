//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들과 라우터 구성을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `health`: 서버 상태 확인 (헬스체크)
//! - `profile`: 현재 대표 프로파일 조회

pub mod health;
pub mod profile;

pub use health::*;
pub use profile::*;

use crate::{environment::Environment, error::AppError};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// Axum의 의존성 주입(Dependency Injection) 메커니즘입니다.
/// Axum의 State Extractor는 요청마다 AppState를 clone하므로 `Clone`이 필수입니다.
///
/// `Arc<dyn Environment>`: 구현체를 감춘 트레이트 객체를 참조 카운트로 공유합니다.
/// clone해도 환경 자체는 복제되지 않고 카운트만 올라갑니다.
#[derive(Clone)]
pub struct AppState {
    /// 활성 프로파일 목록을 제공하는 호스트 환경
    pub environment: Arc<dyn Environment>,
}

impl AppState {
    /// 환경 구현체를 받아 `Arc`로 감싼 상태를 만듭니다.
    ///
    /// `impl Environment + 'static`: 어떤 구현체든 받을 수 있는 제네릭 매개변수의 축약형입니다.
    /// `'static`은 구현체가 빌린 참조를 들고 있지 않아야 한다는 뜻입니다
    /// (요청 처리 태스크가 언제까지 살아 있을지 모르기 때문).
    pub fn new(environment: impl Environment + 'static) -> Self {
        Self {
            environment: Arc::new(environment),
        }
    }
}

/// 전체 라우터를 구성합니다.
///
/// main.rs와 테스트가 같은 라우터를 사용하도록 한 곳에서 만듭니다.
/// 테스트에서는 서버를 띄우지 않고 `tower::ServiceExt::oneshot`으로 바로 호출합니다.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/profile", get(profile))
        .route("/health", get(health_check))
        // 매칭되는 경로가 없으면 JSON 404 응답
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http()) // HTTP 요청/응답 자동 로깅
}

/// 등록되지 않은 경로에 대한 fallback 핸들러
pub async fn not_found() -> AppError {
    AppError::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::StaticEnvironment;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt; // for `oneshot`

    #[tokio::test]
    async fn unknown_path_returns_json_404() {
        let app = router(AppState::new(StaticEnvironment::default()));

        let request = Request::builder()
            .uri("/nope")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), 10_000).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "not_found");
    }
}
