//! # 헬스체크(Health Check) 핸들러
//!
//! 서버가 정상적으로 동작하는지 확인하는 엔드포인트입니다.
//!
//! ## 엔드포인트
//! - `GET /health` → `{ "status": "ok" }`
//!
//! 무중단 배포 스크립트가 새 인스턴스를 띄운 뒤
//! Nginx를 전환하기 전에 이 경로로 기동 여부를 확인합니다.

use axum::Json;
use serde_json::{json, Value};

/// `GET /health` — 서버 상태를 확인합니다.
///
/// State, Path 등 아무것도 필요 없고, 고정된 JSON만 반환합니다.
/// `Result`를 사용하지 않으므로 이 핸들러는 실패하지 않습니다.
///
/// 반환 타입이 `Json<Value>`이므로 Axum이 자동으로
/// `Content-Type: application/json` 헤더와 HTTP 200 OK를 설정합니다.
pub async fn health_check() -> Json<Value> {
    // json! 매크로로 JSON 객체를 생성합니다.
    // 결과: {"status": "ok"}
    Json(json!({
        "status": "ok"
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        environment::StaticEnvironment,
        routes::{router, AppState},
    };
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_check_returns_ok() {
        let Json(value) = health_check().await;
        assert_eq!(value, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn health_route_is_mounted() {
        let app = router(AppState::new(StaticEnvironment::default()));

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 10_000).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }
}
