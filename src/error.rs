//! # 에러 처리 모듈
//!
//! HTTP 계층에서 발생할 수 있는 에러 타입을 정의합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 핸들러가 반환하는 모든 에러 종류를 하나의 타입으로 통합
//! - `IntoResponse` 구현: 에러를 HTTP 응답으로 자동 변환
//!
//! 프로파일 계산 자체는 실패하지 않습니다.
//! 에러는 호스트 환경이 목록을 주지 못했거나, 없는 경로로 요청이 온 경우뿐입니다.

use crate::environment::EnvironmentError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// 애플리케이션에서 발생할 수 있는 에러 종류
///
/// 핸들러에서 `Result<T, AppError>`를 반환하면,
/// Axum이 자동으로 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 요청한 경로가 없음 (HTTP 404)
    #[error("Resource not found")]
    NotFound,

    /// 호스트 환경 오류 (HTTP 500)
    /// #[from]: `?` 연산자로 EnvironmentError → AppError 자동 변환
    #[error("Environment error: {0}")]
    Environment(#[from] EnvironmentError),
}

impl IntoResponse for AppError {
    /// AppError를 HTTP 응답으로 변환합니다.
    ///
    /// 내부 에러는 실제 내용을 로그에만 기록하고,
    /// 클라이언트에는 일반적인 메시지만 반환합니다.
    fn into_response(self) -> Response {
        // match: 각 variant마다 (상태 코드, 에러 코드, 메시지) 튜플을 만듭니다.
        // 모든 variant를 빠짐없이 처리해야 합니다 (exhaustive).
        let (status, code, message) = match self {
            // self.to_string(): #[error("...")]로 정의한 Display 메시지
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            // ref: 내부 값을 이동(move)하지 않고 참조만 빌려옵니다.
            // self가 match 대상이므로, 소유권을 가져가지 않도록 참조로 접근합니다.
            AppError::Environment(ref e) => {
                // 실제 원인은 로그에만 기록 (서버 관리자용)
                tracing::error!("Environment error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "environment_error",
                    // 클라이언트에는 일반적인 메시지만 반환 (내부 구현 노출 방지)
                    "Active profiles are unavailable".to_string(),
                )
            }
        };

        // 결과: { "error": { "code": "not_found", "message": "Resource not found" } }
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        // Axum은 튜플 (상태코드, 본문)을 자동으로 HTTP 응답으로 변환합니다.
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(AppError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn environment_error_maps_to_500() {
        let err: AppError = EnvironmentError::Unavailable("boom".into()).into();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
