//! # 프로파일(Profile) 라우트 핸들러
//!
//! ## 엔드포인트
//! - `GET /profile` → 현재 대표 프로파일 이름 (text/plain)
//!
//! 예: `PROFILES_ACTIVE=real1,oauth`로 실행된 인스턴스는 `real1`을 반환합니다.
//! 배포 스크립트는 이 값을 보고 다음에 띄울 쪽(real1 ↔ real2)을 결정합니다.

use super::AppState;
use crate::{error::AppError, services::profile::resolve_profile};
use axum::{debug_handler, extract::State};

/// `GET /profile` — 대표 프로파일 이름을 평문으로 반환합니다.
///
/// 반환 타입이 `String`이면 Axum이 자동으로
/// `Content-Type: text/plain; charset=utf-8`과 200 OK를 설정합니다.
///
/// # 에러
/// 호스트 환경이 목록을 주지 못하면 `AppError::Environment` (HTTP 500).
/// 빈 목록은 에러가 아니며 `"default"`가 반환됩니다.
///
/// #[debug_handler]: 핸들러 시그니처가 Axum 규칙에 맞지 않을 때
/// 알아보기 힘든 트레이트 에러 대신 읽기 쉬운 컴파일 에러를 보여줍니다.
#[debug_handler]
pub async fn profile(State(state): State<AppState>) -> Result<String, AppError> {
    let active = state.environment.active_profiles()?;
    let resolved = resolve_profile(&active);
    tracing::debug!(?active, resolved, "resolved active profile");
    Ok(resolved.to_string())
}
