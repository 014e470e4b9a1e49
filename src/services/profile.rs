//! # 프로파일 결정(Profile Resolver) 서비스
//!
//! 현재 활성화된 프로파일 목록 중에서 "대표 프로파일" 하나를 고릅니다.
//!
//! 무중단 배포(blue/green)에서 Nginx나 배포 스크립트는 `/profile`을 호출해
//! 지금 떠 있는 인스턴스가 `real1`인지 `real2`인지 확인합니다.
//! 그래서 `real`, `real1`, `real2` 중 하나라도 켜져 있으면 그 값이 우선입니다.

/// 실제 배포용 프로파일 이름들
///
/// `const`: 컴파일 타임에 고정되는 상수입니다. 요청마다 새로 만들지 않습니다.
pub const REAL_PROFILES: [&str; 3] = ["real", "real1", "real2"];

/// 활성 프로파일이 하나도 없을 때 반환하는 값
pub const DEFAULT_PROFILE: &str = "default";

/// 활성 프로파일 목록에서 대표 프로파일 하나를 고릅니다.
///
/// 1. 목록에서 `REAL_PROFILES`에 속한 첫 번째 항목을 반환합니다.
/// 2. 없으면 목록의 첫 번째 항목을 반환합니다.
/// 3. 목록이 비어 있으면 `"default"`를 반환합니다.
///
/// 여러 real 프로파일이 동시에 켜져 있으면 목록에서 먼저 나온 쪽이 이깁니다.
///
/// # 제네릭 매개변수
/// - `S: AsRef<str>`: `&[String]`과 `&[&str]`을 모두 받을 수 있게 합니다.
///
/// # 반환값
/// 입력 목록을 빌린 `&str` (또는 `'static`인 `"default"`).
/// 라이프타임 생략 규칙에 따라 반환값은 `active`보다 오래 살 수 없습니다.
///
/// # 예시
/// ```text
/// resolve_profile(&["local", "real2"]) → "real2"
/// resolve_profile(&["local"])          → "local"
/// resolve_profile::<&str>(&[])         → "default"
/// ```
pub fn resolve_profile<S: AsRef<str>>(active: &[S]) -> &str {
    let default_profile = active
        .first()
        .map(|p| p.as_ref())
        .unwrap_or(DEFAULT_PROFILE);

    active
        .iter()
        .map(|p| p.as_ref())
        .find(|p| REAL_PROFILES.contains(p))
        .unwrap_or(default_profile)
}
