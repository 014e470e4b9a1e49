//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `HOST`: 서버 바인딩 주소
//! - `PORT`: 서버 포트 번호
//! - `PROFILES_ACTIVE`: 현재 활성화된 프로파일 목록 (쉼표로 구분, 예: "real1,oauth")

use std::env;

/// 기본 바인딩 주소
const DEFAULT_HOST: &str = "0.0.0.0";
/// 기본 포트 번호
const DEFAULT_PORT: u16 = 8080;

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후,
/// 애플리케이션 전체에서 공유됩니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// 서버가 바인딩할 호스트 주소 (기본값: "0.0.0.0")
    pub host: String,
    /// 서버 포트 번호 (기본값: 8080)
    pub port: u16,
    /// 활성 프로파일 이름 목록. 입력 순서를 그대로 유지합니다.
    /// 비어 있을 수 있습니다 (아무 프로파일도 켜지지 않은 상태).
    pub active_profiles: Vec<String>,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// 필수 항목은 없습니다. 모든 값에 기본값이 있어
    /// 환경변수가 하나도 없어도 동작합니다.
    pub fn from_env() -> Self {
        // |key| env::var(key).ok(): 변수가 없거나 UTF-8이 아니면 None
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 키 → 값 조회 함수로부터 Config를 만듭니다.
    ///
    /// `from_env`는 실제 환경변수를 조회하는 클로저를 넘기고,
    /// 테스트는 프로세스 환경을 건드리지 않고 HashMap 등을 넘길 수 있습니다.
    ///
    /// # 제네릭 매개변수
    /// - `F: Fn(&str) -> Option<String>`: 키를 받아 값(없으면 None)을 돌려주는 함수
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),

            // 파싱 실패 시 기본 포트를 사용합니다.
            // .and_then(): Some일 때만 파싱을 시도하고, 파싱 실패(Err)는 None으로 바꿉니다.
            port: lookup("PORT")
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(DEFAULT_PORT),

            // 변수가 없으면 빈 문자열로 취급 → 빈 목록
            active_profiles: parse_profiles(&lookup("PROFILES_ACTIVE").unwrap_or_default()),
        }
    }
}

/// 쉼표로 구분된 프로파일 문자열을 목록으로 변환합니다.
///
/// 각 항목의 앞뒤 공백을 제거하고, 빈 항목은 버립니다.
/// 순서는 입력 그대로 유지됩니다 (첫 번째 항목이 기본 프로파일 후보가 되므로 중요합니다).
///
/// # 예시
/// ```text
/// parse_profiles("real1, oauth")  → ["real1", "oauth"]
/// parse_profiles(" , ,")          → []
/// ```
pub fn parse_profiles(raw: &str) -> Vec<String> {
    // .split(','): 쉼표 기준으로 자른 &str 이터레이터
    // .map(str::trim): 각 조각의 앞뒤 공백 제거
    // .filter(..): 빈 문자열 제거
    // .map(String::from): &str → 소유된 String
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}
