//! # 실행 환경(Environment) 모듈
//!
//! "현재 활성화된 프로파일 목록"을 제공하는 호스트 환경을 추상화합니다.
//! Spring의 `org.springframework.core.env.Environment`에 해당하는 역할입니다.
//!
//! 핸들러는 구체 타입이 아니라 `Environment` 트레이트에만 의존합니다.
//! 덕분에 운영 환경에서는 설정 스냅샷(`StaticEnvironment`)을,
//! 테스트에서는 원하는 목록이나 실패하는 구현을 주입할 수 있습니다.

use thiserror::Error;

/// 호스트 환경이 프로파일 목록을 제공하지 못했을 때의 에러
///
/// 이 에러는 "협력자(collaborator)"의 실패입니다.
/// 빈 목록은 정상 입력이며 에러가 아닙니다.
#[derive(Debug, Error)]
pub enum EnvironmentError {
    /// 프로파일 목록을 읽을 수 없음
    #[error("active profiles unavailable: {0}")]
    Unavailable(String),
}

/// 활성 프로파일 목록을 제공하는 호스트 환경
///
/// `Send + Sync`: 여러 요청(스레드)이 동시에 같은 구현을 공유하므로 필요합니다.
/// AppState 안에 `Arc<dyn Environment>`로 보관됩니다.
pub trait Environment: Send + Sync {
    /// 현재 활성화된 프로파일 이름들을 순서대로 반환합니다.
    fn active_profiles(&self) -> Result<Vec<String>, EnvironmentError>;
}

/// 프로세스 시작 시점의 설정으로 고정된 환경
///
/// 프로파일은 실행 중에 바뀌지 않으므로 목록을 한 번만 만들어 두고
/// 요청마다 복사본을 돌려줍니다.
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    profiles: Vec<String>,
}

impl StaticEnvironment {
    pub fn new(profiles: Vec<String>) -> Self {
        Self { profiles }
    }
}

impl Environment for StaticEnvironment {
    fn active_profiles(&self) -> Result<Vec<String>, EnvironmentError> {
        Ok(self.profiles.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_environment_returns_snapshot_in_order() {
        let env = StaticEnvironment::new(vec!["local".into(), "real2".into()]);
        assert_eq!(env.active_profiles().unwrap(), vec!["local", "real2"]);
    }

    #[test]
    fn default_static_environment_is_empty() {
        assert!(StaticEnvironment::default().active_profiles().unwrap().is_empty());
    }
}
