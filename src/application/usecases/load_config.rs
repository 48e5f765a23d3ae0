//! 설정 파일과 실행 시점 재정의를 합쳐 전역 설정을 만드는 유스케이스.

use anyhow::{Context, Result};

use crate::application::config::{GlobalConfig, Settings};
use crate::application::ports::SettingsRepository;

pub struct LoadConfigUseCase<'a> {
    pub settings_repo: &'a dyn SettingsRepository,
}

impl<'a> LoadConfigUseCase<'a> {
    /// 파일 설정 위에 `overrides`를 덮어쓴 뒤 전역 설정으로 변환한다.
    pub fn execute(&self, overrides: Settings) -> Result<GlobalConfig> {
        let mut settings = self.settings_repo.load()?;
        settings.merge_from(overrides);
        GlobalConfig::from_settings(&settings).context("invalid handler settings")
    }
}
