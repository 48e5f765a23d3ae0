//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedSettings;
use crate::application::config::{GlobalConfig, Settings};

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    /// 병합된 원본 설정(미지정 필드 포함)
    pub settings: Settings,
    /// 최종 전역 설정. 설정이 잘못되었으면 `None`
    pub effective: Option<GlobalConfig>,
    pub error: Option<String>,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedSettings) -> Self {
        let (effective, error) = match GlobalConfig::from_settings(&loaded.settings) {
            Ok(config) => (Some(config), None),
            Err(err) => (None, Some(err.to_string())),
        };

        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            settings: loaded.settings,
            effective,
            error,
        }
    }
}
