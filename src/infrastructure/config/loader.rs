//! 설정 파일 탐색/병합 로더.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::config::Settings;

/// 명시 설정 파일 경로를 지정하는 환경변수.
pub const CONFIG_ENV: &str = "EXHANDLER_CONFIG";

#[derive(Debug, Clone)]
pub(crate) struct LoadedSettings {
    pub settings: Settings,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
}

/// 우선순위 경로를 순회해 JSON 설정을 병합한다.
pub(crate) fn load_merged_settings() -> Result<LoadedSettings> {
    load_merged_settings_from(config_paths())
}

/// 주어진 경로 목록(낮은 우선순위 -> 높은 우선순위)을 병합한다.
/// 존재하지 않는 파일은 건너뛴다.
pub(crate) fn load_merged_settings_from(paths: Vec<PathBuf>) -> Result<LoadedSettings> {
    let mut merged = Settings::default();
    let mut loaded_paths = Vec::new();

    for path in &paths {
        if !path.exists() {
            continue;
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let parsed: Settings = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
        merged.merge_from(parsed);
        loaded_paths.push(path.to_path_buf());
    }

    if loaded_paths.is_empty() {
        tracing::debug!("no settings file found, using built-in defaults");
    }

    Ok(LoadedSettings {
        settings: merged,
        searched_paths: paths,
        loaded_paths,
    })
}

/// 시스템 + 사용자 + 프로젝트 + 명시 경로 순으로 병합 경로를 구성한다.
pub fn config_paths() -> Vec<PathBuf> {
    // 낮은 우선순위 -> 높은 우선순위 순서로 병합됨.
    let mut paths = vec![PathBuf::from("/etc/exhandler/config.json")];

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join("exhandler").join("config.json"));
    }

    paths.push(PathBuf::from(".exhandler/config.json"));

    if let Ok(path) = env::var(CONFIG_ENV) {
        paths.push(Path::new(&path).to_path_buf());
    }

    dedup_paths(paths)
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}
