//! 로그 초기화
//!
//! 화면이 raw/alternate 모드이므로 로그는 파일로만 씁니다.
//! 로그 파일이 설정되지 않으면 subscriber를 설치하지 않습니다.

use crate::config::Settings;
use crate::utils::error::Result;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_FILTER_ENV: &str = "MODALCARD_LOG";

/// tracing subscriber 설치, 로그 파일 경로 반환
pub fn init(settings: &Settings) -> Result<Option<PathBuf>> {
    let Some(path) = settings.log_file_path() else {
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();

    Ok(Some(path))
}
