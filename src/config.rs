//! 사용자 설정 (TOML)
//!
//! 위치: `MODALCARD_SETTINGS_FILE` 환경변수, 없으면 `~/.modalcard/settings.toml`.
//! 파일이 없거나 읽을 수 없으면 기본값을 사용합니다.

use crate::utils::error::{ModalCardError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const SETTINGS_VERSION: u32 = 1;
const SETTINGS_ENV: &str = "MODALCARD_SETTINGS_FILE";
const LOG_FILE_ENV: &str = "MODALCARD_LOG_FILE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub version: u32,
    /// 테마 이름 (dark, light, high_contrast 또는 사용자 테마)
    pub theme: String,
    /// 로그 파일 경로 (없으면 로깅 비활성)
    pub log_file: Option<PathBuf>,
    /// 기본 로그 레벨 (`MODALCARD_LOG`가 우선)
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            theme: "dark".to_string(),
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn decode(data: &str) -> Result<Self> {
        let parsed: Settings = toml::from_str(data)?;
        if parsed.version != SETTINGS_VERSION {
            return Err(ModalCardError::Config(format!(
                "unsupported settings version {} (expected {})",
                parsed.version, SETTINGS_VERSION
            )));
        }
        if parsed.theme.trim().is_empty() {
            return Err(ModalCardError::Config("theme must not be empty".to_string()));
        }
        Ok(parsed)
    }

    pub fn encode(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::decode(&data)
    }

    /// 설정 로드, 실패 시 기본값
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(ModalCardError::Io(err)) if err.kind() == ErrorKind::NotFound => Self::default(),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring settings file");
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.encode()?)?;
        Ok(())
    }

    /// 로그 파일 경로 (`MODALCARD_LOG_FILE`가 우선)
    pub fn log_file_path(&self) -> Option<PathBuf> {
        non_empty_env(LOG_FILE_ENV).or_else(|| self.log_file.clone())
    }
}

/// 설정 파일 경로
pub fn settings_path() -> Option<PathBuf> {
    resolve_settings_path(non_empty_env(SETTINGS_ENV), dirs::home_dir())
}

fn resolve_settings_path(custom: Option<PathBuf>, home: Option<PathBuf>) -> Option<PathBuf> {
    custom.or_else(|| home.map(|home| home.join(".modalcard").join("settings.toml")))
}

fn non_empty_env(key: &str) -> Option<PathBuf> {
    let value = env::var(key).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("settings.toml");
        let settings = Settings {
            theme: "light".to_string(),
            log_file: Some(PathBuf::from("/tmp/modalcard.log")),
            ..Settings::default()
        };

        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings = Settings::decode("theme = \"high_contrast\"\n").unwrap();
        assert_eq!(settings.theme, "high_contrast");
        assert_eq!(settings.version, SETTINGS_VERSION);
        assert_eq!(settings.log_level, "info");
        assert!(settings.log_file.is_none());
    }

    #[test]
    fn test_version_mismatch_is_rejected() {
        let err = Settings::decode("version = 99\ntheme = \"dark\"\n").unwrap_err();
        assert!(matches!(err, ModalCardError::Config(_)));
    }

    #[test]
    fn test_empty_theme_is_rejected() {
        let err = Settings::decode("theme = \"  \"\n").unwrap_err();
        assert!(matches!(err, ModalCardError::Config(_)));
    }

    #[test]
    fn test_invalid_toml_is_decode_error() {
        let err = Settings::decode("theme = [").unwrap_err();
        assert!(matches!(err, ModalCardError::TomlDecode(_)));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.toml");
        assert_eq!(Settings::load_or_default(Some(missing.as_path())), Settings::default());

        let broken = temp.path().join("broken.toml");
        fs::write(&broken, "version = \"one\"").unwrap();
        assert_eq!(Settings::load_or_default(Some(broken.as_path())), Settings::default());

        assert_eq!(Settings::load_or_default(None), Settings::default());
    }

    #[test]
    fn test_resolve_settings_path() {
        let custom = PathBuf::from("/etc/modalcard.toml");
        assert_eq!(
            resolve_settings_path(Some(custom.clone()), Some(PathBuf::from("/home/u"))),
            Some(custom)
        );
        assert_eq!(
            resolve_settings_path(None, Some(PathBuf::from("/home/u"))),
            Some(PathBuf::from("/home/u/.modalcard/settings.toml"))
        );
        assert_eq!(resolve_settings_path(None, None), None);
    }
}
