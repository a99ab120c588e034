#![allow(dead_code)]
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 색상 테마
///
/// 모달 카드와 주변 화면(상태바, 커맨드바)의 색상을 정의합니다.
/// TOML 파일에서 테마를 로드하거나 미리 정의된 테마를 사용할 수 있습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    // 배경/전경
    pub bg_primary: ColorDef,
    pub fg_primary: ColorDef,

    // 모달 카드
    pub card_bg: ColorDef,
    pub card_border: ColorDef,
    pub card_title: ColorDef,

    // 버튼
    pub button_bg: ColorDef,
    pub button_fg: ColorDef,
    pub button_focused_bg: ColorDef,
    pub button_focused_fg: ColorDef,

    // 하단 바
    pub status_bar_bg: ColorDef,
    pub status_bar_fg: ColorDef,
    pub command_bar_bg: ColorDef,
    pub command_bar_fg: ColorDef,

    // 강조
    pub accent: ColorDef,
    pub warning: ColorDef,
    /// 파괴적 액션 레이블
    pub error: ColorDef,
    /// 긍정 액션 레이블
    pub success: ColorDef,
}

/// 색상 정의 (TOML 직렬화/역직렬화 지원)
///
/// Hex 문자열("#1e1e1e") 또는 색상 이름("Red")을 지원합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorDef {
    Hex(String),
    Named(String),
}

impl ColorDef {
    /// ratatui Color로 변환
    ///
    /// untagged 역직렬화는 항상 `Hex`로 읽히므로 접두사로 다시 판별합니다.
    pub fn to_color(&self) -> Color {
        match self {
            ColorDef::Hex(s) | ColorDef::Named(s) if s.starts_with('#') => parse_hex_color(s),
            ColorDef::Hex(s) | ColorDef::Named(s) => parse_named_color(s),
        }
    }
}

impl From<&str> for ColorDef {
    fn from(s: &str) -> Self {
        if s.starts_with('#') {
            ColorDef::Hex(s.to_string())
        } else {
            ColorDef::Named(s.to_string())
        }
    }
}

fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    // 바이트 단위로 자르므로 ASCII만 허용
    if hex.len() != 6 || !hex.is_ascii() {
        return Color::Reset;
    }
    match (
        u8::from_str_radix(&hex[0..2], 16),
        u8::from_str_radix(&hex[2..4], 16),
        u8::from_str_radix(&hex[4..6], 16),
    ) {
        (Ok(r), Ok(g), Ok(b)) => Color::Rgb(r, g, b),
        _ => Color::Reset,
    }
}

fn parse_named_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

impl Theme {
    /// Dark 테마 (기본)
    pub fn dark() -> Self {
        Theme {
            bg_primary: "#1e1e1e".into(),
            fg_primary: "#d4d4d4".into(),

            card_bg: "#2d2d30".into(),
            card_border: "#0078d4".into(),
            card_title: "#0078d4".into(),

            button_bg: "#3c3c3c".into(),
            button_fg: "#d4d4d4".into(),
            button_focused_bg: "#0078d4".into(),
            button_focused_fg: "#ffffff".into(),

            status_bar_bg: "#007acc".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#2d2d30".into(),
            command_bar_fg: "#cccccc".into(),

            accent: "#0078d4".into(),
            warning: "#ffa500".into(),
            error: "#f44747".into(),
            success: "#4ec9b0".into(),
        }
    }

    /// Light 테마
    pub fn light() -> Self {
        Theme {
            bg_primary: "#ffffff".into(),
            fg_primary: "#1e1e1e".into(),

            card_bg: "#f3f3f3".into(),
            card_border: "#0078d4".into(),
            card_title: "#0066cc".into(),

            button_bg: "#e0e0e0".into(),
            button_fg: "#1e1e1e".into(),
            button_focused_bg: "#add6ff".into(),
            button_focused_fg: "#000000".into(),

            status_bar_bg: "#0078d4".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#f3f3f3".into(),
            command_bar_fg: "#1e1e1e".into(),

            accent: "#0078d4".into(),
            warning: "#ff8c00".into(),
            error: "#e51400".into(),
            success: "#107c10".into(),
        }
    }

    /// High Contrast 테마
    pub fn high_contrast() -> Self {
        Theme {
            bg_primary: "#000000".into(),
            fg_primary: "#ffffff".into(),

            card_bg: "#000000".into(),
            card_border: "#00ff00".into(),
            card_title: "#00ff00".into(),

            button_bg: "#000000".into(),
            button_fg: "#ffffff".into(),
            button_focused_bg: "#00ff00".into(),
            button_focused_fg: "#000000".into(),

            status_bar_bg: "#000000".into(),
            status_bar_fg: "#00ff00".into(),
            command_bar_bg: "#000000".into(),
            command_bar_fg: "#ffffff".into(),

            accent: "#00ff00".into(),
            warning: "#ffff00".into(),
            error: "#ff0000".into(),
            success: "#00ff00".into(),
        }
    }

    /// TOML 파일에서 테마 로드
    pub fn from_file(path: &Path) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)?;
        let theme: Theme = toml::from_str(&content)?;
        Ok(theme)
    }

    /// 테마를 TOML 파일로 저장
    pub fn save_to_file(&self, path: &Path) -> Result<(), anyhow::Error> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// 테마 관리자
///
/// 현재 활성 테마를 관리하고 런타임에 테마를 전환합니다.
pub struct ThemeManager {
    current: usize,
    available_themes: Vec<(String, Theme)>,
}

impl ThemeManager {
    /// 기본 테마 관리자 생성 (Dark 테마)
    pub fn new() -> Self {
        Self {
            current: 0,
            available_themes: vec![
                ("dark".to_string(), Theme::dark()),
                ("light".to_string(), Theme::light()),
                ("high_contrast".to_string(), Theme::high_contrast()),
            ],
        }
    }

    /// 현재 테마 반환
    pub fn current(&self) -> &Theme {
        &self.available_themes[self.current].1
    }

    /// 현재 테마 이름
    pub fn current_name(&self) -> &str {
        &self.available_themes[self.current].0
    }

    /// 테마 전환 (이름으로)
    pub fn switch_theme(&mut self, name: &str) -> Result<(), String> {
        match self.available_themes.iter().position(|(n, _)| n == name) {
            Some(index) => {
                self.current = index;
                tracing::info!(theme = name, "theme switched");
                Ok(())
            }
            None => Err(format!("테마를 찾을 수 없습니다: {}", name)),
        }
    }

    /// 다음 테마로 순환
    pub fn cycle_theme(&mut self) {
        self.current = (self.current + 1) % self.available_themes.len();
        tracing::info!(theme = self.current_name(), "theme cycled");
    }

    /// 사용 가능한 테마 목록 반환
    pub fn available_themes(&self) -> Vec<String> {
        self.available_themes
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// 커스텀 테마 추가 (같은 이름이 있으면 교체)
    pub fn add_theme(&mut self, name: String, theme: Theme) {
        match self.available_themes.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = theme,
            None => self.available_themes.push((name, theme)),
        }
    }

    /// 디렉토리의 `*.toml` 테마 파일 로드, 로드된 개수 반환
    pub fn load_themes_from_dir(&mut self, themes_dir: &Path) -> Result<usize, anyhow::Error> {
        if !themes_dir.exists() {
            return Ok(0);
        }

        let mut loaded = 0;
        for entry in fs::read_dir(themes_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                continue;
            }
            match Theme::from_file(&path) {
                Ok(theme) => {
                    let name = path
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or("custom")
                        .to_string();
                    self.add_theme(name, theme);
                    loaded += 1;
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "skipping theme file");
                }
            }
        }
        Ok(loaded)
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// 사용자 테마 디렉토리 (`<config>/modalcard/themes`)
pub fn themes_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("modalcard").join("themes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_dark_theme_creation() {
        let theme = Theme::dark();
        assert_eq!(theme.bg_primary.to_color(), Color::Rgb(30, 30, 30));
    }

    #[test]
    fn test_light_theme_creation() {
        let theme = Theme::light();
        assert_eq!(theme.bg_primary.to_color(), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_hex_color_parsing() {
        assert_eq!(parse_hex_color("#1e1e1e"), Color::Rgb(30, 30, 30));
        assert_eq!(parse_hex_color("#12"), Color::Reset);
        assert_eq!(parse_hex_color("#zzzzzz"), Color::Reset);
        // 6바이트지만 문자 경계가 2, 4에 있지 않은 값
        assert_eq!(parse_hex_color("#aé€"), Color::Reset);
        assert_eq!(ColorDef::from("#aé€").to_color(), Color::Reset);
        assert_eq!(parse_hex_color("#ééé"), Color::Reset);
    }

    #[test]
    fn test_named_color_parsing() {
        assert_eq!(parse_named_color("red"), Color::Red);
        assert_eq!(parse_named_color("Grey"), Color::Gray);
        assert_eq!(parse_named_color("unknown"), Color::Reset);
    }

    #[test]
    fn test_theme_switching() {
        let mut manager = ThemeManager::new();
        assert_eq!(manager.current_name(), "dark");
        assert!(manager.switch_theme("light").is_ok());
        assert_eq!(manager.current_name(), "light");
        assert_eq!(
            manager.current().bg_primary.to_color(),
            Color::Rgb(255, 255, 255)
        );
        assert!(manager.switch_theme("missing").is_err());
        assert_eq!(manager.current_name(), "light");
    }

    #[test]
    fn test_theme_cycling_wraps() {
        let mut manager = ThemeManager::new();
        manager.cycle_theme();
        assert_eq!(manager.current_name(), "light");
        manager.cycle_theme();
        assert_eq!(manager.current_name(), "high_contrast");
        manager.cycle_theme();
        assert_eq!(manager.current_name(), "dark");
    }

    #[test]
    fn test_theme_file_round_trip_and_dir_loading() {
        let temp = TempDir::new().unwrap();
        let mut custom = Theme::dark();
        custom.error = "#ff00ff".into();
        custom.save_to_file(&temp.path().join("neon.toml")).unwrap();
        std::fs::write(temp.path().join("broken.toml"), "not = [valid").unwrap();
        std::fs::write(temp.path().join("notes.txt"), "ignored").unwrap();

        let mut manager = ThemeManager::new();
        let loaded = manager.load_themes_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, 1);
        assert_eq!(manager.available_themes().len(), 4);

        manager.switch_theme("neon").unwrap();
        assert_eq!(manager.current().error.to_color(), Color::Rgb(255, 0, 255));
    }

    #[test]
    fn test_missing_theme_dir_loads_nothing() {
        let temp = TempDir::new().unwrap();
        let mut manager = ThemeManager::new();
        let loaded = manager
            .load_themes_from_dir(&temp.path().join("nope"))
            .unwrap();
        assert_eq!(loaded, 0);
        assert_eq!(manager.available_themes().len(), 3);
    }
}
