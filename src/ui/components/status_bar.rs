// Status bar component - 상태바 컴포넌트
//
// 마지막 이벤트 메시지와 현재 테마 이름 표시

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 상태바 컴포넌트
pub struct StatusBar<'a> {
    /// 마지막 이벤트 메시지
    message: &'a str,
    /// 현재 테마 이름
    theme_name: &'a str,
    /// 모달 표시 여부
    modal_open: bool,
    bg_color: Color,
    fg_color: Color,
    muted_color: Color,
}

impl Default for StatusBar<'_> {
    fn default() -> Self {
        Self {
            message: "",
            theme_name: "dark",
            modal_open: false,
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            muted_color: Color::Rgb(100, 100, 100),
        }
    }
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 이벤트 메시지 설정
    pub fn message(mut self, message: &'a str) -> Self {
        self.message = message;
        self
    }

    /// 테마 이름 설정
    pub fn theme_name(mut self, name: &'a str) -> Self {
        self.theme_name = name;
        self
    }

    pub fn modal_open(mut self, open: bool) -> Self {
        self.modal_open = open;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.status_bar_bg.to_color();
        self.fg_color = theme.status_bar_fg.to_color();
        self
    }

    fn right_info(&self) -> String {
        let state = if self.modal_open { "MODAL" } else { "IDLE" };
        format!("[{}] {} ", state, self.theme_name)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // 배경 채우기
        buf.set_style(area, Style::default().bg(self.bg_color));

        let left_info = format!(" {}", self.message);
        let right_info = self.right_info();

        let padding_len = area
            .width
            .saturating_sub(left_info.width() as u16 + right_info.width() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(left_info, Style::default().fg(self.fg_color)),
            Span::raw(" ".repeat(padding_len)),
            Span::styled(right_info, Style::default().fg(self.muted_color)),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bar_creation() {
        let status_bar = StatusBar::new()
            .message("Account deleted")
            .theme_name("light")
            .modal_open(true);

        assert_eq!(status_bar.message, "Account deleted");
        assert_eq!(status_bar.right_info(), "[MODAL] light ");
    }

    #[test]
    fn test_status_bar_render_right_aligns_theme() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new()
            .message("Cancelled")
            .theme_name("dark")
            .render(area, &mut buf);

        let line: String = (0..area.width)
            .filter_map(|x| buf.cell((x, 0)).map(|c| c.symbol().to_string()))
            .collect();
        assert!(line.starts_with(" Cancelled"));
        assert!(line.ends_with("[IDLE] dark "));
    }
}
