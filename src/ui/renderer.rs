// Renderer - 전체 화면 그리기
//
// 메인 영역(대기 안내 + 모달 카드) | 상태바 | 커맨드바

use crate::app::App;
use crate::core::command_bar_items;
use crate::ui::{CommandBar, LayoutMode, ModalCardView, StatusBar, WarningScreen};
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

const IDLE_HINT: &str = "No dialog open. Press d to delete the account or r to restore defaults.";

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();
    app.layout.update(size);

    if app.layout.mode() == LayoutMode::TooSmall {
        let (width, height) = app.layout.terminal_size();
        let warning = WarningScreen::new()
            .current_size(width, height)
            .theme(app.theme());
        f.render_widget(warning, size);
        return;
    }

    let areas = app.layout.areas().clone();
    let theme = app.theme();

    // 배경 + 대기 안내
    let background = Style::default()
        .bg(theme.bg_primary.to_color())
        .fg(theme.fg_primary.to_color());
    f.buffer_mut().set_style(areas.main, background);
    if !app.is_modal_open() {
        let hint = Paragraph::new(IDLE_HINT)
            .style(background.add_modifier(Modifier::DIM))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        let mut hint_area = areas.main;
        hint_area.y += hint_area.height / 2;
        hint_area.height = hint_area.height.saturating_sub(hint_area.height / 2);
        f.render_widget(hint, hint_area);
    }

    if let Some(card) = app.modal() {
        let view = ModalCardView::new(card).theme(theme).focus(app.focus());
        f.render_widget(view, areas.main);
    }

    let status = StatusBar::new()
        .message(app.status())
        .theme_name(app.theme_name())
        .modal_open(app.is_modal_open())
        .theme(theme);
    f.render_widget(status, areas.status_bar);

    let commands = CommandBar::new()
        .commands(command_bar_items(app.is_modal_open()))
        .theme(theme);
    f.render_widget(commands, areas.command_bar);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Action;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        let area = buf.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_draw_modal_screen() {
        let mut app = App::new_for_test();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Delete Account"));
        assert!(text.contains(" Cancel "));
        assert!(text.contains(" Delete "));
        assert!(text.contains("Enter:Press"));
        assert!(text.contains("[MODAL] dark"));
        assert!(!text.contains("No dialog open"));
        // 그리기만으로는 어떤 콜백도 실행되지 않음
        assert!(app.is_modal_open());
        assert_eq!(app.status(), "");
    }

    #[test]
    fn test_draw_idle_screen() {
        let mut app = App::new_for_test();
        app.execute_action(Action::Dismiss);

        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("No dialog open"));
        assert!(text.contains("Cancelled"));
        assert!(text.contains("q:Quit"));
    }

    #[test]
    fn test_draw_too_small_shows_warning() {
        let mut app = App::new_for_test();
        let mut terminal = Terminal::new(TestBackend::new(30, 10)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("30x10"));
        assert!(!text.contains(" Cancel "));
    }
}
