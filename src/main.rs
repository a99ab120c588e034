mod app;
mod config;
mod core;
mod logging;
mod ui;
mod utils;

use app::App;
use config::Settings;
use crate::core::find_action;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use utils::error::Result;

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let settings_path = config::settings_path();
    let settings = Settings::load_or_default(settings_path.as_deref());
    if let Some(log_path) = logging::init(&settings)? {
        tracing::info!(path = %log_path.display(), "logging started");
    }

    let themes_dir = ui::theme::themes_dir();
    let mut app = App::new(settings, settings_path, themes_dir.as_deref());

    // Setup terminal
    enable_raw_mode()?;
    let res = run_in_terminal(&mut app);

    // Restore terminal (실행 결과와 무관하게 항상)
    let restored = restore_terminal();
    finish(res, restored)
}

fn run_in_terminal(app: &mut App) -> Result<()> {
    execute!(io::stdout(), EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    run_app(&mut terminal, app)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
    Ok(())
}

/// 종료 결과 결정: 실행 오류가 우선, 없으면 복원 오류
fn finish(res: Result<()>, restored: Result<()>) -> Result<()> {
    if let Err(err) = &res {
        tracing::error!(error = %err, "event loop failed");
    }
    if let Err(err) = &restored {
        tracing::error!(error = %err, "failed to restore terminal");
    }
    res.and(restored)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::renderer::draw(f, app))?;

        if event::poll(POLL_TIMEOUT)? {
            if let Event::Key(key) = event::read()? {
                // Windows에서는 Release 이벤트도 들어오므로 Press만 처리
                if key.kind == KeyEventKind::Press {
                    if let Some(action) = find_action(key.modifiers, key.code) {
                        app.execute_action(action);
                    }
                }
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ModalCardError;

    fn failed(msg: &str) -> Result<()> {
        Err(ModalCardError::Config(msg.to_string()))
    }

    #[test]
    fn test_finish_reports_loop_error() {
        let err = finish(failed("loop"), Ok(())).unwrap_err();
        assert!(matches!(err, ModalCardError::Config(ref m) if m == "loop"));
    }

    #[test]
    fn test_finish_loop_error_wins_over_restore_error() {
        let err = finish(failed("loop"), failed("restore")).unwrap_err();
        assert!(matches!(err, ModalCardError::Config(ref m) if m == "loop"));
    }

    #[test]
    fn test_finish_reports_restore_error() {
        let err = finish(Ok(()), failed("restore")).unwrap_err();
        assert!(matches!(err, ModalCardError::Config(ref m) if m == "restore"));
        assert!(finish(Ok(()), Ok(())).is_ok());
    }
}
