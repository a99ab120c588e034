use crate::config::Settings;
use crate::core::Action;
use crate::ui::{ActionRole, ActionSlot, LayoutManager, ModalCard, Theme, ThemeManager};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};

mod cards;

/// 액션 콜백이 App에 보내는 이벤트
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    AccountDeleted,
    DefaultsRestored,
    Dismissed,
}

pub struct App {
    should_quit: bool,
    pub layout: LayoutManager,
    theme_manager: ThemeManager,
    /// 열려 있는 모달 (없으면 대기 화면)
    modal: Option<ModalCard>,
    /// 포커스된 버튼 슬롯
    focus: ActionSlot,
    /// 상태바 메시지
    status: String,
    events_tx: Sender<AppEvent>,
    events_rx: Receiver<AppEvent>,
    settings: Settings,
    /// None이면 설정을 저장하지 않음
    settings_path: Option<PathBuf>,
}

impl App {
    /// `themes_dir`가 있으면 그 안의 사용자 테마를 먼저 로드
    pub fn new(
        settings: Settings,
        settings_path: Option<PathBuf>,
        themes_dir: Option<&Path>,
    ) -> Self {
        let mut theme_manager = ThemeManager::new();
        if let Some(dir) = themes_dir {
            match theme_manager.load_themes_from_dir(dir) {
                Ok(0) => {}
                Ok(count) => tracing::info!(count, "loaded user themes"),
                Err(err) => tracing::warn!(error = %err, "failed to load user themes"),
            }
        }
        if let Err(err) = theme_manager.switch_theme(&settings.theme) {
            tracing::warn!(theme = %settings.theme, error = %err, "falling back to default theme");
        }

        let mut app = Self::with_parts(theme_manager, settings, settings_path);
        app.open_delete_account();
        app
    }

    #[cfg(test)]
    pub(crate) fn new_for_test() -> Self {
        let mut app = Self::with_parts(ThemeManager::new(), Settings::default(), None);
        app.open_delete_account();
        app
    }

    fn with_parts(
        theme_manager: ThemeManager,
        settings: Settings,
        settings_path: Option<PathBuf>,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        Self {
            should_quit: false,
            layout: LayoutManager::new(),
            theme_manager,
            modal: None,
            focus: ActionSlot::default(),
            status: String::new(),
            events_tx,
            events_rx,
            settings,
            settings_path,
        }
    }

    // === 조회 ===

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn modal(&self) -> Option<&ModalCard> {
        self.modal.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }

    pub fn focus(&self) -> ActionSlot {
        self.focus
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn theme(&self) -> &Theme {
        self.theme_manager.current()
    }

    pub fn theme_name(&self) -> &str {
        self.theme_manager.current_name()
    }

    // === 모달 ===

    /// 카드 열기 (포커스는 보조 슬롯에서 시작)
    pub fn open_card(&mut self, card: ModalCard) {
        tracing::debug!(title = card.title(), "modal opened");
        self.modal = Some(card);
        self.focus = ActionSlot::Secondary;
    }

    pub fn open_delete_account(&mut self) {
        self.open_card(cards::delete_account(&self.events_tx));
    }

    pub fn open_restore_defaults(&mut self) {
        self.open_card(cards::restore_defaults(&self.events_tx));
    }

    fn close_modal(&mut self) {
        if let Some(card) = self.modal.take() {
            tracing::debug!(title = card.title(), "modal closed");
        }
        self.focus = ActionSlot::default();
    }

    pub fn focus_next(&mut self) {
        self.focus.toggle();
    }

    pub fn focus_prev(&mut self) {
        // 슬롯이 두 개라 양방향 이동이 같음
        self.focus.toggle();
    }

    /// 포커스된 버튼 누르기
    pub fn activate_focused(&mut self) {
        if let Some(card) = &self.modal {
            card.activate(self.focus);
        }
        self.drain_events();
    }

    /// Esc: 취소 역할의 버튼이 있으면 누르고, 없으면 그냥 닫기
    pub fn dismiss(&mut self) {
        let Some(card) = &self.modal else {
            return;
        };
        let cancel_slot = ActionSlot::ORDER
            .into_iter()
            .find(|slot| card.action(*slot).materialize().role() == ActionRole::Cancel);
        match cancel_slot {
            Some(slot) => card.activate(slot),
            None => {
                self.close_modal();
                self.status = "Dismissed".to_string();
            }
        }
        self.drain_events();
    }

    /// 콜백이 보낸 이벤트 처리
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: AppEvent) {
        tracing::info!(?event, "handling app event");
        match event {
            AppEvent::AccountDeleted => {
                self.status = "Account deleted".to_string();
            }
            AppEvent::DefaultsRestored => {
                if self.theme_manager.switch_theme("dark").is_ok() {
                    self.settings.theme = "dark".to_string();
                    self.save_settings();
                }
                self.status = "Defaults restored".to_string();
            }
            AppEvent::Dismissed => {
                self.status = "Cancelled".to_string();
            }
        }
        self.close_modal();
    }

    // === 설정 ===

    pub fn cycle_theme(&mut self) {
        self.theme_manager.cycle_theme();
        self.settings.theme = self.theme_manager.current_name().to_string();
        self.status = format!("Theme: {}", self.settings.theme);
        self.save_settings();
    }

    fn save_settings(&self) {
        let Some(path) = &self.settings_path else {
            return;
        };
        match self.settings.save_to(path) {
            Ok(()) => tracing::debug!(path = %path.display(), "settings saved"),
            Err(err) => tracing::warn!(path = %path.display(), error = %err, "failed to save settings"),
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// 키 액션 실행
    ///
    /// 모달이 열려 있으면 모달 조작과 종료만 받습니다.
    pub fn execute_action(&mut self, action: Action) {
        if let Some(def) = action.def() {
            tracing::trace!(
                id = def.id,
                label = def.label,
                modal = self.is_modal_open(),
                "executing action"
            );
        }
        if self.is_modal_open() {
            match action {
                Action::FocusNext => self.focus_next(),
                Action::FocusPrev => self.focus_prev(),
                Action::Activate => self.activate_focused(),
                Action::Dismiss => self.dismiss(),
                Action::Quit => self.quit(),
                Action::OpenDeleteAccount | Action::OpenRestoreDefaults | Action::CycleTheme => {}
            }
        } else {
            match action {
                Action::OpenDeleteAccount => self.open_delete_account(),
                Action::OpenRestoreDefaults => self.open_restore_defaults(),
                Action::CycleTheme => self.cycle_theme(),
                Action::Quit => self.quit(),
                Action::FocusNext | Action::FocusPrev | Action::Activate | Action::Dismiss => {}
            }
        }
    }
}
