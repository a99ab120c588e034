//! 액션 레지스트리
//!
//! 키 바인딩과 커맨드바 힌트가 모두 이 모듈의 테이블을 참조합니다.

use crate::ui::CommandItem;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 사용자 입력으로 실행되는 액션
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Modal
    FocusNext,
    FocusPrev,
    Activate,
    Dismiss,
    // Cards
    OpenDeleteAccount,
    OpenRestoreDefaults,
    // System
    CycleTheme,
    Quit,
}

/// 커맨드바 표시 정보
pub struct CommandBarEntry {
    pub key: &'static str,
    pub label: &'static str,
    /// 모달이 열려 있을 때 표시할지 여부
    pub in_modal: bool,
}

/// 액션 정의 (메타데이터)
pub struct ActionDef {
    pub action: Action,
    pub id: &'static str,
    pub label: &'static str,
    pub command_bar: Option<CommandBarEntry>,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

/// 모든 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    ActionDef {
        action: Action::FocusNext,
        id: "focus_next",
        label: "Focus next button",
        command_bar: Some(CommandBarEntry {
            key: "Tab",
            label: "Focus",
            in_modal: true,
        }),
    },
    ActionDef {
        action: Action::FocusPrev,
        id: "focus_prev",
        label: "Focus previous button",
        command_bar: None,
    },
    ActionDef {
        action: Action::Activate,
        id: "activate",
        label: "Press focused button",
        command_bar: Some(CommandBarEntry {
            key: "Enter",
            label: "Press",
            in_modal: true,
        }),
    },
    ActionDef {
        action: Action::Dismiss,
        id: "dismiss",
        label: "Cancel dialog",
        command_bar: Some(CommandBarEntry {
            key: "Esc",
            label: "Cancel",
            in_modal: true,
        }),
    },
    ActionDef {
        action: Action::OpenDeleteAccount,
        id: "open_delete_account",
        label: "Delete account…",
        command_bar: Some(CommandBarEntry {
            key: "d",
            label: "Delete",
            in_modal: false,
        }),
    },
    ActionDef {
        action: Action::OpenRestoreDefaults,
        id: "open_restore_defaults",
        label: "Restore defaults…",
        command_bar: Some(CommandBarEntry {
            key: "r",
            label: "Restore",
            in_modal: false,
        }),
    },
    ActionDef {
        action: Action::CycleTheme,
        id: "cycle_theme",
        label: "Next theme",
        command_bar: Some(CommandBarEntry {
            key: "t",
            label: "Theme",
            in_modal: false,
        }),
    },
    ActionDef {
        action: Action::Quit,
        id: "quit",
        label: "Quit",
        command_bar: Some(CommandBarEntry {
            key: "q",
            label: "Quit",
            in_modal: false,
        }),
    },
];

fn build_key_bindings() -> Vec<KeyBinding> {
    let bind = |code: KeyCode, modifiers: Option<KeyModifiers>, action: Action| KeyBinding {
        code,
        modifiers,
        action,
    };
    let none = Some(KeyModifiers::NONE);

    vec![
        // Ctrl 조합은 같은 키의 일반 바인딩보다 먼저 검사
        bind(KeyCode::Char('c'), Some(KeyModifiers::CONTROL), Action::Quit),
        bind(KeyCode::Tab, None, Action::FocusNext),
        bind(KeyCode::Right, None, Action::FocusNext),
        bind(KeyCode::Char('l'), none, Action::FocusNext),
        bind(KeyCode::BackTab, None, Action::FocusPrev),
        bind(KeyCode::Left, None, Action::FocusPrev),
        bind(KeyCode::Char('h'), none, Action::FocusPrev),
        bind(KeyCode::Enter, None, Action::Activate),
        bind(KeyCode::Char(' '), None, Action::Activate),
        bind(KeyCode::Esc, None, Action::Dismiss),
        bind(KeyCode::Char('d'), none, Action::OpenDeleteAccount),
        bind(KeyCode::Char('r'), none, Action::OpenRestoreDefaults),
        bind(KeyCode::Char('t'), none, Action::CycleTheme),
        bind(KeyCode::Char('q'), none, Action::Quit),
    ]
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 키 입력으로 액션 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    key_bindings()
        .iter()
        .find(|binding| {
            let mod_matches = match binding.modifiers {
                None => true,
                Some(required) => modifiers == required,
            };
            binding.code == code && mod_matches
        })
        .map(|binding| binding.action)
}

impl Action {
    pub fn def(self) -> Option<&'static ActionDef> {
        ACTION_DEFS.iter().find(|d| d.action == self)
    }
}

/// 커맨드바 항목 생성 (모달 상태에 맞는 항목만)
pub fn command_bar_items(modal_open: bool) -> Vec<CommandItem> {
    ACTION_DEFS
        .iter()
        .filter_map(|def| def.command_bar.as_ref())
        .filter(|entry| entry.in_modal == modal_open)
        .map(|entry| CommandItem::new(entry.key, entry.label))
        .collect()
}
