//! 액션 슬롯 정의
//!
//! 모달 카드의 버튼 자리에 들어갈 수 있는 액션을 닫힌 집합으로 관리합니다.
//! 호출자는 이름 있는 생성자(`destructive`, `cancel`, `affirmative`)로만
//! `ActionSpec`을 만들 수 있고, 렌더링 시점에 `materialize`로 실제 버튼을 얻습니다.
//!
//! 새 액션 종류 추가 절차:
//! 1. `ActionKind`에 variant 추가
//! 2. 생성자 추가
//! 3. `materialize`의 match arm 추가 (와일드카드 금지)
//!
//! 종류와 레이블은 `ActionSpec`에서 직접 읽을 수 없고, 만들어진 `ActionButton`으로만 봅니다.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};
use std::fmt;
use std::rc::Rc;
use unicode_width::UnicodeWidthStr;

/// 취소 액션의 고정 레이블
pub const CANCEL_LABEL: &str = "Cancel";

type Callback = Rc<dyn Fn()>;

/// 액션 역할 (버튼 색상 결정용)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionRole {
    /// 되돌릴 수 없는 작업 (삭제 등)
    Destructive,
    /// 취소
    Cancel,
    /// 긍정/확인 작업
    Affirmative,
}

#[derive(Clone)]
enum ActionKind {
    Destructive { label: String, on_activate: Callback },
    Cancel { on_activate: Callback },
    Affirmative { label: String, on_activate: Callback },
}

/// 아직 렌더링되지 않은 액션 기술자
///
/// 생성 후에는 변경되지 않습니다. clone은 콜백을 공유하므로
/// 같은 스펙을 여러 번 렌더링에 재사용할 수 있습니다.
#[derive(Clone)]
pub struct ActionSpec {
    kind: ActionKind,
}

impl ActionSpec {
    /// 파괴적 액션 생성 (레이블 지정)
    pub fn destructive(label: impl Into<String>, on_activate: impl Fn() + 'static) -> Self {
        Self {
            kind: ActionKind::Destructive {
                label: label.into(),
                on_activate: Rc::new(on_activate),
            },
        }
    }

    /// 취소 액션 생성 (레이블은 항상 "Cancel")
    pub fn cancel(on_activate: impl Fn() + 'static) -> Self {
        Self {
            kind: ActionKind::Cancel {
                on_activate: Rc::new(on_activate),
            },
        }
    }

    /// 긍정 액션 생성 (레이블 지정)
    pub fn affirmative(label: impl Into<String>, on_activate: impl Fn() + 'static) -> Self {
        Self {
            kind: ActionKind::Affirmative {
                label: label.into(),
                on_activate: Rc::new(on_activate),
            },
        }
    }

    /// 실제 버튼 요소 생성
    ///
    /// 콜백은 호출하지 않습니다. 콜백은 `ActionButton::activate`에서만 실행됩니다.
    pub fn materialize(&self) -> ActionButton {
        match &self.kind {
            ActionKind::Destructive { label, on_activate } => {
                ActionButton::new(label.clone(), ActionRole::Destructive, Rc::clone(on_activate))
            }
            ActionKind::Cancel { on_activate } => {
                ActionButton::new(CANCEL_LABEL, ActionRole::Cancel, Rc::clone(on_activate))
            }
            ActionKind::Affirmative { label, on_activate } => {
                ActionButton::new(label.clone(), ActionRole::Affirmative, Rc::clone(on_activate))
            }
        }
    }
}

impl fmt::Debug for ActionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let button = self.materialize();
        f.debug_struct("ActionSpec")
            .field("role", &button.role)
            .field("label", &button.label)
            .finish_non_exhaustive()
    }
}

/// 활성화 가능한 버튼 요소
///
/// 구조 비교(`PartialEq`)는 레이블과 역할만 봅니다. 콜백은 비교 대상이 아닙니다.
#[derive(Clone)]
pub struct ActionButton {
    label: String,
    role: ActionRole,
    on_activate: Callback,
    fg_color: Color,
    bg_color: Color,
}

impl ActionButton {
    fn new(label: impl Into<String>, role: ActionRole, on_activate: Callback) -> Self {
        Self {
            label: label.into(),
            role,
            on_activate,
            fg_color: Color::Rgb(212, 212, 212),
            bg_color: Color::Rgb(60, 60, 60),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn role(&self) -> ActionRole {
        self.role
    }

    /// 사용자 상호작용 시 호출: 저장된 콜백을 한 번 실행
    pub fn activate(&self) {
        tracing::debug!(label = %self.label, role = ?self.role, "action activated");
        (self.on_activate)();
    }

    /// 양옆 패딩을 포함한 표시 너비 (`u16::MAX`에서 포화)
    pub fn width(&self) -> u16 {
        u16::try_from(self.padded_label().width()).unwrap_or(u16::MAX)
    }

    /// 색상 설정
    pub fn colors(mut self, fg: Color, bg: Color) -> Self {
        self.fg_color = fg;
        self.bg_color = bg;
        self
    }

    fn padded_label(&self) -> String {
        format!(" {} ", self.label)
    }
}

impl PartialEq for ActionButton {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label && self.role == other.role
    }
}

impl fmt::Debug for ActionButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionButton")
            .field("label", &self.label)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

impl Widget for ActionButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = Style::default().fg(self.fg_color).bg(self.bg_color);
        let padded = self.padded_label();
        let (end_x, _) = buf.set_stringn(area.x, area.y, &padded, area.width as usize, style);

        // Wide character(한글 등) continuation cell의 배경색 보정
        for x in area.x..end_x {
            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.set_bg(self.bg_color);
            }
        }
    }
}
