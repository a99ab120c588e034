//! 모달 카드 위젯
//!
//! `ModalCard::render`가 만든 렌더 트리를 버퍼에 그립니다.
//! 포커스는 호스트(App)가 들고 있다가 넘겨줍니다.

use super::action::{ActionButton, ActionRole};
use super::modal_card::{ActionSlot, ModalCard, RenderNode};
use crate::ui::layout::centered_rect;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

/// 카드 내부 좌우 패딩 (border 안쪽 여백)
const CARD_H_PADDING: u16 = 2;
/// 카드 내부 상단 패딩 (border 아래 여백)
const CARD_V_PADDING: u16 = 1;
/// 버튼 사이 간격
const BUTTON_GAP: u16 = 2;
const MIN_CARD_WIDTH: u16 = 30;
const MAX_CARD_WIDTH: u16 = 60;

/// 렌더 트리에서 뽑아낸 카드 내용
#[derive(Debug, Default)]
struct CardContent<'t> {
    title: &'t str,
    message: &'t str,
    buttons: Vec<&'t ActionButton>,
}

impl<'t> CardContent<'t> {
    fn from_tree(tree: &'t RenderNode) -> Self {
        let mut content = CardContent {
            buttons: tree.actions(),
            ..Default::default()
        };
        content.visit_text(tree);
        content
    }

    fn visit_text(&mut self, node: &'t RenderNode) {
        match node {
            RenderNode::Column(children) | RenderNode::Row(children) => {
                for child in children {
                    self.visit_text(child);
                }
            }
            RenderNode::Title(text) => self.title = text,
            RenderNode::Message(text) => self.message = text,
            RenderNode::Action(_) => {}
        }
    }

    fn buttons_width(&self) -> u16 {
        let gaps = BUTTON_GAP.saturating_mul(clamp_u16(self.buttons.len().saturating_sub(1)));
        self.buttons
            .iter()
            .map(|b| b.width())
            .fold(gaps, u16::saturating_add)
    }
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// 줄바꿈 후 메시지 줄 수 (근사치)
fn wrapped_line_count(message: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let lines = message
        .lines()
        .map(|line| line.width().div_ceil(width).max(1))
        .fold(0usize, usize::saturating_add)
        .max(1);
    clamp_u16(lines)
}

/// 모달 카드 위젯
pub struct ModalCardView<'a> {
    card: &'a ModalCard,
    focus: ActionSlot,
    bg_color: Color,
    fg_color: Color,
    border_color: Color,
    title_color: Color,
    button_bg: Color,
    button_fg: Color,
    button_focused_bg: Color,
    button_focused_fg: Color,
    destructive_color: Color,
    affirmative_color: Color,
}

impl<'a> ModalCardView<'a> {
    pub fn new(card: &'a ModalCard) -> Self {
        Self {
            card,
            focus: ActionSlot::default(),
            bg_color: Color::Rgb(45, 45, 48),
            fg_color: Color::Rgb(212, 212, 212),
            border_color: Color::Rgb(0, 120, 212),
            title_color: Color::Rgb(0, 120, 212),
            button_bg: Color::Rgb(60, 60, 60),
            button_fg: Color::Rgb(212, 212, 212),
            button_focused_bg: Color::Rgb(0, 120, 212),
            button_focused_fg: Color::White,
            destructive_color: Color::Rgb(244, 71, 71),
            affirmative_color: Color::Rgb(78, 201, 176),
        }
    }

    /// 포커스된 슬롯 설정
    pub fn focus(mut self, slot: ActionSlot) -> Self {
        self.focus = slot;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.card_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.border_color = theme.card_border.to_color();
        self.title_color = theme.card_title.to_color();
        self.button_bg = theme.button_bg.to_color();
        self.button_fg = theme.button_fg.to_color();
        self.button_focused_bg = theme.button_focused_bg.to_color();
        self.button_focused_fg = theme.button_focused_fg.to_color();
        self.destructive_color = theme.error.to_color();
        self.affirmative_color = theme.success.to_color();
        self
    }

    /// 카드 영역 계산 (화면 중앙, 반응형)
    fn calculate_area(&self, screen: Rect, content: &CardContent<'_>) -> Rect {
        let chrome = CARD_H_PADDING * 2 + 2;
        let widest = [
            clamp_u16(content.title.width()).saturating_add(4),
            content.buttons_width(),
            content
                .message
                .lines()
                .map(|l| clamp_u16(l.width()))
                .max()
                .unwrap_or(0),
        ]
        .into_iter()
        .max()
        .unwrap_or(0);

        let width = widest
            .saturating_add(chrome)
            .clamp(MIN_CARD_WIDTH, MAX_CARD_WIDTH)
            .min(screen.width.saturating_sub(4));
        let message_lines = wrapped_line_count(content.message, width.saturating_sub(chrome));
        // border 2 + 상단 패딩 + 메시지 + 빈 줄 + 버튼 + 하단 여백
        let height = message_lines
            .saturating_add(6)
            .min(screen.height.saturating_sub(2));

        centered_rect(screen, width, height)
    }

    fn button_colors(&self, button: &ActionButton, focused: bool) -> (Color, Color) {
        if focused {
            return (self.button_focused_fg, self.button_focused_bg);
        }
        let fg = match button.role() {
            ActionRole::Destructive => self.destructive_color,
            ActionRole::Affirmative => self.affirmative_color,
            ActionRole::Cancel => self.button_fg,
        };
        (fg, self.button_bg)
    }
}

impl Widget for ModalCardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let tree = self.card.render();
        let content = CardContent::from_tree(&tree);
        let card_area = self.calculate_area(area, &content);
        if card_area.width < 4 || card_area.height < 4 {
            return;
        }

        // 배경 클리어
        Clear.render(card_area, buf);

        // 테두리 + 제목
        let block = Block::default()
            .title(format!(" {} ", content.title))
            .title_style(
                Style::default()
                    .fg(self.title_color)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .style(Style::default().bg(self.bg_color));
        block.render(card_area, buf);

        let inner = Rect {
            x: card_area.x + CARD_H_PADDING,
            y: card_area.y + CARD_V_PADDING,
            width: card_area.width.saturating_sub(CARD_H_PADDING * 2),
            height: card_area.height.saturating_sub(CARD_V_PADDING * 2),
        };

        // 메시지
        let msg_area = Rect {
            height: inner.height.saturating_sub(3),
            ..inner
        };
        Paragraph::new(content.message)
            .style(Style::default().fg(self.fg_color))
            .wrap(Wrap { trim: true })
            .render(msg_area, buf);

        // 버튼 행 (하단 중앙, 보조 → 주 순서)
        let focus_index = ActionSlot::ORDER.iter().position(|s| *s == self.focus);
        let button_y = card_area.y + card_area.height - 2;
        let total_width = content.buttons_width().min(inner.width);
        let mut x = inner.x + inner.width.saturating_sub(total_width) / 2;

        for (index, button) in content.buttons.iter().enumerate() {
            let (fg, bg) = self.button_colors(button, focus_index == Some(index));
            let available = (inner.x + inner.width).saturating_sub(x);
            let width = button.width().min(available);
            if width == 0 {
                break;
            }
            (*button)
                .clone()
                .colors(fg, bg)
                .render(Rect::new(x, button_y, width, 1), buf);
            x = x.saturating_add(width).saturating_add(BUTTON_GAP);
        }
    }
}
