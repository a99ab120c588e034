//! 모달 카드 (제목 + 메시지 + 액션 2개)
//!
//! `ModalCard`는 상태를 갖지 않는 설정값입니다. `render`는 같은 입력에 대해
//! 항상 같은 트리를 만들고, 어떤 콜백도 호출하지 않습니다.
#![allow(dead_code)]

use super::action::{ActionButton, ActionSpec};

/// 액션 슬롯
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionSlot {
    /// 보조 액션 (왼쪽)
    #[default]
    Secondary,
    /// 주 액션 (오른쪽)
    Primary,
}

impl ActionSlot {
    /// 화면 표시 순서 (왼쪽 → 오른쪽)
    pub const ORDER: [ActionSlot; 2] = [ActionSlot::Secondary, ActionSlot::Primary];

    /// 슬롯 전환
    pub fn toggle(&mut self) {
        *self = match self {
            ActionSlot::Secondary => ActionSlot::Primary,
            ActionSlot::Primary => ActionSlot::Secondary,
        };
    }
}

/// 렌더 트리 노드
#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    /// 세로 배치
    Column(Vec<RenderNode>),
    /// 가로 배치
    Row(Vec<RenderNode>),
    Title(String),
    Message(String),
    Action(ActionButton),
}

impl RenderNode {
    /// 트리 안의 버튼을 표시 순서대로 수집
    pub fn actions(&self) -> Vec<&ActionButton> {
        let mut out = Vec::new();
        self.collect_actions(&mut out);
        out
    }

    fn collect_actions<'a>(&'a self, out: &mut Vec<&'a ActionButton>) {
        match self {
            RenderNode::Column(children) | RenderNode::Row(children) => {
                for child in children {
                    child.collect_actions(out);
                }
            }
            RenderNode::Action(button) => out.push(button),
            RenderNode::Title(_) | RenderNode::Message(_) => {}
        }
    }
}

/// 모달 카드 설정
#[derive(Debug, Clone)]
pub struct ModalCard {
    title: String,
    message: String,
    primary: ActionSpec,
    secondary: ActionSpec,
}

impl ModalCard {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        primary: ActionSpec,
        secondary: ActionSpec,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            primary,
            secondary,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// 슬롯의 액션 스펙
    pub fn action(&self, slot: ActionSlot) -> &ActionSpec {
        match slot {
            ActionSlot::Primary => &self.primary,
            ActionSlot::Secondary => &self.secondary,
        }
    }

    /// 렌더 트리 생성: 제목, 메시지, [보조, 주] 버튼 행
    pub fn render(&self) -> RenderNode {
        let buttons = ActionSlot::ORDER
            .iter()
            .map(|slot| RenderNode::Action(self.action(*slot).materialize()))
            .collect();

        RenderNode::Column(vec![
            RenderNode::Title(self.title.clone()),
            RenderNode::Message(self.message.clone()),
            RenderNode::Row(buttons),
        ])
    }

    /// 슬롯의 버튼 활성화 (사용자 입력 처리용)
    pub fn activate(&self, slot: ActionSlot) {
        self.action(slot).materialize().activate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::action::ActionRole;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn delete_account_card(log: &Rc<RefCell<Vec<&'static str>>>) -> ModalCard {
        let on_delete = Rc::clone(log);
        let on_cancel = Rc::clone(log);
        ModalCard::new(
            "Delete Account",
            "This action cannot be undone.",
            ActionSpec::destructive("Delete", move || on_delete.borrow_mut().push("f1")),
            ActionSpec::cancel(move || on_cancel.borrow_mut().push("f2")),
        )
    }

    #[test]
    fn test_delete_account_tree() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let card = delete_account_card(&log);

        let tree = card.render();
        match &tree {
            RenderNode::Column(children) => {
                assert_eq!(children.len(), 3);
                assert_eq!(children[0], RenderNode::Title("Delete Account".to_string()));
                assert_eq!(
                    children[1],
                    RenderNode::Message("This action cannot be undone.".to_string())
                );
                match &children[2] {
                    RenderNode::Row(buttons) => assert_eq!(buttons.len(), 2),
                    other => panic!("Expected Row, got {:?}", other),
                }
            }
            other => panic!("Expected Column, got {:?}", other),
        }

        let actions = tree.actions();
        assert_eq!(actions[0].label(), "Cancel");
        assert_eq!(actions[0].role(), ActionRole::Cancel);
        assert_eq!(actions[1].label(), "Delete");
        assert_eq!(actions[1].role(), ActionRole::Destructive);

        actions[0].activate();
        actions[1].activate();
        assert_eq!(*log.borrow(), vec!["f2", "f1"]);
    }

    #[test]
    fn test_render_is_pure() {
        let calls = Rc::new(Cell::new(0));
        let a = Rc::clone(&calls);
        let b = Rc::clone(&calls);
        let card = ModalCard::new(
            "Title",
            "Message",
            ActionSpec::destructive("Delete", move || a.set(a.get() + 1)),
            ActionSpec::cancel(move || b.set(b.get() + 1)),
        );

        let first = card.render();
        let second = card.render();
        assert_eq!(first, second);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_secondary_precedes_primary() {
        let cards = [
            ModalCard::new(
                "t",
                "m",
                ActionSpec::destructive("Delete", || {}),
                ActionSpec::cancel(|| {}),
            ),
            ModalCard::new(
                "t",
                "m",
                ActionSpec::cancel(|| {}),
                ActionSpec::destructive("Delete", || {}),
            ),
            ModalCard::new(
                "t",
                "m",
                ActionSpec::affirmative("Yes", || {}),
                ActionSpec::affirmative("No", || {}),
            ),
        ];

        for card in &cards {
            let tree = card.render();
            let rendered: Vec<ActionButton> = tree.actions().into_iter().cloned().collect();
            assert_eq!(
                rendered,
                vec![
                    card.action(ActionSlot::Secondary).materialize(),
                    card.action(ActionSlot::Primary).materialize(),
                ]
            );
        }
    }

    #[test]
    fn test_equal_specs_render_equal_trees() {
        let primary = ActionSpec::destructive("Delete", || {});
        let secondary = ActionSpec::cancel(|| {});
        let a = ModalCard::new("t", "m", primary.clone(), secondary.clone());
        let b = ModalCard::new("t", "m", primary, secondary);
        assert_eq!(a.render(), b.render());
    }

    #[test]
    fn test_affirmative_kind_leaves_existing_trees_unchanged() {
        let card = ModalCard::new(
            "Delete Account",
            "This action cannot be undone.",
            ActionSpec::destructive("Delete", || {}),
            ActionSpec::cancel(|| {}),
        );

        let expected = RenderNode::Column(vec![
            RenderNode::Title("Delete Account".to_string()),
            RenderNode::Message("This action cannot be undone.".to_string()),
            RenderNode::Row(vec![
                RenderNode::Action(ActionSpec::cancel(|| {}).materialize()),
                RenderNode::Action(ActionSpec::destructive("Delete", || {}).materialize()),
            ]),
        ]);
        assert_eq!(card.render(), expected);

        // 같은 레이블이라도 affirmative 버튼은 다른 노드
        let affirmative = RenderNode::Action(ActionSpec::affirmative("Delete", || {}).materialize());
        assert_ne!(
            affirmative,
            RenderNode::Action(ActionSpec::destructive("Delete", || {}).materialize())
        );
    }

    #[test]
    fn test_activate_by_slot() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let card = delete_account_card(&log);

        card.activate(ActionSlot::Primary);
        card.activate(ActionSlot::Secondary);
        card.activate(ActionSlot::Secondary);
        assert_eq!(*log.borrow(), vec!["f1", "f2", "f2"]);
    }

    #[test]
    fn test_slot_toggle() {
        let mut slot = ActionSlot::default();
        assert_eq!(slot, ActionSlot::Secondary);
        slot.toggle();
        assert_eq!(slot, ActionSlot::Primary);
        slot.toggle();
        assert_eq!(slot, ActionSlot::Secondary);
    }
}
