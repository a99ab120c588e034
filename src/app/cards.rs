use super::AppEvent;
use crate::ui::{ActionSpec, ModalCard};
use std::sync::mpsc::Sender;

/// 이벤트를 보내는 콜백 생성
fn emit(tx: &Sender<AppEvent>, event: AppEvent) -> impl Fn() + 'static {
    let tx = tx.clone();
    move || {
        if tx.send(event).is_err() {
            tracing::warn!(?event, "event receiver dropped");
        }
    }
}

/// 계정 삭제 확인 카드
pub(super) fn delete_account(tx: &Sender<AppEvent>) -> ModalCard {
    ModalCard::new(
        "Delete Account",
        "This action cannot be undone.",
        ActionSpec::destructive("Delete", emit(tx, AppEvent::AccountDeleted)),
        ActionSpec::cancel(emit(tx, AppEvent::Dismissed)),
    )
}

/// 기본 설정 복원 확인 카드
pub(super) fn restore_defaults(tx: &Sender<AppEvent>) -> ModalCard {
    ModalCard::new(
        "Restore Defaults",
        "Reset the theme and preferences to their defaults?",
        ActionSpec::affirmative("Restore", emit(tx, AppEvent::DefaultsRestored)),
        ActionSpec::cancel(emit(tx, AppEvent::Dismissed)),
    )
}
