// UI Components
pub mod action;
pub mod command_bar;
pub mod modal_card;
pub mod modal_view;
pub mod status_bar;
pub mod warning;

// Re-export components for convenience
pub use action::{ActionRole, ActionSpec};
pub use command_bar::{CommandBar, CommandItem};
pub use modal_card::{ActionSlot, ModalCard};
pub use modal_view::ModalCardView;
pub use status_bar::StatusBar;
pub use warning::WarningScreen;
