// Core Layer
pub mod keymap;

pub use keymap::{command_bar_items, find_action, Action};
