// Utilities
pub mod error;
