//! Mail Wizard library exports for testing

pub mod core;
pub mod error;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::action::{Action, Effect};
pub use crate::core::state::{Screen, Session};
pub use crate::error::WizardError;
