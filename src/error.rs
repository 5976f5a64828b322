use std::io;

use thiserror::Error;

/// Fatal failures of the host event loop.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),
}
