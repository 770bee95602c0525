//! Errors raised by the tracker library.
//!
//! The simulated check itself cannot fail. These cover refused transitions
//! and configuration problems.

use std::path::PathBuf;

use thiserror::Error;

use crate::checker::Phase;

pub type Result<T> = std::result::Result<T, TrackerError>;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("identifier is empty")]
    BlankIdentifier,

    #[error("cannot submit while {phase}")]
    SubmitUnavailable { phase: Phase },

    #[error("cannot reset while {phase}; results are not shown")]
    ResetUnavailable { phase: Phase },

    #[error("probability `{name}` must be within 0.0..=1.0, got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
