use thiserror::Error;

use crate::constants::AVAILABLE_COMMANDS;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Flight parameters are not set. Run start_checks before {0}.")]
    NotConfigured(&'static str),

    #[error("Invalid flight parameters: {0}")]
    InvalidParameters(String),

    #[error("Invalid input for fast_forward. Please enter 'fast_forward X', where X is an integer.")]
    InvalidFastForward,

    #[error("Invalid number {value:?} for '{prompt}'. Please enter a non-negative integer.")]
    InvalidNumber { prompt: String, value: String },

    #[error("Invalid command. Available commands: {}", AVAILABLE_COMMANDS)]
    UnknownCommand,

    #[error("Console error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimulationError {
    /// Errors the command loop reports and moves past.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, SimulationError::Io(_))
    }
}
