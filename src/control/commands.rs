use std::io::Write;

use crate::errors::SimulationError;

use super::rocket::{FlightParameters, Rocket};

/// A user intent bound to everything it needs to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    StartChecks(FlightParameters),
    Launch,
    FastForward(i64),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::StartChecks(_) => "start_checks",
            Command::Launch => "launch",
            Command::FastForward(_) => "fast_forward",
        }
    }

    pub fn execute<W: Write>(self, rocket: &mut Rocket<W>) -> Result<(), SimulationError> {
        match self {
            Command::StartChecks(parameters) => rocket.start_checks(parameters),
            Command::Launch => rocket.launch(),
            Command::FastForward(seconds) => rocket.fast_forward(seconds),
        }
    }
}
