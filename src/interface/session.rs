use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use tracing::{error, warn};

use crate::constants::COMMAND_PROMPT;
use crate::control::rocket::Rocket;
use crate::errors::SimulationError;
use crate::telemetry_system::logging::LoggingObserver;

use super::parser::parse_input;

/// Line-oriented command loop driving a single rocket.
pub struct Session<'a, R: BufRead, W: Write> {
    rocket: &'a mut Rocket<W>,
    input: R,
    logger: Rc<RefCell<LoggingObserver>>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Registers a logging observer on the rocket for the session's lifetime.
    pub fn new(rocket: &'a mut Rocket<W>, input: R) -> Self {
        let logger = Rc::new(RefCell::new(LoggingObserver::new()));
        rocket.add_observer(logger.clone());
        Session {
            rocket,
            input,
            logger,
        }
    }

    /// Reads commands until the input ends. Only console failures stop it early.
    pub fn run(&mut self) -> Result<(), SimulationError> {
        loop {
            write!(self.rocket.console_mut(), "{}", COMMAND_PROMPT)?;
            self.rocket.console_mut().flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.rocket.console_mut())?;
                return Ok(());
            }
            self.handle_line(&line)?;
        }
    }

    /// Parses and executes one command line, reporting recoverable errors on
    /// the console.
    pub fn handle_line(&mut self, line: &str) -> Result<(), SimulationError> {
        let result = match parse_input(line.trim(), &mut self.input, self.rocket.console_mut()) {
            Ok(command) => {
                self.logger
                    .borrow()
                    .log(&format!("executing {}", command.name()));
                command.execute(&mut *self.rocket)
            }
            Err(err) => Err(err),
        };

        match result {
            Ok(()) => Ok(()),
            Err(err) if err.is_recoverable() => {
                warn!(%err, "command rejected");
                writeln!(self.rocket.console_mut(), "{}", err)?;
                Ok(())
            }
            Err(err) => {
                error!(%err, "console failure");
                Err(err)
            }
        }
    }
}
