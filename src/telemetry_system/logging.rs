use tracing::{debug, info};

use crate::control::rocket::RocketStatus;

use super::observer::Observer;

/// Observer that forwards updates to the tracing subscriber.
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl LoggingObserver {
    pub fn new() -> Self {
        LoggingObserver
    }

    /// Direct entry point for event-specific messages; not driven by updates.
    pub fn log(&self, message: &str) {
        info!(target: "rocket_launch_simulation::flight_log", "{message}");
    }
}

impl Observer for LoggingObserver {
    fn on_update(&mut self, status: &RocketStatus) {
        debug!(
            stage = %status.stage,
            fuel = status.fuel,
            altitude = status.altitude,
            speed = status.speed,
            "rocket updated"
        );
    }
}
