use std::fmt;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::constants::{
    INITIAL_ALTITUDE, INITIAL_FUEL, INITIAL_SPEED, SYSTEM_CHECKS_DURATION_MS, TICK_DURATION_MS,
};
use crate::errors::SimulationError;
use crate::telemetry_system::observer::{Observable, SharedObserver};

use super::launch_stages::Stage;

/// Rates and target supplied by the system checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightParameters {
    pub altitude_threshold: u32, // km
    pub fuel_decrement: u32, // % per tick
    pub altitude_increase_per_second: u32, // km per tick
    pub speed_increase_per_iteration: u32, // km/h per tick
}

impl FlightParameters {
    pub fn new(
        altitude_threshold: u32,
        fuel_decrement: u32,
        altitude_increase_per_second: u32,
        speed_increase_per_iteration: u32,
    ) -> Result<Self, SimulationError> {
        // With neither climb nor burn the ascent loop would never exit.
        if altitude_threshold > 0 && fuel_decrement == 0 && altitude_increase_per_second == 0 {
            return Err(SimulationError::InvalidParameters(
                "altitude increase and fuel decrement cannot both be zero".to_string(),
            ));
        }

        Ok(FlightParameters {
            altitude_threshold,
            fuel_decrement,
            altitude_increase_per_second,
            speed_increase_per_iteration,
        })
    }
}

/// Wall-clock pacing of the simulation. Only affects how the run feels
/// interactively, never its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightTiming {
    pub tick: Duration,
    pub checks: Duration,
}

impl FlightTiming {
    pub fn new(tick: Duration, checks: Duration) -> Self {
        FlightTiming { tick, checks }
    }

    pub fn instant() -> Self {
        FlightTiming::new(Duration::ZERO, Duration::ZERO)
    }
}

impl Default for FlightTiming {
    fn default() -> Self {
        FlightTiming::new(
            Duration::from_millis(TICK_DURATION_MS),
            Duration::from_millis(SYSTEM_CHECKS_DURATION_MS),
        )
    }
}

/// Snapshot handed to observers after each state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RocketStatus {
    pub stage: Stage,
    pub fuel: u32,
    pub altitude: u32,
    pub speed: u32,
}

impl fmt::Display for RocketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stage: {}, Fuel: {}%, Altitude: {} km, Speed: {} km/h",
            self.stage, self.fuel, self.altitude, self.speed
        )
    }
}

pub struct Rocket<W: Write = io::Stdout> {
    pub stage: Stage,
    pub fuel: u32,
    pub altitude: u32,
    pub speed: u32,
    parameters: Option<FlightParameters>,
    timing: FlightTiming,
    observable: Observable,
    console: W,
}

impl Rocket<io::Stdout> {
    pub fn new() -> Self {
        Rocket::with_console(io::stdout(), FlightTiming::default())
    }
}

impl Default for Rocket<io::Stdout> {
    fn default() -> Self {
        Rocket::new()
    }
}

impl<W: Write> Rocket<W> {
    pub fn with_console(console: W, timing: FlightTiming) -> Self {
        Rocket {
            stage: Stage::PreLaunch,
            fuel: INITIAL_FUEL,
            altitude: INITIAL_ALTITUDE,
            speed: INITIAL_SPEED,
            parameters: None,
            timing,
            observable: Observable::new(),
            console,
        }
    }

    pub fn parameters(&self) -> Option<&FlightParameters> {
        self.parameters.as_ref()
    }

    pub fn status(&self) -> RocketStatus {
        RocketStatus {
            stage: self.stage,
            fuel: self.fuel,
            altitude: self.altitude,
            speed: self.speed,
        }
    }

    pub fn console(&self) -> &W {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut W {
        &mut self.console
    }

    pub fn add_observer(&mut self, observer: SharedObserver) {
        self.observable.add_observer(observer);
    }

    pub fn notify_observers(&self) {
        self.observable.notify_observers(&self.status());
    }

    /// Restores fuel, altitude and speed. Stage and parameters are kept.
    pub fn reset(&mut self) {
        self.fuel = INITIAL_FUEL;
        self.altitude = INITIAL_ALTITUDE;
        self.speed = INITIAL_SPEED;
    }

    pub fn start_checks(&mut self, parameters: FlightParameters) -> Result<(), SimulationError> {
        self.parameters = Some(parameters);
        info!(?parameters, stage = %self.stage, "running system checks");

        writeln!(self.console, "Running system checks...")?;
        self.console.flush()?;
        pause(self.timing.checks);
        writeln!(self.console, "All systems are 'Go' for launch.")?;

        self.notify_observers();
        Ok(())
    }

    pub fn launch(&mut self) -> Result<(), SimulationError> {
        if self.stage != Stage::PreLaunch {
            debug!(stage = %self.stage, "launch ignored outside of pre-launch");
            return Ok(());
        }
        let parameters = self.configured("launch")?;

        writeln!(self.console, "Launching...")?;
        self.stage = Stage::Stage1;
        info!(stage = %self.stage, "rocket launched");

        self.ascend(&parameters)
    }

    /// Runs ticks in real time until the threshold is reached or fuel runs out.
    fn ascend(&mut self, parameters: &FlightParameters) -> Result<(), SimulationError> {
        while !self.ascent_complete(parameters) {
            self.tick(parameters);
            writeln!(self.console, "{}", self.status())?;
            self.console.flush()?;
            pause(self.timing.tick);
            self.notify_observers();
        }

        if self.altitude >= parameters.altitude_threshold {
            writeln!(
                self.console,
                "Stage 1 complete. Separating stage. Entering Stage 2."
            )?;
            writeln!(self.console, "Orbit achieved! Mission Successful.")?;
            self.stage = Stage::Orbit;
            info!(altitude = self.altitude, fuel = self.fuel, "orbit achieved");
        } else {
            writeln!(self.console, "Mission Failed due to insufficient fuel.")?;
            self.stage = Stage::Failed;
            warn!(altitude = self.altitude, "mission failed, fuel exhausted");
        }
        self.notify_observers();
        Ok(())
    }

    /// Recomputes the flight from a full tank without pacing, then performs one
    /// trailing status update and a single notification.
    pub fn fast_forward(&mut self, seconds: i64) -> Result<(), SimulationError> {
        let parameters = self.configured("fast_forward")?;

        self.reset();
        let simulated = self.simulate_ticks(&parameters, seconds);
        debug!(requested = seconds, simulated, "fast-forward computed");

        self.update_status(&parameters)?;
        self.notify_observers();
        Ok(())
    }

    /// Applies up to `seconds` ticks, stopping early once the ascent would end.
    /// Returns how many ticks were applied.
    fn simulate_ticks(&mut self, parameters: &FlightParameters, seconds: i64) -> u64 {
        let mut remaining = seconds.max(0);
        let mut applied = 0;
        while remaining > 0 && !self.ascent_complete(parameters) {
            self.tick(parameters);
            remaining -= 1;
            applied += 1;
        }
        applied
    }

    /// Prints the current status, then advances by one tick.
    fn update_status(&mut self, parameters: &FlightParameters) -> Result<(), SimulationError> {
        writeln!(self.console, "{}", self.status())?;
        self.tick(parameters);
        Ok(())
    }

    // Fuel is clamped at zero instead of going negative.
    fn tick(&mut self, parameters: &FlightParameters) {
        self.altitude = self
            .altitude
            .saturating_add(parameters.altitude_increase_per_second);
        self.speed = self
            .speed
            .saturating_add(parameters.speed_increase_per_iteration);
        self.fuel = self.fuel.saturating_sub(parameters.fuel_decrement);
    }

    fn ascent_complete(&self, parameters: &FlightParameters) -> bool {
        self.altitude >= parameters.altitude_threshold || self.fuel == 0
    }

    fn configured(&self, operation: &'static str) -> Result<FlightParameters, SimulationError> {
        self.parameters
            .ok_or(SimulationError::NotConfigured(operation))
    }
}

fn pause(duration: Duration) {
    if !duration.is_zero() {
        thread::sleep(duration);
    }
}
