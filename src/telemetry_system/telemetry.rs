use std::io::{self, Write};

use crate::control::launch_stages::Stage;
use crate::control::rocket::RocketStatus;

use super::observer::Observer;

/// Records every update it is notified of and keeps flight extremes.
pub struct Telemetry {
    pub log: Vec<String>,
    max_speed: u32,
    max_altitude: u32,
    min_fuel: Option<u32>,
    stage_transitions: Vec<(Stage, usize)>,
    updates: usize,
}

impl Default for Telemetry {
    fn default() -> Self {
        Telemetry::new()
    }
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry {
            log: Vec::new(),
            max_speed: 0,
            max_altitude: 0,
            min_fuel: None,
            stage_transitions: Vec::new(),
            updates: 0,
        }
    }

    pub fn collect_data(&mut self, status: &RocketStatus) {
        self.updates += 1;

        self.max_speed = self.max_speed.max(status.speed);
        self.max_altitude = self.max_altitude.max(status.altitude);
        self.min_fuel = Some(self.min_fuel.map_or(status.fuel, |fuel| fuel.min(status.fuel)));

        self.log.push(format!("Update {}: {}", self.updates, status));

        // Track state transitions
        match self.stage_transitions.last() {
            Some((last_stage, _)) if *last_stage == status.stage => {}
            _ => self.stage_transitions.push((status.stage, self.updates)),
        }
    }

    pub fn max_speed(&self) -> u32 {
        self.max_speed
    }

    pub fn max_altitude(&self) -> u32 {
        self.max_altitude
    }

    pub fn min_fuel(&self) -> Option<u32> {
        self.min_fuel
    }

    pub fn updates(&self) -> usize {
        self.updates
    }

    pub fn stage_transitions(&self) -> &[(Stage, usize)] {
        &self.stage_transitions
    }

    pub fn display_data<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "--- Telemetry Data ---")?;
        for entry in &self.log {
            writeln!(out, "{}", entry)?;
        }
        writeln!(out, "--- End of Telemetry ---")?;

        writeln!(out, "\n--- Simulation Summary ---")?;
        writeln!(out, "Updates: {}", self.updates)?;
        writeln!(out, "Max Speed: {} km/h", self.max_speed)?;
        writeln!(out, "Max Altitude: {} km", self.max_altitude)?;
        match self.min_fuel {
            Some(fuel) => writeln!(out, "Min Fuel: {}%", fuel)?,
            None => writeln!(out, "Min Fuel: n/a")?,
        }

        writeln!(out, "\n--- Stage Transitions ---")?;
        for (stage, update) in &self.stage_transitions {
            writeln!(out, "Stage {} reached at update {}", stage, update)?;
        }
        Ok(())
    }
}

impl Observer for Telemetry {
    fn on_update(&mut self, status: &RocketStatus) {
        self.collect_data(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(stage: Stage, fuel: u32, altitude: u32, speed: u32) -> RocketStatus {
        RocketStatus {
            stage,
            fuel,
            altitude,
            speed,
        }
    }

    #[test]
    fn test_collect_data_tracks_extremes() {
        let mut telemetry = Telemetry::new();
        telemetry.collect_data(&status(Stage::Stage1, 90, 2, 1));
        telemetry.collect_data(&status(Stage::Stage1, 80, 4, 2));
        telemetry.collect_data(&status(Stage::Stage1, 70, 6, 3));

        assert_eq!(telemetry.updates(), 3);
        assert_eq!(telemetry.max_altitude(), 6);
        assert_eq!(telemetry.max_speed(), 3);
        assert_eq!(telemetry.min_fuel(), Some(70));
        assert_eq!(
            telemetry.log[0],
            "Update 1: Stage: Stage 1, Fuel: 90%, Altitude: 2 km, Speed: 1 km/h"
        );
    }

    #[test]
    fn test_stage_transitions_recorded_once_per_change() {
        let mut telemetry = Telemetry::new();
        telemetry.collect_data(&status(Stage::PreLaunch, 100, 0, 0));
        telemetry.collect_data(&status(Stage::Stage1, 90, 1, 1));
        telemetry.collect_data(&status(Stage::Stage1, 80, 2, 2));
        telemetry.collect_data(&status(Stage::Orbit, 80, 2, 2));

        assert_eq!(
            telemetry.stage_transitions(),
            &[(Stage::PreLaunch, 1), (Stage::Stage1, 2), (Stage::Orbit, 4)]
        );
    }

    #[test]
    fn test_display_data_summary() {
        let mut telemetry = Telemetry::new();
        telemetry.collect_data(&status(Stage::Stage1, 80, 4, 2));

        let mut out = Vec::new();
        telemetry.display_data(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Max Altitude: 4 km"));
        assert!(text.contains("Min Fuel: 80%"));
        assert!(text.contains("Stage Stage 1 reached at update 1"));
    }

    #[test]
    fn test_empty_telemetry_summary() {
        let telemetry = Telemetry::new();
        let mut out = Vec::new();
        telemetry.display_data(&mut out).unwrap();

        assert!(String::from_utf8(out).unwrap().contains("Min Fuel: n/a"));
    }
}
