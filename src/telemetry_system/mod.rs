pub mod logging;
pub mod observer;
pub mod telemetry;
