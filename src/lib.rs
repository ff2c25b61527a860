pub mod constants;
pub mod control;
pub mod errors;
pub mod interface;
pub mod telemetry_system;

pub use constants::*;
pub use control::commands::Command;
pub use control::launch_stages::Stage;
pub use control::rocket::{FlightParameters, FlightTiming, Rocket, RocketStatus};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::logging::LoggingObserver;
pub use telemetry_system::observer::{Observable, Observer, SharedObserver};
pub use telemetry_system::telemetry::Telemetry;

// Re-export the command-line surface
pub use interface::parser::parse_input;
pub use interface::session::Session;
