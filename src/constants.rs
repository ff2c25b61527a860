// Initial State
pub const INITIAL_FUEL: u32 = 100; // %
pub const INITIAL_ALTITUDE: u32 = 0; // km
pub const INITIAL_SPEED: u32 = 0; // km/h

// Pacing
pub const TICK_DURATION_MS: u64 = 1_000; // one simulated second
pub const SYSTEM_CHECKS_DURATION_MS: u64 = 2_000;

// Console
pub const COMMAND_PROMPT: &str = "Enter a command: ";
pub const AVAILABLE_COMMANDS: &str = "start_checks, launch, fast_forward X";
