use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use rocket_launch_simulation::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "rocket-launch")]
#[command(about = "Text-driven rocket launch simulator")]
#[command(version)]
struct Args {
    /// Real-time pause per ascent tick, in milliseconds
    #[arg(long, default_value_t = TICK_DURATION_MS)]
    tick_ms: u64,

    /// Pause while system checks run, in milliseconds
    #[arg(long, default_value_t = SYSTEM_CHECKS_DURATION_MS)]
    checks_ms: u64,

    /// Print the telemetry summary when input ends
    #[arg(long)]
    summary: bool,
}

// Logs go to stderr so the console stays readable
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "rocket_launch_simulation=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing();

    let timing = FlightTiming::new(
        Duration::from_millis(args.tick_ms),
        Duration::from_millis(args.checks_ms),
    );
    let mut rocket = Rocket::with_console(io::stdout(), timing);

    let telemetry = Rc::new(RefCell::new(Telemetry::new()));
    rocket.add_observer(telemetry.clone());

    Session::new(&mut rocket, io::stdin().lock()).run()?;

    if args.summary {
        telemetry.borrow().display_data(rocket.console_mut())?;
    }

    Ok(())
}
