//! Builds a house and prints it as OBJ.
//!
//! ```text
//! cargo run --example export                  # seed 001, 3 steps
//! cargo run --example export -- '#042' 8      # seed fragment, step count
//! cargo run --example export -- 7 12 > house.obj
//! ```

use std::io;

use housegen::seed::{format_seed, parse_seed};
use housegen::{export, HouseConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default: WARN for everything, INFO for housegen.
    // Override with RUST_LOG env var (e.g. RUST_LOG=housegen=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("housegen=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let mut config = HouseConfig::default();
    config.seed = parse_seed(&args.next().unwrap_or_default())?;
    if let Some(steps) = args.next() {
        config.set("steps", steps.parse()?)?;
    }

    tracing::info!(fragment = %format_seed(config.seed), "generating");
    let house = config.build()?;
    export::write_obj(&house, io::stdout().lock())?;
    Ok(())
}
