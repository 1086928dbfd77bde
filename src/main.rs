use std::path::PathBuf;

use attitude_sim::*;
use clap::Parser;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(version, about = "Rigid-body spacecraft attitude propagation")]
struct Opts {
    /// Scenario configuration toml file.
    ///
    /// The nominal scenario is used when not provided.
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Print every N-th sample (the final sample is always printed)
    #[arg(long, default_value_t = 1)]
    every: usize,

    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Opts::parse();

    let level = match opts.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = match &opts.scenario {
        Some(path) => {
            info!(path = %path.display(), "Loading scenario");
            ScenarioConfig::load(path)?
        }
        None => ScenarioConfig::default(),
    };

    let mut scenario = config.build()?;
    info!(name = %scenario.name, "Running scenario");

    let timeline = scenario
        .simulation
        .run(&scenario.initial_state, &mut scenario.disturbance)?;

    let mut telemetry = Telemetry::from_timeline(&timeline, opts.every);
    if let Some(orbit) = &scenario.orbit {
        telemetry = telemetry.with_orbit(orbit, scenario.period_unit);
    }
    telemetry.display_data();

    Ok(())
}
