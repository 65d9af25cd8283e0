//! fittrack - workout metrics from raw sensor packages

use anyhow::Result;
use clap::{Parser, Subcommand};

use fittrack::read_package;

/// Demonstration packages, as received from the sensor block
const DEMO_PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

#[derive(Parser)]
#[command(name = "fittrack")]
#[command(author, version, about = "Workout metrics from raw sensor packages")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Process the built-in demonstration packages
    Demo,

    /// Compute a report for one sensor package
    Report {
        /// Workout code (SWM, RUN or WLK)
        code: String,

        /// Raw sensor values, in constructor order
        #[arg(required = true)]
        values: Vec<f64>,

        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Report { code, values, json }) => {
            let workout = read_package(&code, &values)?;
            let report = workout.report();
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report);
            }
        }

        Some(Commands::Demo) | None => {
            for (code, values) in DEMO_PACKAGES {
                let workout = read_package(code, values)?;
                println!("{}", workout.report());
            }
        }
    }

    Ok(())
}
