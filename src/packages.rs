//! Package dispatch - сборка тренировки из пакета данных датчиков

use anyhow::{bail, Result};
use tracing::debug;

use crate::workout::{Workout, WorkoutKind};

/// Package codes the sensor block can send
pub const VALID_CODES: [&str; 3] = ["SWM", "RUN", "WLK"];

/// Build a workout from a sensor package: a short code plus a flat
/// positional argument list.
///
/// Shared arguments come first (`action`, `duration`, `weight`); variant
/// extras follow in constructor order. Unknown codes fail fast.
pub fn read_package(code: &str, args: &[f64]) -> Result<Workout> {
    debug!(code, ?args, "dispatching sensor package");

    let kind = match code {
        "RUN" => {
            expect_args(code, args, 3)?;
            WorkoutKind::Running
        }
        "WLK" => {
            expect_args(code, args, 4)?;
            WorkoutKind::SportsWalking { height: args[3] }
        }
        "SWM" => {
            expect_args(code, args, 5)?;
            WorkoutKind::Swimming {
                length_pool: args[3],
                count_pool: args[4] as u32,
            }
        }
        other => bail!(
            "unknown workout code '{}', expected one of: {}",
            other,
            VALID_CODES.join(", ")
        ),
    };

    Ok(Workout::new(kind, args[0] as u32, args[1], args[2]))
}

fn expect_args(code: &str, args: &[f64], expected: usize) -> Result<()> {
    if args.len() != expected {
        bail!(
            "{} package needs {} arguments, got {}",
            code,
            expected,
            args.len()
        );
    }
    Ok(())
}
