//! Workout records - метрики тренировки по данным датчиков

use serde::{Deserialize, Serialize};

use crate::report::SessionReport;

/// Metres covered by one step (running, walking)
pub const LEN_STEP: f64 = 0.65;
/// Metres covered by one stroke (swimming)
pub const LEN_STROKE: f64 = 1.38;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_HOUR: f64 = 60.0;

const RUN_SPEED_COEF: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;
const WLK_WEIGHT_COEF: f64 = 0.035;
const WLK_LOAD_COEF: f64 = 0.029;
const SWM_SPEED_SHIFT: f64 = 1.1;
const SWM_WEIGHT_COEF: f64 = 2.0;

/// Workout variant plus its extra sensor fields
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum WorkoutKind {
    Running,
    SportsWalking {
        height: f64, // рост, см
    },
    Swimming {
        length_pool: f64, // длина бассейна, м
        count_pool: u32,  // сколько раз переплыл
    },
}

impl WorkoutKind {
    pub fn name(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking { .. } => "SportsWalking",
            WorkoutKind::Swimming { .. } => "Swimming",
        }
    }
}

/// One workout session assembled from a sensor package.
///
/// Immutable once built; consumed by [`Workout::report`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Workout {
    pub kind: WorkoutKind,
    pub action: u32,   // steps or strokes
    pub duration: f64, // hours
    pub weight: f64,   // kg
}

impl Workout {
    pub fn new(kind: WorkoutKind, action: u32, duration: f64, weight: f64) -> Self {
        Self { kind, action, duration, weight }
    }

    /// Distance covered (km)
    pub fn distance(&self) -> f64 {
        let step = match self.kind {
            WorkoutKind::Swimming { .. } => LEN_STROKE,
            _ => LEN_STEP,
        };
        self.action as f64 * step / M_IN_KM
    }

    /// Average speed over the whole session (km/h)
    pub fn mean_speed(&self) -> f64 {
        match self.kind {
            WorkoutKind::Swimming { length_pool, count_pool } => {
                length_pool * count_pool as f64 / M_IN_KM / self.duration
            }
            _ => self.distance() / self.duration,
        }
    }

    /// Calories burned (kcal)
    pub fn spent_calories(&self) -> f64 {
        match self.kind {
            WorkoutKind::Running => {
                (RUN_SPEED_COEF * self.mean_speed() - RUN_SPEED_SHIFT) * self.weight / M_IN_KM
                    * self.duration
                    * MIN_IN_HOUR
            }
            WorkoutKind::SportsWalking { height } => {
                // speed² // height: floor division, exactly as in the reference formula
                let load = (self.mean_speed().powi(2) / height).floor();
                (WLK_WEIGHT_COEF * self.weight + load * WLK_LOAD_COEF * self.weight)
                    * self.duration
                    * MIN_IN_HOUR
            }
            WorkoutKind::Swimming { .. } => {
                (self.mean_speed() + SWM_SPEED_SHIFT) * SWM_WEIGHT_COEF * self.weight
            }
        }
    }

    /// Assemble the session summary
    pub fn report(&self) -> SessionReport {
        SessionReport {
            training_type: self.kind.name().to_string(),
            duration: self.duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}
