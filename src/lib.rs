//! fittrack - workout metrics from raw sensor packages
//!
//! Дистанция, средняя скорость и калории для бега, ходьбы и плавания.

pub mod packages;
pub mod report;
pub mod workout;

pub use packages::read_package;
pub use report::SessionReport;
pub use workout::{Workout, WorkoutKind};
