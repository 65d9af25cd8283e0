//! Session report - итоговое сообщение о тренировке

use std::fmt;

use serde::{Deserialize, Serialize};

/// Final summary of one workout's metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    pub training_type: String,
    pub duration: f64, // hours
    pub distance: f64, // km
    pub speed: f64,    // km/h
    pub calories: f64, // kcal
}

impl fmt::Display for SessionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(training_type: &str, duration: f64, distance: f64, speed: f64, calories: f64) -> SessionReport {
        SessionReport {
            training_type: training_type.to_string(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    #[test]
    fn test_message_template() {
        let r = report("Swimming", 1.0, 0.9936, 1.0, 336.0);
        assert_eq!(
            r.to_string(),
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; \
             Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; \
             Потрачено ккал: 336.000."
        );
    }

    #[test]
    fn test_three_decimals_regardless_of_magnitude() {
        let r = report("Running", 0.5, 12345.6789, 0.0001, 699.75);
        let msg = r.to_string();
        assert!(msg.contains("Длительность: 0.500 ч."));
        assert!(msg.contains("Дистанция: 12345.679 км"));
        assert!(msg.contains("Ср. скорость: 0.000 км/ч"));
        assert!(msg.contains("Потрачено ккал: 699.750."));
    }

    #[test]
    fn test_json_round_trip() {
        let r = report("SportsWalking", 1.0, 5.85, 5.85, 157.5);
        let json = serde_json::to_string(&r).unwrap();
        let back: SessionReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.training_type, "SportsWalking");
        assert_eq!(back.calories, 157.5);
    }
}
