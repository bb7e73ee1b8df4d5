//! Rendering of training summaries.
//!
//! One fixed single-line template per summary; every numeric field is
//! printed with three-decimal fixed-point precision.

use crate::types::TrainingSummary;

impl TrainingSummary {
    /// Render the summary as its single-line message
    pub fn message(&self) -> String {
        format!(
            "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Mean speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type,
            self.duration_h,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::read_package;

    #[test]
    fn test_swimming_message() {
        let summary = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])
            .unwrap()
            .summary();

        assert_eq!(
            summary.message(),
            "Training type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Mean speed: 1.000 km/h; Calories burned: 336.000."
        );
    }

    #[test]
    fn test_running_message() {
        let summary = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap().summary();

        assert_eq!(
            summary.message(),
            "Training type: Running; Duration: 1.000 h; Distance: 9.750 km; \
             Mean speed: 9.750 km/h; Calories burned: 699.750."
        );
    }

    #[test]
    fn test_walking_message() {
        let summary = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0])
            .unwrap()
            .summary();

        assert_eq!(
            summary.message(),
            "Training type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; \
             Mean speed: 5.850 km/h; Calories burned: 157.500."
        );
    }
}
