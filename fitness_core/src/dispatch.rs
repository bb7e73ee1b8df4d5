//! Package dispatch: type codes to workout constructors.
//!
//! The three-letter code vocabulary is fixed, and so is each code's
//! positional parameter order:
//! - `RUN` — running: [action, duration_h, weight_kg]
//! - `WLK` — sports walking: [action, duration_h, weight_kg, height_cm]
//! - `SWM` — swimming: [action, duration_h, weight_kg, pool_length_m, pool_laps]

use crate::types::{RawPackage, RunningWorkout, SwimmingWorkout, WalkingWorkout, Workout};
use crate::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

type Constructor = fn(&[f64]) -> Result<Workout>;

/// Code-to-constructor table - built once and never mutated
static WORKOUT_CODES: Lazy<HashMap<&'static str, Constructor>> = Lazy::new(|| {
    let mut codes: HashMap<&'static str, Constructor> = HashMap::new();
    codes.insert("SWM", swimming_from_values);
    codes.insert("RUN", running_from_values);
    codes.insert("WLK", walking_from_values);
    codes
});

/// Construct a workout from a type code and its positional parameters
///
/// The parameter list length must match the code's signature exactly;
/// there is no named-parameter flexibility.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout> {
    let constructor = WORKOUT_CODES
        .get(workout_type)
        .ok_or_else(|| Error::UnsupportedWorkoutCode(workout_type.to_string()))?;

    let workout = constructor(data)?;
    tracing::debug!("Dispatched {} package to {}", workout_type, workout.label());
    Ok(workout)
}

/// Convenience wrapper for pre-parsed input packages
pub fn read_raw_package(package: &RawPackage) -> Result<Workout> {
    read_package(&package.workout_type, &package.data)
}

fn check_arity(code: &'static str, expected: usize, data: &[f64]) -> Result<()> {
    if data.len() != expected {
        return Err(Error::ArityMismatch {
            code,
            expected,
            got: data.len(),
        });
    }
    Ok(())
}

fn check_duration(duration_h: f64) -> Result<f64> {
    if duration_h <= 0.0 {
        return Err(Error::InvalidDuration(duration_h));
    }
    Ok(duration_h)
}

fn running_from_values(data: &[f64]) -> Result<Workout> {
    check_arity("RUN", 3, data)?;

    Ok(Workout::Running(RunningWorkout {
        action: data[0] as u32,
        duration_h: check_duration(data[1])?,
        weight_kg: data[2],
    }))
}

fn walking_from_values(data: &[f64]) -> Result<Workout> {
    check_arity("WLK", 4, data)?;

    let duration_h = check_duration(data[1])?;
    if data[3] == 0.0 {
        return Err(Error::InvalidHeight(data[3]));
    }

    Ok(Workout::SportsWalking(WalkingWorkout {
        action: data[0] as u32,
        duration_h,
        weight_kg: data[2],
        height_cm: data[3],
    }))
}

fn swimming_from_values(data: &[f64]) -> Result<Workout> {
    check_arity("SWM", 5, data)?;

    Ok(Workout::Swimming(SwimmingWorkout {
        action: data[0] as u32,
        duration_h: check_duration(data[1])?,
        weight_kg: data[2],
        pool_length_m: data[3],
        pool_laps: data[4] as u32,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_code_builds_running() {
        let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(workout.label(), "Running");
    }

    #[test]
    fn test_wlk_code_builds_sports_walking() {
        let workout = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(workout.label(), "SportsWalking");
    }

    #[test]
    fn test_swm_code_builds_swimming() {
        let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(workout.label(), "Swimming");
    }

    #[test]
    fn test_parameters_assigned_positionally() {
        let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();

        let expected = Workout::Swimming(SwimmingWorkout {
            action: 720,
            duration_h: 1.0,
            weight_kg: 80.0,
            pool_length_m: 25.0,
            pool_laps: 40,
        });
        assert_eq!(workout, expected);
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        let err = read_package("XYZ", &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, Error::UnsupportedWorkoutCode(code) if code == "XYZ"));
    }

    #[test]
    fn test_arity_must_match_exactly() {
        let err = read_package("RUN", &[15000.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::ArityMismatch {
                expected: 3,
                got: 2,
                ..
            }
        ));

        let err = read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::ArityMismatch {
                expected: 3,
                got: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_zero_duration_rejected_for_every_code() {
        let packages: [(&str, &[f64]); 3] = [
            ("RUN", &[15000.0, 0.0, 75.0]),
            ("WLK", &[9000.0, 0.0, 75.0, 180.0]),
            ("SWM", &[720.0, 0.0, 80.0, 25.0, 40.0]),
        ];

        for (code, data) in packages {
            let err = read_package(code, data).unwrap_err();
            assert!(
                matches!(err, Error::InvalidDuration(_)),
                "{} accepted zero duration",
                code
            );
        }
    }

    #[test]
    fn test_negative_duration_rejected() {
        let err = read_package("RUN", &[15000.0, -1.0, 75.0]).unwrap_err();
        assert!(matches!(err, Error::InvalidDuration(_)));
    }

    #[test]
    fn test_zero_height_rejected_for_walking() {
        let err = read_package("WLK", &[9000.0, 1.0, 75.0, 0.0]).unwrap_err();
        assert!(matches!(err, Error::InvalidHeight(_)));
    }

    #[test]
    fn test_raw_package_dispatch() {
        let package = RawPackage {
            workout_type: "RUN".into(),
            data: vec![15000.0, 1.0, 75.0],
        };
        let workout = read_raw_package(&package).unwrap();
        assert_eq!(workout.label(), "Running");
    }
}
