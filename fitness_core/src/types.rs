//! Core domain types for the Stride workout reporter.
//!
//! This module defines the fundamental types used throughout the system:
//! - Per-activity workout payloads (running, sports walking, swimming)
//! - The `Workout` enum tying each payload to its activity kind
//! - Raw sensor packages as they arrive from the outside
//! - Derived training summaries

use serde::{Deserialize, Serialize};

/// A running workout: steps counted over a timed session
#[derive(Clone, Debug, PartialEq)]
pub struct RunningWorkout {
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
}

/// A sports walking workout; the athlete's height feeds the calorie formula
#[derive(Clone, Debug, PartialEq)]
pub struct WalkingWorkout {
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
}

/// A swimming workout: strokes counted, speed derived from pool laps
#[derive(Clone, Debug, PartialEq)]
pub struct SwimmingWorkout {
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
    pub pool_length_m: f64,
    pub pool_laps: u32,
}

/// One recorded workout with its kind-specific parameters
///
/// A closed set of three activities. Each variant carries its own payload
/// and pairs with its own formula set in [`crate::metrics`], so there is
/// no fallback "unimplemented" path for calories.
#[derive(Clone, Debug, PartialEq)]
pub enum Workout {
    Running(RunningWorkout),
    SportsWalking(WalkingWorkout),
    Swimming(SwimmingWorkout),
}

impl Workout {
    /// Canonical label for the activity kind
    pub fn label(&self) -> &'static str {
        match self {
            Workout::Running(_) => "Running",
            Workout::SportsWalking(_) => "SportsWalking",
            Workout::Swimming(_) => "Swimming",
        }
    }
}

/// A raw sensor package: type code plus positional parameter list
///
/// The wire form of one workout before dispatch. Parameter order is fixed
/// per code; see [`crate::dispatch`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

/// Read-only snapshot of one workout's computed statistics
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TrainingSummary {
    pub training_type: &'static str,
    pub duration_h: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}
