//! Formula set for workout statistics.
//!
//! Pure per-activity computations of distance, mean speed and spent
//! calories:
//! - Running and walking derive distance from the step count; swimming
//!   derives it from the stroke count, with mean speed taken from pool
//!   geometry instead.
//! - The walking calorie term floors its speed-squared-over-height ratio.
//! - The swimming calorie formula uses only mean speed and weight.

use crate::types::{RunningWorkout, SwimmingWorkout, TrainingSummary, WalkingWorkout, Workout};

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;
/// Distance covered per step, in meters (running and walking)
pub const STEP_LENGTH_M: f64 = 0.65;
/// Distance covered per stroke, in meters (swimming)
pub const STROKE_LENGTH_M: f64 = 1.38;

const RUN_SPEED_FACTOR: f64 = 18.0;
const RUN_SPEED_OFFSET: f64 = 20.0;
const WLK_WEIGHT_FACTOR: f64 = 0.035;
const WLK_SPEED_HEIGHT_FACTOR: f64 = 0.029;
const SWM_SPEED_SHIFT: f64 = 1.1;
const SWM_WEIGHT_FACTOR: f64 = 2.0;

impl RunningWorkout {
    pub fn distance_km(&self) -> f64 {
        f64::from(self.action) * STEP_LENGTH_M / M_IN_KM
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_h
    }

    /// Goes negative below 20/18 km/h; slow sessions are reported as-is
    pub fn spent_calories(&self) -> f64 {
        (RUN_SPEED_FACTOR * self.mean_speed_kmh() - RUN_SPEED_OFFSET) * self.weight_kg / M_IN_KM
            * self.duration_h
            * MIN_IN_H
    }
}

impl WalkingWorkout {
    pub fn distance_km(&self) -> f64 {
        f64::from(self.action) * STEP_LENGTH_M / M_IN_KM
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_h
    }

    pub fn spent_calories(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        // floored, not real, division of speed² by height
        let speed_height_ratio = (speed * speed / self.height_cm).floor();

        (WLK_WEIGHT_FACTOR * self.weight_kg
            + speed_height_ratio * WLK_SPEED_HEIGHT_FACTOR * self.weight_kg)
            * self.duration_h
            * MIN_IN_H
    }
}

impl SwimmingWorkout {
    pub fn distance_km(&self) -> f64 {
        f64::from(self.action) * STROKE_LENGTH_M / M_IN_KM
    }

    /// Mean speed comes from pool length and lap count, not stroke count
    pub fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_laps) / M_IN_KM / self.duration_h
    }

    /// Duration-independent: only mean speed and weight feed in
    pub fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + SWM_SPEED_SHIFT) * SWM_WEIGHT_FACTOR * self.weight_kg
    }
}

impl Workout {
    pub fn duration_h(&self) -> f64 {
        match self {
            Workout::Running(w) => w.duration_h,
            Workout::SportsWalking(w) => w.duration_h,
            Workout::Swimming(w) => w.duration_h,
        }
    }

    pub fn distance_km(&self) -> f64 {
        match self {
            Workout::Running(w) => w.distance_km(),
            Workout::SportsWalking(w) => w.distance_km(),
            Workout::Swimming(w) => w.distance_km(),
        }
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Workout::Running(w) => w.mean_speed_kmh(),
            Workout::SportsWalking(w) => w.mean_speed_kmh(),
            Workout::Swimming(w) => w.mean_speed_kmh(),
        }
    }

    pub fn spent_calories(&self) -> f64 {
        match self {
            Workout::Running(w) => w.spent_calories(),
            Workout::SportsWalking(w) => w.spent_calories(),
            Workout::Swimming(w) => w.spent_calories(),
        }
    }

    /// Snapshot all computed statistics for reporting
    pub fn summary(&self) -> TrainingSummary {
        TrainingSummary {
            training_type: self.label(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}
