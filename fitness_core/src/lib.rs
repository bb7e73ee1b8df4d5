#![forbid(unsafe_code)]

//! Core domain model and computations for the Stride workout reporter.
//!
//! This crate provides:
//! - Domain types (workout payloads, raw packages, summaries)
//! - Per-activity formula sets (distance, mean speed, calories)
//! - Type-code dispatch from raw packages to workouts
//! - Summary rendering and batch input parsing

pub mod types;
pub mod error;
pub mod metrics;
pub mod dispatch;
pub mod report;
pub mod input;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use dispatch::{read_package, read_raw_package};
pub use input::read_packages;
