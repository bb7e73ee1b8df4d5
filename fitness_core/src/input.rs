//! Batch input: JSON Lines package files.
//!
//! One JSON object per line, e.g.
//! `{"workout_type": "RUN", "data": [15000, 1, 75]}`.
//! Blank lines are skipped; a malformed line aborts the read.

use crate::types::RawPackage;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a batch of workout packages from a JSONL file
pub fn read_packages(path: &Path) -> Result<Vec<RawPackage>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut packages = Vec::new();
    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        let package: RawPackage = serde_json::from_str(&line).map_err(|e| {
            Error::Other(format!("invalid package at line {}: {}", line_num + 1, e))
        })?;
        packages.push(package);
    }

    tracing::debug!("Read {} packages from {:?}", packages.len(), path);
    Ok(packages)
}
