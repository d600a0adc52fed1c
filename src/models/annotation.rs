// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Ground-truth annotation records.
//!
//! One record is produced for every frame annotated while recording: the
//! wall-clock time, the frame number and the cursor position the operator
//! held over the object of interest.

use crate::util::geometry::Point;
use chrono::{DateTime, Local};
use std::fmt;

/// Timestamp layout used in records and log file names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// A single annotated frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundTruthRecord {
    pub timestamp: DateTime<Local>,
    pub frame_number: i64,
    pub position: Point,
}

impl GroundTruthRecord {
    pub fn new(timestamp: DateTime<Local>, frame_number: i64, position: Point) -> Self {
        Self {
            timestamp,
            frame_number,
            position,
        }
    }
}

/// Formats as one log line: every field followed by a space, then a newline.
impl fmt::Display for GroundTruthRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {} {} {} ",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.frame_number,
            self.position.x,
            self.position.y
        )
    }
}
