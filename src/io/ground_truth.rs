// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Ground-truth log writer.
//!
//! The log is a plain text file named after the session start time. It is
//! created once, receives one line per annotated frame and is closed exactly
//! once by [`GroundTruthLog::close`].

use crate::models::annotation::{GroundTruthRecord, TIMESTAMP_FORMAT};
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Append-only sink for ground-truth records.
pub struct GroundTruthLog<W: Write> {
    writer: W,
    records: usize,
}

impl GroundTruthLog<BufWriter<File>> {
    /// Create `<dir>/<started_at>_ground_truth`, creating `dir` if needed.
    pub fn create(dir: &Path, started_at: DateTime<Local>) -> Result<(Self, PathBuf)> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

        let path = dir.join(format!("{}_ground_truth", started_at.format(TIMESTAMP_FORMAT)));
        let file = File::create(&path)
            .with_context(|| format!("Failed to create ground truth log {}", path.display()))?;

        log::info!("Writing ground truth to {}", path.display());

        Ok((Self::new(BufWriter::new(file)), path))
    }
}

impl<W: Write> GroundTruthLog<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, records: 0 }
    }

    /// Append one record and flush it to the underlying writer.
    pub fn append(&mut self, record: &GroundTruthRecord) -> Result<()> {
        write!(self.writer, "{}", record).context("Failed to write ground truth record")?;
        self.writer
            .flush()
            .context("Failed to flush ground truth record")?;
        self.records += 1;
        log::debug!(
            "Logged frame {} at ({}, {})",
            record.frame_number,
            record.position.x,
            record.position.y
        );
        Ok(())
    }

    /// Number of records appended so far.
    pub fn records(&self) -> usize {
        self.records
    }

    /// Flush and release the log, returning the underlying writer.
    pub fn close(mut self) -> Result<W> {
        self.writer.flush().context("Failed to flush ground truth log")?;
        log::info!("Closed ground truth log after {} records", self.records);
        Ok(self.writer)
    }
}
