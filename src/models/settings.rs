// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Program settings.
//!
//! Settings are built once at startup, either from the compiled-in defaults
//! or from a settings file, and are never mutated afterwards. Every field has
//! a default so a settings file only needs to name what it overrides.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// An RGB overlay color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// What happens when the video is taller than the processing height limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeMode {
    /// Only the window is sized to the processing size; frames are shown at
    /// their native resolution.
    #[default]
    WindowOnly,
    /// Decoded frames are scaled down to the processing size as well.
    FrameData,
}

/// Camera intrinsics and lens distortion of the recording camera.
///
/// Kept alongside the annotations for later use; the annotation loop never
/// applies them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraCalibration {
    pub intrinsic_matrix: [[f64; 3]; 3],
    pub distortion_vector: [f64; 5],
}

impl Default for CameraCalibration {
    fn default() -> Self {
        Self {
            intrinsic_matrix: [
                [1.4006590516106746e+03, 0.0, 7.9950000000000000e+02],
                [0.0, 1.4006590516106746e+03, 5.9950000000000000e+02],
                [0.0, 0.0, 1.0],
            ],
            distortion_vector: [
                5.4296267484343998e-02,
                -5.9413030935709088e-01,
                0.0,
                0.0,
                1.9565543630464968e+00,
            ],
        }
    }
}

/// Complete program settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Video file path or stream URI to annotate.
    pub video_source: String,
    /// Milliseconds to wait on each frame before the cursor position is
    /// recorded. Must be long enough for the operator to move the cursor.
    pub annotation_wait_ms: u64,
    /// Poll interval while playback is paused waiting for recording to start.
    pub ready_poll_ms: u64,
    pub window_title: String,
    /// Crosshair and coordinate label color.
    pub overlay_color: Color,
    /// Crosshair line thickness.
    pub overlay_thickness: i32,
    /// Videos taller than this are treated as oversized.
    pub processing_height_limit: i32,
    pub resize_mode: ResizeMode,
    /// Key code that ends the session (27 is Esc). Must fit in one byte.
    pub quit_key: i32,
    /// Directory receiving the ground-truth logs.
    pub output_dir: PathBuf,
    pub calibration: CameraCalibration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            video_source: "input/video.mp4".to_string(),
            annotation_wait_ms: 1000,
            ready_poll_ms: 30,
            window_title: "Ground Truth Annotator".to_string(),
            overlay_color: Color::GREEN,
            overlay_thickness: 1,
            processing_height_limit: 2160,
            resize_mode: ResizeMode::WindowOnly,
            quit_key: 27,
            output_dir: PathBuf::from("output"),
            calibration: CameraCalibration::default(),
        }
    }
}

impl Settings {
    pub fn annotation_wait(&self) -> Duration {
        Duration::from_millis(self.annotation_wait_ms)
    }

    pub fn ready_poll(&self) -> Duration {
        Duration::from_millis(self.ready_poll_ms)
    }

    /// Reject values the annotation loop cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.processing_height_limit <= 0 {
            bail!(
                "processing_height_limit must be positive, got {}",
                self.processing_height_limit
            );
        }
        // Key codes are matched on their low byte only.
        if !(0..=255).contains(&self.quit_key) {
            bail!("quit_key must be in 0..=255, got {}", self.quit_key);
        }
        Ok(())
    }
}
