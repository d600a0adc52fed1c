// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides the pixel-space types shared by the overlay and the
//! annotation loop, the processing-size computation and the clamping rules
//! for the cursor crosshair.

use serde::{Deserialize, Serialize};

/// A 2D point in pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Width and height of a frame or window in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: i32,
    pub height: i32,
}

impl FrameSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Resolution used for display sizing decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSize {
    pub size: FrameSize,
    /// Set when the native resolution exceeds the height ceiling.
    pub resize: bool,
}

/// Compute the processing size for a video with the given native resolution.
///
/// Videos taller than `height_limit` are scaled uniformly so that their height
/// equals the limit; the scaled width is truncated toward zero. Anything at or
/// below the limit is kept as is.
pub fn processing_size(native: FrameSize, height_limit: i32) -> ProcessingSize {
    if native.height > height_limit {
        let ratio = f64::from(height_limit) / f64::from(native.height);
        let width = (f64::from(native.width) * ratio) as i32;

        ProcessingSize {
            size: FrameSize::new(width, height_limit),
            resize: true,
        }
    } else {
        ProcessingSize {
            size: native,
            resize: false,
        }
    }
}

/// Far endpoints of the four crosshair arms (up, down, left, right).
///
/// Each arm reaches `radius` pixels from `center`, but stops at the frame edge
/// when it would leave `[0, width] x [0, height]`.
pub fn crosshair_arms(center: Point, radius: i32, bounds: FrameSize) -> [Point; 4] {
    let clamp_x = |x: i32| x.clamp(0, bounds.width.max(0));
    let clamp_y = |y: i32| y.clamp(0, bounds.height.max(0));

    [
        Point::new(center.x, clamp_y(center.y.saturating_sub(radius))),
        Point::new(center.x, clamp_y(center.y.saturating_add(radius))),
        Point::new(clamp_x(center.x.saturating_sub(radius)), center.y),
        Point::new(clamp_x(center.x.saturating_add(radius)), center.y),
    ]
}
