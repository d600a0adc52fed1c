// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Overlay drawing on top of video frames.
//!
//! This module draws the cursor crosshair with its coordinate label and the
//! status caption. Drawing goes through the [`Canvas`] trait so the same code
//! renders into backend frames and into test doubles.

use crate::models::session::Status;
use crate::models::settings::Color;
use crate::util::geometry::{crosshair_arms, FrameSize, Point};
use anyhow::Result;

/// Radius of the cursor crosshair in pixels.
pub const CROSSHAIR_RADIUS: i32 = 10;

/// Top-left anchor of the status caption.
pub const CAPTION_ORIGIN: Point = Point { x: 50, y: 50 };

/// Font faces available to overlay text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    /// Small plain face used for coordinate labels.
    Plain,
    /// Larger face used for the status caption.
    Simplex,
}

/// How a piece of text is rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub scale: f64,
    pub color: Color,
    pub thickness: i32,
}

/// Stroke used for overlay lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    pub color: Color,
    pub thickness: i32,
}

/// A drawable frame buffer.
pub trait Canvas {
    /// Current frame size in pixels.
    fn size(&self) -> FrameSize;

    /// Draw a straight line segment.
    fn line(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<()>;

    /// Draw text with its baseline starting at `origin`.
    fn text(&mut self, text: &str, origin: Point, style: TextStyle) -> Result<()>;
}

/// Draw the position marker: a crosshair clamped to the frame and a
/// `[x,y]` label `radius + 20` pixels below the point.
pub fn draw_position<C: Canvas + ?Sized>(
    canvas: &mut C,
    center: Point,
    radius: i32,
    stroke: Stroke,
) -> Result<()> {
    for arm in crosshair_arms(center, radius, canvas.size()) {
        canvas.line(center, arm, stroke)?;
    }

    let label = format!("[{},{}]", center.x, center.y);
    let origin = Point::new(center.x, center.y.saturating_add(radius).saturating_add(20));
    canvas.text(
        &label,
        origin,
        TextStyle {
            font: Font::Plain,
            scale: 1.0,
            color: stroke.color,
            thickness: 1,
        },
    )
}

/// Draw the caption describing the current status.
pub fn draw_status<C: Canvas + ?Sized>(canvas: &mut C, status: Status) -> Result<()> {
    canvas.text(
        status.caption(),
        CAPTION_ORIGIN,
        TextStyle {
            font: Font::Simplex,
            scale: 1.0,
            color: Color::RED,
            thickness: 2,
        },
    )
}
