// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Session state shared between the pointer-event handler and the
//! annotation loop.
//!
//! The display backend dispatches pointer events only while the loop is
//! blocked in its wait, so both sides can work on the same `SessionState`
//! through plain `&mut` borrows.

use crate::util::geometry::Point;

/// Annotation status shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// Waiting for the first frame.
    #[default]
    Initializing,
    /// First frame is shown and playback is paused.
    Ready,
    /// Frames advance and the cursor position is logged for each one.
    Recording,
}

impl Status {
    /// Caption drawn on the frame for this status.
    pub fn caption(self) -> &'static str {
        match self {
            Status::Initializing => "Initialization! Please wait!",
            Status::Ready => "Ready! Set cursor over the centroid of the object of interest and left double click to start recording.",
            Status::Recording => "Recording! Left double click to stop recording.",
        }
    }
}

/// Pointer input relevant to annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// The pointer moved to the given frame coordinates.
    Moved(Point),
    /// Primary button double-click.
    DoubleClick,
}

/// Cursor position and status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub cursor: Point,
    pub status: Status,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one pointer event.
    ///
    /// A double-click stops recording when recording and starts it otherwise,
    /// including while still initializing.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Moved(position) => {
                self.cursor = position;
            }
            PointerEvent::DoubleClick => {
                self.status = match self.status {
                    Status::Recording => Status::Ready,
                    Status::Initializing | Status::Ready => Status::Recording,
                };
                log::info!("Status changed to {:?}", self.status);
            }
        }
    }
}
