// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scripted frames, sources and displays for driving the annotation loop
//! without a video backend.

use crate::io::media::{Frame, VideoSource};
use crate::models::session::PointerEvent;
use crate::ui::overlay::{Canvas, Stroke, TextStyle};
use crate::ui::window::{Display, WaitOutcome};
use crate::util::geometry::{FrameSize, Point};
use anyhow::Result;
use std::collections::VecDeque;
use std::time::Duration;

/// Something drawn onto a [`FakeFrame`].
#[derive(Debug, Clone, PartialEq)]
pub enum Drawing {
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Text {
        text: String,
        origin: Point,
        style: TextStyle,
    },
}

/// A frame that records what is drawn on it.
#[derive(Debug, Clone, PartialEq)]
pub struct FakeFrame {
    /// Position of the frame in its source.
    pub id: usize,
    pub size: FrameSize,
    pub drawings: Vec<Drawing>,
}

impl FakeFrame {
    pub fn new(id: usize, size: FrameSize) -> Self {
        Self {
            id,
            size,
            drawings: Vec::new(),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.drawings.iter().filter_map(|d| match d {
            Drawing::Line { from, to, .. } => Some((*from, *to)),
            Drawing::Text { .. } => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.drawings.iter().filter_map(|d| match d {
            Drawing::Text { text, origin, .. } => Some((text.as_str(), *origin)),
            Drawing::Line { .. } => None,
        })
    }
}

impl Canvas for FakeFrame {
    fn size(&self) -> FrameSize {
        self.size
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<()> {
        self.drawings.push(Drawing::Line { from, to, stroke });
        Ok(())
    }

    fn text(&mut self, text: &str, origin: Point, style: TextStyle) -> Result<()> {
        self.drawings.push(Drawing::Text {
            text: text.to_string(),
            origin,
            style,
        });
        Ok(())
    }
}

impl Frame for FakeFrame {
    fn try_copy(&self) -> Result<Self> {
        Ok(self.clone())
    }

    fn resized(&self, size: FrameSize) -> Result<Self> {
        Ok(Self {
            size,
            ..self.clone()
        })
    }
}

/// A source producing a fixed number of blank frames.
pub struct ScriptedSource {
    native_size: FrameSize,
    remaining: usize,
    /// Number of `read` calls so far, including the one that hit the end.
    pub reads: usize,
}

impl ScriptedSource {
    pub fn new(frames: usize, native_size: FrameSize) -> Self {
        Self {
            native_size,
            remaining: frames,
            reads: 0,
        }
    }
}

impl VideoSource for ScriptedSource {
    type Frame = FakeFrame;

    fn native_size(&self) -> FrameSize {
        self.native_size
    }

    fn read(&mut self) -> Result<Option<FakeFrame>> {
        let id = self.reads;
        self.reads += 1;
        if self.remaining == 0 {
            return Ok(None);
        }
        self.remaining -= 1;
        Ok(Some(FakeFrame::new(id, self.native_size)))
    }
}

/// What happens during one wait.
#[derive(Debug, Clone)]
pub struct Step {
    pub events: Vec<PointerEvent>,
    pub outcome: WaitOutcome,
}

impl Step {
    /// A wait that times out after delivering `events`.
    pub fn timeout(events: impl IntoIterator<Item = PointerEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            outcome: WaitOutcome::TimedOut,
        }
    }

    /// A wait ended by the quit key after delivering `events`.
    pub fn quit(events: impl IntoIterator<Item = PointerEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            outcome: WaitOutcome::QuitRequested,
        }
    }
}

/// A display that plays back scripted waits and keeps every shown frame.
///
/// Once the script runs out every further wait ends with the quit key.
#[derive(Default)]
pub struct ScriptedDisplay {
    steps: VecDeque<Step>,
    pub shown: Vec<FakeFrame>,
    pub waits: Vec<Duration>,
}

impl ScriptedDisplay {
    pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn shown_ids(&self) -> Vec<usize> {
        self.shown.iter().map(|frame| frame.id).collect()
    }
}

impl Display<FakeFrame> for ScriptedDisplay {
    fn show(&mut self, frame: &FakeFrame) -> Result<()> {
        self.shown.push(frame.clone());
        Ok(())
    }

    fn pump(
        &mut self,
        timeout: Duration,
        dispatch: &mut dyn FnMut(PointerEvent),
    ) -> Result<WaitOutcome> {
        self.waits.push(timeout);
        let step = self.steps.pop_front().unwrap_or(Step::quit([]));
        for event in step.events {
            dispatch(event);
        }
        Ok(step.outcome)
    }
}
