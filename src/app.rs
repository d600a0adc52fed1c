// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation session.
//!
//! This module contains the main annotation loop. It pulls frames from the
//! video source, draws the cursor crosshair and status caption on a copy of
//! each frame, shows it, waits while pointer events update the session state
//! and appends a ground-truth record for every frame annotated while
//! recording.

use crate::io::ground_truth::GroundTruthLog;
use crate::io::media::{Frame, VideoSource};
use crate::models::annotation::GroundTruthRecord;
use crate::models::session::{SessionState, Status};
use crate::models::settings::{ResizeMode, Settings};
use crate::ui::overlay::{draw_position, draw_status, Stroke, CROSSHAIR_RADIUS};
use crate::ui::window::{Display, WaitOutcome};
use crate::util::geometry::ProcessingSize;
use anyhow::Result;
use chrono::Local;
use std::io::Write;

/// Why the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The source ran out of frames (or failed to deliver one).
    EndOfStream,
    /// The operator pressed the quit key.
    Quit,
}

/// Summary of a finished session.
#[derive(Debug)]
pub struct SessionReport<W> {
    pub exit: ExitReason,
    /// Number of frames decoded from the source.
    pub frames_decoded: i64,
    /// Number of ground-truth records written.
    pub records: usize,
    /// The closed log's underlying writer.
    pub output: W,
}

/// A single annotation run over one video source.
pub struct AnnotationSession<S, D, W>
where
    S: VideoSource,
    D: Display<S::Frame>,
    W: Write,
{
    settings: Settings,
    source: S,
    display: D,
    log: GroundTruthLog<W>,
    processing: ProcessingSize,
    state: SessionState,
    /// Index of the current frame, -1 before the first read.
    frame_number: i64,
    /// Set once frame 0 has been shown for annotation while recording.
    first_frame_annotated: bool,
    current: Option<S::Frame>,
}

impl<S, D, W> AnnotationSession<S, D, W>
where
    S: VideoSource,
    D: Display<S::Frame>,
    W: Write,
{
    pub fn new(
        settings: Settings,
        source: S,
        display: D,
        log: GroundTruthLog<W>,
        processing: ProcessingSize,
    ) -> Self {
        Self {
            settings,
            source,
            display,
            log,
            processing,
            state: SessionState::new(),
            frame_number: -1,
            first_frame_annotated: false,
            current: None,
        }
    }

    /// Run the loop until the stream ends or the operator quits.
    ///
    /// The log is closed exactly once whichever way the loop ends, including
    /// when it fails.
    pub fn run(mut self) -> Result<SessionReport<W>> {
        log::info!("Annotation started");

        let outcome = self.annotate();
        let records = self.log.records();
        let closed = self.log.close();

        let (exit, output) = match (outcome, closed) {
            (Ok(exit), Ok(output)) => (exit, output),
            (Err(e), Ok(_)) | (Ok(_), Err(e)) => return Err(e),
            (Err(e), Err(close_err)) => {
                return Err(e.context(format!(
                    "Ground truth log also failed to close: {:#}",
                    close_err
                )))
            }
        };

        Ok(SessionReport {
            exit,
            frames_decoded: self.frame_number + 1,
            records,
            output,
        })
    }

    fn annotate(&mut self) -> Result<ExitReason> {
        let stroke = Stroke {
            color: self.settings.overlay_color,
            thickness: self.settings.overlay_thickness,
        };

        loop {
            if matches!(self.state.status, Status::Initializing | Status::Recording) {
                // Frame 0 stays on screen for one more wait once recording
                // starts, so it gets annotated before playback moves on.
                if self.frame_number == 0 && !self.first_frame_annotated {
                    self.first_frame_annotated = true;
                    log::info!("Annotating first frame");
                } else {
                    self.current = self.next_frame()?;
                    if self.current.is_some() {
                        self.frame_number += 1;
                    }
                }

                if self.current.is_none() {
                    log::info!("End of stream after {} frames", self.frame_number + 1);
                    return Ok(ExitReason::EndOfStream);
                }

                if self.state.status == Status::Initializing {
                    self.state.status = Status::Ready;
                    log::info!("First frame loaded, ready to record");
                }
            }

            let Some(frame) = self.current.as_ref() else {
                return Ok(ExitReason::EndOfStream);
            };

            let mut output = frame.try_copy()?;
            draw_position(&mut output, self.state.cursor, CROSSHAIR_RADIUS, stroke)?;
            draw_status(&mut output, self.state.status)?;
            self.display.show(&output)?;

            let wait = match self.state.status {
                Status::Ready => self.settings.ready_poll(),
                Status::Initializing | Status::Recording => self.settings.annotation_wait(),
            };

            let state = &mut self.state;
            let outcome = self
                .display
                .pump(wait, &mut |event| state.handle_pointer(event))?;

            match outcome {
                WaitOutcome::QuitRequested => {
                    log::info!("Quit requested at frame {}", self.frame_number);
                    return Ok(ExitReason::Quit);
                }
                WaitOutcome::TimedOut => {
                    if self.state.status == Status::Recording && self.first_frame_annotated {
                        let record = GroundTruthRecord::new(
                            Local::now(),
                            self.frame_number,
                            self.state.cursor,
                        );
                        self.log.append(&record)?;
                    }
                }
            }
        }
    }

    /// Decode the next frame, scaling it when frame data resizing is enabled.
    fn next_frame(&mut self) -> Result<Option<S::Frame>> {
        let frame = self.source.read()?;
        match frame {
            Some(frame)
                if self.processing.resize
                    && self.settings.resize_mode == ResizeMode::FrameData =>
            {
                Ok(Some(frame.resized(self.processing.size)?))
            }
            other => Ok(other),
        }
    }
}
