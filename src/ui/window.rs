// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main window and pointer input.
//!
//! The window presents annotated frames and is the only place where pointer
//! events enter the program. Events are delivered synchronously from
//! [`Display::pump`], which is also the loop's only blocking call.

use crate::models::session::PointerEvent;
use anyhow::Result;
use std::time::Duration;

/// Why a [`Display::pump`] call returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The wait ran out, or was cut short by a key other than the quit key.
    TimedOut,
    /// The operator pressed the quit key.
    QuitRequested,
}

/// A window that shows frames and reports pointer input.
pub trait Display<F> {
    /// Present a frame.
    fn show(&mut self, frame: &F) -> Result<()>;

    /// Block for up to `timeout`, passing every pointer event that arrives to
    /// `dispatch` in arrival order before returning.
    fn pump(
        &mut self,
        timeout: Duration,
        dispatch: &mut dyn FnMut(PointerEvent),
    ) -> Result<WaitOutcome>;
}

impl<F, D: Display<F> + ?Sized> Display<F> for &mut D {
    fn show(&mut self, frame: &F) -> Result<()> {
        (**self).show(frame)
    }

    fn pump(
        &mut self,
        timeout: Duration,
        dispatch: &mut dyn FnMut(PointerEvent),
    ) -> Result<WaitOutcome> {
        (**self).pump(timeout, dispatch)
    }
}

/// Interpret the key code returned by a wait.
///
/// `-1` means no key was pressed. Some backends report modifier state in the
/// upper bits, so only the low byte is compared with `quit_key`.
pub fn classify_key(key: i32, quit_key: i32) -> WaitOutcome {
    if key != -1 && (key & 0xFF) == quit_key {
        WaitOutcome::QuitRequested
    } else {
        WaitOutcome::TimedOut
    }
}

#[cfg(feature = "video-opencv")]
pub use self::highgui_window::HighGuiWindow;

#[cfg(feature = "video-opencv")]
mod highgui_window {
    use super::{classify_key, Display, WaitOutcome};
    use crate::models::session::PointerEvent;
    use crate::util::geometry::{FrameSize, Point};
    use anyhow::{anyhow, Context, Result};
    use opencv::{core::Mat, highgui};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Full-screen OpenCV window.
    ///
    /// OpenCV requires a `Send + Sync` mouse callback, so raw events are
    /// queued by the callback while `wait_key` runs and dispatched once it
    /// returns, still on the calling thread.
    pub struct HighGuiWindow {
        title: String,
        quit_key: i32,
        events: Arc<Mutex<Vec<PointerEvent>>>,
    }

    impl HighGuiWindow {
        /// Create the window, size it, hook up pointer input and switch it to
        /// full screen.
        pub fn open(title: &str, size: FrameSize, quit_key: i32) -> Result<Self> {
            highgui::named_window(title, highgui::WINDOW_GUI_NORMAL)
                .with_context(|| format!("Failed to create window '{}'", title))?;
            highgui::resize_window(title, size.width, size.height)?;

            let events = Arc::new(Mutex::new(Vec::new()));
            let queue = Arc::clone(&events);
            highgui::set_mouse_callback(
                title,
                Some(Box::new(move |event: i32, x: i32, y: i32, _flags: i32| {
                    let pointer = match event {
                        highgui::EVENT_MOUSEMOVE => PointerEvent::Moved(Point::new(x, y)),
                        highgui::EVENT_LBUTTONDBLCLK => PointerEvent::DoubleClick,
                        _ => return,
                    };
                    if let Ok(mut queue) = queue.lock() {
                        queue.push(pointer);
                    }
                })),
            )
            .context("Failed to register mouse callback")?;

            highgui::set_window_property(
                title,
                highgui::WND_PROP_FULLSCREEN,
                f64::from(highgui::WINDOW_FULLSCREEN),
            )?;

            log::info!(
                "Opened window '{}' sized {}x{}",
                title,
                size.width,
                size.height
            );

            Ok(Self {
                title: title.to_string(),
                quit_key,
                events,
            })
        }
    }

    impl Display<Mat> for HighGuiWindow {
        fn show(&mut self, frame: &Mat) -> Result<()> {
            highgui::imshow(&self.title, frame)?;
            Ok(())
        }

        fn pump(
            &mut self,
            timeout: Duration,
            dispatch: &mut dyn FnMut(PointerEvent),
        ) -> Result<WaitOutcome> {
            // A delay of 0 would block until a key press.
            let delay = timeout.as_millis().clamp(1, i32::MAX as u128) as i32;
            let key = highgui::wait_key(delay)?;

            let pending = std::mem::take(
                &mut *self
                    .events
                    .lock()
                    .map_err(|_| anyhow!("Pointer event queue poisoned"))?,
            );
            for event in pending {
                dispatch(event);
            }

            Ok(classify_key(key, self.quit_key))
        }
    }

    impl Drop for HighGuiWindow {
        fn drop(&mut self) {
            if let Err(e) = highgui::destroy_window(&self.title) {
                log::warn!("Failed to close window '{}': {}", self.title, e);
            }
        }
    }
}
