// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video sources and decoded frames.
//!
//! The annotation loop only needs to know the native resolution of a source
//! and to pull frames from it one at a time. The OpenCV implementation is
//! available with the `video-opencv` feature.

use crate::ui::overlay::Canvas;
use crate::util::geometry::FrameSize;
use anyhow::Result;

/// A decoded video frame that overlays can be drawn onto.
pub trait Frame: Canvas + Sized {
    /// Deep copy of the frame, used as the display buffer.
    fn try_copy(&self) -> Result<Self>;

    /// Copy of the frame scaled to `size`.
    fn resized(&self, size: FrameSize) -> Result<Self>;
}

/// A stream of decoded frames.
pub trait VideoSource {
    type Frame: Frame;

    /// Resolution reported by the source before any frame is read.
    fn native_size(&self) -> FrameSize;

    /// Decode the next frame. `None` marks the end of the stream; read
    /// failures are reported the same way.
    fn read(&mut self) -> Result<Option<Self::Frame>>;
}

impl<S: VideoSource + ?Sized> VideoSource for &mut S {
    type Frame = S::Frame;

    fn native_size(&self) -> FrameSize {
        (**self).native_size()
    }

    fn read(&mut self) -> Result<Option<Self::Frame>> {
        (**self).read()
    }
}

#[cfg(feature = "video-opencv")]
pub use self::opencv_backend::VideoFile;

#[cfg(feature = "video-opencv")]
mod opencv_backend {
    use super::{Frame, VideoSource};
    use crate::models::settings::Color;
    use crate::ui::overlay::{Canvas, Font, Stroke, TextStyle};
    use crate::util::geometry::{FrameSize, Point};
    use anyhow::{Context, Result};
    use opencv::{
        core::{self, Mat, Scalar, Size},
        imgproc,
        prelude::*,
        videoio::{self, VideoCapture},
    };

    fn cv_point(point: Point) -> core::Point {
        core::Point::new(point.x, point.y)
    }

    /// OpenCV frames are stored in BGR order.
    fn cv_color(color: Color) -> Scalar {
        Scalar::new(
            f64::from(color.b),
            f64::from(color.g),
            f64::from(color.r),
            0.0,
        )
    }

    impl Canvas for Mat {
        fn size(&self) -> FrameSize {
            FrameSize::new(self.cols(), self.rows())
        }

        fn line(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<()> {
            imgproc::line(
                self,
                cv_point(from),
                cv_point(to),
                cv_color(stroke.color),
                stroke.thickness,
                imgproc::LINE_8,
                0,
            )?;
            Ok(())
        }

        fn text(&mut self, text: &str, origin: Point, style: TextStyle) -> Result<()> {
            let font_face = match style.font {
                Font::Plain => imgproc::FONT_HERSHEY_PLAIN,
                Font::Simplex => imgproc::FONT_HERSHEY_SIMPLEX,
            };
            imgproc::put_text(
                self,
                text,
                cv_point(origin),
                font_face,
                style.scale,
                cv_color(style.color),
                style.thickness,
                imgproc::LINE_8,
                false,
            )?;
            Ok(())
        }
    }

    impl Frame for Mat {
        fn try_copy(&self) -> Result<Self> {
            Ok(self.try_clone()?)
        }

        fn resized(&self, size: FrameSize) -> Result<Self> {
            let mut resized = Mat::default();
            imgproc::resize(
                self,
                &mut resized,
                Size::new(size.width, size.height),
                0.0,
                0.0,
                imgproc::INTER_LANCZOS4,
            )?;
            Ok(resized)
        }
    }

    /// A video file or network stream decoded by OpenCV.
    pub struct VideoFile {
        capture: VideoCapture,
        native_size: FrameSize,
    }

    impl VideoFile {
        /// Open a file path or stream URI.
        ///
        /// A source that cannot be opened is not an error here: it yields no
        /// frames, so the session ends as soon as it starts.
        pub fn open(source: &str) -> Result<Self> {
            let capture = VideoCapture::from_file(source, videoio::CAP_ANY)
                .with_context(|| format!("Failed to create video capture for {}", source))?;

            if !capture.is_opened()? {
                log::error!("Could not open video source {}", source);
            }

            let native_size = FrameSize::new(
                capture.get(videoio::CAP_PROP_FRAME_WIDTH)? as i32,
                capture.get(videoio::CAP_PROP_FRAME_HEIGHT)? as i32,
            );
            log::info!(
                "Opened video source {} ({}x{})",
                source,
                native_size.width,
                native_size.height
            );

            Ok(Self {
                capture,
                native_size,
            })
        }
    }

    impl VideoSource for VideoFile {
        type Frame = Mat;

        fn native_size(&self) -> FrameSize {
            self.native_size
        }

        fn read(&mut self) -> Result<Option<Mat>> {
            let mut frame = Mat::default();
            match self.capture.read(&mut frame) {
                Ok(_) if !frame.empty() => Ok(Some(frame)),
                Ok(_) => Ok(None),
                Err(e) => {
                    log::warn!("Failed to read frame, ending stream: {}", e);
                    Ok(None)
                }
            }
        }
    }
}
