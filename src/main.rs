// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! groundmark - ground-truth video annotation
//!
//! Plays back a video while the operator keeps the mouse cursor over the
//! object of interest. While recording, the cursor position on every frame
//! is written to a timestamped ground-truth log.
//!
//! Usage: `groundmark [settings.yaml|settings.json]`

// Without a video backend only the tests drive the annotation core.
#![cfg_attr(not(feature = "video-opencv"), allow(dead_code))]

mod app;
mod io;
mod models;
mod ui;
mod util;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use models::settings::Settings;
use std::path::PathBuf;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => io::serialization::load_settings(&path)?,
        None => Settings::default(),
    };
    log::debug!("Settings: {:?}", settings);

    run(settings)?;

    println!("Processing finished!");
    Ok(())
}

#[cfg(feature = "video-opencv")]
fn run(settings: Settings) -> Result<()> {
    use app::AnnotationSession;
    use io::ground_truth::GroundTruthLog;
    use io::media::{VideoFile, VideoSource};
    use ui::window::HighGuiWindow;
    use util::geometry::processing_size;

    let started_at = chrono::Local::now();

    let source = VideoFile::open(&settings.video_source)?;
    let processing = processing_size(source.native_size(), settings.processing_height_limit);
    if processing.resize {
        log::info!(
            "Video exceeds {} lines, processing size {}x{} ({:?})",
            settings.processing_height_limit,
            processing.size.width,
            processing.size.height,
            settings.resize_mode
        );
    }

    let (log, path) = GroundTruthLog::create(&settings.output_dir, started_at)?;
    let window = HighGuiWindow::open(&settings.window_title, processing.size, settings.quit_key)?;

    let report = AnnotationSession::new(settings, source, window, log, processing).run()?;
    log::info!(
        "Session ended ({:?}): {} frames decoded, {} records written to {}",
        report.exit,
        report.frames_decoded,
        report.records,
        path.display()
    );

    Ok(())
}

#[cfg(not(feature = "video-opencv"))]
fn run(_settings: Settings) -> Result<()> {
    anyhow::bail!(
        "groundmark was built without a video backend; rebuild with `--features video-opencv`"
    )
}
