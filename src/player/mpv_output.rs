// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! MPV-backed audio output.
//!
//! `libmpv` decodes and plays on its own threads, so loading a file only
//! queues it. Whether the load worked is learned later from the MPV event
//! queue, which is drained without blocking every time the player asks the
//! output about its state.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::{error::PlayerError, player::AudioOutput};

/// The part of the MPV event stream the output cares about.
#[derive(Debug, PartialEq, Eq)]
enum FileEvent {
    Started,
    Loaded,
    Failed(String),
}

impl FileEvent {
    fn from_mpv(event: &mpv::Event) -> Option<Self> {
        match event {
            mpv::Event::StartFile => Some(FileEvent::Started),
            mpv::Event::FileLoaded => Some(FileEvent::Loaded),
            mpv::Event::EndFile(Err(error)) => Some(FileEvent::Failed(format!("{:?}", error))),
            _ => None,
        }
    }
}

/// Follows one `loadfile` through the MPV event stream.
///
/// Events still queued for the file being replaced arrive before the new
/// file's `StartFile`. They are ignored so that a late failure of the old file
/// is not charged to the new one.
#[derive(Debug, Default)]
struct LoadTracker {
    /// File most recently handed to MPV.
    current: Option<PathBuf>,
    /// MPV has begun opening `current`.
    started: bool,
    /// Set between `loadfile` and MPV confirming the file opened.
    loading: bool,
    failure: Option<PlayerError>,
}

impl LoadTracker {
    fn begin(&mut self, path: &Path) {
        self.current = Some(path.to_path_buf());
        self.started = false;
        self.loading = true;
        self.failure = None;
    }

    fn cancel(&mut self) {
        self.loading = false;
    }

    fn observe(&mut self, event: FileEvent) {
        match event {
            FileEvent::Started => self.started = true,
            FileEvent::Loaded if self.started => self.loading = false,
            FileEvent::Failed(reason) if self.started => {
                self.loading = false;
                let path = self.current.clone().unwrap_or_default();
                log::warn!("MPV failed to play {}: {}", path.display(), reason);
                self.failure = Some(PlayerError::Decode { path, reason });
            }
            ignored => log::debug!("Ignoring {:?} from the previous file", ignored),
        }
    }
}

pub(crate) struct MpvOutput {
    handler: mpv::MpvHandler,
    tracker: LoadTracker,
}

impl MpvOutput {
    /// Creates the MPV context, audio only.
    ///
    /// # Errors
    ///
    /// Returns an error if `libmpv` cannot be initialised, which is fatal at
    /// startup.
    pub(crate) fn new() -> Result<Self> {
        let handler = (|| {
            let mut builder =
                mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
            builder
                .set_option("vo", "null")
                .context("Failed to set no video output")?;
            builder
                .set_option("idle", "yes")
                .context("Failed to enable idle mode")?;
            builder.build().context("Failed to build MPV handler")
        })()?;

        Ok(Self {
            handler,
            tracker: LoadTracker::default(),
        })
    }

    /// Drains the MPV event queue without waiting.
    fn process_mpv_events(&mut self) {
        while let Some(mpv_event) = self.handler.wait_event(0.0) {
            if let Some(event) = FileEvent::from_mpv(&mpv_event) {
                self.tracker.observe(event);
            }
        }
    }

    fn command(&mut self, args: &[&str]) -> Result<(), PlayerError> {
        self.handler
            .command(args)
            .map_err(|e| PlayerError::Backend(format!("{} failed: {:?}", args.join(" "), e)))
    }

    fn set_paused(&mut self, paused: bool) -> Result<(), PlayerError> {
        self.handler
            .set_property("pause", paused)
            .map_err(|e| PlayerError::Backend(format!("Failed to set pause: {:?}", e)))
    }
}

impl AudioOutput for MpvOutput {
    fn load(&mut self, path: &Path) -> Result<(), PlayerError> {
        // MPV would only report a missing file asynchronously
        if !path.is_file() {
            return Err(PlayerError::Decode {
                path: path.to_path_buf(),
                reason: "file not found".to_string(),
            });
        }

        let filename = path.to_str().ok_or_else(|| PlayerError::Decode {
            path: path.to_path_buf(),
            reason: "path is not valid UTF-8".to_string(),
        })?;

        // Discard anything left over from the previous file
        self.process_mpv_events();

        // Loaded paused so that play() is what starts the audio
        self.set_paused(true)?;
        self.command(&["loadfile", filename, "replace"])?;

        self.tracker.begin(path);
        Ok(())
    }

    fn play(&mut self) -> Result<(), PlayerError> {
        self.set_paused(false)
    }

    fn pause(&mut self) -> Result<(), PlayerError> {
        self.set_paused(true)
    }

    fn resume(&mut self) -> Result<(), PlayerError> {
        self.set_paused(false)
    }

    fn stop(&mut self) -> Result<(), PlayerError> {
        self.tracker.cancel();
        self.command(&["stop"])
    }

    fn is_busy(&mut self) -> bool {
        self.process_mpv_events();
        if self.tracker.loading {
            return true;
        }

        let idle = self
            .handler
            .get_property::<bool>("idle-active")
            .unwrap_or(true);
        !idle
    }

    fn take_failure(&mut self) -> Option<PlayerError> {
        self.process_mpv_events();
        self.tracker.failure.take()
    }
}
