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

//! Stand-ins for the audio backend and the folder chooser.

use std::path::{Path, PathBuf};

use crate::{error::PlayerError, picker::FolderPicker, player::AudioOutput};

/// Records every call; optionally refuses to load one file.
#[derive(Default)]
pub(crate) struct FakeOutput {
    pub(crate) calls: Vec<String>,
    pub(crate) loaded: Option<PathBuf>,
    pub(crate) busy: bool,
    pub(crate) reject: Option<String>,
    pub(crate) failure: Option<PlayerError>,
}

impl AudioOutput for FakeOutput {
    fn load(&mut self, path: &Path) -> Result<(), PlayerError> {
        self.calls.push(format!("load {}", path.display()));
        if let Some(reject) = &self.reject {
            if path.ends_with(reject) {
                return Err(PlayerError::Decode {
                    path: path.to_path_buf(),
                    reason: "corrupt".to_string(),
                });
            }
        }
        self.loaded = Some(path.to_path_buf());
        Ok(())
    }

    fn play(&mut self) -> Result<(), PlayerError> {
        self.calls.push("play".to_string());
        self.busy = true;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), PlayerError> {
        self.calls.push("pause".to_string());
        Ok(())
    }

    fn resume(&mut self) -> Result<(), PlayerError> {
        self.calls.push("resume".to_string());
        Ok(())
    }

    fn stop(&mut self) -> Result<(), PlayerError> {
        self.calls.push("stop".to_string());
        self.busy = false;
        Ok(())
    }

    fn is_busy(&mut self) -> bool {
        self.busy
    }

    fn take_failure(&mut self) -> Option<PlayerError> {
        self.failure.take()
    }
}

/// Returns a fixed answer and remembers where it was opened.
#[derive(Default)]
pub(crate) struct FakePicker {
    pub(crate) answer: Option<PathBuf>,
    pub(crate) opened_in: Option<PathBuf>,
}

impl FakePicker {
    pub(crate) fn choosing(dir: &Path) -> Self {
        Self {
            answer: Some(dir.to_path_buf()),
            opened_in: None,
        }
    }
}

impl FolderPicker for FakePicker {
    fn choose_directory(&mut self, start: &Path) -> Result<Option<PathBuf>, PlayerError> {
        self.opened_in = Some(start.to_path_buf());
        Ok(self.answer.clone())
    }
}
