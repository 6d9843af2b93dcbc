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

//! Recoverable playback and library errors.
//!
//! Every variant except [`PlayerError::Io`] is handled inside the event loop,
//! either silently or by showing a [`Notice`] to the user.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum PlayerError {
    #[error("the playlist is empty")]
    EmptyPlaylist,

    #[error("no playable files found in {}", .0.display())]
    NoPlayableFiles(PathBuf),

    #[error("cannot play {}: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("cannot read folder {}", .path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("audio backend failure: {0}")]
    Backend(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A message shown to the user in a modal overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Notice {
    pub(crate) title: String,
    pub(crate) message: String,
}

impl Notice {
    pub(crate) fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

impl PlayerError {
    /// Converts the error into the notice the user should see, if any.
    ///
    /// An empty playlist is a silent no-op and a terminal failure is not
    /// something the UI can still show, so neither produces a notice.
    pub(crate) fn notice(&self) -> Option<Notice> {
        match self {
            PlayerError::EmptyPlaylist | PlayerError::Io(_) => None,
            PlayerError::NoPlayableFiles(_) => Some(Notice::new(
                "No Music Found",
                "No music files found in selected folder.",
            )),
            PlayerError::Decode { .. } => Some(Notice::new("Cannot Play Track", self.to_string())),
            PlayerError::Scan { source, .. } => Some(Notice::new(
                "Cannot Read Folder",
                format!("{}: {}", self, source),
            )),
            PlayerError::Backend(_) => Some(Notice::new("Audio Error", self.to_string())),
        }
    }
}
