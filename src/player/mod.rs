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

//! Playback control and state management.
//!
//! This module provides the [`Player`] used by the UI to control music
//! playback. The player owns the [`Playlist`] and an [`AudioOutput`], and runs
//! the Stopped/Playing/Paused state machine on top of them. All commands run
//! synchronously on the caller's thread.

#[cfg(test)]
pub(crate) mod fake;
mod mpv_output;

pub(crate) use mpv_output::MpvOutput;

use std::path::Path;

use crate::{
    error::PlayerError,
    model::playlist::{Playlist, scan_folder},
    picker::FolderPicker,
};

/// Represents the current playback status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PlayerState {
    Playing,
    Paused,
    Stopped,
}

/// The audio facility the player drives.
///
/// Implementations own the process's single audio handle. Loading a file may
/// fail immediately or, for backends that decode asynchronously, later on; the
/// latter is reported through [`AudioOutput::take_failure`].
pub(crate) trait AudioOutput {
    fn load(&mut self, path: &Path) -> Result<(), PlayerError>;
    fn play(&mut self) -> Result<(), PlayerError>;
    fn pause(&mut self) -> Result<(), PlayerError>;
    fn resume(&mut self) -> Result<(), PlayerError>;
    fn stop(&mut self) -> Result<(), PlayerError>;

    /// True while a track is loaded and has not finished.
    fn is_busy(&mut self) -> bool;

    /// Returns, once, a failure that happened after [`AudioOutput::load`]
    /// returned.
    fn take_failure(&mut self) -> Option<PlayerError>;
}

pub(crate) struct Player<A: AudioOutput> {
    audio: A,
    playlist: Playlist,
    state: PlayerState,
    extension: String,
}

impl<A: AudioOutput> Player<A> {
    /// Creates a stopped player with an empty playlist.
    ///
    /// # Arguments
    ///
    /// * `audio` - The audio output to drive.
    /// * `extension` - File name suffix, without the dot, of playable files.
    pub(crate) fn new(audio: A, extension: impl Into<String>) -> Self {
        Self {
            audio,
            playlist: Playlist::new(),
            state: PlayerState::Stopped,
            extension: extension.into(),
        }
    }

    pub(crate) fn state(&self) -> PlayerState {
        self.state
    }

    pub(crate) fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Starts or resumes playback.
    ///
    /// Resumes when paused. When stopped, loads the current track from the
    /// active folder and starts it. Playing is left alone.
    pub(crate) fn play(&mut self) -> Result<(), PlayerError> {
        match self.state {
            PlayerState::Playing => Ok(()),
            PlayerState::Paused => {
                self.audio.resume()?;
                self.state = PlayerState::Playing;
                Ok(())
            }
            PlayerState::Stopped => {
                let path = self
                    .playlist
                    .current_path()
                    .ok_or(PlayerError::EmptyPlaylist)?;

                log::info!("Playing {}", path.display());
                self.audio.load(&path)?;
                self.audio.play()?;
                self.state = PlayerState::Playing;
                Ok(())
            }
        }
    }

    pub(crate) fn pause(&mut self) -> Result<(), PlayerError> {
        if self.state == PlayerState::Playing {
            self.audio.pause()?;
            self.state = PlayerState::Paused;
        }
        Ok(())
    }

    pub(crate) fn stop(&mut self) -> Result<(), PlayerError> {
        // Always reaches Stopped, even if the backend complains
        self.state = PlayerState::Stopped;
        self.audio.stop()
    }

    pub(crate) fn next(&mut self) -> Result<(), PlayerError> {
        self.playlist.advance()?;
        self.restart()
    }

    pub(crate) fn prev(&mut self) -> Result<(), PlayerError> {
        self.playlist.retreat()?;
        self.restart()
    }

    /// Asks the picker, opened in `start`, for a folder and, if one is chosen,
    /// makes it the new playlist and starts playing its first track.
    ///
    /// Returns `Ok(false)` when the picker was cancelled, in which case nothing
    /// changes.
    pub(crate) fn select_folder(
        &mut self,
        picker: &mut dyn FolderPicker,
        start: &Path,
    ) -> Result<bool, PlayerError> {
        let Some(folder) = picker.choose_directory(start)? else {
            log::debug!("Folder selection cancelled");
            return Ok(false);
        };

        self.load_folder(&folder)?;
        Ok(true)
    }

    /// Replaces the playlist with the playable files of `folder`, then plays
    /// from the first one.
    pub(crate) fn load_folder(&mut self, folder: &Path) -> Result<(), PlayerError> {
        // An unreadable folder still replaces the playlist, with nothing in it
        let (tracks, scan_error) = match scan_folder(folder, &self.extension) {
            Ok(tracks) => (tracks, None),
            Err(error) => (Vec::new(), Some(error)),
        };

        log::info!(
            "Selected folder {} with {} playable files",
            folder.display(),
            tracks.len()
        );

        self.playlist.replace(folder.to_path_buf(), tracks);
        self.stop()?;

        if let Some(error) = scan_error {
            return Err(error);
        }

        if self.playlist.is_empty() {
            return Err(PlayerError::NoPlayableFiles(folder.to_path_buf()));
        }

        self.play()
    }

    /// Reconciles the state machine with the audio backend, once per tick.
    ///
    /// A track that failed to decode or that reached its end returns the player
    /// to Stopped. A failure is handed back to the caller to report.
    pub(crate) fn sync(&mut self) -> Result<(), PlayerError> {
        if let Some(failure) = self.audio.take_failure() {
            self.state = PlayerState::Stopped;
            return Err(failure);
        }

        if self.state == PlayerState::Playing && !self.audio.is_busy() {
            log::debug!("Track finished");
            self.state = PlayerState::Stopped;
        }

        Ok(())
    }

    fn restart(&mut self) -> Result<(), PlayerError> {
        self.stop()?;
        self.play()
    }

    #[cfg(test)]
    pub(crate) fn audio(&self) -> &A {
        &self.audio
    }

    #[cfg(test)]
    pub(crate) fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    #[cfg(test)]
    pub(crate) fn playlist_mut(&mut self) -> &mut Playlist {
        &mut self.playlist
    }
}
