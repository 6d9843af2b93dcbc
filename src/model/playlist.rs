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

//! The playlist and the folder scan that fills it.
//!
//! A playlist is always sourced from exactly one folder. Tracks keep the order
//! the platform lists them in, they are never sorted.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{error::PlayerError, model::Track};

#[derive(Debug, Default)]
pub(crate) struct Playlist {
    folder: Option<PathBuf>,
    tracks: Vec<Track>,
    current_index: usize,
}

impl Playlist {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole playlist and rewinds to the first track.
    pub(crate) fn replace(&mut self, folder: PathBuf, tracks: Vec<Track>) {
        self.folder = Some(folder);
        self.tracks = tracks;
        self.current_index = 0;
    }

    pub(crate) fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub(crate) fn len(&self) -> usize {
        self.tracks.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub(crate) fn folder(&self) -> Option<&Path> {
        self.folder.as_deref()
    }

    pub(crate) fn current_index(&self) -> usize {
        self.current_index
    }

    pub(crate) fn current(&self) -> Option<&Track> {
        self.tracks.get(self.current_index)
    }

    /// Full path of the current track.
    pub(crate) fn current_path(&self) -> Option<PathBuf> {
        let folder = self.folder.as_ref()?;
        self.current().map(|track| folder.join(&track.name))
    }

    /// Moves to the next track, wrapping to the first.
    pub(crate) fn advance(&mut self) -> Result<usize, PlayerError> {
        let len = self.non_empty_len()?;
        self.current_index = (self.current_index + 1) % len;
        Ok(self.current_index)
    }

    /// Moves to the previous track, wrapping to the last.
    pub(crate) fn retreat(&mut self) -> Result<usize, PlayerError> {
        let len = self.non_empty_len()?;
        self.current_index = (self.current_index + len - 1) % len;
        Ok(self.current_index)
    }

    fn non_empty_len(&self) -> Result<usize, PlayerError> {
        match self.tracks.len() {
            0 => Err(PlayerError::EmptyPlaylist),
            len => Ok(len),
        }
    }

    #[cfg(test)]
    pub(crate) fn set_current_index(&mut self, index: usize) {
        self.current_index = index.min(self.tracks.len().saturating_sub(1));
    }
}

/// Lists the playable files directly inside `folder`.
///
/// A file is playable when its name ends with `.` followed by `extension`,
/// compared case-sensitively. Symlinks to files count as files.
/// Sub-directories are not descended into.
pub(crate) fn scan_folder(folder: &Path, extension: &str) -> Result<Vec<Track>, PlayerError> {
    let suffix = format!(".{}", extension);
    let mut tracks = Vec::new();

    for entry in WalkDir::new(folder).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| PlayerError::Scan {
            path: folder.to_path_buf(),
            source,
        })?;

        // Follows symlinks, dangling ones are skipped
        if !entry.path().is_file() {
            continue;
        }

        // Names that are not valid UTF-8 cannot be displayed, skip them
        if let Some(name) = entry.file_name().to_str() {
            if name.ends_with(&suffix) {
                tracks.push(Track::new(name));
            }
        }
    }

    Ok(tracks)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn playlist_of(names: &[&str]) -> Playlist {
        let mut playlist = Playlist::new();
        playlist.replace(
            PathBuf::from("/music"),
            names.iter().map(|n| Track::new(*n)).collect(),
        );
        playlist
    }

    #[test]
    fn advance_wraps_around() {
        let mut playlist = playlist_of(&["t1.mp3", "t2.mp3", "t3.mp3"]);
        playlist.set_current_index(2);

        assert_eq!(playlist.advance().unwrap(), 0);
        assert_eq!(playlist.advance().unwrap(), 1);
    }

    #[test]
    fn advancing_len_times_is_a_full_cycle() {
        for len in 1..=7 {
            let names: Vec<String> = (0..len).map(|i| format!("{i}.mp3")).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let mut playlist = playlist_of(&refs);
            playlist.set_current_index(len / 2);
            let start = playlist.current_index();

            for _ in 0..len {
                playlist.advance().unwrap();
            }

            assert_eq!(playlist.current_index(), start, "len {len}");
        }
    }

    #[test]
    fn retreat_undoes_advance() {
        for start in 0..4 {
            let mut playlist = playlist_of(&["a.mp3", "b.mp3", "c.mp3", "d.mp3"]);
            playlist.set_current_index(start);

            playlist.advance().unwrap();
            playlist.retreat().unwrap();

            assert_eq!(playlist.current_index(), start);
        }
    }

    #[test]
    fn retreat_from_first_goes_to_last() {
        let mut playlist = playlist_of(&["a.mp3", "b.mp3", "c.mp3"]);
        assert_eq!(playlist.retreat().unwrap(), 2);
    }

    #[test]
    fn single_track_wraps_onto_itself() {
        let mut playlist = playlist_of(&["only.mp3"]);
        assert_eq!(playlist.advance().unwrap(), 0);
        assert_eq!(playlist.retreat().unwrap(), 0);
    }

    #[test]
    fn empty_playlist_cannot_move() {
        let mut playlist = Playlist::new();

        assert!(matches!(playlist.advance(), Err(PlayerError::EmptyPlaylist)));
        assert!(matches!(playlist.retreat(), Err(PlayerError::EmptyPlaylist)));
        assert_eq!(playlist.current_index(), 0);
        assert!(playlist.current_path().is_none());
    }

    #[test]
    fn replace_resets_index() {
        let mut playlist = playlist_of(&["a.mp3", "b.mp3"]);
        playlist.advance().unwrap();

        playlist.replace(PathBuf::from("/other"), vec![Track::new("c.mp3")]);

        assert_eq!(playlist.current_index(), 0);
        assert_eq!(
            playlist.current_path(),
            Some(PathBuf::from("/other/c.mp3"))
        );
    }

    #[test]
    fn scan_filters_by_case_sensitive_suffix() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["song.mp3", "LOUD.MP3", "cover.jpg", "notes.mp3.txt"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("album.mp3")).unwrap();
        fs::write(dir.path().join("album.mp3").join("nested.mp3"), b"").unwrap();

        let tracks = scan_folder(dir.path(), "mp3").unwrap();

        assert_eq!(tracks, vec![Track::new("song.mp3")]);
    }

    #[test]
    fn scan_keeps_listing_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.mp3", "a.mp3", "c.mp3"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }

        let listed: Vec<Track> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| Track::new(e.unwrap().file_name().to_string_lossy()))
            .collect();

        assert_eq!(scan_folder(dir.path(), "mp3").unwrap(), listed);
    }

    #[cfg(unix)]
    #[test]
    fn scan_keeps_symlinked_tracks() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("real.flac"), b"").unwrap();
        std::os::unix::fs::symlink(dir.path().join("real.flac"), dir.path().join("linked.mp3"))
            .unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("dangling.mp3"))
            .unwrap();

        let tracks = scan_folder(dir.path(), "mp3").unwrap();

        assert_eq!(tracks, vec![Track::new("linked.mp3")]);
    }

    #[test]
    fn scan_of_missing_folder_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");

        assert!(matches!(
            scan_folder(&missing, "mp3"),
            Err(PlayerError::Scan { .. })
        ));
    }
}
