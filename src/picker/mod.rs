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

//! Folder selection.
//!
//! The player only sees the [`FolderPicker`] trait. The terminal
//! implementation is a modal directory browser that takes over the screen and
//! runs its own input loop until the user chooses a folder or cancels,
//! blocking the main event loop for that time.

mod event;
mod render;
mod terminal;

pub(crate) use terminal::TerminalFolderPicker;

use std::path::{Path, PathBuf};

use ratatui::{layout::Rect, widgets::ListState};
use walkdir::WalkDir;

use crate::error::PlayerError;

/// A blocking directory chooser.
pub(crate) trait FolderPicker {
    /// Opens in `start` and returns the chosen directory, or `None` if the
    /// user cancelled.
    fn choose_directory(&mut self, start: &Path) -> Result<Option<PathBuf>, PlayerError>;
}

/// What the user decided in the directory browser.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum PickerAction {
    Choose(PathBuf),
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DirectoryEntry {
    pub(crate) name: String,
    pub(crate) path: PathBuf,
}

/// Navigation state of the directory browser.
pub(crate) struct DirectoryBrowser {
    pub(crate) current: PathBuf,
    pub(crate) entries: Vec<DirectoryEntry>,
    pub(crate) list_state: ListState,
    /// Where the list was last drawn, for mouse hit-testing.
    pub(crate) list_area: Rect,
    pub(crate) error: Option<String>,
}

impl DirectoryBrowser {
    /// Opens the browser at `dir`.
    ///
    /// A directory that cannot be listed is still shown, with its error and a
    /// way back up.
    pub(crate) fn new(dir: &Path) -> Self {
        let mut browser = Self {
            current: dir.to_path_buf(),
            entries: vec![],
            list_state: ListState::default(),
            list_area: Rect::default(),
            error: None,
        };
        browser.refresh();
        browser
    }

    pub(crate) fn selected_entry(&self) -> Option<&DirectoryEntry> {
        let index = self.list_state.selected()?;
        self.entries.get(index)
    }

    pub(crate) fn next(&mut self) {
        let len = self.entries.len();
        if len == 0 { return; }
        let i = match self.list_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub(crate) fn previous(&mut self) {
        let len = self.entries.len();
        if len == 0 { return; }
        let i = match self.list_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Descends into the selected entry.
    pub(crate) fn enter_selected(&mut self) {
        if let Some(entry) = self.selected_entry() {
            let path = entry.path.clone();
            self.change_dir(path);
        }
    }

    pub(crate) fn go_up(&mut self) {
        if let Some(parent) = self.current.parent() {
            let parent = parent.to_path_buf();
            self.change_dir(parent);
        }
    }

    fn change_dir(&mut self, dir: PathBuf) {
        self.current = dir;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.entries.clear();
        self.error = None;

        if let Some(parent) = self.current.parent() {
            self.entries.push(DirectoryEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
            });
        }

        match list_subdirectories(&self.current) {
            Ok(dirs) => self.entries.extend(dirs),
            Err(e) => {
                log::warn!("Cannot list {}: {}", self.current.display(), e);
                self.error = Some(e.to_string());
            }
        }

        self.list_state = ListState::default();
        self.list_state
            .select((!self.entries.is_empty()).then_some(0));
    }
}

/// Lists the visible sub-directories of `dir`, sorted by name.
fn list_subdirectories(dir: &Path) -> Result<Vec<DirectoryEntry>, walkdir::Error> {
    let mut dirs = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || !entry.path().is_dir() {
            continue;
        }

        dirs.push(DirectoryEntry {
            name,
            path: entry.into_path(),
        });
    }

    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn names(browser: &DirectoryBrowser) -> Vec<&str> {
        browser.entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn lists_visible_subdirectories_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["rock", "jazz", ".cache"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        fs::write(dir.path().join("song.mp3"), b"").unwrap();

        let browser = DirectoryBrowser::new(dir.path());

        assert_eq!(names(&browser), vec!["..", "jazz", "rock"]);
        assert_eq!(browser.list_state.selected(), Some(0));
        assert!(browser.error.is_none());
    }

    #[test]
    fn enter_and_go_up() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("jazz").join("bebop")).unwrap();

        let mut browser = DirectoryBrowser::new(dir.path());
        browser.next();
        browser.enter_selected();

        assert_eq!(browser.current, dir.path().join("jazz"));
        assert_eq!(names(&browser), vec!["..", "bebop"]);

        browser.go_up();
        assert_eq!(browser.current, dir.path());
    }

    #[test]
    fn selection_wraps() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();

        let mut browser = DirectoryBrowser::new(dir.path());
        browser.previous();
        assert_eq!(browser.selected_entry().unwrap().name, "a");
        browser.next();
        assert_eq!(browser.selected_entry().unwrap().name, "..");
    }

    #[test]
    fn unreadable_directory_keeps_a_way_out() {
        let dir = tempfile::tempdir().unwrap();

        let browser = DirectoryBrowser::new(&dir.path().join("missing"));

        assert!(browser.error.is_some());
        assert_eq!(names(&browser), vec![".."]);
    }
}
