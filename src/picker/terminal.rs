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

use std::path::{Path, PathBuf};

use crossterm::event;

use crate::{
    error::PlayerError,
    picker::{DirectoryBrowser, FolderPicker, PickerAction},
    theme::Theme,
    util::term::Tui,
};

/// Modal directory browser drawn over the application window.
///
/// Borrows the terminal for the duration of the selection; nothing else is
/// drawn or processed until it returns.
pub(crate) struct TerminalFolderPicker<'a> {
    terminal: &'a mut Tui,
    theme: Theme,
}

impl<'a> TerminalFolderPicker<'a> {
    pub(crate) fn new(terminal: &'a mut Tui, theme: Theme) -> Self {
        Self { terminal, theme }
    }
}

impl FolderPicker for TerminalFolderPicker<'_> {
    fn choose_directory(&mut self, start: &Path) -> Result<Option<PathBuf>, PlayerError> {
        let mut browser = DirectoryBrowser::new(start);
        let theme = self.theme;

        loop {
            self.terminal.draw(|f| browser.draw(f, &theme))?;

            match browser.process_event(&event::read()?) {
                Some(PickerAction::Choose(dir)) => return Ok(Some(dir)),
                Some(PickerAction::Cancel) => return Ok(None),
                None => {}
            }
        }
    }
}
