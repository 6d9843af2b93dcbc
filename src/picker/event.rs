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

//! Input handling for the directory browser.
//!
//! Keyboard and mouse events move the selection and change directory; only
//! choosing or cancelling produces a [`PickerAction`].

use crossterm::event::{
    Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use crate::picker::{DirectoryBrowser, PickerAction};

impl DirectoryBrowser {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<PickerAction> {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                match (key_event.code, key_event.modifiers) {
                    (KeyCode::Char('c'), KeyModifiers::CONTROL)
                    | (KeyCode::Esc, _)
                    | (KeyCode::Char('q'), _) => return Some(PickerAction::Cancel),

                    (KeyCode::Char('s'), _) | (KeyCode::Char(' '), _) => {
                        return Some(PickerAction::Choose(self.current.clone()));
                    }

                    (KeyCode::Char('j'), _) | (KeyCode::Down, _) => self.next(),
                    (KeyCode::Char('k'), _) | (KeyCode::Up, _) => self.previous(),
                    (KeyCode::Enter, _) | (KeyCode::Char('l'), _) | (KeyCode::Right, _) => {
                        self.enter_selected()
                    }
                    (KeyCode::Backspace, _) | (KeyCode::Char('h'), _) | (KeyCode::Left, _) => {
                        self.go_up()
                    }

                    _ => {}
                }
            }

            Event::Mouse(MouseEvent { kind, column, row, .. }) => match kind {
                MouseEventKind::ScrollDown => self.next(),
                MouseEventKind::ScrollUp => self.previous(),
                MouseEventKind::Down(MouseButton::Left) => {
                    self.click(Position::new(*column, *row))
                }
                _ => {}
            },

            _ => {}
        }

        None
    }

    /// Selects the clicked row, or opens it if it was already selected.
    fn click(&mut self, position: Position) {
        if !self.list_area.contains(position) {
            return;
        }

        let index = (position.y - self.list_area.y) as usize + self.list_state.offset();
        if index >= self.entries.len() {
            return;
        }

        if self.list_state.selected() == Some(index) {
            self.enter_selected();
        } else {
            self.list_state.select(Some(index));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crossterm::event::{KeyEvent, KeyModifiers};
    use ratatui::layout::Rect;

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn left_click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn escape_cancels() {
        let dir = tempfile::tempdir().unwrap();
        let mut browser = DirectoryBrowser::new(dir.path());

        assert_eq!(browser.process_event(&key(KeyCode::Esc)), Some(PickerAction::Cancel));
    }

    #[test]
    fn s_chooses_current_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("rock")).unwrap();
        let mut browser = DirectoryBrowser::new(dir.path());

        assert_eq!(browser.process_event(&key(KeyCode::Down)), None);
        assert_eq!(browser.process_event(&key(KeyCode::Enter)), None);

        assert_eq!(
            browser.process_event(&key(KeyCode::Char('s'))),
            Some(PickerAction::Choose(dir.path().join("rock")))
        );
    }

    #[test]
    fn second_click_on_a_row_opens_it() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("rock")).unwrap();
        let mut browser = DirectoryBrowser::new(dir.path());
        browser.list_area = Rect::new(10, 5, 40, 10);

        browser.process_event(&left_click(12, 6));
        assert_eq!(browser.selected_entry().unwrap().name, "rock");

        browser.process_event(&left_click(12, 6));
        assert_eq!(browser.current, dir.path().join("rock"));
    }

    #[test]
    fn clicks_outside_the_list_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("rock")).unwrap();
        let mut browser = DirectoryBrowser::new(dir.path());
        browser.list_area = Rect::new(10, 5, 40, 10);

        browser.process_event(&left_click(2, 6));
        browser.process_event(&left_click(12, 9));

        assert_eq!(browser.list_state.selected(), Some(0));
        assert_eq!(browser.current, dir.path());
    }
}
