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

//! Pointer handling for the button panel.
//!
//! Motion updates the hover state, a primary button press over a button
//! reports that button so the caller can run its command.

use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::components::{ButtonName, ButtonPanel};

impl ButtonPanel {
    /// Updates hover and press state, returning the clicked button.
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<ButtonName> {
        let Event::Mouse(MouseEvent { kind, column, row, .. }) = event else {
            return None;
        };
        let position = Position::new(*column, *row);

        match kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.set_hovered(self.hit_test(position));
                None
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let hit = self.hit_test(position);
                self.set_hovered(hit);
                self.pressed = hit;
                hit
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.pressed = None;
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn motion_sets_and_clears_hover() {
        let mut panel = ButtonPanel::new(Position::new(2, 1));

        panel.process_event(&mouse(MouseEventKind::Moved, 15, 2));
        assert_eq!(panel.hovered, Some(ButtonName::Pause));

        panel.process_event(&mouse(MouseEventKind::Moved, 15, 10));
        assert_eq!(panel.hovered, None);
    }

    #[test]
    fn click_reports_button_until_release() {
        let mut panel = ButtonPanel::new(Position::new(2, 1));

        let clicked = panel.process_event(&mouse(MouseEventKind::Down(MouseButton::Left), 63, 2));
        assert_eq!(clicked, Some(ButtonName::SelectFolder));
        assert_eq!(panel.pressed, Some(ButtonName::SelectFolder));

        panel.process_event(&mouse(MouseEventKind::Up(MouseButton::Left), 63, 2));
        assert_eq!(panel.pressed, None);
    }

    #[test]
    fn other_buttons_and_empty_space_do_nothing() {
        let mut panel = ButtonPanel::new(Position::new(2, 1));

        let right_click = mouse(MouseEventKind::Down(MouseButton::Right), 3, 2);
        let click_outside = mouse(MouseEventKind::Down(MouseButton::Left), 0, 0);

        assert_eq!(panel.process_event(&right_click), None);
        assert_eq!(panel.process_event(&click_outside), None);
        assert_eq!(panel.pressed, None);
    }
}
