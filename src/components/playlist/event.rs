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

//! Mouse wheel scrolling for the playlist view.

use crossterm::event::{Event, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::components::PlaylistView;

impl PlaylistView {
    /// Scrolls when the wheel turns over the panel.
    ///
    /// `len` is the number of tracks in the playlist.
    pub(crate) fn process_event(&mut self, event: &Event, len: usize) {
        let Event::Mouse(MouseEvent { kind, column, row, .. }) = event else {
            return;
        };

        if !self.area.contains(Position::new(*column, *row)) {
            return;
        }

        let step = self.scroll_speed as isize;
        match kind {
            MouseEventKind::ScrollDown => self.scroll.scroll_by(step, len),
            MouseEventKind::ScrollUp => self.scroll.scroll_by(-step, len),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    use super::*;

    fn wheel(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn wheel_over_the_panel_scrolls_by_speed() {
        let mut view = PlaylistView::new(Rect::new(2, 5, 75, 1), 10, 2);

        view.process_event(&wheel(MouseEventKind::ScrollDown, 10, 8), 30);
        assert_eq!(view.scroll.offset, 2);

        view.process_event(&wheel(MouseEventKind::ScrollUp, 10, 8), 30);
        assert_eq!(view.scroll.offset, 0);
    }

    #[test]
    fn wheel_elsewhere_is_ignored() {
        let mut view = PlaylistView::new(Rect::new(2, 5, 75, 1), 10, 2);

        view.process_event(&wheel(MouseEventKind::ScrollDown, 10, 2), 30);

        assert_eq!(view.scroll.offset, 0);
    }
}
