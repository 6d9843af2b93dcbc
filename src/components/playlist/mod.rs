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

//! Scrollable window over the playlist.
//!
//! The view shows `visible_items` track names starting at the scroll offset.
//! The offset never goes past the point where the last track sits on the
//! bottom line, and stays at zero while everything fits.

mod event;
mod render;

use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScrollState {
    pub(crate) offset: usize,
    pub(crate) visible_items: usize,
}

impl ScrollState {
    fn max_offset(&self, len: usize) -> usize {
        len.max(self.visible_items) - self.visible_items
    }

    /// Moves the window by `delta` lines, clamped to the playlist.
    pub(crate) fn scroll_by(&mut self, delta: isize, len: usize) {
        let target = self.offset.saturating_add_signed(delta);
        self.offset = target.min(self.max_offset(len));
    }

    /// The indices of the tracks currently in the window.
    pub(crate) fn window(&self, len: usize) -> std::ops::Range<usize> {
        let start = self.offset.min(len);
        start..(start + self.visible_items).min(len)
    }
}

pub(crate) struct PlaylistView {
    pub(crate) scroll: ScrollState,
    pub(crate) scroll_speed: usize,
    /// Fixed area of the panel, borders included.
    pub(crate) area: Rect,
}

impl PlaylistView {
    /// Places the panel at `area`'s origin, tall enough for `visible_items`
    /// lines inside its border.
    pub(crate) fn new(area: Rect, visible_items: u16, scroll_speed: u16) -> Self {
        Self {
            scroll: ScrollState {
                offset: 0,
                visible_items: visible_items as usize,
            },
            scroll_speed: scroll_speed as usize,
            area: Rect {
                height: visible_items.saturating_add(2),
                ..area
            },
        }
    }

    /// Back to the top, used when the playlist is replaced.
    pub(crate) fn reset(&mut self) {
        self.scroll.offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll() -> ScrollState {
        ScrollState {
            offset: 0,
            visible_items: 10,
        }
    }

    #[test]
    fn oversized_panel_saturates() {
        let view = PlaylistView::new(Rect::new(2, 5, 75, 0), u16::MAX, 2);

        assert_eq!(view.area.height, u16::MAX);
        assert_eq!(view.scroll.visible_items, u16::MAX as usize);
    }

    #[test]
    fn short_playlist_never_scrolls() {
        let mut scroll = scroll();
        scroll.scroll_by(2, 4);
        assert_eq!(scroll.offset, 0);
        assert_eq!(scroll.window(4), 0..4);
    }

    #[test]
    fn offset_is_bounded_by_the_last_track() {
        let mut scroll = scroll();
        for _ in 0..10 {
            scroll.scroll_by(2, 25);
        }
        assert_eq!(scroll.offset, 15);
        assert_eq!(scroll.window(25), 15..25);
    }

    #[test]
    fn scrolling_up_stops_at_zero() {
        let mut scroll = scroll();
        scroll.scroll_by(4, 25);
        scroll.scroll_by(-6, 25);
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn window_survives_a_shrunk_playlist() {
        let mut scroll = scroll();
        scroll.scroll_by(15, 25);
        assert_eq!(scroll.window(3), 3..3);
        assert_eq!(scroll.window(0), 0..0);
    }

    #[test]
    fn panel_height_fits_visible_items() {
        let view = PlaylistView::new(Rect::new(2, 5, 75, 1), 10, 2);
        assert_eq!(view.area, Rect::new(2, 5, 75, 12));
    }
}
