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

//! UI rendering for the playlist view.
//!
//! One line per track, drawn straight from the scroll window rather than
//! through a stateful list so that the offset stays under this view's control.

use ratatui::{
    Frame,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::PlaylistView,
    model::playlist::Playlist,
    render::clip,
    theme::Theme,
};

impl PlaylistView {
    pub(crate) fn draw(&self, f: &mut Frame, playlist: &Playlist, theme: &Theme) {
        let Some(area) = clip(self.area, f.area()) else {
            return;
        };

        let len = playlist.len();
        let window = self.scroll.window(len);

        let title = if len > self.scroll.visible_items && !window.is_empty() {
            format!(" Playlist {}-{} of {} ", window.start + 1, window.end, len)
        } else {
            format!(" Playlist ({}) ", len)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(theme.status_fg))
            .style(Style::default().bg(theme.playlist_bg).fg(theme.playlist_fg))
            .padding(Padding::horizontal(1));

        let current = (!playlist.is_empty()).then(|| playlist.current_index());

        let lines: Vec<Line> = window
            .map(|index| {
                let line = Line::from(playlist.tracks()[index].name.as_str());
                if Some(index) == current {
                    line.style(
                        Style::default()
                            .fg(theme.playlist_current_fg)
                            .bg(theme.playlist_current_bg),
                    )
                } else {
                    line
                }
            })
            .collect();

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
