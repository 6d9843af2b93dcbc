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

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph},
};

use crate::{picker::DirectoryBrowser, render::centered_rect, theme::Theme};

const HINTS: &str = "Enter open | Backspace up | s select | Esc cancel";

impl DirectoryBrowser {
    pub(crate) fn draw(&mut self, f: &mut Frame, theme: &Theme) {
        let area = centered_rect(f.area(), 70, 20);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Select Folder ")
            .border_style(Style::default().fg(theme.notice_border_colour))
            .style(Style::default().bg(theme.background_colour).fg(theme.foreground_colour))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        f.render_widget(Clear, area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        f.render_widget(
            Paragraph::new(self.current.display().to_string())
                .style(Style::default().add_modifier(Modifier::BOLD)),
            chunks[0],
        );

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| ListItem::new(format!("{}/", entry.name)))
            .collect();

        let list = List::new(items)
            .style(Style::default().bg(theme.playlist_bg).fg(theme.playlist_fg))
            .highlight_style(
                Style::default()
                    .bg(theme.playlist_current_bg)
                    .fg(theme.playlist_current_fg),
            );

        self.list_area = chunks[1];
        f.render_stateful_widget(list, chunks[1], &mut self.list_state);

        let footer = match &self.error {
            Some(error) => {
                Paragraph::new(error.as_str()).style(Style::default().fg(theme.button_click_colour))
            }
            None => Paragraph::new(HINTS).style(Style::default().fg(theme.status_fg)),
        };
        f.render_widget(footer, chunks[2]);
    }
}
