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
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    App,
    components::ButtonName,
    player::PlayerState,
    render::{
        clip,
        icons::{ICON_PAUSE, ICON_PLAY, ICON_STOP},
    },
};

/// Draws the status lines: what is playing, from where, and the keys.
pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let Some(area) = clip(area, f.area()) else {
        return;
    };

    let player = &app.player;
    let theme = &app.theme;

    let (icon, state) = match player.state() {
        PlayerState::Playing => (ICON_PLAY, "Playing"),
        PlayerState::Paused => (ICON_PAUSE, "Paused"),
        PlayerState::Stopped => (ICON_STOP, "Stopped"),
    };

    let mut track_line = vec![
        Span::styled(format!(" {} ", icon), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(state),
    ];

    if let Some(track) = player.playlist().current() {
        track_line.push(Span::raw(": "));
        track_line.push(
            Span::styled(track.name.as_str(), Style::default().add_modifier(Modifier::BOLD))
                .fg(theme.button_click_colour),
        );
    }

    let folder = match player.playlist().folder() {
        Some(folder) => format!(" {}", folder.display()),
        None => " No folder selected".to_string(),
    };

    let keys = ButtonName::ALL
        .iter()
        .map(|button| format!("{} {}", button.shortcut(), button.label().to_lowercase()))
        .collect::<Vec<_>>()
        .join("  ");

    let lines = vec![
        Line::from(track_line),
        Line::from(folder).fg(theme.status_fg),
        Line::from(format!(" {}  q quit", keys)).fg(theme.status_fg),
    ];

    f.render_widget(
        Paragraph::new(lines).style(Style::default().fg(theme.foreground_colour)),
        area,
    );
}
