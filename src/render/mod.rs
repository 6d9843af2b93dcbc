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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called exactly
//! once per tick. Every frame is drawn from scratch: background, buttons,
//! playlist window, status line and, on top, the pending notice if there is
//! one.
//!
//! Widgets sit at fixed positions like in a window, so anything that would
//! fall outside a small terminal is clipped instead of reflowed.

pub(crate) mod icons;
mod notice;
mod player;

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    widgets::Block,
};

use crate::{
    App,
    render::{notice::draw_notice, player::draw_player},
};

/// Renders the user interface to the terminal frame.
pub(crate) fn draw(f: &mut Frame, app: &App) {
    let background = Block::default().style(
        Style::default()
            .bg(app.theme.background_colour)
            .fg(app.theme.foreground_colour),
    );
    f.render_widget(background, f.area());

    app.button_panel.draw(f, &app.theme);
    app.playlist_view.draw(f, app.player.playlist(), &app.theme);
    draw_player(f, app.status_area(), app);

    if let Some(notice) = &app.notice {
        draw_notice(f, notice, &app.theme);
    }
}

/// Returns the part of `area` inside `bounds`, or `None` if nothing is left.
pub(crate) fn clip(area: Rect, bounds: Rect) -> Option<Rect> {
    let clipped = area.intersection(bounds);
    (!clipped.is_empty()).then_some(clipped)
}

/// A rectangle of at most `width` x `height` centred in `area`.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [centre] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    centre
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_inside_bounds_is_unchanged() {
        let bounds = Rect::new(0, 0, 80, 24);
        assert_eq!(clip(Rect::new(2, 1, 10, 3), bounds), Some(Rect::new(2, 1, 10, 3)));
    }

    #[test]
    fn clip_cuts_overhanging_widgets() {
        let bounds = Rect::new(0, 0, 70, 24);
        assert_eq!(clip(Rect::new(62, 1, 15, 3), bounds), Some(Rect::new(62, 1, 8, 3)));
        assert_eq!(clip(Rect::new(75, 1, 15, 3), bounds), None);
    }

    #[test]
    fn centred_rect_fits_small_areas() {
        let area = Rect::new(0, 0, 40, 10);
        let centre = centered_rect(area, 70, 20);
        assert_eq!(centre, area);

        let centre = centered_rect(Rect::new(0, 0, 80, 24), 40, 6);
        assert_eq!(centre, Rect::new(20, 9, 40, 6));
    }
}
