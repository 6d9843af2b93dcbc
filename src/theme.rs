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

//! Colour scheme.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) foreground_colour: Color,

    pub(crate) button_colour: Color,
    pub(crate) button_hover_colour: Color,
    pub(crate) button_click_colour: Color,
    pub(crate) button_label_colour: Color,

    pub(crate) playlist_bg: Color,
    pub(crate) playlist_fg: Color,
    pub(crate) playlist_current_fg: Color,
    pub(crate) playlist_current_bg: Color,

    pub(crate) status_fg: Color,
    pub(crate) notice_border_colour: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme, a white window with blue buttons.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(255, 255, 255),
            foreground_colour: Color::Rgb(0, 0, 0),

            button_colour: Color::Rgb(0, 128, 255),
            button_hover_colour: Color::Rgb(0, 200, 255),
            button_click_colour: Color::Rgb(0, 100, 255),
            button_label_colour: Color::Rgb(255, 255, 255),

            playlist_bg: Color::Rgb(220, 220, 220),
            playlist_fg: Color::Rgb(0, 0, 0),
            playlist_current_fg: Color::Rgb(255, 255, 255),
            playlist_current_bg: Color::Rgb(0, 128, 255),

            status_fg: Color::Rgb(80, 80, 80),
            notice_border_colour: Color::Rgb(0, 100, 255),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is used to set the terminal emulator's background colour via an
    /// escape sequence. Non-RGB colours map to black.
    pub(crate) fn to_hex(colour: Color) -> String {
        match colour {
            Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
            _ => "#000000".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_to_hex() {
        assert_eq!(Theme::to_hex(Color::Rgb(0, 128, 255)), "#0080ff");
    }
}
