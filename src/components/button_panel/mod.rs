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

//! The row of playback buttons.
//!
//! Buttons are laid out once, when the panel is created, and never move. The
//! panel remembers which button the pointer is over and which one is held
//! down; the colour a button is drawn in is derived from that at draw time.

mod event;
mod render;

use ratatui::layout::{Position, Rect};

const BUTTON_WIDTH: u16 = 10;
const WIDE_BUTTON_WIDTH: u16 = 15;
const BUTTON_HEIGHT: u16 = 3;
const BUTTON_SPACING: u16 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ButtonName {
    Play,
    Pause,
    Stop,
    Next,
    Prev,
    SelectFolder,
}

impl ButtonName {
    /// All buttons, in on-screen order.
    pub(crate) const ALL: [ButtonName; 6] = [
        ButtonName::Play,
        ButtonName::Pause,
        ButtonName::Stop,
        ButtonName::Next,
        ButtonName::Prev,
        ButtonName::SelectFolder,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            ButtonName::Play => "Play",
            ButtonName::Pause => "Pause",
            ButtonName::Stop => "Stop",
            ButtonName::Next => "Next",
            ButtonName::Prev => "Prev",
            ButtonName::SelectFolder => "Select Folder",
        }
    }

    /// Keyboard accelerator that triggers the same command as a click.
    pub(crate) fn shortcut(self) -> char {
        match self {
            ButtonName::Play => 'x',
            ButtonName::Pause => 'c',
            ButtonName::Stop => 'v',
            ButtonName::Next => 'b',
            ButtonName::Prev => 'z',
            ButtonName::SelectFolder => 'o',
        }
    }

    pub(crate) fn from_shortcut(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|button| button.shortcut() == key)
    }

    fn width(self) -> u16 {
        match self {
            ButtonName::SelectFolder => WIDE_BUTTON_WIDTH,
            _ => BUTTON_WIDTH,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Button {
    pub(crate) name: ButtonName,
    pub(crate) area: Rect,
}

pub(crate) struct ButtonPanel {
    buttons: Vec<Button>,
    pub(crate) hovered: Option<ButtonName>,
    pub(crate) pressed: Option<ButtonName>,
}

impl ButtonPanel {
    /// Lays the buttons out left to right starting at `origin`.
    pub(crate) fn new(origin: Position) -> Self {
        let mut x = origin.x;
        let buttons = ButtonName::ALL
            .into_iter()
            .map(|name| {
                let area = Rect::new(x, origin.y, name.width(), BUTTON_HEIGHT);
                x += name.width() + BUTTON_SPACING;
                Button { name, area }
            })
            .collect();

        Self {
            buttons,
            hovered: None,
            pressed: None,
        }
    }

    pub(crate) fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Returns the button under `position`, if any.
    pub(crate) fn hit_test(&self, position: Position) -> Option<ButtonName> {
        self.buttons
            .iter()
            .find(|button| button.area.contains(position))
            .map(|button| button.name)
    }

    pub(crate) fn set_hovered(&mut self, name: Option<ButtonName>) {
        self.hovered = name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> ButtonPanel {
        ButtonPanel::new(Position::new(2, 1))
    }

    #[test]
    fn buttons_do_not_overlap() {
        let panel = panel();
        for (i, a) in panel.buttons().iter().enumerate() {
            for b in &panel.buttons()[i + 1..] {
                assert!(!a.area.intersects(b.area), "{:?} overlaps {:?}", a.name, b.name);
            }
        }
    }

    #[test]
    fn point_inside_a_button_hits_it() {
        let panel = panel();
        for button in panel.buttons() {
            let centre = Position::new(
                button.area.x + button.area.width / 2,
                button.area.y + button.area.height / 2,
            );
            assert_eq!(panel.hit_test(centre), Some(button.name));
        }
    }

    #[test]
    fn point_outside_every_button_hits_nothing() {
        let panel = panel();
        // Around the row and in the gaps between buttons
        assert_eq!(panel.hit_test(Position::new(5, 0)), None);
        assert_eq!(panel.hit_test(Position::new(12, 2)), None);
        assert_eq!(panel.hit_test(Position::new(200, 2)), None);
        assert_eq!(panel.hit_test(Position::new(5, 4)), None);
    }

    #[test]
    fn layout_follows_on_screen_order() {
        let panel = panel();
        let names: Vec<ButtonName> = panel.buttons().iter().map(|b| b.name).collect();
        assert_eq!(names, ButtonName::ALL);
        assert_eq!(panel.buttons()[0].area, Rect::new(2, 1, 10, 3));
        assert_eq!(panel.buttons()[5].area, Rect::new(62, 1, 15, 3));
    }

    #[test]
    fn shortcuts_are_unique() {
        for button in ButtonName::ALL {
            assert_eq!(ButtonName::from_shortcut(button.shortcut()), Some(button));
        }
        assert_eq!(ButtonName::from_shortcut('q'), None);
    }
}
