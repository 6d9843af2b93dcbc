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
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph},
};

use crate::{
    components::{ButtonName, ButtonPanel},
    render::{
        clip,
        icons::{ICON_FOLDER, ICON_NEXT, ICON_PAUSE, ICON_PLAY, ICON_PREV, ICON_STOP},
    },
    theme::Theme,
};

impl ButtonName {
    fn icon(self) -> &'static str {
        match self {
            ButtonName::Play => ICON_PLAY,
            ButtonName::Pause => ICON_PAUSE,
            ButtonName::Stop => ICON_STOP,
            ButtonName::Next => ICON_NEXT,
            ButtonName::Prev => ICON_PREV,
            ButtonName::SelectFolder => ICON_FOLDER,
        }
    }
}

impl ButtonPanel {
    pub(crate) fn draw(&self, f: &mut Frame, theme: &Theme) {
        for button in self.buttons() {
            let Some(area) = clip(button.area, f.area()) else {
                continue;
            };

            let colour = self.colour_of(button.name, theme);

            // The label sits on the middle line of the button
            let padding = area.height.saturating_sub(1) / 2;
            let mut lines = vec![String::new(); padding as usize];
            lines.push(format!("{} {}", button.name.icon(), button.name.label()));

            let paragraph = Paragraph::new(lines.join("\n"))
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(theme.button_label_colour)
                        .add_modifier(Modifier::BOLD),
                )
                .block(Block::default().style(Style::default().bg(colour)));

            f.render_widget(paragraph, area);
        }
    }

    fn colour_of(&self, name: ButtonName, theme: &Theme) -> Color {
        if self.pressed == Some(name) {
            theme.button_click_colour
        } else if self.hovered == Some(name) {
            theme.button_hover_colour
        } else {
            theme.button_colour
        }
    }
}
