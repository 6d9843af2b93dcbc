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
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{error::Notice, render::centered_rect, theme::Theme};

const NOTICE_WIDTH: u16 = 50;
const NOTICE_HEIGHT: u16 = 7;

pub(crate) fn draw_notice(f: &mut Frame, notice: &Notice, theme: &Theme) {
    let area = centered_rect(f.area(), NOTICE_WIDTH, NOTICE_HEIGHT);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", notice.title))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(theme.notice_border_colour))
        .style(Style::default().bg(theme.background_colour).fg(theme.foreground_colour))
        .padding(Padding::horizontal(1));

    let text = vec![
        Line::from(notice.message.as_str()),
        Line::default(),
        Line::from(Span::styled(
            "Click or press any key",
            Style::default().fg(theme.status_fg),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
