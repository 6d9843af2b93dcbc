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

//! Widgets of the main window.
//!
//! Each component keeps its own state, maps raw terminal events onto that
//! state in `event.rs`, and draws itself in `render.rs`.

mod button_panel;
mod playlist;

pub(crate) use button_panel::{ButtonName, ButtonPanel};
pub(crate) use playlist::PlaylistView;
