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

//! Application configuration.
//!
//! This module manages the application configuration file. Only tuning values
//! live here, the playlist and the chosen folder are never persisted.

use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

pub(crate) const CONFIG_NAME: &str = "dirplay";

/// Playlist rows are kept within this range, whatever the file says.
const VISIBLE_ITEMS_RANGE: (u16, u16) = (1, 200);

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// Event loop ticks per second.
    pub frame_rate: u32,
    /// File name suffix, without the dot, of playable files.
    pub extension: String,
    pub visible_items: u16,
    /// Lines scrolled per mouse wheel notch.
    pub scroll_speed: u16,
    /// Where the folder chooser opens when no folder has been selected yet.
    pub start_dir: Option<String>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            frame_rate: 30,
            extension: "mp3".to_string(),
            visible_items: 10,
            scroll_speed: 2,
            start_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub(crate) fn tick_duration(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }

    pub(crate) fn start_dir(&self) -> Option<PathBuf> {
        self.start_dir.as_ref().map(PathBuf::from)
    }

    /// Pulls hand-edited values back into a range the layout can hold.
    pub(crate) fn clamped(mut self) -> Self {
        let (min, max) = VISIBLE_ITEMS_RANGE;
        self.visible_items = self.visible_items.clamp(min, max);
        self
    }
}

pub fn load_config() -> AppConfig {
    confy::load::<AppConfig>(CONFIG_NAME, None)
        .unwrap_or_default()
        .clamped()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tick_is_thirty_per_second() {
        let config = AppConfig::default();
        assert_eq!(config.tick_duration(), Duration::from_secs(1) / 30);
    }

    #[test]
    fn zero_frame_rate_does_not_divide_by_zero() {
        let config = AppConfig {
            frame_rate: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.tick_duration(), Duration::from_secs(1));
    }

    #[test]
    fn visible_items_are_clamped() {
        let huge = AppConfig {
            visible_items: u16::MAX,
            ..AppConfig::default()
        };
        assert_eq!(huge.clamped().visible_items, 200);

        let zero = AppConfig {
            visible_items: 0,
            ..AppConfig::default()
        };
        assert_eq!(zero.clamped().visible_items, 1);

        assert_eq!(AppConfig::default().clamped().visible_items, 10);
    }
}
