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

//! File logging.
//!
//! The terminal is owned by the UI, so log records go to a file that sits next
//! to the configuration file instead of stderr.

use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use env_logger::{Env, Target};

use crate::config::{AppConfig, CONFIG_NAME};

const LOG_FILE_NAME: &str = "dirplay.log";
const LOG_ENV: &str = "DIRPLAY_LOG";

/// The directory holding the configuration file, where the log goes too.
fn log_dir() -> Result<PathBuf> {
    let config_path = confy::get_configuration_file_path(CONFIG_NAME, None)
        .context("Failed to locate configuration directory")?;

    config_path
        .parent()
        .map(Path::to_path_buf)
        .context("Configuration file has no parent directory")
}

/// Creates (or truncates) the log file inside `dir`, creating `dir` if needed.
pub(crate) fn open_log_file(dir: &Path) -> Result<File> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let path = dir.join(LOG_FILE_NAME);
    File::create(&path).with_context(|| format!("Failed to create log file {}", path.display()))
}

/// Installs the global logger.
///
/// The filter is taken from `DIRPLAY_LOG` when set, otherwise from the
/// configured log level. When the log file cannot be opened the application
/// runs without logging, the reason is printed to stderr.
pub(crate) fn init_logger(config: &AppConfig) {
    let installed = log_dir()
        .and_then(|dir| open_log_file(&dir))
        .and_then(|file| install(file, config));

    if let Err(e) = installed {
        eprintln!("Logging disabled: {:#}", e);
    }
}

fn install(file: File, config: &AppConfig) -> Result<()> {
    env_logger::Builder::from_env(Env::default().filter_or(LOG_ENV, &config.log_level))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("Failed to install logger")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_is_created_with_its_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("dirplay");

        open_log_file(&nested).unwrap();

        assert!(nested.join(LOG_FILE_NAME).is_file());
    }

    #[test]
    fn unwritable_log_directory_is_an_error_not_a_panic() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"").unwrap();

        let error = open_log_file(&blocker.join("dirplay")).unwrap_err();

        assert!(format!("{:#}", error).contains("Failed to create log directory"));
    }
}
