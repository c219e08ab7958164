/*
config.rs

Copyright 2025 Hervé Quatremain

This file is part of Onestroke.

Onestroke is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Onestroke is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Onestroke. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Application constants and user settings.
//!
//! The settings are read from the `settings.json` file in the data directory. Every field is
//! optional and defaults to the value used by the game; an unreadable file is ignored.
//!
//! ```json
//! {"maxLives": 5, "settleDelayMs": 500}
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::level::Viewport;
use crate::lives::DEFAULT_LIVES;

pub const PACKAGE: &str = "onestroke";
pub const COPYRIGHT_NOTICE: &str = "Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// Name of the file that stores the player's progress.
pub const PROGRESS_FILE: &str = "progress.json";

/// Name of the settings file.
pub const SETTINGS_FILE: &str = "settings.json";

fn default_max_lives() -> usize {
    DEFAULT_LIVES
}
fn default_capture_radius() -> f64 {
    45.0
}
fn default_settle_delay_ms() -> u64 {
    1000
}
fn default_levels_per_page() -> usize {
    20
}
fn default_width() -> f64 {
    800.0
}
fn default_height() -> f64 {
    600.0
}

/// Game tunables.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Lives at the start of an attempt.
    #[serde(default = "default_max_lives")]
    pub max_lives: usize,

    /// Maximum distance between the pointer and a node center to capture the node.
    #[serde(default = "default_capture_radius")]
    pub capture_radius: f64,

    /// Delay between the completion of a level and the unlock of the next one.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    #[serde(default = "default_levels_per_page")]
    pub levels_per_page: usize,

    /// Size of the logical drawing surface.
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_lives: default_max_lives(),
            capture_radius: default_capture_radius(),
            settle_delay_ms: default_settle_delay_ms(),
            levels_per_page: default_levels_per_page(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Settings {
    /// Load the settings from the given directory.
    ///
    /// A missing or corrupt file produces the default settings.
    pub fn load(data_dir: &Path) -> Self {
        let path: PathBuf = data_dir.join(SETTINGS_FILE);
        match Self::read(&path) {
            Ok(Some(settings)) => {
                debug!("Settings loaded from {path:?}: {settings:?}");
                settings
            }
            Ok(None) => Self::default(),
            Err(e) => {
                warn!("Cannot read {path:?}, using the default settings: {e}");
                Self::default()
            }
        }
    }

    /// Parse the settings from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    fn read(path: &Path) -> Result<Option<Self>, Box<dyn Error>> {
        let json: String = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        Ok(Some(Self::from_json(&json)?))
    }

    /// Whether the logical drawing surface has a usable size.
    pub fn has_valid_size(&self) -> bool {
        is_positive(self.width) && is_positive(self.height)
    }

    /// Replace the values that would make the game unplayable.
    fn sanitized(mut self) -> Self {
        let defaults: Settings = Self::default();
        if self.max_lives == 0 {
            warn!("maxLives must be at least 1, using {}", defaults.max_lives);
            self.max_lives = defaults.max_lives;
        }
        if !is_positive(self.capture_radius) {
            warn!("captureRadius must be positive, using {}", defaults.capture_radius);
            self.capture_radius = defaults.capture_radius;
        }
        if self.levels_per_page == 0 {
            self.levels_per_page = defaults.levels_per_page;
        }
        if !self.has_valid_size() {
            warn!("The viewport size must be positive, using the default size");
            self.width = defaults.width;
            self.height = defaults.height;
        }
        self
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

/// Whether the value is a finite number above zero. NaN is not.
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Return the directory for the data files.
///
/// The directory is `$XDG_DATA_HOME/onestroke`, or `$HOME/.local/share/onestroke` when
/// `XDG_DATA_HOME` is not set. Return `None` when neither variable is set.
pub fn data_dir() -> Option<PathBuf> {
    let base: PathBuf = match env::var_os("XDG_DATA_HOME") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let mut home: PathBuf = PathBuf::from(env::var_os("HOME")?);
            home.push(".local");
            home.push("share");
            home
        }
    };
    Some(base.join(PACKAGE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let settings = Settings::from_json(r#"{"maxLives": 5}"#).unwrap();
        assert_eq!(settings.max_lives, 5);
        assert_eq!(settings.capture_radius, 45.0);
        assert_eq!(settings.settle_delay(), Duration::from_millis(1000));
        assert_eq!(settings.viewport(), Viewport::new(800.0, 600.0));
    }

    #[test]
    fn unplayable_values_are_replaced() {
        let settings =
            Settings::from_json(r#"{"maxLives": 0, "captureRadius": -3, "width": 0}"#).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn non_finite_values_are_replaced() {
        let settings = Settings {
            capture_radius: f64::NAN,
            width: f64::INFINITY,
            ..Settings::default()
        };
        assert!(!settings.has_valid_size());
        assert_eq!(settings.sanitized(), Settings::default());

        let settings = Settings {
            height: f64::NAN,
            ..Settings::default()
        };
        assert!(!settings.has_valid_size());
    }

    #[test]
    fn corrupt_file_uses_defaults() {
        let mut dir: PathBuf = env::temp_dir();
        dir.push(format!("onestroke-settings-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(SETTINGS_FILE), "{maxLives").unwrap();
        assert_eq!(Settings::load(&dir), Settings::default());
        let _ = std::fs::remove_dir_all(&dir);

        // No file at all
        assert_eq!(Settings::load(&dir), Settings::default());
    }
}
