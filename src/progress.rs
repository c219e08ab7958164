/*
progress.rs

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

//! Persist the player's progress between sessions.
//!
//! Two values are saved: the highest unlocked level and the level being played. They are stored
//! as integer strings under the `maxUnlockedLevel` and `currentLevel` keys of a key-value store.
//!
//! The store is a capability injected into [`ProgressStore`]: the application uses the JSON file
//! store from [`crate::saver::progress`], and the tests use [`MemoryStore`].
//!
//! Storage failures never stop the game. The failure is logged, the progress falls back to the
//! first level, and [`ProgressStore`] stops using the store for the rest of the session.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error;

/// Key for the index of the highest unlocked level.
pub const MAX_UNLOCKED_KEY: &str = "maxUnlockedLevel";

/// Key for the index of the level being played.
pub const CURRENT_KEY: &str = "currentLevel";

/// Key-value storage capability.
pub trait KeyValueStore {
    /// Return the value for the key, or `None` if the key is not set.
    fn get(&self, key: &str) -> Result<Option<String>, Box<dyn Error>>;

    /// Set the value for the key.
    fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn Error>>;

    /// Remove all the keys.
    fn clear(&mut self) -> Result<(), Box<dyn Error>>;
}

/// Store that keeps the values in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error>> {
        self.values.clear();
        Ok(())
    }
}

/// Progress of the player.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProgressState {
    /// Index of the level being played.
    pub current_level: usize,

    /// Index of the highest unlocked level. Levels up to this index can be played.
    pub max_unlocked_level: usize,
}

impl ProgressState {
    /// Bring the indexes into the range of a catalog of `num_levels` levels.
    ///
    /// The current level never exceeds the highest unlocked level.
    pub fn clamp(&mut self, num_levels: usize) {
        let last: usize = num_levels.saturating_sub(1);
        self.max_unlocked_level = self.max_unlocked_level.min(last);
        self.current_level = self.current_level.min(self.max_unlocked_level);
    }

    /// Whether the level at the given index can be played.
    pub fn is_unlocked(&self, index: usize) -> bool {
        index <= self.max_unlocked_level
    }
}

/// Load and save the [`ProgressState`] object through a [`KeyValueStore`].
pub struct ProgressStore {
    store: Box<dyn KeyValueStore>,

    /// Set to `false` after a storage failure.
    enabled: bool,
}

impl ProgressStore {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self {
            store,
            enabled: true,
        }
    }

    /// Store that is never written. Used when the data directory is not available.
    pub fn disabled() -> Self {
        Self {
            store: Box::new(MemoryStore::new()),
            enabled: false,
        }
    }

    /// Whether the progress is still saved.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Load the progress for a catalog of `num_levels` levels.
    ///
    /// Missing or unparsable values default to `0`, and out-of-range values are clamped.
    pub fn load(&mut self, num_levels: usize) -> ProgressState {
        if !self.enabled {
            return ProgressState::default();
        }
        match self.read() {
            Ok(mut progress) => {
                progress.clamp(num_levels);
                debug!("Progress loaded: {progress:?}");
                progress
            }
            Err(e) => {
                warn!("Cannot load the progress, starting from the first level: {e}");
                self.enabled = false;
                ProgressState::default()
            }
        }
    }

    /// Save the progress. After a failure, the progress is no longer saved for the session.
    pub fn save(&mut self, progress: &ProgressState) {
        if !self.enabled {
            return;
        }
        match self.write(progress) {
            Ok(()) => debug!("Progress saved: {progress:?}"),
            Err(e) => {
                warn!("Cannot save the progress, progress is no longer saved: {e}");
                self.enabled = false;
            }
        }
    }

    /// Remove the saved progress.
    pub fn reset(&mut self) -> Result<(), Box<dyn Error>> {
        self.store.clear()
    }

    fn read(&self) -> Result<ProgressState, Box<dyn Error>> {
        Ok(ProgressState {
            current_level: self.read_index(CURRENT_KEY)?,
            max_unlocked_level: self.read_index(MAX_UNLOCKED_KEY)?,
        })
    }

    fn read_index(&self, key: &str) -> Result<usize, Box<dyn Error>> {
        let value: Option<String> = self.store.get(key)?;
        Ok(value.and_then(|v| v.trim().parse::<usize>().ok()).unwrap_or(0))
    }

    fn write(&mut self, progress: &ProgressState) -> Result<(), Box<dyn Error>> {
        self.store
            .set(MAX_UNLOCKED_KEY, &progress.max_unlocked_level.to_string())?;
        self.store
            .set(CURRENT_KEY, &progress.current_level.to_string())?;
        Ok(())
    }
}
