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

//! Key-value store backed by a JSON file.
//!
//! The [`ProgressStore`](crate::progress::ProgressStore) object saves the player's progress
//! through this store. The file contains a single JSON object that maps keys to string values:
//!
//! ```json
//! {"currentLevel":"3","maxUnlockedLevel":"5"}
//! ```

use log::debug;
use std::collections::BTreeMap;
use std::error::Error;
use std::fs::{self, File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::config::PROGRESS_FILE;
use crate::progress::KeyValueStore;

/// Object to save and restore key-value pairs in a JSON file.
pub struct SaverProgress {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverProgress {
    /// Create a [`SaverProgress`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the progress must be saved.
    /// The directory is created on the first write.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push(PROGRESS_FILE);
        debug!("Progress file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Read all the key-value pairs. A missing file has no pair.
    fn read_all(&self) -> Result<BTreeMap<String, String>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(BTreeMap::new()),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let values: BTreeMap<String, String> = serde_json::from_reader(reader)?;
        Ok(values)
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), Box<dyn Error>> {
        if let Some(dir) = self.save_file.parent() {
            fs::create_dir_all(dir)?;
        }
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, values)?;
        writer.flush()?;
        Ok(())
    }
}

impl KeyValueStore for SaverProgress {
    fn get(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        let mut values: BTreeMap<String, String> = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error>> {
        match remove_file(&self.save_file) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(Box::new(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{CURRENT_KEY, MAX_UNLOCKED_KEY, ProgressState, ProgressStore};
    use std::env;
    use std::process;

    fn temp_dir(name: &str) -> PathBuf {
        let mut dir: PathBuf = env::temp_dir();
        dir.push(format!("onestroke-{name}-{}", process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn file_round_trip() {
        let dir = temp_dir("round-trip");
        let mut saver = SaverProgress::new(dir.clone());
        assert_eq!(saver.get(CURRENT_KEY).unwrap(), None);

        saver.set(CURRENT_KEY, "3").unwrap();
        saver.set(MAX_UNLOCKED_KEY, "5").unwrap();
        let content = fs::read_to_string(dir.join(PROGRESS_FILE)).unwrap();
        assert_eq!(content, r#"{"currentLevel":"3","maxUnlockedLevel":"5"}"#);

        // A new object reads what the previous one wrote
        let saver = SaverProgress::new(dir.clone());
        let mut progress = ProgressStore::new(Box::new(saver));
        assert_eq!(
            progress.load(30),
            ProgressState {
                current_level: 3,
                max_unlocked_level: 5
            }
        );
        progress.reset().unwrap();
        assert_eq!(progress.load(30), ProgressState::default());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = temp_dir("corrupt");
        fs::create_dir_all(&dir).unwrap();
        let saver = SaverProgress::new(dir.clone());
        fs::write(dir.join(PROGRESS_FILE), "not json").unwrap();
        assert!(saver.get(CURRENT_KEY).is_err());

        // The progress store recovers from it
        let mut progress = ProgressStore::new(Box::new(saver));
        assert_eq!(progress.load(30), ProgressState::default());
        assert!(!progress.is_enabled());
        let _ = fs::remove_dir_all(&dir);
    }
}
