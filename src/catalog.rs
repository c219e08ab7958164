/*
catalog.rs

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

//! Manage the levels.
//!
//! The levels are described statically in [`levels::LEVELS`] by using [`level::LevelSpec`]
//! objects. Before they can be played, the levels must be laid out for a viewport, which builds
//! [`level::Level`] objects. The [`Catalog`] object groups these levels in play order.
//!
//! Each level stores its target edges in an [`edges::EdgeIndex`] object, which assigns a bit
//! position to each edge so that the edges traced by the player can be tracked in an
//! [`edges::EdgeSet`] bitset.
//!
//! The [`solver::Solver`] object finds a stroke that covers all the edges of a level. Developers
//! use it from the command line to verify their new levels.

pub mod edges;
pub mod level;
pub mod levels;
pub mod solver;

use log::debug;

use level::{Level, LevelSpec, Viewport};

/// Ordered list of the levels, laid out for a viewport.
#[derive(Debug, Clone)]
pub struct Catalog {
    levels: Vec<Level>,
    viewport: Viewport,
}

impl Catalog {
    /// Build the catalog from the built-in levels.
    ///
    /// # Errors
    ///
    /// The method returns an error for the first malformed level.
    pub fn load(viewport: &Viewport) -> Result<Self, String> {
        Self::from_specs(levels::LEVELS, viewport)
    }

    /// Build the catalog from the given level descriptions.
    ///
    /// # Errors
    ///
    /// The method returns an error for the first malformed level.
    pub fn from_specs(specs: &[LevelSpec], viewport: &Viewport) -> Result<Self, String> {
        let levels: Vec<Level> = specs
            .iter()
            .map(|s| Level::from_spec(s, viewport))
            .collect::<Result<Vec<Level>, String>>()?;
        Self::from_levels(levels, viewport)
    }

    /// Build the catalog from levels already laid out for the viewport.
    ///
    /// The levels are not validated.
    ///
    /// # Errors
    ///
    /// The method returns an error when the list is empty.
    pub fn from_levels(levels: Vec<Level>, viewport: &Viewport) -> Result<Self, String> {
        if levels.is_empty() {
            return Err(String::from("The catalog does not contain any level"));
        }
        debug!(
            "Catalog loaded: {} levels for a {}x{} viewport",
            levels.len(),
            viewport.width,
            viewport.height
        );
        Ok(Self {
            levels,
            viewport: *viewport,
        })
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Return the level at the given index.
    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    /// Return the level at the given index, or the last level when the index is out of range.
    pub fn get_clamped(&self, index: usize) -> &Level {
        &self.levels[index.min(self.levels.len() - 1)]
    }

    /// Iterate over the levels in play order.
    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }

    /// Viewport used for the layout.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}
