/*
lives.rs

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

//! Manage the player's lives for an attempt.

use log::debug;
use serde::{Deserialize, Serialize};

/// Default number of lives at the start of an attempt.
pub const DEFAULT_LIVES: usize = 3;

/// Manage the lives counter.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Lives {
    // Lives left.
    remaining: usize,

    // Lives at the start of the attempt.
    max: usize,
}

impl Default for Lives {
    fn default() -> Self {
        Self::new(DEFAULT_LIVES)
    }
}

impl Lives {
    /// Create a [`Lives`] object with all the lives available.
    pub fn new(max: usize) -> Self {
        Self { remaining: max, max }
    }

    /// Give all the lives back.
    pub fn reset(&mut self) {
        self.remaining = self.max;
    }

    /// Return the number of lives left.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Return the number of lives at the start of an attempt.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Whether all the lives are lost.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Remove a life and return the number of lives left. The counter never goes below zero.
    pub fn lose_one(&mut self) -> usize {
        self.remaining = self.remaining.saturating_sub(1);
        debug!("Life lost: {} of {} left", self.remaining, self.max);
        self.remaining
    }
}
