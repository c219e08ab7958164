/*
scheduler.rs

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

//! Delayed tasks on a virtual clock.
//!
//! The game only waits in one place: after a level is completed, the next level is unlocked once
//! the win animation settles. The [`Scheduler`] object keeps these pending unlocks, keyed by the
//! attempt that scheduled them, so that leaving the level can cancel them.
//!
//! The clock does not run by itself. The driver (the script player, or a renderer frame loop)
//! calls [`Scheduler::advance`] with the elapsed time and receives the tasks that are due.

use log::debug;
use std::time::Duration;

use crate::game::AttemptId;

/// Pending task.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Entry {
    attempt: AttemptId,
    due: Duration,
}

/// Virtual clock and its pending tasks.
#[derive(Debug, Default)]
pub struct Scheduler {
    /// Time elapsed since the creation of the object.
    now: Duration,

    /// Pending tasks, in scheduling order.
    pending: Vec<Entry>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current time of the virtual clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule a task for the given attempt. A task already pending for that attempt is
    /// replaced.
    pub fn schedule(&mut self, attempt: AttemptId, delay: Duration) {
        self.pending.retain(|e| e.attempt != attempt);
        let due: Duration = self.now + delay;
        debug!("Unlock for attempt {attempt} due at {due:?}");
        self.pending.push(Entry { attempt, due });
    }

    /// Cancel the task of the given attempt. Return whether a task was pending.
    pub fn cancel(&mut self, attempt: AttemptId) -> bool {
        let before: usize = self.pending.len();
        self.pending.retain(|e| e.attempt != attempt);
        let cancelled: bool = self.pending.len() != before;
        if cancelled {
            debug!("Unlock for attempt {attempt} cancelled");
        }
        cancelled
    }

    /// Whether a task is pending for the given attempt.
    #[cfg(test)]
    pub fn is_pending(&self, attempt: AttemptId) -> bool {
        self.pending.iter().any(|e| e.attempt == attempt)
    }

    /// Whether no task is pending.
    #[cfg(test)]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Move the clock forward and return the attempts whose task is due, in due order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<AttemptId> {
        self.now += elapsed;
        let now: Duration = self.now;
        let mut due: Vec<Entry> = self.pending.iter().filter(|e| e.due <= now).copied().collect();
        self.pending.retain(|e| e.due > now);
        due.sort_by_key(|e| e.due);
        due.into_iter().map(|e| e.attempt).collect()
    }
}
