/*
session.rs

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

//! Run a [`GameController`] object with its storage and its timers.
//!
//! The [`Session`] object forwards the events to the controller and executes the returned
//! effects: it saves the progress through the [`ProgressStore`] object and keeps the delayed
//! unlocks in a [`Scheduler`] object. When the driver moves the clock forward, the due unlocks
//! are sent back to the controller.

use log::debug;
use std::time::Duration;

use crate::catalog::Catalog;
use crate::config::Settings;
use crate::game::{Effect, Event, GameController, Snapshot};
use crate::progress::{ProgressState, ProgressStore};
use crate::scheduler::Scheduler;

pub struct Session {
    game: GameController,
    store: ProgressStore,
    scheduler: Scheduler,
}

impl Session {
    /// Create a [`Session`] object. The progress is restored from the store.
    ///
    /// # Errors
    ///
    /// The method returns an error when a level of the catalog is malformed.
    pub fn new(
        catalog: Catalog,
        settings: &Settings,
        mut store: ProgressStore,
    ) -> Result<Self, String> {
        let progress: ProgressState = store.load(catalog.len());
        let game: GameController = GameController::new(catalog, settings, progress)?;
        Ok(Self {
            game,
            store,
            scheduler: Scheduler::new(),
        })
    }

    /// Send an event to the controller and execute the resulting effects.
    pub fn dispatch(&mut self, event: Event) {
        let effects: Vec<Effect> = self.game.handle(event);
        self.execute(effects);
    }

    /// Move the clock forward and deliver the unlocks that are due.
    pub fn advance(&mut self, elapsed: Duration) {
        for attempt in self.scheduler.advance(elapsed) {
            debug!(
                "Unlock timer fired for attempt {attempt} at {:?}",
                self.scheduler.now()
            );
            self.dispatch(Event::UnlockTimerFired(attempt));
        }
    }

    fn execute(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::PersistProgress(progress) => self.store.save(&progress),
                Effect::ScheduleUnlock { attempt, delay } => {
                    self.scheduler.schedule(attempt, delay)
                }
                Effect::CancelUnlock(attempt) => {
                    self.scheduler.cancel(attempt);
                }
            }
        }
    }

    pub fn game(&self) -> &GameController {
        &self.game
    }

    #[cfg(test)]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    #[cfg(test)]
    pub fn store(&self) -> &ProgressStore {
        &self.store
    }

    pub fn snapshot(&self) -> Snapshot {
        self.game.snapshot()
    }
}
