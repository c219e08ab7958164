/*
game.rs

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

//! Manage the screens, the level being played, and the player's progress.
//!
//! The [`GameController`] object receives [`Event`] objects (pointer input, buttons, and timers)
//! and returns the side effects that the caller must execute as a list of [`Effect`] objects.
//! The controller never writes the progress nor waits by itself, which keeps it independent of
//! the storage and of the event loop. See [`crate::session::Session`] for the caller.
//!
//! When the player completes a level, the next level is not unlocked right away: the controller
//! asks for a delayed unlock ([`Effect::ScheduleUnlock`]) so that the win animation can settle.
//! The delayed unlock is keyed by the [`AttemptId`] of the attempt that scheduled it. Any event
//! that starts a new attempt bumps that identifier, so a late timer for an old attempt is ignored.

use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use strum_macros::Display;

use crate::catalog::Catalog;
use crate::catalog::edges::Edge;
use crate::catalog::level::{Level, Point};
use crate::config::Settings;
use crate::hit_test::{Control, HitTester};
use crate::path_tracer::{PathTracer, StrokeStatus};
use crate::progress::ProgressState;

/// Identifier of an attempt. Bumped every time an attempt starts.
pub type AttemptId = u64;

/// Top-level screen.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Display)]
#[serde(rename_all = "camelCase", tag = "name")]
pub enum Screen {
    #[strum(to_string = "home")]
    Home,
    #[strum(to_string = "levelSelect")]
    LevelSelect { page: usize },
    #[strum(to_string = "playing")]
    Playing,
}

/// Status of the attempt on the playing screen.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Status {
    Idle,
    Drawing,
    Won,
    Lost,
}

/// Message displayed over the level.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Message {
    None,
    /// The level is completed.
    Win,
    /// All the lives are lost.
    Lose,
    /// The last level is completed and the player asked for the next one.
    AllCleared,
}

/// Input of the controller.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Event {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    /// Leave the home screen.
    Start,
    /// Home button.
    Home,
    /// Play the level at the given index.
    SelectLevel(usize),
    NextPage,
    PrevPage,
    Undo,
    Retry,
    NextLevel,
    /// The delayed unlock of the given attempt is due.
    UnlockTimerFired(AttemptId),
}

/// Side effect requested by the controller.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Effect {
    /// Save the progress.
    PersistProgress(ProgressState),

    /// Send [`Event::UnlockTimerFired`] for the attempt after the delay.
    ScheduleUnlock { attempt: AttemptId, delay: Duration },

    /// The delayed unlock of the attempt must not fire anymore.
    CancelUnlock(AttemptId),
}

/// Node of the stroke, with its position for drawing.
#[derive(Serialize, Debug, Copy, Clone, PartialEq)]
pub struct PathPoint {
    pub node: usize,
    pub x: f64,
    pub y: f64,
}

/// Read-only view of the state, for the renderer.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub screen: Screen,
    pub status: Status,
    pub message: Message,
    pub level_index: usize,
    pub level_name: String,
    pub num_levels: usize,
    pub max_unlocked_level: usize,
    pub lives: usize,
    pub max_lives: usize,
    pub path: Vec<PathPoint>,
    pub cursor: Option<Point>,
    pub completed_edges: Vec<Edge>,
    pub covered: usize,
    pub total: usize,
    pub attempt: AttemptId,

    /// Result of the last stroke operation.
    pub last_stroke: Option<StrokeStatus>,
}

/// Game state machine.
pub struct GameController {
    catalog: Catalog,
    hit_tester: HitTester,
    max_lives: usize,
    settle_delay: Duration,

    screen: Screen,
    status: Status,
    message: Message,
    progress: ProgressState,

    /// Stroke and lives for the current level.
    tracer: PathTracer,

    attempt: AttemptId,

    /// Whether the delayed unlock of the current attempt has not fired yet.
    unlock_pending: bool,

    last_stroke: Option<StrokeStatus>,
}

impl GameController {
    /// Create a [`GameController`] object on the home screen.
    ///
    /// The progress is clamped into the range of the catalog.
    ///
    /// # Errors
    ///
    /// The method returns an error when a level of the catalog is malformed.
    pub fn new(
        catalog: Catalog,
        settings: &Settings,
        mut progress: ProgressState,
    ) -> Result<Self, String> {
        for level in catalog.iter() {
            level.validate()?;
        }
        progress.clamp(catalog.len());
        let max_lives: usize = settings.max_lives.max(1);
        let tracer: PathTracer = PathTracer::new(
            catalog.get_clamped(progress.current_level).edges.clone(),
            max_lives,
        );
        let hit_tester: HitTester = HitTester::new(
            *catalog.viewport(),
            settings.capture_radius,
            settings.levels_per_page,
        );
        Ok(Self {
            catalog,
            hit_tester,
            max_lives,
            settle_delay: settings.settle_delay(),
            screen: Screen::Home,
            status: Status::Idle,
            message: Message::None,
            progress,
            tracer,
            attempt: 0,
            unlock_pending: false,
            last_stroke: None,
        })
    }

    /// Process an event and return the side effects to execute.
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::PointerDown(position) => self.pointer_down(position),
            Event::PointerMove(position) => self.pointer_move(position),
            Event::PointerUp => self.pointer_up(),
            Event::Start => {
                if self.screen == Screen::Home {
                    self.open_level_select();
                }
                Vec::new()
            }
            Event::Home => self.go_home(),
            Event::SelectLevel(index) => match self.screen {
                Screen::LevelSelect { .. } => self.select_level(index),
                _ => Vec::new(),
            },
            Event::NextPage => {
                self.turn_page(true);
                Vec::new()
            }
            Event::PrevPage => {
                self.turn_page(false);
                Vec::new()
            }
            Event::Undo => {
                self.undo();
                Vec::new()
            }
            Event::Retry => self.retry(),
            Event::NextLevel => self.next_level(),
            Event::UnlockTimerFired(attempt) => self.unlock_timer_fired(attempt),
        }
    }

    fn pointer_down(&mut self, position: Point) -> Vec<Effect> {
        if let Some(control) = self.hit_tester.control_at(
            &self.screen,
            self.status,
            self.catalog.len(),
            &position,
        ) {
            debug!("{control} button on the {} screen", self.screen);
            return self.activate(control);
        }
        if self.screen != Screen::Playing || !self.is_attempt_open() {
            return Vec::new();
        }
        if let Some(node) = self.hit_tester.node_at(self.level(), &position) {
            let mut status: StrokeStatus = self.tracer.resume_stroke(node);
            if status == StrokeStatus::Ignored {
                status = self.tracer.begin_stroke(node);
            }
            if let Some(p) = self.level().position(node) {
                self.tracer.set_cursor(p);
            }
            return self.apply_stroke_status(status);
        }
        Vec::new()
    }

    fn pointer_move(&mut self, position: Point) -> Vec<Effect> {
        if self.screen != Screen::Playing || !self.tracer.is_drawing() {
            return Vec::new();
        }
        self.tracer.set_cursor(position);
        match self.hit_tester.node_at(self.level(), &position) {
            Some(node) => {
                let status: StrokeStatus = self.tracer.extend_stroke(node);
                self.apply_stroke_status(status)
            }
            None => Vec::new(),
        }
    }

    fn pointer_up(&mut self) -> Vec<Effect> {
        if self.screen != Screen::Playing {
            return Vec::new();
        }
        let status: StrokeStatus = self.tracer.release_stroke();
        self.apply_stroke_status(status)
    }

    fn activate(&mut self, control: Control) -> Vec<Effect> {
        match control {
            Control::Home => self.go_home(),
            Control::Start => self.handle(Event::Start),
            Control::LevelCard(index) => self.select_level(index),
            Control::NextPage => self.handle(Event::NextPage),
            Control::PrevPage => self.handle(Event::PrevPage),
            Control::Undo => self.handle(Event::Undo),
            Control::Retry => self.retry(),
            Control::Overlay => match self.status {
                Status::Won => self.next_level(),
                Status::Lost => self.retry(),
                _ => Vec::new(),
            },
        }
    }

    /// Update the attempt status from the result of a stroke operation.
    fn apply_stroke_status(&mut self, status: StrokeStatus) -> Vec<Effect> {
        if status != StrokeStatus::Ignored {
            self.last_stroke = Some(status);
        }
        match status {
            StrokeStatus::Complete => {
                debug!("Level {} completed", self.progress.current_level + 1);
                self.status = Status::Won;
                self.message = Message::Win;
                self.unlock_pending = true;
                vec![Effect::ScheduleUnlock {
                    attempt: self.attempt,
                    delay: self.settle_delay,
                }]
            }
            StrokeStatus::Failed(_) if self.tracer.lives().is_exhausted() => {
                debug!("No more lives on level {}", self.progress.current_level + 1);
                self.status = Status::Lost;
                self.message = Message::Lose;
                Vec::new()
            }
            _ => {
                if self.is_attempt_open() {
                    self.status = if self.tracer.is_drawing() {
                        Status::Drawing
                    } else {
                        Status::Idle
                    };
                }
                Vec::new()
            }
        }
    }

    fn open_level_select(&mut self) {
        self.screen = Screen::LevelSelect {
            page: self.hit_tester.page_of(self.progress.current_level),
        };
    }

    fn go_home(&mut self) -> Vec<Effect> {
        match self.screen {
            Screen::Home => {
                self.open_level_select();
                Vec::new()
            }
            Screen::LevelSelect { .. } => {
                self.screen = Screen::Home;
                Vec::new()
            }
            Screen::Playing => {
                // Leaving the level abandons the attempt without penalty
                let effects: Vec<Effect> = self.cancel_unlock();
                self.tracer.reset();
                self.open_level_select();
                effects
            }
        }
    }

    fn turn_page(&mut self, forward: bool) {
        if let Screen::LevelSelect { page } = self.screen {
            let num_pages: usize = self.hit_tester.num_pages(self.catalog.len());
            let new_page: usize = if forward {
                (page + 1).min(num_pages - 1)
            } else {
                page.saturating_sub(1)
            };
            self.screen = Screen::LevelSelect { page: new_page };
        }
    }

    fn select_level(&mut self, index: usize) -> Vec<Effect> {
        if index >= self.catalog.len() || !self.progress.is_unlocked(index) {
            debug!("Level {} is locked", index + 1);
            return Vec::new();
        }
        let mut effects: Vec<Effect> = self.cancel_unlock();
        self.progress.current_level = index;
        self.start_attempt();
        self.screen = Screen::Playing;
        effects.push(Effect::PersistProgress(self.progress));
        effects
    }

    fn undo(&mut self) {
        if self.screen == Screen::Playing && self.is_attempt_open() {
            let status: StrokeStatus = self.tracer.undo_last();
            self.apply_stroke_status(status);
        }
    }

    /// Restart the current level with all the lives.
    fn retry(&mut self) -> Vec<Effect> {
        if self.screen != Screen::Playing {
            return Vec::new();
        }
        let effects: Vec<Effect> = self.flush_unlock();
        self.start_attempt();
        effects
    }

    fn next_level(&mut self) -> Vec<Effect> {
        if self.screen != Screen::Playing || self.status != Status::Won {
            return Vec::new();
        }
        let mut effects: Vec<Effect> = self.flush_unlock();
        let next: usize = self.progress.current_level + 1;
        if next >= self.catalog.len() {
            debug!("All the levels are cleared");
            self.message = Message::AllCleared;
            return effects;
        }
        self.progress.current_level = next;
        self.start_attempt();
        effects.push(Effect::PersistProgress(self.progress));
        effects
    }

    fn unlock_timer_fired(&mut self, attempt: AttemptId) -> Vec<Effect> {
        if attempt != self.attempt || !self.unlock_pending {
            debug!("Ignoring the unlock of stale attempt {attempt}");
            return Vec::new();
        }
        self.commit_unlock()
    }

    /// Unlock the level after the current one, if it exists and is still locked.
    fn commit_unlock(&mut self) -> Vec<Effect> {
        self.unlock_pending = false;
        let next: usize = self.progress.current_level + 1;
        if next < self.catalog.len() && next > self.progress.max_unlocked_level {
            self.progress.max_unlocked_level = next;
            debug!("Level {} unlocked", next + 1);
            return vec![Effect::PersistProgress(self.progress)];
        }
        Vec::new()
    }

    /// Commit the pending unlock now and cancel its timer.
    fn flush_unlock(&mut self) -> Vec<Effect> {
        if !self.unlock_pending {
            return Vec::new();
        }
        let mut effects: Vec<Effect> = vec![Effect::CancelUnlock(self.attempt)];
        effects.extend(self.commit_unlock());
        effects
    }

    /// Drop the pending unlock without committing it.
    fn cancel_unlock(&mut self) -> Vec<Effect> {
        if !self.unlock_pending {
            return Vec::new();
        }
        self.unlock_pending = false;
        vec![Effect::CancelUnlock(self.attempt)]
    }

    /// Reset the stroke and the lives for the current level.
    fn start_attempt(&mut self) {
        self.attempt += 1;
        self.unlock_pending = false;
        self.tracer = PathTracer::new(self.level().edges.clone(), self.max_lives);
        self.status = Status::Idle;
        self.message = Message::None;
        self.last_stroke = None;
        debug!(
            "Attempt {} on level {}",
            self.attempt,
            self.progress.current_level + 1
        );
    }

    /// Whether the player can still draw on the current level.
    fn is_attempt_open(&self) -> bool {
        matches!(self.status, Status::Idle | Status::Drawing)
    }

    /// Level being played.
    pub fn level(&self) -> &Level {
        self.catalog.get_clamped(self.progress.current_level)
    }

    #[cfg(test)]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[cfg(test)]
    pub fn status(&self) -> Status {
        self.status
    }

    #[cfg(test)]
    pub fn message(&self) -> Message {
        self.message
    }

    #[cfg(test)]
    pub fn progress(&self) -> ProgressState {
        self.progress
    }

    #[cfg(test)]
    pub fn attempt(&self) -> AttemptId {
        self.attempt
    }

    #[cfg(test)]
    pub fn tracer(&self) -> &PathTracer {
        &self.tracer
    }

    /// Build the view of the state for the renderer.
    pub fn snapshot(&self) -> Snapshot {
        let level: &Level = self.level();
        let path: Vec<PathPoint> = self
            .tracer
            .stroke()
            .nodes()
            .iter()
            .filter_map(|n| {
                level.position(*n).map(|p| PathPoint {
                    node: *n,
                    x: p.x,
                    y: p.y,
                })
            })
            .collect();
        Snapshot {
            screen: self.screen,
            status: self.status,
            message: self.message,
            level_index: self.progress.current_level,
            level_name: level.name.clone(),
            num_levels: self.catalog.len(),
            max_unlocked_level: self.progress.max_unlocked_level,
            lives: self.tracer.lives().remaining(),
            max_lives: self.tracer.lives().max(),
            path,
            cursor: self.tracer.stroke().cursor,
            completed_edges: self.tracer.completed_edges(),
            covered: self.tracer.stroke().num_edges(),
            total: self.tracer.targets().len(),
            attempt: self.attempt,
            last_stroke: self.last_stroke,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::edges::EdgeIndex;
    use crate::catalog::level::{LevelSpec, Node, Viewport};
    use crate::path_tracer::Failure;

    const TRIANGLE: LevelSpec = LevelSpec {
        name: "Triangle",
        nodes: &[(0.0, 0.25), (-130.0, 0.75), (130.0, 0.75)],
        edges: &[(0, 1), (1, 2), (2, 0)],
    };
    const SQUARE: LevelSpec = LevelSpec {
        name: "Square",
        nodes: &[(-100.0, 0.3), (100.0, 0.3), (100.0, 0.7), (-100.0, 0.7)],
        edges: &[(0, 1), (1, 2), (2, 3), (3, 0)],
    };
    const BOWTIE: LevelSpec = LevelSpec {
        name: "Bowtie",
        nodes: &[(-150.0, 0.2), (-150.0, 0.8), (0.0, 0.5), (150.0, 0.2), (150.0, 0.8)],
        edges: &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)],
    };

    fn controller(progress: ProgressState) -> GameController {
        let catalog =
            Catalog::from_specs(&[TRIANGLE, SQUARE, BOWTIE], &Viewport::default()).unwrap();
        GameController::new(catalog, &Settings::default(), progress).unwrap()
    }

    /// Controller on the playing screen of the given level.
    fn playing(index: usize, max_unlocked_level: usize) -> GameController {
        let mut game = controller(ProgressState {
            current_level: 0,
            max_unlocked_level,
        });
        game.handle(Event::Start);
        let effects = game.handle(Event::SelectLevel(index));
        assert_eq!(game.screen(), Screen::Playing);
        assert_eq!(game.progress().current_level, index);
        assert_eq!(
            effects,
            vec![Effect::PersistProgress(game.progress())]
        );
        game
    }

    fn node(game: &GameController, id: usize) -> Point {
        game.level().position(id).unwrap()
    }

    /// Draw a stroke through the given nodes without releasing the pointer.
    fn draw(game: &mut GameController, nodes: &[usize]) -> Vec<Effect> {
        let mut effects = game.handle(Event::PointerDown(node(game, nodes[0])));
        for n in &nodes[1..] {
            effects.extend(game.handle(Event::PointerMove(node(game, *n))));
        }
        effects
    }

    #[test]
    fn starts_on_home_screen() {
        let mut game = controller(ProgressState::default());
        assert_eq!(game.screen(), Screen::Home);
        game.handle(Event::SelectLevel(0));
        assert_eq!(game.screen(), Screen::Home);
        game.handle(Event::Start);
        assert_eq!(game.screen(), Screen::LevelSelect { page: 0 });
    }

    #[test]
    fn completion_schedules_unlock() {
        let mut game = playing(0, 0);
        let attempt = game.attempt();
        let effects = draw(&mut game, &[0, 1, 2, 0]);
        assert_eq!(
            effects,
            vec![Effect::ScheduleUnlock {
                attempt,
                delay: Duration::from_millis(1000)
            }]
        );
        assert_eq!(game.status(), Status::Won);
        assert_eq!(game.message(), Message::Win);
        assert_eq!(game.tracer().lives().remaining(), 3);
        assert!(game.handle(Event::PointerUp).is_empty());
        assert_eq!(game.tracer().lives().remaining(), 3);

        // Completing the highest unlocked level unlocks the next one
        let effects = game.handle(Event::UnlockTimerFired(attempt));
        let expected = ProgressState {
            current_level: 0,
            max_unlocked_level: 1,
        };
        assert_eq!(effects, vec![Effect::PersistProgress(expected)]);
        assert_eq!(game.progress(), expected);

        // The timer fires once
        assert!(game.handle(Event::UnlockTimerFired(attempt)).is_empty());
    }

    #[test]
    fn completing_an_older_level_keeps_progress() {
        let mut game = playing(0, 2);
        let attempt = game.attempt();
        draw(&mut game, &[0, 1, 2, 0]);
        assert!(game.handle(Event::UnlockTimerFired(attempt)).is_empty());
        assert_eq!(game.progress().max_unlocked_level, 2);
    }

    #[test]
    fn last_level_unlocks_nothing() {
        let mut game = playing(2, 2);
        let attempt = game.attempt();
        draw(&mut game, &[2, 0, 1, 2, 3, 4, 2]);
        assert_eq!(game.status(), Status::Won);
        assert!(game.handle(Event::UnlockTimerFired(attempt)).is_empty());
        assert_eq!(game.progress().max_unlocked_level, 2);

        game.handle(Event::NextLevel);
        assert_eq!(game.message(), Message::AllCleared);
        assert_eq!(game.progress().current_level, 2);
    }

    #[test]
    fn losing_all_lives_then_retry() {
        let mut game = playing(1, 1);
        for expected in [2, 1, 0] {
            // Diagonal 0-2 is not a target edge
            draw(&mut game, &[0, 2]);
            assert_eq!(game.tracer().lives().remaining(), expected);
        }
        assert_eq!(game.status(), Status::Lost);
        assert_eq!(game.message(), Message::Lose);
        assert_eq!(
            game.snapshot().last_stroke,
            Some(StrokeStatus::Failed(Failure::InvalidEdge(Edge::new(0, 2))))
        );

        // No stroke can start anymore
        game.handle(Event::PointerDown(node(&game, 0)));
        assert!(game.tracer().stroke().is_empty());

        // Retry gives the lives back
        let attempt = game.attempt();
        assert!(game.handle(Event::Retry).is_empty());
        assert_eq!(game.status(), Status::Idle);
        assert_eq!(game.message(), Message::None);
        assert_eq!(game.tracer().lives().remaining(), 3);
        assert_eq!(game.attempt(), attempt + 1);
    }

    #[test]
    fn going_back_is_not_a_failure() {
        let mut game = playing(1, 1);
        draw(&mut game, &[0, 1, 2]);
        assert_eq!(game.status(), Status::Drawing);
        // Going back is an undo, not a repeated edge
        game.handle(Event::PointerMove(node(&game, 1)));
        assert_eq!(game.tracer().stroke().nodes(), &[0, 1]);
        assert_eq!(game.tracer().lives().remaining(), 3);

        game.handle(Event::PointerMove(node(&game, 2)));
        game.handle(Event::PointerMove(node(&game, 3)));
        game.handle(Event::PointerMove(node(&game, 0)));
        assert_eq!(game.status(), Status::Won);
    }

    #[test]
    fn abandoned_stroke() {
        let mut game = playing(0, 0);
        draw(&mut game, &[0, 1]);
        game.handle(Event::PointerUp);
        assert_eq!(game.tracer().lives().remaining(), 2);
        assert_eq!(game.status(), Status::Idle);
        assert!(game.snapshot().path.is_empty());

        // Releasing on the starting node costs nothing
        draw(&mut game, &[1]);
        game.handle(Event::PointerUp);
        assert_eq!(game.tracer().lives().remaining(), 2);
    }

    #[test]
    fn leaving_the_level_cancels_the_unlock() {
        let mut game = playing(0, 0);
        let attempt = game.attempt();
        draw(&mut game, &[0, 1, 2, 0]);
        let effects = game.handle(Event::Home);
        assert_eq!(effects, vec![Effect::CancelUnlock(attempt)]);
        assert_eq!(game.screen(), Screen::LevelSelect { page: 0 });

        // Stale timer
        assert!(game.handle(Event::UnlockTimerFired(attempt)).is_empty());
        assert_eq!(game.progress().max_unlocked_level, 0);

        // The new attempt on the same level has another identifier
        game.handle(Event::SelectLevel(0));
        assert!(game.handle(Event::UnlockTimerFired(attempt)).is_empty());
        assert_ne!(game.attempt(), attempt);
    }

    #[test]
    fn next_level_commits_pending_unlock() {
        let mut game = playing(0, 0);
        let attempt = game.attempt();
        draw(&mut game, &[0, 1, 2, 0]);
        let effects = game.handle(Event::NextLevel);
        assert_eq!(
            effects,
            vec![
                Effect::CancelUnlock(attempt),
                Effect::PersistProgress(ProgressState {
                    current_level: 0,
                    max_unlocked_level: 1
                }),
                Effect::PersistProgress(ProgressState {
                    current_level: 1,
                    max_unlocked_level: 1
                }),
            ]
        );
        assert_eq!(game.level().name, "Square");
        assert_eq!(game.status(), Status::Idle);
        assert_eq!(game.tracer().lives().remaining(), 3);
    }

    #[test]
    fn next_level_needs_a_win() {
        let mut game = playing(0, 2);
        assert!(game.handle(Event::NextLevel).is_empty());
        assert_eq!(game.progress().current_level, 0);
    }

    #[test]
    fn locked_level_cannot_be_selected() {
        let mut game = controller(ProgressState::default());
        game.handle(Event::Start);
        assert!(game.handle(Event::SelectLevel(1)).is_empty());
        assert!(game.handle(Event::SelectLevel(7)).is_empty());
        assert_eq!(game.screen(), Screen::LevelSelect { page: 0 });
    }

    #[test]
    fn buttons_drive_the_game() {
        let mut game = controller(ProgressState::default());
        // Start button, then the first level card
        game.handle(Event::PointerDown(Point::new(400.0, 468.0)));
        assert_eq!(game.screen(), Screen::LevelSelect { page: 0 });
        game.handle(Event::PointerDown(Point::new(182.0, 190.0)));
        assert_eq!(game.screen(), Screen::Playing);

        draw(&mut game, &[0, 1, 2]);
        game.handle(Event::PointerUp);
        assert_eq!(game.tracer().lives().remaining(), 2);

        // The undo button pauses the stroke, which resumes from its last node
        draw(&mut game, &[0, 1, 2]);
        game.handle(Event::PointerDown(Point::new(120.0, 560.0)));
        assert_eq!(game.tracer().stroke().nodes(), &[0, 1]);
        assert_eq!(game.status(), Status::Idle);
        game.handle(Event::PointerUp);
        assert_eq!(game.tracer().lives().remaining(), 2);
        game.handle(Event::PointerDown(node(&game, 1)));
        assert_eq!(game.status(), Status::Drawing);
        game.handle(Event::PointerMove(node(&game, 2)));
        game.handle(Event::PointerMove(node(&game, 0)));
        assert_eq!(game.status(), Status::Won);

        // Overlay button goes to the next level
        game.handle(Event::PointerDown(Point::new(400.0, 390.0)));
        assert_eq!(game.progress().current_level, 1);

        // Home button
        game.handle(Event::PointerDown(Point::new(50.0, 55.0)));
        assert_eq!(game.screen(), Screen::LevelSelect { page: 0 });
        game.handle(Event::PointerDown(Point::new(50.0, 55.0)));
        assert_eq!(game.screen(), Screen::Home);
    }

    #[test]
    fn retry_button_restores_lives() {
        let mut game = playing(1, 1);
        draw(&mut game, &[0, 1]);
        game.handle(Event::PointerUp);
        game.handle(Event::PointerDown(Point::new(310.0, 560.0)));
        assert_eq!(game.tracer().lives().remaining(), 3);
        assert!(game.tracer().stroke().is_empty());
    }

    #[test]
    fn snapshot_content() {
        let mut game = playing(0, 0);
        draw(&mut game, &[0, 1]);
        game.handle(Event::PointerMove(Point::new(300.0, 300.0)));
        let snapshot = game.snapshot();
        assert_eq!(snapshot.status, Status::Drawing);
        assert_eq!(snapshot.covered, 1);
        assert_eq!(snapshot.total, 3);
        assert_eq!(snapshot.path.len(), 2);
        assert_eq!(snapshot.path[0].node, 0);
        assert_eq!(snapshot.cursor, Some(Point::new(300.0, 300.0)));
        assert_eq!(snapshot.completed_edges, vec![Edge::new(0, 1)]);

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains(r#""screen":{"name":"playing"}"#));
        assert!(json.contains(r#""status":"drawing""#));
    }

    #[test]
    fn pages_stay_in_bounds() {
        let mut game = controller(ProgressState::default());
        game.handle(Event::Start);
        game.handle(Event::NextPage);
        assert_eq!(game.screen(), Screen::LevelSelect { page: 0 });
        game.handle(Event::PrevPage);
        assert_eq!(game.screen(), Screen::LevelSelect { page: 0 });
    }

    #[test]
    fn malformed_catalog_is_refused() {
        // Node 2 has no edge
        let level = Level {
            name: String::from("Broken"),
            nodes: vec![
                Node {
                    id: 0,
                    position: Point::new(100.0, 100.0),
                },
                Node {
                    id: 1,
                    position: Point::new(200.0, 100.0),
                },
                Node {
                    id: 2,
                    position: Point::new(300.0, 100.0),
                },
            ],
            edges: EdgeIndex::new(3, &[(0, 1)]).unwrap(),
        };
        let catalog = Catalog::from_levels(vec![level], &Viewport::default()).unwrap();
        let err = GameController::new(catalog, &Settings::default(), ProgressState::default())
            .err()
            .unwrap();
        assert!(err.contains("node 2"));
    }

    #[test]
    fn disconnected_catalog_is_refused() {
        // Two separate segments cannot be drawn with one stroke
        let nodes: Vec<Node> = (0..4)
            .map(|id| Node {
                id,
                position: Point::new(100.0 * (id + 1) as f64, 100.0),
            })
            .collect();
        let level = Level {
            name: String::from("Split"),
            nodes,
            edges: EdgeIndex::new(4, &[(0, 1), (2, 3)]).unwrap(),
        };
        let catalog = Catalog::from_levels(vec![level], &Viewport::default()).unwrap();
        let err = GameController::new(catalog, &Settings::default(), ProgressState::default())
            .err()
            .unwrap();
        assert_eq!(err, "Split: some edges are not connected to the others");
    }
}
