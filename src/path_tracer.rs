/*
path_tracer.rs

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

//! Validate and accumulate the stroke that the player draws.
//!
//! The [`PathTracer`] object receives the nodes under the pointer and decides, for each of them,
//! whether the stroke continues, goes back one step, fails, or covers all the target edges.
//!
//! Nodes can be visited several times: the puzzle is about covering every edge exactly once, so
//! only the target edges and the edges already traced decide whether a move is valid.
//!
//! A failure (invalid move, repeated edge, or stroke released before covering every edge) costs
//! a life and clears the stroke.

use log::debug;
use serde::Serialize;

use crate::catalog::edges::{Edge, EdgeIndex};
use crate::catalog::level::Point;
use crate::lives::Lives;
use crate::stroke::Stroke;

/// Reason for a failed stroke.
#[derive(Serialize, Debug, Copy, Clone, PartialEq)]
#[serde(rename_all = "camelCase", tag = "kind", content = "edge")]
pub enum Failure {
    /// The edge between the last node and the candidate node is not a target edge.
    InvalidEdge(Edge),

    /// The edge has already been traced in this stroke.
    RepeatedEdge(Edge),

    /// The pointer was released before all the edges were covered.
    Abandoned,
}

/// Result of a [`PathTracer`] operation.
#[derive(Serialize, Debug, Copy, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum StrokeStatus {
    /// Nothing changed.
    Ignored,

    /// A new stroke started.
    Started,

    /// The stroke was extended with a new edge.
    Continue,

    /// The last node and its edge were removed from the stroke.
    Undone,

    /// The stroke was cleared without penalty.
    Reset,

    /// The stroke failed and a life was lost.
    Failed(Failure),

    /// All the target edges are covered.
    Complete,
}

/// Stroke state machine for one level.
#[derive(Debug, Clone)]
pub struct PathTracer {
    /// Target edges of the level.
    targets: EdgeIndex,

    /// Stroke in progress.
    stroke: Stroke,

    /// Lives left for the attempt.
    lives: Lives,
}

impl PathTracer {
    /// Create a [`PathTracer`] object for the given target edges.
    pub fn new(targets: EdgeIndex, max_lives: usize) -> Self {
        let stroke: Stroke = Stroke::new(targets.len());
        Self {
            targets,
            stroke,
            lives: Lives::new(max_lives),
        }
    }

    /// Clear the stroke and give all the lives back.
    pub fn reset(&mut self) {
        self.stroke.clear();
        self.lives.reset();
    }

    /// Start a new stroke on the given node.
    ///
    /// The operation is ignored when all the lives are lost.
    pub fn begin_stroke(&mut self, node: usize) -> StrokeStatus {
        if self.lives.is_exhausted() || node >= self.targets.num_nodes() {
            return StrokeStatus::Ignored;
        }
        debug!("Stroke starts on node {node}");
        self.stroke.start(node);
        StrokeStatus::Started
    }

    /// Continue a paused stroke from its last node, for example after the undo button.
    ///
    /// The operation is ignored when the given node is not the last node of the stroke.
    pub fn resume_stroke(&mut self, node: usize) -> StrokeStatus {
        if self.lives.is_exhausted()
            || self.stroke.drawing
            || self.is_complete()
            || self.stroke.last() != Some(node)
        {
            return StrokeStatus::Ignored;
        }
        debug!("Stroke resumes on node {node}");
        self.stroke.drawing = true;
        StrokeStatus::Continue
    }

    /// Try to extend the stroke to the given node.
    pub fn extend_stroke(&mut self, candidate: usize) -> StrokeStatus {
        if !self.stroke.drawing {
            return StrokeStatus::Ignored;
        }
        let last: usize = match self.stroke.last() {
            Some(n) => n,
            None => return StrokeStatus::Ignored,
        };
        if candidate == last {
            return StrokeStatus::Ignored;
        }

        // Going back to the previous node removes the last edge
        if self.stroke.second_to_last() == Some(candidate) {
            self.stroke.pop(&self.targets);
            debug!("Back to node {candidate}: {} edges", self.stroke.num_edges());
            return StrokeStatus::Undone;
        }

        let edge: Edge = Edge::new(last, candidate);
        let position: usize = match self.targets.position(edge) {
            Some(p) => p,
            None => return self.fail(Failure::InvalidEdge(edge)),
        };
        if self.stroke.has_edge(position) {
            return self.fail(Failure::RepeatedEdge(edge));
        }

        self.stroke.push(candidate, position);
        debug!(
            "Edge {edge} traced: {}/{}",
            self.stroke.num_edges(),
            self.targets.len()
        );
        if self.is_complete() {
            self.stroke.drawing = false;
            self.stroke.cursor = None;
            debug!("All the edges are covered");
            return StrokeStatus::Complete;
        }
        StrokeStatus::Continue
    }

    /// The player released the pointer.
    pub fn release_stroke(&mut self) -> StrokeStatus {
        let was_drawing: bool = self.stroke.drawing;
        self.stroke.drawing = false;
        self.stroke.cursor = None;
        if !was_drawing || self.is_complete() {
            return StrokeStatus::Ignored;
        }
        if self.stroke.num_edges() == 0 {
            self.stroke.clear();
            return StrokeStatus::Reset;
        }
        self.fail(Failure::Abandoned)
    }

    /// Remove the last node and its edge. With a single node left, the stroke is cleared.
    ///
    /// The stroke is paused: the player continues it with [`PathTracer::resume_stroke`].
    pub fn undo_last(&mut self) -> StrokeStatus {
        if self.is_complete() || self.stroke.is_empty() {
            return StrokeStatus::Ignored;
        }
        if self.stroke.len() == 1 {
            self.stroke.clear();
            return StrokeStatus::Reset;
        }
        self.stroke.pop(&self.targets);
        self.stroke.drawing = false;
        self.stroke.cursor = None;
        StrokeStatus::Undone
    }

    /// Record the pointer position while drawing.
    pub fn set_cursor(&mut self, position: Point) {
        if self.stroke.drawing {
            self.stroke.cursor = Some(position);
        }
    }

    /// Whether all the target edges are covered.
    pub fn is_complete(&self) -> bool {
        !self.targets.is_empty() && self.stroke.num_edges() == self.targets.len()
    }

    /// Whether the stroke is being drawn.
    pub fn is_drawing(&self) -> bool {
        self.stroke.drawing
    }

    /// Return the stroke.
    pub fn stroke(&self) -> &Stroke {
        &self.stroke
    }

    /// Return the lives counter.
    pub fn lives(&self) -> &Lives {
        &self.lives
    }

    /// Return the target edges.
    pub fn targets(&self) -> &EdgeIndex {
        &self.targets
    }

    /// Return the traced edges.
    pub fn completed_edges(&self) -> Vec<Edge> {
        self.stroke.edges(&self.targets)
    }

    fn fail(&mut self, failure: Failure) -> StrokeStatus {
        debug!("Stroke failed: {failure:?}");
        self.stroke.clear();
        self.lives.lose_one();
        StrokeStatus::Failed(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> PathTracer {
        PathTracer::new(EdgeIndex::new(3, &[(0, 1), (1, 2), (2, 0)]).unwrap(), 3)
    }

    // Square with both diagonals removed, plus a tail: 0-1-2-3-0 and 2-4
    fn square_with_tail() -> PathTracer {
        PathTracer::new(
            EdgeIndex::new(5, &[(0, 1), (1, 2), (2, 3), (3, 0), (2, 4)]).unwrap(),
            3,
        )
    }

    #[test]
    fn triangle_is_completed() {
        let mut tracer = triangle();
        assert_eq!(tracer.begin_stroke(0), StrokeStatus::Started);
        assert_eq!(tracer.extend_stroke(1), StrokeStatus::Continue);
        assert_eq!(tracer.stroke().num_edges(), 1);
        assert_eq!(tracer.extend_stroke(2), StrokeStatus::Continue);
        assert_eq!(tracer.stroke().num_edges(), 2);
        assert_eq!(tracer.extend_stroke(0), StrokeStatus::Complete);
        assert_eq!(tracer.stroke().num_edges(), 3);
        assert_eq!(tracer.stroke().nodes(), &[0, 1, 2, 0]);
        assert_eq!(tracer.lives().remaining(), 3);
        assert!(!tracer.is_drawing());

        // Releasing after a complete stroke costs nothing
        assert_eq!(tracer.release_stroke(), StrokeStatus::Ignored);
        assert_eq!(tracer.lives().remaining(), 3);
    }

    #[test]
    fn invalid_move_costs_a_life() {
        let mut tracer = square_with_tail();
        tracer.begin_stroke(0);
        assert_eq!(
            tracer.extend_stroke(2),
            StrokeStatus::Failed(Failure::InvalidEdge(Edge::new(0, 2)))
        );
        assert_eq!(tracer.lives().remaining(), 2);
        assert!(tracer.stroke().is_empty());
        assert_eq!(tracer.stroke().num_edges(), 0);
        assert!(!tracer.is_drawing());

        // Moves are ignored until a new stroke starts
        assert_eq!(tracer.extend_stroke(1), StrokeStatus::Ignored);
    }

    #[test]
    fn repeated_edge_costs_a_life() {
        let mut tracer = square_with_tail();
        tracer.begin_stroke(0);
        for n in [1, 2, 3, 0] {
            assert_eq!(tracer.extend_stroke(n), StrokeStatus::Continue);
        }
        assert_eq!(
            tracer.extend_stroke(1),
            StrokeStatus::Failed(Failure::RepeatedEdge(Edge::new(0, 1)))
        );
        assert_eq!(tracer.lives().remaining(), 2);
        assert!(tracer.stroke().is_empty());
    }

    #[test]
    fn node_revisit_is_allowed() {
        let mut tracer = square_with_tail();
        tracer.begin_stroke(4);
        for n in [2, 1, 0, 3] {
            assert_eq!(tracer.extend_stroke(n), StrokeStatus::Continue);
        }
        assert_eq!(tracer.extend_stroke(2), StrokeStatus::Complete);
        assert_eq!(tracer.stroke().nodes(), &[4, 2, 1, 0, 3, 2]);
    }

    #[test]
    fn same_node_is_ignored() {
        let mut tracer = triangle();
        tracer.begin_stroke(0);
        assert_eq!(tracer.extend_stroke(0), StrokeStatus::Ignored);
        assert_eq!(tracer.stroke().len(), 1);
    }

    #[test]
    fn going_back_undoes_the_last_edge() {
        let mut tracer = square_with_tail();
        tracer.begin_stroke(0);
        tracer.extend_stroke(1);
        tracer.extend_stroke(2);
        assert_eq!(tracer.extend_stroke(1), StrokeStatus::Undone);
        assert_eq!(tracer.stroke().nodes(), &[0, 1]);
        assert_eq!(tracer.completed_edges(), vec![Edge::new(0, 1)]);
        assert_eq!(tracer.lives().remaining(), 3);
        assert!(tracer.is_drawing());
    }

    #[test]
    fn undo_round_trip_restores_edges() {
        let mut tracer = square_with_tail();
        tracer.begin_stroke(0);
        tracer.extend_stroke(1);
        tracer.extend_stroke(2);
        let before = tracer.completed_edges();

        assert_eq!(tracer.undo_last(), StrokeStatus::Undone);
        assert_eq!(tracer.completed_edges(), vec![Edge::new(0, 1)]);
        assert!(!tracer.is_drawing());
        assert_eq!(tracer.resume_stroke(1), StrokeStatus::Continue);
        assert_eq!(tracer.extend_stroke(2), StrokeStatus::Continue);
        assert_eq!(tracer.completed_edges(), before);
    }

    #[test]
    fn undo_single_node_clears_the_stroke() {
        let mut tracer = triangle();
        assert_eq!(tracer.undo_last(), StrokeStatus::Ignored);
        tracer.begin_stroke(2);
        assert_eq!(tracer.undo_last(), StrokeStatus::Reset);
        assert!(tracer.stroke().is_empty());
        assert_eq!(tracer.lives().remaining(), 3);
    }

    #[test]
    fn paused_stroke_resumes_on_last_node() {
        let mut tracer = square_with_tail();
        tracer.begin_stroke(0);
        tracer.extend_stroke(1);
        tracer.extend_stroke(2);
        assert_eq!(tracer.undo_last(), StrokeStatus::Undone);

        // Releasing a paused stroke costs nothing
        assert_eq!(tracer.release_stroke(), StrokeStatus::Ignored);
        assert_eq!(tracer.lives().remaining(), 3);

        assert_eq!(tracer.resume_stroke(0), StrokeStatus::Ignored);
        assert_eq!(tracer.resume_stroke(1), StrokeStatus::Continue);
        assert!(tracer.is_drawing());
        assert_eq!(tracer.extend_stroke(2), StrokeStatus::Continue);
        assert_eq!(tracer.stroke().nodes(), &[0, 1, 2]);
    }

    #[test]
    fn release_without_edge_is_free() {
        let mut tracer = triangle();
        tracer.begin_stroke(1);
        assert_eq!(tracer.release_stroke(), StrokeStatus::Reset);
        assert_eq!(tracer.lives().remaining(), 3);
        assert!(tracer.stroke().is_empty());
    }

    #[test]
    fn abandoned_stroke_costs_a_life() {
        let mut tracer = triangle();
        tracer.begin_stroke(0);
        tracer.extend_stroke(1);
        assert_eq!(
            tracer.release_stroke(),
            StrokeStatus::Failed(Failure::Abandoned)
        );
        assert_eq!(tracer.lives().remaining(), 2);
        assert!(tracer.stroke().is_empty());
        assert!(!tracer.is_drawing());
    }

    #[test]
    fn no_stroke_without_lives() {
        let mut tracer = triangle();
        for _ in 0..3 {
            tracer.begin_stroke(0);
            tracer.extend_stroke(1);
            tracer.release_stroke();
        }
        assert!(tracer.lives().is_exhausted());
        assert_eq!(tracer.begin_stroke(0), StrokeStatus::Ignored);
        assert!(!tracer.is_drawing());

        // Losing another life is not possible
        assert_eq!(tracer.release_stroke(), StrokeStatus::Ignored);
        assert_eq!(tracer.lives().remaining(), 0);

        tracer.reset();
        assert_eq!(tracer.lives().remaining(), 3);
        assert_eq!(tracer.begin_stroke(0), StrokeStatus::Started);
    }

    #[test]
    fn completion_needs_every_edge() {
        let mut tracer = square_with_tail();
        tracer.begin_stroke(4);
        tracer.extend_stroke(2);
        tracer.extend_stroke(3);
        tracer.extend_stroke(0);
        tracer.extend_stroke(1);
        assert!(!tracer.is_complete());
        assert_eq!(tracer.stroke().num_edges(), 4);
        assert_eq!(tracer.extend_stroke(2), StrokeStatus::Complete);
        assert_eq!(tracer.stroke().num_edges(), tracer.targets().len());
    }
}
