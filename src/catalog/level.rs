/*
level.rs

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

//! Level graph: nodes laid out in the logical coordinate space, and target edges.

use serde::{Deserialize, Serialize};

use super::edges::EdgeIndex;

/// Viewports narrower than this width shrink the horizontal spread of the nodes.
const REFERENCE_WIDTH: f64 = 500.0;

/// Position in the logical coordinate space of the puzzle.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to the other point.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Size of the logical drawing surface.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Horizontal scaling factor applied to node offsets.
    pub fn scale(&self) -> f64 {
        (self.width / REFERENCE_WIDTH).min(1.0)
    }
}

/// Static description of a level, as authored in [`super::levels::LEVELS`].
#[derive(Debug)]
pub struct LevelSpec {
    /// Label displayed to the player.
    pub name: &'static str,

    /// Node positions as `(dx, fy)`. The node identifier is the position in the slice.
    pub nodes: &'static [(f64, f64)],

    /// Target edges as node identifier pairs.
    pub edges: &'static [(usize, usize)],
}

/// Node of a loaded level.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Node {
    /// Identifier, unique within the level.
    pub id: usize,

    /// Position in the logical coordinate space.
    pub position: Point,
}

/// Level ready to be played: the layout is computed for a given viewport.
#[derive(Debug, Clone)]
pub struct Level {
    /// Label displayed to the player.
    pub name: String,

    /// Nodes in declaration order.
    pub nodes: Vec<Node>,

    /// Target edges.
    pub edges: EdgeIndex,
}

impl Level {
    /// Build a level from its static description and lay out its nodes in the viewport.
    ///
    /// # Errors
    ///
    /// The method returns an error when the level is malformed (see [`Level::validate`]).
    pub fn from_spec(spec: &LevelSpec, viewport: &Viewport) -> Result<Self, String> {
        let scale: f64 = viewport.scale();
        let nodes: Vec<Node> = spec
            .nodes
            .iter()
            .enumerate()
            .map(|(id, (dx, fy))| Node {
                id,
                position: Point::new(viewport.width / 2.0 + dx * scale, viewport.height * fy),
            })
            .collect();
        let edges: EdgeIndex =
            EdgeIndex::new(nodes.len(), spec.edges).map_err(|e| format!("{}: {e}", spec.name))?;
        let level: Level = Self {
            name: String::from(spec.name),
            nodes,
            edges,
        };
        level.validate()?;
        Ok(level)
    }

    /// Verify the structure of the level.
    ///
    /// # Errors
    ///
    /// The method returns an error when the level has no edges, when a node has no edge
    /// (nobody could ever reach it with the stroke), or when a single stroke cannot cover all
    /// the edges.
    pub fn validate(&self) -> Result<(), String> {
        if self.edges.is_empty() {
            return Err(format!("{}: the level does not have any edges", self.name));
        }
        for node in &self.nodes {
            if self.edges.degree(node.id) == 0 {
                return Err(format!(
                    "{}: node {} does not have any edges",
                    self.name, node.id
                ));
            }
        }
        if !self.is_eulerian() {
            let reason: String = if self.is_connected() {
                format!(
                    "{} nodes have an odd number of edges (0 or 2 expected)",
                    self.odd_nodes().len()
                )
            } else {
                String::from("some edges are not connected to the others")
            };
            return Err(format!("{}: {reason}", self.name));
        }
        Ok(())
    }

    /// Number of target edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Return the position of the given node.
    pub fn position(&self, node_id: usize) -> Option<Point> {
        self.nodes.get(node_id).map(|n| n.position)
    }

    /// Return the nodes with an odd number of edges.
    pub fn odd_nodes(&self) -> Vec<usize> {
        self.nodes
            .iter()
            .map(|n| n.id)
            .filter(|id| self.edges.degree(*id) % 2 == 1)
            .collect()
    }

    /// Whether all the nodes are reachable from the first node through the target edges.
    pub fn is_connected(&self) -> bool {
        if self.nodes.is_empty() {
            return true;
        }
        let mut visited: Vec<bool> = vec![false; self.nodes.len()];
        let mut stack: Vec<usize> = vec![0];
        visited[0] = true;
        while let Some(node) = stack.pop() {
            for n in self.edges.neighbours(node) {
                if !visited[n] {
                    visited[n] = true;
                    stack.push(n);
                }
            }
        }
        visited.iter().all(|v| *v)
    }

    /// Whether a single stroke can cover every edge exactly once.
    pub fn is_eulerian(&self) -> bool {
        self.is_connected() && matches!(self.odd_nodes().len(), 0 | 2)
    }
}
