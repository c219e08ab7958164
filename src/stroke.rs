/*
stroke.rs

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

//! Stroke being drawn by the player.
//!
//! The stroke keeps the visited nodes in order, and the edges traced so far in an
//! [`EdgeSet`]. Nodes can appear several times in the stroke; edges cannot.

use crate::catalog::edges::{Edge, EdgeIndex, EdgeSet};
use crate::catalog::level::Point;

/// Stroke object.
#[derive(Debug, Clone, Default)]
pub struct Stroke {
    /// Visited nodes, in order.
    nodes: Vec<usize>,

    /// Edges traced so far, as positions in the level [`EdgeIndex`].
    edges: EdgeSet,

    /// Whether the pointer is down and the stroke is being extended.
    pub drawing: bool,

    /// Last pointer position while drawing. Only used for rendering.
    pub cursor: Option<Point>,
}

impl Stroke {
    /// Create an empty [`Stroke`] object for a level with `num_edges` edges.
    pub fn new(num_edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(num_edges + 1),
            edges: EdgeSet::new(num_edges),
            drawing: false,
            cursor: None,
        }
    }

    /// Remove all the nodes and edges, and stop drawing.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.drawing = false;
        self.cursor = None;
    }

    /// Start the stroke on the given node.
    pub fn start(&mut self, node: usize) {
        self.nodes.clear();
        self.edges.clear();
        self.nodes.push(node);
        self.drawing = true;
    }

    /// Append a node reached through the edge at the given position.
    pub fn push(&mut self, node: usize, edge_position: usize) {
        self.nodes.push(node);
        self.edges.insert(edge_position);
    }

    /// Remove the last node and the edge that led to it. Return the removed node.
    pub fn pop(&mut self, index: &EdgeIndex) -> Option<usize> {
        let last: usize = self.nodes.pop()?;
        if let Some(&previous) = self.nodes.last()
            && let Some(position) = index.position(Edge::new(previous, last))
        {
            self.edges.remove(position);
        }
        Some(last)
    }

    /// Number of visited nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the stroke has no node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Return the visited nodes.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Return the last visited node.
    pub fn last(&self) -> Option<usize> {
        self.nodes.last().copied()
    }

    /// Return the node visited before the last one.
    pub fn second_to_last(&self) -> Option<usize> {
        let l: usize = self.nodes.len();
        if l >= 2 { Some(self.nodes[l - 2]) } else { None }
    }

    /// Whether the edge at the given position has already been traced.
    pub fn has_edge(&self, edge_position: usize) -> bool {
        self.edges.contains(edge_position)
    }

    /// Number of edges traced.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Return the traced edges, in level declaration order.
    pub fn edges(&self, index: &EdgeIndex) -> Vec<Edge> {
        self.edges
            .positions()
            .filter_map(|p| index.get(p))
            .collect()
    }
}
