/*
edges.rs

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

//! Undirected edges of a level graph.
//!
//! [`Edge`] is the canonical form of an undirected edge: the smaller node identifier always comes
//! first, so that traversal direction never matters when comparing edges.
//! [`EdgeIndex`] stores the target edges of a level and assigns each of them a bit position, which
//! [`EdgeSet`] uses to record the edges already traced.

use log::debug;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Canonical undirected edge.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    /// Smaller node identifier.
    a: usize,

    /// Larger node identifier.
    b: usize,
}

impl Edge {
    /// Create the canonical edge between the two given nodes.
    pub fn new(node1: usize, node2: usize) -> Self {
        if node1 <= node2 {
            Self { a: node1, b: node2 }
        } else {
            Self { a: node2, b: node1 }
        }
    }

    /// Return the endpoint with the smaller identifier.
    pub fn a(&self) -> usize {
        self.a
    }

    /// Return the endpoint with the larger identifier.
    pub fn b(&self) -> usize {
        self.b
    }

    /// Whether the edge is a loop on a single node.
    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }

    /// Return the opposite endpoint, or None if the node is not an endpoint of the edge.
    pub fn other(&self, node: usize) -> Option<usize> {
        if node == self.a {
            Some(self.b)
        } else if node == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

/// Target edges of a level, each one associated with a bit position.
#[derive(Debug, Clone, Default)]
pub struct EdgeIndex {
    /// Edges in declaration order. The position in the vector is the bit position.
    edges: Vec<Edge>,

    /// Reverse lookup from an edge to its bit position.
    positions: HashMap<Edge, usize>,

    /// Number of nodes in the graph.
    num_nodes: usize,
}

impl EdgeIndex {
    /// Build the index from the node pairs of a level.
    ///
    /// # Errors
    ///
    /// The method returns an error when a pair references a node that does not exist, when a pair
    /// is a loop, or when the same undirected edge is declared twice.
    pub fn new(num_nodes: usize, pairs: &[(usize, usize)]) -> Result<Self, String> {
        let mut edges: Vec<Edge> = Vec::with_capacity(pairs.len());
        let mut positions: HashMap<Edge, usize> = HashMap::with_capacity(pairs.len());

        for (node1, node2) in pairs {
            if *node1 >= num_nodes || *node2 >= num_nodes {
                return Err(format!(
                    "Edge {node1}-{node2} references a node outside of 0..{num_nodes}"
                ));
            }
            let edge: Edge = Edge::new(*node1, *node2);
            if edge.is_loop() {
                return Err(format!("Edge {edge} is a loop"));
            }
            if positions.contains_key(&edge) {
                return Err(format!("Edge {edge} is declared twice"));
            }
            positions.insert(edge, edges.len());
            edges.push(edge);
        }
        debug!("Edge index: {} nodes, {} edges", num_nodes, edges.len());
        Ok(Self {
            edges,
            positions,
            num_nodes,
        })
    }

    /// Number of target edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the level has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of nodes in the graph.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Return the bit position of the given edge, or None if the edge is not a target edge.
    pub fn position(&self, edge: Edge) -> Option<usize> {
        self.positions.get(&edge).copied()
    }

    /// Return the edge at the given bit position.
    pub fn get(&self, position: usize) -> Option<Edge> {
        self.edges.get(position).copied()
    }

    /// Iterate over the edges in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Return the nodes adjacent to the given node, in edge declaration order.
    pub fn neighbours(&self, node: usize) -> Vec<usize> {
        self.edges.iter().filter_map(|e| e.other(node)).collect()
    }

    /// Number of edges touching the given node.
    pub fn degree(&self, node: usize) -> usize {
        self.edges.iter().filter(|e| e.other(node).is_some()).count()
    }
}

/// Fixed-size set of edges, stored as a bitset over the positions of an [`EdgeIndex`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeSet {
    /// Bit words. Bit `i` is set when the edge at position `i` is in the set.
    words: Vec<u64>,

    /// Number of bits set.
    count: usize,
}

impl EdgeSet {
    /// Create an empty set able to hold `capacity` edge positions.
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(64)],
            count: 0,
        }
    }

    /// Remove all the edges from the set.
    pub fn clear(&mut self) {
        self.words.iter_mut().for_each(|w| *w = 0);
        self.count = 0;
    }

    /// Add the edge at the given position. Return `false` if it was already in the set.
    pub fn insert(&mut self, position: usize) -> bool {
        let (word, mask) = Self::locate(position);
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        if self.words[word] & mask != 0 {
            return false;
        }
        self.words[word] |= mask;
        self.count += 1;
        true
    }

    /// Remove the edge at the given position. Return `false` if it was not in the set.
    pub fn remove(&mut self, position: usize) -> bool {
        let (word, mask) = Self::locate(position);
        match self.words.get_mut(word) {
            Some(w) if *w & mask != 0 => {
                *w &= !mask;
                self.count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Whether the edge at the given position is in the set.
    pub fn contains(&self, position: usize) -> bool {
        let (word, mask) = Self::locate(position);
        self.words.get(word).is_some_and(|w| w & mask != 0)
    }

    /// Number of edges in the set.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the set is empty.
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterate over the positions in the set, in increasing order.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(i, w)| {
            (0..64)
                .filter(move |bit| w & (1u64 << bit) != 0)
                .map(move |bit| i * 64 + bit)
        })
    }

    fn locate(position: usize) -> (usize, u64) {
        (position / 64, 1u64 << (position % 64))
    }
}
