/*
solver.rs

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

//! Find a stroke that covers every edge of a level exactly once.
//!
//! The solver uses Hierholzer's algorithm. The order in which the neighbours are explored is
//! shuffled so that two runs usually produce different strokes.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use super::level::Level;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum SolverError {
    /// Some edges cannot be reached from the others.
    NotConnected,

    /// More than two nodes have an odd number of edges.
    TooManyOddNodes(usize),

    /// The requested starting node cannot start a stroke that covers all the edges.
    InvalidStart(usize),
}

/// [`Solver`] object.
pub struct Solver<'a> {
    /// Level to solve.
    level: &'a Level,
}

impl<'a> Solver<'a> {
    /// Create the object.
    pub fn new(level: &'a Level) -> Self {
        Self { level }
    }

    /// Return the nodes from which a complete stroke can start.
    ///
    /// # Errors
    ///
    /// The method returns an error when the level does not admit an Eulerian path.
    pub fn starting_nodes(&self) -> Result<Vec<usize>, SolverError> {
        if !self.level.is_connected() {
            return Err(SolverError::NotConnected);
        }
        let odd: Vec<usize> = self.level.odd_nodes();
        match odd.len() {
            0 => Ok(self.level.nodes.iter().map(|n| n.id).collect()),
            2 => Ok(odd),
            n => Err(SolverError::TooManyOddNodes(n)),
        }
    }

    /// Return a stroke as the ordered list of the visited nodes.
    ///
    /// If `starting_node` is not provided, then a random eligible node is used.
    ///
    /// # Errors
    ///
    /// The method returns an error when the level does not admit an Eulerian path, or when the
    /// provided starting node is not eligible.
    pub fn solve(&self, starting_node: Option<usize>) -> Result<Vec<usize>, SolverError> {
        let candidates: Vec<usize> = self.starting_nodes()?;
        let start: usize = match starting_node {
            Some(s) => {
                if !candidates.contains(&s) {
                    return Err(SolverError::InvalidStart(s));
                }
                s
            }
            None => candidates[rand::rng().random_range(0..candidates.len())],
        };
        debug!("Solving {} from node {start}", self.level.name);

        // Adjacency lists with the edge position, shuffled once
        let mut adjacent: Vec<Vec<(usize, usize)>> = vec![Vec::new(); self.level.nodes.len()];
        for (position, edge) in self.level.edges.iter().enumerate() {
            adjacent[edge.a()].push((edge.b(), position));
            adjacent[edge.b()].push((edge.a(), position));
        }
        let mut rng = rand::rng();
        for a in adjacent.iter_mut() {
            a.shuffle(&mut rng);
        }

        let mut used: Vec<bool> = vec![false; self.level.num_edges()];
        let mut stack: Vec<usize> = vec![start];
        let mut stroke: Vec<usize> = Vec::with_capacity(self.level.num_edges() + 1);

        while let Some(&node) = stack.last() {
            // Drop the edges already used from the end of the list
            while let Some(&(_, position)) = adjacent[node].last() {
                if used[position] {
                    adjacent[node].pop();
                } else {
                    break;
                }
            }
            match adjacent[node].pop() {
                Some((next, position)) => {
                    used[position] = true;
                    stack.push(next);
                }
                None => {
                    stroke.push(node);
                    stack.pop();
                }
            }
        }
        stroke.reverse();
        debug!("Stroke: {stroke:?}");
        Ok(stroke)
    }
}
