/*
levels.rs

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

//! Hand-authored levels, in play order.
//!
//! Node positions are given as `(dx, fy)`: `dx` is the horizontal offset from the middle of the
//! viewport (scaled on narrow viewports) and `fy` is the vertical position as a fraction of the
//! viewport height. See [`super::level::Level::from_spec`].

use super::level::LevelSpec;

/// For developers: append new levels at the end of the list so that saved progress stays valid.
pub const LEVELS: &[LevelSpec] = &[
    LevelSpec {
        name: "Level 1",
        nodes: &[
            (0.0, 0.25),
            (-130.0, 0.75),
            (130.0, 0.75),
        ],
        edges: &[
            (0, 1), (1, 2), (2, 0),
        ],
    },
    LevelSpec {
        name: "Level 2",
        nodes: &[
            (-140.0, 0.3),
            (140.0, 0.3),
            (-140.0, 0.7),
            (140.0, 0.7),
        ],
        edges: &[
            (0, 1), (1, 3), (3, 2), (2, 0),
        ],
    },
    LevelSpec {
        name: "Level 3",
        nodes: &[
            (0.0, 0.25),
            (-140.0, 0.55),
            (140.0, 0.55),
            (0.0, 0.75),
        ],
        edges: &[
            (0, 1), (0, 2), (1, 3), (2, 3),
        ],
    },
    LevelSpec {
        name: "Level 4",
        nodes: &[
            (0.0, 0.2),
            (-150.0, 0.4),
            (150.0, 0.4),
            (-150.0, 0.75),
            (150.0, 0.75),
        ],
        edges: &[
            (0, 1), (0, 2), (1, 2), (1, 3), (2, 4), (3, 4),
        ],
    },
    LevelSpec {
        name: "Level 5",
        nodes: &[
            (0.0, 0.2),
            (-160.0, 0.55),
            (0.0, 0.55),
            (160.0, 0.55),
            (0.0, 0.8),
        ],
        edges: &[
            (0, 1), (0, 2), (0, 3), (1, 4), (2, 4), (3, 4),
        ],
    },
    LevelSpec {
        name: "Level 6",
        nodes: &[
            (0.0, 0.15),
            (-160.0, 0.4),
            (160.0, 0.4),
            (-160.0, 0.8),
            (160.0, 0.8),
            (0.0, 0.6),
        ],
        edges: &[
            (0, 1), (0, 2), (1, 3), (2, 4), (3, 5), (4, 5), (1, 5), (2, 5),
        ],
    },
    LevelSpec {
        name: "Level 7",
        nodes: &[
            (-150.0, 0.3),
            (150.0, 0.3),
            (0.0, 0.55),
            (-150.0, 0.7),
            (150.0, 0.7),
        ],
        edges: &[
            (0, 1), (0, 2), (1, 2), (2, 3), (2, 4),
        ],
    },
    LevelSpec {
        name: "Level 8",
        nodes: &[
            (0.0, 0.2),
            (-160.0, 0.55),
            (160.0, 0.55),
            (0.0, 0.8),
        ],
        edges: &[
            (0, 1), (0, 2), (1, 3), (2, 3), (1, 2),
        ],
    },
    LevelSpec {
        name: "Level 9",
        nodes: &[
            (-130.0, 0.25),
            (130.0, 0.25),
            (-130.0, 0.65),
            (130.0, 0.65),
            (0.0, 0.75),
        ],
        edges: &[
            (0, 1), (0, 2), (1, 3), (2, 4), (3, 4),
        ],
    },
    LevelSpec {
        name: "Level 10",
        nodes: &[
            (-160.0, 0.25),
            (160.0, 0.25),
            (0.0, 0.55),
            (-160.0, 0.75),
            (160.0, 0.75),
        ],
        edges: &[
            (0, 1), (0, 2), (1, 2), (2, 3), (2, 4), (3, 4),
        ],
    },
    LevelSpec {
        name: "Level 11",
        nodes: &[
            (0.0, 0.2),
            (-150.0, 0.4),
            (150.0, 0.4),
            (-190.0, 0.7),
            (190.0, 0.7),
            (0.0, 0.9),
        ],
        edges: &[
            (0, 1), (0, 2), (1, 2), (1, 3), (2, 4), (3, 4), (0, 5), (1, 5), (2, 5),
        ],
    },
    LevelSpec {
        name: "Level 12",
        nodes: &[
            (-180.0, 0.25),
            (-180.0, 0.55),
            (-180.0, 0.75),
            (0.0, 0.25),
            (0.0, 0.55),
            (0.0, 0.75),
            (180.0, 0.25),
            (180.0, 0.75),
        ],
        edges: &[
            (0, 1), (1, 2), (3, 4), (4, 5), (0, 3), (1, 4), (2, 5), (6, 7), (4, 6), (4, 7),
        ],
    },
    LevelSpec {
        name: "Level 13",
        nodes: &[
            (-170.0, 0.45),
            (-170.0, 0.75),
            (-70.0, 0.25),
            (150.0, 0.25),
            (10.0, 0.45),
            (10.0, 0.75),
            (150.0, 0.6),
        ],
        edges: &[
            (0, 1), (2, 3), (0, 2), (0, 4), (4, 5), (1, 5), (0, 5), (3, 6), (6, 5), (4, 3),
        ],
    },
    LevelSpec {
        name: "Level 14",
        nodes: &[
            (0.0, 0.2),
            (-170.0, 0.4),
            (-170.0, 0.65),
            (-170.0, 0.8),
            (170.0, 0.4),
            (170.0, 0.65),
            (170.0, 0.8),
        ],
        edges: &[
            (0, 1), (0, 4), (1, 2), (2, 3), (4, 5), (5, 6), (1, 4), (2, 5), (3, 6), (1, 5),
        ],
    },
    LevelSpec {
        name: "Level 15",
        nodes: &[
            (0.0, 0.12),
            (-130.0, 0.22),
            (130.0, 0.22),
            (-130.0, 0.44),
            (130.0, 0.44),
            (-130.0, 0.66),
            (130.0, 0.66),
            (0.0, 0.82),
        ],
        edges: &[
            (0, 1), (0, 2), (1, 3), (2, 4), (1, 4), (3, 4), (3, 5), (4, 6), (3, 6), (5, 6),
            (5, 7), (6, 7),
        ],
    },
    LevelSpec {
        name: "Level 16",
        nodes: &[
            (-150.0, 0.25),
            (150.0, 0.25),
            (0.0, 0.38),
            (-60.0, 0.48),
            (60.0, 0.48),
            (0.0, 0.62),
            (-130.0, 0.8),
            (130.0, 0.8),
            (0.0, 0.88),
        ],
        edges: &[
            (0, 6), (1, 7), (6, 8), (7, 8), (0, 2), (1, 2), (2, 3), (2, 4), (3, 5), (4, 5),
            (5, 8),
        ],
    },
    LevelSpec {
        name: "Level 17",
        nodes: &[
            (-80.0, 0.22),
            (80.0, 0.22),
            (160.0, 0.38),
            (160.0, 0.55),
            (80.0, 0.72),
            (-80.0, 0.72),
            (-160.0, 0.55),
            (-160.0, 0.38),
        ],
        edges: &[
            (0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 7), (7, 0), (5, 1), (5, 2),
        ],
    },
    LevelSpec {
        name: "Level 18",
        nodes: &[
            (0.0, 0.25),
            (-130.0, 0.45),
            (130.0, 0.45),
            (-130.0, 0.65),
            (130.0, 0.65),
            (0.0, 0.85),
            (0.0, 0.55),
        ],
        edges: &[
            (0, 1), (0, 2), (1, 3), (2, 4), (3, 5), (4, 5), (1, 2), (3, 4), (0, 6), (5, 6),
            (1, 6), (2, 6), (3, 6), (4, 6),
        ],
    },
    LevelSpec {
        name: "Level 19",
        nodes: &[
            (-100.0, 0.25),
            (100.0, 0.25),
            (-150.0, 0.5),
            (0.0, 0.5),
            (150.0, 0.5),
            (-100.0, 0.75),
            (100.0, 0.75),
        ],
        edges: &[
            (0, 1), (0, 2), (0, 3), (1, 3), (1, 4), (2, 5), (3, 5), (3, 6), (4, 6), (5, 6),
            (2, 3), (3, 4), (0, 4), (1, 2),
        ],
    },
    LevelSpec {
        name: "Level 20",
        nodes: &[
            (-160.0, 0.25),
            (160.0, 0.25),
            (0.0, 0.33),
            (-60.0, 0.45),
            (60.0, 0.45),
            (0.0, 0.55),
            (-160.0, 0.65),
            (160.0, 0.65),
            (0.0, 0.8),
        ],
        edges: &[
            (0, 2), (1, 2), (0, 6), (1, 7), (2, 3), (2, 4), (3, 5), (4, 5), (5, 6), (5, 7),
            (3, 8), (4, 8),
        ],
    },
    LevelSpec {
        name: "Level 21",
        nodes: &[
            (-120.0, 0.25),
            (120.0, 0.25),
            (0.0, 0.15),
            (-120.0, 0.7),
            (120.0, 0.7),
            (0.0, 0.85),
            (0.0, 0.47),
        ],
        edges: &[
            (2, 0), (2, 1), (0, 1), (0, 3), (1, 4), (3, 4), (3, 5), (4, 5), (2, 6), (5, 6),
            (0, 6), (1, 6), (3, 6), (4, 6),
        ],
    },
    LevelSpec {
        name: "Level 22",
        nodes: &[
            (-160.0, 0.3),
            (160.0, 0.3),
            (-60.0, 0.45),
            (60.0, 0.45),
            (-160.0, 0.8),
            (160.0, 0.8),
        ],
        edges: &[
            (0, 1), (0, 2), (1, 3), (2, 3), (2, 4), (3, 5), (4, 5), (0, 4), (1, 5), (2, 5),
            (3, 4),
        ],
    },
    LevelSpec {
        name: "Level 23",
        nodes: &[
            (-100.0, 0.25),
            (100.0, 0.25),
            (0.0, 0.38),
            (-160.0, 0.45),
            (160.0, 0.45),
            (0.0, 0.58),
            (-140.0, 0.72),
            (140.0, 0.72),
            (0.0, 0.82),
        ],
        edges: &[
            (0, 2), (1, 2), (0, 3), (1, 4), (2, 6), (2, 7), (3, 5), (4, 5), (5, 6), (5, 7),
            (6, 8), (7, 8), (6, 7),
        ],
    },
    LevelSpec {
        name: "Level 24",
        nodes: &[
            (-150.0, 0.25),
            (0.0, 0.25),
            (150.0, 0.25),
            (-100.0, 0.48),
            (0.0, 0.42),
            (100.0, 0.48),
            (-100.0, 0.78),
            (0.0, 0.7),
            (100.0, 0.78),
        ],
        edges: &[
            (0, 3), (0, 4), (1, 3), (1, 5), (2, 4), (2, 5), (3, 4), (4, 5), (3, 6), (5, 8),
            (6, 7), (7, 8),
        ],
    },
    LevelSpec {
        name: "Level 25",
        nodes: &[
            (-150.0, 0.18),
            (150.0, 0.18),
            (-230.0, 0.4),
            (230.0, 0.4),
            (0.0, 0.48),
            (0.0, 0.75),
            (0.0, 0.95),
        ],
        edges: &[
            (0, 2), (1, 3), (0, 4), (1, 4), (4, 2), (4, 3), (2, 6), (3, 6), (2, 5), (3, 5),
            (5, 6),
        ],
    },
    LevelSpec {
        name: "Level 26",
        nodes: &[
            (0.0, 0.22),
            (-130.0, 0.38),
            (130.0, 0.38),
            (0.0, 0.48),
            (-140.0, 0.62),
            (140.0, 0.62),
            (-100.0, 0.82),
            (100.0, 0.82),
        ],
        edges: &[
            (0, 1), (0, 2), (1, 2), (1, 3), (2, 3), (3, 4), (3, 5), (4, 5), (4, 6), (5, 7),
            (6, 7), (1, 4), (2, 5),
        ],
    },
    LevelSpec {
        name: "Level 27",
        nodes: &[
            (0.0, 0.28),
            (-180.0, 0.25),
            (180.0, 0.25),
            (-100.0, 0.45),
            (100.0, 0.45),
            (-160.0, 0.65),
            (160.0, 0.65),
            (-60.0, 0.85),
            (60.0, 0.85),
        ],
        edges: &[
            (0, 3), (0, 4), (1, 3), (2, 4), (3, 5), (4, 6), (5, 7), (6, 8), (7, 8), (3, 4),
            (5, 6), (1, 5), (2, 6), (0, 7), (0, 8),
        ],
    },
    LevelSpec {
        name: "Level 28",
        nodes: &[
            (0.0, 0.2),
            (-100.0, 0.35),
            (100.0, 0.35),
            (-180.0, 0.55),
            (0.0, 0.55),
            (180.0, 0.55),
            (-100.0, 0.75),
            (100.0, 0.75),
            (0.0, 0.9),
        ],
        edges: &[
            (0, 1), (0, 2), (1, 3), (1, 4), (2, 4), (2, 5), (3, 6), (4, 6), (4, 7), (5, 7),
            (6, 8), (7, 8), (3, 4), (5, 4), (1, 2), (6, 7),
        ],
    },
    LevelSpec {
        name: "Level 29",
        nodes: &[
            (0.0, 0.15),
            (-180.0, 0.35),
            (180.0, 0.35),
            (-180.0, 0.65),
            (180.0, 0.65),
            (0.0, 0.85),
            (-90.0, 0.4),
            (90.0, 0.4),
            (-90.0, 0.6),
            (90.0, 0.6),
        ],
        edges: &[
            (0, 1), (0, 2), (1, 3), (2, 4), (3, 5), (4, 5), (0, 6), (0, 7), (1, 6), (1, 8),
            (2, 7), (2, 9), (3, 8), (3, 6), (4, 9), (4, 7), (5, 8), (5, 9), (6, 8), (7, 9),
        ],
    },
    LevelSpec {
        name: "Level 30",
        nodes: &[
            (-150.0, 0.18),
            (0.0, 0.3),
            (150.0, 0.18),
            (-220.0, 0.5),
            (0.0, 0.5),
            (220.0, 0.5),
            (-150.0, 0.82),
            (0.0, 0.7),
            (150.0, 0.82),
        ],
        edges: &[
            (0, 1), (1, 2), (2, 5), (5, 8), (8, 7), (7, 6), (6, 3), (3, 0), (0, 2), (6, 8),
            (0, 4), (2, 4), (6, 4), (8, 4), (1, 3), (3, 7), (7, 5), (5, 1),
        ],
    },
];
