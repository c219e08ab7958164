/*
cli_options.rs

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

//! Process command-line options.
//!
//! Onestroke runs the game engine without a display. The options let developers inspect the
//! levels, and let a renderer (or a test harness) play the game from a script of pointer events.
//!
//! # Examples
//!
//! List the levels and whether they are unlocked:
//!
//! ```text
//! $ onestroke --ls
//!  1 Level 1     3 nodes   3 edges  unlocked
//!  2 Level 2     4 nodes   4 edges  locked
//! ...
//! ```
//!
//! Print a stroke that solves the fifth level:
//!
//! ```text
//! $ onestroke --solve 5
//! 0 1 4 2 0 3 4
//! ```
//!
//! Play from a script and print the state after each command:
//!
//! ```text
//! $ printf 'start\nselect 1\ndown-node 0\n' | onestroke --play
//! ```

use clap::{CommandFactory, Parser};
use log::{LevelFilter, debug, warn};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::catalog::level::{Level, Viewport};
use crate::catalog::levels::LEVELS;
use crate::catalog::solver::{Solver, SolverError};
use crate::config::{self, COPYRIGHT_NOTICE, Settings};
use crate::progress::{ProgressState, ProgressStore};
use crate::saver::progress::SaverProgress;
use crate::script;
use crate::session::Session;

/// Play and inspect the Onestroke levels.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// List the levels
    #[arg(short, long, default_value_t = false, group = "action")]
    ls: bool,

    /// Verify that every level can be solved with a single stroke
    #[arg(short, long, default_value_t = false, group = "action")]
    check: bool,

    /// Print a stroke that solves the given level (starting at 1)
    #[arg(short, long, group = "action", value_name = "LEVEL")]
    solve: Option<usize>,

    /// Print the saved progress
    #[arg(long, default_value_t = false, group = "action")]
    progress: bool,

    /// Remove the saved progress
    #[arg(long, default_value_t = false, group = "action")]
    reset_progress: bool,

    /// Play from a script of events and print the state after each event
    #[arg(short, long, default_value_t = false, group = "action")]
    play: bool,

    /// Script to play (standard input by default)
    #[arg(long, requires = "play", value_name = "FILE")]
    script: Option<PathBuf>,

    /// Directory for the progress and settings files
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Width of the viewport
    #[arg(long)]
    width: Option<f64>,

    /// Height of the viewport
    #[arg(long)]
    height: Option<f64>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options. Return the exit status.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    match run(&args) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

fn run(args: &Args) -> Result<u8, Box<dyn Error>> {
    let data_dir: Option<PathBuf> = args.data_dir.clone().or_else(config::data_dir);
    debug!("Data directory: {data_dir:?}");

    let mut settings: Settings = match &data_dir {
        Some(dir) => Settings::load(dir),
        None => Settings::default(),
    };
    if let Some(w) = args.width {
        settings.width = w;
    }
    if let Some(h) = args.height {
        settings.height = h;
    }
    if !settings.has_valid_size() {
        return Err("the viewport size must be positive".into());
    }
    let viewport: Viewport = settings.viewport();

    let store = || -> ProgressStore {
        match &data_dir {
            Some(dir) => ProgressStore::new(Box::new(SaverProgress::new(dir.clone()))),
            None => {
                warn!("No data directory (set HOME or use --data-dir): progress is not saved");
                ProgressStore::disabled()
            }
        }
    };

    if args.check {
        return Ok(check(&viewport));
    }

    let catalog: Catalog = Catalog::load(&viewport)?;

    if args.ls {
        let progress: ProgressState = store().load(catalog.len());
        list(&catalog, &progress);
        return Ok(0);
    }

    if let Some(n) = args.solve {
        let level: &Level = match n.checked_sub(1).and_then(|i| catalog.get(i)) {
            Some(l) => l,
            None => {
                eprintln!(
                    "Unknown level {n}. The levels are numbered from 1 to {}.",
                    catalog.len()
                );
                return Ok(1);
            }
        };
        return match Solver::new(level).solve(None) {
            Ok(stroke) => {
                let nodes: Vec<String> = stroke.iter().map(|n| n.to_string()).collect();
                println!("{}", nodes.join(" "));
                Ok(0)
            }
            Err(e) => {
                eprintln!("{}: {}", level.name, solver_error(&e));
                Ok(1)
            }
        };
    }

    if args.progress {
        let mut progress_store: ProgressStore = store();
        let progress: ProgressState = progress_store.load(catalog.len());
        if !progress_store.is_enabled() {
            println!("Progress is not saved");
        }
        println!("Current level: {}", progress.current_level + 1);
        println!("Unlocked levels: 1 to {}", progress.max_unlocked_level + 1);
        return Ok(0);
    }

    if args.reset_progress {
        store().reset()?;
        println!("Progress removed");
        return Ok(0);
    }

    if args.play {
        let mut session: Session = Session::new(catalog, &settings, store())?;
        let input: Box<dyn BufRead> = match &args.script {
            Some(path) => Box::new(BufReader::new(File::open(path)?)),
            None => Box::new(io::stdin().lock()),
        };
        let mut output = io::stdout().lock();
        script::play(&mut session, input, &mut output)?;
        return Ok(0);
    }

    Args::command().print_help()?;
    Ok(0)
}

/// Print the levels with their size and lock state.
fn list(catalog: &Catalog, progress: &ProgressState) {
    for (i, level) in catalog.iter().enumerate() {
        println!("{}", level_line(i, level, progress.is_unlocked(i)));
    }
}

/// Line of the level list for the level at the given index.
fn level_line(index: usize, level: &Level, unlocked: bool) -> String {
    let state: &str = if unlocked { "unlocked" } else { "locked" };
    format!(
        "{:2} {:10} {:2} nodes {:3} edges  {state}",
        index + 1,
        level.name,
        level.nodes.len(),
        level.num_edges()
    )
}

/// Verify each level and print the defects. Return the exit status.
fn check(viewport: &Viewport) -> u8 {
    let mut defects: usize = 0;
    for spec in LEVELS {
        if let Err(e) = Level::from_spec(spec, viewport) {
            println!("{e}");
            defects += 1;
        }
    }
    if defects > 0 {
        println!("{defects} defective levels out of {}", LEVELS.len());
        return 1;
    }
    println!("{} levels verified", LEVELS.len());
    0
}

fn solver_error(error: &SolverError) -> String {
    match error {
        SolverError::NotConnected => String::from("some edges are not connected to the others"),
        SolverError::TooManyOddNodes(n) => {
            format!("{n} nodes have an odd number of edges (0 or 2 expected)")
        }
        SolverError::InvalidStart(n) => format!("a stroke cannot start on node {n}"),
    }
}
