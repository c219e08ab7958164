/*
script.rs

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

//! Play a level from a script of events.
//!
//! Each line of the script is a command. Empty lines and lines starting with `#` are ignored.
//! After each command, the state is printed as a single line of JSON.
//!
//! | Command         | Effect                                               |
//! |-----------------|------------------------------------------------------|
//! | `down X Y`      | Press the pointer at the given position              |
//! | `move X Y`      | Move the pointer                                     |
//! | `up`            | Release the pointer                                  |
//! | `down-node N`   | Press the pointer on node `N` of the current level   |
//! | `move-node N`   | Move the pointer to node `N` of the current level    |
//! | `start`         | Leave the home screen                                |
//! | `home`          | Home button                                          |
//! | `select N`      | Play level `N` (starting at 1)                       |
//! | `undo`          | Undo button                                          |
//! | `retry`         | Retry button                                         |
//! | `next`          | Go to the next level                                 |
//! | `page next`     | Next page of the level selection screen              |
//! | `page prev`     | Previous page of the level selection screen          |
//! | `wait MS`       | Move the clock forward by `MS` milliseconds          |
//!
//! # Examples
//!
//! Solve the first level:
//!
//! ```text
//! start
//! select 1
//! down-node 0
//! move-node 1
//! move-node 2
//! move-node 0
//! up
//! wait 1000
//! ```

use log::debug;
use std::error::Error;
use std::io::{BufRead, Write};
use std::str::{FromStr, SplitWhitespace};
use std::time::Duration;

use crate::catalog::level::Point;
use crate::game::{Event, Snapshot};
use crate::session::Session;

/// Command of a script.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Send(Event),
    DownNode(usize),
    MoveNode(usize),
    Wait(Duration),
}

fn next_number<T: FromStr>(words: &mut SplitWhitespace, name: &str) -> Result<T, String> {
    let word: &str = words
        .next()
        .ok_or_else(|| format!("{name}: missing argument"))?;
    word.parse::<T>()
        .map_err(|_| format!("{name}: invalid argument {word}"))
}

fn next_point(words: &mut SplitWhitespace, name: &str) -> Result<Point, String> {
    let x: f64 = next_number(words, name)?;
    let y: f64 = next_number(words, name)?;
    Ok(Point::new(x, y))
}

/// Parse a line of the script. Return `None` for empty lines and comments.
///
/// # Errors
///
/// The function returns an error for unknown commands and invalid arguments.
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let line: &str = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut words: SplitWhitespace = line.split_whitespace();
    let name: &str = match words.next() {
        Some(n) => n,
        None => return Ok(None),
    };
    let command: Command = match name {
        "down" => Command::Send(Event::PointerDown(next_point(&mut words, name)?)),
        "move" => Command::Send(Event::PointerMove(next_point(&mut words, name)?)),
        "up" => Command::Send(Event::PointerUp),
        "down-node" => Command::DownNode(next_number(&mut words, name)?),
        "move-node" => Command::MoveNode(next_number(&mut words, name)?),
        "start" => Command::Send(Event::Start),
        "home" => Command::Send(Event::Home),
        "select" => {
            let n: usize = next_number(&mut words, name)?;
            if n == 0 {
                return Err(String::from("select: levels start at 1"));
            }
            Command::Send(Event::SelectLevel(n - 1))
        }
        "undo" => Command::Send(Event::Undo),
        "retry" => Command::Send(Event::Retry),
        "next" => Command::Send(Event::NextLevel),
        "page" => match words.next() {
            Some("next") => Command::Send(Event::NextPage),
            Some("prev") => Command::Send(Event::PrevPage),
            _ => return Err(String::from("page: expecting next or prev")),
        },
        "wait" => Command::Wait(Duration::from_millis(next_number(&mut words, name)?)),
        _ => return Err(format!("unknown command {name}")),
    };
    if let Some(extra) = words.next() {
        return Err(format!("{name}: unexpected argument {extra}"));
    }
    Ok(Some(command))
}

/// Execute a command.
///
/// # Errors
///
/// The function returns an error when the node does not exist in the current level.
pub fn execute(session: &mut Session, command: Command) -> Result<(), String> {
    match command {
        Command::Send(event) => session.dispatch(event),
        Command::DownNode(node) | Command::MoveNode(node) => {
            let position: Point = session
                .game()
                .level()
                .position(node)
                .ok_or_else(|| format!("node {node} does not exist in the current level"))?;
            let event: Event = if matches!(command, Command::DownNode(_)) {
                Event::PointerDown(position)
            } else {
                Event::PointerMove(position)
            };
            session.dispatch(event);
        }
        Command::Wait(duration) => session.advance(duration),
    }
    Ok(())
}

/// Run the script read from `input` and write a snapshot per command to `output`.
///
/// # Errors
///
/// The function stops at the first invalid line, and on I/O errors.
pub fn play<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    for (i, line) in input.lines().enumerate() {
        let line: String = line?;
        let parsed: Option<Command> =
            parse_line(&line).map_err(|e| format!("line {}: {e}", i + 1))?;
        let command: Command = match parsed {
            Some(c) => c,
            None => continue,
        };
        debug!("Command: {command:?}");
        execute(session, command).map_err(|e| format!("line {}: {e}", i + 1))?;
        let snapshot: Snapshot = session.snapshot();
        serde_json::to_writer(&mut *output, &snapshot)?;
        writeln!(output)?;
    }
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::Settings;
    use crate::game::{Screen, Status};
    use crate::progress::{MemoryStore, ProgressStore};

    fn session() -> Session {
        let settings = Settings::default();
        let catalog = Catalog::load(&settings.viewport()).unwrap();
        Session::new(
            catalog,
            &settings,
            ProgressStore::new(Box::new(MemoryStore::new())),
        )
        .unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_line("  # comment").unwrap(), None);
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(
            parse_line("down 10 20.5").unwrap(),
            Some(Command::Send(Event::PointerDown(Point::new(10.0, 20.5))))
        );
        assert_eq!(
            parse_line("select 3").unwrap(),
            Some(Command::Send(Event::SelectLevel(2)))
        );
        assert_eq!(
            parse_line("page prev").unwrap(),
            Some(Command::Send(Event::PrevPage))
        );
        assert_eq!(
            parse_line("wait 250").unwrap(),
            Some(Command::Wait(Duration::from_millis(250)))
        );
        assert!(parse_line("select 0").is_err());
        assert!(parse_line("move 10").is_err());
        assert!(parse_line("up now").is_err());
        assert!(parse_line("jump").is_err());
    }

    #[test]
    fn play_first_level() {
        let script = "start\nselect 1\n# triangle\ndown-node 0\nmove-node 1\nmove-node 2\n\
                      move-node 0\nup\nwait 1000\n";
        let mut session = session();
        let mut output: Vec<u8> = Vec::new();
        play(&mut session, script.as_bytes(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines[1].contains(r#""screen":{"name":"playing"}"#));
        assert!(lines[5].contains(r#""status":"won""#));
        assert!(lines[5].contains(r#""maxUnlockedLevel":0"#));
        assert!(lines[7].contains(r#""maxUnlockedLevel":1"#));
        assert_eq!(session.game().status(), Status::Won);
    }

    #[test]
    fn invalid_line_is_reported() {
        let mut session = session();
        let mut output: Vec<u8> = Vec::new();
        let err = play(&mut session, "start\nfly 3\n".as_bytes(), &mut output).unwrap_err();
        assert_eq!(err.to_string(), "line 2: unknown command fly");
        assert_eq!(session.game().screen(), Screen::LevelSelect { page: 0 });
    }

    #[test]
    fn unknown_node_is_reported() {
        let mut session = session();
        assert!(execute(&mut session, Command::DownNode(40)).is_err());
    }
}
