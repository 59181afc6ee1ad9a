//! Line-oriented stdio front-end.
//!
//! Reads one command per line, drives a `GameSession`, and ticks the session
//! between commands so scheduled AI moves fire on time. Output lines start
//! with a keyword so scripts can parse them; failures are reported as
//! `info string <command> error: ...` and never stop the loop.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc::{channel, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::engines::agent_random::RandomAgent;
use crate::records::json_match_log::JsonLinesMatchLog;
use crate::records::match_records::{HistoryReader, MatchRecorder};
use crate::records::memory_match_log::InMemoryMatchLog;
use crate::session::game_session::{ClickOutcome, GameSession, TurnOutcome};
use crate::session::session_config::SessionConfig;
use crate::utils::render_board::render_board;
use crate::utils::square_notation::parse_square;

const TICK_INTERVAL: Duration = Duration::from_millis(10);
const HISTORY_LIMIT: usize = 10;

pub fn run_stdio_loop(config: SessionConfig, history_file: Option<PathBuf>) -> io::Result<()> {
    let (line_tx, line_rx) = channel::<String>();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut stdout = io::stdout();
    let mut protocol = ProtocolState::new(config, history_file);
    writeln!(stdout, "ready mode {}", protocol.session.state().mode)?;
    stdout.flush()?;

    loop {
        match line_rx.recv_timeout(TICK_INTERVAL) {
            Ok(line) => {
                if protocol.handle_command(&line, &mut stdout)? {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
        protocol.tick(&mut stdout)?;
        stdout.flush()?;
    }

    Ok(())
}

pub struct ProtocolState {
    session: GameSession,
    history: Box<dyn HistoryReader>,
}

impl ProtocolState {
    pub fn new(config: SessionConfig, history_file: Option<PathBuf>) -> Self {
        let (recorder, history): (Box<dyn MatchRecorder>, Box<dyn HistoryReader>) =
            match history_file {
                Some(path) => {
                    let log = JsonLinesMatchLog::new(path);
                    let recorder: Box<dyn MatchRecorder> = Box::new(log.clone());
                    let reader: Box<dyn HistoryReader> = Box::new(log);
                    (recorder, reader)
                }
                None => {
                    let log = InMemoryMatchLog::new();
                    let recorder: Box<dyn MatchRecorder> = Box::new(log.clone());
                    let reader: Box<dyn HistoryReader> = Box::new(log);
                    (recorder, reader)
                }
            };
        let agent = Box::new(RandomAgent::from_seed(config.seed));
        Self {
            session: GameSession::with_parts(config, agent, recorder),
            history,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Fires a due AI move and reports it.
    pub fn tick(&mut self, out: &mut impl Write) -> io::Result<()> {
        if let Some(outcome) = self.session.tick() {
            write!(out, "ai ")?;
            write_outcome(out, outcome)?;
        }
        Ok(())
    }

    /// Handles one command line. Returns `true` on `quit`.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();
        debug!(cmd, ?args, "command");

        match cmd {
            "newgame" => {
                self.session.new_game();
                writeln!(out, "newgame mode {}", self.session.state().mode)?;
            }
            "setoption" => {
                if let Err(err) = self.handle_setoption(trimmed) {
                    writeln!(out, "info string setoption error: {}", err)?;
                }
            }
            "board" => {
                let state = self.session.state();
                write!(out, "{}", render_board(&state.board, &state.legal_moves))?;
                writeln!(out, "turn {}", state.turn)?;
            }
            "status" => self.write_status(out)?,
            "moves" => {
                let moves: Vec<String> = self
                    .session
                    .legal_moves_for_turn()
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                writeln!(out, "moves {}", moves.join(" "))?;
            }
            "click" => match self.handle_click(&args) {
                Ok(outcome) => write_click(out, outcome)?,
                Err(err) => writeln!(out, "info string click error: {}", err)?,
            },
            "move" => match self.handle_move(&args) {
                Ok(outcome) => write_outcome(out, outcome)?,
                Err(err) => writeln!(out, "info string move error: {}", err)?,
            },
            "undo" => {
                let done = self.session.undo();
                writeln!(out, "undo {}", if done { "ok" } else { "none" })?;
            }
            "redo" => {
                let done = self.session.redo();
                writeln!(out, "redo {}", if done { "ok" } else { "none" })?;
            }
            "history" => match self.history.recent(HISTORY_LIMIT) {
                Ok(records) => {
                    for record in records {
                        writeln!(
                            out,
                            "history {} {} {}",
                            record.winner_name,
                            record.mode,
                            record.timestamp.to_rfc3339()
                        )?;
                    }
                    writeln!(out, "history end")?;
                }
                Err(err) => writeln!(out, "info string history error: {}", err)?,
            },
            "quit" => return Ok(true),
            _ => {
                // Unknown commands are ignored.
            }
        }

        Ok(false)
    }

    fn handle_setoption(&mut self, line: &str) -> CheckersResult<()> {
        let mut name_tokens = Vec::<&str>::new();
        let mut value_tokens = Vec::<&str>::new();
        let mut mode = "";

        for tok in line.split_whitespace().skip(1) {
            match tok {
                "name" => mode = "name",
                "value" => mode = "value",
                _ if mode == "name" => name_tokens.push(tok),
                _ if mode == "value" => value_tokens.push(tok),
                _ => {}
            }
        }

        self.session
            .config_mut()
            .set_option(&name_tokens.join(" "), &value_tokens.join(" "))
    }

    fn handle_click(&mut self, args: &[&str]) -> CheckersResult<ClickOutcome> {
        let square = args
            .first()
            .ok_or_else(|| CheckersError::InvalidNotation(String::new()))?;
        Ok(self.session.click(parse_square(square)?))
    }

    fn handle_move(&mut self, args: &[&str]) -> CheckersResult<TurnOutcome> {
        let [from, to] = args else {
            return Err(CheckersError::InvalidNotation(args.join(" ")));
        };
        let from = parse_square(from)?;
        let to = parse_square(to)?;

        let mv = self
            .session
            .legal_moves_for_turn()
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to)
            .ok_or_else(|| CheckersError::InvalidNotation(format!("{from} {to}")))?;
        self.session.play_move(mv)
    }

    fn write_status(&self, out: &mut impl Write) -> io::Result<()> {
        let state = self.session.state();
        let winner = state.winner.map_or("none", |color| color.name());
        let selected = state
            .selected
            .map_or_else(|| "none".to_owned(), |pos| pos.to_string());
        writeln!(
            out,
            "status turn {} red {} white {} selected {} chaining {} gameover {} winner {} undo {} redo {}",
            state.turn,
            state.red_count,
            state.white_count,
            selected,
            state.chaining,
            state.game_over,
            winner,
            self.session.history().undo_depth(),
            self.session.history().redo_depth(),
        )
    }
}

fn write_outcome(out: &mut impl Write, outcome: TurnOutcome) -> io::Result<()> {
    match outcome {
        TurnOutcome::Chaining { at } => writeln!(out, "chain {}", at),
        TurnOutcome::Passed { to_move } => writeln!(out, "turn {}", to_move),
        TurnOutcome::GameOver { winner } => writeln!(out, "gameover winner {}", winner),
    }
}

fn write_click(out: &mut impl Write, outcome: ClickOutcome) -> io::Result<()> {
    match outcome {
        ClickOutcome::Selected(pos) => writeln!(out, "selected {}", pos),
        ClickOutcome::Deselected => writeln!(out, "deselected"),
        ClickOutcome::Ignored => writeln!(out, "ignored"),
        ClickOutcome::Moved(turn) => write_outcome(out, turn),
    }
}
