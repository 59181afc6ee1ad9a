//! Turn state machine for one game.
//!
//! `GameSession` owns the live state, the history stacks, the AI scheduler,
//! the agent and the match recorder. Every public operation runs to
//! completion before returning; the only deferred work is the AI's next move,
//! which fires from `tick` once its delay has passed and is cancelled by
//! undo, redo and new game.

use std::time::Instant;

use tracing::{debug, info, trace, warn};

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::engines::agent_random::RandomAgent;
use crate::engines::agent_trait::Agent;
use crate::game_state::checkers_types::{Board, Color, GameState, Position};
use crate::move_generation::checkers_move::Move;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::records::match_records::{MatchRecorder, MatchResult, NullRecorder};
use crate::session::ai_scheduler::AiScheduler;
use crate::session::history::HistoryManager;
use crate::session::session_config::SessionConfig;

/// Result of one executed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A jump left further captures for the piece now on `at`; same side
    /// moves again.
    Chaining { at: Position },
    /// The turn completed and `to_move` is next.
    Passed { to_move: Color },
    GameOver { winner: Color },
}

/// What a board click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected(Position),
    Deselected,
    Moved(TurnOutcome),
    Ignored,
}

pub struct GameSession {
    state: GameState,
    config: SessionConfig,
    generator: LegalMoveGenerator,
    history: HistoryManager,
    scheduler: AiScheduler,
    agent: Box<dyn Agent>,
    recorder: Box<dyn MatchRecorder>,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        let agent = Box::new(RandomAgent::from_seed(config.seed));
        Self::with_parts(config, agent, Box::new(NullRecorder))
    }

    pub fn with_parts(
        config: SessionConfig,
        agent: Box<dyn Agent>,
        recorder: Box<dyn MatchRecorder>,
    ) -> Self {
        Self {
            state: GameState::new_game(config.mode),
            config,
            generator: LegalMoveGenerator,
            history: HistoryManager::new(),
            scheduler: AiScheduler::default(),
            agent,
            recorder,
        }
    }

    pub fn with_recorder(mut self, recorder: Box<dyn MatchRecorder>) -> Self {
        self.recorder = recorder;
        self
    }

    pub fn with_agent(mut self, agent: Box<dyn Agent>) -> Self {
        self.agent = agent;
        self
    }

    /// Starts from an arbitrary position instead of the opening layout.
    pub fn with_position(mut self, board: Board, to_move: Color) -> Self {
        self.state = GameState::from_board(board, to_move, self.config.mode);
        self.history.clear();
        self.scheduler.cancel();
        self.resume_ai_if_due(Instant::now());
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Options edited here apply from the next `new_game`.
    pub fn config_mut(&mut self) -> &mut SessionConfig {
        &mut self.config
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn winner(&self) -> Option<Color> {
        self.state.winner
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn ai_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    pub fn new_game(&mut self) {
        if self.scheduler.cancel() {
            trace!("cancelled pending AI move for new game");
        }
        self.state = GameState::new_game(self.config.mode);
        self.history.clear();
        self.agent.new_game(self.config.seed);
        info!(mode = %self.config.mode, "new game");
    }

    /// Moves the side to move may play right now: the chain continuations
    /// while chaining, otherwise the whole side's moves after forced capture.
    pub fn legal_moves_for_turn(&self) -> Vec<Move> {
        if self.state.chaining {
            self.state.legal_moves.clone()
        } else {
            self.generator
                .moves_for_side(&self.state.board, self.state.turn)
        }
    }

    /// Selects a piece of the side to move. Accepted only when the piece has
    /// a move under forced capture; otherwise nothing changes.
    pub fn select(&mut self, pos: Position) -> bool {
        if self.state.game_over || self.state.is_ai_turn() || self.state.chaining {
            return false;
        }
        match self.state.board.get(pos) {
            Some(piece) if piece.color == self.state.turn => {}
            _ => return false,
        }

        let moves: Vec<Move> = self
            .legal_moves_for_turn()
            .into_iter()
            .filter(|mv| mv.from == pos)
            .collect();
        if moves.is_empty() {
            return false;
        }

        self.state.selected = Some(pos);
        self.state.legal_moves = moves;
        true
    }

    /// Board click as a human player would make it.
    pub fn click(&mut self, pos: Position) -> ClickOutcome {
        if self.state.game_over || self.state.is_ai_turn() {
            return ClickOutcome::Ignored;
        }

        if self.state.chaining {
            return match self.pending_move_to(pos) {
                Some(mv) => self.click_move(mv),
                None => ClickOutcome::Ignored,
            };
        }

        let own_piece = self
            .state
            .board
            .get(pos)
            .is_some_and(|piece| piece.color == self.state.turn);
        if own_piece {
            return if self.select(pos) {
                ClickOutcome::Selected(pos)
            } else {
                ClickOutcome::Ignored
            };
        }

        if self.state.selected.is_none() {
            return ClickOutcome::Ignored;
        }
        match self.pending_move_to(pos) {
            Some(mv) => self.click_move(mv),
            None => {
                self.state.selected = None;
                self.state.legal_moves.clear();
                ClickOutcome::Deselected
            }
        }
    }

    /// Plays `mv` for the human side. Illegal requests leave the state
    /// untouched.
    pub fn play_move(&mut self, mv: Move) -> CheckersResult<TurnOutcome> {
        if self.state.game_over {
            return Err(CheckersError::GameOver);
        }
        if self.state.is_ai_turn() {
            return Err(CheckersError::AiToMove(self.state.turn));
        }
        if !self.legal_moves_for_turn().contains(&mv) {
            return Err(CheckersError::IllegalMove(mv));
        }
        self.execute_move(mv, Instant::now())
    }

    /// Restores the previous turn (two half-turns in AI mode). No-op when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.scheduler.cancel() {
            trace!("cancelled pending AI move for undo");
        }
        let changed = self.history.undo(&mut self.state);
        if changed {
            info!(turn = %self.state.turn, depth = self.history.undo_depth(), "undo");
            self.resume_ai_if_due(Instant::now());
        }
        changed
    }

    pub fn redo(&mut self) -> bool {
        if self.scheduler.cancel() {
            trace!("cancelled pending AI move for redo");
        }
        let changed = self.history.redo(&mut self.state);
        if changed {
            info!(turn = %self.state.turn, depth = self.history.redo_depth(), "redo");
            self.resume_ai_if_due(Instant::now());
        }
        changed
    }

    pub fn tick(&mut self) -> Option<TurnOutcome> {
        self.tick_at(Instant::now())
    }

    /// Fires the scheduled AI move if it is due at `now`.
    pub fn tick_at(&mut self, now: Instant) -> Option<TurnOutcome> {
        if self.scheduler.take_due(now) {
            self.run_ai_turn(now)
        } else {
            None
        }
    }

    /// Fires the scheduled AI move immediately, ignoring its delay.
    pub fn run_pending_ai(&mut self) -> Option<TurnOutcome> {
        if self.scheduler.cancel() {
            self.run_ai_turn(Instant::now())
        } else {
            None
        }
    }

    fn pending_move_to(&self, pos: Position) -> Option<Move> {
        self.state.legal_moves.iter().copied().find(|mv| mv.to == pos)
    }

    fn click_move(&mut self, mv: Move) -> ClickOutcome {
        match self.execute_move(mv, Instant::now()) {
            Ok(outcome) => ClickOutcome::Moved(outcome),
            Err(err) => {
                warn!(%mv, %err, "highlighted move failed to apply");
                ClickOutcome::Ignored
            }
        }
    }

    fn run_ai_turn(&mut self, now: Instant) -> Option<TurnOutcome> {
        if self.state.game_over || !self.state.is_ai_turn() {
            return None;
        }
        let ai = self.state.turn;
        let candidates = self.legal_moves_for_turn();

        if candidates.is_empty() {
            info!(side = %ai, "AI has no legal move");
            let winner = ai.opposite();
            self.finish_game(winner);
            return Some(TurnOutcome::GameOver { winner });
        }

        let mv = self.agent.choose_move(&candidates)?;
        debug!(agent = self.agent.name(), %mv, options = candidates.len(), "AI move");
        match self.execute_move(mv, now) {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                warn!(%mv, %err, "AI move failed to apply");
                None
            }
        }
    }

    fn execute_move(&mut self, mv: Move, now: Instant) -> CheckersResult<TurnOutcome> {
        if self.state.board.get(mv.from).is_none() {
            return Err(CheckersError::EmptySquare(mv.from));
        }
        if !self.state.chaining {
            self.history.record_turn_start(&self.state);
        }

        let mover = self.state.turn;
        let applied = apply_move(&mut self.state.board, mv)?;
        if mv.is_jump() {
            let remaining = self.state.count_mut(mover.opposite());
            *remaining = remaining.saturating_sub(1);
        }
        debug!(side = %mover, %mv, promoted = applied.promoted, "move");

        self.check_piece_counts();

        if mv.is_jump() && !applied.promoted {
            let continuations =
                self.generator
                    .jump_continuations(&self.state.board, mv.to, applied.piece);
            if !continuations.is_empty() {
                self.state.chaining = true;
                self.state.selected = Some(mv.to);
                self.state.legal_moves = continuations;
                debug!(at = %mv.to, "chain continues");

                if !self.state.game_over && self.state.is_ai_turn() {
                    self.scheduler.schedule(now, self.config.ai_delay);
                }
                return Ok(match self.state.winner {
                    Some(winner) => TurnOutcome::GameOver { winner },
                    None => TurnOutcome::Chaining { at: mv.to },
                });
            }
        }

        self.state.clear_selection();
        self.check_piece_counts();
        if let Some(winner) = self.state.winner {
            return Ok(TurnOutcome::GameOver { winner });
        }

        self.state.turn = mover.opposite();
        if self.config.blocked_side_loses
            && !self.generator.has_any_move(&self.state.board, self.state.turn)
        {
            info!(side = %self.state.turn, "side to move is blocked");
            self.finish_game(mover);
            return Ok(TurnOutcome::GameOver { winner: mover });
        }

        if self.state.is_ai_turn() {
            self.scheduler.schedule(now, self.config.ai_delay);
        }
        Ok(TurnOutcome::Passed {
            to_move: self.state.turn,
        })
    }

    fn check_piece_counts(&mut self) {
        if self.state.red_count == 0 {
            self.finish_game(Color::White);
        } else if self.state.white_count == 0 {
            self.finish_game(Color::Red);
        }
    }

    /// Ends the game once; repeated calls for an already decided game do
    /// nothing, so the recorder sees each result exactly once.
    fn finish_game(&mut self, winner: Color) {
        if self.state.game_over {
            return;
        }
        self.state.game_over = true;
        self.state.winner = Some(winner);
        self.scheduler.cancel();
        info!(%winner, mode = %self.state.mode, "game over");

        let result = MatchResult {
            winner,
            mode: self.state.mode,
        };
        if let Err(err) = self.recorder.record(&result) {
            warn!(%err, "failed to record match result");
        }
    }

    fn resume_ai_if_due(&mut self, now: Instant) {
        if !self.state.game_over && self.state.is_ai_turn() && !self.history.can_redo() {
            self.scheduler.schedule(now, self.config.ai_delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{ClickOutcome, GameSession, TurnOutcome};
    use crate::checkers_errors::{CheckersError, CheckersResult};
    use crate::engines::agent_random::RandomAgent;
    use crate::game_state::checkers_types::{Board, Color, GameMode, Piece, Position};
    use crate::move_generation::checkers_move::Move;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;
    use crate::move_generation::move_generator::MoveGenerator;
    use crate::records::match_records::{HistoryReader, MatchRecorder, MatchResult};
    use crate::records::memory_match_log::InMemoryMatchLog;
    use crate::session::session_config::SessionConfig;
    use crate::utils::board_layout::parse_layout;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col)
    }

    fn pvp() -> SessionConfig {
        SessionConfig::default()
    }

    fn pvai(seed: u64) -> SessionConfig {
        SessionConfig {
            mode: GameMode::PlayerVsAi,
            ai_delay: Duration::ZERO,
            seed: Some(seed),
            blocked_side_loses: false,
        }
    }

    fn session_at(config: SessionConfig, diagram: &str, to_move: Color) -> GameSession {
        let board = parse_layout(diagram).expect("layout should parse");
        GameSession::new(config).with_position(board, to_move)
    }

    struct FailingRecorder;

    impl MatchRecorder for FailingRecorder {
        fn record(&mut self, _result: &MatchResult) -> CheckersResult<()> {
            Err(std::io::Error::other("disk full").into())
        }
    }

    #[test]
    fn opening_step_is_available_and_passes_the_turn() {
        let mut session = GameSession::new(pvp());
        let step = Move::step(pos(5, 0), pos(4, 1));
        assert!(session.legal_moves_for_turn().contains(&step));

        let outcome = session.play_move(step).expect("legal move");
        assert_eq!(outcome, TurnOutcome::Passed { to_move: Color::White });
        assert_eq!(session.state().board.get(pos(4, 1)), Some(Piece::man(Color::Red)));
        assert_eq!(session.state().board.get(pos(5, 0)), None);
        assert_eq!(session.history().undo_depth(), 1);
    }

    #[test]
    fn illegal_requests_change_nothing() {
        let mut session = GameSession::new(pvp());
        let before = session.state().clone();

        let backwards = session.play_move(Move::step(pos(5, 0), pos(6, 1)));
        assert!(matches!(backwards, Err(CheckersError::IllegalMove(_))));
        let wrong_side = session.play_move(Move::step(pos(2, 1), pos(3, 0)));
        assert!(matches!(wrong_side, Err(CheckersError::IllegalMove(_))));

        assert_eq!(session.state(), &before);
        assert!(!session.can_undo());
    }

    #[test]
    fn selection_requires_a_move_under_forced_capture() {
        let mut session = GameSession::new(pvp());
        assert!(!session.select(pos(6, 1)), "blocked piece");
        assert!(!session.select(pos(2, 1)), "opponent piece");
        assert!(!session.select(pos(4, 1)), "empty square");
        assert!(session.select(pos(5, 0)));
        assert_eq!(session.state().legal_moves.len(), 1);

        let mut capture = session_at(
            pvp(),
            "
            ........
            ........
            ........
            ........
            .w......
            r.......
            .....r..
            ........
            ",
            Color::Red,
        );
        assert!(!capture.select(pos(6, 5)), "steps are not legal while a jump exists");
        assert!(capture.select(pos(5, 0)));
    }

    #[test]
    fn capture_removes_exactly_one_opponent() {
        let mut session = session_at(
            pvp(),
            "
            .w......
            ........
            ........
            ........
            .w......
            r.......
            .....r..
            ........
            ",
            Color::Red,
        );
        let white_before = session.state().white_count;
        let red_before = session.state().red_count;

        let moves = session.legal_moves_for_turn();
        assert_eq!(moves, vec![Move::jump(pos(5, 0), pos(3, 2), pos(4, 1))]);
        session.play_move(moves[0]).expect("legal jump");

        assert_eq!(session.state().white_count, white_before - 1);
        assert_eq!(session.state().red_count, red_before);
        assert_eq!(session.state().board.get(pos(4, 1)), None);
    }

    #[test]
    fn chain_keeps_the_turn_until_resolved() {
        let mut session = session_at(
            pvp(),
            "
            ........
            ........
            .w......
            ........
            .w......
            r.......
            ........
            ..w.....
            ",
            Color::Red,
        );

        let first = session
            .play_move(Move::jump(pos(5, 0), pos(3, 2), pos(4, 1)))
            .expect("first jump");
        assert_eq!(first, TurnOutcome::Chaining { at: pos(3, 2) });
        assert!(session.state().chaining);
        assert_eq!(session.state().turn, Color::Red);
        assert_eq!(session.state().selected, Some(pos(3, 2)));
        assert_eq!(session.history().undo_depth(), 1);

        // Only the continuation is legal mid-chain.
        assert_eq!(
            session.legal_moves_for_turn(),
            vec![Move::jump(pos(3, 2), pos(1, 0), pos(2, 1))]
        );
        assert!(session.play_move(Move::step(pos(3, 2), pos(2, 3))).is_err());

        let second = session
            .play_move(Move::jump(pos(3, 2), pos(1, 0), pos(2, 1)))
            .expect("second jump");
        assert_eq!(second, TurnOutcome::Passed { to_move: Color::White });
        assert!(!session.state().chaining);
        assert_eq!(session.state().white_count, 1);
        assert_eq!(session.history().undo_depth(), 1, "no snapshot mid-chain");
    }

    #[test]
    fn promotion_ends_the_turn_even_with_a_jump_available() {
        let mut session = session_at(
            pvp(),
            "
            ........
            ..w.w...
            .r......
            ........
            ........
            ........
            ........
            ......w.
            ",
            Color::Red,
        );

        let outcome = session
            .play_move(Move::jump(pos(2, 1), pos(0, 3), pos(1, 2)))
            .expect("crowning jump");

        // A king on (0,3) could take (1,4) next, but crowning ends the turn.
        let king = Piece::king(Color::Red);
        assert_eq!(session.state().board.get(pos(0, 3)), Some(king));
        assert!(!LegalMoveGenerator
            .jump_continuations(&session.state().board, pos(0, 3), king)
            .is_empty());
        assert_eq!(outcome, TurnOutcome::Passed { to_move: Color::White });
        assert!(!session.state().chaining);
        assert_eq!(session.state().turn, Color::White);
    }

    #[test]
    fn last_capture_ends_the_game_and_records_once() {
        let log = InMemoryMatchLog::new();
        let mut session = session_at(
            pvp(),
            "
            ........
            ........
            ........
            ........
            .w......
            r.......
            ........
            ........
            ",
            Color::Red,
        )
        .with_recorder(Box::new(log.clone()));

        let outcome = session
            .play_move(Move::jump(pos(5, 0), pos(3, 2), pos(4, 1)))
            .expect("winning jump");

        assert_eq!(outcome, TurnOutcome::GameOver { winner: Color::Red });
        assert!(session.state().game_over);
        assert_eq!(session.winner(), Some(Color::Red));
        assert_eq!(session.state().turn, Color::Red);

        let records = log.recent(10).expect("history");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].winner_name, "red");
        assert_eq!(records[0].mode, "pvp");

        assert!(matches!(
            session.play_move(Move::step(pos(3, 2), pos(2, 1))),
            Err(CheckersError::GameOver)
        ));
        assert_eq!(session.click(pos(3, 2)), ClickOutcome::Ignored);
    }

    #[test]
    fn recorder_failure_does_not_disturb_the_game() {
        let mut session = session_at(
            pvp(),
            "
            ........
            ........
            ........
            ........
            .w......
            r.......
            ........
            ........
            ",
            Color::Red,
        )
        .with_recorder(Box::new(FailingRecorder));

        session
            .play_move(Move::jump(pos(5, 0), pos(3, 2), pos(4, 1)))
            .expect("winning jump");
        assert!(session.state().game_over);
        assert_eq!(session.winner(), Some(Color::Red));
    }

    #[test]
    fn click_flow_selects_moves_and_deselects() {
        let mut session = GameSession::new(pvp());

        assert_eq!(session.click(pos(4, 1)), ClickOutcome::Ignored);
        assert_eq!(session.click(pos(5, 2)), ClickOutcome::Selected(pos(5, 2)));
        assert_eq!(session.state().legal_moves.len(), 2);

        // Blocked own piece keeps the current selection.
        assert_eq!(session.click(pos(6, 1)), ClickOutcome::Ignored);
        assert_eq!(session.state().selected, Some(pos(5, 2)));

        assert_eq!(session.click(pos(3, 0)), ClickOutcome::Deselected);
        assert_eq!(session.state().selected, None);

        session.click(pos(5, 2));
        assert_eq!(
            session.click(pos(4, 3)),
            ClickOutcome::Moved(TurnOutcome::Passed { to_move: Color::White })
        );
    }

    #[test]
    fn clicks_off_the_chain_are_fully_ignored() {
        let mut session = session_at(
            pvp(),
            "
            ........
            ........
            .w......
            ........
            .w......
            r.......
            ........
            ..w.....
            ",
            Color::Red,
        );
        session.click(pos(5, 0));
        assert_eq!(
            session.click(pos(3, 2)),
            ClickOutcome::Moved(TurnOutcome::Chaining { at: pos(3, 2) })
        );

        assert_eq!(session.click(pos(2, 3)), ClickOutcome::Ignored);
        assert_eq!(session.click(pos(3, 2)), ClickOutcome::Ignored);
        assert_eq!(session.state().selected, Some(pos(3, 2)));
        assert!(session.state().chaining);

        assert_eq!(
            session.click(pos(1, 0)),
            ClickOutcome::Moved(TurnOutcome::Passed { to_move: Color::White })
        );
    }

    #[test]
    fn undo_redo_round_trip_in_pvp() {
        let mut session = GameSession::new(pvp());
        let script = [
            Move::step(pos(5, 2), pos(4, 3)),
            Move::step(pos(2, 5), pos(3, 4)),
        ];
        for mv in script {
            session.play_move(mv).expect("scripted move");
        }
        let before_undo = session.state().snapshot();

        assert!(session.undo());
        assert_eq!(session.state().turn, Color::White);
        assert!(session.redo());
        assert_eq!(session.state().snapshot(), before_undo);

        // Red must now capture (4,3)x(3,4)->(2,5).
        assert!(session.legal_moves_for_turn().iter().all(Move::is_jump));
    }

    #[test]
    fn empty_history_undo_and_redo_are_no_ops() {
        let mut session = GameSession::new(pvp());
        let before = session.state().clone();
        assert!(!session.undo());
        assert!(!session.redo());
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn new_move_after_undo_discards_redo() {
        let mut session = GameSession::new(pvp());
        session.play_move(Move::step(pos(5, 0), pos(4, 1))).expect("move");
        session.undo();
        assert!(session.can_redo());

        session.play_move(Move::step(pos(5, 2), pos(4, 3))).expect("move");
        assert!(!session.can_redo());
    }

    #[test]
    fn ai_replies_after_the_human_move() {
        let mut session = GameSession::new(pvai(3));
        assert!(!session.ai_pending());

        session.play_move(Move::step(pos(5, 0), pos(4, 1))).expect("move");
        assert!(session.ai_pending());
        assert!(matches!(
            session.click(pos(2, 1)),
            ClickOutcome::Ignored
        ));
        assert!(matches!(
            session.play_move(Move::step(pos(2, 1), pos(3, 0))),
            Err(CheckersError::AiToMove(Color::White))
        ));

        let reply = session.run_pending_ai().expect("AI should move");
        assert_eq!(reply, TurnOutcome::Passed { to_move: Color::Red });
        assert_eq!(session.state().turn, Color::Red);
        assert_eq!(session.history().undo_depth(), 2);
    }

    #[test]
    fn ai_move_waits_for_its_delay() {
        let config = SessionConfig {
            ai_delay: Duration::from_secs(60),
            ..pvai(5)
        };
        let mut session = GameSession::new(config);
        session.play_move(Move::step(pos(5, 0), pos(4, 1))).expect("move");

        assert_eq!(session.tick_at(Instant::now()), None);
        assert_eq!(session.state().turn, Color::White);
        let later = Instant::now() + Duration::from_secs(61);
        assert!(session.tick_at(later).is_some());
        assert_eq!(session.state().turn, Color::Red);
    }

    #[test]
    fn ai_undo_reverts_both_half_turns() {
        let mut session = GameSession::new(pvai(11));
        let start = session.state().snapshot();

        session.play_move(Move::step(pos(5, 2), pos(4, 3))).expect("move");
        session.run_pending_ai().expect("AI reply");
        assert_eq!(session.state().turn, Color::Red);

        assert!(session.undo());
        assert_eq!(session.state().snapshot(), start);
        assert_eq!(session.history().redo_depth(), 2);
        assert!(!session.ai_pending());

        // Redo walks forward one half-turn at a time.
        assert!(session.redo());
        assert_eq!(session.state().turn, Color::White);
        assert!(!session.ai_pending(), "further redo history pending");
        assert!(session.redo());
        assert_eq!(session.state().turn, Color::Red);
        assert!(!session.can_redo());
    }

    #[test]
    fn redo_onto_the_ai_turn_reschedules_it() {
        let delay = Duration::from_secs(60);
        let config = SessionConfig {
            ai_delay: delay,
            ..pvai(3)
        };
        let mut session = GameSession::new(config);
        session
            .play_move(Move::step(pos(5, 0), pos(4, 1)))
            .expect("opening move");
        assert!(session.ai_pending());

        assert!(session.undo());
        assert!(!session.ai_pending());
        assert_eq!(session.state().turn, Color::Red);

        assert!(session.redo());
        assert_eq!(session.state().turn, Color::White);
        assert!(!session.can_redo());
        assert!(session.ai_pending());

        let now = Instant::now();
        let white_before = session.state().board.pieces_of(Color::White).count();
        assert_eq!(session.tick_at(now), None);
        assert_eq!(
            session.tick_at(now + delay),
            Some(TurnOutcome::Passed { to_move: Color::Red })
        );
        assert_eq!(session.state().turn, Color::Red);
        assert_eq!(session.state().board.pieces_of(Color::White).count(), white_before);
        assert_ne!(session.state().board.get(pos(4, 1)), None);
        assert_eq!(session.history().undo_depth(), 2);
    }

    #[test]
    fn seed_option_applies_at_new_game() {
        fn replies(session: &mut GameSession) -> Vec<Board> {
            (0..6)
                .map(|_| {
                    session.new_game();
                    session
                        .play_move(Move::step(pos(5, 0), pos(4, 1)))
                        .expect("opening move");
                    session.run_pending_ai().expect("AI reply");
                    session.state().board.clone()
                })
                .collect()
        }

        let mut fresh = GameSession::new(pvai(1));
        let mut reseeded = GameSession::new(pvai(999));
        reseeded
            .config_mut()
            .set_option("Seed", "1")
            .expect("seed option");

        assert_eq!(replies(&mut fresh), replies(&mut reseeded));
    }

    #[test]
    fn undo_cancels_a_scheduled_ai_move() {
        let config = SessionConfig {
            ai_delay: Duration::from_secs(60),
            ..pvai(9)
        };
        let mut session = GameSession::new(config);
        session.play_move(Move::step(pos(5, 0), pos(4, 1))).expect("move");
        assert!(session.ai_pending());

        assert!(session.undo());
        assert!(!session.ai_pending());
        assert_eq!(session.tick_at(Instant::now() + Duration::from_secs(120)), None);
        assert_eq!(session.state().turn, Color::Red);
        assert_eq!(session.state().board, Board::initial());
    }

    #[test]
    fn ai_without_moves_loses() {
        let log = InMemoryMatchLog::new();
        let session = session_at(
            pvai(1),
            "
            ........
            ........
            ........
            ........
            ........
            ..r.....
            ........
            w.......
            ",
            Color::White,
        );
        let mut session = session.with_recorder(Box::new(log.clone()));

        assert!(session.ai_pending());
        assert_eq!(
            session.run_pending_ai(),
            Some(TurnOutcome::GameOver { winner: Color::Red })
        );
        assert!(session.state().game_over);
        assert_eq!(log.recent(10).expect("history")[0].mode, "ai");
    }

    #[test]
    fn blocked_human_is_not_a_loss_by_default() {
        let diagram = "
            ........
            ........
            .w......
            ........
            ........
            ..w.....
            .w......
            r.......
            ";
        let mut session = session_at(pvp(), diagram, Color::White);
        let outcome = session
            .play_move(Move::step(pos(2, 1), pos(3, 2)))
            .expect("white move");
        assert_eq!(outcome, TurnOutcome::Passed { to_move: Color::Red });
        assert!(session.legal_moves_for_turn().is_empty());
        assert!(!session.state().game_over);

        let strict = SessionConfig {
            blocked_side_loses: true,
            ..pvp()
        };
        let mut session = session_at(strict, diagram, Color::White);
        let outcome = session
            .play_move(Move::step(pos(2, 1), pos(3, 2)))
            .expect("white move");
        assert_eq!(outcome, TurnOutcome::GameOver { winner: Color::White });
    }

    #[test]
    fn ai_continues_its_own_chain() {
        let mut session = GameSession::new(pvai(2))
            .with_agent(Box::new(RandomAgent::seeded(2)))
            .with_position(
                parse_layout(
                    "
                    ........
                    ........
                    ........
                    ..w.....
                    ...r....
                    ........
                    ...r....
                    ......r.
                    ",
                )
                .expect("layout"),
                Color::White,
            );

        assert_eq!(
            session.run_pending_ai(),
            Some(TurnOutcome::Chaining { at: pos(5, 4) })
        );
        assert!(session.ai_pending());
        assert_eq!(
            session.run_pending_ai(),
            Some(TurnOutcome::Passed { to_move: Color::Red })
        );
        assert_eq!(session.state().red_count, 1);
        assert_eq!(session.history().undo_depth(), 1);
    }

    #[test]
    fn new_game_resets_everything() {
        let mut session = GameSession::new(pvai(4));
        session.play_move(Move::step(pos(5, 0), pos(4, 1))).expect("move");
        session.config_mut().mode = GameMode::PlayerVsPlayer;
        assert_eq!(session.state().mode, GameMode::PlayerVsAi);

        session.new_game();
        assert!(!session.ai_pending());
        assert!(!session.can_undo());
        assert_eq!(session.state().mode, GameMode::PlayerVsPlayer);
        assert_eq!(session.state().board, Board::initial());
        assert_eq!(session.state().turn, Color::Red);
    }
}
