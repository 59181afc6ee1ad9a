//! Crate root module declarations for the draughts engine.
//!
//! Exposes the board model, move generation, the turn/history session, the
//! random AI agent, match records, the stdio protocol and utility helpers so
//! the binary, tests and benches can import stable module paths.

pub mod checkers_errors;

pub mod game_state {
    pub mod board;
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod game_state;
    pub mod snapshot;
}

pub mod move_generation {
    pub mod checkers_move;
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
}

pub mod session {
    pub mod ai_scheduler;
    pub mod game_session;
    pub mod history;
    pub mod session_config;
}

pub mod engines {
    pub mod agent_random;
    pub mod agent_trait;
}

pub mod records {
    pub mod json_match_log;
    pub mod match_records;
    pub mod memory_match_log;
}

pub mod protocol {
    pub mod protocol_top;
}

pub mod utils {
    pub mod board_layout;
    pub mod render_board;
    pub mod square_notation;
}
