//! Wordle Clone
//!
//! A five-letter word-guessing game: guess scoring, the round state machine,
//! word sources, and terminal front ends.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_clone::core::Word;
//! use wordle_clone::game::{GameSession, GameState, Outcome};
//!
//! let mut session = GameSession::new(Word::new("sheep").unwrap());
//!
//! let result = session.submit_guess("speed").unwrap();
//! println!("{result}"); // 🟩🟨🟩🟩⬜
//!
//! session.submit_guess("sheep").unwrap();
//! assert_eq!(session.state(), GameState::Terminal(Outcome::Won));
//! ```

// Core domain types
pub mod core;

// Round state machine and driver
pub mod game;

// Secret-word and dictionary sources
pub mod providers;

// Word lists
pub mod wordlists;

// Game settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
