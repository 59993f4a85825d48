//! Game rules and round lifecycle
//!
//! [`GameSession`] is the state machine for a single round. [`GameDriver`]
//! wraps it with the word sources a real game needs.

mod driver;
mod error;
mod input;
mod session;
mod stats;

pub use driver::GameDriver;
pub use error::GameError;
pub use input::GuessInput;
pub use session::{GameSession, GameState, MAX_TRIES, Outcome, ScoredGuess};
pub use stats::Statistics;
