//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary, so the game works
//! offline out of the box.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, SECRETS, SECRETS_COUNT};
