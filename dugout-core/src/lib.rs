//! Core library for the dugout home-game tracker.
//!
//! This crate owns the one piece of the system with real logic: the
//! schedule store and filter engine. It holds the working collection of
//! games, persists user edits, and computes the derived views the CLI
//! renders (filtered list, calendar-day classification, past/future
//! classification).

pub mod calendar;
pub mod config;
pub mod dates;
pub mod error;
pub mod filter;
pub mod game;
pub mod remote;
pub mod seed;
pub mod store;

pub use error::{DugoutError, DugoutResult};
pub use game::{Game, Memo};
