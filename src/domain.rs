//! Domain models for the lottery game.
//!
//! This module contains the core domain types: validated numbers, the
//! winning draw, tickets, prize ranks, and game configuration.

mod config;
pub use config::{Config, Payouts};

/// Winning-draw parsing and prize classification.
pub mod draw;
pub use draw::{Draw, Error as DrawError};

/// Lottery number newtype and range constants.
pub mod number;
pub use number::LottoNumber;

/// Prize ranks.
pub mod rank;
pub use rank::Rank;

/// Lottery tickets.
pub mod ticket;
pub use ticket::Ticket;
