//! 6/45 Lottery Game
//!
//! A winning draw is parsed from user-supplied text under strict format
//! rules, then tickets are compared against it to find the prize rank won.

pub mod domain;
pub use domain::{Config, Draw, DrawError, LottoNumber, Payouts, Rank, Ticket};

/// Aggregation of outcomes across a batch of tickets.
pub mod stats;
pub use stats::Statistics;
