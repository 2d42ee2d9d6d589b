use std::fmt;

use super::number::{LottoNumber, PICK_SIZE};

/// A purchased lottery ticket: six distinct numbers.
///
/// Tickets are plain data owned by the purchase flow; comparing a ticket
/// against a draw is the [`Draw`](super::Draw)'s job. A winning draw is
/// deliberately not a ticket; the two share nothing but [`LottoNumber`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    numbers: Vec<LottoNumber>,
}

impl Ticket {
    /// Creates a ticket from exactly six distinct numbers.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTicket::Count`] for any count other than six and
    /// [`InvalidTicket::Duplicate`] when a number repeats.
    pub fn new(numbers: Vec<LottoNumber>) -> Result<Self, InvalidTicket> {
        if numbers.len() != PICK_SIZE {
            return Err(InvalidTicket::Count(numbers.len()));
        }
        for (i, number) in numbers.iter().enumerate() {
            if numbers[..i].contains(number) {
                return Err(InvalidTicket::Duplicate(*number));
            }
        }
        Ok(Self { numbers })
    }

    /// The ticket's numbers, in the order they were supplied.
    #[must_use]
    pub fn numbers(&self) -> &[LottoNumber] {
        &self.numbers
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, number) in self.numbers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{number}")?;
        }
        write!(f, "]")
    }
}

/// Errors raised while constructing a ticket.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InvalidTicket {
    /// The wrong number of values was supplied.
    #[error("a ticket holds exactly six numbers, got {0}")]
    Count(usize),

    /// A number appears more than once.
    #[error("duplicate number {0} in ticket")]
    Duplicate(LottoNumber),
}
