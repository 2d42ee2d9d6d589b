//! Winning-draw parsing and prize classification.
//!
//! A [`Draw`] is the validated outcome of a lottery round: six distinct
//! numbers plus a bonus number disjoint from the six. Draws are built
//! exclusively through validated construction, so a partially-valid draw
//! is never observable.

use std::sync::LazyLock;

use regex::Regex;

use super::{
    number::{LottoNumber, PICK_SIZE},
    rank::Rank,
    ticket::Ticket,
};

/// Shape of the winning-numbers input: six comma-separated 1-2 digit tokens.
static NUMBERS_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}(,\d{1,2}){5}$").expect("pattern is valid"));

/// Shape of the bonus input: a single 1-2 digit token.
static BONUS_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}$").expect("pattern is valid"));

/// A validated winning draw: six distinct numbers and a bonus number.
///
/// The six numbers keep the order they were entered in; they are never
/// sorted. The bonus number is guaranteed not to appear among the six.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    numbers: Vec<LottoNumber>,
    bonus: LottoNumber,
}

impl Draw {
    /// Assembles a draw from already-parsed parts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] unless `numbers` holds exactly six
    /// distinct values, and [`Error::Bonus`] when `bonus` appears among
    /// them.
    pub fn new(numbers: Vec<LottoNumber>, bonus: LottoNumber) -> Result<Self, Error> {
        if numbers.len() != PICK_SIZE || has_duplicates(&numbers) {
            return Err(Error::Format);
        }
        if numbers.contains(&bonus) {
            return Err(Error::Bonus);
        }
        Ok(Self { numbers, bonus })
    }

    /// Parses a draw from raw winning-number and bonus strings.
    ///
    /// # Errors
    ///
    /// Propagates any failure from [`Self::parse_numbers`] or
    /// [`Self::parse_bonus`]; no draw exists unless both inputs are valid.
    pub fn parse(raw_numbers: &str, raw_bonus: &str) -> Result<Self, Error> {
        let numbers = Self::parse_numbers(raw_numbers)?;
        let bonus = Self::parse_bonus(raw_bonus, &numbers)?;
        Ok(Self { numbers, bonus })
    }

    /// Parses the winning numbers from a comma-separated string.
    ///
    /// The input must be six comma-separated 1-2 digit tokens. Values
    /// outside the 1-45 range are filtered before the count check, so an
    /// out-of-range token surfaces as a count mismatch rather than a
    /// per-token failure. Input order is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] for an empty string, and [`Error::Format`]
    /// when the shape is wrong, a value is out of range, or the six
    /// numbers are not distinct.
    pub fn parse_numbers(raw: &str) -> Result<Vec<LottoNumber>, Error> {
        if raw.is_empty() {
            return Err(Error::Empty);
        }
        if !NUMBERS_SHAPE.is_match(raw) {
            return Err(Error::Format);
        }

        let numbers: Vec<LottoNumber> = raw
            .split(',')
            .filter_map(|token| token.parse::<u8>().ok())
            .filter_map(|value| LottoNumber::new(value).ok())
            .collect();

        if numbers.len() < PICK_SIZE || has_duplicates(&numbers) {
            return Err(Error::Format);
        }

        Ok(numbers)
    }

    /// Parses the bonus number and checks it against the winning numbers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] for an empty string. Everything else that
    /// can go wrong (a malformed token, a value outside 1-45, a value
    /// already present in `numbers`) is the single [`Error::Bonus`] kind;
    /// callers cannot tell the causes apart.
    pub fn parse_bonus(raw: &str, numbers: &[LottoNumber]) -> Result<LottoNumber, Error> {
        if raw.is_empty() {
            return Err(Error::Empty);
        }
        if !BONUS_SHAPE.is_match(raw) {
            return Err(Error::Bonus);
        }

        let bonus = raw
            .parse::<u8>()
            .ok()
            .and_then(|value| LottoNumber::new(value).ok())
            .ok_or(Error::Bonus)?;

        if numbers.contains(&bonus) {
            return Err(Error::Bonus);
        }

        Ok(bonus)
    }

    /// The six winning numbers, in input order.
    #[must_use]
    pub fn numbers(&self) -> &[LottoNumber] {
        &self.numbers
    }

    /// The bonus number.
    #[must_use]
    pub const fn bonus(&self) -> LottoNumber {
        self.bonus
    }

    /// Classifies a ticket against this draw.
    ///
    /// Scans the ticket's numbers once, counting matches against the
    /// winning numbers and noting whether the bonus number appears, then
    /// maps the pair through [`Rank::from_matches`]. Fewer than three
    /// matches win nothing.
    #[must_use]
    pub fn classify(&self, ticket: &Ticket) -> Option<Rank> {
        let mut matches = 0;
        let mut bonus_hit = false;

        for number in ticket.numbers() {
            if self.numbers.contains(number) {
                matches += 1;
            }
            if *number == self.bonus {
                bonus_hit = true;
            }
        }

        Rank::from_matches(matches, bonus_hit)
    }
}

fn has_duplicates(numbers: &[LottoNumber]) -> bool {
    numbers
        .iter()
        .enumerate()
        .any(|(i, number)| numbers[..i].contains(number))
}

/// Errors raised while parsing a draw.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The input string was empty.
    #[error("no input; enter the numbers")]
    Empty,

    /// The winning-numbers input failed validation.
    #[error("winning numbers must be six distinct 1-45 values in '0,0,0,0,0,0' form")]
    Format,

    /// The bonus input failed validation.
    #[error("the bonus number must be a 1-45 value not among the winning numbers")]
    Bonus,
}
