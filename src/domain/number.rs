use std::fmt;

/// The count of numbers in a draw or a ticket.
pub const PICK_SIZE: usize = 6;

/// A validated lottery number in the range `1..=45`.
///
/// Every number in a [`Draw`](super::Draw) or a [`Ticket`](super::Ticket)
/// is a `LottoNumber`, so out-of-range values cannot reach the
/// classification logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LottoNumber(u8);

impl LottoNumber {
    /// The smallest valid lottery number.
    pub const MIN: u8 = 1;

    /// The largest valid lottery number.
    pub const MAX: u8 = 45;

    /// Creates a new `LottoNumber`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if the value is outside `1..=45`.
    pub const fn new(value: u8) -> Result<Self, OutOfRange> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(OutOfRange(value))
        }
    }

    /// Returns the underlying value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for LottoNumber {
    type Error = OutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for LottoNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a value falls outside the valid `1..=45` range.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("number {0} is outside the valid range 1-45")]
pub struct OutOfRange(u8);

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(1; "lower bound")]
    #[test_case(23; "middle")]
    #[test_case(45; "upper bound")]
    fn new_accepts_in_range_values(value: u8) {
        assert_eq!(LottoNumber::new(value).unwrap().get(), value);
    }

    #[test_case(0; "zero")]
    #[test_case(46; "just above range")]
    #[test_case(255; "far above range")]
    fn new_rejects_out_of_range_values(value: u8) {
        assert_eq!(LottoNumber::new(value), Err(OutOfRange(value)));
    }

    #[test]
    fn try_from_matches_new() {
        assert_eq!(LottoNumber::try_from(7), LottoNumber::new(7));
        assert!(LottoNumber::try_from(0).is_err());
    }

    #[test]
    fn display_prints_bare_value() {
        let number = LottoNumber::new(9).unwrap();
        assert_eq!(number.to_string(), "9");
    }

    #[test]
    fn ordering_follows_value() {
        let small = LottoNumber::new(3).unwrap();
        let large = LottoNumber::new(44).unwrap();
        assert!(small < large);
    }
}
