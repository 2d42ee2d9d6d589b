use std::fmt;

use serde::Serialize;

/// Prize ranks, ordered from smallest to largest payout.
///
/// Absence of a rank (fewer than three matches) means no prize; that case
/// is represented by `Option<Rank>` rather than a sentinel variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rank {
    /// Three matching numbers.
    Three,

    /// Four matching numbers.
    Four,

    /// Five matching numbers, bonus not matched.
    Five,

    /// Five matching numbers plus the bonus number.
    FiveBonus,

    /// All six numbers matched.
    Six,
}

impl Rank {
    /// Maps a match count and bonus hit to a prize rank.
    ///
    /// Fewer than three matches win nothing. The bonus number only
    /// matters at exactly five matches; a full six-number match is the
    /// jackpot regardless of the bonus.
    #[must_use]
    pub const fn from_matches(matches: usize, bonus: bool) -> Option<Self> {
        match matches {
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            5 if bonus => Some(Self::FiveBonus),
            5 => Some(Self::Five),
            6 => Some(Self::Six),
            _ => None,
        }
    }

    /// The number of matching numbers this rank represents.
    #[must_use]
    pub const fn matches(self) -> usize {
        match self {
            Self::Three => 3,
            Self::Four => 4,
            Self::Five | Self::FiveBonus => 5,
            Self::Six => 6,
        }
    }

    /// Whether this rank requires the bonus number.
    #[must_use]
    pub const fn requires_bonus(self) -> bool {
        matches!(self, Self::FiveBonus)
    }

    /// All ranks, in ascending payout order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [Self::Three, Self::Four, Self::Five, Self::FiveBonus, Self::Six]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Self::Three => "3 matches",
            Self::Four => "4 matches",
            Self::Five => "5 matches",
            Self::FiveBonus => "5 matches + bonus",
            Self::Six => "6 matches",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(0, false, None; "zero matches")]
    #[test_case(1, true, None; "one match with bonus")]
    #[test_case(2, true, None; "two matches with bonus")]
    #[test_case(3, false, Some(Rank::Three); "three")]
    #[test_case(3, true, Some(Rank::Three); "three ignores bonus")]
    #[test_case(4, false, Some(Rank::Four); "four")]
    #[test_case(4, true, Some(Rank::Four); "four ignores bonus")]
    #[test_case(5, false, Some(Rank::Five); "five")]
    #[test_case(5, true, Some(Rank::FiveBonus); "five with bonus")]
    #[test_case(6, false, Some(Rank::Six); "six")]
    #[test_case(6, true, Some(Rank::Six); "six ignores bonus")]
    fn from_matches_is_total(matches: usize, bonus: bool, expected: Option<Rank>) {
        assert_eq!(Rank::from_matches(matches, bonus), expected);
    }

    #[test]
    fn ranks_order_by_payout() {
        assert!(Rank::Three < Rank::Four);
        assert!(Rank::Four < Rank::Five);
        assert!(Rank::Five < Rank::FiveBonus);
        assert!(Rank::FiveBonus < Rank::Six);
    }

    #[test]
    fn all_lists_ranks_ascending() {
        let all = Rank::all();
        assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn matches_reports_match_count() {
        assert_eq!(Rank::Three.matches(), 3);
        assert_eq!(Rank::FiveBonus.matches(), 5);
        assert_eq!(Rank::Six.matches(), 6);
    }

    #[test]
    fn only_five_bonus_requires_the_bonus() {
        assert!(Rank::FiveBonus.requires_bonus());
        assert!(!Rank::Five.requires_bonus());
        assert!(!Rank::Six.requires_bonus());
    }

    #[test]
    fn display_labels() {
        assert_eq!(Rank::Three.to_string(), "3 matches");
        assert_eq!(Rank::FiveBonus.to_string(), "5 matches + bonus");
    }
}
