//! Rank classification: match count → finishing place.
//!
//! The table covers the top `count - 2` match counts: a full match down to
//! three matches. Anything below three matches
//! (including two, which the classic game deliberately leaves out) falls
//! through to the single no-win rank. The mapping is total: every count in
//! `[0, config.count()]` produces a defined rank, never an error.

use serde::Serialize;

use crate::domain::draw::DrawConfig;

/// The lowest match count that places at all.
pub const MIN_WINNING_MATCHES: usize = 3;

/// Outcome tier for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    /// Finishing place; 1 is a full match, 2 is one miss, and so on.
    Place(u8),
    /// Fewer matches than the lowest tabulated count.
    NoWin,
}

impl Rank {
    /// Classify a match count under the given configuration.
    ///
    /// Counts above `config.count()` cannot occur for sets produced under
    /// the same config; they classify as no-win rather than panicking so
    /// the function stays total.
    pub fn classify(match_count: usize, config: &DrawConfig) -> Self {
        if (MIN_WINNING_MATCHES..=config.count()).contains(&match_count) {
            Self::Place((config.count() - match_count + 1) as u8)
        } else {
            Self::NoWin
        }
    }

    pub const fn is_winning(&self) -> bool {
        matches!(self, Self::Place(_))
    }

    /// The display label: an ordinal ("1st", "2nd", ...) or "fail".
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Place(place) => write!(f, "{}{}", place, ordinal_suffix(*place)),
            Self::NoWin => f.write_str("fail"),
        }
    }
}

/// English ordinal suffix. 11, 12 and 13 take "th" despite ending in 1-3.
fn ordinal_suffix(n: u8) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> DrawConfig {
        DrawConfig::default()
    }

    #[test]
    fn six_matches_is_first_place() {
        assert_eq!(Rank::classify(6, &classic()), Rank::Place(1));
        assert_eq!(Rank::classify(6, &classic()).to_string(), "1st");
    }

    #[test]
    fn five_matches_is_second_place() {
        assert_eq!(Rank::classify(5, &classic()), Rank::Place(2));
        assert_eq!(Rank::classify(5, &classic()).to_string(), "2nd");
    }

    #[test]
    fn four_matches_is_third_place() {
        assert_eq!(Rank::classify(4, &classic()).to_string(), "3rd");
    }

    #[test]
    fn three_matches_is_fourth_place() {
        assert_eq!(Rank::classify(3, &classic()), Rank::Place(4));
        assert_eq!(Rank::classify(3, &classic()).to_string(), "4th");
    }

    #[test]
    fn two_and_below_are_no_win() {
        // the classic table has no entry for two matches
        assert_eq!(Rank::classify(2, &classic()), Rank::NoWin);
        assert_eq!(Rank::classify(1, &classic()), Rank::NoWin);
        assert_eq!(Rank::classify(0, &classic()), Rank::NoWin);
        assert_eq!(Rank::classify(0, &classic()).to_string(), "fail");
    }

    #[test]
    fn classify_is_total_over_the_domain() {
        let config = classic();
        for count in 0..=config.count() {
            // every input yields a defined label, never a panic
            let _ = Rank::classify(count, &config).label();
        }
    }

    #[test]
    fn counts_above_the_pick_count_do_not_place() {
        assert_eq!(Rank::classify(7, &classic()), Rank::NoWin);
    }

    #[test]
    fn smaller_games_keep_the_three_match_floor() {
        // 4-from-10: only four and three matches place
        let config = DrawConfig::new(4, 1, 10).unwrap();
        assert_eq!(Rank::classify(4, &config), Rank::Place(1));
        assert_eq!(Rank::classify(3, &config), Rank::Place(2));
        assert_eq!(Rank::classify(2, &config), Rank::NoWin);
    }

    #[test]
    fn is_winning_splits_on_place() {
        assert!(Rank::Place(4).is_winning());
        assert!(!Rank::NoWin.is_winning());
    }

    #[test]
    fn ordinal_suffixes_cover_the_teens() {
        assert_eq!(Rank::Place(11).to_string(), "11th");
        assert_eq!(Rank::Place(12).to_string(), "12th");
        assert_eq!(Rank::Place(13).to_string(), "13th");
        assert_eq!(Rank::Place(21).to_string(), "21st");
        assert_eq!(Rank::Place(22).to_string(), "22nd");
        assert_eq!(Rank::Place(23).to_string(), "23rd");
    }
}
