use regex::Regex;
use serde::{Deserialize, Serialize};

/// Freeform match date as entered, e.g. "Feb 14 26". Stored and compared
/// as text, bounded to a safe charset rather than parsed as a calendar
/// date.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MatchDate(String);

impl MatchDate {
    /// # Panics
    ///
    /// Will panic if the regex is invalid
    #[must_use]
    pub fn new(input: &str) -> Option<Self> {
        use std::sync::OnceLock;
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REGEX.get_or_init(|| {
            Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ,./-]{0,31}$")
                .expect("Invalid regex pattern - this is a programming error")
        });

        let trimmed = input.trim();
        if re.is_match(trimmed) {
            Some(MatchDate(trimmed.to_string()))
        } else {
            None
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// One committed match, as stored in the `matches` table. Winner columns
/// hold rendered segment labels; `jim_net` is the stored negation of
/// `rod_net`, not recomputed on read.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MatchRecord {
    pub match_id: i64,
    pub date: String,
    pub front9_winner: String,
    pub back9_winner: String,
    pub overall_winner: String,
    pub rod_net: i64,
    pub jim_net: i64,
}

/// One stored hole row, read back for display exactly as committed.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HoleRow {
    pub hole_number: i64,
    pub score_a: i64,
    pub score_b: i64,
    pub hole_winner: String,
    pub match_status: String,
    pub cumulative_wins_a: i64,
    pub cumulative_wins_b: i64,
}

/// Per-match stroke sums over the front nine, back nine, and all 18,
/// aggregated in SQL for the scoring-averages table.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MatchStrokeTotals {
    pub match_id: i64,
    pub date: String,
    pub front_total_a: i64,
    pub back_total_a: i64,
    pub total_a: i64,
    pub front_total_b: i64,
    pub back_total_b: i64,
    pub total_b: i64,
}
