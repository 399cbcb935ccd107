use serde::{Deserialize, Serialize};

use crate::model::match_play::PlayerNames;
use crate::model::types::{MatchRecord, MatchStrokeTotals};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LifetimeSummary {
    pub front9_net_a: i64,
    pub back9_net_a: i64,
    pub overall_net_a: i64,
    pub grand_total_a: i64,
    pub grand_total_b: i64,
    pub matches_played: usize,
}

impl LifetimeSummary {
    /// Sum of the three per-segment tallies for player A.
    #[must_use]
    pub fn segment_sum_a(&self) -> i64 {
        self.front9_net_a + self.back9_net_a + self.overall_net_a
    }

    /// The per-segment tallies and the grand total are derived through
    /// different formulas over different columns; a mismatch here is a
    /// data-quality signal in the stored history, not a rounding issue.
    #[must_use]
    pub fn segments_agree_with_grand_total(&self) -> bool {
        self.segment_sum_a() == self.grand_total_a
    }
}

/// Fold the stored match history into lifetime totals.
///
/// Per-segment tallies re-scan the stored winner text for each player's
/// name (win count minus loss count); the grand totals sum the stored
/// `rod_net` / `jim_net` columns. The two derivations are kept
/// independent on purpose, so drift between them stays visible.
#[must_use]
pub fn lifetime_summary(matches: &[MatchRecord], names: &PlayerNames) -> LifetimeSummary {
    let front9_net_a =
        net_from_winner_text(matches.iter().map(|m| m.front9_winner.as_str()), names);
    let back9_net_a = net_from_winner_text(matches.iter().map(|m| m.back9_winner.as_str()), names);
    let overall_net_a =
        net_from_winner_text(matches.iter().map(|m| m.overall_winner.as_str()), names);

    LifetimeSummary {
        front9_net_a,
        back9_net_a,
        overall_net_a,
        grand_total_a: matches.iter().map(|m| m.rod_net).sum(),
        grand_total_b: matches.iter().map(|m| m.jim_net).sum(),
        matches_played: matches.len(),
    }
}

fn net_from_winner_text<'a>(
    labels: impl Iterator<Item = &'a str>,
    names: &PlayerNames,
) -> i64 {
    let mut wins_a = 0i64;
    let mut wins_b = 0i64;
    for label in labels {
        if label.contains(&names.a) {
            wins_a += 1;
        }
        if label.contains(&names.b) {
            wins_b += 1;
        }
    }
    wins_a - wins_b
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StrokeAverages {
    pub matches: usize,
    pub overall_a: f64,
    pub front_a: f64,
    pub back_a: f64,
    pub overall_b: f64,
    pub front_b: f64,
    pub back_b: f64,
}

/// Mean strokes per match for each player over the full round and each
/// nine. `None` when no matches are stored yet.
#[must_use]
pub fn stroke_averages(totals: &[MatchStrokeTotals]) -> Option<StrokeAverages> {
    if totals.is_empty() {
        return None;
    }
    let n = totals.len() as f64;
    let sum = |f: fn(&MatchStrokeTotals) -> i64| totals.iter().map(f).sum::<i64>() as f64;

    Some(StrokeAverages {
        matches: totals.len(),
        overall_a: sum(|t| t.total_a) / n,
        front_a: sum(|t| t.front_total_a) / n,
        back_a: sum(|t| t.back_total_a) / n,
        overall_b: sum(|t| t.total_b) / n,
        front_b: sum(|t| t.front_total_b) / n,
        back_b: sum(|t| t.back_total_b) / n,
    })
}
