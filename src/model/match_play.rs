use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const HOLES_PER_MATCH: usize = 18;
pub const FRONT_NINE_HOLES: usize = 9;

#[derive(Error, Debug, Clone)]
pub enum ScoreError {
    #[error("expected {expected} hole rows, got {got}")]
    InputShape { expected: usize, got: usize },
    #[error("invalid stroke count on hole {hole}: {value}")]
    InvalidScore { hole: usize, value: String },
    #[error("match not saved: {0}")]
    Commit(String),
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerSide {
    A,
    B,
}

#[derive(Clone, Debug)]
pub struct PlayerNames {
    pub a: String,
    pub b: String,
}

impl PlayerNames {
    #[must_use]
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    #[must_use]
    pub fn name_of(&self, side: PlayerSide) -> &str {
        match side {
            PlayerSide::A => &self.a,
            PlayerSide::B => &self.b,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self::new("Rod", "Jim")
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoleWinner {
    A,
    B,
    Tie,
}

impl HoleWinner {
    #[must_use]
    pub fn label<'a>(&self, names: &'a PlayerNames) -> &'a str {
        match self {
            HoleWinner::A => &names.a,
            HoleWinner::B => &names.b,
            HoleWinner::Tie => "Tie",
        }
    }
}

/// Lower strokes take the hole; equal strokes halve it.
#[must_use]
pub fn hole_winner(score_a: i64, score_b: i64) -> HoleWinner {
    if score_a < score_b {
        HoleWinner::A
    } else if score_b < score_a {
        HoleWinner::B
    } else {
        HoleWinner::Tie
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HoleResult {
    pub hole_number: u8,
    pub score_a: i64,
    pub score_b: i64,
    pub winner: HoleWinner,
    pub wins_a: i64,
    pub wins_b: i64,
    pub status: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    Front9,
    Back9,
    Overall,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentOutcome {
    Wins(PlayerSide, i64),
    AllSquare,
}

impl SegmentOutcome {
    #[must_use]
    pub fn from_counts(wins_a: i64, wins_b: i64) -> Self {
        if wins_a > wins_b {
            SegmentOutcome::Wins(PlayerSide::A, wins_a - wins_b)
        } else if wins_b > wins_a {
            SegmentOutcome::Wins(PlayerSide::B, wins_b - wins_a)
        } else {
            SegmentOutcome::AllSquare
        }
    }

    /// Signed unit this segment contributes to player A's net points.
    #[must_use]
    pub fn net_unit(&self) -> i64 {
        match self {
            SegmentOutcome::Wins(PlayerSide::A, _) => 1,
            SegmentOutcome::Wins(PlayerSide::B, _) => -1,
            SegmentOutcome::AllSquare => 0,
        }
    }

    /// Display/storage text for this outcome. Halved nines read
    /// "All Square (Halved)"; a halved match is plain "All Square".
    #[must_use]
    pub fn label(&self, segment: Segment, names: &PlayerNames) -> String {
        match self {
            SegmentOutcome::Wins(side, margin) => {
                let name = names.name_of(*side);
                match segment {
                    Segment::Front9 => format!("{name} wins Front 9 by {margin}"),
                    Segment::Back9 => format!("{name} wins Back 9 by {margin}"),
                    Segment::Overall => format!("{name} wins match by {margin}"),
                }
            }
            SegmentOutcome::AllSquare => match segment {
                Segment::Front9 | Segment::Back9 => "All Square (Halved)".to_string(),
                Segment::Overall => "All Square".to_string(),
            },
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MatchScorecard {
    pub holes: Vec<HoleResult>,
    pub front9: SegmentOutcome,
    pub back9: SegmentOutcome,
    pub overall: SegmentOutcome,
    pub net_points_a: i64,
}

impl MatchScorecard {
    #[must_use]
    pub fn net_points_b(&self) -> i64 {
        -self.net_points_a
    }
}

/// Score one match from its 18 raw stroke pairs.
///
/// A single left-to-right fold carries the two win counters; each hole's
/// status line reflects the state after that hole, and the counter values
/// at holes 9 and 18 settle the three segment bets. Segments are decided
/// on holes won, never on stroke totals.
///
/// # Errors
///
/// Will return `Err` if the input is not exactly 18 rows or any stroke
/// count is negative.
pub fn score_match(
    strokes: &[(i64, i64)],
    names: &PlayerNames,
) -> Result<MatchScorecard, ScoreError> {
    if strokes.len() != HOLES_PER_MATCH {
        return Err(ScoreError::InputShape {
            expected: HOLES_PER_MATCH,
            got: strokes.len(),
        });
    }
    for (idx, &(score_a, score_b)) in strokes.iter().enumerate() {
        let bad = if score_a < 0 {
            Some(score_a)
        } else if score_b < 0 {
            Some(score_b)
        } else {
            None
        };
        if let Some(value) = bad {
            return Err(ScoreError::InvalidScore {
                hole: idx + 1,
                value: value.to_string(),
            });
        }
    }

    let mut holes: Vec<HoleResult> = Vec::with_capacity(HOLES_PER_MATCH);
    let mut wins_a = 0i64;
    let mut wins_b = 0i64;

    for (idx, &(score_a, score_b)) in strokes.iter().enumerate() {
        let hole_number = (idx + 1) as u8;
        let winner = hole_winner(score_a, score_b);
        match winner {
            HoleWinner::A => wins_a += 1,
            HoleWinner::B => wins_b += 1,
            HoleWinner::Tie => {}
        }

        holes.push(HoleResult {
            hole_number,
            score_a,
            score_b,
            winner,
            wins_a,
            wins_b,
            status: running_status(wins_a - wins_b, hole_number, names),
        });
    }

    // front counters are the running totals as of hole 9
    let front_wins_a = holes[FRONT_NINE_HOLES - 1].wins_a;
    let front_wins_b = holes[FRONT_NINE_HOLES - 1].wins_b;

    let front9 = SegmentOutcome::from_counts(front_wins_a, front_wins_b);
    let back9 = SegmentOutcome::from_counts(wins_a - front_wins_a, wins_b - front_wins_b);
    let overall = SegmentOutcome::from_counts(wins_a, wins_b);

    let net_points_a = front9.net_unit() + back9.net_unit() + overall.net_unit();

    Ok(MatchScorecard {
        holes,
        front9,
        back9,
        overall,
        net_points_a,
    })
}

fn running_status(diff: i64, hole_number: u8, names: &PlayerNames) -> String {
    if diff == 0 {
        // a level match at 18 is reported the same as any other hole
        return "All Square".to_string();
    }
    let leader = if diff > 0 { &names.a } else { &names.b };
    if usize::from(hole_number) == HOLES_PER_MATCH {
        format!("{} Up ({} wins the match)", diff.abs(), leader)
    } else {
        format!("{} Up ({})", diff.abs(), leader)
    }
}
