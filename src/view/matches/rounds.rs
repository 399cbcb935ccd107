use maud::{Markup, html};

use crate::controller::matches::MatchRound;
use crate::model::{HoleRow, PlayerNames};

/// Collapsed per-match detail, newest match on top.
pub fn render_rounds(rounds: &[MatchRound], names: &PlayerNames) -> Markup {
    html! {
        h3 { "Individual Rounds" }
        @for round in rounds {
            details class="round" {
                summary { (round.record.date) " - " (round.record.overall_winner) }
                (render_stored_holes(&round.holes, names))
            }
        }
    }
}

fn render_stored_holes(holes: &[HoleRow], names: &PlayerNames) -> Markup {
    html! {
        table class="styled-table holes-table" {
            thead {
                tr {
                    th { "Hole" }
                    th { (names.a) " Score" }
                    th { (names.b) " Score" }
                    th { "Hole Winner" }
                    th { "Match Status" }
                    th { (names.a) " Won" }
                    th { (names.b) " Won" }
                }
            }
            tbody {
                @for hole in holes {
                    tr {
                        td { (hole.hole_number) }
                        td { (hole.score_a) }
                        td { (hole.score_b) }
                        td { (hole.hole_winner) }
                        td { (hole.match_status) }
                        td { (hole.cumulative_wins_a) }
                        td { (hole.cumulative_wins_b) }
                    }
                }
            }
        }
    }
}
