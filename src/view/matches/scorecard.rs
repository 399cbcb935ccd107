use maud::{Markup, html};

use crate::model::{MatchScorecard, PlayerNames, Segment, format_net_money};

/// The enriched 18-row table for a scored match.
#[must_use]
pub fn render_scorecard(scorecard: &MatchScorecard, names: &PlayerNames) -> Markup {
    html! {
        table class="styled-table scorecard-table" {
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
                @for hole in &scorecard.holes {
                    tr {
                        td { (hole.hole_number) }
                        td { (hole.score_a) }
                        td { (hole.score_b) }
                        td { (hole.winner.label(names)) }
                        td { (hole.status) }
                        td { (hole.wins_a) }
                        td { (hole.wins_b) }
                    }
                }
            }
        }
    }
}

fn render_segment_results(scorecard: &MatchScorecard, names: &PlayerNames) -> Markup {
    html! {
        table class="styled-table segment-table" {
            thead {
                tr {
                    th { "Segment" }
                    th { "Result" }
                }
            }
            tbody {
                tr {
                    td { "Front 9" }
                    td { (scorecard.front9.label(Segment::Front9, names)) }
                }
                tr {
                    td { "Back 9" }
                    td { (scorecard.back9.label(Segment::Back9, names)) }
                }
                tr {
                    td { "Overall" }
                    td { (scorecard.overall.label(Segment::Overall, names)) }
                }
                tr {
                    td { (names.a) " Net" }
                    td { (format_net_money(scorecard.net_points_a)) }
                }
                tr {
                    td { (names.b) " Net" }
                    td { (format_net_money(scorecard.net_points_b())) }
                }
            }
        }
    }
}

/// Scored but unsaved: the scorecard plus a confirm form that carries the
/// raw strokes back for the commit.
#[must_use]
pub fn render_match_preview(date: &str, scorecard: &MatchScorecard, names: &PlayerNames) -> Markup {
    html! {
        h3 { "Match Preview" }
        p { "Date: " (date) }
        (render_scorecard(scorecard, names))
        (render_segment_results(scorecard, names))
        form hx-post="matches" hx-target="#matches" {
            input type="hidden" name="date" value=(date);
            @for hole in &scorecard.holes {
                input type="hidden" name=(format!("hole_{}_a", hole.hole_number)) value=(hole.score_a);
                input type="hidden" name=(format!("hole_{}_b", hole.hole_number)) value=(hole.score_b);
            }
            button type="submit" { "Save Match" }
            " "
            button type="button" hx-get="matches" hx-target="#matches" { "Back" }
        }
    }
}

#[must_use]
pub fn render_match_saved(
    match_id: i64,
    date: &str,
    scorecard: &MatchScorecard,
    names: &PlayerNames,
) -> Markup {
    html! {
        h3 { "Match Saved" }
        p class="notice" {
            "Match #" (match_id) " saved: " (date) " - "
            (scorecard.overall.label(Segment::Overall, names))
        }
        button hx-get="matches" hx-target="#matches" { "Back to Matches" }
    }
}
