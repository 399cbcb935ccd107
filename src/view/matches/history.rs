use maud::{Markup, html};

use crate::model::{MatchRecord, PlayerNames};

pub fn render_match_history(matches: &[MatchRecord], names: &PlayerNames) -> Markup {
    html! {
        h3 { "Match History" }
        @if matches.is_empty() {
            p class="notice" { "No matches recorded yet." }
        } @else {
            table class="styled-table" {
                thead {
                    tr {
                        th { "Date" }
                        th { "Front 9" }
                        th { "Back 9" }
                        th { "Overall" }
                        th { (names.a) " Net" }
                        th { (names.b) " Net" }
                    }
                }
                tbody {
                    @for m in matches {
                        tr {
                            td { (m.date) }
                            td { (m.front9_winner) }
                            td { (m.back9_winner) }
                            td { (m.overall_winner) }
                            td { (m.rod_net) }
                            td { (m.jim_net) }
                        }
                    }
                }
            }
        }
    }
}
