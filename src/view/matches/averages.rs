use maud::{Markup, html};

use crate::model::{PlayerNames, StrokeAverages, format_average};

pub fn render_stroke_averages(averages: Option<&StrokeAverages>, names: &PlayerNames) -> Markup {
    html! {
        h3 { "Scoring Averages per Match" }
        @if let Some(avg) = averages {
            table class="styled-table averages-table" {
                thead {
                    tr {
                        th { "Player" }
                        th { "Avg Score per Match (18 holes)" }
                        th { "Avg Front 9 Score" }
                        th { "Avg Back 9 Score" }
                    }
                }
                tbody {
                    tr {
                        td { (names.a) }
                        td { (format_average(avg.overall_a)) }
                        td { (format_average(avg.front_a)) }
                        td { (format_average(avg.back_a)) }
                    }
                    tr {
                        td { (names.b) }
                        td { (format_average(avg.overall_b)) }
                        td { (format_average(avg.front_b)) }
                        td { (format_average(avg.back_b)) }
                    }
                }
            }
            p class="caption" {
                "Based on " (avg.matches) " full matches. Lower scores are better."
            }
        } @else {
            p class="notice" { "No match score data available yet." }
        }
    }
}
