use maud::{Markup, html};

use crate::model::{LifetimeSummary, PlayerNames, format_net_money};

pub fn render_lifetime_summary(lifetime: &LifetimeSummary, names: &PlayerNames) -> Markup {
    let rows = [
        (
            format!("Front 9 – {} Total", names.a),
            format_net_money(lifetime.front9_net_a),
        ),
        (
            format!("Front 9 – {} Total", names.b),
            format_net_money(-lifetime.front9_net_a),
        ),
        (
            format!("Back 9 – {} Total", names.a),
            format_net_money(lifetime.back9_net_a),
        ),
        (
            format!("Back 9 – {} Total", names.b),
            format_net_money(-lifetime.back9_net_a),
        ),
        (
            format!("Overall – {} Total", names.a),
            format_net_money(lifetime.overall_net_a),
        ),
        (
            format!("Overall – {} Total", names.b),
            format_net_money(-lifetime.overall_net_a),
        ),
        (
            format!("Grand Total – {}", names.a),
            format_net_money(lifetime.grand_total_a),
        ),
        (
            format!("Grand Total – {}", names.b),
            format_net_money(lifetime.grand_total_b),
        ),
    ];

    html! {
        h3 { "Lifetime Summary" }
        table class="styled-table lifetime-table" {
            thead {
                tr {
                    th { "Category" }
                    th { "Value" }
                }
            }
            tbody {
                @for (category, value) in &rows {
                    tr {
                        td { (category) }
                        @let value_class = if value.contains('-') { "money negative" } else { "money positive" };
                        td class=(value_class) { (value) }
                    }
                }
                tr {
                    td { "Matches Played" }
                    td { (lifetime.matches_played) }
                }
            }
        }
    }
}
