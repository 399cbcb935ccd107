use maud::Markup;

use crate::controller::matches::MatchesPageData;
use crate::model::PlayerNames;
use crate::view::matches::{
    render_entry_section, render_lifetime_summary, render_match_history, render_rounds,
    render_stroke_averages,
};

/// Full matches page body: history, averages, lifetime totals, per-round
/// detail, and the entry form, in the order the tracker has always shown
/// them.
#[must_use]
pub fn render_matches_template(data: &MatchesPageData, names: &PlayerNames) -> Markup {
    maud::html! {
        (render_match_history(&data.matches, names))
        (render_stroke_averages(data.averages.as_ref(), names))
        (render_lifetime_summary(&data.lifetime, names))
        (render_rounds(&data.rounds, names))
        (render_entry_section(names, false))
    }
}
