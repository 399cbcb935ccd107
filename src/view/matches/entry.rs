use maud::{Markup, html};

use crate::model::{HOLES_PER_MATCH, PlayerNames};

/// Blank 18-row entry grid. Submitting previews the scorecard first;
/// nothing is stored until the preview is confirmed.
#[must_use]
pub fn render_entry_section(names: &PlayerNames, cleared: bool) -> Markup {
    html! {
        div id="match-entry" {
            h3 { "Add New Match" }
            @if cleared {
                p class="notice" { "Form cleared." }
            }
            form hx-post="matches/preview" hx-target="#matches" {
                label for="date" { "Date (e.g., Feb 14 26)" }
                " "
                input type="text" id="date" name="date" maxlength="32";
                table class="styled-table entry-table" {
                    thead {
                        tr {
                            th { "Hole" }
                            th { (names.a) " Score" }
                            th { (names.b) " Score" }
                        }
                    }
                    tbody {
                        @for hole in 1..=HOLES_PER_MATCH {
                            tr {
                                td { (hole) }
                                td {
                                    input type="number" name=(format!("hole_{hole}_a")) min="0" value="0";
                                }
                                td {
                                    input type="number" name=(format!("hole_{hole}_b")) min="0" value="0";
                                }
                            }
                        }
                    }
                }
                button type="submit" { "Calculate Match" }
                " "
                button type="button" hx-get="matches/entry?cleared=1"
                    hx-target="#match-entry" hx-swap="outerHTML" { "Clear Form" }
            }
        }
    }
}
