use maud::{Markup, html};

use crate::HTMX_PATH;

#[must_use]
pub fn render_index_template(title: &str) -> Markup {
    html! {
        (maud::DOCTYPE)
        head{
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { (title) }
            script src=(HTMX_PATH) {}
        }
        body {
            h1 { (title) }
            div id="matches" hx-get="matches" hx-trigger="load" hx-swap="innerHTML" {
                img alt="Result loading..." class="htmx-indicator" width="150" src="https://htmx.org//img/bars.svg" {}
            }
        }
    }
}
