use maud::{Markup, html};

use crate::HTMX_PATH;
use crate::analytics::Period;

#[must_use]
pub fn render_index_template(title: &str) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { (title) }
            script src=(HTMX_PATH) defer {}
        }
        body {
            h1 { (title) }
            div class="period-bar" {
                @for period in [Period::Week, Period::Month, Period::Year, Period::All] {
                    @let label = match period {
                        Period::Week => "Week",
                        Period::Month => "Month",
                        Period::Year => "Year",
                        Period::All => "All",
                    };
                    button class="period-button" data-period=(period.as_str())
                        hx-get=(format!("analytics?period={}", period.as_str()))
                        hx-target="#analytics" hx-swap="innerHTML" {
                        (label)
                    }
                }
            }
            div id="analytics" hx-get="analytics?period=all" hx-trigger="load" hx-swap="innerHTML" {
                img alt="Result loading..." class="htmx-indicator" width="150" src="https://htmx.org//img/bars.svg" {}
            }
            p class="nav" {
                a href="rounds" { "Round history" }
            }
        }
    }
}
