use maud::{Markup, html};

use crate::model::format_percentage;

/// Table cell with a horizontal bar sized to the rate and the formatted
/// percentage beside it. Rates are already on the 0 to 100 scale.
#[must_use]
pub fn render_rate_cell(rate: f64) -> Markup {
    html! {
        td class="rate-cell" {
            div class="rate-track" {
                div class="rate-bar" style=(format!("width: {rate}%;")) {}
            }
            span class="rate-label" { (format_percentage(rate)) }
        }
    }
}
