use maud::{Markup, html};

use crate::analytics::{AnalyticsSummary, Period};
use crate::view::analytics::summary::render_summary_cards;

/// Renders the full analytics pane: the overview table inline, then the
/// distance, conditions, and mental sections as lazily loaded fragments.
#[must_use]
pub fn render_analytics_template(summary: &AnalyticsSummary, period: Period) -> Markup {
    let period_str = period.as_str();
    html! {
        (render_summary_cards(summary))

        div id="distance-stats"
            hx-get=(format!("analytics/distance?period={period_str}"))
            hx-trigger="load" hx-swap="innerHTML" {
            p class="loading-note" { "Loading distance stats..." }
        }

        div id="condition-stats"
            hx-get=(format!("analytics/conditions?period={period_str}"))
            hx-trigger="load" hx-swap="innerHTML" {
            p class="loading-note" { "Loading green stats..." }
        }

        div id="mental-stats"
            hx-get=(format!("analytics/mental?period={period_str}"))
            hx-trigger="load" hx-swap="innerHTML" {
            p class="loading-note" { "Loading mental stats..." }
        }
    }
}
