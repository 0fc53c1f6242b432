use maud::{Markup, html};

use crate::analytics::AnalyticsSummary;
use crate::model::format_percentage;

#[must_use]
pub fn render_summary_cards(summary: &AnalyticsSummary) -> Markup {
    let basic = &summary.basic;
    html! {
        h3 { "Overview" }
        table class="styled-table" id="overview-table" {
            thead {
                tr {
                    th { "Rounds" }
                    th { "Holes" }
                    th { "Putts" }
                    th { "Putts / round" }
                    th { "Putts / hole" }
                    th { "1-putt" }
                    th { "3-putt" }
                    th { "First-putt cup-in" }
                }
            }
            tbody {
                tr {
                    td { (basic.total_rounds) }
                    td { (basic.total_holes) }
                    td { (basic.total_putts) }
                    td { (format!("{:.2}", basic.average_putts_per_round)) }
                    td { (format!("{:.2}", basic.average_putts_per_hole)) }
                    td { (format_percentage(summary.one_putt_rate)) }
                    td { (format_percentage(summary.three_putt_rate)) }
                    td { (format_percentage(summary.cup_in_rate)) }
                }
            }
        }
    }
}
