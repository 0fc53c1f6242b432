use maud::{Markup, html};

use crate::analytics::MentalStats;
use crate::view::analytics::utils::render_rate_cell;

#[must_use]
pub fn render_mental_section(stats: &[MentalStats]) -> Markup {
    html! {
        h3 { "Cup-in by Mental State" }
        table class="styled-table" id="mental-table" {
            thead {
                tr {
                    th { "State" }
                    th { "Attempts" }
                    th { "Cup-ins" }
                    th { "Rate" }
                }
            }
            tbody {
                @for row in stats {
                    tr {
                        td { (row.mental) }
                        td { (row.attempts) }
                        td { (row.cup_ins) }
                        (render_rate_cell(row.rate))
                    }
                }
            }
        }
    }
}
