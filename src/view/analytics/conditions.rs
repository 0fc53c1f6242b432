use maud::{Markup, html};

use crate::analytics::{GreenSpeedStats, SlopeStats};
use crate::view::analytics::utils::render_rate_cell;

#[must_use]
pub fn render_conditions_section(slopes: &[SlopeStats], speeds: &[GreenSpeedStats]) -> Markup {
    html! {
        (render_slope_table(slopes))
        (render_green_speed_table(speeds))
    }
}

fn render_slope_table(slopes: &[SlopeStats]) -> Markup {
    html! {
        h3 { "Cup-in by Slope" }
        table class="styled-table" id="slope-table" {
            thead {
                tr {
                    th { "Slope" }
                    th { "Attempts" }
                    th { "Cup-ins" }
                    th { "Rate" }
                }
            }
            tbody {
                @for row in slopes {
                    tr {
                        td { (row.slope) }
                        td { (row.attempts) }
                        td { (row.cup_ins) }
                        (render_rate_cell(row.rate))
                    }
                }
            }
        }
    }
}

fn render_green_speed_table(speeds: &[GreenSpeedStats]) -> Markup {
    html! {
        h3 { "Putts per Hole by Green Speed" }
        table class="styled-table" id="green-speed-table" {
            thead {
                tr {
                    th { "Stimpmeter" }
                    th { "Rounds" }
                    th { "Avg putts" }
                }
            }
            tbody {
                @for row in speeds {
                    tr {
                        td { (row.speed_range) }
                        td { (row.rounds) }
                        td { (format!("{:.1}", row.average_putts)) }
                    }
                }
            }
        }
    }
}
