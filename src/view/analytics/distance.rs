use maud::{Markup, html};

use crate::analytics::{BandStats, DistanceBand, DistanceBandBreakdown, DistanceStats};
use crate::model::format_percentage;
use crate::view::analytics::utils::render_rate_cell;

#[must_use]
pub fn render_distance_section(stats: &[DistanceStats], bands: &DistanceBandBreakdown) -> Markup {
    html! {
        h3 { "Cup-in by Distance" }
        table class="styled-table" id="distance-table" {
            thead {
                tr {
                    th { "Distance" }
                    th { "Attempts" }
                    th { "Cup-ins" }
                    th { "Rate" }
                }
            }
            tbody {
                @for row in stats {
                    tr {
                        td { (row.range) }
                        td { (row.attempts) }
                        td { (row.cup_ins) }
                        (render_rate_cell(row.rate))
                    }
                }
            }
        }
        (render_band_strip(bands))
    }
}

fn render_band_strip(bands: &DistanceBandBreakdown) -> Markup {
    html! {
        div class="band-strip" {
            (render_band(DistanceBand::Short, bands.short))
            (render_band(DistanceBand::Medium, bands.medium))
            (render_band(DistanceBand::Long, bands.long))
        }
    }
}

fn render_band(band: DistanceBand, stats: BandStats) -> Markup {
    html! {
        div class="band" {
            span class="band-label" { (band.label()) }
            span class="band-rate" { (format_percentage(stats.success_rate)) }
            span class="band-count" { (stats.count) " putts" }
        }
    }
}
