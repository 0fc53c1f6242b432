use maud::{Markup, html};

use crate::analytics::Period;
use crate::model::{HoleData, Round, RoundType, format_round_date};

#[must_use]
pub fn render_round_list(rounds: &[Round], period: Period) -> Markup {
    html! {
        h3 { "Round History" }
        p class="period-note" { "Showing: " (period_label(period)) }
        @if rounds.is_empty() {
            p class="empty-note" { "No rounds recorded for this period." }
        } @else {
            table class="styled-table" id="round-list" {
                thead {
                    tr {
                        th { "Date" }
                        th { "Course" }
                        th { "Type" }
                        th { "Holes" }
                        th { "Putts" }
                        th { "" }
                    }
                }
                tbody {
                    @for round in rounds {
                        tr {
                            td { (format_round_date(&round.date)) }
                            td { (round.course_name) }
                            td { (round_type_label(round.round_type)) }
                            td { (round.holes.len()) }
                            td { (round.total_putts) }
                            td {
                                a href=(format!("rounds/{}", round.id)) { "detail" }
                            }
                        }
                    }
                }
            }
        }
        p class="nav" {
            a href="./" { "Back to analytics" }
        }
    }
}

#[must_use]
pub fn render_round_detail(round: &Round) -> Markup {
    html! {
        h3 { (round.course_name) " on " (format_round_date(&round.date)) }
        p class="round-meta" {
            "Greens " (round.front_nine_green) "/" (round.back_nine_green)
            ", stimp " (round.stimpmeter) " ft"
            ", putter " (round.putter_name)
            ", " (round.total_putts) " putts"
        }
        table class="styled-table" id="hole-table" {
            thead {
                tr {
                    th { "Hole" }
                    th { "Score" }
                    th { "Putts" }
                    th { "Strokes" }
                }
            }
            tbody {
                @for hole in &round.holes {
                    (render_hole_row(hole))
                }
            }
        }
        p class="nav" {
            a href="../rounds" { "Back to history" }
        }
    }
}

fn render_hole_row(hole: &HoleData) -> Markup {
    html! {
        tr {
            td { (hole.hole_number) }
            td { (hole.score_result) }
            td { (hole.total_putts) }
            td class="putt-detail" {
                @for putt in &hole.putts {
                    span class="putt-chip" {
                        (format!("{:.1}m", putt.distance_meters))
                        " " (putt.line_ud.card_code()) "/" (putt.line_lr.card_code())
                        @if putt.cup_in { " in" }
                    }
                    " "
                }
            }
        }
    }
}

fn period_label(period: Period) -> &'static str {
    match period {
        Period::Week => "past week",
        Period::Month => "past month",
        Period::Year => "past year",
        Period::All => "all time",
    }
}

fn round_type_label(round_type: RoundType) -> &'static str {
    match round_type {
        RoundType::Competition => "Competition",
        RoundType::ClubCompetition => "Club competition",
        RoundType::Private => "Private",
        RoundType::Practice => "Practice",
    }
}
