mod common;

use chrono::{Duration, TimeZone, Utc};
use putting_analyzer::analytics::{Period, filter_rounds_by_period};

#[test]
fn week_filter_keeps_only_recent_rounds() {
    let now = Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap();
    let recent = common::round_on(now - Duration::days(3), vec![common::hole_with_total(1, 2)]);
    let old = common::round_on(now - Duration::days(8), vec![common::hole_with_total(1, 2)]);

    let kept = filter_rounds_by_period(vec![recent, old], Period::Week, now);

    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].date, now - Duration::days(3));
}

#[test]
fn round_exactly_at_cutoff_stays_in() {
    let now = Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap();
    let boundary = common::round_on(now - Duration::days(7), vec![common::hole_with_total(1, 2)]);
    let just_outside = common::round_on(
        now - Duration::days(7) - Duration::seconds(1),
        vec![common::hole_with_total(1, 2)],
    );

    let kept = filter_rounds_by_period(vec![boundary, just_outside], Period::Week, now);

    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].date, now - Duration::days(7));
}

#[test]
fn month_filter_clamps_at_end_of_february() {
    let now = Utc.with_ymd_and_hms(2026, 3, 31, 12, 0, 0).unwrap();
    let at_cutoff = common::round_on(
        Utc.with_ymd_and_hms(2026, 2, 28, 12, 0, 0).unwrap(),
        vec![common::hole_with_total(1, 2)],
    );
    let before_cutoff = common::round_on(
        Utc.with_ymd_and_hms(2026, 2, 28, 11, 0, 0).unwrap(),
        vec![common::hole_with_total(1, 2)],
    );

    let kept = filter_rounds_by_period(vec![at_cutoff, before_cutoff], Period::Month, now);

    assert_eq!(kept.len(), 1);
    assert_eq!(
        kept[0].date,
        Utc.with_ymd_and_hms(2026, 2, 28, 12, 0, 0).unwrap()
    );
}

#[test]
fn year_filter_spans_a_calendar_year() {
    let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
    let eleven_months = common::round_on(
        Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap(),
        vec![common::hole_with_total(1, 2)],
    );
    let thirteen_months = common::round_on(
        Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap(),
        vec![common::hole_with_total(1, 2)],
    );

    let kept = filter_rounds_by_period(vec![eleven_months, thirteen_months], Period::Year, now);

    assert_eq!(kept.len(), 1);
}

#[test]
fn all_period_is_a_passthrough() {
    let now = Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap();
    let ancient = common::round_on(
        Utc.with_ymd_and_hms(1999, 1, 1, 0, 0, 0).unwrap(),
        vec![common::hole_with_total(1, 2)],
    );

    let kept = filter_rounds_by_period(vec![ancient], Period::All, now);

    assert_eq!(kept.len(), 1);
    assert_eq!(Period::All.cutoff(now), None);
}

#[test]
fn default_period_is_all() {
    assert_eq!(Period::default(), Period::All);
    assert_eq!(Period::default().as_str(), "all");
}
