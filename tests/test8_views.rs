mod common;

use putting_analyzer::analytics::{
    Period, analytics_summary, distance_band_breakdown, distance_stats, mental_stats,
};
use putting_analyzer::view;
use scraper::{Html, Selector};

#[test]
fn distance_section_bars_match_rates() {
    let rounds = [common::round_of_putts(vec![
        common::putt(1, 0.5, true),
        common::putt(1, 0.5, false),
        common::putt(1, 3.5, true),
    ])];
    let stats = distance_stats(&rounds);
    let bands = distance_band_breakdown(&rounds);

    let markup = view::analytics::render_distance_section(&stats, &bands);
    let document = Html::parse_document(&markup.into_string());

    let row_selector = Selector::parse("#distance-table tbody tr").unwrap();
    let bar_selector = Selector::parse(".rate-bar").unwrap();

    let rows: Vec<_> = document.select(&row_selector).collect();
    assert_eq!(rows.len(), 7, "one row per distance bucket");

    for (row, stat) in rows.iter().zip(&stats) {
        let bar = row
            .select(&bar_selector)
            .next()
            .expect("rate bar in every row");
        let style = bar.value().attr("style").unwrap();
        let width: f64 = style
            .split("width:")
            .nth(1)
            .and_then(|s| s.split('%').next())
            .expect("width in style attribute")
            .trim()
            .parse()
            .unwrap();
        assert!(
            (width - stat.rate).abs() < 0.01,
            "bar width {width}% should match rate {}%",
            stat.rate
        );
    }

    let band_selector = Selector::parse(".band").unwrap();
    assert_eq!(document.select(&band_selector).count(), 3);
}

#[test]
fn analytics_template_carries_period_into_fragments() {
    let rounds = [common::round_of_putts(vec![common::putt(1, 2.0, true)])];
    let summary = analytics_summary(&rounds);

    let markup = view::analytics::render_analytics_template(&summary, Period::Month);
    let html = markup.into_string();
    let document = Html::parse_document(&html);

    for (id, path) in [
        ("#distance-stats", "analytics/distance?period=month"),
        ("#condition-stats", "analytics/conditions?period=month"),
        ("#mental-stats", "analytics/mental?period=month"),
    ] {
        let selector = Selector::parse(id).unwrap();
        let div = document.select(&selector).next().expect("fragment div");
        assert_eq!(div.value().attr("hx-get"), Some(path));
        assert_eq!(div.value().attr("hx-trigger"), Some("load"));
    }

    // Overview table shows the formatted one-putt percentage.
    assert!(html.contains("100.0%"));
}

#[test]
fn mental_section_lists_all_states_in_card_order() {
    let stats = mental_stats(&[]);
    let markup = view::analytics::render_mental_section(&stats);
    let document = Html::parse_document(&markup.into_string());

    let cell_selector = Selector::parse("#mental-table tbody tr td:first-child").unwrap();
    let labels: Vec<String> = document
        .select(&cell_selector)
        .map(|cell| cell.text().collect::<String>())
        .collect();

    assert_eq!(
        labels,
        vec!["Positive", "1", "2", "3", "4", "5", "Negative"]
    );
}

#[test]
fn round_list_links_to_details() {
    let mut round = common::round(vec![common::hole_with_total(1, 2)]);
    round.id = "r-42".to_string();

    let markup = view::rounds::render_round_list(&[round], Period::All);
    let document = Html::parse_document(&markup.into_string());

    let link_selector = Selector::parse("#round-list tbody a").unwrap();
    let link = document.select(&link_selector).next().expect("detail link");
    assert_eq!(link.value().attr("href"), Some("rounds/r-42"));

    let empty = view::rounds::render_round_list(&[], Period::Week);
    assert!(empty.into_string().contains("No rounds recorded"));
}

#[test]
fn round_detail_renders_hole_rows_and_putt_chips() {
    let round = common::round(vec![
        common::hole(
            1,
            vec![common::putt(1, 4.2, false), common::putt(2, 0.8, true)],
        ),
        common::hole(2, vec![common::putt(1, 2.0, true)]),
    ]);

    let markup = view::rounds::render_round_detail(&round);
    let document = Html::parse_document(&markup.into_string());

    let row_selector = Selector::parse("#hole-table tbody tr").unwrap();
    assert_eq!(document.select(&row_selector).count(), 2);

    let chip_selector = Selector::parse(".putt-chip").unwrap();
    let chips: Vec<String> = document
        .select(&chip_selector)
        .map(|chip| chip.text().collect::<String>())
        .collect();
    assert_eq!(chips.len(), 3);
    assert!(chips[0].contains("4.2m"));
    assert!(chips[1].contains("in"), "holed putt is marked");
}

#[test]
fn index_page_loads_analytics_fragment() {
    let markup = view::index::render_index_template("Putting Analyzer");
    let document = Html::parse_document(&markup.into_string());

    let pane_selector = Selector::parse("#analytics").unwrap();
    let pane = document.select(&pane_selector).next().expect("analytics pane");
    assert_eq!(pane.value().attr("hx-get"), Some("analytics?period=all"));
    assert_eq!(pane.value().attr("hx-trigger"), Some("load"));

    let button_selector = Selector::parse(".period-button").unwrap();
    assert_eq!(document.select(&button_selector).count(), 4);

    let title_selector = Selector::parse("title").unwrap();
    let title = document.select(&title_selector).next().unwrap();
    assert_eq!(title.text().collect::<String>(), "Putting Analyzer");
}
