use approx::assert_relative_eq;
use marketing_deck::charts::{ChartKind, ChartType, CHART_PAGES};
use marketing_deck::config::DeckConfig;

#[test]
fn distribution_is_a_pie_summing_to_100() {
    let spec = ChartKind::Distribution.spec();
    assert_eq!(spec.chart_type, ChartType::Pie);
    assert_eq!(spec.labels, vec!["Facebook Ads", "Instagram Ads", "Retargeting"]);
    assert_eq!(spec.series.len(), 1);
    assert_eq!(spec.series[0].values, vec![50.0, 35.0, 15.0]);
    assert_relative_eq!(spec.series[0].values.iter().sum::<f64>(), 100.0);

    let tooltips: Vec<String> = (0..3).filter_map(|i| spec.tooltip(0, i)).collect();
    assert_eq!(
        tooltips,
        vec!["Facebook Ads: 50%", "Instagram Ads: 35%", "Retargeting: 15%"]
    );
}

#[test]
fn trend_has_two_weekly_series() {
    let spec = ChartKind::Trend.spec();
    assert_eq!(spec.chart_type, ChartType::Line);
    assert_eq!(spec.labels, vec!["Week 1", "Week 2", "Week 3", "Week 4"]);

    let names: Vec<&str> = spec.series.iter().map(|s| s.label).collect();
    assert_eq!(names, vec!["Sales (EGP)", "Budget (EGP)"]);
    assert_eq!(spec.series[0].values, vec![1250.0, 3750.0, 15000.0, 30000.0]);
    assert_eq!(spec.series[1].values, vec![500.0, 1500.0, 2500.0, 2500.0]);
    for series in &spec.series {
        assert_relative_eq!(series.tension, 0.4);
        assert!(series.fill.is_some());
    }
    assert_eq!(spec.tooltip(1, 2).as_deref(), Some("Budget (EGP): 2,500 EGP"));
}

#[test]
fn funnel_keeps_stage_order() {
    let spec = ChartKind::Funnel.spec();
    assert_eq!(spec.chart_type, ChartType::HorizontalBar);
    assert_eq!(
        spec.labels,
        vec!["Impressions", "Clicks", "Page Views", "Add to Cart", "Checkout", "Purchase"]
    );
    assert_eq!(
        spec.series[0].values,
        vec![900000.0, 16200.0, 14580.0, 437.0, 219.0, 88.0]
    );
    assert_eq!(spec.series[0].colors.len(), spec.labels.len());
    assert_eq!(spec.tick_label(16200.0), "16,200");
    assert_relative_eq!(spec.max_value(), 900000.0);
}

#[test]
fn chart_page_table_matches_embedded_deck() {
    let config = DeckConfig::embedded().expect("embedded deck parses");
    for (page, kind) in CHART_PAGES {
        assert_eq!(config.page(page).and_then(|p| p.chart), Some(kind));
        assert_eq!(kind.spec().kind, kind);
    }
}
