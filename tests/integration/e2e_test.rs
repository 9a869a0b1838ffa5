//! End-to-end integration tests

use chrono::NaiveDate;
use pricewatch::cli::build_listings;
use pricewatch::config::{Config, WatchlistConfig};
use pricewatch::history::HistoryGenerator;
use pricewatch::source::{HistoryLoader, HistoryRequest, SyntheticSource};
use pricewatch::view::{
    filter_by_platform, render_alerts, render_history, render_watchlist, ChartScale, Layout,
    PriceAlert, ScreenSize,
};
use pricewatch::watchlist::{search_stores, SortKey, SortState, Watchlist};
use rust_decimal_macros::dec;

#[test]
fn test_config_example_loads() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    config.validate().unwrap();

    assert_eq!(config.history.window_days, 30);
    assert_eq!(config.history.floor, dec!(20));
    assert_eq!(config.catalog.len(), 4);
    assert_eq!(config.catalog[2].platform, "N11");
    assert_eq!(config.watchlist, WatchlistConfig::default());
}

#[tokio::test]
async fn test_watchlist_surface_end_to_end() {
    let config = Config::default();
    let mut watchlist = Watchlist::from_config(&config.watchlist).unwrap();
    watchlist.stores.remove("Waspco");
    watchlist.keywords.remove("protein tozu");

    let matches = search_stores(&config.watchlist.store_directory, "out");
    assert_eq!(matches, vec!["Protein Outlet"]);
    watchlist.stores.add(matches[0]).unwrap();

    let mut listings = build_listings(
        &config,
        &watchlist,
        "all",
        Some(9),
        NaiveDate::from_ymd_opt(2024, 5, 14),
    )
    .await
    .unwrap();

    let mut sort = SortState::default();
    sort.request(SortKey::Price);
    sort.request(SortKey::Price);
    sort.apply(&mut listings);

    assert_eq!(listings.len(), 3);
    assert!(listings.iter().all(|l| l.store != "Waspco"));
    assert!(listings.windows(2).all(|pair| pair[0].price >= pair[1].price));

    let report = render_watchlist(&watchlist, &listings, &sort);
    assert!(report.contains("PRODUCTS (by price, descending)"));
    assert!(report.contains("Protein Outlet Atıştırmalık"));
}

#[tokio::test]
async fn test_history_surface_end_to_end() {
    let config = Config::default();
    let today = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
    let source =
        SyntheticSource::seeded(HistoryGenerator::new(config.history.clone()), 12).with_today(today);
    let loader = HistoryLoader::new(source);

    let view = loader
        .load(HistoryRequest::new("trendyol-fellas-0", dec!(129.99), 30))
        .await
        .unwrap()
        .expect("latest request is never superseded");

    assert_eq!(view.series.len(), 31);
    assert_eq!(view.rows.len(), 31);

    let scale = ChartScale::from_summary(&view.summary);
    for price in view.series.prices() {
        let height = scale.bar_height_percent(price);
        assert!(height >= dec!(10) && height <= dec!(90));
    }

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["series"][30]["date"], "2024-05-14");
    assert_eq!(json["rows"].as_array().unwrap().len(), 31);

    let report = render_history(&view, &Layout::for_screen(ScreenSize::Tablet));
    assert!(report.contains("trendyol-fellas-0"));
    assert!(report.contains("(30-day window)"));
}

#[tokio::test]
async fn test_alert_surface_end_to_end() {
    let config = Config::default();
    let today = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
    let source =
        SyntheticSource::seeded(HistoryGenerator::new(config.history.clone()), 3).with_today(today);
    let loader = HistoryLoader::new(source);

    let mut alerts = Vec::new();
    for entry in &config.catalog {
        let view = loader
            .load(HistoryRequest::new(entry.product_id(), entry.price, 30))
            .await
            .unwrap()
            .unwrap();
        alerts.push(PriceAlert::from_summary(entry, &view.summary, today));
    }

    let n11 = filter_by_platform(&alerts, "n11");
    assert_eq!(n11.len(), 1);

    let rendered = render_alerts(&n11, "N11", 3);
    assert!(rendered.contains("Waspco Protein Tozu"));
    assert!(rendered.contains("14 Mayıs"));
}
