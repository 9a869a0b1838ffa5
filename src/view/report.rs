//! Terminal rendering of history views and alert lists

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::alerts::{biggest_drops, biggest_rises, PriceAlert};
use super::chart::{bar_kind, tick_indices, BarKind, ChartScale};
use super::format::{self, Direction};
use super::layout::{Layout, StatsArrangement};
use crate::source::HistoryView;
use crate::watchlist::{ProductListing, SortState, Watchlist, MAX_KEYWORDS};

const RULE: &str = "══════════════════════════════════════════════════════";
const THIN_RULE: &str = "───────────────────────────────────────────────────────";
const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render the full history report for one product
pub fn render_history(view: &HistoryView, layout: &Layout) -> String {
    let summary = &view.summary;
    let window = view.series.len().saturating_sub(1);
    let direction = Direction::of(summary.absolute_change);

    let stats = [
        ("Current", format::currency(summary.current)),
        (
            "Lowest",
            format!(
                "{} ({})",
                format::currency(summary.min),
                format::date(summary.lowest_price_date, layout.show_year)
            ),
        ),
        ("Highest", format::currency(summary.max)),
        ("Average", format::currency(summary.average)),
        (
            "Change",
            format!(
                "{}{} ({}) {}",
                if direction == Direction::Up { "+" } else { "" },
                format::currency(summary.absolute_change),
                format::percent(summary.percent_change),
                direction.arrow()
            ),
        ),
    ];

    let mut out = String::new();
    out.push_str(&format!("{RULE}\n  PRICE HISTORY  {}\n{RULE}\n\n", view.product_id));

    match layout.stats {
        StatsArrangement::Stacked => {
            for (label, value) in &stats {
                out.push_str(&format!("{:<16}{}\n", format!("{label}:"), value));
            }
        }
        StatsArrangement::Grid => {
            for pair in stats.chunks(2) {
                let line = pair
                    .iter()
                    .map(|(label, value)| format!("{label}: {value}"))
                    .collect::<Vec<_>>()
                    .join("   ");
                out.push_str(&line);
                out.push('\n');
            }
        }
    }
    out.push_str(&format!("({window}-day window)\n\n"));

    out.push_str(&render_sparkline(view, layout));
    out.push('\n');

    out.push_str(&format!("CHANGES\n{THIN_RULE}\n"));
    out.push_str(&format!("{:<14}{:>14}  {}\n", "Date", "Price", "Change"));
    for row in &view.rows {
        out.push_str(&format!(
            "{:<14}{:>14}  {}\n",
            format::date(row.date, layout.show_year),
            format::currency(row.price),
            format::change(row.change_from_previous, row.change_percent)
        ));
    }
    out.push_str(RULE);
    out.push('\n');

    out
}

/// Bars two columns wide, a marker row (`L` lowest, `C` current) and tick labels
fn render_sparkline(view: &HistoryView, layout: &Layout) -> String {
    let scale = ChartScale::from_summary(&view.summary);
    let len = view.series.len();

    let mut bars = String::new();
    let mut markers = String::new();
    for (i, price) in view.series.prices().enumerate() {
        bars.push(bar_glyph(scale.bar_height_percent(price)));
        bars.push(' ');
        markers.push(match bar_kind(&view.series, &view.summary, i) {
            BarKind::Current => 'C',
            BarKind::Lowest => 'L',
            BarKind::Normal => ' ',
        });
        markers.push(' ');
    }

    let mut ticks: Vec<char> = vec![' '; len * 2 + 5];
    let mut next_free = 0;
    for i in tick_indices(len, layout.label_stride) {
        let column = i * 2;
        if column < next_free {
            continue;
        }
        let label = format::tick(view.series.points()[i].date);
        for (offset, c) in label.chars().enumerate() {
            ticks[column + offset] = c;
        }
        next_free = column + label.len() + 1;
    }
    let ticks: String = ticks.into_iter().collect();

    format!(
        "{}\n{}\n{}\n",
        bars.trim_end(),
        markers.trim_end(),
        ticks.trim_end()
    )
}

/// Map a 10..=90 bar height onto eight block glyphs
fn bar_glyph(height_percent: Decimal) -> char {
    let level = ((height_percent - dec!(10)) / dec!(80) * dec!(7)).round();
    let index = level.clamp(Decimal::ZERO, dec!(7));
    BARS[index.to_usize().unwrap_or(0)]
}

/// Render an alert list with the biggest drops and rises underneath
pub fn render_alerts(alerts: &[&PriceAlert], platform: &str, top: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("{RULE}\n  PRICE ALERTS  {platform}\n{RULE}\n"));

    if alerts.is_empty() {
        out.push_str("No price changes on this platform yet\n");
        out.push_str(RULE);
        out.push('\n');
        return out;
    }

    for alert in alerts {
        out.push_str(&render_alert_line(alert));
    }

    out.push_str(&format!("\nBIGGEST DROPS\n{THIN_RULE}\n"));
    for alert in biggest_drops(alerts.iter().copied(), top) {
        out.push_str(&format!(
            "{:<32}{:>10}\n",
            alert.product_name,
            format::percent(alert.percent_change)
        ));
    }

    out.push_str(&format!("\nBIGGEST RISES\n{THIN_RULE}\n"));
    for alert in biggest_rises(alerts.iter().copied(), top) {
        out.push_str(&format!(
            "{:<32}{:>10}\n",
            alert.product_name,
            format::percent(alert.percent_change)
        ));
    }

    out.push_str(RULE);
    out.push('\n');
    out
}

/// Render tracked keywords and stores followed by the watched products
pub fn render_watchlist(watchlist: &Watchlist, listings: &[ProductListing], sort: &SortState) -> String {
    let mut out = String::new();
    out.push_str(&format!("{RULE}\n  WATCHLIST\n{RULE}\n"));

    let keywords = watchlist.keywords.iter().collect::<Vec<_>>().join(", ");
    out.push_str(&format!(
        "Keywords ({}/{MAX_KEYWORDS}): {}\n",
        watchlist.keywords.len(),
        if keywords.is_empty() { "none yet" } else { keywords.as_str() }
    ));
    let stores = watchlist.stores.iter().collect::<Vec<_>>().join(", ");
    out.push_str(&format!(
        "Stores: {}\n\n",
        if stores.is_empty() { "none yet" } else { stores.as_str() }
    ));

    match sort.key {
        Some(key) => out.push_str(&format!(
            "PRODUCTS (by {}, {})\n{THIN_RULE}\n",
            key.label(),
            sort.direction.label()
        )),
        None => out.push_str(&format!("PRODUCTS\n{THIN_RULE}\n")),
    }

    if listings.is_empty() {
        out.push_str("No watched products on this platform yet\n");
    }
    for listing in listings {
        out.push_str(&format!(
            "{:<32}{:<14}{:>14}",
            listing.name,
            listing.platform,
            format::currency(listing.price)
        ));
        if let Some(old) = listing.old_price.filter(|_| listing.is_discounted()) {
            out.push_str(&format!(
                "  was {} ({})",
                format::currency(old),
                format::percent(Some(listing.percent_change()))
            ));
        }
        out.push('\n');
    }

    out.push_str(RULE);
    out.push('\n');
    out
}

/// Render store search results, marking already tracked stores
pub fn render_store_search(query: &str, results: &[&str], watchlist: &Watchlist) -> String {
    let mut out = format!("Stores matching {query:?}:\n");
    if results.is_empty() {
        out.push_str("  no stores found\n");
    }
    for store in results {
        let marker = if watchlist.stores.contains(store) { "✓" } else { "+" };
        out.push_str(&format!("  {marker} {store}\n"));
    }
    out
}

fn render_alert_line(alert: &PriceAlert) -> String {
    let direction = Direction::of(alert.new_price - alert.old_price);
    format!(
        "{}\n  {} • {:<12} {} → {}  {} {}\n",
        alert.product_name,
        alert.platform,
        format::date_long(alert.date),
        format::currency(alert.old_price),
        format::currency(alert.new_price),
        direction.arrow(),
        format::percent(alert.percent_change)
    )
}
