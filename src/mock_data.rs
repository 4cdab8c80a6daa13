//! Default widget set and mock widget content
//!
//! Stands in for the remote widget data service: a fixed set of default
//! instances and canned tab content per widget type.

use std::collections::BTreeMap;

use crate::model::widgets::{TabData, WidgetData};
use crate::registry::WidgetType;

/// Simulated latency of the widget data fetch (milliseconds)
pub const FETCH_LATENCY_MS: u64 = 100;

/// A widget instance that exists on a fresh dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultWidgetInstance {
    pub id: &'static str,
    pub widget_type: WidgetType,
}

/// Default instances, in packing order
pub const DEFAULT_WIDGET_INSTANCES: [DefaultWidgetInstance; 6] = [
    DefaultWidgetInstance {
        id: "portfolio-overview-1",
        widget_type: WidgetType::PortfolioOverview,
    },
    DefaultWidgetInstance {
        id: "market-watch-1",
        widget_type: WidgetType::MarketWatch,
    },
    DefaultWidgetInstance {
        id: "alert-1",
        widget_type: WidgetType::Alert,
    },
    DefaultWidgetInstance {
        id: "chat-1",
        widget_type: WidgetType::Chat,
    },
    DefaultWidgetInstance {
        id: "agent-1",
        widget_type: WidgetType::Agent,
    },
    DefaultWidgetInstance {
        id: "news-feed-1",
        widget_type: WidgetType::NewsFeed,
    },
];

fn tab(label: &str, content: &str, items: &[&str]) -> TabData {
    TabData {
        label: label.to_string(),
        content: content.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

fn mock_tabs(widget_type: WidgetType) -> Vec<TabData> {
    match widget_type {
        WidgetType::PortfolioOverview => vec![
            tab(
                "Summary",
                "Total portfolio value and allocation breakdown.",
                &["BTC: $42,150 (35%)", "ETH: $18,200 (15%)", "USDT: $47,000 (39%)"],
            ),
            tab(
                "History",
                "Recent portfolio changes.",
                &["+2.4% today", "-0.8% this week", "+12.1% this month"],
            ),
        ],
        WidgetType::MarketWatch => vec![
            tab(
                "Favorites",
                "Tracked assets.",
                &["BTC/USD 42,150.00 +1.2%", "ETH/USD 2,280.50 -0.3%"],
            ),
            tab("Gainers", "Top gainers today.", &["ARB +12.1%", "INJ +9.7%"]),
            tab("Losers", "Top losers today.", &["DOGE -4.2%", "ADA -2.1%"]),
        ],
        WidgetType::RecentTrades => vec![
            tab(
                "My Trades",
                "Your recent trade history.",
                &["BUY 0.5 BTC @ 41,800", "SELL 2.0 ETH @ 2,310"],
            ),
            tab("Open Orders", "Currently open orders.", &["LIMIT BUY BTC @ 40,000"]),
        ],
        WidgetType::OrderBook => vec![tab(
            "BTC/USD",
            "Live order book for BTC/USD.",
            &["ASK 42,200 (1.2)", "--- SPREAD 10 ---", "BID 42,150 (3.1)"],
        )],
        WidgetType::PerformanceChart => vec![
            tab("1D", "Daily performance.", &["Open: $41,800", "Current: $42,150"]),
            tab("1W", "Weekly performance.", &["Open: $40,200", "Current: $42,150"]),
        ],
        WidgetType::NewsFeed => vec![tab(
            "Latest",
            "Market headlines.",
            &["ETF inflows hit weekly high", "Exchange volumes recover"],
        )],
        WidgetType::Alert => vec![tab(
            "Active",
            "Triggered alerts.",
            &["BTC crossed 42,000", "ETH funding rate spike"],
        )],
        WidgetType::Chat => vec![tab(
            "General",
            "Desk chat.",
            &["alice: morning all", "bob: watching the open"],
        )],
        WidgetType::Agent => vec![tab(
            "Strategy",
            "Grid trading agent.",
            &["Pair: BTC/USD", "Grid levels: 20", "Take profit: 1.5%"],
        )],
    }
}

/// Build the record for a new widget instance
pub fn create_widget_data(id: &str, widget_type: WidgetType) -> WidgetData {
    let config = widget_type.config();
    WidgetData {
        id: id.to_string(),
        widget_type,
        title: config.title.to_string(),
        tabs: mock_tabs(widget_type),
        settings: widget_type.default_settings(),
    }
}

/// Records for every default instance, keyed by id
pub fn build_default_widgets_data() -> BTreeMap<String, WidgetData> {
    DEFAULT_WIDGET_INSTANCES
        .iter()
        .map(|instance| {
            (
                instance.id.to_string(),
                create_widget_data(instance.id, instance.widget_type),
            )
        })
        .collect()
}

/// Blocking stand-in for the remote fetch; run it off the event loop
pub fn fetch_default_widgets_data() -> BTreeMap<String, WidgetData> {
    std::thread::sleep(std::time::Duration::from_millis(FETCH_LATENCY_MS));
    build_default_widgets_data()
}
