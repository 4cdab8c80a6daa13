//! Widget type registry
//!
//! Static description of every widget kind the dashboard can host: title,
//! default and minimum footprint, multiplicity and deletability. The core
//! only reads from it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// A footprint in grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl Size {
    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }
}

/// Every kind of widget the dashboard knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetType {
    PortfolioOverview,
    MarketWatch,
    RecentTrades,
    OrderBook,
    PerformanceChart,
    NewsFeed,
    Alert,
    Chat,
    Agent,
}

/// Registry entry for one widget kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetTypeConfig {
    pub widget_type: WidgetType,
    pub title: &'static str,
    /// Whether more than one instance may exist at a time
    pub allow_multiple: bool,
    /// Whether the user may remove instances
    pub deletable: bool,
    pub default_size: Size,
    pub min_size: Size,
}

impl WidgetType {
    /// All widget types in registry order
    pub const ALL: [WidgetType; 9] = [
        WidgetType::PortfolioOverview,
        WidgetType::MarketWatch,
        WidgetType::RecentTrades,
        WidgetType::OrderBook,
        WidgetType::PerformanceChart,
        WidgetType::NewsFeed,
        WidgetType::Alert,
        WidgetType::Chat,
        WidgetType::Agent,
    ];

    /// Stable identifier used in ids, drag payloads and storage
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetType::PortfolioOverview => "portfolio-overview",
            WidgetType::MarketWatch => "market-watch",
            WidgetType::RecentTrades => "recent-trades",
            WidgetType::OrderBook => "order-book",
            WidgetType::PerformanceChart => "performance-chart",
            WidgetType::NewsFeed => "news-feed",
            WidgetType::Alert => "alert",
            WidgetType::Chat => "chat",
            WidgetType::Agent => "agent",
        }
    }

    /// Registry entry for this type
    pub fn config(&self) -> WidgetTypeConfig {
        let (title, allow_multiple, deletable, default_size, min_size) = match self {
            WidgetType::PortfolioOverview => {
                ("Portfolio Overview", false, false, Size::new(4, 6), Size::new(3, 4))
            }
            WidgetType::MarketWatch => {
                ("Market Watch", false, false, Size::new(4, 6), Size::new(3, 3))
            }
            WidgetType::RecentTrades => {
                ("Recent Trades", true, true, Size::new(4, 6), Size::new(3, 3))
            }
            WidgetType::OrderBook => ("Order Book", true, true, Size::new(4, 6), Size::new(2, 4)),
            WidgetType::PerformanceChart => {
                ("Performance Chart", false, true, Size::new(4, 6), Size::new(3, 4))
            }
            WidgetType::NewsFeed => ("News Feed", false, true, Size::new(4, 6), Size::new(2, 3)),
            WidgetType::Alert => ("Alerts", true, true, Size::new(4, 4), Size::new(2, 2)),
            WidgetType::Chat => ("Chat", true, true, Size::new(4, 6), Size::new(3, 4)),
            WidgetType::Agent => ("Agent", true, true, Size::new(6, 6), Size::new(4, 4)),
        };

        WidgetTypeConfig {
            widget_type: *self,
            title,
            allow_multiple,
            deletable,
            default_size,
            min_size,
        }
    }

    /// Settings a freshly created widget of this type starts with
    pub fn default_settings(&self) -> Map<String, Value> {
        let value = match self {
            WidgetType::RecentTrades => json!({ "pair": "BTC/USD" }),
            WidgetType::OrderBook => json!({ "pair": "BTC/USD", "depth": 10 }),
            WidgetType::PerformanceChart => json!({ "interval": "1D" }),
            WidgetType::Alert => json!({ "severity": "all" }),
            WidgetType::Chat => json!({ "channel": "general" }),
            WidgetType::Agent => json!({ "agentId": null, "autoRestart": false }),
            WidgetType::PortfolioOverview | WidgetType::MarketWatch | WidgetType::NewsFeed => {
                json!({})
            }
        };

        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a widget type identifier the registry does not know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWidgetType(pub String);

impl fmt::Display for UnknownWidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown widget type: {}", self.0)
    }
}

impl std::error::Error for UnknownWidgetType {}

impl FromStr for WidgetType {
    type Err = UnknownWidgetType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WidgetType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownWidgetType(s.to_string()))
    }
}

/// Recover the widget type from an instance id of the form `<type>-<suffix>`
///
/// Longer identifiers are tried first so that a longer type name is never
/// shadowed by a shorter one sharing its prefix.
pub fn parse_widget_type(id: &str) -> Option<WidgetType> {
    let mut by_length = WidgetType::ALL;
    by_length.sort_by_key(|t| std::cmp::Reverse(t.as_str().len()));

    by_length.into_iter().find(|t| {
        id.strip_prefix(t.as_str())
            .is_some_and(|rest| rest.starts_with('-'))
    })
}
