//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::drop_target::DragPayload;
use crate::model::layout::{Layout, LayoutItem};
use crate::model::widgets::WidgetData;
use crate::registry::WidgetType;

/// Reports and gesture events coming from the grid engine
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridMsg {
    /// The engine reports its current layout (after any change)
    LayoutChanged(Layout),
    /// A drag gesture started on an existing item
    DragStart,
    /// A resize gesture started on an existing item
    ResizeStart,
    /// An external drag was released over the grid
    Drop {
        layout: Layout,
        #[serde(default)]
        placeholder: Option<LayoutItem>,
        #[serde(default)]
        payload: DragPayload,
    },
    /// An external drag is hovering over the grid
    DragOver(DragPayload),
}

/// Viewport geometry changes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportMsg {
    /// The window (and so the grid container) was resized
    Resize {
        width: u32,
        #[serde(default)]
        height: Option<u32>,
    },
}

/// User actions from the dashboard header and widget menus
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardMsg {
    AddWidget(WidgetType),
    DeleteWidget(String),
    ResetLayout,
}

/// Layout persistence timer events
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreMsg {
    /// Debounce timer fired for the save stamped with `revision`
    PersistReady { revision: u64 },
}

/// Why widget data was fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchPurpose {
    /// First load, reconciled against the stored layout
    InitialSync,
    /// Reset to the default dashboard
    Reset,
}

/// Widget data collaborator events
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetsMsg {
    /// A bulk fetch of default widget data completed
    Loaded {
        data: BTreeMap<String, WidgetData>,
        purpose: FetchPurpose,
    },
    /// A widget changed its own settings; merged into its record
    SettingsChanged {
        id: String,
        settings: Map<String, Value>,
    },
}

/// Application lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppMsg {
    /// The dashboard is going away; pending timers must not write
    Teardown,
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Msg {
    Grid(GridMsg),
    Viewport(ViewportMsg),
    Dashboard(DashboardMsg),
    Store(StoreMsg),
    Widgets(WidgetsMsg),
    App(AppMsg),
}
