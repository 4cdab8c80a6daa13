//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod dashboard;
mod grid;
mod store;
mod viewport;
mod widgets;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::LayoutSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use dashboard::{update_dashboard, ActionRejection};
pub use grid::update_grid;
pub use store::update_store;
pub use viewport::update_viewport;
pub use widgets::{reconcile_widgets, update_widgets};

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Grid(m) => grid::update_grid(model, m),
        Msg::Viewport(m) => viewport::update_viewport(model, m),
        Msg::Dashboard(m) => dashboard::update_dashboard(model, m),
        Msg::Store(m) => store::update_store(model, m),
        Msg::Widgets(m) => widgets::update_widgets(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Update with tracing instrumentation (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    // Hover events arrive continuously while dragging
    let is_noisy = matches!(&msg, Msg::Grid(crate::messages::GridMsg::DragOver(_)));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = LayoutSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = LayoutSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "layout", %diff, "state changed");
    }

    let overlaps = model.layout().find_overlaps();
    if !overlaps.is_empty() {
        debug!(target: "layout", ?overlaps, msg = %msg_name, "canonical layout has overlapping items");
    }

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Grid::DragStart`
/// - `Dashboard::AddWidget(Chat)`
/// - `Viewport::Resize { width: 800, height: None }`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Grid(crate::messages::GridMsg::LayoutChanged(layout)) => {
            format!("Grid::LayoutChanged({} items)", layout.len())
        }
        Msg::Grid(crate::messages::GridMsg::Drop { payload, .. }) => {
            format!("Grid::Drop({:?})", payload.text())
        }
        Msg::Grid(m) => format!("Grid::{:?}", m),
        Msg::Viewport(m) => format!("Viewport::{:?}", m),
        Msg::Dashboard(m) => format!("Dashboard::{:?}", m),
        Msg::Store(m) => format!("Store::{:?}", m),
        Msg::Widgets(crate::messages::WidgetsMsg::Loaded { data, purpose }) => {
            format!("Widgets::Loaded({} records, {:?})", data.len(), purpose)
        }
        Msg::Widgets(crate::messages::WidgetsMsg::SettingsChanged { id, settings }) => {
            format!("Widgets::SettingsChanged({}, {} keys)", id, settings.len())
        }
        Msg::App(m) => format!("App::{:?}", m),
    }
}
