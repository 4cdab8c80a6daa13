//! Application model - the complete state of the dashboard
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod layout;
pub mod widgets;

pub use layout::{Layout, LayoutItem};
pub use widgets::{TabData, WidgetData, WidgetStore};

use crate::classifier::InteractionClassifier;
use crate::config::DashboardConfig;
use crate::drop_target::IdSequence;
use crate::enrich::enrich_layout;
use crate::geometry::{self, Margin};
use crate::placement::default_layout;
use crate::registry::Size;
use crate::store::{LayoutStore, Storage};

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Canonical layout and its persistence
    pub store: LayoutStore,
    /// Business data for every widget instance
    pub widgets: WidgetStore,
    /// Decides which engine reports are user edits
    pub classifier: InteractionClassifier,
    /// Id source shared by add and drop
    pub ids: IdSequence,
    pub config: DashboardConfig,
    /// Viewport width in pixels
    pub viewport_width: u32,
    /// Grid container height in pixels
    pub container_height: u32,
    /// Active column count, derived from `viewport_width`
    pub cols: u32,
    /// Set once the initial widget data sync completed; rendering waits for it
    pub data_loaded: bool,
    /// Footprint of the external drag currently hovering, if recognised
    pub drop_preview: Option<Size>,
    /// Last user-facing refusal (drop, add or delete)
    pub status_message: Option<String>,
}

impl AppModel {
    /// Create a model over `storage` using the viewport from `config`
    pub fn new(config: DashboardConfig, storage: Box<dyn Storage>, ids: IdSequence) -> Self {
        let store = LayoutStore::open(
            storage,
            config.storage_key.clone(),
            default_layout(),
            config.save_debounce_ms,
        );
        let viewport_width = config.viewport_width;
        let container_height = config.container_height;
        let cols = geometry::resolve_cols(viewport_width);

        tracing::debug!(
            "Model created: viewport {}px, {} cols, {} items",
            viewport_width,
            cols,
            store.layout().len()
        );

        Self {
            store,
            widgets: WidgetStore::new(),
            classifier: InteractionClassifier::new(cols),
            ids,
            config,
            viewport_width,
            container_height,
            cols,
            data_loaded: false,
            drop_preview: None,
            status_message: None,
        }
    }

    /// The canonical layout
    pub fn layout(&self) -> &Layout {
        self.store.layout()
    }

    /// What the grid engine is shown on this render
    pub fn enriched_layout(&self) -> Layout {
        enrich_layout(
            self.store.layout(),
            &self.widgets,
            self.cols,
            self.config.full_width_max_cols,
        )
    }

    pub fn margin(&self) -> Margin {
        geometry::margin_for(self.viewport_width)
    }

    /// Row height in pixels for the current container
    pub fn row_height(&self) -> u32 {
        geometry::row_height(self.container_height, self.margin())
    }

    /// Whether the grid may be rendered yet
    pub fn is_ready(&self) -> bool {
        self.data_loaded
    }
}
