//! External drag-and-drop of new widgets onto the grid
//!
//! The drag source writes the widget type into the payload twice: as
//! `text/plain` data, read on drop, and as the name of an empty
//! `application/x-widget-<type>` entry. Entry names are visible while
//! hovering (data is not), which is what lets the grid size its drop preview
//! before release.

use std::collections::BTreeMap;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::model::layout::{Layout, LayoutItem};
use crate::model::widgets::WidgetStore;
use crate::registry::{Size, WidgetType};

pub const TEXT_PLAIN: &str = "text/plain";
pub const WIDGET_MIME_PREFIX: &str = "application/x-widget-";

/// Footprint the engine uses for its placeholder when no preview is known
pub const DEFAULT_DROP_SIZE: Size = Size::new(4, 4);

/// Data carried by a drag gesture, keyed by MIME type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DragPayload {
    entries: BTreeMap<String, String>,
}

impl DragPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Payload a widget card in the add-widget panel produces
    pub fn for_widget(widget_type: WidgetType) -> Self {
        let mut payload = Self::new();
        payload.set_data(TEXT_PLAIN, widget_type.as_str());
        payload.set_data(&format!("{}{}", WIDGET_MIME_PREFIX, widget_type), "");
        payload
    }

    pub fn set_data(&mut self, mime: &str, data: &str) {
        self.entries.insert(mime.to_string(), data.to_string());
    }

    pub fn get_data(&self, mime: &str) -> Option<&str> {
        self.entries.get(mime).map(String::as_str)
    }

    /// Entry names, the only part visible during drag-over
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Widget type named by the `text/plain` entry, if any
    pub fn text(&self) -> Option<&str> {
        self.get_data(TEXT_PLAIN).filter(|s| !s.is_empty())
    }

    /// Widget type announced by the auxiliary entry name
    pub fn preview_type(&self) -> Option<WidgetType> {
        self.types()
            .find_map(|mime| mime.strip_prefix(WIDGET_MIME_PREFIX))
            .and_then(|name| name.parse().ok())
    }
}

/// Strictly increasing id source for new widget instances
///
/// Seeded from wall-clock milliseconds so ids minted in this process never
/// collide with ids minted by earlier runs and still present in storage.
#[derive(Debug, Clone)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    pub fn starting_at(seed: u64) -> Self {
        Self { last: seed }
    }

    pub fn seeded_from_clock() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(0))
            .unwrap_or(0);
        Self::starting_at(millis)
    }

    /// Mint `<type>-<n>` with a fresh `n`
    pub fn next_id(&mut self, widget_type: WidgetType) -> String {
        self.last = self.last.wrapping_add(1);
        format!("{}-{}", widget_type, self.last)
    }
}

/// Why a drop produced no widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropRejection {
    /// The payload carries no widget type
    MissingType,
    /// The payload names a type the registry does not know
    UnknownType(String),
    /// A single-instance type that already has an instance
    AlreadyPresent(WidgetType),
    /// The engine supplied no placeholder item
    NoPlaceholder,
    /// The placeholder is absent from the drop-time layout
    PlaceholderNotInLayout(String),
}

impl fmt::Display for DropRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingType => write!(f, "drop payload has no widget type"),
            Self::UnknownType(name) => write!(f, "unknown widget type '{}'", name),
            Self::AlreadyPresent(t) => write!(f, "only one {} widget is allowed", t),
            Self::NoPlaceholder => write!(f, "engine supplied no drop placeholder"),
            Self::PlaceholderNotInLayout(id) => {
                write!(f, "placeholder '{}' not found in drop layout", id)
            }
        }
    }
}

/// A validated drop, ready to be applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedDrop {
    pub widget_type: WidgetType,
    pub item: LayoutItem,
}

/// Whether a drag of `widget_type` may start given the widgets present
pub fn can_start_drag(widget_type: WidgetType, widgets: &WidgetStore) -> bool {
    widget_type.config().allow_multiple || !widgets.has_type(widget_type)
}

/// Preview footprint while hovering, `None` if the payload is not ours
pub fn drag_over_footprint(payload: &DragPayload, cols: u32) -> Option<Size> {
    let config = payload.preview_type()?.config();
    Some(Size::new(config.default_size.w.min(cols), config.default_size.h))
}

/// Placeholder footprint the engine falls back to
pub fn default_drop_size(cols: u32) -> Size {
    Size::new(DEFAULT_DROP_SIZE.w.min(cols), DEFAULT_DROP_SIZE.h)
}

/// Validate a drop and build the new item
///
/// The item sits where the placeholder was reported in `drop_layout` but
/// uses the type's default footprint; the placeholder's own size may already
/// have been squeezed by the engine's compaction. No id is consumed unless
/// the drop is accepted.
pub fn plan_drop(
    payload: &DragPayload,
    drop_layout: &Layout,
    placeholder: Option<&LayoutItem>,
    widgets: &WidgetStore,
    ids: &mut IdSequence,
) -> Result<PlannedDrop, DropRejection> {
    let name = payload.text().ok_or(DropRejection::MissingType)?;
    let widget_type: WidgetType = name
        .parse()
        .map_err(|_| DropRejection::UnknownType(name.to_string()))?;

    if !can_start_drag(widget_type, widgets) {
        return Err(DropRejection::AlreadyPresent(widget_type));
    }

    let placeholder = placeholder.ok_or(DropRejection::NoPlaceholder)?;
    let dropped_at = drop_layout
        .get(&placeholder.id)
        .ok_or_else(|| DropRejection::PlaceholderNotInLayout(placeholder.id.clone()))?;

    let config = widget_type.config();
    let item = LayoutItem::new(
        ids.next_id(widget_type),
        dropped_at.x,
        dropped_at.y,
        config.default_size.w,
        config.default_size.h,
    )
    .with_min(config.min_size);

    Ok(PlannedDrop { widget_type, item })
}
