//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use gridboard::config::DashboardConfig;
use gridboard::drop_target::IdSequence;
use gridboard::messages::{FetchPurpose, Msg, WidgetsMsg};
use gridboard::mock_data::build_default_widgets_data;
use gridboard::model::{AppModel, Layout, LayoutItem};
use gridboard::store::MemoryStorage;
use gridboard::update::update;

/// Create a test model over `storage`, at the default 1280px viewport
///
/// Ids minted by the model start at 101 (`chat-101`, then `alert-102`, ...),
/// clear of the default instance ids.
pub fn test_model_with_storage(storage: &MemoryStorage) -> AppModel {
    AppModel::new(
        DashboardConfig::default(),
        Box::new(storage.clone()),
        IdSequence::starting_at(100),
    )
}

/// Create a test model over fresh memory storage
pub fn test_model() -> (AppModel, MemoryStorage) {
    let storage = MemoryStorage::new();
    (test_model_with_storage(&storage), storage)
}

/// Create a test model whose initial widget data sync already completed
pub fn loaded_model() -> (AppModel, MemoryStorage) {
    let (mut model, storage) = test_model();
    sync_widgets(&mut model);
    (model, storage)
}

/// Deliver the default widget data as the initial sync would
pub fn sync_widgets(model: &mut AppModel) {
    update(
        model,
        Msg::Widgets(WidgetsMsg::Loaded {
            data: build_default_widgets_data(),
            purpose: FetchPurpose::InitialSync,
        }),
    );
}

/// Shorthand for a layout item without constraints
pub fn item(id: &str, x: u32, y: u32, w: u32, h: u32) -> LayoutItem {
    LayoutItem::new(id, x, y, w, h)
}

/// `layout` with the item `id` moved to (`x`, `y`)
pub fn moved(layout: &Layout, id: &str, x: u32, y: u32) -> Layout {
    let mut next = layout.clone();
    if let Some(item) = next.get_mut(id) {
        item.x = x;
        item.y = y;
    }
    next
}

/// Assert no two items in `layout` share a cell
pub fn assert_no_overlaps(layout: &Layout) {
    let overlaps = layout.find_overlaps();
    assert!(overlaps.is_empty(), "Overlapping items: {:?}", overlaps);
}

/// Assert every item in `layout` lies within `cols` columns
pub fn assert_within_cols(layout: &Layout, cols: u32) {
    for item in layout {
        assert!(
            item.x + item.w <= cols,
            "{} spans columns {}..{} in a {}-column grid",
            item.id,
            item.x,
            item.x + item.w,
            cols
        );
    }
}
