//! First-fit placement on the integer grid
//!
//! New items are placed by scanning rows top to bottom and columns left to
//! right for the first free rectangle. The default dashboard arrangement is
//! built by simple row packing.

use crate::geometry::MAX_COLS;
use crate::mock_data::DEFAULT_WIDGET_INSTANCES;
use crate::model::layout::{Layout, LayoutItem};
use crate::registry::{Size, WidgetType};

/// A grid cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPosition {
    pub x: u32,
    pub y: u32,
}

impl GridPosition {
    pub const ORIGIN: GridPosition = GridPosition { x: 0, y: 0 };
}

/// Find the first free `w × h` rectangle in `layout` for a grid of `cols`
///
/// `w` is narrowed to `cols`. Rows `0..=max_bottom` are scanned; row
/// `max_bottom` lies below every item, so a fit always exists there and the
/// `(0, max_bottom)` fallback is only reached for a grid with no columns.
pub fn find_available_position(layout: &Layout, w: u32, h: u32, cols: u32) -> GridPosition {
    let cols = cols.max(1);
    let w = w.min(cols);
    let max_y = layout.max_bottom();

    for y in 0..=max_y {
        for x in 0..=(cols - w) {
            let overlaps = layout.iter().any(|item| item.overlaps_rect(x, y, w, h));
            if !overlaps {
                return GridPosition { x, y };
            }
        }
    }

    GridPosition { x: 0, y: max_y }
}

/// Create a layout item for a new widget at the first free position
///
/// The stored footprint is the type's default size; narrowing to the live
/// column count happens at render time.
pub fn place_new_item(layout: &Layout, id: &str, widget_type: WidgetType, cols: u32) -> LayoutItem {
    let config = widget_type.config();
    let Size { w, h } = config.default_size;
    let pos = find_available_position(layout, w, h, cols);

    LayoutItem::new(id, pos.x, pos.y, w, h).with_min(config.min_size)
}

/// Row-pack the default widget set into a grid of `cols` columns
///
/// Items flow left to right and wrap to a new row (below the tallest item of
/// the finished row) when the next one would cross the right edge.
pub fn build_default_layout(cols: u32) -> Layout {
    let cols = cols.max(1);
    let mut items = Vec::with_capacity(DEFAULT_WIDGET_INSTANCES.len());
    let mut cursor_x = 0;
    let mut cursor_y = 0;
    let mut row_max_h = 0;

    for instance in DEFAULT_WIDGET_INSTANCES {
        let config = instance.widget_type.config();
        let w = config.default_size.w.min(cols);
        let h = config.default_size.h;
        let min = Size::new(config.min_size.w.min(cols), config.min_size.h);

        if cursor_x + w > cols {
            cursor_x = 0;
            cursor_y += row_max_h;
            row_max_h = 0;
        }

        items.push(LayoutItem::new(instance.id, cursor_x, cursor_y, w, h).with_min(min));

        cursor_x += w;
        row_max_h = row_max_h.max(h);
    }

    Layout::new(items)
}

/// Default layout at full width
pub fn default_layout() -> Layout {
    build_default_layout(MAX_COLS)
}
