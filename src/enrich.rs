//! Render-time projection of the canonical layout
//!
//! The engine is shown an enriched copy on every render: constraints
//! re-attached from the registry and geometry clamped to the live column
//! count. Nothing here is written back to the store.

use crate::model::layout::{Layout, LayoutItem};
use crate::model::widgets::WidgetStore;

/// At or below this column count every widget spans the full grid width
pub const FULL_WIDTH_MAX_COLS: u32 = 6;

/// Project `layout` for a grid of `cols` columns
pub fn enrich_layout(
    layout: &Layout,
    widgets: &WidgetStore,
    cols: u32,
    full_width_max_cols: u32,
) -> Layout {
    let cols = cols.max(1);
    let full_width = cols <= full_width_max_cols;

    layout
        .iter()
        .map(|item| {
            if full_width {
                full_width_item(item, widgets, cols)
            } else {
                clamped_item(item, widgets, cols)
            }
        })
        .collect()
}

fn full_width_item(item: &LayoutItem, widgets: &WidgetStore, cols: u32) -> LayoutItem {
    let min_h = widgets
        .get(&item.id)
        .map(|w| w.widget_type.config().min_size.h)
        .unwrap_or(item.min_h);

    LayoutItem {
        x: 0,
        w: cols,
        min_w: cols,
        min_h,
        h: item.h.max(min_h),
        ..item.clone()
    }
}

fn clamped_item(item: &LayoutItem, widgets: &WidgetStore, cols: u32) -> LayoutItem {
    let Some(record) = widgets.get(&item.id) else {
        let w = item.w.min(cols);
        return LayoutItem {
            w,
            x: item.x.min(cols - w),
            ..item.clone()
        };
    };

    let min = record.widget_type.config().min_size;
    let min_w = min.w.min(cols);
    let w = item.w.clamp(min_w, cols);

    LayoutItem {
        min_w,
        min_h: min.h,
        w,
        h: item.h.max(min.h),
        x: item.x.min(cols - w),
        ..item.clone()
    }
}
