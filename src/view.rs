//! Text rendering of the dashboard grid
//!
//! Draws what the grid engine would be shown: the enriched layout at the
//! active column count, one character per grid cell.

use std::fmt::Write;

use crate::model::layout::Layout;
use crate::model::AppModel;

/// Marker for cells claimed by more than one item
const OVERLAP: char = '#';
const EMPTY: char = '.';

/// Cell glyph for the item at `index`
fn glyph(index: usize) -> char {
    const GLYPHS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    char::from(GLYPHS[index % GLYPHS.len()])
}

/// Character grid of `layout` in a grid `cols` wide
pub fn render_cells(layout: &Layout, cols: u32) -> Vec<String> {
    let cols = cols.max(1) as usize;
    let rows = layout.max_bottom() as usize;
    let mut cells = vec![vec![EMPTY; cols]; rows];

    for (index, item) in layout.iter().enumerate() {
        for row in cells.iter_mut().skip(item.y as usize).take(item.h as usize) {
            for cell in row.iter_mut().skip(item.x as usize).take(item.w as usize) {
                *cell = if *cell == EMPTY { glyph(index) } else { OVERLAP };
            }
        }
    }

    cells.into_iter().map(|row| row.into_iter().collect()).collect()
}

/// Full text view: header, grid and legend
pub fn render(model: &AppModel) -> String {
    let mut out = String::new();

    if !model.is_ready() {
        out.push_str("(loading widget data)\n");
        return out;
    }

    let margin = model.margin();
    let _ = writeln!(
        out,
        "{}px wide, {} cols, margin {}x{}, row height {}px",
        model.viewport_width,
        model.cols,
        margin.x,
        margin.y,
        model.row_height()
    );

    let layout = model.enriched_layout();
    for line in render_cells(&layout, model.cols) {
        let _ = writeln!(out, "  {}", line);
    }

    out.push('\n');
    for (index, item) in layout.iter().enumerate() {
        let title = model
            .widgets
            .get(&item.id)
            .map(|w| w.title.as_str())
            .unwrap_or("?");
        let _ = writeln!(
            out,
            "  {} {:<28} {:<16} x={:<2} y={:<2} {}x{}",
            glyph(index),
            item.id,
            title,
            item.x,
            item.y,
            item.w,
            item.h
        );
    }

    if let Some(message) = &model.status_message {
        let _ = writeln!(out, "\n  ! {}", message);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::layout::LayoutItem;

    #[test]
    fn test_render_cells() {
        let layout = Layout::new(vec![
            LayoutItem::new("chat-1", 0, 0, 2, 1),
            LayoutItem::new("alert-1", 2, 0, 1, 2),
        ]);
        assert_eq!(render_cells(&layout, 4), vec!["AAB.", "..B."]);
    }

    #[test]
    fn test_render_cells_marks_overlap() {
        let layout = Layout::new(vec![
            LayoutItem::new("chat-1", 0, 0, 2, 1),
            LayoutItem::new("alert-1", 1, 0, 2, 1),
        ]);
        assert_eq!(render_cells(&layout, 4), vec!["A#B."]);
    }

    #[test]
    fn test_render_cells_empty_layout() {
        assert!(render_cells(&Layout::default(), 12).is_empty());
    }
}
