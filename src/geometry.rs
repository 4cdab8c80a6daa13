//! Responsive grid geometry
//!
//! Pure functions mapping the viewport to grid parameters: column count,
//! cell margin and row height. Nothing here holds state.

/// Widest column count the dashboard ever uses
pub const MAX_COLS: u32 = 12;

/// Column count used when the viewport is narrower than every breakpoint
pub const MIN_COLS: u32 = 4;

/// Number of rows the grid fits into the container height
pub const GRID_ROWS: u32 = 12;

/// Lower bound for a computed row height (pixels)
pub const MIN_ROW_HEIGHT: u32 = 30;

/// Viewports narrower than this get the small margin
pub const SMALL_MARGIN_BELOW: u32 = 600;

/// A viewport width threshold and the column count it unlocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    pub min_width: u32,
    pub cols: u32,
}

/// Breakpoint table, highest threshold first
pub const BREAKPOINTS: [Breakpoint; 4] = [
    Breakpoint {
        min_width: 1200,
        cols: 12,
    },
    Breakpoint {
        min_width: 900,
        cols: 8,
    },
    Breakpoint {
        min_width: 600,
        cols: 6,
    },
    Breakpoint {
        min_width: 0,
        cols: MIN_COLS,
    },
];

/// Horizontal and vertical gap between grid cells (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margin {
    pub x: u32,
    pub y: u32,
}

impl Margin {
    pub const SMALL: Margin = Margin { x: 4, y: 4 };
    pub const LARGE: Margin = Margin { x: 6, y: 6 };
}

/// Resolve the column count for a viewport width
///
/// First breakpoint (highest threshold first) whose `min_width` the width
/// reaches wins.
pub fn resolve_cols(viewport_width: u32) -> u32 {
    BREAKPOINTS
        .iter()
        .find(|bp| viewport_width >= bp.min_width)
        .map(|bp| bp.cols)
        .unwrap_or(MIN_COLS)
}

/// Two-tier margin selection keyed on a single width threshold
pub fn margin_for(viewport_width: u32) -> Margin {
    if viewport_width < SMALL_MARGIN_BELOW {
        Margin::SMALL
    } else {
        Margin::LARGE
    }
}

/// Row height that fits `GRID_ROWS` rows plus margins into the container
pub fn row_height(container_height: u32, margin: Margin) -> u32 {
    let gaps = margin.y * (GRID_ROWS + 1);
    (container_height.saturating_sub(gaps) / GRID_ROWS).max(MIN_ROW_HEIGHT)
}
