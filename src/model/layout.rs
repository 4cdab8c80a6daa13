//! Grid layout items and layouts
//!
//! Coordinates and footprints are in grid cells, origin top-left. The JSON
//! form keeps the short field names (`i`, `minW`, `minH`) already present in
//! persisted layouts.

use serde::{Deserialize, Serialize};

use crate::registry::Size;

/// One placed widget instance
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutItem {
    /// Widget instance id, the join key to widget data
    #[serde(rename = "i")]
    pub id: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    #[serde(rename = "minW", default)]
    pub min_w: u32,
    #[serde(rename = "minH", default)]
    pub min_h: u32,
}

impl LayoutItem {
    pub fn new(id: impl Into<String>, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            w,
            h,
            min_w: 0,
            min_h: 0,
        }
    }

    /// Builder: set the minimum footprint
    pub fn with_min(mut self, min: Size) -> Self {
        self.min_w = min.w;
        self.min_h = min.h;
        self
    }

    /// Exclusive right edge
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.w
    }

    /// Exclusive bottom edge
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }

    /// Strict overlap of `[x, x+w) × [y, y+h)` with this item's rectangle
    #[inline]
    pub fn overlaps_rect(&self, x: u32, y: u32, w: u32, h: u32) -> bool {
        x < self.right() && x + w > self.x && y < self.bottom() && y + h > self.y
    }

    pub fn overlaps(&self, other: &LayoutItem) -> bool {
        self.overlaps_rect(other.x, other.y, other.w, other.h)
    }

    /// Same position and footprint (constraints are not compared)
    pub fn same_geometry(&self, other: &LayoutItem) -> bool {
        self.x == other.x && self.y == other.y && self.w == other.w && self.h == other.h
    }
}

/// A set of layout items keyed by id
///
/// Ids are unique. A repeated id keeps the last item carrying it, the same
/// rule `push` applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<LayoutItem>", into = "Vec<LayoutItem>")]
pub struct Layout {
    items: Vec<LayoutItem>,
}

impl Layout {
    pub fn new(items: Vec<LayoutItem>) -> Self {
        let mut layout = Self {
            items: Vec::with_capacity(items.len()),
        };
        for item in items {
            layout.push(item);
        }
        layout
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LayoutItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&LayoutItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut LayoutItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.id.as_str())
    }

    /// Append an item, replacing any existing item with the same id
    pub fn push(&mut self, item: LayoutItem) {
        self.items.retain(|existing| existing.id != item.id);
        self.items.push(item);
    }

    /// Remove the item with `id`, returning whether anything was removed
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Lowest occupied row boundary (0 for an empty layout)
    pub fn max_bottom(&self) -> u32 {
        self.items.iter().map(LayoutItem::bottom).max().unwrap_or(0)
    }

    /// Same id set, and every item has the same `x, y, w, h`
    pub fn same_geometry(&self, other: &Layout) -> bool {
        self.len() == other.len()
            && self.items.iter().all(|item| {
                other
                    .get(&item.id)
                    .is_some_and(|prev| prev.same_geometry(item))
            })
    }

    /// Pairs of ids whose rectangles overlap
    pub fn find_overlaps(&self) -> Vec<(&str, &str)> {
        let mut pairs = Vec::new();
        for (i, a) in self.items.iter().enumerate() {
            for b in &self.items[i + 1..] {
                if a.overlaps(b) {
                    pairs.push((a.id.as_str(), b.id.as_str()));
                }
            }
        }
        pairs
    }
}

impl From<Vec<LayoutItem>> for Layout {
    fn from(items: Vec<LayoutItem>) -> Self {
        Self::new(items)
    }
}

impl From<Layout> for Vec<LayoutItem> {
    fn from(layout: Layout) -> Self {
        layout.items
    }
}

impl FromIterator<LayoutItem> for Layout {
    fn from_iter<I: IntoIterator<Item = LayoutItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Layout {
    type Item = &'a LayoutItem;
    type IntoIter = std::slice::Iter<'a, LayoutItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
