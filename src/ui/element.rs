//! Clickable elements and the screen regions they were drawn into.

use ratatui::layout::Rect;

/// Every interactive element the renderer can draw. Item-level ids carry the
/// item's index in the active list, menu ids the list index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    MenuEntry(usize),
    AddListButton,
    RemoveListButton(usize),
    ListName,
    ItemChecked(usize),
    ItemHandle(usize),
    ItemQuantity(usize),
    ItemName(usize),
    RemoveItemButton(usize),
    AddItemButton,
    ExportButton,
    ImportButton,
    SettingsButton,
}

impl ElementId {
    /// Item index for ids that belong to an item row.
    pub fn item_index(&self) -> Option<usize> {
        match *self {
            Self::ItemChecked(idx)
            | Self::ItemHandle(idx)
            | Self::ItemQuantity(idx)
            | Self::ItemName(idx)
            | Self::RemoveItemButton(idx) => Some(idx),
            _ => None,
        }
    }
}

/// Regions registered during the last draw, in drawing order.
///
/// Lookups scan from the most recently registered region so elements drawn on
/// top (row buttons over the row cell) win.
#[derive(Debug, Default, Clone)]
pub struct HitMap {
    regions: Vec<(Rect, ElementId)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, area: Rect, id: ElementId) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, id));
        }
    }

    /// Topmost element under the terminal cell `(column, row)`.
    pub fn hit(&self, column: u16, row: u16) -> Option<(ElementId, Rect)> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| contains(*area, column, row))
            .map(|(area, id)| (*id, *area))
    }

    /// Region of the item cell `idx`, the area drag midpoints are measured on.
    pub fn item_cell(&self, idx: usize) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(_, id)| *id == ElementId::ItemName(idx))
            .map(|(area, _)| *area)
    }

    /// Ids in drawing order.
    pub fn ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.regions.iter().map(|(_, id)| *id)
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_regions_shadow_earlier_ones() {
        let mut map = HitMap::new();
        map.register(Rect::new(0, 0, 20, 3), ElementId::ItemName(0));
        map.register(Rect::new(16, 0, 3, 1), ElementId::RemoveItemButton(0));
        assert_eq!(
            map.hit(17, 0).map(|(id, _)| id),
            Some(ElementId::RemoveItemButton(0))
        );
        assert_eq!(map.hit(2, 1).map(|(id, _)| id), Some(ElementId::ItemName(0)));
        assert_eq!(map.hit(20, 0), None);
    }

    #[test]
    fn empty_regions_are_ignored() {
        let mut map = HitMap::new();
        map.register(Rect::new(0, 0, 0, 3), ElementId::AddItemButton);
        assert_eq!(map.ids().count(), 0);
    }

    #[test]
    fn item_index_only_for_rows() {
        assert_eq!(ElementId::ItemQuantity(4).item_index(), Some(4));
        assert_eq!(ElementId::MenuEntry(4).item_index(), None);
    }
}
