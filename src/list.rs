//! The growing list of palettes shown to the user.

use std::ops::Range;
use crate::palette::Palette;

/// Palettes in the order they were fetched.
///
/// Pages are only ever appended; the whole list may be replaced but
/// rows are never removed or reordered.  Merging requires `&mut`, so a
/// single owner serializes pages.
///
/// The list also counts the API rows it has consumed.  Records that
/// could not be decoded still take up a row, so that count may run
/// ahead of [`len`](Self::len).
#[derive(Debug, Clone, Default)]
pub struct PaletteList {
    palettes: Vec<Palette>,
    rows: usize,
}

impl PaletteList {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.palettes.len() }

    pub fn is_empty(&self) -> bool { self.palettes.is_empty() }

    pub fn get(&self, row: usize) -> Option<&Palette> { self.palettes.get(row) }

    pub fn iter(&self) -> std::slice::Iter<'_, Palette> { self.palettes.iter() }

    pub fn as_slice(&self) -> &[Palette] { &self.palettes }

    /// Number of API rows consumed so far.
    pub fn rows_consumed(&self) -> usize { self.rows }

    /// API rows to request next, `batch` of them after the last one
    /// consumed.
    pub fn next_range(&self, batch: usize) -> Range<usize> {
        self.rows .. self.rows + batch
    }

    /// Append a fetched page and return the list rows it now occupies.
    pub fn apply_page(&mut self, page: Vec<Palette>) -> Range<usize> {
        let rows = page.len();
        self.apply_rows(page, rows)
    }

    /// Append the palettes decoded from `rows` API rows.
    pub fn apply_rows(&mut self, page: Vec<Palette>,
                      rows: usize) -> Range<usize> {
        let start = self.palettes.len();
        self.rows += rows.max(page.len());
        self.palettes.extend(page);
        start .. self.palettes.len()
    }

    /// Drop every row in favor of `palettes`.
    pub fn replace(&mut self, palettes: Vec<Palette>) {
        self.rows = palettes.len();
        self.palettes = palettes;
    }

    /// Row of the first palette with this id.
    pub fn position(&self, id: i64) -> Option<usize> {
        self.palettes.iter().position(|p| p.id() == id)
    }
}

impl<'a> IntoIterator for &'a PaletteList {
    type Item = &'a Palette;
    type IntoIter = std::slice::Iter<'a, Palette>;

    fn into_iter(self) -> Self::IntoIter { self.palettes.iter() }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn palette(id: i64) -> Palette {
        Palette::from_json(&json!({
            "id": id, "title": format!("#{id}"), "colors": ["000", "fff"],
            "dateCreated": "2015-08-14 09:00:00" })).unwrap()
    }

    #[test]
    fn pages_are_appended_in_order() {
        let mut list = PaletteList::new();
        assert_eq!(list.next_range(20), 0 .. 20);
        assert_eq!(list.apply_page(vec![palette(1), palette(2)]), 0 .. 2);
        assert_eq!(list.apply_page(vec![palette(3)]), 2 .. 3);
        assert_eq!(list.next_range(20), 3 .. 23);
        let ids: Vec<_> = list.iter().map(Palette::id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(list.position(3), Some(2));
        assert_eq!(list.get(1).map(Palette::title), Some("#2"));
    }

    #[test]
    fn empty_page_changes_nothing() {
        let mut list = PaletteList::new();
        list.apply_page(vec![palette(1)]);
        assert!(list.apply_page(Vec::new()).is_empty());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn dropped_records_still_count_as_rows() {
        let mut list = PaletteList::new();
        assert_eq!(list.apply_rows(vec![palette(10), palette(12)], 3), 0 .. 2);
        assert_eq!(list.len(), 2);
        assert_eq!(list.rows_consumed(), 3);
        assert_eq!(list.next_range(3), 3 .. 6);
        list.apply_rows(vec![palette(13), palette(14)], 2);
        let ids: Vec<_> = list.iter().map(Palette::id).collect();
        assert_eq!(ids, vec![10, 12, 13, 14]);
        assert_eq!(list.next_range(3), 5 .. 8);
    }

    #[test]
    fn replace_starts_over() {
        let mut list = PaletteList::new();
        list.apply_page(vec![palette(1), palette(2)]);
        list.replace(vec![palette(9)]);
        assert_eq!(list.as_slice(), &[palette(9)]);
        assert_eq!(list.position(1), None);
        assert_eq!(list.next_range(5), 1 .. 6);
    }
}
