use serde::Serialize;

use crate::domain::DeviceId;

/// Rows checked for a bulk action on the current page.
///
/// Rows keep the order they were checked in; bulk-action payloads are built
/// in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DeviceSelection {
    rows: Vec<usize>,
}

impl DeviceSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a selection with `row` removed if present, appended otherwise.
    #[must_use]
    pub fn toggle(&self, row: usize) -> Self {
        let mut rows = self.rows.clone();
        match rows.iter().position(|&r| r == row) {
            Some(pos) => {
                rows.remove(pos);
            }
            None => rows.push(row),
        }
        Self { rows }
    }

    /// Header checkbox: clears a fully selected page, otherwise selects every
    /// row of it top to bottom.
    #[must_use]
    pub fn toggle_all(&self, page_len: usize) -> Self {
        if page_len > 0 && self.is_page_selected(page_len) {
            Self::new()
        } else {
            Self {
                rows: (0..page_len).collect(),
            }
        }
    }

    pub fn is_page_selected(&self, page_len: usize) -> bool {
        (0..page_len).all(|row| self.contains(row))
    }

    /// Some but not all rows of the page are checked.
    pub fn is_partial(&self, page_len: usize) -> bool {
        !self.is_empty() && !self.is_page_selected(page_len)
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Drops rows at or past `page_len`, e.g. after the page lost devices.
    /// Returns whether anything was dropped.
    pub fn retain_below(&mut self, page_len: usize) -> bool {
        let before = self.rows.len();
        self.rows.retain(|&row| row < page_len);
        self.rows.len() != before
    }

    pub fn contains(&self, row: usize) -> bool {
        self.rows.contains(&row)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Ids of the selected devices, in selection order. Rows without a device
    /// on this page are skipped.
    pub fn selected_ids(&self, page_ids: &[DeviceId]) -> Vec<DeviceId> {
        self.rows
            .iter()
            .filter_map(|&row| page_ids.get(row).cloned())
            .collect()
    }
}

impl FromIterator<usize> for DeviceSelection {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |selection, row| {
                if selection.contains(row) {
                    selection
                } else {
                    selection.toggle(row)
                }
            })
    }
}
