use std::ops::Range;

use thiserror::Error;

use crate::app::selection::DeviceSelection;

pub const DEFAULT_PAGE_SIZES: &[usize] = &[10, 20, 50, 100];
pub const DEFAULT_PER_PAGE: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceListError {
    #[error("Page size {size} is not one of {allowed:?}")]
    InvalidPageSize { size: usize, allowed: Vec<usize> },
}

/// Pagination and selection of the device table. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceListState {
    page: usize,
    per_page: usize,
    total: usize,
    pub selection: DeviceSelection,
    page_sizes: Vec<usize>,
}

impl Default for DeviceListState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZES.to_vec(), DEFAULT_PER_PAGE)
    }
}

impl DeviceListState {
    pub fn new(page_sizes: Vec<usize>, per_page: usize) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
            total: 0,
            selection: DeviceSelection::new(),
            page_sizes,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn page_sizes(&self) -> &[usize] {
        &self.page_sizes
    }

    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.per_page).max(1)
    }

    /// Absolute row positions shown on the current page.
    pub fn row_range(&self) -> Range<usize> {
        let start = self
            .page
            .saturating_sub(1)
            .saturating_mul(self.per_page)
            .min(self.total);
        let end = (start + self.per_page).min(self.total);
        start..end
    }

    pub fn page_len(&self) -> usize {
        self.row_range().len()
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.page_count()
    }

    pub fn has_prev_page(&self) -> bool {
        self.page > 1
    }

    /// Moves to `page` (clamped into range). The selection only refers to rows
    /// of the page it was made on, so it is cleared. Returns whether the page
    /// changed.
    pub fn set_page(&mut self, page: usize) -> bool {
        let page = page.clamp(1, self.page_count());
        self.selection.clear();
        if page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    pub fn set_per_page(&mut self, per_page: usize) -> Result<(), DeviceListError> {
        if !self.page_sizes.contains(&per_page) {
            return Err(DeviceListError::InvalidPageSize {
                size: per_page,
                allowed: self.page_sizes.clone(),
            });
        }
        self.per_page = per_page;
        self.page = 1;
        self.selection.clear();
        Ok(())
    }

    /// Updates the total reported by the backend and pulls the page back into
    /// range if the list shrank. Moving page clears the selection; staying on
    /// a shorter page drops the rows that no longer exist. Returns whether the
    /// selection changed.
    pub fn set_total(&mut self, total: usize) -> bool {
        self.total = total;
        let page = self.page.clamp(1, self.page_count());
        if page != self.page {
            self.page = page;
            let had_selection = !self.selection.is_empty();
            self.selection.clear();
            return had_selection;
        }
        let page_len = self.page_len();
        self.selection.retain_below(page_len)
    }
}
