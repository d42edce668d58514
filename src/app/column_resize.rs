//! Width redistribution for a dragged column boundary.
//!
//! Pure functions: the caller measures the rendered header cells, feeds the
//! pointer movement in on every drag tick and keeps the returned sizes as the
//! new column widths.

use tracing::debug;

use crate::domain::{ColumnHeader, SizedColumn};

pub const DEFAULT_MIN_COLUMN_WIDTH: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeConfig {
    /// No resized column ends up narrower than this.
    pub min_width: f64,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_COLUMN_WIDTH,
        }
    }
}

/// One pointer-move tick of a drag gesture.
#[derive(Debug, Clone, Copy)]
pub struct ResizeEvent<'a> {
    /// Rendered width of every header cell, left to right. Header `i` is
    /// measured at position `i`; cells past the last header are fixed.
    pub measured_widths: &'a [f64],
    pub pointer_x: f64,
    pub previous_pointer_x: f64,
    /// Boundary between header `index` and header `index + 1`.
    pub index: usize,
}

impl ResizeEvent<'_> {
    pub fn delta(&self) -> f64 {
        self.pointer_x - self.previous_pointer_x
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResizeOutcome<A> {
    /// One entry per header, in header order.
    pub columns: Vec<SizedColumn<A>>,
    /// Measured widths of the non-resizable cells after the last header.
    pub fixed_widths: Vec<f64>,
}

impl<A> ResizeOutcome<A> {
    pub fn sizes(&self) -> Vec<f64> {
        self.columns.iter().map(|c| c.size).collect()
    }
}

/// Amount moved from column `index + 1` to column `index`.
///
/// Positive grows the left column. The transfer is limited so that the
/// shrinking side stays at or above the floor; a side already at the floor
/// gives nothing.
fn clamped_transfer(left: f64, right: f64, delta: f64, min_width: f64) -> f64 {
    if delta >= 0.0 {
        delta.min((right - min_width).max(0.0))
    } else {
        delta.max(-(left - min_width).max(0.0))
    }
}

pub fn resize<A: Clone>(
    event: &ResizeEvent<'_>,
    headers: &[ColumnHeader<A>],
    config: &ResizeConfig,
) -> ResizeOutcome<A> {
    let widths = event.measured_widths;
    debug_assert!(
        widths.len() >= headers.len(),
        "every header needs a measured width"
    );

    let mut sizes: Vec<f64> = widths.iter().take(headers.len()).copied().collect();
    let index = event.index;

    // The rightmost header has no neighbour to take space from.
    if index + 1 < sizes.len() {
        let delta = event.delta();
        let transfer = clamped_transfer(sizes[index], sizes[index + 1], delta, config.min_width);
        if transfer != delta {
            debug!(
                index,
                delta,
                transfer,
                min_width = config.min_width,
                "column resize clamped at minimum width"
            );
        }
        sizes[index] += transfer;
        sizes[index + 1] -= transfer;
    }

    let columns = headers
        .iter()
        .zip(sizes)
        .map(|(header, size)| SizedColumn {
            attribute: header.attribute.clone(),
            size,
        })
        .collect();

    ResizeOutcome {
        columns,
        fixed_widths: widths.iter().skip(headers.len()).copied().collect(),
    }
}
