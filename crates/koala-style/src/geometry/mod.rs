//! Approximate geometry: pixel widths, heights and offsets.
//!
//! There is no layout tree. Each quantity is computed on demand from the
//! cascade by recursing into parents (for percentage bases), children (for
//! content-driven sizes) and previous siblings (for flow offsets), with
//! heuristics standing in for text measurement. Results are memoized per
//! computed style for the life of the [`StyleContext`](crate::StyleContext).

mod box_model;
mod height;
mod percentage;
mod position;
mod width;

use std::cell::Cell;

use strum_macros::Display;

pub use box_model::EdgeSizes;
pub use percentage::PercentBasis;

use crate::computed::ComputedStyle;

#[cfg(feature = "geometry-trace")]
thread_local! {
    static GEOMETRY_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Direction of a scrollability query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

/// Memoized geometry of one computed style.
///
/// Each cell is written at most once; later writes from re-entrant
/// computation are discarded.
#[derive(Debug, Default)]
pub(crate) struct GeometryCache {
    pub(crate) width: Cell<Option<i32>>,
    pub(crate) height: Cell<Option<i32>>,
    pub(crate) empty_height: Cell<Option<i32>>,
    pub(crate) padding_horizontal: Cell<Option<i32>>,
    pub(crate) padding_vertical: Cell<Option<i32>>,
    pub(crate) border_horizontal: Cell<Option<i32>>,
    pub(crate) border_vertical: Cell<Option<i32>>,
    pub(crate) top: Cell<Option<i32>>,
}

impl ComputedStyle<'_> {
    /// Return the cached value in `cell`, computing and storing it first if
    /// needed.
    #[cfg_attr(not(feature = "geometry-trace"), allow(clippy::unused_self))]
    pub(crate) fn memoized(
        &self,
        cell: &Cell<Option<i32>>,
        label: &str,
        compute: impl FnOnce() -> i32,
    ) -> i32 {
        if let Some(value) = cell.get() {
            return value;
        }

        #[cfg(feature = "geometry-trace")]
        let depth = GEOMETRY_DEPTH.with(|d| {
            let current = d.get();
            d.set(current + 1);
            current
        });

        let value = compute();

        #[cfg(feature = "geometry-trace")]
        {
            GEOMETRY_DEPTH.with(|d| d.set(depth));
            eprintln!(
                "{:indent$}[GEOMETRY] {label} of {:?} ({}) = {value}",
                "",
                self.node(),
                self.kind().tag_name(),
                indent = depth * 2
            );
        }
        #[cfg(not(feature = "geometry-trace"))]
        let _ = label;

        match cell.get() {
            Some(existing) => existing,
            None => {
                cell.set(Some(value));
                value
            }
        }
    }
}
