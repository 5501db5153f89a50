//! Section boundary resolution.
//!
//! Boundaries are measured fresh every pulse: layout may have changed under
//! us, so nothing here is cached between pulses. Each boundary remembers the
//! position of its section in the caller-supplied order, which is the
//! identity reported to consumers regardless of where sorting puts it.

use crate::error::{Result, WatchError};
use crate::geometry::{element_y, Geometry, Scroller, Span};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// Measured extent of one section in scroller coordinates.
pub struct SectionBounds {
    /// Position of the section in the caller-supplied order.
    pub index: usize,
    /// Top edge.
    pub top: i64,
    /// Bottom edge.
    pub bottom: i64,
}

impl SectionBounds {
    #[must_use]
    /// Measured height.
    pub fn height(self) -> i64 {
        self.bottom - self.top
    }

    #[must_use]
    /// The boundary as a closed interval.
    pub fn span(self) -> Span {
        Span {
            top: self.top,
            bottom: self.bottom,
        }
    }
}

/// Measure all sections and sort them by top edge.
///
/// The sort is stable, so sections measured with equal tops keep their
/// relative input order. With `clamp` set, each boundary's bottom is forced
/// to end one unit above the next boundary's top (the last keeps its
/// measured bottom), partitioning the scrollable space without gaps so the
/// closest-section fallback only remains reachable above the first section.
///
/// # Errors
///
/// [`WatchError::DegenerateSection`] when a section measures with zero or
/// negative height.
pub fn resolve_bounds<G: Geometry>(
    geo: &G,
    sections: &[G::Elem],
    scroller: Scroller<G::Elem>,
    clamp: bool,
) -> Result<Vec<SectionBounds>> {
    let mut bounds = Vec::with_capacity(sections.len());

    for (index, &section) in sections.iter().enumerate() {
        let top = element_y(geo, section, scroller);
        let height = geo.offset_height(section);
        if height <= 0 {
            return Err(WatchError::DegenerateSection { index });
        }
        bounds.push(SectionBounds {
            index,
            top,
            bottom: top + height,
        });
    }

    bounds.sort_by_key(|b| b.top);

    if clamp {
        for i in 0..bounds.len().saturating_sub(1) {
            bounds[i].bottom = bounds[i + 1].top - 1;
        }
    }

    Ok(bounds)
}

#[cfg(test)]
#[path = "tests/bounds.rs"]
mod tests;
