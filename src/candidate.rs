//! Focus candidates and the overlap search that produces them.
//!
//! A candidate is one section's claim on the current view. Most pulses
//! produce them by straight interval intersection, but the extremes of
//! scroll travel get special treatment: fractional scrollbars and sub-pixel
//! rounding can leave the true first or last section just short of
//! overlapping, so within the sticky offsets the edge section is forced to
//! be the only candidate. When nothing overlaps and no sticky edge applies,
//! a single synthetic candidate stands in for the nearest section above.

use crate::bounds::SectionBounds;
use crate::geometry::Span;
use crate::view::View;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// One section's overlap with the current view.
pub struct Candidate<E> {
    /// Position of the section in the caller-supplied order.
    pub index: usize,
    /// Overlap with the view; `None` only on the synthetic closest-section
    /// candidate produced when nothing overlaps.
    pub intersection: Option<Span>,
    /// The section handle itself.
    pub section: E,
}

impl<E> Candidate<E> {
    #[must_use]
    /// Height of the overlap, `None` for the synthetic candidate.
    pub fn intersection_height(&self) -> Option<i64> {
        self.intersection.map(Span::height)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Resolved result passed to the focus callback.
///
/// Consumers match on the variant instead of inspecting payload shapes:
/// single-focus resolution modes always produce [`Focus::Single`], the
/// pass-through mode always produces [`Focus::Multiple`].
pub enum Focus<E> {
    /// The one section deemed active.
    Single(Candidate<E>),
    /// Every candidate, in ascending boundary order.
    Multiple(Vec<Candidate<E>>),
}

impl<E> Focus<E> {
    #[must_use]
    /// Index of the focused section, `None` in multi-focus mode.
    pub fn index(&self) -> Option<usize> {
        match self {
            Focus::Single(c) => Some(c.index),
            Focus::Multiple(_) => None,
        }
    }
}

/// Collect the sections competing for focus in the current view.
///
/// Forcing conditions are checked in order: near the end of scroll travel
/// the last boundary is the only candidate, near the beginning the first
/// is (`view.top - margin_top` undoes the margin to compare the raw scroll
/// offset). Otherwise every boundary overlapping the view joins, in
/// ascending boundary order. Forced candidates keep their real overlap,
/// which may legitimately be absent.
///
/// Expects `bounds` non-empty and sorted, as produced by
/// [`crate::bounds::resolve_bounds`].
#[must_use]
pub fn determine_candidates<E: Copy>(
    bounds: &[SectionBounds],
    sections: &[E],
    view: View,
    full_height: i64,
    margin_top: i64,
    sticky_top: i64,
    sticky_bottom: i64,
) -> Vec<Candidate<E>> {
    let window = view.span();

    if full_height - view.bottom < sticky_bottom {
        let last = bounds[bounds.len() - 1];
        return vec![overlap_candidate(last, window, sections)];
    }

    if view.top - margin_top < sticky_top {
        return vec![overlap_candidate(bounds[0], window, sections)];
    }

    let mut candidates: Vec<Candidate<E>> = bounds
        .iter()
        .filter_map(|b| {
            window.intersect(b.span()).map(|intersection| Candidate {
                index: b.index,
                intersection: Some(intersection),
                section: sections[b.index],
            })
        })
        .collect();

    if candidates.is_empty() {
        // Nearest section fully above the view; above all sections, the first.
        let closest = bounds
            .iter()
            .filter(|b| b.bottom < view.top)
            .max_by_key(|b| b.bottom)
            .unwrap_or(&bounds[0]);
        candidates.push(Candidate {
            index: closest.index,
            intersection: None,
            section: sections[closest.index],
        });
    }

    candidates
}

fn overlap_candidate<E: Copy>(bounds: SectionBounds, window: Span, sections: &[E]) -> Candidate<E> {
    Candidate {
        index: bounds.index,
        intersection: window.intersect(bounds.span()),
        section: sections[bounds.index],
    }
}

#[cfg(test)]
#[path = "tests/candidate.rs"]
mod tests;
