//! Geometry provider abstraction and interval math.
//!
//! The engine never measures layout itself. A [`Geometry`] implementation
//! answers, on demand, where an element sits relative to its positioning
//! ancestor, how tall it is, and what the scroll metrics of a scroller are.
//! Offsets are vertical pixels (or rows, or any integer unit the platform
//! measures in) and grow downwards.
//!
//! [`StaticGeometry`] is the batteries-included implementation: an explicit
//! node table that hosts without a live layout tree (and the test suite)
//! can fill in and hand to the watcher each pulse.

use crate::error::{Result, WatchError};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// Reference to the element whose scroll position drives recomputation.
pub enum Scroller<E> {
    /// The top-level viewport (the window, the terminal, the screen).
    Viewport,
    /// A scrollable element inside the layout.
    Elem(E),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// A closed vertical interval, `top <= bottom`.
pub struct Span {
    /// Upper edge, inclusive.
    pub top: i64,
    /// Lower edge, inclusive.
    pub bottom: i64,
}

impl Span {
    #[must_use]
    /// Extent of the interval.
    pub fn height(self) -> i64 {
        self.bottom - self.top
    }

    #[must_use]
    /// Intersection of two closed intervals, `None` when they are disjoint.
    ///
    /// Both intervals must already satisfy `top <= bottom`.
    pub fn intersect(self, other: Span) -> Option<Span> {
        if other.top > self.bottom || other.bottom < self.top {
            return None;
        }
        Some(Span {
            top: self.top.max(other.top),
            bottom: self.bottom.min(other.bottom),
        })
    }
}

/// Layout measurement primitives supplied by the platform.
///
/// `Elem` is an opaque, copyable element reference (a node id, an index, a
/// pointer-sized handle). The watcher re-queries everything through this
/// trait on every pulse, so implementations should answer from current
/// layout state rather than a stale snapshot.
pub trait Geometry {
    /// Opaque element reference.
    type Elem: Copy + Eq;

    /// Immediate positioning ancestor, `None` at the layout root.
    fn offset_parent(&self, elem: Self::Elem) -> Option<Self::Elem>;

    /// Offset of the element's top edge from its positioning ancestor.
    fn offset_top(&self, elem: Self::Elem) -> i64;

    /// Rendered height of the element's box.
    fn offset_height(&self, elem: Self::Elem) -> i64;

    /// Whether the element scrolls its content vertically.
    fn is_scroller(&self, elem: Self::Elem) -> bool;

    /// Current scroll offset of the scroller.
    fn scroll_top(&self, scroller: Scroller<Self::Elem>) -> i64;

    /// Height of the scroller's visible window.
    fn visible_height(&self, scroller: Scroller<Self::Elem>) -> i64;

    /// Total scrollable height of the scroller's content.
    fn full_height(&self, scroller: Scroller<Self::Elem>) -> i64;
}

#[must_use]
/// Y position of an element in the scroller's coordinate space.
///
/// Sums successive offset-parent hops starting at the element itself and
/// stopping before the scroller (the scroller's own offset never counts).
/// With a viewport scroller the walk runs all the way to the layout root.
pub fn element_y<G: Geometry>(geo: &G, elem: G::Elem, scroller: Scroller<G::Elem>) -> i64 {
    let stop = match scroller {
        Scroller::Viewport => None,
        Scroller::Elem(e) => Some(e),
    };

    let mut y = geo.offset_top(elem);
    let mut parent = geo.offset_parent(elem);
    while let Some(p) = parent {
        if Some(p) == stop {
            break;
        }
        y += geo.offset_top(p);
        parent = geo.offset_parent(p);
    }
    y
}

/// Determine the scroller from a section's positioning ancestors.
///
/// Walks up from the given section and picks the first ancestor with
/// vertical scroll overflow; reaching the layout root without finding one
/// falls back to the viewport.
///
/// # Errors
///
/// [`WatchError::ScrollerUndetermined`] when the section has no positioning
/// ancestor at all, which means it is not part of a measured layout.
pub fn guess_scroller<G: Geometry>(geo: &G, section: G::Elem) -> Result<Scroller<G::Elem>> {
    let Some(first) = geo.offset_parent(section) else {
        return Err(WatchError::ScrollerUndetermined);
    };

    let mut parent = Some(first);
    while let Some(p) = parent {
        if geo.is_scroller(p) {
            return Ok(Scroller::Elem(p));
        }
        parent = geo.offset_parent(p);
    }
    Ok(Scroller::Viewport)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
/// Scroll state of one scroller: offset, window height, content height.
pub struct ScrollMetrics {
    /// Current scroll offset.
    pub scroll_top: i64,
    /// Height of the visible window.
    pub visible_height: i64,
    /// Total scrollable content height.
    pub full_height: i64,
}

/// Explicit node-table [`Geometry`] for hosts without a live layout tree.
///
/// Elements are `usize` ids handed out by [`StaticGeometry::push_node`] and
/// [`StaticGeometry::push_scroller`] in insertion order. All accessors panic
/// on ids that were never handed out, and scroll accessors panic when asked
/// about an element that was not pushed as a scroller; both are programming
/// errors in the host, not recoverable conditions.
#[derive(Clone, Debug, Default)]
pub struct StaticGeometry {
    nodes: Vec<Node>,
    viewport: ScrollMetrics,
}

#[derive(Clone, Debug)]
struct Node {
    parent: Option<usize>,
    top: i64,
    height: i64,
    scroll: Option<ScrollMetrics>,
}

impl StaticGeometry {
    #[must_use]
    /// Empty table with the given viewport scroll metrics.
    pub fn with_viewport(viewport: ScrollMetrics) -> Self {
        StaticGeometry {
            nodes: Vec::new(),
            viewport,
        }
    }

    /// Add a plain element and return its id.
    ///
    /// `top` is the offset from the parent's top edge; a `None` parent puts
    /// the element at the layout root.
    pub fn push_node(&mut self, parent: Option<usize>, top: i64, height: i64) -> usize {
        self.nodes.push(Node {
            parent,
            top,
            height,
            scroll: None,
        });
        self.nodes.len() - 1
    }

    /// Add a vertically scrollable element and return its id.
    pub fn push_scroller(
        &mut self,
        parent: Option<usize>,
        top: i64,
        height: i64,
        metrics: ScrollMetrics,
    ) -> usize {
        self.nodes.push(Node {
            parent,
            top,
            height,
            scroll: Some(metrics),
        });
        self.nodes.len() - 1
    }

    /// Replace the scroll metrics of a scroller.
    ///
    /// # Panics
    ///
    /// Panics when the reference is not a known scroller.
    pub fn set_metrics(&mut self, scroller: Scroller<usize>, metrics: ScrollMetrics) {
        match scroller {
            Scroller::Viewport => self.viewport = metrics,
            Scroller::Elem(e) => {
                let slot = self.nodes[e].scroll.as_mut().expect("element does not scroll");
                *slot = metrics;
            }
        }
    }

    /// Update only the scroll offset of a scroller.
    ///
    /// # Panics
    ///
    /// Panics when the reference is not a known scroller.
    pub fn set_scroll_top(&mut self, scroller: Scroller<usize>, scroll_top: i64) {
        match scroller {
            Scroller::Viewport => self.viewport.scroll_top = scroll_top,
            Scroller::Elem(e) => {
                let slot = self.nodes[e].scroll.as_mut().expect("element does not scroll");
                slot.scroll_top = scroll_top;
            }
        }
    }

    fn metrics(&self, scroller: Scroller<usize>) -> ScrollMetrics {
        match scroller {
            Scroller::Viewport => self.viewport,
            Scroller::Elem(e) => self.nodes[e].scroll.expect("element does not scroll"),
        }
    }
}

impl Geometry for StaticGeometry {
    type Elem = usize;

    fn offset_parent(&self, elem: usize) -> Option<usize> {
        self.nodes[elem].parent
    }

    fn offset_top(&self, elem: usize) -> i64 {
        self.nodes[elem].top
    }

    fn offset_height(&self, elem: usize) -> i64 {
        self.nodes[elem].height
    }

    fn is_scroller(&self, elem: usize) -> bool {
        self.nodes[elem].scroll.is_some()
    }

    fn scroll_top(&self, scroller: Scroller<usize>) -> i64 {
        self.metrics(scroller).scroll_top
    }

    fn visible_height(&self, scroller: Scroller<usize>) -> i64 {
        self.metrics(scroller).visible_height
    }

    fn full_height(&self, scroller: Scroller<usize>) -> i64 {
        self.metrics(scroller).full_height
    }
}

#[cfg(test)]
#[path = "tests/geometry.rs"]
mod tests;
