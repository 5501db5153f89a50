//! View window computation.
//!
//! The view is the slice of the scroller the user can currently see,
//! shrunk by the configured margins. It is recomputed on every pulse and
//! never retained.

use crate::geometry::Span;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// Visible vertical window of the scroller, in scroller coordinates.
pub struct View {
    /// Upper edge after the top margin.
    pub top: i64,
    /// Lower edge after the bottom margin, always below `top`.
    pub bottom: i64,
}

impl View {
    #[must_use]
    /// Window height.
    pub fn height(self) -> i64 {
        self.bottom - self.top
    }

    #[must_use]
    /// The window as a closed interval.
    pub fn span(self) -> Span {
        Span {
            top: self.top,
            bottom: self.bottom,
        }
    }
}

#[must_use]
/// Compute the view from raw scroll state and margins.
///
/// `top < bottom` holds for every input: the bottom edge never collapses
/// past `top + 1`, even when the margins exceed the visible height.
pub fn compute_view(scroll_top: i64, visible_height: i64, margin_top: i64, margin_bottom: i64) -> View {
    let top = scroll_top + margin_top;
    let bottom = (top + 1).max(scroll_top + visible_height - margin_bottom);
    View { top, bottom }
}

#[cfg(test)]
#[path = "tests/view.rs"]
mod tests;
