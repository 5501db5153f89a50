//! Strategies for picking one focus out of overlapping candidates.
//!
//! Only pulses with more than one candidate reach these functions; a lone
//! candidate is trivially chosen by the watcher. The two built-in
//! strategies either reward the largest visible slice of a section or walk
//! a fixed reference line through the view; a custom strategy delegates the
//! whole decision to the host.

use crate::candidate::Candidate;
use crate::error::WatchError;
use crate::view::View;
use std::cmp::Ordering;
use std::str::FromStr;

/// Default position of the focus line within the view.
///
/// The inverse golden-ratio point sits above center, which biases the
/// line-based strategy toward content already mostly scrolled past.
pub const DEFAULT_FOCUS_RATIO: f64 = 0.381_966_011_250_105_15;

/// Host-supplied strategy: receives every candidate and the view, returns
/// the offset of the chosen candidate within the given slice.
pub type Resolver<E> = Box<dyn FnMut(&[Candidate<E>], View) -> usize>;

/// How competing candidates collapse into a notification payload.
pub enum Resolution<E> {
    /// Largest intersection height wins, with a configurable bias toward
    /// earlier sections on near-ties.
    Height,
    /// The candidate under (or nearest to) the focus line wins.
    FocusLine,
    /// A host-supplied [`Resolver`] picks; only constructible in code, not
    /// from configuration strings.
    Custom(Resolver<E>),
    /// No resolution: all candidates are forwarded as
    /// [`crate::candidate::Focus::Multiple`].
    Passthrough,
}

impl<E> Default for Resolution<E> {
    fn default() -> Self {
        Resolution::Height
    }
}

impl<E> FromStr for Resolution<E> {
    type Err = WatchError;

    /// Parse the configuration strings `"height"`, `"focus-line"` and
    /// `"none"`.
    fn from_str(s: &str) -> Result<Self, WatchError> {
        match s {
            "height" => Ok(Resolution::Height),
            "focus-line" => Ok(Resolution::FocusLine),
            "none" => Ok(Resolution::Passthrough),
            other => Err(WatchError::UnknownResolution(other.to_string())),
        }
    }
}

/// Position of a candidate preferred by the height strategy.
///
/// Orders by descending intersection height; `top_down_weight` is
/// subtracted from the height difference whenever the earlier-in-document
/// candidate is compared against a later one, so a positive weight tips
/// ties and near-ties toward the earlier section. Equal keys keep the
/// earlier candidate, matching a stable sort.
#[must_use]
pub fn by_height<E>(candidates: &[Candidate<E>], top_down_weight: i64) -> usize {
    let mut best = 0;
    for i in 1..candidates.len() {
        if height_order(&candidates[i], &candidates[best], top_down_weight) == Ordering::Less {
            best = i;
        }
    }
    best
}

fn height_order<E>(a: &Candidate<E>, b: &Candidate<E>, weight: i64) -> Ordering {
    let a_height = a.intersection_height().unwrap_or(0);
    let b_height = b.intersection_height().unwrap_or(0);

    let mut key = b_height - a_height;
    match a.index.cmp(&b.index) {
        Ordering::Less => key -= weight,
        Ordering::Greater => key += weight,
        Ordering::Equal => {}
    }
    key.cmp(&0)
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
/// Reference offset of the focus line within the given view.
pub fn focus_line(view: View, ratio: f64, offset: f64) -> f64 {
    view.top as f64 + view.height() as f64 * ratio + offset
}

/// Position of the candidate preferred by the focus-line strategy.
///
/// First pass takes the first candidate, in boundary order, whose
/// intersection contains the line. If none does, a second pass takes the
/// candidate whose nearer intersection edge lies closest to the line, ties
/// keeping the earlier candidate.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn by_focus_line<E>(candidates: &[Candidate<E>], line: f64) -> usize {
    for (i, candidate) in candidates.iter().enumerate() {
        if let Some(span) = candidate.intersection {
            if span.top as f64 <= line && line <= span.bottom as f64 {
                return i;
            }
        }
    }

    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, candidate) in candidates.iter().enumerate() {
        let distance = match candidate.intersection {
            Some(span) => (span.top as f64 - line)
                .abs()
                .min((span.bottom as f64 - line).abs()),
            None => f64::INFINITY,
        };
        if distance < best_distance {
            best_distance = distance;
            best = i;
        }
    }
    best
}

#[cfg(test)]
#[path = "tests/resolve.rs"]
mod tests;
