//! The watcher: pulse pipeline, attach/pause state machine, throttling.
//!
//! One watcher owns one scroller, one ordered list of section handles and
//! one configuration. The host schedules it: `attach` runs one synchronous
//! pulse and every scroll or resize signal afterwards should call `pulse`.
//! A pulse re-measures everything, resolves the focus and notifies the
//! callback, suppressing notifications whose focused index did not change
//! while throttling is on. All of it runs synchronously on the caller's
//! thread; detaching is the only cancellation and there is never a pulse
//! in flight to interrupt.

use crate::bounds::{resolve_bounds, SectionBounds};
use crate::candidate::{determine_candidates, Candidate, Focus};
use crate::error::{Result, WatchError};
use crate::geometry::{guess_scroller, Geometry, Scroller};
use crate::resolve::{by_focus_line, by_height, focus_line, Resolution, DEFAULT_FOCUS_RATIO};
use crate::view::{compute_view, View};
use log::{debug, trace};

/// Hook receiving the computed focus line offset, for visual debugging.
pub type FocusLineProbe = Box<dyn FnMut(f64)>;

/// Observer invoked with the resolved focus and the view it was resolved in.
pub type FocusCallback<E> = Box<dyn FnMut(&Focus<E>, View)>;

/// Watcher configuration, fixed at construction.
///
/// The defaults reproduce the behavior most hosts want: height resolution,
/// notification throttling, no margins, a five-unit sticky zone at either
/// end of scroll travel. There are no setters; hosts that need different
/// options build a new watcher.
pub struct Options<E> {
    /// Scroller to watch; `None` walks the first section's positioning
    /// ancestors for the first one with vertical scroll overflow, falling
    /// back to the viewport.
    pub scroller: Option<Scroller<E>>,
    /// Suppress notifications whose focused index did not change.
    pub throttle: bool,
    /// How competing candidates collapse into a notification.
    pub resolution: Resolution<E>,
    /// Bias toward earlier sections in height resolution.
    pub top_down_weight: i64,
    /// Inset applied to the top of the view.
    pub view_margin_top: i64,
    /// Inset applied to the bottom of the view.
    pub view_margin_bottom: i64,
    /// Distance from the start of scroll travel within which the first
    /// section is forced.
    pub sticky_offset_top: i64,
    /// Distance from the end of scroll travel within which the last
    /// section is forced.
    pub sticky_offset_bottom: i64,
    /// Force each boundary to end where the next begins.
    pub clamp: bool,
    /// Position of the focus line within the view, as a fraction.
    pub focus_ratio: f64,
    /// Fixed offset added to the focus line.
    pub focus_offset: f64,
    /// Optional hook receiving the focus line offset each time line
    /// resolution computes it.
    pub focus_line_probe: Option<FocusLineProbe>,
}

impl<E> Default for Options<E> {
    fn default() -> Self {
        Options {
            scroller: None,
            throttle: true,
            resolution: Resolution::default(),
            top_down_weight: 0,
            view_margin_top: 0,
            view_margin_bottom: 0,
            sticky_offset_top: 5,
            sticky_offset_bottom: 5,
            clamp: false,
            focus_ratio: DEFAULT_FOCUS_RATIO,
            focus_offset: 0.0,
            focus_line_probe: None,
        }
    }
}

/// Tracks which section of a scrollable layout is in focus.
pub struct Watcher<E> {
    sections: Vec<E>,
    callback: FocusCallback<E>,
    options: Options<E>,
    scroller: Scroller<E>,
    bounds: Vec<SectionBounds>,
    visible_height: i64,
    full_height: i64,
    last_focus: Option<usize>,
    attached: bool,
    paused: bool,
}

impl<E: Copy + Eq> Watcher<E> {
    /// Build a watcher over the given sections.
    ///
    /// Sections are in document order as far as the caller knows it; their
    /// real order is re-measured every pulse. The geometry is only used
    /// here to determine the scroller when none is configured.
    ///
    /// # Errors
    ///
    /// [`WatchError::NoSections`] for an empty section list, and
    /// [`WatchError::ScrollerUndetermined`] when no scroller is configured
    /// and the first section has no positioning ancestor to walk.
    pub fn new<G>(
        geo: &G,
        sections: Vec<E>,
        options: Options<E>,
        callback: impl FnMut(&Focus<E>, View) + 'static,
    ) -> Result<Self>
    where
        G: Geometry<Elem = E>,
    {
        if sections.is_empty() {
            return Err(WatchError::NoSections);
        }

        let scroller = match options.scroller {
            Some(scroller) => scroller,
            None => guess_scroller(geo, sections[0])?,
        };

        Ok(Watcher {
            sections,
            callback: Box::new(callback),
            options,
            scroller,
            bounds: Vec::new(),
            visible_height: 0,
            full_height: 0,
            last_focus: None,
            attached: false,
            paused: false,
        })
    }

    #[must_use]
    /// The scroller this watcher reads, configured or determined.
    pub fn scroller(&self) -> Scroller<E> {
        self.scroller
    }

    #[must_use]
    /// Index of the last notified focus.
    pub fn last_focus(&self) -> Option<usize> {
        self.last_focus
    }

    #[must_use]
    /// Whether the watcher currently responds to pulses.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    #[must_use]
    /// Whether pulses are temporarily suppressed.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Start watching and run one synchronous pulse.
    ///
    /// Attaching an attached watcher is a no-op.
    ///
    /// # Errors
    ///
    /// Propagates errors from the initial [`Watcher::pulse`].
    pub fn attach<G>(&mut self, geo: &G) -> Result<()>
    where
        G: Geometry<Elem = E>,
    {
        if self.attached {
            return Ok(());
        }
        self.attached = true;
        self.pulse(geo)
    }

    /// Stop responding to pulses until re-attached.
    ///
    /// Detaching a detached watcher is a no-op.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// Suppress pulses without detaching.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Lift a pause and immediately pulse to resynchronize.
    ///
    /// # Errors
    ///
    /// Propagates errors from the resynchronizing [`Watcher::pulse`].
    pub fn resume<G>(&mut self, geo: &G) -> Result<()>
    where
        G: Geometry<Elem = E>,
    {
        self.paused = false;
        self.pulse(geo)
    }

    /// Re-measure, resolve the focus and notify on change.
    ///
    /// No-op while detached or paused. Measurement completes into locals
    /// before any cached state is replaced, so a failing pulse leaves the
    /// previous snapshot intact.
    ///
    /// # Errors
    ///
    /// [`WatchError::DegenerateSection`] from measurement and
    /// [`WatchError::ResolverOutOfRange`] from a misbehaving custom
    /// resolver. Both mean a host bug; the watcher stays usable but the
    /// offending pulse produced no notification.
    pub fn pulse<G>(&mut self, geo: &G) -> Result<()>
    where
        G: Geometry<Elem = E>,
    {
        if !self.attached || self.paused {
            return Ok(());
        }

        let bounds = resolve_bounds(geo, &self.sections, self.scroller, self.options.clamp)?;
        let visible_height = geo.visible_height(self.scroller);
        let full_height = geo.full_height(self.scroller);
        self.bounds = bounds;
        self.visible_height = visible_height;
        self.full_height = full_height;

        let view = compute_view(
            geo.scroll_top(self.scroller),
            self.visible_height,
            self.options.view_margin_top,
            self.options.view_margin_bottom,
        );

        let candidates = determine_candidates(
            &self.bounds,
            &self.sections,
            view,
            self.full_height,
            self.options.view_margin_top,
            self.options.sticky_offset_top,
            self.options.sticky_offset_bottom,
        );
        trace!(
            "pulse: view {}..{}, {} candidate(s)",
            view.top,
            view.bottom,
            candidates.len()
        );

        let focus = self.resolve(candidates, view)?;
        match &focus {
            Focus::Multiple(_) => (self.callback)(&focus, view),
            Focus::Single(chosen) => {
                if self.options.throttle && self.last_focus == Some(chosen.index) {
                    return Ok(());
                }
                debug!("focus moved to section {}", chosen.index);
                self.last_focus = Some(chosen.index);
                (self.callback)(&focus, view);
            }
        }
        Ok(())
    }

    fn resolve(&mut self, mut candidates: Vec<Candidate<E>>, view: View) -> Result<Focus<E>> {
        let options = &mut self.options;
        let chosen = match &mut options.resolution {
            Resolution::Passthrough => return Ok(Focus::Multiple(candidates)),
            _ if candidates.len() == 1 => 0,
            Resolution::Height => by_height(&candidates, options.top_down_weight),
            Resolution::FocusLine => {
                let line = focus_line(view, options.focus_ratio, options.focus_offset);
                if let Some(probe) = &mut options.focus_line_probe {
                    probe(line);
                }
                by_focus_line(&candidates, line)
            }
            Resolution::Custom(resolver) => {
                let chosen = resolver(&candidates, view);
                if chosen >= candidates.len() {
                    return Err(WatchError::ResolverOutOfRange {
                        chosen,
                        len: candidates.len(),
                    });
                }
                chosen
            }
        };
        Ok(Focus::Single(candidates.swap_remove(chosen)))
    }
}

#[cfg(test)]
#[path = "tests/watcher.rs"]
mod tests;
