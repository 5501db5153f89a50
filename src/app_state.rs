//! Demo application state bridging the document viewport and the watcher.
//!
//! A TUI needs a single source of truth the event loop can interrogate and
//! mutate as the user scrolls. Scroll offset and viewport size live here;
//! every change marks the state dirty, and `sync` replays it into the
//! watcher as a fresh row geometry, exactly how a host would forward
//! scroll and resize signals. Focus output flows back through shared cells
//! written by the watcher callback.

use crate::candidate::Focus;
use crate::config::Config;
use crate::document::Document;
use crate::error::Result;
use crate::mapper::ActiveIndexMapper;
use crate::resolve::Resolution;
use crate::trail::FocusTrail;
use crate::view::View;
use crate::watcher::{Options, Watcher};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Single source of truth for the demo's event loop.
pub struct AppState {
    /// The watched document.
    pub doc: Document,
    /// Current scroll offset of the content pane, in rows.
    pub scroll_top: i64,
    /// Height of the content pane, in rows.
    pub viewport_rows: i64,
    /// Width of the navigation menu pane, in columns.
    pub menu_width: u16,
    /// Active menu item, written by the focus consumer.
    pub active: Rc<Cell<Option<usize>>>,
    /// All focused sections in multi-focus mode.
    pub multi_active: Rc<RefCell<Vec<usize>>>,
    /// Row of the focus line, written by the debug probe when enabled.
    pub focus_line_row: Rc<Cell<Option<i64>>>,
    /// Record of every notification this session.
    pub trail: Rc<RefCell<FocusTrail>>,
    /// The engine driving the menu.
    pub watcher: Watcher<usize>,
    dirty: bool,
}

impl AppState {
    /// Wire up a watcher over the document's sections.
    ///
    /// `multi` switches to pass-through resolution; `debug_focus_line`
    /// injects a probe that exposes the focus line row for rendering.
    ///
    /// # Errors
    ///
    /// Configuration errors from [`Config::options`] or watcher
    /// construction.
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(doc: Document, cfg: &Config, multi: bool, debug_focus_line: bool) -> Result<Self> {
        let active = Rc::new(Cell::new(None));
        let multi_active = Rc::new(RefCell::new(Vec::new()));
        let focus_line_row = Rc::new(Cell::new(None));
        let trail = Rc::new(RefCell::new(FocusTrail::default()));

        let mut options: Options<usize> = cfg.options()?;
        if multi {
            options.resolution = Resolution::Passthrough;
        }
        if debug_focus_line {
            let row = Rc::clone(&focus_line_row);
            options.focus_line_probe = Some(Box::new(move |line| {
                row.set(Some(line.round() as i64));
            }));
        }

        let titles: Vec<String> = doc.sections.iter().map(|s| s.title.clone()).collect();
        let mut mapper = ActiveIndexMapper::new(titles.len(), {
            let active = Rc::clone(&active);
            move |item| active.set(item)
        });
        let callback = {
            let trail = Rc::clone(&trail);
            let multi_active = Rc::clone(&multi_active);
            move |focus: &Focus<usize>, view: View| {
                trail.borrow_mut().record(focus, view, &titles);
                if let Focus::Multiple(candidates) = focus {
                    *multi_active.borrow_mut() = candidates.iter().map(|c| c.index).collect();
                }
                mapper.handle(focus);
            }
        };

        let layout = doc.row_geometry(0, 0);
        let watcher = Watcher::new(&layout.geometry, layout.sections, options, callback)?;

        Ok(AppState {
            doc,
            scroll_top: 0,
            viewport_rows: 0,
            menu_width: cfg.menu_width,
            active,
            multi_active,
            focus_line_row,
            trail,
            watcher,
            dirty: true,
        })
    }

    /// Replay pending scroll or resize state into the watcher.
    ///
    /// Attaches on the first call (which runs the initial pulse); afterwards
    /// pulses only when something changed since the last sync.
    ///
    /// # Errors
    ///
    /// Propagates watcher pulse errors.
    pub fn sync(&mut self) -> Result<()> {
        if !self.watcher.is_attached() {
            self.dirty = false;
            let layout = self.doc.row_geometry(self.scroll_top, self.viewport_rows);
            return self.watcher.attach(&layout.geometry);
        }
        if self.dirty {
            self.dirty = false;
            let layout = self.doc.row_geometry(self.scroll_top, self.viewport_rows);
            return self.watcher.pulse(&layout.geometry);
        }
        Ok(())
    }

    /// Record a new content pane height.
    pub fn set_viewport_rows(&mut self, rows: i64) {
        if rows != self.viewport_rows {
            self.viewport_rows = rows;
            self.scroll_to(self.scroll_top);
            self.dirty = true;
        }
    }

    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    /// Largest valid scroll offset for the current viewport.
    pub fn max_scroll(&self) -> i64 {
        (self.doc.lines.len() as i64 - self.viewport_rows).max(0)
    }

    /// Scroll relative to the current offset.
    pub fn scroll_by(&mut self, delta: i64) {
        self.scroll_to(self.scroll_top + delta);
    }

    /// Scroll to an absolute offset, clamped to the document.
    pub fn scroll_to(&mut self, row: i64) {
        let clamped = row.clamp(0, self.max_scroll());
        if clamped != self.scroll_top {
            self.scroll_top = clamped;
            self.dirty = true;
        }
    }

    /// Scroll up one viewport.
    pub fn page_up(&mut self) {
        self.scroll_by(-self.viewport_rows);
    }

    /// Scroll down one viewport.
    pub fn page_down(&mut self) {
        self.scroll_by(self.viewport_rows);
    }

    /// Jump to the start of the document.
    pub fn scroll_to_top(&mut self) {
        self.scroll_to(0);
    }

    /// Jump to the end of the document.
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_to(self.max_scroll());
    }

    /// Pause the watcher, or resume it with an immediate pulse.
    ///
    /// # Errors
    ///
    /// Propagates errors from the resynchronizing pulse on resume.
    pub fn toggle_pause(&mut self) -> Result<()> {
        if self.watcher.is_paused() {
            let layout = self.doc.row_geometry(self.scroll_top, self.viewport_rows);
            self.watcher.resume(&layout.geometry)
        } else {
            self.watcher.pause();
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
