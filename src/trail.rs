//! The focus trail records what the watcher reported during a session.
//!
//! Every notification becomes one serialisable event, so a demo run leaves
//! behind an inspectable JSON account of how focus moved while scrolling.

use crate::candidate::Focus;
use crate::view::View;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Default)]
/// Serialisable sequence of focus notifications.
pub struct FocusTrail {
    /// Notifications in the order they fired.
    pub events: Vec<FocusEvent>,
}

#[derive(Serialize, Deserialize, Clone)]
/// One focus notification as the consumer saw it.
pub struct FocusEvent {
    /// Indexes of the focused sections; single-focus modes report one.
    pub sections: Vec<usize>,
    /// Title of the first focused section.
    pub title: String,
    /// Upper edge of the view at notification time.
    pub view_top: i64,
    /// Lower edge of the view at notification time.
    pub view_bottom: i64,
}

impl FocusTrail {
    /// Append one notification.
    ///
    /// `titles` maps section indexes to display titles; an index without a
    /// title records as untitled.
    pub fn record<E>(&mut self, focus: &Focus<E>, view: View, titles: &[String]) {
        let sections: Vec<usize> = match focus {
            Focus::Single(c) => vec![c.index],
            Focus::Multiple(cs) => cs.iter().map(|c| c.index).collect(),
        };
        let title = sections
            .first()
            .and_then(|&i| titles.get(i))
            .cloned()
            .unwrap_or_default();
        self.events.push(FocusEvent {
            sections,
            title,
            view_top: view.top,
            view_bottom: view.bottom,
        });
    }
}

#[cfg(test)]
#[path = "tests/trail.rs"]
mod tests;
