//! Reference focus consumer: maps focus changes onto a menu's active item.
//!
//! The watcher reports section indexes; a menu wants to know which of its
//! items to highlight. This mapper bridges the two, invoking a
//! host-supplied sink only when the active item really changes. Section
//! indexes beyond the menu's item count map to no active item.

use crate::candidate::Focus;
use crate::view::View;

/// Tracks the active menu item across focus notifications.
pub struct ActiveIndexMapper {
    items: usize,
    current: Option<usize>,
    apply: Box<dyn FnMut(Option<usize>)>,
}

impl ActiveIndexMapper {
    /// Mapper over a menu of `items` entries.
    ///
    /// The sink receives the new active item, or `None` when the focused
    /// section has no corresponding menu item.
    #[must_use]
    pub fn new(items: usize, apply: impl FnMut(Option<usize>) + 'static) -> Self {
        ActiveIndexMapper {
            items,
            current: None,
            apply: Box::new(apply),
        }
    }

    #[must_use]
    /// Index of the section currently considered active.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Handle one focus notification.
    ///
    /// Multi-focus notifications activate their first candidate, which is
    /// the topmost by boundary order; hosts wanting richer treatment of the
    /// full candidate list consume it in their own callback instead.
    pub fn handle<E>(&mut self, focus: &Focus<E>) {
        let index = match focus {
            Focus::Single(c) => Some(c.index),
            Focus::Multiple(cs) => cs.first().map(|c| c.index),
        };
        let Some(index) = index else { return };

        if self.current == Some(index) {
            return;
        }
        self.current = Some(index);
        (self.apply)((index < self.items).then_some(index));
    }

    /// Consume the mapper into a watcher callback.
    #[must_use]
    pub fn into_callback<E>(mut self) -> impl FnMut(&Focus<E>, View) {
        move |focus, _view| self.handle(focus)
    }
}

#[cfg(test)]
#[path = "tests/mapper.rs"]
mod tests;
