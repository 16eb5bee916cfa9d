//! Observable, predicate-filtered projection of a master list.
//!
//! # Responsibility
//! - Hold the active predicate and the currently visible entities.
//! - Notify registered listeners synchronously when the visible sequence
//!   changes.
//!
//! # Invariants
//! - After every `refresh`, `items()` equals the master list restricted to the
//!   predicate, in master order.
//! - Visible entries share the master's `Rc` handles and never own data.
//! - Listeners fire only when the visible sequence differs by identity or
//!   order; re-applying an equal predicate is silent.

use crate::model::predicate::Predicate;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// Handle returned by a subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub(crate) u64);

/// What triggered a view change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCause {
    Added,
    Removed,
    Replaced,
    Refiltered,
    Reset,
}

impl ChangeCause {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Replaced => "replaced",
            Self::Refiltered => "refiltered",
            Self::Reset => "reset",
        }
    }
}

/// Change notification delivered to view listeners.
#[derive(Debug)]
pub struct ViewChange<'a, T> {
    pub cause: ChangeCause,
    /// Post-change visible sequence.
    pub items: &'a [Rc<T>],
}

/// View listener callback.
pub type Listener<T> = Box<dyn FnMut(&ViewChange<'_, T>)>;

/// Filtered view over a master list owned elsewhere.
pub struct FilteredList<T, P> {
    predicate: P,
    visible: Vec<Rc<T>>,
    listeners: Vec<(ListenerId, Listener<T>)>,
}

impl<T, P: Predicate<T>> FilteredList<T, P> {
    pub fn new(predicate: P, source: &[Rc<T>]) -> Self {
        let visible = select(&predicate, source);
        Self {
            predicate,
            visible,
            listeners: Vec::new(),
        }
    }

    pub fn predicate(&self) -> &P {
        &self.predicate
    }

    pub fn items(&self) -> &[Rc<T>] {
        &self.visible
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Installs a new predicate and re-evaluates every source entity.
    ///
    /// Returns whether the visible sequence changed.
    pub fn set_predicate(&mut self, predicate: P, source: &[Rc<T>]) -> bool {
        self.predicate = predicate;
        self.refresh(source, ChangeCause::Refiltered)
    }

    /// Recomputes visibility against `source` after a master mutation.
    ///
    /// Returns whether the visible sequence changed.
    pub fn refresh(&mut self, source: &[Rc<T>], cause: ChangeCause) -> bool {
        let next = select(&self.predicate, source);
        if same_sequence(&self.visible, &next) {
            return false;
        }
        self.visible = next;
        let change = ViewChange {
            cause,
            items: &self.visible,
        };
        for (_, listener) in &mut self.listeners {
            listener(&change);
        }
        true
    }

    pub(crate) fn subscribe(&mut self, id: ListenerId, listener: Listener<T>) {
        self.listeners.push((id, listener));
    }

    pub(crate) fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }
}

impl<T: Debug, P: Debug> Debug for FilteredList<T, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilteredList")
            .field("predicate", &self.predicate)
            .field("visible", &self.visible)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn select<T, P: Predicate<T>>(predicate: &P, source: &[Rc<T>]) -> Vec<Rc<T>> {
    source
        .iter()
        .filter(|item| predicate.test(item.as_ref()))
        .cloned()
        .collect()
}

fn same_sequence<T>(current: &[Rc<T>], next: &[Rc<T>]) -> bool {
    current.len() == next.len()
        && current
            .iter()
            .zip(next)
            .all(|(left, right)| Rc::ptr_eq(left, right))
}
