use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A scroll observer, called with `(scroll, max_scroll)` on every applied offset.
///
/// Both values are positive magnitudes: `scroll` is how far the content has moved from the
/// top and `max_scroll` is the furthest reachable distance. Listeners are compared by
/// identity (`Rc::ptr_eq`), so keep the `Rc` around to unsubscribe it later.
pub type Listener = Rc<dyn Fn(f64, f64)>;

/// Wraps a closure into a [`Listener`].
pub fn listener(f: impl Fn(f64, f64) + 'static) -> Listener {
    Rc::new(f)
}

/// An ordered collection of scroll listeners.
///
/// Cloning the registry yields another handle to the same collection, which lets a listener
/// (un)subscribe listeners while being called. Such changes take effect on the next
/// broadcast; the broadcast in progress works on a snapshot.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `listeners` in order. The same listener may be subscribed more than once and is
    /// then called once per subscription.
    pub fn subscribe<I>(&self, listeners: I)
    where
        I: IntoIterator<Item = Listener>,
    {
        let mut current = self.listeners.borrow_mut();
        current.extend(listeners);
        strace!(total = current.len(), "ListenerRegistry::subscribe");
    }

    /// Removes every subscription identical to any of `listeners`, including duplicates.
    ///
    /// Returns the number of removed subscriptions.
    pub fn unsubscribe<'a, I>(&self, listeners: I) -> usize
    where
        I: IntoIterator<Item = &'a Listener>,
    {
        let remove: Vec<&Listener> = listeners.into_iter().collect();
        let mut current = self.listeners.borrow_mut();
        let before = current.len();
        current.retain(|l| !remove.iter().any(|r| Rc::ptr_eq(l, r)));
        let removed = before - current.len();
        strace!(removed, total = current.len(), "ListenerRegistry::unsubscribe");
        removed
    }

    /// Calls every listener in subscription order.
    pub fn broadcast(&self, scroll: f64, max_scroll: f64) {
        let snapshot: Vec<Listener> = self.listeners.borrow().clone();
        for listener in &snapshot {
            listener(scroll, max_scroll);
        }
    }

    pub fn contains(&self, listener: &Listener) -> bool {
        self.listeners
            .borrow()
            .iter()
            .any(|l| Rc::ptr_eq(l, listener))
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.listeners.borrow_mut().clear();
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
