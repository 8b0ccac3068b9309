//! Ordered listener registries
//!
//! An explicit, handle-keyed set of callbacks invoked synchronously in
//! registration order. Handles make removal unambiguous: registering the
//! same closure twice yields two independent entries, each with its own
//! [`ListenerId`].

use smallvec::SmallVec;

/// Handle returned by [`ListenerSet::register`], used to unregister
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback<T> = Box<dyn FnMut(T) + Send>;

/// An ordered set of callbacks taking a `Copy` payload
pub struct ListenerSet<T> {
    entries: SmallVec<[(ListenerId, Callback<T>); 2]>,
    next_id: u64,
}

impl<T: Copy> ListenerSet<T> {
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
            next_id: 0,
        }
    }

    /// Add a callback; it will be invoked after all earlier registrations
    pub fn register<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(T) + Send + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        tracing::debug!(?id, count = self.entries.len(), "listener registered");
        id
    }

    /// Remove a callback by handle. Returns false if the handle is unknown
    /// (already removed handles are not an error).
    pub fn unregister(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        let removed = self.entries.len() != before;
        if removed {
            tracing::debug!(?id, count = self.entries.len(), "listener unregistered");
        }
        removed
    }

    /// Invoke every callback with `value`, in registration order
    pub fn emit(&mut self, value: T) {
        for (_, callback) in self.entries.iter_mut() {
            callback(value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Copy> Default for ListenerSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
