// ============================================================================
// atom-cell - Type Definitions
// The watch callback type, the type-erased atom trait, and the inner cell
// ============================================================================

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

// =============================================================================
// WATCH CALLBACK
// =============================================================================

/// Watch callback invoked after every committed update.
///
/// Receives `(new_value, old_value, key, meta)`. The key is the identifier
/// the watch was registered under; `meta` is `Some` only for tagged updates
/// (`mreset`/`mswap`) and carries exactly the caller-supplied value.
/// Watches are side-effecting only.
pub type WatchFn<T, M = ()> = dyn Fn(&T, &T, &str, Option<&M>);

// =============================================================================
// TYPE-ERASED TRAIT
// =============================================================================

/// Type-erased registry interface for atoms.
///
/// Registry bookkeeping doesn't need to know the value type T or the tag
/// type M, so atoms holding different types can be stored in the same
/// collection as `Rc<dyn AnyAtom>`.
pub trait AnyAtom: Any {
    /// Number of registered watches.
    fn watch_count(&self) -> usize;

    /// Whether a watch is registered under `key`.
    fn has_watch(&self, key: &str) -> bool;

    /// Remove the watch registered under `key`. A no-op if absent.
    fn remove_watch(&self, key: &str);

    /// Upcast to Any for downcasting.
    fn as_any(&self) -> &dyn Any;
}

// =============================================================================
// ATOM INNER (the data behind Atom<T, M>)
// =============================================================================

/// The shared cell behind an atom handle.
///
/// This is separate from `Atom<T, M>` so cloned handles can share it through
/// `Rc` and so it can implement `AnyAtom` for heterogeneous storage.
pub struct AtomInner<T: 'static, M: 'static = ()> {
    /// The current held value.
    value: RefCell<T>,

    /// Registered watches in registration order. Overwriting a key keeps
    /// its original position; iteration order is the notification order.
    watches: RefCell<Vec<(Rc<str>, Rc<WatchFn<T, M>>)>>,
}

impl<T: 'static, M: 'static> AtomInner<T, M> {
    /// Create a new cell with the given value and an empty watch registry.
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            watches: RefCell::new(Vec::new()),
        }
    }

    /// Get the current value (cloning).
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.value.borrow().clone()
    }

    /// Access the current value with a closure (avoids cloning).
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.borrow())
    }

    /// Insert or overwrite the watch registered under `key`.
    ///
    /// Last write wins; an overwritten key keeps its registration position.
    pub fn add_watch(&self, key: Rc<str>, watch: Rc<WatchFn<T, M>>) {
        let mut watches = self.watches.borrow_mut();
        if let Some(entry) = watches.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = watch;
        } else {
            watches.push((key, watch));
        }
    }

    /// Replace the value and notify every watch.
    ///
    /// The new value is committed before the first watch runs. The pass
    /// iterates a snapshot of the keys taken at commit time but looks each
    /// callback up at invocation time: watches added mid-pass wait for the
    /// next update, watches removed mid-pass are skipped for the rest of it.
    pub fn mreset(&self, meta: Option<&M>, value: T)
    where
        T: Clone,
    {
        if self.watches.borrow().is_empty() {
            *self.value.borrow_mut() = value;
            return;
        }

        // The pass announces this update's values even if a watch triggers
        // a nested update, so snapshot the new value before committing.
        let new = value.clone();
        let old = self.value.replace(value);

        let keys: Vec<Rc<str>> = self
            .watches
            .borrow()
            .iter()
            .map(|(k, _)| Rc::clone(k))
            .collect();

        for key in keys {
            let watch = self
                .watches
                .borrow()
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, f)| Rc::clone(f));

            // No borrow is held while the callback runs, and the clone keeps
            // it alive even if the watch unregisters itself mid-call.
            if let Some(watch) = watch {
                (*watch)(&new, &old, &key, meta);
            }
        }
    }

    /// Compute the next value from the current one, then commit and notify.
    ///
    /// `f` runs before anything is mutated; if it panics, the value and the
    /// registry are untouched.
    pub fn mswap(&self, meta: Option<&M>, f: impl FnOnce(&T) -> T)
    where
        T: Clone,
    {
        let next = f(&self.value.borrow());
        self.mreset(meta, next);
    }
}

impl<T: 'static, M: 'static> AnyAtom for AtomInner<T, M> {
    fn watch_count(&self) -> usize {
        self.watches.borrow().len()
    }

    fn has_watch(&self, key: &str) -> bool {
        self.watches.borrow().iter().any(|(k, _)| &**k == key)
    }

    fn remove_watch(&self, key: &str) {
        self.watches.borrow_mut().retain(|(k, _)| &**k != key);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// =============================================================================
// TESTS
// =============================================================================
