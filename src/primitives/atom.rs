// ============================================================================
// atom-cell - Atom Primitive
// The public watchable atom handle
// ============================================================================

use std::rc::{Rc, Weak};

use crate::core::types::{AnyAtom, AtomInner};

// =============================================================================
// ATOM<T, M> - The public atom handle
// =============================================================================

/// A watchable container holding a single value of type `T`.
///
/// An atom pairs one mutable value with a keyed registry of watch
/// callbacks. Replacing the value (`reset`/`mreset`) or transforming it
/// (`swap`/`mswap`) commits the new value, then synchronously notifies
/// every watch in registration order with the new value, the old value,
/// the watch's own key, and the update's metadata tag (if any).
///
/// Handles are cheap to clone and share the same cell. Atoms are
/// single-threaded: no locking, no atomics, no cross-thread sharing.
///
/// Panics from user code propagate unmodified to the caller of the
/// triggering operation. A panicking transformation leaves the atom
/// untouched; a panicking watch skips the remaining watches of that pass
/// while the committed value stays.
///
/// # Example
///
/// ```
/// use atom_cell::atom;
///
/// let count = atom(0);
/// count.add_watch("print", |new, old, key, _meta| {
///     println!("{key}: {old} -> {new}");
/// });
///
/// count.reset(1);
/// count.swap(|n| n + 1);
/// assert_eq!(count.get(), 2);
/// ```
pub struct Atom<T: 'static, M: 'static = ()> {
    inner: Rc<AtomInner<T, M>>,
}

impl<T: 'static, M: 'static> Clone for Atom<T, M> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static, M: 'static> Atom<T, M> {
    /// Create a new atom with the given initial value.
    ///
    /// The initial value is stored as-is (no validation) and the watch
    /// registry starts empty.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(AtomInner::new(value)),
        }
    }

    /// Get the current value (cloning).
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner.get()
    }

    /// Access the current value with a closure (avoids cloning).
    ///
    /// # Example
    ///
    /// ```
    /// use atom_cell::atom;
    ///
    /// let items = atom(vec![1, 2, 3]);
    /// let sum = items.with(|v| v.iter().sum::<i32>());
    /// assert_eq!(sum, 6);
    /// ```
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.inner.with(f)
    }

    /// Register `watch` under `key`, returning the atom for chaining.
    ///
    /// If `key` is already registered, the new callback replaces the old
    /// one (last write wins) and keeps the original registration position.
    /// A watch registered during a notification pass first fires on the
    /// next update.
    ///
    /// A watch that captures a strong handle to its own atom forms a
    /// reference cycle; capture the result of [`Atom::downgrade`] instead.
    ///
    /// # Example
    ///
    /// ```
    /// use atom_cell::atom;
    ///
    /// let a = atom(1);
    /// a.add_watch("double-check", |new, old, key, meta| {
    ///     assert_eq!((*new, *old, key, meta), (2, 1, "double-check", None));
    /// });
    /// a.reset(2);
    /// ```
    pub fn add_watch(
        &self,
        key: impl Into<Rc<str>>,
        watch: impl Fn(&T, &T, &str, Option<&M>) + 'static,
    ) -> &Self {
        self.inner.add_watch(key.into(), Rc::new(watch));
        self
    }

    /// Remove the watch registered under `key`; a silent no-op if absent.
    ///
    /// Removal takes effect immediately, including for the remainder of an
    /// in-flight notification pass.
    ///
    /// # Example
    ///
    /// ```
    /// use atom_cell::atom;
    ///
    /// let a = atom(0);
    /// a.add_watch("once", |_, _, _, _| panic!("should never fire"));
    /// a.remove_watch("once").reset(1);
    /// assert_eq!(a.get(), 1);
    /// ```
    pub fn remove_watch(&self, key: &str) -> &Self {
        AnyAtom::remove_watch(&*self.inner, key);
        self
    }

    /// Whether a watch is registered under `key`.
    pub fn has_watch(&self, key: &str) -> bool {
        self.inner.has_watch(key)
    }

    /// Number of registered watches.
    pub fn watch_count(&self) -> usize {
        self.inner.watch_count()
    }

    /// Replace the value, notifying every watch with no metadata tag.
    ///
    /// There is no equality gating and no compare-and-swap: the new value
    /// is committed and announced unconditionally, even if it equals the
    /// old one.
    pub fn reset(&self, value: T) -> &Self
    where
        T: Clone,
    {
        self.inner.mreset(None, value);
        self
    }

    /// Replace the value, announcing `meta` to every watch.
    ///
    /// Watches receive `Some(&meta)`; every watch of the pass sees the
    /// same borrow, so sentinel tags keep their identity.
    ///
    /// # Example
    ///
    /// ```
    /// use atom_cell::tagged_atom;
    ///
    /// let doc = tagged_atom::<String, &str>(String::new());
    /// doc.add_watch("autosave", |new, _old, _key, meta| {
    ///     if meta == Some(&"user-edit") {
    ///         assert_eq!(new, "draft");
    ///     }
    /// });
    /// doc.mreset("user-edit", String::from("draft"));
    /// ```
    pub fn mreset(&self, meta: M, value: T) -> &Self
    where
        T: Clone,
    {
        self.inner.mreset(Some(&meta), value);
        self
    }

    /// Transform the value with a pure function of the current value.
    ///
    /// `f` receives the current value and returns the next one; additional
    /// inputs are captured by the closure. The transformation runs before
    /// anything is committed, so a panicking `f` leaves the atom untouched.
    /// Watches are notified with no metadata tag.
    ///
    /// # Example
    ///
    /// ```
    /// use atom_cell::atom;
    ///
    /// let total = atom(10);
    /// let delta = 5;
    /// total.swap(move |n| n + delta);
    /// assert_eq!(total.get(), 15);
    /// ```
    pub fn swap(&self, f: impl FnOnce(&T) -> T) -> &Self
    where
        T: Clone,
    {
        self.inner.mswap(None, f);
        self
    }

    /// Transform the value with `f`, announcing `meta` to every watch.
    pub fn mswap(&self, meta: M, f: impl FnOnce(&T) -> T) -> &Self
    where
        T: Clone,
    {
        self.inner.mswap(Some(&meta), f);
        self
    }

    /// Create a non-owning handle to this atom.
    pub fn downgrade(&self) -> WeakAtom<T, M> {
        WeakAtom {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Get a reference to the inner cell (for advanced use).
    pub fn inner(&self) -> &Rc<AtomInner<T, M>> {
        &self.inner
    }

    /// Get the inner cell as a type-erased [`AnyAtom`].
    ///
    /// This enables storing atoms of different value types in the same
    /// collection.
    pub fn as_any_atom(&self) -> Rc<dyn AnyAtom> {
        self.inner.clone()
    }
}

impl<T: std::fmt::Debug + 'static, M: 'static> std::fmt::Debug for Atom<T, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.with(|value| f.debug_struct("Atom").field("value", value).finish())
    }
}

// =============================================================================
// WEAK ATOM
// =============================================================================

/// A non-owning handle to an atom.
///
/// Useful for watches that call back into their own atom: a strong handle
/// captured by a watch keeps the atom (and the watch) alive in a cycle,
/// while a weak handle lets the atom drop normally.
///
/// # Example
///
/// ```
/// use atom_cell::atom;
///
/// let temperature = atom(20i32);
/// let weak = temperature.downgrade();
/// temperature.add_watch("clamp", move |new, _old, _key, _meta| {
///     if *new > 100 {
///         if let Some(t) = weak.upgrade() {
///             t.reset(100);
///         }
///     }
/// });
///
/// temperature.reset(250);
/// assert_eq!(temperature.get(), 100);
/// ```
pub struct WeakAtom<T: 'static, M: 'static = ()> {
    inner: Weak<AtomInner<T, M>>,
}

impl<T: 'static, M: 'static> WeakAtom<T, M> {
    /// Upgrade to a strong handle, if the atom is still alive.
    pub fn upgrade(&self) -> Option<Atom<T, M>> {
        self.inner.upgrade().map(|inner| Atom { inner })
    }
}

impl<T: 'static, M: 'static> Clone for WeakAtom<T, M> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

// =============================================================================
// ATOM CREATION FUNCTIONS
// =============================================================================

/// Create a new watchable atom with no metadata tag type.
///
/// This is the primary constructor. Use [`tagged_atom`] (or annotate the
/// `M` parameter of [`Atom`]) when tagged updates carry metadata.
///
/// # Example
///
/// ```
/// use atom_cell::atom;
///
/// let greeting = atom(String::from("hello"));
/// greeting.reset(String::from("world"));
/// assert_eq!(greeting.get(), "world");
/// ```
pub fn atom<T: 'static>(value: T) -> Atom<T> {
    Atom::new(value)
}

/// Create an atom whose tagged updates carry metadata of type `M`.
///
/// # Example
///
/// ```
/// use atom_cell::tagged_atom;
///
/// let a = tagged_atom::<i32, &str>(0);
/// a.add_watch("log", |new, _old, _key, meta| {
///     assert_eq!(*new, 1);
///     assert_eq!(meta, Some(&"increment"));
/// });
/// a.mreset("increment", 1);
/// ```
pub fn tagged_atom<T: 'static, M: 'static>(value: T) -> Atom<T, M> {
    Atom::new(value)
}

// =============================================================================
// TESTS
// =============================================================================
