// ============================================================================
// atom-cell - Ergonomic Macros
// ============================================================================

/// Helper macro to clone variables into a move closure.
///
/// Reduces the boilerplate of manually cloning `Rc` or `Atom` handles
/// before moving them into a closure.
///
/// # Usage
///
/// ```
/// use atom_cell::{atom, cloned};
///
/// let count = atom(1);
///
/// let reader = cloned!(count => move || count.get());
/// count.reset(2);
/// assert_eq!(reader(), 2);
/// ```
#[macro_export]
macro_rules! cloned {
    ($($n:ident),+ => $e:expr) => {
        {
            $( let $n = $n.clone(); )+
            $e
        }
    };
}

/// Register a watch with automatic handle capturing.
///
/// Wraps `add_watch(key, cloned!(... => move |...| ...))`: the listed
/// handles are cloned into the watch closure, leaving the originals usable
/// at the call site.
///
/// # Usage
///
/// ```
/// use atom_cell::{atom, watch};
///
/// let count = atom(0);
/// let log = atom(Vec::<i32>::new());
///
/// watch!(count, "logger", log => |new, _old, _key, _meta| {
///     log.swap(|entries| {
///         let mut next = entries.clone();
///         next.push(*new);
///         next
///     });
/// });
///
/// count.reset(7);
/// assert_eq!(log.get(), vec![7]);
/// ```
#[macro_export]
macro_rules! watch {
    // Case 1: with handles to clone into the closure
    ($atom:expr, $key:expr, $($deps:ident),+ => |$($param:pat_param),*| $body:expr) => {
        $atom.add_watch($key, $crate::cloned!($($deps),+ => move |$($param),*| $body))
    };
    // Case 2: plain closure, nothing to capture
    ($atom:expr, $key:expr => |$($param:pat_param),*| $body:expr) => {
        $atom.add_watch($key, move |$($param),*| $body)
    };
}
