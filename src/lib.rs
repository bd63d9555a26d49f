// ============================================================================
// atom-cell - A Watchable Atom for Rust
// ============================================================================
//
// A single-value state container in the Clojure atom tradition: one owner
// holds the atom, many watches react to its changes without polling.
// Replace the value wholesale with reset/mreset or transform it with
// swap/mswap; every committed update notifies the registered watches
// synchronously, in registration order.
// ============================================================================

pub mod core;
mod macros;
pub mod primitives;

// Re-export the public surface at the crate root for ergonomic access
pub use crate::core::types::{AnyAtom, AtomInner, WatchFn};
pub use crate::primitives::atom::{atom, tagged_atom, Atom, WeakAtom};

// =============================================================================
// TESTS
// =============================================================================
