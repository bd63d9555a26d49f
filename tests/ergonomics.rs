// ============================================================================
// atom-cell - Ergonomics Tests
// Fluent chaining, handle sharing, macros, and weak handles
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use atom_cell::{atom, cloned, watch};

#[test]
fn operations_chain_fluently() {
    let seen = Rc::new(Cell::new(0u32));
    let a = atom(0);
    {
        let seen = seen.clone();
        a.add_watch("count", move |_, _, _, _| seen.set(seen.get() + 1))
            .reset(1)
            .swap(|n| n + 1)
            .remove_watch("count")
            .reset(9);
    }
    assert_eq!(a.get(), 9);
    assert_eq!(seen.get(), 2);
}

#[test]
fn cloned_handles_share_one_cell() {
    let a = atom(vec![1, 2, 3]);
    let b = a.clone();

    b.swap(|v| {
        let mut next = v.clone();
        next.push(4);
        next
    });

    assert_eq!(a.get(), vec![1, 2, 3, 4]);
    a.with(|v| assert_eq!(v.len(), 4));
}

#[test]
fn cloned_macro_moves_fresh_handles() {
    let a = atom(10);
    let reader = cloned!(a => move || a.get());

    a.reset(11);
    assert_eq!(reader(), 11);
}

#[test]
fn watch_macro_clones_captured_handles() {
    let count = atom(0);
    let log = atom(Vec::<i32>::new());

    watch!(count, "logger", log => |new, _old, _key, _meta| {
        log.swap(|entries| {
            let mut next = entries.clone();
            next.push(*new);
            next
        });
    });

    count.reset(1).reset(2);
    assert_eq!(count.get(), 2);

    // `log` stayed usable at the call site; the macro cloned it.
    assert_eq!(log.get(), vec![1, 2]);
}

#[test]
fn watch_macro_without_captures() {
    let a = atom(0);
    watch!(a, "check" => |new, old, key, _meta| {
        assert_eq!(*new, *old + 1);
        assert_eq!(key, "check");
    });

    a.swap(|n| n + 1);
    assert_eq!(a.watch_count(), 1);
}

#[test]
fn registry_introspection() {
    let a = atom(0);
    a.add_watch("w", |_, _, _, _| {}).add_watch("w", |_, _, _, _| {});
    assert_eq!(a.watch_count(), 1);
    assert!(a.has_watch("w"));

    // Removing twice is fine; the second call is a no-op.
    a.remove_watch("w").remove_watch("w");
    assert_eq!(a.watch_count(), 0);
    assert!(!a.has_watch("w"));
}

#[test]
fn weak_handle_does_not_keep_atom_alive() {
    let weak = {
        let a = atom(5);
        let weak = a.downgrade();
        assert!(weak.upgrade().is_some());
        weak
    };
    assert!(weak.upgrade().is_none());
}

#[test]
fn weak_handle_clones_track_the_same_atom() {
    let a = atom(1);
    let weak = a.downgrade();
    let weak2 = weak.clone();

    a.reset(2);
    assert_eq!(weak2.upgrade().map(|h| h.get()), Some(2));

    drop(a);
    assert!(weak.upgrade().is_none());
    assert!(weak2.upgrade().is_none());
}
