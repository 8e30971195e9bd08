//! Global arena container.
//!
//! Uses `thread_local!` + `RefCell` for safe mutable access in single-threaded
//! WASM. Tangle snapshots and rewinds the module's linear memory, so this
//! cell is the only state that has to survive between exported calls.

use std::cell::RefCell;

use crate::arena::Arena;

thread_local! {
    static ARENA: RefCell<Arena> = RefCell::new(Arena::new());
}

/// Execute a closure with read access to the arena.
pub fn with_arena<F, R>(f: F) -> R
where
    F: FnOnce(&Arena) -> R,
{
    ARENA.with(|a| f(&a.borrow()))
}

/// Execute a closure with mutable access to the arena.
pub fn with_arena_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut Arena) -> R,
{
    ARENA.with(|a| f(&mut a.borrow_mut()))
}

/// Replace the entire arena.
pub fn replace_arena(new_arena: Arena) {
    ARENA.with(|a| {
        *a.borrow_mut() = new_arena;
    });
}

/// Run `f` against the arena, then put the arena back exactly as it was.
///
/// Native stand-in for Tangle's `callAndRevert`: whatever `f` pushes to an
/// outside sink survives, arena mutations do not.
#[cfg(test)]
pub fn call_and_revert<F, R>(f: F) -> R
where
    F: FnOnce(&mut Arena) -> R,
{
    let snapshot = with_arena(Arena::clone);
    let result = with_arena_mut(f);
    replace_arena(snapshot);
    result
}
