//! Tron arena module for Tangle.
//!
//! Built as a plain `cdylib` for `wasm32-unknown-unknown`. The page hands the
//! module to `Tangle.instantiateStreaming`, which supplies the `env` imports
//! (see [`canvas`]) and calls the exports below:
//!
//! - `reset()` once at startup
//! - `fixed_update()` 60 times per second of shared time, driven by Tangle
//! - `turn(turn_right, player_index)` on player input
//! - `player_joined()` when a peer connects
//! - `draw()` every animation frame, through `callAndRevert`
//!
//! Tangle keeps peers in sync by replaying these calls against snapshots of
//! linear memory, so every export must be deterministic.

pub mod arena;
pub mod canvas;
pub mod geometry;
pub mod state;

#[cfg(target_arch = "wasm32")]
mod exports {
    use crate::canvas::Env;
    use crate::state::{with_arena, with_arena_mut};

    #[unsafe(no_mangle)]
    pub extern "C" fn reset() {
        with_arena_mut(|arena| arena.reset());
    }

    #[unsafe(no_mangle)]
    pub extern "C" fn player_joined() {
        with_arena_mut(|arena| arena.player_joined(&mut Env));
    }

    #[unsafe(no_mangle)]
    pub extern "C" fn fixed_update() {
        with_arena_mut(|arena| arena.fixed_update());
    }

    #[unsafe(no_mangle)]
    pub extern "C" fn turn(turn_right: u32, player_index: u32) {
        with_arena_mut(|arena| arena.turn(turn_right != 0, player_index));
    }

    #[unsafe(no_mangle)]
    pub extern "C" fn draw() {
        with_arena(|arena| arena.draw(&mut Env));
    }
}

#[cfg(test)]
mod tests {
    use crate::arena::Arena;
    use crate::canvas::{HostCall, Recorder};
    use crate::state::{replace_arena, with_arena, with_arena_mut};

    // The export sequence one peer sees: reset, a join, input, steps, draw.
    #[test]
    fn session_flow() {
        replace_arena(Arena::new());
        let mut host = Recorder::new();

        with_arena_mut(|arena| {
            arena.reset();
            arena.player_joined(&mut host);
            arena.turn(true, 0);
            for _ in 0..5 {
                arena.fixed_update();
            }
        });
        with_arena(|arena| arena.draw(&mut host));

        assert_eq!(host.calls[0], HostCall::PlayerIndex(0));
        assert_eq!(host.calls[1], HostCall::SetColor(255.0, 0.0, 0.0, 255.0));
        assert_eq!(host.calls[2], HostCall::Circle(90.0, 170.0, 2.0));
        assert_eq!(host.drawing().count(), host.calls.len() - 1);
        replace_arena(Arena::new());
    }
}
