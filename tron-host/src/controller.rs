//! Host-side game loop logic, kept free of DOM types.
//!
//! The browser wiring in `app` forwards raw events here; the controller
//! decides what reaches the module. The module itself sits behind
//! [`GameModule`] so everything below runs natively in tests.

use std::cell::{Cell, OnceCell};
use std::rc::Rc;

use crate::connection::ConnectionState;
use crate::error::HostError;
use crate::input::{TurnAction, TurnDirection, turn_from_key, turn_from_pointer};
use crate::latch::PlayerIndexLatch;
use crate::primitives::DrawTarget;

/// The exports the host calls on the instantiated module.
pub trait GameModule {
    fn reset(&self) -> Result<(), HostError>;
    fn turn(&self, direction: TurnDirection, player_index: u32) -> Result<(), HostError>;
    fn player_joined(&self) -> Result<(), HostError>;
    /// Run `draw` with no lasting effect on shared state.
    fn draw_and_revert(&self) -> Result<(), HostError>;
}

pub struct Controller<G> {
    game: OnceCell<G>,
    latch: Rc<PlayerIndexLatch>,
    arena_size: u32,
    state: Cell<ConnectionState>,
    // Joins reported by Tangle before instantiation resolved.
    pending_joins: Cell<u32>,
}

impl<G: GameModule> Controller<G> {
    pub fn new(latch: Rc<PlayerIndexLatch>, arena_size: u32) -> Self {
        Self {
            game: OnceCell::new(),
            latch,
            arena_size,
            state: Cell::new(ConnectionState::Disconnected),
            pending_joins: Cell::new(0),
        }
    }

    #[cfg(test)]
    pub fn latch(&self) -> &PlayerIndexLatch {
        &self.latch
    }

    #[cfg(test)]
    pub fn state(&self) -> ConnectionState {
        self.state.get()
    }

    #[cfg(test)]
    pub fn is_ready(&self) -> bool {
        self.game.get().is_some()
    }

    fn game(&self) -> Result<&G, HostError> {
        self.game.get().ok_or(HostError::NotReady)
    }

    /// Take ownership of the instantiated module, reset it and deliver every
    /// join that arrived while it was loading.
    pub fn attach(&self, game: G) -> Result<(), HostError> {
        self.game
            .set(game)
            .map_err(|_| HostError::AlreadyAttached)?;
        let game = self.game()?;
        game.reset()?;
        let pending = self.pending_joins.replace(0);
        if pending > 0 {
            log::debug!("delivering {} join(s) received during instantiation", pending);
        }
        for _ in 0..pending {
            game.player_joined()?;
        }
        Ok(())
    }

    /// Handle a Tangle state report. Returns whether `player_joined` fired
    /// (or was queued for after instantiation).
    pub fn on_state_change(&self, state: ConnectionState) -> Result<bool, HostError> {
        let previous = self.state.replace(state);
        log::info!("tangle state: {} -> {}", previous, state);

        if !state.is_connected() {
            return Ok(false);
        }
        match self.game.get() {
            Some(game) => game.player_joined()?,
            None => self.pending_joins.set(self.pending_joins.get() + 1),
        }
        Ok(true)
    }

    pub fn on_key(&self, code: &str) -> Result<Option<TurnAction>, HostError> {
        match turn_from_key(code) {
            Some(direction) => self.turn(direction).map(Some),
            None => Ok(None),
        }
    }

    pub fn on_pointer(&self, client_x: f64, viewport_width: f64) -> Result<TurnAction, HostError> {
        self.turn(turn_from_pointer(client_x, viewport_width))
    }

    fn turn(&self, direction: TurnDirection) -> Result<TurnAction, HostError> {
        let action = TurnAction {
            direction,
            player_index: self.latch.current(),
        };
        self.game()?.turn(action.direction, action.player_index)?;
        Ok(action)
    }

    /// One animation frame: clear the canvas, then draw without side effects
    /// on the simulation.
    pub fn frame<T: DrawTarget + ?Sized>(&self, target: &T) -> Result<(), HostError> {
        let game = self.game()?;
        target.reset_surface(self.arena_size);
        game.draw_and_revert()
    }
}
