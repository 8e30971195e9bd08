//! The local player's index.
//!
//! When this peer connects, the module's `player_joined` asks the host to
//! adopt the next free index through `set_player_index`. Tangle replays that
//! call on every peer and again on rollback, so only the first assignment
//! counts for the rest of the session.

use std::cell::OnceCell;

#[derive(Debug, Default)]
pub struct PlayerIndexLatch {
    index: OnceCell<u32>,
}

impl PlayerIndexLatch {
    pub const fn new() -> Self {
        Self {
            index: OnceCell::new(),
        }
    }

    /// Latch `index` if nothing is latched yet. Returns whether it took.
    pub fn set(&self, index: u32) -> bool {
        match self.index.set(index) {
            Ok(()) => {
                log::info!("set_player_index to {}", index);
                true
            }
            Err(ignored) => {
                log::debug!(
                    "set_player_index({}) ignored, already {}",
                    ignored,
                    self.current()
                );
                false
            }
        }
    }

    pub fn get(&self) -> Option<u32> {
        self.index.get().copied()
    }

    /// The latched index, or 0 before any assignment.
    pub fn current(&self) -> u32 {
        self.get().unwrap_or(0)
    }

    #[cfg(test)]
    pub fn is_set(&self) -> bool {
        self.index.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_latch_reads_zero() {
        let latch = PlayerIndexLatch::new();
        assert!(!latch.is_set());
        assert_eq!(latch.get(), None);
        assert_eq!(latch.current(), 0);
    }

    #[test]
    fn only_first_assignment_sticks() {
        let latch = PlayerIndexLatch::new();
        assert!(latch.set(2));
        assert!(!latch.set(5));
        assert!(!latch.set(1));
        assert_eq!(latch.current(), 2);
        assert!(latch.is_set());
    }

    #[test]
    fn zero_is_a_real_assignment() {
        let latch = PlayerIndexLatch::new();
        assert!(latch.set(0));
        assert!(!latch.set(3));
        assert_eq!(latch.get(), Some(0));
    }
}
