//! Input mapping from browser events to turn actions.

/// Which way to turn. The discriminant is the flag the module's `turn`
/// export expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnDirection {
    Left = 0,
    Right = 1,
}

impl TurnDirection {
    pub fn as_flag(self) -> u32 {
        self as u32
    }
}

/// A turn for one player, ready to hand to the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnAction {
    pub direction: TurnDirection,
    pub player_index: u32,
}

/// Map a `KeyboardEvent.code` to a turn. Only the arrow keys turn.
pub fn turn_from_key(code: &str) -> Option<TurnDirection> {
    match code {
        "ArrowLeft" => Some(TurnDirection::Left),
        "ArrowRight" => Some(TurnDirection::Right),
        _ => None,
    }
}

/// Taps on the right half of the viewport turn right, everything else left.
pub fn turn_from_pointer(client_x: f64, viewport_width: f64) -> TurnDirection {
    if client_x > viewport_width / 2.0 {
        TurnDirection::Right
    } else {
        TurnDirection::Left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_turn() {
        assert_eq!(turn_from_key("ArrowLeft"), Some(TurnDirection::Left));
        assert_eq!(turn_from_key("ArrowRight"), Some(TurnDirection::Right));
    }

    #[test]
    fn other_keys_do_nothing() {
        for code in ["ArrowUp", "ArrowDown", "KeyA", "Space", "arrowleft", ""] {
            assert_eq!(turn_from_key(code), None, "{code}");
        }
    }

    #[test]
    fn pointer_halves() {
        assert_eq!(turn_from_pointer(700.0, 1000.0), TurnDirection::Right);
        assert_eq!(turn_from_pointer(100.0, 1000.0), TurnDirection::Left);
    }

    #[test]
    fn pointer_on_the_midline_turns_left() {
        assert_eq!(turn_from_pointer(500.0, 1000.0), TurnDirection::Left);
        assert_eq!(turn_from_pointer(500.5, 1000.0), TurnDirection::Right);
    }

    #[test]
    fn flags_match_module_abi() {
        assert_eq!(TurnDirection::Left.as_flag(), 0);
        assert_eq!(TurnDirection::Right.as_flag(), 1);
    }
}
