//! Tangle connection states as reported to `on_state_change_callback`.

use std::fmt;

/// Mirrors Tangle's numeric `TangleState` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connected,
    RequestingHeap,
    Unknown(i64),
}

impl ConnectionState {
    pub fn from_raw(raw: f64) -> Self {
        match raw as i64 {
            0 => ConnectionState::Disconnected,
            1 => ConnectionState::Connected,
            2 => ConnectionState::RequestingHeap,
            other => ConnectionState::Unknown(other),
        }
    }

    pub fn is_connected(self) -> bool {
        self == ConnectionState::Connected
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionState::Disconnected => f.write_str("disconnected"),
            ConnectionState::Connected => f.write_str("connected"),
            ConnectionState::RequestingHeap => f.write_str("requesting heap"),
            ConnectionState::Unknown(n) => write!(f, "unknown ({})", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_map_to_states() {
        assert_eq!(ConnectionState::from_raw(0.0), ConnectionState::Disconnected);
        assert_eq!(ConnectionState::from_raw(1.0), ConnectionState::Connected);
        assert_eq!(ConnectionState::from_raw(2.0), ConnectionState::RequestingHeap);
        assert_eq!(ConnectionState::from_raw(9.0), ConnectionState::Unknown(9));
    }

    #[test]
    fn only_connected_is_connected() {
        assert!(ConnectionState::Connected.is_connected());
        assert!(!ConnectionState::RequestingHeap.is_connected());
        assert_eq!(ConnectionState::Unknown(-1).to_string(), "unknown (-1)");
    }
}
