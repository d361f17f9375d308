//! Monitor session state
//!
//! Tracks where a heart rate monitor session is in its lifecycle, from
//! radio availability through scanning and connection to live updates. The
//! tracker owns the current state and hands out an explicit [`StateChange`]
//! when it moves, so a presentation layer can react to transitions instead
//! of watching writes. Nothing here touches a radio.

use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MonitorState {
    Startup,
    // Radio availability, as reported by the platform Bluetooth stack
    RadioUnknown,
    RadioResetting,
    RadioUnsupported,
    RadioUnauthorized,
    RadioPoweredOff,
    // Session lifecycle
    Scanning,
    Connecting,
    Connected,
    /// Measurement notifications are arriving.
    Updating,
}

/// A completed transition, delivered to whoever renders state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StateChange {
    pub from: MonitorState,
    pub to: MonitorState,
}

pub struct StateTracker {
    state: MonitorState,
}

impl Default for StateTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StateTracker {
    pub fn new() -> Self {
        Self {
            state: MonitorState::Startup,
        }
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    /// Move to `next`, reporting the transition. Setting the current state
    /// again is a no-op and returns `None`.
    pub fn transition(&mut self, next: MonitorState) -> Option<StateChange> {
        if next == self.state {
            return None;
        }
        let change = StateChange {
            from: self.state,
            to: next,
        };
        self.state = next;
        debug!(from = ?change.from, to = ?change.to, "monitor state changed");
        Some(change)
    }
}
