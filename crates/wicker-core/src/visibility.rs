//! # Visibility Module
//!
//! Open/closed state of the cart panel.
//!
//! Two states, two transitions, no terminal state:
//!
//! ```text
//!            open()
//!   Closed ─────────► Open
//!     ▲                 │
//!     └─────────────────┘
//!           close()
//! ```
//!
//! Visibility is independent of cart contents - closing the panel never
//! touches the items, and an empty cart can sit open.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Whether the cart panel is shown.
///
/// Starts [`Closed`](Visibility::Closed) for a fresh session. Both
/// transitions are idempotent: opening an open panel or closing a closed
/// one changes nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Visibility {
    /// The panel is rendered.
    Open,

    /// The panel is hidden.
    #[default]
    Closed,
}

impl Visibility {
    /// Shows the panel.
    pub fn open(&mut self) {
        *self = Visibility::Open;
    }

    /// Hides the panel.
    pub fn close(&mut self) {
        *self = Visibility::Closed;
    }

    /// Checks if the panel is currently shown.
    #[inline]
    pub const fn is_open(&self) -> bool {
        matches!(self, Visibility::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_closed() {
        assert_eq!(Visibility::default(), Visibility::Closed);
        assert!(!Visibility::default().is_open());
    }

    #[test]
    fn test_open_close_cycle() {
        let mut visibility = Visibility::default();

        visibility.open();
        assert!(visibility.is_open());

        visibility.close();
        assert!(!visibility.is_open());
    }

    #[test]
    fn test_transitions_are_idempotent() {
        let mut visibility = Visibility::Open;
        visibility.open();
        assert_eq!(visibility, Visibility::Open);

        visibility.close();
        visibility.close();
        assert_eq!(visibility, Visibility::Closed);
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Visibility::Open).unwrap(), r#""open""#);
        assert_eq!(
            serde_json::to_string(&Visibility::Closed).unwrap(),
            r#""closed""#
        );
    }
}
