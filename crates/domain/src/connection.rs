//! Connection state — the outcome indicator of the last fetch cycle.
//!
//! Mutated only by the fetch cycle, read only by the status indicator.
//! Overwritten wholesale each cycle, never merged.

/// Outcome of the most recent fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// No fetch has run yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Fetching,
    /// The last fetch succeeded.
    Connected,
    /// The last fetch failed (configuration, network, status, or parse).
    Offline,
}

impl ConnectionState {
    /// CSS class for the indicator dot.
    #[must_use]
    pub fn dot_class(self) -> &'static str {
        match self {
            Self::Idle | Self::Fetching => "dot",
            Self::Connected => "dot online",
            Self::Offline => "dot offline",
        }
    }

    /// Text shown next to the indicator dot.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Fetching => "Fetching\u{2026}",
            Self::Connected => "Connected",
            Self::Offline => "Offline",
        }
    }
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
