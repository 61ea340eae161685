//! Tank status — the fill-status label reported alongside each reading.
//!
//! The wire value is an open-ended string. Four labels are recognized
//! case-insensitively; anything else is carried through verbatim and
//! rendered with the unknown-status fallback.

use serde::{Deserialize, Serialize};

/// Fill status of the tank as reported by the sensor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TankStatus {
    Full,
    Medium,
    Low,
    Empty,
    /// Any unrecognized label, carried through verbatim.
    Other(String),
}

impl TankStatus {
    /// Parse a wire label, case-insensitively.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "full" => Self::Full,
            "medium" => Self::Medium,
            "low" => Self::Low,
            "empty" => Self::Empty,
            _ => Self::Other(label.to_string()),
        }
    }

    /// Icon shown next to the status label.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Full => "\u{1F4A7}",
            Self::Medium => "\u{1F4A6}",
            Self::Low => "\u{26A0}\u{FE0F}",
            Self::Empty => "\u{1F6A8}",
            Self::Other(_) => "\u{2753}",
        }
    }

    /// Display label: the canonical capitalized form, or the raw wire
    /// string for unrecognized values.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Full => "Full",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Empty => "Empty",
            Self::Other(raw) => raw,
        }
    }

    /// CSS class for the status text color. Unrecognized labels get none.
    #[must_use]
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            Self::Full => Some("status-full"),
            Self::Medium => Some("status-medium"),
            Self::Low => Some("status-low"),
            Self::Empty => Some("status-empty"),
            Self::Other(_) => None,
        }
    }
}

impl From<String> for TankStatus {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<TankStatus> for String {
    fn from(status: TankStatus) -> Self {
        status.label().to_string()
    }
}

impl std::fmt::Display for TankStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
