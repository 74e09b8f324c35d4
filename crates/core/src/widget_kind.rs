//! Widget type enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Kind of widget the renderer can produce
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    /// Analog or digital clock for a timezone
    Clock,
    /// City weather card with demo data
    Weather,
    /// Countdown to a calendar date
    Countdown,
}

impl WidgetKind {
    pub const ALL_VARIANTS: &'static [WidgetKind] =
        &[WidgetKind::Clock, WidgetKind::Weather, WidgetKind::Countdown];

    /// Returns the query-string name of the widget kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Clock => "clock",
            Self::Weather => "weather",
            Self::Countdown => "countdown",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidgetKind {
    type Err = CoreError;

    /// Matching is exact: `Clock` or ` clock` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clock" => Ok(Self::Clock),
            "weather" => Ok(Self::Weather),
            "countdown" => Ok(Self::Countdown),
            other => Err(CoreError::InvalidWidgetType(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_variant_from_its_name() {
        for kind in WidgetKind::ALL_VARIANTS {
            assert_eq!(kind.as_str().parse::<WidgetKind>().ok(), Some(*kind));
        }
    }

    #[test]
    fn rejects_unknown_and_miscased_names() {
        for raw in ["", "Clock", "calendar", " weather", "countdown "] {
            assert!(
                matches!(raw.parse::<WidgetKind>(), Err(CoreError::InvalidWidgetType(_))),
                "expected rejection for {raw:?}"
            );
        }
    }
}
