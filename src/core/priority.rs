use crate::error::TicketDeskError;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority class of a ticket, fixed at admission
///
/// VIP and Emergency are both "high" classes: they are served ahead of every
/// Normal ticket but are not ordered relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Normal,
    Vip,
    Emergency,
}

impl Priority {
    /// All classes in menu order
    pub const ALL: [Self; 3] = [Self::Normal, Self::Vip, Self::Emergency];

    /// Numeric level used by the menu (0-2)
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Vip => 1,
            Self::Emergency => 2,
        }
    }

    /// Look up a class by its numeric level
    #[must_use]
    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(Self::Normal),
            1 => Some(Self::Vip),
            2 => Some(Self::Emergency),
            _ => None,
        }
    }

    /// Whether tickets of this class jump to the front of the line
    #[must_use]
    pub const fn is_high(self) -> bool {
        matches!(self, Self::Vip | Self::Emergency)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "Normal"),
            Self::Vip => write!(f, "VIP"),
            Self::Emergency => write!(f, "Emergency"),
        }
    }
}

impl FromStr for Priority {
    type Err = TicketDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(level) = trimmed.parse::<u8>() {
            return Self::from_level(level)
                .ok_or_else(|| TicketDeskError::InvalidPriority(trimmed.to_string()));
        }

        match trimmed.to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "vip" => Ok(Self::Vip),
            "emergency" => Ok(Self::Emergency),
            _ => Err(TicketDeskError::InvalidPriority(trimmed.to_string())),
        }
    }
}

// Accepts the same names and levels as `FromStr`, so config files and
// environment overrides can say `vip` or `1`.
impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PriorityVisitor;

        impl Visitor<'_> for PriorityVisitor {
            type Value = Priority;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a priority name (normal, vip, emergency) or level 0-2")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Priority, E> {
                value.parse().map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Priority, E> {
                u8::try_from(value)
                    .ok()
                    .and_then(Priority::from_level)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(value), &self))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Priority, E> {
                u8::try_from(value)
                    .ok()
                    .and_then(Priority::from_level)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(value), &self))
            }
        }

        deserializer.deserialize_any(PriorityVisitor)
    }
}
