//! Subdomain availability as reported by the remote checker.

use serde::{Deserialize, Serialize};

/// Shown under the domain field when the checker reports the name as taken.
pub const TAKEN_MESSAGE: &str = "Domain is already taken";

/// Shown under the domain field when the checker reports the name as free.
pub const AVAILABLE_MESSAGE: &str = "Domain is available!";

/// Shown under the domain field when the check itself failed.
pub const CHECK_FAILED_MESSAGE: &str = "Error checking domain";

/// Indicator text while a check is in flight.
pub const CHECKING_MESSAGE: &str = "Checking domain availability...";

/// Blocking alert shown when the submit-time re-check fails.
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to create store. Please try again.";

/// What is known about a subdomain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainAvailability {
    /// Not checked yet, or the last check failed.
    #[default]
    Unknown,
    Available,
    Taken,
}

impl DomainAvailability {
    /// Map the checker's `taken` flag.
    #[must_use]
    pub const fn from_taken(taken: bool) -> Self {
        if taken { Self::Taken } else { Self::Available }
    }

    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }

    #[must_use]
    pub const fn is_taken(self) -> bool {
        matches!(self, Self::Taken)
    }

    /// Feedback line for the domain field, if this state has one.
    #[must_use]
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::Unknown => None,
            Self::Available => Some(AVAILABLE_MESSAGE),
            Self::Taken => Some(TAKEN_MESSAGE),
        }
    }
}
