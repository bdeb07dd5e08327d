//! Store form field types.
//!
//! Each type parses one field of the creation form. The error `Display`
//! output is the exact message rendered under the field.

use core::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Store Name
// =============================================================================

/// Errors that can occur when parsing a [`StoreName`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreNameError {
    /// The input is empty after trimming.
    #[error("Store name is required")]
    Empty,
    /// The trimmed input is shorter than the minimum.
    #[error("Store name must be at least {min} characters long")]
    TooShort {
        /// Minimum number of characters.
        min: usize,
    },
}

/// Display name of a store, stored trimmed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct StoreName(String);

impl StoreName {
    /// Minimum length after trimming, in UTF-16 code units as a browser
    /// counts `value.length`.
    pub const MIN_LENGTH: usize = 3;

    /// Parse a `StoreName`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty or shorter than
    /// [`Self::MIN_LENGTH`] characters.
    pub fn parse(s: &str) -> Result<Self, StoreNameError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(StoreNameError::Empty);
        }

        if trimmed.encode_utf16().count() < Self::MIN_LENGTH {
            return Err(StoreNameError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Subdomain
// =============================================================================

/// Errors that can occur when parsing a [`Subdomain`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SubdomainError {
    /// The input is empty after trimming.
    #[error("Domain is required")]
    Empty,
    /// The input contains something other than ASCII letters and digits.
    #[error("Domain must contain only letters and numbers")]
    InvalidCharacters,
}

/// The user-chosen prefix placed in front of the platform's parent domain.
///
/// Only `[a-zA-Z0-9]` is accepted. The check runs on the input as typed,
/// so leading or trailing spaces are rejected rather than trimmed away.
///
/// ```
/// use store_builder_core::Subdomain;
///
/// let sub = Subdomain::parse("myshop42").unwrap();
/// assert_eq!(sub.hostname("expressitbd.com"), "myshop42.expressitbd.com");
///
/// assert!(Subdomain::parse("my-shop").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Subdomain(String);

impl Subdomain {
    /// Parent domain stores are created under unless configured otherwise.
    pub const DEFAULT_PARENT: &'static str = "expressitbd.com";

    /// Parse a `Subdomain`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is blank or contains any character
    /// outside `[a-zA-Z0-9]`.
    pub fn parse(s: &str) -> Result<Self, SubdomainError> {
        if s.trim().is_empty() {
            return Err(SubdomainError::Empty);
        }

        if !s.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(SubdomainError::InvalidCharacters);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the subdomain as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full hostname under `parent`, e.g. `shop.expressitbd.com`.
    #[must_use]
    pub fn hostname(&self, parent: &str) -> String {
        format!("{}.{parent}", self.0)
    }
}

impl fmt::Display for Subdomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Fixed Selections
// =============================================================================

/// Error for a select field that was left empty or holds an unlisted value.
///
/// Both variants render the same "required" message: the option list is
/// the only legal input, so an unlisted value is treated as no selection.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Nothing was selected.
    #[error("{0} is required")]
    Missing(&'static str),
    /// The submitted value is not one of the listed options.
    #[error("{0} is required")]
    Unlisted(&'static str),
}

/// Macro to define a select-field enum with a fixed option list.
///
/// Creates an enum with:
/// - `Serialize`/`Deserialize` using the option text as the wire value
/// - `ALL` in display order, and the field `LABEL` used in messages
/// - `as_str()`, `parse()`, `Display` and `FromStr`
macro_rules! define_choice {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every option, in the order the form lists them.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Field label used in validation messages.
            pub const LABEL: &'static str = $label;

            /// Option text as submitted by the form.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }

            /// Parse a submitted option.
            ///
            /// # Errors
            ///
            /// Returns [`SelectionError`] if the value is empty or unlisted.
            pub fn parse(s: &str) -> Result<Self, SelectionError> {
                if s.is_empty() {
                    return Err(SelectionError::Missing(Self::LABEL));
                }
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| option.as_str() == s)
                    .ok_or(SelectionError::Unlisted(Self::LABEL))
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = SelectionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

define_choice! {
    /// Country the store operates in.
    Country, "Country" {
        Bangladesh => "Bangladesh",
        Usa => "USA",
        Canada => "Canada",
        Uk => "UK",
    }
}

define_choice! {
    /// Main product category of the store.
    Category, "Category" {
        Fashion => "Fashion",
        Electronics => "Electronics",
        Food => "Food",
        Books => "Books",
        Any => "Any",
    }
}

define_choice! {
    /// Currency prices are shown in.
    Currency, "Currency" {
        Bdt => "BDT",
        Usd => "USD",
        Cad => "CAD",
        Gbp => "GBP",
    }
}
