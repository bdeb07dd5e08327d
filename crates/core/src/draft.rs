//! The store creation form and its validation.
//!
//! A [`StoreDraft`] holds the raw values exactly as the browser submitted
//! them. It lives for one request and is never stored. Validation checks
//! every field and reports all failures at once so the form can mark each
//! offending input.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::types::{Category, Country, Currency, Email, StoreName, Subdomain};

/// A field of the creation form, in the order the form renders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Domain,
    Country,
    Category,
    Currency,
    Email,
}

impl Field {
    /// Every field in form order.
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Domain,
        Self::Country,
        Self::Category,
        Self::Currency,
        Self::Email,
    ];

    /// The `name` attribute of the form control.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Domain => "domain",
            Self::Country => "country",
            Self::Category => "category",
            Self::Currency => "currency",
            Self::Email => "email",
        }
    }
}

/// Validation messages keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    /// Message recorded for `field`, if any.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Record `message` for `field`, replacing any previous message.
    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Remove the message for `field`.
    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate `(field, message)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Keep the parsed value, or record the error message against `field`.
    fn check<T, E: Display>(&mut self, field: Field, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.set(field, err.to_string());
                None
            }
        }
    }
}

/// Raw values of the store creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreDraft {
    pub name: String,
    pub domain: String,
    pub country: String,
    pub category: String,
    pub currency: String,
    pub email: String,
}

/// A draft that passed every field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidStore {
    pub name: StoreName,
    pub domain: Subdomain,
    pub country: Country,
    pub category: Category,
    pub currency: Currency,
    pub email: Email,
}

impl StoreDraft {
    /// Validate every field.
    ///
    /// # Errors
    ///
    /// Returns [`FieldErrors`] holding one message per failing field when
    /// any field is missing or malformed.
    pub fn validate(&self) -> Result<ValidStore, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = errors.check(Field::Name, StoreName::parse(&self.name));
        let domain = errors.check(Field::Domain, Subdomain::parse(&self.domain));
        let country = errors.check(Field::Country, Country::parse(&self.country));
        let category = errors.check(Field::Category, Category::parse(&self.category));
        let currency = errors.check(Field::Currency, Currency::parse(&self.currency));
        let email = errors.check(Field::Email, Email::parse(&self.email));

        match (name, domain, country, category, currency, email) {
            (
                Some(name),
                Some(domain),
                Some(country),
                Some(category),
                Some(currency),
                Some(email),
            ) => Ok(ValidStore {
                name,
                domain,
                country,
                category,
                currency,
                email,
            }),
            _ => Err(errors),
        }
    }

    /// Value currently held for `field`.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Domain => &self.domain,
            Field::Country => &self.country,
            Field::Category => &self.category,
            Field::Currency => &self.currency,
            Field::Email => &self.email,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn complete_draft() -> StoreDraft {
        StoreDraft {
            name: "Corner Shop".to_string(),
            domain: "cornershop".to_string(),
            country: "Bangladesh".to_string(),
            category: "Fashion".to_string(),
            currency: "BDT".to_string(),
            email: "owner@cornershop.com".to_string(),
        }
    }

    #[test]
    fn test_complete_draft_validates() {
        let store = complete_draft().validate().unwrap();
        assert_eq!(store.name.as_str(), "Corner Shop");
        assert_eq!(store.domain.as_str(), "cornershop");
        assert_eq!(store.country, Country::Bangladesh);
        assert_eq!(store.category, Category::Fashion);
        assert_eq!(store.currency, Currency::Bdt);
        assert_eq!(store.email.as_str(), "owner@cornershop.com");
    }

    #[test]
    fn test_empty_draft_reports_every_field() {
        let errors = StoreDraft::default().validate().unwrap_err();
        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get(Field::Name), Some("Store name is required"));
        assert_eq!(errors.get(Field::Domain), Some("Domain is required"));
        assert_eq!(errors.get(Field::Country), Some("Country is required"));
        assert_eq!(errors.get(Field::Category), Some("Category is required"));
        assert_eq!(errors.get(Field::Currency), Some("Currency is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
    }

    #[test]
    fn test_single_bad_field_blocks_submission() {
        let mut draft = complete_draft();
        draft.email = "owner@cornershop".to_string();

        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(Field::Email),
            Some("Email must be in a valid format")
        );
    }

    #[test]
    fn test_short_name_after_trim_is_rejected() {
        let mut draft = complete_draft();
        draft.name = "  ab ".to_string();

        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.get(Field::Name),
            Some("Store name must be at least 3 characters long")
        );
    }

    #[test]
    fn test_domain_with_symbols_is_rejected() {
        let mut draft = complete_draft();
        draft.domain = "corner-shop".to_string();

        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.get(Field::Domain),
            Some("Domain must contain only letters and numbers")
        );
    }

    #[test]
    fn test_errors_iterate_in_form_order() {
        let draft = StoreDraft {
            email: "bad".to_string(),
            name: "x".to_string(),
            ..complete_draft()
        };
        let fields: Vec<_> = draft
            .validate()
            .unwrap_err()
            .iter()
            .map(|(field, _)| field)
            .collect();
        assert_eq!(fields, [Field::Name, Field::Email]);
    }

    #[test]
    fn test_field_errors_set_and_clear() {
        let mut errors = FieldErrors::default();
        errors.set(Field::Domain, "Domain is already taken");
        assert_eq!(errors.get(Field::Domain), Some("Domain is already taken"));

        errors.clear(Field::Domain);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_value_lookup() {
        let draft = complete_draft();
        for field in Field::ALL {
            assert!(!draft.value(field).is_empty());
        }
        assert_eq!(draft.value(Field::Currency), "BDT");
    }

    #[test]
    fn test_missing_form_keys_default_to_empty() {
        let draft: StoreDraft = serde_json::from_str(r#"{"name":"Corner"}"#).unwrap();
        assert_eq!(draft.name, "Corner");
        assert!(draft.domain.is_empty());
    }
}
