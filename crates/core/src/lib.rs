//! Store Builder Core - Domain types and form validation.
//!
//! This crate provides the types shared by the Store Builder components:
//! - `web` - Server-rendered store creation form and product pages
//! - `cli` - Command-line tools for checking domains and products
//!
//! # Architecture
//!
//! The core crate contains only types and validation rules - no I/O, no HTTP
//! clients. Every rule the creation form enforces lives here so the web
//! handlers and the CLI report identical messages.
//!
//! # Modules
//!
//! - [`types`] - Validated newtypes for store fields, emails, products and prices
//! - [`draft`] - The raw store form and its field-by-field validation
//! - [`availability`] - Subdomain availability states and their messages

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod availability;
pub mod draft;
pub mod types;

pub use availability::DomainAvailability;
pub use draft::{Field, FieldErrors, StoreDraft, ValidStore};
pub use types::*;
