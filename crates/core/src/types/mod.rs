//! Core types for Store Builder.
//!
//! This module provides type-safe wrappers for the store form fields and
//! the product data rendered on the detail page.

pub mod email;
pub mod price;
pub mod product;
pub mod store;

pub use email::{Email, EmailError};
pub use price::Price;
pub use product::{Product, ProductId, ProductIdError};
pub use store::{
    Category, Country, Currency, SelectionError, StoreName, StoreNameError, Subdomain,
    SubdomainError,
};
