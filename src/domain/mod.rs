//! Domain layer for the Countrydex plugin.
//!
//! This module contains the core domain types, independent of Zellij-specific
//! APIs or infrastructure concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`country`]: Country record as decoded from the countries API

pub mod country;
pub mod error;

pub use country::{Country, CountryCode, CountryName, Flags, Translation};
pub use error::{CountrydexError, FailureKind, Result};
