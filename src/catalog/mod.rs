//! In-memory country catalog and response decoding.
//!
//! The countries API is queried once per plugin load. The decoded records are
//! held in an explicitly constructed [`CountryCatalog`] owned by the list view
//! model; nothing is persisted between plugin loads.
//!
//! # Modules
//!
//! - [`cache`]: The owned country set and its fetch timestamp
//! - [`decode`]: Conversion of a `WebRequestResult` payload into countries

pub mod cache;
pub mod decode;

pub use cache::CountryCatalog;
pub use decode::{decode_response, DEFAULT_ENDPOINT};
