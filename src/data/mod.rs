//! # Data Source Boundary
//!
//! The core never reads files or talks to services. It asks a
//! [`DataSource`] for records and receives a finished [`Catalog`] snapshot
//! from the loader.
//!
//! [`Catalog`]: crate::core::catalog::Catalog

pub mod fixture;
pub mod loader;
pub mod source;

pub use fixture::{FixtureSource, UnavailableSource};
pub use loader::{load_catalog, load_with_timeout};
pub use source::{DataError, DataSource};
