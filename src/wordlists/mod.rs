//! Word lists for building a dictionary
//!
//! Provides an embedded fallback list and loading of cached lists from disk.
//! Fetching lists over the network is left to callers.

mod embedded;
pub mod loader;

pub use embedded::{FALLBACK, FALLBACK_COUNT};
