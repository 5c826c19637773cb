//! Domain entities for the property store.
//!
//! This module holds the store itself and the rules for building one from a
//! process argument list. Text parsing lives in [`crate::parsing`]; the
//! environment and file system seams live in [`crate::infrastructure`].

/// Bootstrap a store from command-line arguments and the configuration file
/// they name.
pub mod bootstrap;

/// The mutex-guarded key/value store and its accessors.
///
/// See [`store::PropertyStore`] for the main type.
pub mod store;
