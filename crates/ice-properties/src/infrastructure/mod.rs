//! Infrastructure seams: the environment lookup and property file loading.
//!
//! The store never reads `std::env` or the file system directly. Environment
//! access goes through the [`environment::Environment`] trait so tests can
//! substitute a fixed map; file access is isolated in [`file_source`].

pub mod environment;
pub mod file_source;
