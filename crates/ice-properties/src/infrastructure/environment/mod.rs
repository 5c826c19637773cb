//! Environment lookup used as the fallback for absent properties.
//!
//! Every value-returning accessor on the store first consults its own
//! mapping and only then asks the [`Environment`]. The production
//! implementation reads process environment variables; tests use
//! [`mock::MapEnvironment`] or a `mockall` mock.

pub mod mock;

/// A key → optional value lookup consulted when the store has no entry.
#[cfg_attr(test, mockall::automock)]
pub trait Environment: Send + Sync {
    /// Returns the value for `key`, or `None` if the environment has none.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Reads values from the process environment.
///
/// Variables that are unset or not valid Unicode are reported as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
