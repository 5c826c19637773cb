//! In-memory environment for tests and embedding.
//!
//! Lets callers supply fallback values without touching the real process
//! environment, which is shared by every test running in the same binary.

use std::collections::HashMap;

use super::Environment;

/// An [`Environment`] backed by a fixed map.
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    values: HashMap<String, String>,
}

impl MapEnvironment {
    /// Creates an environment with no variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable, returning the updated environment.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnvironment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Environment for MapEnvironment {
    fn lookup(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_environment_returns_configured_values() {
        let env = MapEnvironment::new().with("Ice.Trace", "2");

        assert_eq!(env.lookup("Ice.Trace").as_deref(), Some("2"));
        assert_eq!(env.lookup("Ice.Other"), None);
    }

    #[test]
    fn test_map_environment_collects_from_pairs() {
        let env: MapEnvironment = [("a", "1"), ("b", "2")].into_iter().collect();

        assert_eq!(env.lookup("b").as_deref(), Some("2"));
    }
}
