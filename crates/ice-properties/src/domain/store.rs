//! The property store: a mutex-guarded map from string keys to string values.
//!
//! # Lookup order
//!
//! Every value-returning accessor resolves a key in two steps:
//!
//! 1. The store's own mapping (values set with [`PropertyStore::set_property`]
//!    or parsed from arguments and files).
//! 2. The store's [`Environment`], which by default reads process environment
//!    variables.
//!
//! Only when both miss does the accessor fall back to an empty string or the
//! caller-supplied default.
//!
//! # Thread safety
//!
//! The mapping sits behind a single [`Mutex`]. Each public method holds the
//! lock for the duration of that one call, so a caller always sees a
//! consistent mapping, but two calls are never atomic together: a concurrent
//! `set_property` between two `get_property` calls is visible to the second.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::trace;

use crate::infrastructure::environment::{Environment, ProcessEnvironment};
use crate::parsing::option::{parse_option, OptionToken};

/// A thread-safe configuration store.
///
/// Share it across threads with an `Arc<PropertyStore>`; all methods take
/// `&self`. [`Clone`] produces an independent store with a deep copy of the
/// mapping.
///
/// # Examples
///
/// ```rust
/// use ice_properties::PropertyStore;
///
/// let store = PropertyStore::new();
/// store.set_property("Ice.MessageSizeMax", "2048");
///
/// assert_eq!(store.get_property("Ice.MessageSizeMax"), "2048");
/// assert_eq!(store.get_property_as_int("Ice.MessageSizeMax"), 2048);
/// assert_eq!(store.get_property_with_default("Ice.Unset.Example", "none"), "none");
/// ```
pub struct PropertyStore {
    properties: Mutex<HashMap<String, String>>,
    /// Fallback for keys absent from `properties`. Stateless, so clones share it.
    environment: Arc<dyn Environment>,
}

impl PropertyStore {
    /// Creates an empty store that falls back to the process environment.
    pub fn new() -> Self {
        Self::with_environment(Arc::new(ProcessEnvironment))
    }

    /// Creates an empty store with a custom environment fallback.
    pub fn with_environment(environment: Arc<dyn Environment>) -> Self {
        Self {
            properties: Mutex::new(HashMap::new()),
            environment,
        }
    }

    /// Returns the environment this store falls back to.
    pub fn environment(&self) -> Arc<dyn Environment> {
        Arc::clone(&self.environment)
    }

    /// Returns the value for `key`, or `""` if neither the store nor the
    /// environment has it.
    pub fn get_property(&self, key: &str) -> String {
        self.resolve(key).unwrap_or_default()
    }

    /// Returns the value for `key`, or `default` if neither the store nor the
    /// environment has it.
    pub fn get_property_with_default(&self, key: &str, default: &str) -> String {
        self.resolve(key).unwrap_or_else(|| default.to_owned())
    }

    /// Same as [`get_property_as_int_with_default`](Self::get_property_as_int_with_default)
    /// with a default of `0`.
    pub fn get_property_as_int(&self, key: &str) -> i32 {
        self.get_property_as_int_with_default(key, 0)
    }

    /// Returns the value for `key` parsed as a base-10 `i32`.
    ///
    /// An absent key yields `default`. A key that is present but does not
    /// parse (`"abc"`, `"1.5"`, out of range) yields `0`, **not** `default`;
    /// callers that need to tell the two apart should read the string value.
    pub fn get_property_as_int_with_default(&self, key: &str, default: i32) -> i32 {
        match self.resolve(key) {
            None => default,
            Some(value) => value.parse().unwrap_or(0),
        }
    }

    /// Inserts or overwrites the entry for `key`.
    ///
    /// The key is not validated; an empty key or one containing `=` is stored
    /// as given, even though the parsers never produce such keys.
    pub fn set_property(&self, key: impl Into<String>, value: impl Into<String>) {
        self.lock().insert(key.into(), value.into());
    }

    /// Returns all entries whose key starts with `prefix`, in no particular
    /// order. An empty prefix returns every entry.
    pub fn get_properties(&self, prefix: &str) -> Vec<(String, String)> {
        self.lock()
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Serializes every entry as a `--key=value` token, in no particular order.
    pub fn get_command_line_options(&self) -> Vec<String> {
        self.lock()
            .iter()
            .map(|(key, value)| format!("--{key}={value}"))
            .collect()
    }

    /// Commits every `--{prefix}.key[=value]` token in `args` and returns the
    /// other tokens in their original order.
    ///
    /// A bare `--{prefix}.key` is committed as `key=1`. A matching token that
    /// yields no key (for example `--Ice.Foo#x`) is dropped: it is neither
    /// committed nor returned. Later tokens for the same key win.
    pub fn parse_command_line_options<I, S>(&self, prefix: &str, args: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut remaining = Vec::new();
        let mut parsed = Vec::new();

        for arg in args {
            let token = arg.as_ref();
            match parse_option(prefix, token) {
                OptionToken::Property { key, value } => parsed.push((key, value)),
                OptionToken::Malformed => trace!(token, prefix, "dropping malformed option"),
                OptionToken::Passthrough(other) => remaining.push(other.to_owned()),
            }
        }

        self.lock().extend(parsed);
        remaining
    }

    /// Returns a sorted copy of the whole mapping, taken under one lock.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.lock()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Returns the number of entries held by the store itself.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if the store holds no entries of its own.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Looks `key` up in the mapping, then in the environment.
    fn resolve(&self, key: &str) -> Option<String> {
        let stored = self.lock().get(key).cloned();
        stored.or_else(|| self.environment.lookup(key))
    }

    /// Acquires the mapping. No operation panics while holding the lock, so a
    /// poisoned mutex still guards a consistent map and is recovered.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.properties.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for PropertyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for PropertyStore {
    fn clone(&self) -> Self {
        Self {
            properties: Mutex::new(self.lock().clone()),
            environment: Arc::clone(&self.environment),
        }
    }
}

impl fmt::Debug for PropertyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyStore")
            .field("properties", &self.snapshot())
            .finish_non_exhaustive()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
