//! # ice-properties
//!
//! A thread-safe configuration store mapping string keys to string values.
//!
//! The store is populated from three sources:
//!
//! - **Command-line arguments** of the form `--Prefix.key=value` (or the bare
//!   flag `--Prefix.key`, which means `=1`).
//! - **Properties files**: one `key=value` pair per line, `#` starts a comment.
//! - **The process environment**, consulted as a fallback whenever a key is
//!   not present in the store itself.
//!
//! # Architecture overview
//!
//! - **`domain`** – The [`PropertyStore`] itself with its typed accessors, and
//!   the bootstrap path that builds a store from an argument list and the
//!   configuration file it names.
//!
//! - **`parsing`** – Pure functions with no I/O: the line parser used for
//!   files and the option parser used for command-line tokens.
//!
//! - **`infrastructure`** – The seams to the outside world: the
//!   [`Environment`] lookup trait and file loading.
//!
//! # Example
//!
//! ```rust
//! use ice_properties::PropertyStore;
//!
//! let store = PropertyStore::new();
//! let rest = store.parse_command_line_options("Ice", ["--Ice.Trace.Network=2", "app.cfg"]);
//!
//! assert_eq!(store.get_property_as_int("Ice.Trace.Network"), 2);
//! assert_eq!(rest, vec!["app.cfg".to_string()]);
//! ```

pub mod domain;
pub mod infrastructure;
pub mod parsing;

pub use domain::bootstrap::{CONFIG_PROPERTY, CONFIG_PROPERTY_PREFIX};
pub use domain::store::PropertyStore;
pub use infrastructure::environment::{mock::MapEnvironment, Environment, ProcessEnvironment};
pub use infrastructure::file_source::PropertiesError;
pub use parsing::line::parse_line;
pub use parsing::option::{parse_flag, parse_option, OptionToken};
