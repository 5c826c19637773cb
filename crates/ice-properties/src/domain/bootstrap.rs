//! Building a store from a process argument list.
//!
//! Startup looks for a `--Ice.Config[=path]` directive among the arguments.
//! The first one found is removed from the list and committed like any other
//! option; the file it names is then loaded into the new store. Afterwards
//! `Ice.Config` always holds the resolved path, or `""` when no file was
//! named.
//!
//! ```text
//! args:    server --Ice.Config=server.cfg --Ice.Trace.Network=1
//!                 └────── consumed ──────┘
//! returns: server --Ice.Trace.Network=1     (general options are left for
//!                                            parse_command_line_options)
//! ```

use std::sync::Arc;

use tracing::{debug, trace};

use crate::domain::store::PropertyStore;
use crate::infrastructure::environment::{Environment, ProcessEnvironment};
use crate::infrastructure::file_source::PropertiesError;
use crate::parsing::option::{parse_flag, FLAG_DEFAULT_VALUE};

/// Option prefix under which the configuration file directive lives.
pub const CONFIG_PROPERTY_PREFIX: &str = "Ice";

/// Property holding the configuration file path.
pub const CONFIG_PROPERTY: &str = "Ice.Config";

/// Any argument starting with this text is treated as the directive.
const CONFIG_DIRECTIVE: &str = "--Ice.Config";

impl PropertyStore {
    /// Builds a store from `args`, falling back to the process environment.
    ///
    /// Returns the store and the arguments with the configuration directive
    /// removed. See [`from_args_with_environment`](Self::from_args_with_environment).
    ///
    /// # Errors
    ///
    /// Returns [`PropertiesError::Io`] if the named configuration file cannot
    /// be read.
    pub fn from_args<I, S>(args: I) -> Result<(Self, Vec<String>), PropertiesError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_args_with_environment(args, Arc::new(ProcessEnvironment))
    }

    /// Builds a store from `args` with a custom environment fallback.
    ///
    /// 1. The first argument starting with `--Ice.Config` is removed and
    ///    parsed as an option (a bare flag means `=1`).
    /// 2. The `Ice.Config` value is resolved; the flag marker `1` means "no
    ///    path" and becomes `""`.
    /// 3. A non-empty path is loaded with [`load`](Self::load).
    /// 4. `Ice.Config` is set to the resolved path, overriding anything the
    ///    file itself assigned to it.
    ///
    /// Only one directive is consumed; later ones stay in the returned list.
    ///
    /// # Errors
    ///
    /// Returns [`PropertiesError::Io`] if the named configuration file cannot
    /// be read.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use ice_properties::{MapEnvironment, PropertyStore, CONFIG_PROPERTY};
    ///
    /// let (store, rest) = PropertyStore::from_args_with_environment(
    ///     ["server", "--Ice.Config"],
    ///     Arc::new(MapEnvironment::new()),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(rest, vec!["server".to_string()]);
    /// assert_eq!(store.get_property(CONFIG_PROPERTY), "");
    /// ```
    pub fn from_args_with_environment<I, S>(
        args: I,
        environment: Arc<dyn Environment>,
    ) -> Result<(Self, Vec<String>), PropertiesError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::with_environment(environment);
        let mut remaining: Vec<String> = args.into_iter().map(Into::into).collect();

        if let Some(index) = remaining
            .iter()
            .position(|arg| arg.starts_with(CONFIG_DIRECTIVE))
        {
            let directive = remaining.remove(index);
            match parse_flag(&directive) {
                Some((key, value)) => {
                    debug!(%key, %value, "consumed configuration directive");
                    store.set_property(key, value);
                }
                None => trace!(%directive, "dropping malformed configuration directive"),
            }
        }

        let mut config_path = store.get_property(CONFIG_PROPERTY);
        if config_path == FLAG_DEFAULT_VALUE {
            config_path.clear();
        }

        if !config_path.is_empty() {
            store.load(&config_path)?;
        }

        store.set_property(CONFIG_PROPERTY, config_path);
        Ok((store, remaining))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
