//! Properties file loading.
//!
//! A properties file is UTF-8 text with one `key=value` pair per line:
//!
//! ```text
//! # Network tracing
//! Ice.Trace.Network = 2
//! Ice.Default.Locator = IceGrid/Locator:tcp -p 4061   # registry
//! ```
//!
//! Each line goes through [`parse_line`]; lines it rejects are skipped. The
//! file is never written back.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, trace};

use crate::domain::store::PropertyStore;
use crate::parsing::line::parse_line;

/// Error type for property file operations.
#[derive(Debug, Error)]
pub enum PropertiesError {
    /// The file could not be opened or a line could not be read.
    #[error("I/O error reading properties from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PropertyStore {
    /// Loads the properties file at `path` into the store.
    ///
    /// Entries are committed as each line is read. If reading fails part way
    /// through, the lines already read stay committed.
    ///
    /// # Errors
    ///
    /// Returns [`PropertiesError::Io`] if the file cannot be opened or read,
    /// including when it is not valid UTF-8.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(), PropertiesError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading properties file");

        let file = File::open(path).map_err(|source| PropertiesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let committed = self.load_from_reader(BufReader::new(file), path)?;

        debug!(path = %path.display(), committed, "loaded properties file");
        Ok(())
    }

    /// Reads property lines from `reader` until end of input.
    ///
    /// `origin` only labels errors and log events. Returns the number of
    /// entries committed.
    ///
    /// # Errors
    ///
    /// Returns [`PropertiesError::Io`] when a line cannot be read.
    pub fn load_from_reader<R: BufRead>(
        &self,
        mut reader: R,
        origin: &Path,
    ) -> Result<usize, PropertiesError> {
        let io_error = |source| PropertiesError::Io {
            path: origin.to_path_buf(),
            source,
        };
        let mut committed = 0;
        let mut number = 0;
        let mut bytes = Vec::new();

        while next_line(&mut reader, &mut bytes).map_err(io_error)? {
            number += 1;
            let line = std::str::from_utf8(&bytes)
                .map_err(|e| io_error(io::Error::new(io::ErrorKind::InvalidData, e)))?;

            match parse_line(line) {
                Some((key, value)) => {
                    self.set_property(key, value);
                    committed += 1;
                }
                None if !line.trim().is_empty() => {
                    trace!(origin = %origin.display(), line = number, "skipping property line");
                }
                None => {}
            }
        }

        Ok(committed)
    }
}

/// Reads one line into `line`, without its terminator.
///
/// A line ends at `\n`, `\r\n` or a lone `\r`. Returns `false` once the
/// input is exhausted and nothing was read.
fn next_line<R: BufRead>(reader: &mut R, line: &mut Vec<u8>) -> io::Result<bool> {
    line.clear();
    loop {
        let available = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            return Ok(!line.is_empty());
        }

        match available.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(end) => {
                let terminator = available[end];
                line.extend_from_slice(&available[..end]);
                reader.consume(end + 1);
                if terminator == b'\r' {
                    skip_linefeed(reader)?;
                }
                return Ok(true);
            }
            None => {
                let len = available.len();
                line.extend_from_slice(available);
                reader.consume(len);
            }
        }
    }
}

/// Consumes a `\n` directly following a `\r`, if there is one.
fn skip_linefeed<R: BufRead>(reader: &mut R) -> io::Result<()> {
    loop {
        match reader.fill_buf() {
            Ok(buf) => {
                if buf.first() == Some(&b'\n') {
                    reader.consume(1);
                }
                return Ok(());
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
