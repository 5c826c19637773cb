//! Pure text parsers for property lines and command-line options.
//!
//! Nothing in this module touches the store, the file system or the
//! environment; callers decide what to do with the pairs produced here.

pub mod line;
pub mod option;

pub use line::parse_line;
pub use option::{parse_flag, parse_option, OptionToken};
