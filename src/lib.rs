//! Bind a plain key/value config file onto typed Rust structs.
//!
//! Bindfig reads a small, human-authored format:
//!
//! ```text
//! # realmd.conf
//! MaxConnections = 64
//! EnableTls = 1
//! LogLevel = Debug
//! Database = [host: db.local, port: 5433]
//! Cache = [
//!     size: 0x400,
//!     policy: "lru",
//! ]
//! ```
//!
//! and fills the fields of a configuration struct you declare, using a field
//! registry that maps each field to its entry name and optional default:
//!
//! ```ignore
//! #[derive(Debug, Default)]
//! pub struct ServerConfig {
//!     pub max_connections: i32,
//!     pub enable_tls: bool,
//!     pub log_level: LogLevel,
//!     pub database: DbConfig,
//! }
//!
//! bindfig::config_entries!(ServerConfig {
//!     max_connections: "MaxConnections" = 10,
//!     enable_tls: "EnableTls" = false,
//!     log_level: "LogLevel" = LogLevel::Info,
//!     database: "Database",
//! });
//!
//! let config: ServerConfig = Bindfig::builder().path("realmd.conf").load()?;
//! ```
//!
//! # Pipeline
//!
//! ```text
//! file text ─► scan ─► EntryTable ─► bind (field registry) ─► convert ─► C
//! ```
//!
//! 1. **Scan** ([`scan`]): two passes pull out `key = [sub: value, ...]` groups
//!    and then `key = value` scalars. Later entries replace earlier ones.
//! 2. **Bind** ([`Configuration`], [`config_entries!`]): every registered
//!    field is looked up by its entry name. Found entries are converted;
//!    missing ones fall back to the declared default or are left alone.
//! 3. **Convert** ([`FromEntry`]): dispatch on the field type's [`Shape`]:
//!    booleans (`"0"` is false), integers (decimal or `0x` hex, narrowed with
//!    wraparound), enums ([`config_enum!`]), strings, and composites
//!    ([`config_group!`]) filled from a group by field name.
//!
//! # Errors and diagnostics
//!
//! Fatal problems return [`BindfigError`]: a missing or unreadable file
//! (before anything is scanned) or an entry whose text can't be converted to
//! its field's type. Everything else is a [`Diagnostic`]: duplicate keys,
//! duplicate sub-keys, fields without an entry. Diagnostics are logged through
//! the `log` facade, printed to stdout unless the builder is
//! [`quiet`](BindfigBuilder::quiet), and returned in a [`LoadReport`] by the
//! `*_report` methods.
//!
//! # Finding the file
//!
//! Either name it with [`path()`](BindfigBuilder::path), or give a
//! [`file_name()`](BindfigBuilder::file_name) / [`app_name()`](BindfigBuilder::app_name)
//! and let the builder check its [`SearchPath`]s, highest priority first.
//!
//! # Process-wide configuration
//!
//! [`Global`] holds a configuration that is loaded once at startup and read
//! everywhere afterwards.

pub mod convert;
pub mod error;
pub mod file;
pub mod scan;
pub mod table;
pub mod types;

mod bind;
mod builder;
#[cfg(feature = "clap")]
mod cli;
mod global;
mod macros;

#[cfg(test)]
mod fixtures;

use std::path::Path;

pub use bind::{Configuration, Field, FieldDescriptor};
pub use builder::{Bindfig, BindfigBuilder};
#[cfg(feature = "clap")]
pub use cli::ConfigFileArgs;
pub use convert::{ConvertError, FromEntry, Shape};
pub use error::BindfigError;
pub use global::Global;
pub use table::{Diagnostic, EntryTable, EntryValue, Group};
pub use types::{LoadReport, SearchPath};

/// Load `C` from the file at `path`, echoing diagnostics to stdout.
///
/// Shorthand for `Bindfig::builder().path(path).load()`.
pub fn load<C: Configuration + Default>(path: impl AsRef<Path>) -> Result<C, BindfigError> {
    Bindfig::builder().path(path).load()
}
