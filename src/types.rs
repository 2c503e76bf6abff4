use std::path::PathBuf;

use crate::table::Diagnostic;

/// A directory to look for the config file in, when no explicit path is given.
///
/// Listed in priority-ascending order on the builder: the last directory that
/// holds the file wins.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPath {
    /// Platform config directory for the builder's `app_name`
    /// (XDG on Linux, ~/Library/Application Support on macOS).
    Platform,
    /// A subdirectory of the user's home directory, e.g. `Home(".realmd")`.
    Home(&'static str),
    /// Current working directory.
    Cwd,
    /// An explicit directory.
    Path(PathBuf),
}

/// A bound configuration plus every notice raised while producing it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport<C> {
    pub config: C,
    pub diagnostics: Vec<Diagnostic>,
    /// The file that was read; `None` for in-memory text.
    pub source: Option<PathBuf>,
}

impl<C> LoadReport<C> {
    /// Notices about fields that were left at their zero value.
    pub fn unset_fields(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_unset_field())
    }

    pub fn into_config(self) -> C {
        self.config
    }
}
