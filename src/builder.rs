use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::bind::{self, Configuration};
use crate::error::BindfigError;
use crate::file;
use crate::scan;
use crate::table::Diagnostic;
use crate::types::{LoadReport, SearchPath};

/// Entry point for loading a configuration type.
pub struct Bindfig;

impl Bindfig {
    pub fn builder<C: Configuration + Default>() -> BindfigBuilder<C> {
        BindfigBuilder::new()
    }
}

/// Builder for locating a config file and binding it onto `C`.
///
/// The file comes from one of two places:
///
/// - **Explicit**: [`path()`](Self::path) names the file directly. Nothing else
///   is consulted.
/// - **Discovered**: [`file_name()`](Self::file_name) (or [`app_name()`](Self::app_name),
///   which derives `{app_name}.conf`) is looked up across
///   [`search_paths()`](Self::search_paths), highest priority first.
///
/// Diagnostics are logged through the `log` facade and, unless
/// [`quiet()`](Self::quiet) is set, printed to stdout as they are raised.
pub struct BindfigBuilder<C> {
    path: Option<PathBuf>,
    app_name: Option<String>,
    file_name: Option<String>,
    search_paths: Option<Vec<SearchPath>>,
    echo: bool,
    _phantom: PhantomData<C>,
}

impl<C: Configuration + Default> BindfigBuilder<C> {
    fn new() -> Self {
        Self {
            path: None,
            app_name: None,
            file_name: None,
            search_paths: None,
            echo: true,
            _phantom: PhantomData,
        }
    }

    /// Read exactly this file. Takes precedence over discovery.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the application name. This derives:
    /// - `file_name` → `"{app_name}.conf"`
    /// - the directory used by [`SearchPath::Platform`]
    pub fn app_name(mut self, name: &str) -> Self {
        self.app_name = Some(name.to_string());
        self
    }

    /// Override the file name looked up in each search directory.
    pub fn file_name(mut self, name: &str) -> Self {
        self.file_name = Some(name.to_string());
        self
    }

    /// Replace the default search paths (`[Platform, Cwd]`).
    ///
    /// Priority-ascending: the last entry that holds the file wins.
    pub fn search_paths(mut self, paths: Vec<SearchPath>) -> Self {
        self.search_paths = Some(paths);
        self
    }

    /// Append a search path, starting from the defaults if none were set.
    pub fn add_search_path(mut self, path: SearchPath) -> Self {
        self.search_paths
            .get_or_insert_with(default_search_paths)
            .push(path);
        self
    }

    /// Print diagnostics to stdout (default: `true`).
    pub fn echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Shorthand for `.echo(false)`. Diagnostics are still logged and returned.
    pub fn quiet(self) -> Self {
        self.echo(false)
    }

    fn effective_file_name(&self) -> Result<String, BindfigError> {
        if let Some(name) = &self.file_name {
            return Ok(name.clone());
        }
        match &self.app_name {
            Some(app) => Ok(format!("{app}.conf")),
            None => Err(BindfigError::FileNameRequired),
        }
    }

    fn effective_search_paths(&self) -> Vec<SearchPath> {
        match &self.search_paths {
            Some(paths) => paths.clone(),
            None => default_search_paths(),
        }
    }

    /// Work out which file a load would read, without reading it.
    pub fn resolve_path(&self) -> Result<PathBuf, BindfigError> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        let file_name = self.effective_file_name()?;
        let dirs =
            file::expand_search_paths(&self.effective_search_paths(), self.app_name.as_deref());
        file::find_config_file(&dirs, &file_name)
    }

    /// Read the config file and bind it onto a fresh `C`.
    pub fn load(self) -> Result<C, BindfigError> {
        self.load_report().map(LoadReport::into_config)
    }

    /// Like [`load()`](Self::load), but also returns the diagnostics.
    pub fn load_report(self) -> Result<LoadReport<C>, BindfigError> {
        let path = self.resolve_path()?;
        let text = file::read_config_file(&path)?;
        let mut report = self.bind_text(&text)?;
        report.source = Some(path);
        Ok(report)
    }

    /// Bind config text that is already in memory.
    pub fn load_str(self, text: &str) -> Result<C, BindfigError> {
        self.load_str_report(text).map(LoadReport::into_config)
    }

    /// Like [`load_str()`](Self::load_str), but also returns the diagnostics.
    pub fn load_str_report(self, text: &str) -> Result<LoadReport<C>, BindfigError> {
        self.bind_text(text)
    }

    fn bind_text(&self, text: &str) -> Result<LoadReport<C>, BindfigError> {
        let mut diagnostics = Vec::new();
        let table = scan::scan(text, &mut diagnostics);
        self.emit(&diagnostics);

        let scanned = diagnostics.len();
        let mut config = C::default();
        let result = bind::bind(&mut config, &table, &mut diagnostics);
        self.emit(&diagnostics[scanned..]);
        result?;

        Ok(LoadReport {
            config,
            diagnostics,
            source: None,
        })
    }

    fn emit(&self, diagnostics: &[Diagnostic]) {
        for diagnostic in diagnostics {
            match diagnostic {
                Diagnostic::DefaultUsed { .. } => log::info!("{diagnostic}"),
                _ => log::warn!("{diagnostic}"),
            }
            if self.echo {
                println!("{diagnostic}");
            }
        }
    }
}

fn default_search_paths() -> Vec<SearchPath> {
    vec![SearchPath::Platform, SearchPath::Cwd]
}
