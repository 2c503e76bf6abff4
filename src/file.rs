//! Locating and reading the config file.
//!
//! An explicit path is read as-is. Otherwise the builder's [`SearchPath`] list
//! is resolved to concrete directories and checked for `{dir}/{file_name}`,
//! starting from the highest-priority (last) entry. The first file found is
//! the only one read; there is no merging across directories.
//!
//! A missing file is fatal and is reported before any scanning happens.

use std::path::{Path, PathBuf};

use crate::error::BindfigError;
use crate::types::SearchPath;

/// Resolve a [`SearchPath`] to a directory.
///
/// `app_name` feeds `SearchPath::Platform`. Returns `None` when the directory
/// can't be determined (no home directory, no app name for `Platform`).
pub fn resolve_search_path(sp: &SearchPath, app_name: Option<&str>) -> Option<PathBuf> {
    match sp {
        SearchPath::Platform => {
            let proj = directories::ProjectDirs::from("", "", app_name?)?;
            Some(proj.config_dir().to_path_buf())
        }
        SearchPath::Home(subdir) => {
            let user = directories::UserDirs::new()?;
            Some(user.home_dir().join(subdir))
        }
        SearchPath::Cwd => std::env::current_dir().ok(),
        SearchPath::Path(p) => Some(p.clone()),
    }
}

/// Resolve all search paths, keeping their priority-ascending order.
pub fn expand_search_paths(search_paths: &[SearchPath], app_name: Option<&str>) -> Vec<PathBuf> {
    search_paths
        .iter()
        .filter_map(|sp| resolve_search_path(sp, app_name))
        .collect()
}

/// Find the highest-priority `{dir}/{file_name}` that exists.
pub fn find_config_file(dirs: &[PathBuf], file_name: &str) -> Result<PathBuf, BindfigError> {
    dirs.iter()
        .rev()
        .map(|dir| dir.join(file_name))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| BindfigError::NoConfigFile {
            file_name: file_name.to_string(),
            searched: dirs.to_vec(),
        })
}

/// Read a config file, mapping a missing file to [`BindfigError::FileNotFound`].
pub fn read_config_file(path: &Path) -> Result<String, BindfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            log::info!("loading config from path: {}", path.display());
            Ok(content)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(BindfigError::FileNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(BindfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn resolve_explicit_path() {
        let p = PathBuf::from("/etc/realmd");
        assert_eq!(
            resolve_search_path(&SearchPath::Path(p.clone()), None),
            Some(p)
        );
    }

    #[test]
    fn resolve_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(resolve_search_path(&SearchPath::Cwd, None), Some(cwd));
    }

    #[test]
    fn platform_needs_app_name() {
        assert_eq!(resolve_search_path(&SearchPath::Platform, None), None);
    }

    #[test]
    fn expand_keeps_order() {
        let dirs = expand_search_paths(
            &[
                SearchPath::Path("/a".into()),
                SearchPath::Platform,
                SearchPath::Path("/b".into()),
            ],
            None,
        );
        assert_eq!(dirs, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
    }

    #[test]
    fn last_directory_wins() {
        let low = TempDir::new().unwrap();
        let high = TempDir::new().unwrap();
        fs::write(low.path().join("realm.conf"), "A = 1\n").unwrap();
        fs::write(high.path().join("realm.conf"), "A = 2\n").unwrap();

        let dirs = vec![low.path().to_path_buf(), high.path().to_path_buf()];
        let found = find_config_file(&dirs, "realm.conf").unwrap();
        assert_eq!(found, high.path().join("realm.conf"));
    }

    #[test]
    fn missing_in_high_falls_back_to_low() {
        let low = TempDir::new().unwrap();
        let high = TempDir::new().unwrap();
        fs::write(low.path().join("realm.conf"), "A = 1\n").unwrap();

        let dirs = vec![low.path().to_path_buf(), high.path().to_path_buf()];
        let found = find_config_file(&dirs, "realm.conf").unwrap();
        assert_eq!(found, low.path().join("realm.conf"));
    }

    #[test]
    fn nothing_found() {
        let dir = TempDir::new().unwrap();
        let err = find_config_file(&[dir.path().to_path_buf()], "realm.conf").unwrap_err();
        assert!(matches!(err, BindfigError::NoConfigFile { .. }));
    }

    #[test]
    fn directory_with_file_name_is_skipped() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("realm.conf")).unwrap();
        assert!(find_config_file(&[dir.path().to_path_buf()], "realm.conf").is_err());
    }

    #[test]
    fn read_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("realm.conf");
        fs::write(&path, "Name = x\n").unwrap();
        assert_eq!(read_config_file(&path).unwrap(), "Name = x\n");
    }

    #[test]
    fn read_missing_is_file_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.conf");
        match read_config_file(&path) {
            Err(BindfigError::FileNotFound { path: p }) => assert_eq!(p, path),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }
}
