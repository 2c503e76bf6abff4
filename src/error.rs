use std::path::PathBuf;
use thiserror::Error;

use crate::convert::ConvertError;

#[derive(Debug, Error)]
pub enum BindfigError {
    #[error("Config file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid value for '{key}': {source}")]
    InvalidValue { key: String, source: ConvertError },

    #[error("No config file named '{file_name}' found (searched {} directories)", .searched.len())]
    NoConfigFile {
        file_name: String,
        searched: Vec<PathBuf>,
    },

    #[error("No config file given; call .path() or .file_name() on the builder")]
    FileNameRequired,

    #[error("Configuration is already initialized")]
    AlreadyInitialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_formats() {
        let err = BindfigError::FileNotFound {
            path: "/etc/realm/server.conf".into(),
        };
        assert!(err.to_string().contains("server.conf"));
    }

    #[test]
    fn invalid_value_formats() {
        let err = BindfigError::InvalidValue {
            key: "LogLevel".into(),
            source: ConvertError::UnknownVariant {
                text: "Loud".into(),
                type_name: "LogLevel",
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("LogLevel"));
        assert!(msg.contains("Loud"));
    }

    #[test]
    fn file_name_required_formats() {
        let err = BindfigError::FileNameRequired;
        assert!(err.to_string().contains("file_name"));
    }

    #[test]
    fn no_config_file_counts_directories() {
        let err = BindfigError::NoConfigFile {
            file_name: "realm.conf".into(),
            searched: vec!["/a".into(), "/b".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("realm.conf"));
        assert!(msg.contains('2'));
    }
}
