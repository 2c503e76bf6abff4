//! The binder: match a configuration type's field registry against the entry
//! table and write converted values into the fields.
//!
//! A configuration type lists its bindable fields through
//! [`Configuration::entries`], usually generated by
//! [`config_entries!`](crate::config_entries). Each [`FieldDescriptor`] pairs
//! an entry name with a field accessor and an optional default. Fields with no
//! descriptor are never touched.
//!
//! Per field:
//!
//! - entry present → convert with the field's type and assign; a conversion
//!   failure aborts the whole bind with [`BindfigError::InvalidValue`].
//! - entry absent, default declared → assign the default as-is.
//! - entry absent, no default → leave the field alone.
//!
//! Absent entries are reported as [`Diagnostic`]s, not errors.

use crate::convert::{self, ConvertError, FromEntry};
use crate::error::BindfigError;
use crate::table::{Diagnostic, EntryTable, EntryValue};

/// A type whose fields can be bound from an entry table.
pub trait Configuration: Sized + 'static {
    /// The field registry. Built fresh for every bind.
    fn entries() -> Vec<FieldDescriptor<Self>>;
}

/// What happened to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Converted,
    Defaulted,
    Missing,
}

type BindFn<C> = Box<dyn FnOnce(&mut C, Option<&EntryValue>) -> Result<Outcome, ConvertError>>;

/// One registry row: entry name plus a type-erased "assign into `C`" step.
pub struct FieldDescriptor<C> {
    name: &'static str,
    has_default: bool,
    bind: BindFn<C>,
}

impl<C: 'static> FieldDescriptor<C> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn has_default(&self) -> bool {
        self.has_default
    }
}

impl<C> std::fmt::Debug for FieldDescriptor<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("has_default", &self.has_default)
            .finish_non_exhaustive()
    }
}

/// A typed descriptor under construction. Converts into [`FieldDescriptor`].
pub struct Field<C, T> {
    name: &'static str,
    accessor: fn(&mut C) -> &mut T,
    default: Option<T>,
}

impl<C: 'static, T: FromEntry + 'static> Field<C, T> {
    /// Start a descriptor for the field reached through `accessor`.
    ///
    /// ```ignore
    /// Field::new("MaxConnections", |c: &mut ServerConfig| &mut c.max_connections)
    ///     .with_default(10)
    ///     .into()
    /// ```
    pub fn new(name: &'static str, accessor: fn(&mut C) -> &mut T) -> Self {
        Field {
            name,
            accessor,
            default: None,
        }
    }

    /// Value assigned when the entry is missing. Used as-is, never converted.
    pub fn with_default(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }
}

impl<C: 'static, T: FromEntry + 'static> From<Field<C, T>> for FieldDescriptor<C> {
    fn from(field: Field<C, T>) -> Self {
        let Field {
            name,
            accessor,
            default,
        } = field;
        let has_default = default.is_some();

        let bind: BindFn<C> = Box::new(move |config: &mut C, raw: Option<&EntryValue>| {
            match (raw, default) {
                (Some(raw), _) => {
                    *accessor(config) = convert::convert(raw)?;
                    Ok(Outcome::Converted)
                }
                (None, Some(default)) => {
                    *accessor(config) = default;
                    Ok(Outcome::Defaulted)
                }
                (None, None) => Ok(Outcome::Missing),
            }
        });

        FieldDescriptor {
            name,
            has_default,
            bind,
        }
    }
}

/// Bind every registered field of `config` from `table`.
///
/// Missing entries append a [`Diagnostic`]; the first conversion failure is
/// returned and stops the bind.
pub fn bind<C: Configuration>(
    config: &mut C,
    table: &EntryTable,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<(), BindfigError> {
    for descriptor in C::entries() {
        let FieldDescriptor { name, bind: assign, .. } = descriptor;
        let outcome = assign(config, table.get(name)).map_err(|source| {
            BindfigError::InvalidValue {
                key: name.to_string(),
                source,
            }
        })?;

        match outcome {
            Outcome::Converted => {}
            Outcome::Defaulted => diagnostics.push(Diagnostic::DefaultUsed {
                key: name.to_string(),
            }),
            Outcome::Missing => diagnostics.push(Diagnostic::MissingEntry {
                key: name.to_string(),
            }),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::ConvertError;
    use crate::fixtures::test::{DbConfig, LogLevel, ServerConfig};
    use crate::scan::scan;

    fn bind_text(text: &str) -> Result<(ServerConfig, Vec<Diagnostic>), BindfigError> {
        let mut diags = Vec::new();
        let table = scan(text, &mut diags);
        let mut config = ServerConfig::default();
        bind(&mut config, &table, &mut diags)?;
        Ok((config, diags))
    }

    #[test]
    fn registry_lists_entry_names() {
        let names: Vec<_> = ServerConfig::entries().iter().map(|d| d.name()).collect();
        assert_eq!(
            names,
            vec!["MaxConnections", "EnableTls", "Database", "LogLevel", "RealmId"]
        );
    }

    #[test]
    fn registry_records_defaults() {
        let entries = ServerConfig::entries();
        assert!(entries[0].has_default());
        assert!(!entries[2].has_default());
    }

    #[test]
    fn binds_present_entries() {
        let text = "MaxConnections = 64\nEnableTls = 1\nDatabase = [host: db.local, port: 5433]\n\
                    LogLevel = Debug\nRealmId = 0x10\n";
        let (config, diags) = bind_text(text).unwrap();
        assert_eq!(config.max_connections, 64);
        assert!(config.enable_tls);
        assert_eq!(config.database.host, "db.local");
        assert_eq!(config.database.port, 5433);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.realm_id, 16);
        assert!(diags.is_empty());
    }

    #[test]
    fn missing_with_default_uses_default() {
        let (config, diags) = bind_text("").unwrap();
        assert_eq!(config.max_connections, 10);
        assert!(!config.enable_tls);
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(diags.contains(&Diagnostic::DefaultUsed {
            key: "MaxConnections".into()
        }));
    }

    #[test]
    fn default_overrides_initial_value() {
        // The fixture's Default sets max_connections to 1; the declared default wins.
        assert_eq!(ServerConfig::default().max_connections, 1);
        let (config, _) = bind_text("").unwrap();
        assert_eq!(config.max_connections, 10);
    }

    #[test]
    fn missing_without_default_left_unset() {
        let (config, diags) = bind_text("MaxConnections = 5\n").unwrap();
        assert_eq!(config.database, DbConfig::default());
        assert_eq!(config.realm_id, 0);
        let unset: Vec<_> = diags.iter().filter(|d| d.is_unset_field()).collect();
        assert_eq!(
            unset,
            vec![
                &Diagnostic::MissingEntry {
                    key: "Database".into()
                },
                &Diagnostic::MissingEntry {
                    key: "RealmId".into()
                },
            ]
        );
    }

    #[test]
    fn one_diagnostic_per_missing_field() {
        let (_, diags) = bind_text("").unwrap();
        assert_eq!(diags.len(), ServerConfig::entries().len());
    }

    #[test]
    fn unmarked_field_untouched() {
        let mut diags = Vec::new();
        let table = scan("motd = hello\nMotd = hello\n", &mut diags);
        let mut config = ServerConfig {
            motd: "keep me".into(),
            ..ServerConfig::default()
        };
        bind(&mut config, &table, &mut diags).unwrap();
        assert_eq!(config.motd, "keep me");
    }

    #[test]
    fn entry_names_are_independent_of_field_names() {
        let (config, _) = bind_text("max_connections = 99\n").unwrap();
        assert_eq!(config.max_connections, 10);
    }

    #[test]
    fn conversion_failure_is_fatal_and_names_key() {
        let err = bind_text("MaxConnections = lots\n").unwrap_err();
        match &err {
            BindfigError::InvalidValue { key, source } => {
                assert_eq!(key, "MaxConnections");
                assert!(matches!(source, ConvertError::InvalidNumber { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("MaxConnections"));
    }

    #[test]
    fn unknown_enum_member_is_fatal() {
        let err = bind_text("LogLevel = Verbose\n").unwrap_err();
        assert!(matches!(
            err,
            BindfigError::InvalidValue {
                source: ConvertError::UnknownVariant { .. },
                ..
            }
        ));
    }

    #[test]
    fn scalar_for_composite_is_fatal() {
        let err = bind_text("Database = localhost\n").unwrap_err();
        assert!(matches!(
            err,
            BindfigError::InvalidValue {
                source: ConvertError::ExpectedGroup,
                ..
            }
        ));
    }

    #[test]
    fn group_for_scalar_is_fatal() {
        let err = bind_text("MaxConnections = [a: 1]\n").unwrap_err();
        assert!(matches!(
            err,
            BindfigError::InvalidValue {
                source: ConvertError::ExpectedScalar,
                ..
            }
        ));
    }

    #[test]
    fn bad_nested_value_names_field() {
        let err = bind_text("Database = [host: x, port: high]\n").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Database"), "{msg}");
        let BindfigError::InvalidValue { source, .. } = err else {
            panic!("expected InvalidValue");
        };
        assert!(matches!(
            source,
            ConvertError::InField { field: "port", .. }
        ));
    }

    #[test]
    fn hand_built_field_binds_like_the_macro() {
        struct Plain {
            port: u16,
        }
        impl Configuration for Plain {
            fn entries() -> Vec<FieldDescriptor<Self>> {
                vec![Field::new("Port", |c: &mut Plain| &mut c.port).with_default(80).into()]
            }
        }

        let mut diags = Vec::new();
        let mut config = Plain { port: 0 };
        bind(&mut config, &EntryTable::new(), &mut diags).unwrap();
        assert_eq!(config.port, 80);
        assert_eq!(diags, vec![Diagnostic::DefaultUsed { key: "Port".into() }]);

        let table = scan("Port = 0x1F90\n", &mut diags);
        bind(&mut config, &table, &mut diags).unwrap();
        assert_eq!(config.port, 8080);
    }
}

