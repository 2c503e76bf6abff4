//! Declarative registries for bindable types.
//!
//! Three macros cover the three kinds of type the binder deals with:
//!
//! - [`config_entries!`](crate::config_entries): the top-level configuration
//!   type. Each listed field gets an entry name and, optionally, a default.
//! - [`config_group!`](crate::config_group): a composite filled from a
//!   `[sub: value, ...]` group. Sub-keys match the field names directly.
//! - [`config_enum!`](crate::config_enum): a fieldless enum parsed by member
//!   name or by discriminant.
//!
//! The structs and enums themselves are ordinary Rust items; the macros only
//! generate trait impls, so derives and doc comments stay where they belong.

/// Implement [`Configuration`](crate::Configuration) for a struct.
///
/// ```ignore
/// #[derive(Debug, Default)]
/// pub struct ServerConfig {
///     pub max_connections: i32,
///     pub enable_tls: bool,
///     pub database: DbConfig,
/// }
///
/// bindfig::config_entries!(ServerConfig {
///     max_connections: "MaxConnections" = 10,
///     enable_tls: "EnableTls" = false,
///     database: "Database",
/// });
/// ```
///
/// Defaults are written in the field's own type and are assigned unconverted.
/// Fields not listed are never touched by the binder.
#[macro_export]
macro_rules! config_entries {
    ($ty:ident { $($field:ident : $name:literal $(= $default:expr)?),* $(,)? }) => {
        impl $crate::Configuration for $ty {
            fn entries() -> ::std::vec::Vec<$crate::FieldDescriptor<Self>> {
                ::std::vec![
                    $(
                        $crate::Field::<$ty, _>::new($name, |config: &mut $ty| {
                            &mut config.$field
                        })
                        $(.with_default($default))?
                        .into()
                    ),*
                ]
            }
        }
    };
}

/// Implement [`FromEntry`](crate::FromEntry) for a composite struct.
///
/// ```ignore
/// #[derive(Debug, Default)]
/// pub struct DbConfig {
///     pub host: String,
///     pub port: u16,
/// }
///
/// bindfig::config_group!(DbConfig { host, port });
/// ```
///
/// The conversion starts from `Default::default()` and assigns each listed
/// field whose name appears as a sub-key. Unknown sub-keys are ignored.
#[macro_export]
macro_rules! config_group {
    ($ty:ident { $($field:ident),* $(,)? }) => {
        impl $crate::FromEntry for $ty {
            const SHAPE: $crate::Shape = $crate::Shape::Composite;

            #[allow(unused_mut)]
            fn from_group(group: &$crate::Group) -> ::std::result::Result<Self, $crate::ConvertError> {
                let mut value = <$ty as ::std::default::Default>::default();
                $(
                    if let ::std::option::Option::Some(text) = group.get(::std::stringify!($field)) {
                        value.$field = $crate::convert::convert_field(::std::stringify!($field), text)?;
                    }
                )*
                ::std::result::Result::Ok(value)
            }
        }
    };
}

/// Implement [`FromEntry`](crate::FromEntry) for a fieldless enum.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// #[repr(u8)]
/// pub enum LogLevel {
///     Error = 0,
///     Warn = 1,
///     #[default]
///     Info = 2,
/// }
///
/// bindfig::config_enum!(LogLevel: u8 { Error, Warn, Info });
/// ```
///
/// Text starting with `0x` is parsed as a number of the backing integer type
/// and matched against the discriminants. Other text is matched against the
/// member names (case-sensitive), then, if it is a decimal number, against
/// the discriminants.
#[macro_export]
macro_rules! config_enum {
    ($ty:ident : $repr:ty { $($variant:ident),+ $(,)? }) => {
        impl $crate::FromEntry for $ty {
            const SHAPE: $crate::Shape = $crate::Shape::Enumeration;

            fn from_scalar(text: &str) -> ::std::result::Result<Self, $crate::ConvertError> {
                let unknown = || $crate::ConvertError::UnknownVariant {
                    text: text.to_string(),
                    type_name: ::std::stringify!($ty),
                };

                let number = if $crate::convert::is_hex(text) {
                    <$repr as $crate::convert::ConfigInteger>::parse_entry(text)?
                } else {
                    $(
                        if text == ::std::stringify!($variant) {
                            return ::std::result::Result::Ok($ty::$variant);
                        }
                    )+
                    match <$repr as $crate::convert::ConfigInteger>::parse_entry(text) {
                        ::std::result::Result::Ok(number) => number,
                        ::std::result::Result::Err(_) => return ::std::result::Result::Err(unknown()),
                    }
                };

                $(
                    if ($ty::$variant as $repr) == number {
                        return ::std::result::Result::Ok($ty::$variant);
                    }
                )+
                ::std::result::Result::Err(unknown())
            }
        }
    };
}
