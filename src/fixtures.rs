#[cfg(test)]
pub mod test {
    /// Database connection settings, bound from a `[host: ..., port: ...]` group.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct DbConfig {
        pub host: String,
        pub port: u16,
        pub timeout: u32,
        pub pooled: bool,
        pub log: LogLevel,
    }

    crate::config_group!(DbConfig {
        host,
        port,
        timeout,
        pooled,
        log
    });

    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    #[repr(u8)]
    pub enum LogLevel {
        Error = 0,
        Warn = 1,
        #[default]
        Info = 2,
        Debug = 3,
        Trace = 0x10,
    }

    crate::config_enum!(LogLevel: u8 { Error, Warn, Info, Debug, Trace });

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[repr(u16)]
    pub enum Opcode {
        AuthChallenge = 2,
        Ping = 0x1DA,
    }

    crate::config_enum!(Opcode: u16 { AuthChallenge, Ping });

    #[derive(Debug, Clone, PartialEq)]
    pub struct ServerConfig {
        pub max_connections: i32,
        pub enable_tls: bool,
        pub database: DbConfig,
        pub log_level: LogLevel,
        pub realm_id: u32,
        /// Not registered; the binder must leave it alone.
        pub motd: String,
    }

    impl Default for ServerConfig {
        fn default() -> Self {
            Self {
                max_connections: 1,
                enable_tls: false,
                database: DbConfig::default(),
                log_level: LogLevel::Error,
                realm_id: 0,
                motd: String::new(),
            }
        }
    }

    crate::config_entries!(ServerConfig {
        max_connections: "MaxConnections" = 10,
        enable_tls: "EnableTls" = false,
        database: "Database",
        log_level: "LogLevel" = LogLevel::Info,
        realm_id: "RealmId",
    });

    /// The smallest configuration: one field, no default.
    #[derive(Debug, Default, PartialEq)]
    pub struct NameOnly {
        pub name: String,
    }

    crate::config_entries!(NameOnly { name: "Name" });

    #[test]
    fn server_config_registry_is_complete() {
        use crate::Configuration;
        assert_eq!(ServerConfig::entries().len(), 5);
        assert_eq!(NameOnly::entries().len(), 1);
    }
}
