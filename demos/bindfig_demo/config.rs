//! Configuration types for the bindfig demo: a small game-realm server.
//!
//! ```text
//! # bindfig-demo.conf
//! RealmName = "Demo Realm"
//! MaxConnections = 64
//! EnableTls = 1
//! LogLevel = Debug
//! RealmType = 0x08
//! Database = [host: db.local, port: 5433, timeout: 30]
//! ```

/// Root configuration. `motd` is deliberately unregistered: the file can't set it.
#[derive(Debug)]
pub struct RealmConfig {
    pub realm_name: String,
    pub max_connections: i32,
    pub enable_tls: bool,
    pub log_level: LogLevel,
    pub realm_type: RealmType,
    pub database: DatabaseConfig,
    pub motd: String,
}

impl Default for RealmConfig {
    fn default() -> Self {
        Self {
            realm_name: String::new(),
            max_connections: 0,
            enable_tls: false,
            log_level: LogLevel::default(),
            realm_type: RealmType::Normal,
            database: DatabaseConfig::default(),
            motd: "Welcome to the bindfig demo realm.".to_string(),
        }
    }
}

bindfig::config_entries!(RealmConfig {
    realm_name: "RealmName" = String::from("Unnamed Realm"),
    max_connections: "MaxConnections" = 10,
    enable_tls: "EnableTls" = false,
    log_level: "LogLevel" = LogLevel::Info,
    realm_type: "RealmType" = RealmType::Normal,
    database: "Database",
});

/// Database connection settings, written as a `[host: ..., port: ...]` group.
#[derive(Debug, Default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub timeout: u32,
}

bindfig::config_group!(DatabaseConfig { host, port, timeout });

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    #[default]
    Info = 2,
    Debug = 3,
}

bindfig::config_enum!(LogLevel: u8 { Error, Warn, Info, Debug });

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RealmType {
    Normal = 0x00,
    Pvp = 0x01,
    Roleplay = 0x06,
    RoleplayPvp = 0x08,
}

bindfig::config_enum!(RealmType: u8 { Normal, Pvp, Roleplay, RoleplayPvp });
