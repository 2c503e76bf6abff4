//! Clap adapter for bindfig.
//!
//! Compiled only with the `clap` Cargo feature (on by default). It provides
//! [`ConfigFileArgs`], a flattenable argument group that lets users point a
//! program at its config file and silence load notices:
//!
//! ```ignore
//! #[derive(Parser)]
//! struct Cli {
//!     #[command(flatten)]
//!     config: ConfigFileArgs,
//! }
//!
//! let cli = Cli::parse();
//! let config: ServerConfig = cli
//!     .config
//!     .apply(Bindfig::builder().app_name("realmd"))
//!     .load()?;
//! ```
//!
//! Without `--config`, the builder's own discovery settings apply.

use std::path::PathBuf;

use clap::Args;

use crate::bind::Configuration;
use crate::builder::BindfigBuilder;

/// Clap-derived args selecting the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigFileArgs {
    /// Read configuration from this file instead of searching for one.
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Don't print configuration notices (duplicates, missing entries).
    #[arg(long = "quiet-config")]
    pub quiet: bool,
}

impl ConfigFileArgs {
    /// Feed the parsed flags into a builder.
    pub fn apply<C: Configuration + Default>(
        self,
        builder: BindfigBuilder<C>,
    ) -> BindfigBuilder<C> {
        let builder = match self.config {
            Some(path) => builder.path(path),
            None => builder,
        };
        if self.quiet { builder.quiet() } else { builder }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Bindfig;
    use crate::fixtures::test::NameOnly;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        config: ConfigFileArgs,
    }

    fn parse(args: &[&str]) -> ConfigFileArgs {
        TestCli::try_parse_from(args).unwrap().config
    }

    #[test]
    fn no_flags() {
        let args = parse(&["app"]);
        assert_eq!(args.config, None);
        assert!(!args.quiet);
    }

    #[test]
    fn long_config_flag() {
        let args = parse(&["app", "--config", "/etc/realmd.conf"]);
        assert_eq!(args.config, Some(PathBuf::from("/etc/realmd.conf")));
    }

    #[test]
    fn short_config_flag() {
        let args = parse(&["app", "-c", "realmd.conf"]);
        assert_eq!(args.config, Some(PathBuf::from("realmd.conf")));
    }

    #[test]
    fn quiet_flag() {
        assert!(parse(&["app", "--quiet-config"]).quiet);
    }

    #[test]
    fn config_requires_value() {
        assert!(TestCli::try_parse_from(["app", "--config"]).is_err());
    }

    #[test]
    fn apply_sets_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cli.conf");
        fs::write(&path, "Name = from-cli\n").unwrap();

        let args = ConfigFileArgs {
            config: Some(path.clone()),
            quiet: true,
        };
        let builder = args.apply(Bindfig::builder::<NameOnly>());
        assert_eq!(builder.resolve_path().unwrap(), path);
        assert_eq!(builder.load().unwrap().name, "from-cli");
    }

    #[test]
    fn apply_without_path_keeps_discovery() {
        let builder = ConfigFileArgs::default().apply(Bindfig::builder::<NameOnly>());
        assert!(builder.resolve_path().is_err());
    }
}
