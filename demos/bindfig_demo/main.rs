//! # bindfig demo application
//!
//! A sample CLI that loads a realm-server configuration with bindfig. It exists
//! to demonstrate and manually check the loader, not to do anything useful.
//!
//! ```sh
//! cargo run --example bindfig_demo -- --config demo.conf show
//! cargo run --example bindfig_demo -- --config demo.conf entries
//! cargo run --example bindfig_demo -- --config demo.conf diagnostics --json
//! ```
//!
//! Without `--config`, `bindfig-demo.conf` is searched for in the platform
//! config directory, then `~/.bindfig-demo/`, then the working directory.

mod config;

use clap::{Parser, Subcommand};

use bindfig::{Bindfig, BindfigBuilder, ConfigFileArgs, EntryValue, SearchPath};

use config::RealmConfig;

/// bindfig demo: load and inspect a realm configuration file.
#[derive(Parser, Debug)]
#[command(name = "bindfig-demo")]
struct Cli {
    #[command(flatten)]
    config: ConfigFileArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the bound configuration.
    Show,
    /// Print the raw entries scanned from the file, before binding.
    Entries,
    /// Print the notices raised while loading.
    Diagnostics {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn make_builder(cli: &Cli) -> BindfigBuilder<RealmConfig> {
    let builder = Bindfig::builder()
        .app_name("bindfig-demo")
        .search_paths(vec![
            SearchPath::Platform,
            SearchPath::Home(".bindfig-demo"),
            SearchPath::Cwd,
        ]);
    cli.config.clone().apply(builder)
}

fn show(config: &RealmConfig) {
    let entries = [
        ("RealmName", config.realm_name.clone()),
        ("MaxConnections", config.max_connections.to_string()),
        ("EnableTls", config.enable_tls.to_string()),
        ("LogLevel", format!("{:?}", config.log_level)),
        ("RealmType", format!("{:?}", config.realm_type)),
        ("Database.host", config.database.host.clone()),
        ("Database.port", config.database.port.to_string()),
        ("Database.timeout", config.database.timeout.to_string()),
        ("(motd)", config.motd.clone()),
    ];
    let width = entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (key, value) in &entries {
        println!("{key:<width$}  {value}");
    }
}

fn entries(builder: &BindfigBuilder<RealmConfig>) -> Result<(), bindfig::BindfigError> {
    let path = builder.resolve_path()?;
    let text = bindfig::file::read_config_file(&path)?;
    let mut notices = Vec::new();
    let table = bindfig::scan::scan(&text, &mut notices);
    if table.is_empty() {
        println!("(no entries in {})", path.display());
    }
    for (key, value) in table.iter() {
        match value {
            EntryValue::Scalar(s) => println!("{key} = {s}"),
            EntryValue::Group(group) => {
                let body: Vec<String> = group.iter().map(|(k, v)| format!("{k}: {v}")).collect();
                println!("{key} = [{}]", body.join(", "));
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let builder = make_builder(&cli);

    let result = match cli.command {
        Commands::Show => builder.load().map(|config| show(&config)),
        Commands::Entries => entries(&builder),
        Commands::Diagnostics { json } => builder.quiet().load_report().map(|report| {
            if json {
                match serde_json::to_string_pretty(&report.diagnostics) {
                    Ok(out) => println!("{out}"),
                    Err(e) => eprintln!("Failed to encode diagnostics: {e}"),
                }
            } else {
                for diagnostic in &report.diagnostics {
                    println!("{diagnostic}");
                }
            }
        }),
    };

    if let Err(e) = result {
        eprintln!("Failed to load config:\n{e}");
        std::process::exit(1);
    }
}
