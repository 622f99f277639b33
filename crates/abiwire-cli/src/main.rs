//! # abiwire-cli
//!
//! Command-line interface for the abiwire ABI codec.
//!
//! ## Usage
//!
//! ```bash
//! # Encode a call
//! abiwire encode --types '[{"uint":32},"bool"]' --values '[69,true]' --selector 0xcdcd77c0
//!
//! # Decode, one result per parameter
//! abiwire decode --types '["string",{"array":{"uint":256}}]' 0x...
//!
//! # Inspect a type's layout
//! abiwire classify --type '{"fixed_array":["string",2]}'
//!
//! # Configuration
//! abiwire config --show
//! abiwire config --set-strict true
//! ```

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod error;
mod json;
mod output;

pub use config::Config;
pub use error::CliError;
pub use output::Output;

/// abiwire CLI
#[derive(Parser, Debug)]
#[command(name = "abiwire")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

/// CLI commands
#[derive(Debug, Subcommand)]
enum Commands {
    /// Encode values into ABI data
    Encode(commands::encode::EncodeCommand),
    /// Decode ABI data
    Decode(commands::decode::DecodeCommand),
    /// Show whether a type is dynamic and its head width
    Classify(commands::classify::ClassifyCommand),
    /// Show or edit configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
        /// Set strict decoding
        #[arg(long)]
        set_strict: Option<bool>,
        /// Set maximum nesting depth
        #[arg(long)]
        set_max_depth: Option<usize>,
        /// Set whether hex output gets a 0x prefix
        #[arg(long)]
        set_prefix: Option<bool>,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mut config = Config::load();

    let result = match cli.command {
        Commands::Encode(cmd) => cmd.execute(&config, cli.json),
        Commands::Decode(cmd) => cmd.execute(&config, cli.json),
        Commands::Classify(cmd) => cmd.execute(&config, cli.json),
        Commands::Config {
            show,
            set_strict,
            set_max_depth,
            set_prefix,
        } => handle_config(&mut config, show, set_strict, set_max_depth, set_prefix, cli.json),
    };

    if let Err(e) = result {
        if cli.json {
            println!(
                "{}",
                serde_json::json!({
                    "error": e.to_string(),
                    "success": false
                })
            );
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn handle_config(
    config: &mut Config,
    show: bool,
    set_strict: Option<bool>,
    set_max_depth: Option<usize>,
    set_prefix: Option<bool>,
    json: bool,
) -> Result<(), CliError> {
    let mut modified = false;

    if let Some(strict) = set_strict {
        config.decoder.strict = strict;
        modified = true;
    }

    if let Some(max_depth) = set_max_depth {
        if max_depth == 0 {
            return Err(CliError::InvalidInput("max depth must be at least 1".to_string()));
        }
        config.decoder.max_depth = max_depth;
        modified = true;
    }

    if let Some(prefix) = set_prefix {
        config.prefix_output = prefix;
        modified = true;
    }

    if modified {
        config.save()?;
        Output::new(json)
            .field("status", "saved")
            .message("Configuration saved")
            .print();
    } else if show {
        Output::new(json)
            .field_bool("prefix_output", config.prefix_output)
            .field_bool("strict", config.decoder.strict)
            .field_u64("max_depth", config.decoder.max_depth as u64)
            .message(&format!(
                "Prefix output: {}\nStrict: {}\nMax depth: {}",
                config.prefix_output, config.decoder.strict, config.decoder.max_depth
            ))
            .print();
    } else {
        Output::new(json)
            .message(
                "Use --show to display config, or --set-strict/--set-max-depth/--set-prefix to modify",
            )
            .print();
    }

    Ok(())
}
