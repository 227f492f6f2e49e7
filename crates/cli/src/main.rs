mod commands;
mod config;
mod serve;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::config::{load_config, Overrides, Settings};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Pythagorean numerology engine.
#[derive(Parser)]
#[command(name = "numen", version, about = "Pythagorean numerology engine")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Locale for narrative text (e.g. tr, en, sr)
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Path to a replacement meanings JSON resource
    #[arg(long, global = true)]
    meanings: Option<PathBuf>,

    /// Path to a TOML config file (default: ./numen.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one numerology calculation
    Calc {
        /// Numerology type (see `numen types`)
        numerology_type: String,
        /// Full name
        #[arg(long)]
        name: Option<String>,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth_date: Option<String>,
        /// Target date for personal-cycles (default: today, UTC)
        #[arg(long)]
        target_date: Option<String>,
        /// Compatibility: first person's full name
        #[arg(long)]
        person_a_name: Option<String>,
        /// Compatibility: first person's birth date
        #[arg(long)]
        person_a_birth_date: Option<String>,
        /// Compatibility: second person's full name
        #[arg(long)]
        person_b_name: Option<String>,
        /// Compatibility: second person's birth date
        #[arg(long)]
        person_b_birth_date: Option<String>,
    },

    /// Compute the full personal profile for one person
    Profile {
        /// Full name
        #[arg(long)]
        name: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth_date: String,
    },

    /// Evaluate a JSON file holding one request or an array of requests
    Eval {
        /// Path to the requests JSON file
        file: PathBuf,
    },

    /// List the supported numerology types and their required fields
    Types,

    /// Start the numerology HTTP API server
    Serve {
        /// Port to listen on (default: 8080)
        #[arg(long)]
        port: Option<u16>,
        /// Path to TLS certificate PEM file (requires --tls-key)
        #[arg(long)]
        tls_cert: Option<PathBuf>,
        /// Path to TLS private key PEM file (requires --tls-cert)
        #[arg(long)]
        tls_key: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let is_serve = matches!(cli.command, Commands::Serve { .. });
    init_logging(if is_serve { "info" } else { "warn" });

    let port = match &cli.command {
        Commands::Serve { port, .. } => *port,
        _ => None,
    };
    let settings = match resolve_settings(&cli, port) {
        Ok(s) => s,
        Err(msg) => {
            report_error(&msg, cli.output, cli.quiet);
            process::exit(1);
        }
    };

    match cli.command {
        Commands::Calc {
            numerology_type,
            name,
            birth_date,
            target_date,
            person_a_name,
            person_a_birth_date,
            person_b_name,
            person_b_birth_date,
        } => {
            commands::calc::cmd_calc(
                commands::calc::CalcOptions {
                    numerology_type: &numerology_type,
                    name,
                    birth_date,
                    target_date,
                    person_a: (person_a_name, person_a_birth_date),
                    person_b: (person_b_name, person_b_birth_date),
                },
                &settings,
                cli.output,
                cli.quiet,
            );
        }
        Commands::Profile { name, birth_date } => {
            commands::profile::cmd_profile(&name, &birth_date, &settings, cli.output, cli.quiet);
        }
        Commands::Eval { file } => {
            commands::eval::cmd_eval(&file, &settings, cli.output, cli.quiet);
        }
        Commands::Types => {
            commands::types::cmd_types(cli.output, cli.quiet);
        }
        Commands::Serve {
            tls_cert, tls_key, ..
        } => {
            // Validate TLS flags: both must be provided or neither
            if tls_cert.is_some() != tls_key.is_some() {
                report_error(
                    "error: --tls-cert and --tls-key must both be provided",
                    cli.output,
                    cli.quiet,
                );
                process::exit(1);
            }
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    report_error(
                        &format!("failed to create tokio runtime: {}", e),
                        cli.output,
                        cli.quiet,
                    );
                    process::exit(1);
                }
            };
            if let Err(e) = rt.block_on(serve::start_server(settings, tls_cert, tls_key)) {
                report_error(&format!("server error: {}", e), cli.output, cli.quiet);
                process::exit(1);
            }
        }
    }
}

/// Merge the config file, environment and global flags.
fn resolve_settings(cli: &Cli, port: Option<u16>) -> Result<Settings, String> {
    let file = load_config(cli.config.as_deref())?;
    Settings::resolve(
        file,
        Overrides {
            locale: cli.locale.clone(),
            meanings: cli.meanings.clone(),
            port,
        },
    )
}

/// Install the stderr subscriber. `NUMEN_LOG` takes an `EnvFilter` directive.
fn init_logging(default_directive: &str) {
    let filter =
        EnvFilter::try_from_env("NUMEN_LOG").unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}
