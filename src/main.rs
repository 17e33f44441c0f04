use clap::Parser;
use cryptobox::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Encrypt {
            ref io,
            ref info,
            password,
        } => cryptobox::cli::commands::encrypt::execute(&cli, io, info.as_deref(), password),
        Commands::Decrypt {
            ref io,
            ref info,
            password,
        } => cryptobox::cli::commands::decrypt::execute(&cli, io, info.as_deref(), password),
        Commands::DeriveKey {
            ref salt,
            ref info,
            length,
            ref hash,
        } => cryptobox::cli::commands::derive_key::execute(
            &cli,
            salt.as_deref(),
            info.as_deref(),
            length,
            hash.as_deref(),
        ),
        Commands::Random { length, ref format } => {
            cryptobox::cli::commands::random::execute(length, format)
        }
        Commands::Ciphers => cryptobox::cli::commands::ciphers::execute(&cli),
        Commands::Inspect { ref source, json } => {
            cryptobox::cli::commands::inspect::execute(&cli, source, json)
        }
    };

    if let Err(e) = result {
        cryptobox::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
