use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use urlz::api::UrlzApi;
use urlz::code::ShortCodeGenerator;
use urlz::config::UrlzConfig;
use urlz::error::{Result, UrlzError};
use urlz::store::fs::FileStore;

mod args;
mod print;
use args::{Cli, Commands};
use print::{print_mappings, print_messages};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = UrlzConfig::resolve(cli.file, &cwd, cli.verbose);
    init_logging(&config)?;

    let store = FileStore::new(config.store_path.clone());
    let mut api = UrlzApi::open(store, ShortCodeGenerator::from_clock());
    print_messages(&api.take_startup_messages());

    let result = match cli.command {
        Commands::Shorten { long_url } => api.shorten(long_url),
        Commands::Expand { short_code } => api.expand(&short_code),
        Commands::List { search } => api.list(search.as_deref()),
        Commands::Delete { short_code } => api.delete(&short_code),
    };

    print_mappings(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn init_logging(config: &UrlzConfig) -> Result<()> {
    let filter = match config.log_directive() {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        .map_err(|e| UrlzError::Logging(e.to_string()))
}
