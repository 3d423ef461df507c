mod checksum;
mod cli;
mod db;
mod error;
mod extractor;
mod fmt;
mod importer;
mod models;
mod parser;
mod session;
mod settings;
mod store;

use clap::Parser;
use tracing_subscriber::{fmt as log_fmt, EnvFilter};

use cli::{Cli, Commands};

fn init_logging() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    log_fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    dotenvy::dotenv().ok();
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => cli::init::run(cli.db),
        Commands::Import {
            file,
            selector,
            date_format,
        } => cli::import::run(cli.db, &file, selector, date_format),
        Commands::Status => cli::status::run(cli.db),
        Commands::List { limit, from, to } => cli::list::run(cli.db, limit, from, to),
        Commands::Backup { output } => cli::backup::run(cli.db, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
