mod cli;
mod containers;
mod db;
mod error;
mod fmt;
mod form;
mod models;
mod receipt;
mod router;
mod session;
mod settings;
mod store;
mod views;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn init_tracing() {
    let filter = EnvFilter::try_from_env("BILLED_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Login { email, admin } => cli::login::login(&email, admin),
        Commands::Logout => cli::login::logout(),
        Commands::New(args) => cli::new::run(args),
        Commands::Bills => cli::bills::list(),
        Commands::Render { path } => cli::render::run(&path),
        Commands::Export { output } => cli::export::run(output),
        Commands::Status => cli::status::run(),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "billed", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
