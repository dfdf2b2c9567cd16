//! Wayfinder - Main entry point
//!
//! Resolves a keyword query against the configured namespaces and prints
//! the expanded URL, e.g. `wayfinder --data-dir data "w Berlin"`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wayfinder_application::ports::NamespaceSource;
use wayfinder_application::{ResolveOutcome, ResolveQuery};
use wayfinder_domain::Query;
use wayfinder_infrastructure::{ConfigRepository, YamlNamespaceRepository};

#[derive(Parser)]
#[command(name = "wayfinder", about = "Resolve keyword queries into URLs")]
struct Cli {
    /// Path to the user config file
    #[arg(long, default_value = "config.yml")]
    config: PathBuf,

    /// Directory holding site namespace files (<name>.yml)
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Directory holding user namespace files, shadowing site ones
    #[arg(long)]
    user_dir: Option<PathBuf>,

    /// The query, e.g. "g berlin"
    query: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("wayfinder: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let query = Query::parse(&cli.query.join(" "))?;

    let config = ConfigRepository::new().load(&cli.config).await?;
    let env = config.env();

    let mut repository = YamlNamespaceRepository::new(&cli.data_dir);
    if let Some(user_dir) = &cli.user_dir {
        repository = repository.with_user_dir(user_dir);
    }
    let namespaces = repository.load(&config.namespace_names()).await?;
    tracing::debug!(count = namespaces.len(), "namespaces loaded");

    match ResolveQuery::execute(&query, &env, &namespaces) {
        ResolveOutcome::Resolved { url, shortcut } => {
            if let Some(deprecation) = &shortcut.deprecated {
                if let Some(alternative) = &deprecation.alternative {
                    eprintln!("deprecated shortcut; try instead: {}", alternative.query);
                }
            }
            println!("{url}");
            Ok(ExitCode::SUCCESS)
        }
        ResolveOutcome::NotFound => {
            eprintln!("no shortcut found for: {}", query.text);
            Ok(ExitCode::FAILURE)
        }
        ResolveOutcome::NoneReachable => {
            eprintln!("shortcuts matched but none is reachable: {}", query.text);
            Ok(ExitCode::FAILURE)
        }
    }
}
