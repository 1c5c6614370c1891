mod commands;
mod config;
mod display;
mod error;
mod github;
mod output;

use clap::Parser;
use config::Config;
use github::Pagination;

#[derive(Parser)]
#[command(
    name = "ghes-orgs",
    version,
    about = "Write the organizations of a GitHub Enterprise Server to organizations.txt",
    long_about = "Write the organizations of a GitHub Enterprise Server to organizations.txt.\n\n\
        Reads GHES_TOKEN (access token) and GHES_HOST (host name without scheme) \
        from the environment. Every page of the listing is followed unless \
        --single-page is given."
)]
pub struct Cli {
    /// Show verbose output (debug logging, rate limits)
    #[arg(long)]
    verbose: bool,

    /// Only read the first page of the organization listing
    #[arg(long)]
    single_page: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(&cli).await {
        display::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> error::Result<()> {
    let pagination = if cli.single_page {
        Pagination::FirstPage
    } else {
        Pagination::FollowLinks
    };

    let config = Config::from_env()?;
    let count = commands::discover::run(&config, pagination, cli.verbose).await?;

    display::success(&format!(
        "Wrote {count} organization(s) to {}",
        config.output.display()
    ));
    Ok(())
}
