use crate::config::Config;
use crate::error::Result;
use crate::github::{GhesClient, Pagination};
use crate::output;
use log::{debug, info};
use std::path::Path;

/// Lists the organizations visible to the configured token and writes their
/// logins to `config.output`. Returns the number of lines written.
pub async fn run(config: &Config, pagination: Pagination, verbose: bool) -> Result<usize> {
    debug!("Using host {}", config.host);
    let client = GhesClient::new(&config.token, &config.base_uri(), verbose)?;

    let written = list_to_file(&client, &config.output, pagination).await?;

    client.check_rate_limit_if_verbose().await;

    Ok(written)
}

pub async fn list_to_file(client: &GhesClient, path: &Path, pagination: Pagination) -> Result<usize> {
    let orgs = client.list_organizations(pagination).await?;
    info!("Fetched {} organization(s)", orgs.len());

    output::write_logins(path, &orgs)?;
    Ok(orgs.len())
}
