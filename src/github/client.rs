use crate::error::{GhesError, Result};
use http::header::{ACCEPT, AUTHORIZATION};
use http::Uri;
use log::debug;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::{FromResponse, Octocrab, Page};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;

pub const ORGANIZATIONS_PATH: &str = "/api/v3/organizations";
pub const RATE_LIMIT_PATH: &str = "/api/v3/rate_limit";
pub const GHES_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// How much of the organization listing to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pagination {
    /// Only the first page the API returns.
    FirstPage,
    /// Follow `Link: rel="next"` until the listing is exhausted.
    FollowLinks,
}

pub struct GhesClient {
    octocrab: Octocrab,
    base_uri: String,
    verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgRecord {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub struct RateLimit {
    pub resources: RateLimitResources,
}

#[derive(Debug, Deserialize)]
pub struct RateLimitResources {
    pub core: RateLimitResource,
}

#[derive(Debug, Deserialize)]
pub struct RateLimitResource {
    pub limit: u64,
    pub remaining: u64,
    pub reset: i64,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    message: String,
}

impl GhesClient {
    /// `base_uri` is scheme plus authority, e.g. `https://ghes.example.com`.
    ///
    /// Every call is a single request: octocrab's retry layer is disabled.
    pub fn new(token: &str, base_uri: &str, verbose: bool) -> Result<Self> {
        let base_uri = base_uri.trim_end_matches('/').to_string();
        let octocrab = Octocrab::builder()
            .base_uri(base_uri.as_str())
            .map_err(|e| GhesError::Config(format!("Invalid host `{base_uri}`: {e}")))?
            .add_retry_config(RetryConfig::None)
            .add_header(AUTHORIZATION, format!("token {token}"))
            .add_header(ACCEPT, GHES_MEDIA_TYPE.to_string())
            .build()
            .map_err(|e| GhesError::GitHub(e.to_string()))?;
        Ok(Self {
            octocrab,
            base_uri,
            verbose,
        })
    }

    fn organizations_uri(&self) -> Result<Uri> {
        let uri = format!("{}{ORGANIZATIONS_PATH}", self.base_uri);
        uri.parse()
            .map_err(|e| GhesError::Config(format!("Invalid host `{}`: {e}", self.base_uri)))
    }

    pub async fn list_organizations(&self, pagination: Pagination) -> Result<Vec<OrgRecord>> {
        let first_uri = self.organizations_uri()?;
        debug!("Fetching organizations from {first_uri}");
        let first = self.fetch_page(first_uri.clone()).await?;

        let mut orgs = Vec::new();
        let mut next = first.next.clone();
        push_records(&mut orgs, first.items)?;
        debug!("Page 1: {} organization(s)", orgs.len());

        if pagination == Pagination::FirstPage {
            if next.is_some() {
                debug!("More pages available, not following them");
            }
            return Ok(orgs);
        }

        let mut visited = HashSet::from([first_uri]);
        let mut page_number = 1u32;
        while let Some(uri) = next.take() {
            if !visited.insert(uri.clone()) {
                return Err(GhesError::InvalidResponse(format!(
                    "pagination link points back to already fetched page {uri}"
                )));
            }
            page_number += 1;
            debug!("Following next link: {uri}");
            let page = self.fetch_page(uri).await?;
            next = page.next.clone();
            let before = orgs.len();
            push_records(&mut orgs, page.items)?;
            debug!(
                "Page {page_number}: {} organization(s)",
                orgs.len() - before
            );
        }

        Ok(orgs)
    }

    /// One GET; any non-2xx status becomes `GhesError::Api` whatever its body.
    async fn fetch_page(&self, uri: Uri) -> Result<Page<Value>> {
        let response = self.octocrab._get(uri).await?;
        let status = response.status();
        if !status.is_success() {
            let body = self.octocrab.body_to_string(response).await.unwrap_or_default();
            return Err(GhesError::Api {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }
        Ok(Page::<Value>::from_response(response).await?)
    }

    pub async fn get_rate_limit(&self) -> Result<RateLimit> {
        let rate_limit: RateLimit = self.octocrab.get(RATE_LIMIT_PATH, None::<&()>).await?;
        Ok(rate_limit)
    }

    pub async fn check_rate_limit_if_verbose(&self) {
        if !self.verbose {
            return;
        }
        match self.get_rate_limit().await {
            Ok(rl) => {
                let core = &rl.resources.core;
                crate::display::info(&format!(
                    "Rate limit: {}/{} remaining (resets at {})",
                    core.remaining,
                    core.limit,
                    chrono::DateTime::from_timestamp(core.reset, 0)
                        .map(|dt| dt.format("%H:%M:%S UTC").to_string())
                        .unwrap_or_else(|| core.reset.to_string())
                ));
            }
            Err(e) => crate::display::warn(&format!("Could not check rate limit: {e}")),
        }
    }
}

/// The API's JSON `message`, else the trimmed body, else the status reason.
fn error_message(status: http::StatusCode, body: &str) -> String {
    if let Ok(api) = serde_json::from_str::<ApiMessage>(body) {
        return api.message;
    }
    let body = body.trim();
    if body.is_empty() {
        status.canonical_reason().unwrap_or("no response body").to_string()
    } else {
        body.chars().take(200).collect()
    }
}

/// Validates each element and appends it; positions continue across pages.
fn push_records(orgs: &mut Vec<OrgRecord>, items: Vec<Value>) -> Result<()> {
    for item in items {
        let index = orgs.len();
        orgs.push(decode_org(index, item)?);
    }
    Ok(())
}

pub fn decode_org(index: usize, item: Value) -> Result<OrgRecord> {
    let Value::Object(mut fields) = item else {
        return Err(GhesError::InvalidResponse(format!(
            "element {index} is not an object"
        )));
    };
    match fields.remove("login") {
        Some(Value::String(login)) => Ok(OrgRecord { login }),
        _ => Err(GhesError::MissingLogin { index }),
    }
}
