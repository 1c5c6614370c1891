use crate::error::{GhesError, Result};
use std::path::PathBuf;

pub const TOKEN_VAR: &str = "GHES_TOKEN";
pub const HOST_VAR: &str = "GHES_HOST";
pub const OUTPUT_FILE: &str = "organizations.txt";

#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    /// Host name without scheme, e.g. `ghes.example.com`.
    pub host: String,
    pub output: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = required(&lookup, TOKEN_VAR)?;
        let host = required(&lookup, HOST_VAR)?;
        Ok(Self {
            token,
            host,
            output: PathBuf::from(OUTPUT_FILE),
        })
    }

    /// Scheme and authority the API lives under.
    pub fn base_uri(&self) -> String {
        format!("https://{}", self.host)
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, var: &'static str) -> Result<String> {
    match lookup(var) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(GhesError::MissingEnv(var)),
    }
}
