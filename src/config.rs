use anyhow::{Context, Result, bail};
use clap::Parser;
use std::env::{self, VarError};

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub empty_list_not_found: bool,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug)]
#[command(author, version, about = "Content catalog API")]
pub struct Args {
    /// Host to bind to (overrides CONTENT_CATALOG_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides CONTENT_CATALOG_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Database URL (overrides CONTENT_CATALOG_DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Connection pool size (overrides CONTENT_CATALOG_MAX_CONNECTIONS)
    #[arg(long)]
    pub max_connections: Option<u32>,

    /// Answer an empty listing with 404 (overrides CONTENT_CATALOG_EMPTY_LIST_NOT_FOUND)
    #[arg(long)]
    pub empty_list_not_found: bool,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig.
    pub fn from_env_and_args() -> Result<Self> {
        Self::resolve(Args::parse(), |key| env::var(key))
    }

    /// Merge parsed args over values looked up through `lookup`, then over
    /// defaults.
    pub fn resolve<F>(args: Args, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        // --- Environment fallback ---
        let env_host =
            read_var(&lookup, "CONTENT_CATALOG_HOST")?.unwrap_or_else(|| "0.0.0.0".into());
        let env_port = match read_var(&lookup, "CONTENT_CATALOG_PORT")? {
            Some(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing CONTENT_CATALOG_PORT value `{}`", value))?,
            None => 3000,
        };
        let env_db = read_var(&lookup, "CONTENT_CATALOG_DATABASE_URL")?
            .unwrap_or_else(|| "sqlite://./data/catalog.db".into());
        let env_max_connections = match read_var(&lookup, "CONTENT_CATALOG_MAX_CONNECTIONS")? {
            Some(value) => value.parse::<u32>().with_context(|| {
                format!("parsing CONTENT_CATALOG_MAX_CONNECTIONS value `{}`", value)
            })?,
            None => 5,
        };
        let env_empty_list_not_found =
            match read_var(&lookup, "CONTENT_CATALOG_EMPTY_LIST_NOT_FOUND")? {
                Some(value) => parse_flag(&value).with_context(|| {
                    format!("parsing CONTENT_CATALOG_EMPTY_LIST_NOT_FOUND value `{}`", value)
                })?,
                None => false,
            };

        // --- Merge ---
        let cfg = Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            database_url: args.database_url.unwrap_or(env_db),
            max_connections: args.max_connections.unwrap_or(env_max_connections),
            empty_list_not_found: args.empty_list_not_found || env_empty_list_not_found,
        };

        if cfg.max_connections == 0 {
            bail!("max_connections must be at least 1");
        }

        Ok(cfg)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn read_var<F>(lookup: &F, key: &str) -> Result<Option<String>>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(err) => Err(err).with_context(|| format!("reading {}", key)),
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("expected a boolean, got `{}`", other),
    }
}
