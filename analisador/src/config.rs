//! Application configuration management.
//!
//! Configuration is loaded from a YAML file with environment variable
//! overrides. The configuration file path defaults to `config.yaml` but can
//! be specified via `-f` flag or the `ANALISADOR_CONFIG` environment
//! variable.
//!
//! Sources are merged in order (later sources override earlier ones):
//!
//! 1. **YAML config file** - Base configuration (default: `config.yaml`)
//! 2. **Environment variables** - Variables prefixed with `ANALISADOR_`
//!
//! ```bash
//! # Override server port
//! ANALISADOR_PORT=8080
//!
//! # Point at a different SQLite file
//! ANALISADOR_DATABASE_URL="sqlite://analysis.db"
//! ```

use clap::Parser;
use figment::{
    providers::{Env, Format, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Simple CLI args - just for specifying config file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file
    #[arg(short = 'f', long, env = "ANALISADOR_CONFIG", default_value = "config.yaml")]
    pub config: String,

    /// Validate configuration and exit without starting the server.
    /// Useful for CI/CD pipelines to catch config errors before deployment.
    #[arg(long)]
    pub validate: bool,
}

/// Main application configuration.
///
/// All fields have sensible defaults defined in the `Default` implementation.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// HTTP server host to bind to (e.g., "0.0.0.0" for all interfaces)
    pub host: String,
    /// HTTP server port to bind to
    pub port: u16,
    /// SQLite database URL (e.g., "sqlite://git_analysis_results.db")
    pub database_url: String,
    /// Base prepended to `<usuario>/<repositorio>.git` when building clone
    /// URLs. Defaults to GitHub; tests point this at a local directory.
    pub git_host: String,
    /// Directory under which per-request clone directories are created
    pub clone_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            database_url: "sqlite://git_analysis_results.db".to_string(),
            git_host: "https://github.com".to_string(),
            clone_root: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Load configuration from the YAML file named by `args`, with
    /// `ANALISADOR_`-prefixed environment variables taking precedence.
    pub fn load(args: &Args) -> anyhow::Result<Self> {
        let config = Figment::new()
            .merge(Yaml::file(&args.config))
            .merge(Env::prefixed("ANALISADOR_"))
            .extract()?;
        Ok(config)
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
