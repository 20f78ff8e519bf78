//! Centralized configuration (environment variables + defaults).

use anyhow::Context;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
const DEFAULT_FRONTEND_DIRS: &[&str] = &["client/build", "dist/FrontEnd"];

/// Which record store backs the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

/// Loads `.env` if present. Safe to call more than once.
pub fn load_dotenv() {
    dotenv::dotenv().ok();
}

/// Database URL (optional).
///
/// Without it the server still starts, but every `/api/*` request gets a 503.
pub fn database_url() -> Option<String> {
    std::env::var("DATABASE_URL")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Store backend, `postgres` unless `EMPLOYEE_STORE=memory`.
pub fn store_kind() -> anyhow::Result<StoreKind> {
    match std::env::var("EMPLOYEE_STORE") {
        Err(_) => Ok(StoreKind::Postgres),
        Ok(v) => match v.trim().to_lowercase().as_str() {
            "" | "postgres" => Ok(StoreKind::Postgres),
            "memory" => Ok(StoreKind::Memory),
            other => anyhow::bail!("EMPLOYEE_STORE must be `postgres` or `memory`, got `{}`", other),
        },
    }
}

pub fn database_max_connections() -> anyhow::Result<u32> {
    match std::env::var("DATABASE_MAX_CONNECTIONS") {
        Err(_) => Ok(DEFAULT_MAX_CONNECTIONS),
        Ok(v) => Ok(v
            .trim()
            .parse::<u32>()
            .context("DATABASE_MAX_CONNECTIONS must be a valid u32")?
            .max(1)),
    }
}

/// How long a request waits for a pooled connection, 5 seconds by default.
pub fn database_acquire_timeout() -> anyhow::Result<Duration> {
    match std::env::var("DATABASE_ACQUIRE_TIMEOUT_SECS") {
        Err(_) => Ok(Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS)),
        Ok(v) => Ok(Duration::from_secs(
            v.trim()
                .parse::<u64>()
                .context("DATABASE_ACQUIRE_TIMEOUT_SECS must be a valid u64")?
                .max(1),
        )),
    }
}

/// Listen port, 3000 by default.
pub fn port() -> anyhow::Result<u16> {
    match std::env::var("PORT") {
        Err(_) => Ok(DEFAULT_PORT),
        Ok(v) => v.trim().parse::<u16>().context("PORT must be a valid u16"),
    }
}

/// Directories searched for the prebuilt frontend bundle, in priority order.
pub fn frontend_dirs() -> Vec<PathBuf> {
    match std::env::var("FRONTEND_DIRS") {
        Ok(v) if !v.trim().is_empty() => v
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .collect(),
        _ => DEFAULT_FRONTEND_DIRS.iter().map(PathBuf::from).collect(),
    }
}

/// Log specification for the logger (`RUST_LOG` syntax), `info` by default.
pub fn log_spec() -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
}
