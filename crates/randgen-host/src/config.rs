//! Host configuration from environment variables.

use std::path::PathBuf;

use randgen_widget::file_store::DEFAULT_NAMESPACE;

use crate::error::AppError;

/// Directory of the shared settings namespace.
pub const STORE_DIR_VAR: &str = "RANDGEN_STORE_DIR";
/// Name of the shared settings namespace.
pub const NAMESPACE_VAR: &str = "RANDGEN_NAMESPACE";
/// Optional rng seed for reproducible runs.
pub const SEED_VAR: &str = "RANDGEN_SEED";
/// Optional number of snapshots after which the host exits.
pub const TICKS_VAR: &str = "RANDGEN_TICKS";

const DEFAULT_STORE_DIR: &str = ".randgen";

/// Resolved host settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Directory holding the settings file.
    pub store_dir: PathBuf,
    /// Settings namespace (file stem).
    pub namespace: String,
    /// Seed for the rng; OS entropy when absent.
    pub seed: Option<u64>,
    /// Stop after this many snapshots; run until interrupted when absent.
    pub ticks: Option<usize>,
}

impl HostConfig {
    /// Reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let store_dir = lookup(STORE_DIR_VAR)
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_STORE_DIR), PathBuf::from);
        let namespace = lookup(NAMESPACE_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_owned());

        let seed = lookup(SEED_VAR)
            .map(|v| {
                v.trim()
                    .parse::<u64>()
                    .map_err(|e| AppError::Config(format!("{SEED_VAR} must be a valid u64: {e}")))
            })
            .transpose()?;

        let ticks = lookup(TICKS_VAR)
            .map(|v| match v.trim().parse::<usize>() {
                Ok(n) if n > 0 => Ok(n),
                Ok(_) => Err(AppError::Config(format!("{TICKS_VAR} must be at least 1"))),
                Err(e) => Err(AppError::Config(format!(
                    "{TICKS_VAR} must be a positive integer: {e}"
                ))),
            })
            .transpose()?;

        Ok(Self {
            store_dir,
            namespace,
            seed,
            ticks,
        })
    }
}
