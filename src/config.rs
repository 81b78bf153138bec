use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

/// Tunables for the filter evaluator. Every knob has a default so the
/// library works without any environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default ± window, in days, for tolerance-based date matching
    /// (joined-project-from-start, worked-with-top-developer).
    pub date_tolerance_days: i64,
    /// Month margin applied when checking mutual-connection date overlaps.
    pub mutual_connection_month_tolerance: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date_tolerance_days: 30,
            mutual_connection_month_tolerance: 1,
        }
    }
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        let defaults = Config::default();

        Ok(Self {
            date_tolerance_days: get_env_or("FILTER_DATE_TOLERANCE_DAYS", defaults.date_tolerance_days)?,
            mutual_connection_month_tolerance: get_env_or(
                "MUTUAL_CONNECTION_MONTH_TOLERANCE",
                defaults.mutual_connection_month_tolerance,
            )?,
        })
    }
}

fn get_env_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

/// The initialized configuration, or compiled-in defaults when `init_config`
/// was never called (library embedded without an environment).
pub fn get_config() -> Config {
    CONFIG.get().cloned().unwrap_or_default()
}
