mod api_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod poller_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use api_config::{ApiConfig, DEFAULT_ACCOUNT_ID};
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use poller_config::PollerConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "TT_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".tt";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8300;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "timers.db";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const MIN_DB_MAX_CONNECTIONS: u32 = 1;
const MAX_DB_MAX_CONNECTIONS: u32 = 100;
const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 5;
const MIN_BUSY_TIMEOUT_SECS: u64 = 1;
const MAX_BUSY_TIMEOUT_SECS: u64 = 60;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 5;
const MIN_REFRESH_INTERVAL_SECS: u64 = 1;
const MAX_REFRESH_INTERVAL_SECS: u64 = 300;
const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;
const MIN_TICK_INTERVAL_MS: u64 = 100;
const MAX_TICK_INTERVAL_MS: u64 = 10_000;
const DEFAULT_RECOVERY_DELAY_MS: u64 = 2000;
const MIN_RECOVERY_DELAY_MS: u64 = 100;
const MAX_RECOVERY_DELAY_MS: u64 = 60_000;
