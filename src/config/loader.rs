//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 命令行参数（端口）
//! 2. 部署环境变量（`PORT`、`DB_*`、`API_KEY`）
//! 3. 带前缀的环境变量（`CATALOGUE_`）
//! 4. 配置文件（config.toml）
//! 5. 默认值

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError as ConfigCrateError, Environment, File};
use std::path::PathBuf;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 字符串类部署环境变量 -> 配置键
const STRING_ENV_KEYS: &[(&str, &str)] = &[
    ("DB_HOST", "database.host"),
    ("DB_USER", "database.user"),
    ("DB_PASSWORD", "database.password"),
    ("DB_NAME", "database.name"),
    ("API_KEY", "reviews.api_key"),
];

/// 端口类部署环境变量 -> 配置键；无法解析的值或 0 被忽略
const PORT_ENV_KEYS: &[(&str, &str)] = &[("PORT", "server.port"), ("DB_PORT", "database.port")];

/// 解析端口；0 与无法解析的值视为未设置，交由下一层配置决定
pub fn parse_port(raw: &str) -> Option<u16> {
    raw.trim().parse::<u16>().ok().filter(|port| *port != 0)
}

/// 命令行覆盖项
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// 监听端口
    pub port: Option<u16>,
    /// 配置文件路径
    pub config_path: Option<PathBuf>,
}

/// 加载应用配置
///
/// # 环境变量示例
/// - `PORT=8080`
/// - `DB_HOST=db.internal`、`DB_USER=reader`、`DB_NAME=goodreads`
/// - `API_KEY=...`（必填）
/// - `CATALOGUE_DATABASE__TABLE=book2018`
pub fn load_config(cli: &CliOverrides) -> Result<AppConfig, ConfigError> {
    load_config_with(cli, |key| std::env::var(key).ok())
}

/// 使用给定的环境变量查找函数加载配置
pub fn load_config_with<F>(cli: &CliOverrides, env_lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    // 1. 默认值（最低优先级）
    let mut builder = Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("database.host", "localhost")?
        .set_default("database.port", 3306)?
        .set_default("database.table", "book2018")?
        .set_default("database.timezone", "+08:00")?
        .set_default("database.max_connections", 4)?
        .set_default("database.acquire_timeout_secs", 30)?
        .set_default("reviews.url", "https://api.nytimes.com/svc/books/v3/reviews.json")?
        .set_default("reviews.timeout_secs", 10)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = &cli.config_path {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 带前缀的环境变量，例如 CATALOGUE_DATABASE__TABLE=book2018
    builder = builder.add_source(
        Environment::with_prefix("CATALOGUE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 部署环境变量与命令行参数
    builder = apply_overrides(builder, cli, &env_lookup)?;

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

fn apply_overrides<F>(
    mut builder: ConfigBuilder<DefaultState>,
    cli: &CliOverrides,
    env_lookup: &F,
) -> Result<ConfigBuilder<DefaultState>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    for &(var, key) in STRING_ENV_KEYS {
        builder = builder.set_override_option(key, env_lookup(var))?;
    }

    for &(var, key) in PORT_ENV_KEYS {
        let port = env_lookup(var).as_deref().and_then(parse_port);
        builder = builder.set_override_option(key, port.map(i64::from))?;
    }

    let cli_port = cli.port.filter(|port| *port != 0);
    builder = builder.set_override_option("server.port", cli_port.map(i64::from))?;

    Ok(builder)
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    // 缺少 API Key 时拒绝启动
    if config.reviews.api_key.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "API_KEY is not set".to_string(),
        ));
    }

    if config.reviews.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Review service URL cannot be empty".to_string(),
        ));
    }

    // 表名直接拼入 SQL
    if !is_identifier(&config.database.table) {
        return Err(ConfigError::ValidationError(format!(
            "Invalid table name: {}",
            config.database.table
        )));
    }

    if config.database.max_connections == 0 {
        return Err(ConfigError::ValidationError(
            "Database max connections cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志），敏感字段不输出
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!(
        "Database: {}@{}:{}/{}",
        config.database.user,
        config.database.host,
        config.database.port,
        config.database.name
    );
    tracing::info!("Database Table: {}", config.database.table);
    tracing::info!("Database Max Connections: {}", config.database.max_connections);
    tracing::info!("Review URL: {}", config.reviews.url);
    tracing::info!("Review Timeout: {}s", config.reviews.timeout_secs);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
