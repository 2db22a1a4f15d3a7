//! Bookshelf - 按首字符浏览的书目服务
//!
//! 启动流程：配置 -> 日志 -> 连接池 -> 适配器 -> HTTP 服务

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use bookshelf::config::{load_config, parse_port, print_config, CliOverrides};
use bookshelf::infrastructure::adapters::{HttpReviewClient, HttpReviewClientConfig};
use bookshelf::infrastructure::http::{AppState, HttpServer, ServerConfig};
use bookshelf::infrastructure::persistence::mysql::{
    create_pool, DatabaseConfig, MySqlBookRepository,
};

/// 命令行参数
#[derive(Debug, Parser)]
#[command(name = "bookshelf", version, about = "Browse a book catalogue by first character")]
struct Cli {
    /// 监听端口（覆盖 PORT 与配置文件）；0 或非数字时忽略
    port: Option<String>,

    /// 配置文件路径
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 加载配置（优先级：命令行 > 环境变量 > 配置文件 > 默认值）
    let config = load_config(&CliOverrides {
        port: cli.port.as_deref().and_then(parse_port),
        config_path: cli.config,
    })
    .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},bookshelf={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Bookshelf - 书目浏览服务");
    print_config(&config);

    // 初始化数据库连接池（惰性建立连接）
    let db_config = DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config);

    // 创建 Repository 适配器
    let book_repo = Arc::new(MySqlBookRepository::new(pool, &config.database.table));

    // 创建书评客户端
    let review_config = HttpReviewClientConfig::new(&config.reviews.url, &config.reviews.api_key)
        .with_timeout(config.reviews.timeout_secs);
    let review_provider = Arc::new(HttpReviewClient::new(review_config)?);

    // 创建 HTTP 服务器
    let server_config = ServerConfig::from(&config.server);
    let state = AppState::new(book_repo, review_provider);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl-c: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
