//! Novelseg - 小说分章服务

use std::sync::Arc;

use novelseg::config::{load_config, print_config};
use novelseg::infrastructure::http::{AppState, HttpServer, ServerConfig};
use novelseg::infrastructure::HeuristicChapterSegmenter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},novelseg={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Novelseg - 小说分章服务");
    print_config(&config);

    let segmenter = Arc::new(HeuristicChapterSegmenter::new());

    let server_config = ServerConfig::new(
        &config.server.host,
        config.server.port,
        config.upload.max_size(),
    );
    let state = AppState::new(segmenter, &config.segmenter, config.upload.clone());

    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
