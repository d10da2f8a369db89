// ==========================================
// 车辆段运营状态服务 - HTTP 主入口
// ==========================================
// 技术栈: axum + tokio + SQLite(内存库)
// ==========================================

use std::sync::Arc;

use anyhow::Context;
use depot_ops::app::{router, AppState};
use depot_ops::config::ServerConfig;
use depot_ops::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置并初始化日志系统
    let config = ServerConfig::from_env();
    logging::init(config.log_format);

    tracing::info!("==================================================");
    tracing::info!("{}", depot_ops::APP_NAME);
    tracing::info!("系统版本: {}", depot_ops::VERSION);
    tracing::info!("==================================================");

    let state = AppState::new(&config)
        .map_err(anyhow::Error::msg)
        .context("无法初始化AppState")?;
    let app = router(Arc::new(state));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法监听地址 {}", addr))?;
    tracing::info!(%addr, "HTTP 服务已启动");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP 服务异常退出")?;

    tracing::info!("HTTP 服务已退出");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("监听退出信号失败: {}", e);
    }
}
