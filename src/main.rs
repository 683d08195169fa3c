use clap::Parser;
use lte_expo_mcp::utils::{logger, validation::Validate};
use lte_expo_mcp::{CliConfig, LteExpoServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌（stderr，stdout 留給 MCP 協議）
    logger::init_stdio_logger(config.verbose);

    tracing::info!("Starting lte-expo-mcp server");
    if config.verbose {
        tracing::debug!("API endpoint: {}", config.api_endpoint);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if config.token.is_some() {
        tracing::info!("🔑 Bearer token supplied, preset exclusion enabled");
    }

    let server = LteExpoServer::new(&config);
    if let Err(e) = server.serve_stdio().await {
        tracing::error!("❌ MCP server error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
