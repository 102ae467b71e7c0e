//! Server command implementation

use anyhow::Result;
use bucketwise_core::{BudgetConfig, InsightEngine};
use bucketwise_server::{parse_allowed_origins, ServerConfig};

/// Build server config, using the default allow-list when no origins are given
pub fn server_config(allowed_origins: Option<&str>) -> ServerConfig {
    match allowed_origins {
        Some(list) => ServerConfig {
            allowed_origins: parse_allowed_origins(list),
        },
        None => ServerConfig::default(),
    }
}

pub async fn cmd_serve(
    config: &BudgetConfig,
    host: &str,
    port: u16,
    allowed_origins: Option<&str>,
) -> Result<()> {
    let server_config = server_config(allowed_origins);

    println!("🚀 Starting Bucketwise API...");
    println!("   Listening: http://{}:{}", host, port);
    println!("   Budget config: {}", config.source);
    if server_config.allowed_origins.is_empty() {
        println!("   CORS: same-origin only");
    } else {
        println!(
            "   CORS origins: {}",
            server_config.allowed_origins.join(", ")
        );
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let engine = InsightEngine::from_config(config);
    bucketwise_server::serve_with_config(engine, host, port, server_config).await?;

    Ok(())
}
