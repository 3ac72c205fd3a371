use actix_web::{App, HttpServer, web};
use anyhow::{Context, Result};
use tracing::info;

use pwd_validator::config::ServerConfig;
use pwd_validator::handlers::{check_password, hello};
use pwd_validator::logging::init_logger;

#[actix_web::main]
async fn main() -> Result<()> {
    init_logger();

    let config = ServerConfig::from_env().context("Failed to load server configuration")?;
    let bind_addr = config.bind_addr;
    info!("Starting password validator on {}", bind_addr);

    let config = web::Data::new(config);
    HttpServer::new(move || {
        App::new()
            .app_data(config.clone())
            .service(hello)
            .service(check_password)
    })
    .bind(bind_addr)
    .with_context(|| format!("Failed to bind to {}", bind_addr))?
    .run()
    .await
    .context("HTTP server error")?;

    Ok(())
}
