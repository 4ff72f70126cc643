use anyhow::Context;
use lighter_timeline::{observability, Server};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = lighter_timeline::config::load().context("Failed to load configuration")?;

    observability::init(&config.observability);

    let server = Server::new(config).await?;

    server.run()?.await.context("HTTP server terminated unexpectedly")
}
