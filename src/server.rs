use std::time::Duration;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger};
use anyhow::Context;

use crate::config::AppConfig;
use crate::database;
use crate::entities::v1::tokens;
use crate::metrics::{AppMetrics, MetricsMiddleware};
use crate::middlewares::v1::auth::Authenticated;
use crate::prelude::*;
use crate::router;
use crate::security::PasswordHasher;

/// Everything a worker needs, built once and shared by all workers.
pub struct Server {
    config: AppConfig,
    db: DatabaseConnection,
    hasher: PasswordHasher,
    authenticated: Authenticated,
    metrics: AppMetrics,
}

impl Server {
    #[::tracing::instrument(skip_all, fields(environment = %config.app.environment))]
    pub async fn new(config: AppConfig) -> anyhow::Result<Self> {
        let db = database::connect(&config.database)
            .await
            .context("Failed to connect to database")?;

        let hasher = PasswordHasher::from_config(&config.auth.argon2)
            .map_err(|e| anyhow::anyhow!("Failed to create password hasher: {}", e))?;

        let authenticated =
            Authenticated::new(Duration::from_secs(config.auth.session_cache_ttl));
        let metrics = AppMetrics::with_config(Some(&config));

        Ok(Self {
            config,
            db,
            hasher,
            authenticated,
            metrics,
        })
    }

    /// Bind the listener and start serving.
    ///
    /// Also starts the periodic expired-token sweep on the current runtime.
    pub fn run(self) -> std::io::Result<actix_web::dev::Server> {
        let Self {
            config,
            db,
            hasher,
            authenticated,
            metrics,
        } = self;

        // shared by the workers and the sweep; the connection itself is never cloned
        let db = Data::new(db);

        prune_tokens(
            db.clone(),
            Duration::from_secs(config.auth.token_cleanup_interval),
        );

        let address = config.server.address();
        let workers = config.server.workers;
        let shutdown_timeout = config.app.shutdown_timeout;

        let hasher = Data::new(hasher);
        let authenticated = Data::new(authenticated);
        let metrics = Data::new(metrics);
        let config = Data::new(config);

        ::tracing::info!(host = %address.0, port = address.1, workers, "Starting HTTP server");

        let server = HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .app_data(db.clone())
                .app_data(hasher.clone())
                .app_data(authenticated.clone())
                .app_data(metrics.clone())
                .app_data(config.clone())
                .wrap(MetricsMiddleware::new(metrics.get_ref().clone()))
                .wrap(cors)
                .wrap(Logger::default())
                .configure(|app| router::route(app, &config))
        })
        .workers(workers)
        .shutdown_timeout(shutdown_timeout)
        .bind(address)?
        .run();

        Ok(server)
    }
}

/// Delete expired tokens every `interval` for the lifetime of the runtime.
fn prune_tokens(db: Data<DatabaseConnection>, interval: Duration) {
    actix_web::rt::spawn(async move {
        let mut ticker = actix_web::rt::time::interval(interval);

        // first tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;

            match tokens::Model::prune_expired(db.get_ref()).await {
                Ok(0) => ::tracing::trace!("No expired tokens"),
                Ok(removed) => ::tracing::info!(removed, "Pruned expired tokens"),
                Err(e) => ::tracing::error!(error = %e, "Failed to prune expired tokens"),
            }
        }
    });
}
