pub mod api;
pub mod cache;
pub mod config;
pub mod controllers;
pub mod database;
pub mod entities;
pub mod errors;
pub mod metrics;
pub mod middlewares;
pub mod models;
pub mod observability;
pub mod prelude;
pub mod requests;
pub mod responses;
pub mod router;
pub mod security;
pub mod server;
pub mod services;

// Testing utilities (always available for integration tests)
pub mod testing;

pub use cache::{Cache, CacheKey, LocalCache};
pub use metrics::{AppMetrics, MetricsMiddleware};
pub use middlewares::v1::auth::{Auth, Authenticated};
pub use server::Server;
