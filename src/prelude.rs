pub use actix_web::body::BoxBody;
pub use actix_web::http::StatusCode;
pub use actix_web::web::{self, Data, Json, Path, ServiceConfig};
pub use actix_web::{HttpRequest, HttpResponse, Responder};
pub use chrono::{NaiveDateTime, Utc};
pub use sea_orm::DatabaseConnection;
pub use uuid::Uuid;

pub use crate::errors::{Error, Success, Validation};

/// Current UTC time without offset, the representation stored in the database.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
