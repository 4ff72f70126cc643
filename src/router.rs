use crate::config::AppConfig;
use crate::controllers;
use crate::prelude::*;

pub fn route(app: &mut ServiceConfig, config: &AppConfig) {
    app.app_data(web::JsonConfig::default().error_handler(|err, _| {
        Error::bad_request(format!("Invalid JSON body: {}", err)).into()
    }));
    app.app_data(web::PathConfig::default().error_handler(|err, _| {
        Error::bad_request(format!("Invalid path: {}", err)).into()
    }));

    // Liveness
    app.service(controllers::health::ping);
    app.service(controllers::health::health);
    app.service(controllers::health::health_db);
    // Auth
    app.service(controllers::v1::auth::login);
    app.service(controllers::v1::auth::logout);
    // User
    app.service(controllers::v1::user::sign_up);
    // Tweet
    app.service(controllers::v1::tweet::store);
    // Follow
    app.service(controllers::v1::follow::follow);
    app.service(controllers::v1::follow::unfollow);
    // Timeline
    app.service(controllers::v1::timeline::show);

    if config.metrics.enabled {
        app.service(controllers::metrics::metrics);
    }

    if config.api.docs_enabled {
        app.route(&config.api.docs_path, web::get().to(controllers::docs::openapi));
    }
}
