use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::{controllers, requests, responses};

/// Registers the `token` security scheme referenced by protected routes.
pub struct Authentication;

impl Modify for Authentication {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "token",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "Authorization",
                "Access token from /login, bare or as `Bearer <token>`",
            ))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "Auth"),
        (name = "User"),
        (name = "Tweet"),
        (name = "Follow"),
        (name = "Timeline"),
        (name = "Health"),
    ),
    modifiers(&Authentication),
    paths(
        controllers::v1::auth::login,
        controllers::v1::auth::logout,

        controllers::v1::user::sign_up,

        controllers::v1::tweet::store,

        controllers::v1::follow::follow,
        controllers::v1::follow::unfollow,

        controllers::v1::timeline::show,

        controllers::health::ping,
        controllers::health::health,
        controllers::health::health_db,
    ),
    components(schemas(
        requests::v1::auth::LoginRequest,
        requests::v1::user::SignUpRequest,
        requests::v1::tweet::TweetRequest,
        requests::v1::follow::FollowRequest,
        requests::v1::follow::UnfollowRequest,

        responses::v1::auth::AccessToken,
        responses::v1::user::User,
        responses::v1::timeline::Timeline,
        responses::v1::timeline::TimelineTweet,

        controllers::health::LivenessResponse,
        controllers::health::HealthResponse,
    )),
)]
pub struct Definition;
