use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::model::{
    AdminUser, LoginRequest, LoginResponse, MessageResponse, SessionResponse,
};
use crate::modules::system::{ErrorResponse, HealthResponse};
use marquee_auth::Role;
use marquee_config::session::DEFAULT_COOKIE_NAME;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::logout,
        crate::modules::auth::controller::current_session,
        crate::modules::system::health,
    ),
    components(
        schemas(
            Role,
            AdminUser,
            LoginRequest,
            LoginResponse,
            SessionResponse,
            MessageResponse,
            HealthResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Admin sign-in, sign-out and session endpoints"),
        (name = "System", description = "Liveness")
    ),
    info(
        title = "Marquee Admin API",
        version = "0.1.0",
        description = "Session-cookie authentication and role-based access for the Marquee admin panel.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(DEFAULT_COOKIE_NAME))),
            )
        }
    }
}
