//! General endpoints
use actix_web::{get, web::Json, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use utoipa_actix_web::service_config::ServiceConfig;

/// Structure holding the version information
#[derive(ToSchema, Serialize, Deserialize)]
pub struct VersionInfo {
    /// version of the thinlens API backend
    #[schema(example = "0.1.0")]
    backend_version: String,
    /// version of the thinlens library
    #[schema(example = "0.1.0")]
    thinlens_version: String,
}

impl VersionInfo {
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn backend_version(&self) -> &str {
        &self.backend_version
    }
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn thinlens_version(&self) -> &str {
        &self.thinlens_version
    }
}

/// Return a welcome message
///
/// Simply return the text `thinlens backend`. This is mostly for checking that the client is communication with the correct server.
#[utoipa::path(get, path="/", responses((status = OK, description = "Fixed answer string", body = str, example = "thinlens backend")), tag="general")]
#[get("/")]
async fn get_hello() -> &'static str {
    "thinlens backend"
}

/// Return a version information
///
/// Return the version numbers of the thinlens library and the backend server.
#[utoipa::path(get, responses((status = OK, description = "success", body = VersionInfo)), tag="general")]
#[get("/version")]
async fn get_version() -> impl Responder {
    Json(VersionInfo {
        backend_version: env!("CARGO_PKG_VERSION").to_string(),
        thinlens_version: thinlens::get_version(),
    })
}
pub fn config(cfg: &mut ServiceConfig<'_>) {
    cfg.service(get_version);
    cfg.service(get_hello);
}
