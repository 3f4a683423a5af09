use crate::{calculate, general, pages};
use utoipa_actix_web::{scope, service_config::ServiceConfig};

/// Register all endpoints of the backend.
pub fn root_config(cfg: &mut ServiceConfig<'_>) {
    cfg.service(scope("/api").configure(general::config));
    calculate::config(cfg);
    pages::config(cfg);
}
