use actix_cors::Cors;
use actix_web::{
    dev::Server, http::StatusCode, middleware::Logger, web, App, HttpResponse, HttpServer,
};
use clap::Parser;
use env_logger::Env;
use log::info;
use std::net::{IpAddr, Ipv4Addr};
use utoipa::OpenApi;
use utoipa_actix_web::AppExt;
use utoipa_swagger_ui::SwaggerUi;

use crate::{error::json_config, routes::root_config};

/// Command line configuration of the backend server.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about = "HTTP backend of the thin lens simulation", long_about = None)]
pub struct ServerConfig {
    /// address the server listens on
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,
    /// port the server listens on
    #[arg(short, long, default_value_t = 8001)]
    pub port: u16,
}
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8001,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(title = "thinlens API", description = "Image formation of a thin convex lens", license(name="GPL3")),
    servers(
        (url= "http://localhost:8001", description = "local development server"),
    ),
    tags(
        (name = "general", description = "general endpoints."),
        (name = "calculation", description = "imaging calculation."),
    )
)]
pub struct ApiDoc;

async fn not_found() -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::build(StatusCode::NOT_FOUND)
        .content_type("text/html; charset=utf-8")
        .body("<h1>Error 404</h1>"))
}

/// Start the API server.
///
/// # Panics
///
/// Panics if the server could not be bind to a port.
pub fn start(config: &ServerConfig) -> Server {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    info!("starting thinlens backend on {}:{}", config.host, config.port);
    HttpServer::new(|| {
        App::new()
            .into_utoipa_app()
            .openapi(ApiDoc::openapi())
            .map(|app| app.wrap(Logger::default()))
            .map(|app| app.wrap(Cors::permissive()))
            .app_data(json_config())
            .configure(root_config)
            .openapi_service(|api| {
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", api)
            })
            .default_service(web::route().to(not_found))
            .into_app()
    })
    .bind((config.host, config.port))
    .expect("Failed to bind server")
    .run()
}
