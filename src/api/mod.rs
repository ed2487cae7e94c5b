// src/api/mod.rs
use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::Config;
use crate::core::session::GeneratorSession;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::generate_passphrase,
        crate::api::handlers::generator::analyze_password,
        crate::api::handlers::generator::current,
        crate::api::handlers::generator::download,

        // System endpoints
        crate::api::handlers::system::get_status
    ),
    components(
        schemas(
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PassphraseGenerationRequest,
            crate::api::types::GenerationResponse,
            crate::api::types::PasswordAnalysisResponse,
            crate::api::types::SystemStatusResponse,

            crate::models::GenerationMode,
            crate::models::StrengthReport
        )
    ),
    tags(
        (name = "Generator", description = "Password and passphrase generation endpoints"),
        (name = "System", description = "System status")
    ),
    info(
        title = "Passforge API",
        version = "0.1.0",
        description = "Password and passphrase generator with zxcvbn strength estimates",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub async fn start_server(session: GeneratorSession, config: Config) -> std::io::Result<()> {
    let address = config.web_address.clone();
    let port = config.web_port;
    log::info!("Starting Passforge API server on {}:{}", address, port);

    // One session shared by every worker
    let session_data = web::Data::new(Mutex::new(session));
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept", "X-Requested-With"])
            .expose_headers(vec!["Content-Disposition"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(session_data.clone())
            .app_data(config_data.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((address.as_str(), port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_generator_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/generator/password",
            "/generator/passphrase",
            "/generator/analysis/{pwd}",
            "/generator/current",
            "/generator/download",
            "/system/status",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
