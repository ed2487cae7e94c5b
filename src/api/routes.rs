use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Password and passphrase generator
    cfg.service(
        web::scope("/generator")
            .route("/password", web::post().to(handlers::generator::generate_password))
            .route("/passphrase", web::post().to(handlers::generator::generate_passphrase))
            .route("/analysis/{pwd}", web::get().to(handlers::generator::analyze_password))
            .route("/current", web::get().to(handlers::generator::current))
            .route("/download", web::get().to(handlers::generator::download))
    );

    // System status
    cfg.service(
        web::scope("/system")
            .route("/status", web::get().to(handlers::system::get_status))
    );
}
