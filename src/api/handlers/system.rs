// src/api/handlers/system.rs
use std::sync::Mutex;

use actix_web::{web, HttpResponse, Responder};

use crate::api::types::SystemStatusResponse;
use crate::core::session::GeneratorSession;

/// Get system status
#[utoipa::path(
    get,
    path = "/system/status",
    tag = "System",
    responses(
        (status = 200, description = "Get current system status", body = SystemStatusResponse),
        (status = 500, description = "Internal server error", body = SystemStatusResponse)
    )
)]
pub async fn get_status(session: web::Data<Mutex<GeneratorSession>>) -> impl Responder {
    let session = match session.lock() {
        Ok(guard) => guard,
        Err(e) => {
            log::error!("Failed to read generator state: {}", e);
            return HttpResponse::InternalServerError().json(SystemStatusResponse {
                success: false,
                version: env!("CARGO_PKG_VERSION").to_string(),
                wordlist_size: 0,
                bits_per_word: 0.0,
                has_current: false,
                error: Some("Generator unavailable".to_string()),
            });
        }
    };

    let words = session.word_source();
    HttpResponse::Ok().json(SystemStatusResponse {
        success: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        wordlist_size: words.len(),
        bits_per_word: words.entropy_bits_per_word(),
        has_current: session.current().is_some(),
        error: None,
    })
}
