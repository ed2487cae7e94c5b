// src/api/handlers/generator.rs

use std::sync::{Mutex, MutexGuard};

use actix_web::{web, HttpResponse, Responder};
use log::{debug, error};

use crate::api::types::{
    GenerationResponse, PassphraseGenerationRequest, PasswordAnalysisResponse,
    PasswordGenerationRequest,
};
use crate::core::config::Config;
use crate::core::session::{GeneratorSession, SessionError, DOWNLOAD_FILE_NAME};
use crate::strength;

fn lock_session(
    session: &Mutex<GeneratorSession>,
) -> Result<MutexGuard<'_, GeneratorSession>, HttpResponse> {
    session.lock().map_err(|e| {
        error!("Generator session lock poisoned: {}", e);
        HttpResponse::InternalServerError().json(GenerationResponse::error("Generator unavailable"))
    })
}

fn error_response(e: &SessionError) -> HttpResponse {
    match e {
        SessionError::Generator(inner) if inner.is_validation() => {
            debug!("Rejected generation request: {}", inner);
            HttpResponse::BadRequest().json(GenerationResponse::error(inner.to_string()))
        }
        SessionError::NothingGenerated => {
            HttpResponse::NotFound().json(GenerationResponse::error(e.to_string()))
        }
        _ => {
            error!("Generation failed: {}", e);
            HttpResponse::InternalServerError()
                .json(GenerationResponse::error(format!("Failed to generate: {}", e)))
        }
    }
}

/// Generate a password
///
/// Generates a random password from the selected character classes.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = GenerationResponse),
        (status = 400, description = "Invalid options", body = GenerationResponse),
        (status = 500, description = "Server error", body = GenerationResponse)
    )
)]
pub async fn generate_password(
    session: web::Data<Mutex<GeneratorSession>>,
    config: web::Data<Config>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> impl Responder {
    let options = generation_req.into_inner().into_options(&config);

    let mut session = match lock_session(&session) {
        Ok(guard) => guard,
        Err(response) => return response,
    };

    match session.generate_password(&options) {
        Ok(record) => HttpResponse::Ok().json(GenerationResponse::from_record(record)),
        Err(e) => error_response(&e),
    }
}

/// Generate a passphrase
///
/// Joins random words from the configured word list.
#[utoipa::path(
    post,
    path = "/generator/passphrase",
    tag = "Generator",
    request_body = PassphraseGenerationRequest,
    responses(
        (status = 200, description = "Generated passphrase", body = GenerationResponse),
        (status = 400, description = "Invalid options", body = GenerationResponse),
        (status = 500, description = "Server error", body = GenerationResponse)
    )
)]
pub async fn generate_passphrase(
    session: web::Data<Mutex<GeneratorSession>>,
    config: web::Data<Config>,
    generation_req: web::Json<PassphraseGenerationRequest>,
) -> impl Responder {
    let options = generation_req.into_inner().into_options(&config);

    let mut session = match lock_session(&session) {
        Ok(guard) => guard,
        Err(response) => return response,
    };

    match session.generate_passphrase(&options) {
        Ok(record) => HttpResponse::Ok().json(GenerationResponse::from_record(record)),
        Err(e) => error_response(&e),
    }
}

/// Analyze password strength
///
/// Scores a password with zxcvbn and returns its feedback.
#[utoipa::path(
    get,
    path = "/generator/analysis/{pwd}",
    tag = "Generator",
    params(
        ("pwd" = String, Path, description = "Password to analyze")
    ),
    responses(
        (status = 200, description = "Password analysis result", body = PasswordAnalysisResponse)
    )
)]
pub async fn analyze_password(path: web::Path<String>) -> impl Responder {
    // Path extraction has already percent-decoded the segment
    let password = path.into_inner();

    HttpResponse::Ok().json(PasswordAnalysisResponse {
        success: true,
        strength: strength::analyze_password_strength(&password),
        error: None,
    })
}

/// Latest generated value
#[utoipa::path(
    get,
    path = "/generator/current",
    tag = "Generator",
    responses(
        (status = 200, description = "Latest generated value", body = GenerationResponse),
        (status = 404, description = "Nothing generated yet", body = GenerationResponse)
    )
)]
pub async fn current(session: web::Data<Mutex<GeneratorSession>>) -> impl Responder {
    let session = match lock_session(&session) {
        Ok(guard) => guard,
        Err(response) => return response,
    };

    match session.current() {
        Some(record) => HttpResponse::Ok().json(GenerationResponse::from_record(record)),
        None => error_response(&SessionError::NothingGenerated),
    }
}

/// Download the latest value as password.txt
#[utoipa::path(
    get,
    path = "/generator/download",
    tag = "Generator",
    responses(
        (status = 200, description = "Plain-text attachment", body = String, content_type = "text/plain"),
        (status = 404, description = "Nothing generated yet", body = GenerationResponse)
    )
)]
pub async fn download(session: web::Data<Mutex<GeneratorSession>>) -> impl Responder {
    let session = match lock_session(&session) {
        Ok(guard) => guard,
        Err(response) => return response,
    };

    match session.current() {
        Some(record) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", DOWNLOAD_FILE_NAME),
            ))
            .body(record.value.clone()),
        None => error_response(&SessionError::NothingGenerated),
    }
}
