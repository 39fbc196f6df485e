// Route exports
pub mod fragrances;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse};

use crate::error::MatchError;
use crate::models::ErrorResponse;

pub use fragrances::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(fragrances::root))
        .service(web::scope("/api/v1").configure(fragrances::configure));
}

/// Register the JSON, query and path extractor error handlers so malformed
/// input is reported with the same body shape as every other error
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
        .app_data(web::PathConfig::default().error_handler(handle_path_error));
}

/// JSON error response for extractor failures
#[derive(Debug)]
pub struct JsonError(ErrorResponse);

impl JsonError {
    fn bad_request(error: &str, message: String) -> Self {
        Self(ErrorResponse {
            error: error.to_string(),
            message,
            status_code: 400,
        })
    }
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.0.error, self.0.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(&self.0)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError::bad_request("invalid_json", format!("Invalid JSON: {}", err)).into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query error on {}: {}", req.path(), err);
    JsonError::bad_request("invalid_query", format!("Invalid query: {}", err)).into()
}

/// Handle path segment errors, e.g. a non-numeric fragrance id
pub fn handle_path_error(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Path error on {}: {}", req.path(), err);
    JsonError::bad_request("invalid_path", format!("Invalid path: {}", err)).into()
}

/// Map a core error onto its HTTP response
pub fn error_response(err: &MatchError) -> HttpResponse {
    let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let message = match err {
        // Internal details stay in the logs
        MatchError::Internal(_) => "An unexpected internal error occurred".to_string(),
        other => other.to_string(),
    };

    HttpResponse::build(status).json(ErrorResponse {
        error: err.label().to_string(),
        message,
        status_code: status.as_u16(),
    })
}
