use crate::utils::error::CustomError;
use actix_web::{HttpRequest, error::JsonPayloadError};
use log::warn;

/// Turn body extraction failures (malformed JSON, missing required fields,
/// wrong content type) into the service's 400 envelope.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let detail = match &err {
        JsonPayloadError::Deserialize(e) => e.to_string(),
        JsonPayloadError::ContentType => "Content type must be application/json".to_string(),
        other => other.to_string(),
    };
    warn!("Rejected payload for {} {}: {}", req.method(), req.path(), detail);

    CustomError::BadRequestError(detail).into()
}
