use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum CustomError {
    #[error("Bad Request: {0}")]
    BadRequestError(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Not Found")]
    NotFound,

    #[error("Validation Error: {0}")]
    ValidationError(#[from] ValidationErrors),
}

impl CustomError {
    fn kind(&self) -> &'static str {
        match self {
            CustomError::BadRequestError(..) => "BAD_REQUEST_ERROR",
            CustomError::InternalServerError(..) => "INTERNAL_SERVER_ERROR",
            CustomError::NotFound => "NOT_FOUND_ERROR",
            CustomError::ValidationError(..) => "VALIDATION_ERROR",
        }
    }
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::BadRequestError(..) => StatusCode::BAD_REQUEST,
            CustomError::InternalServerError(..) => StatusCode::INTERNAL_SERVER_ERROR,
            CustomError::NotFound => StatusCode::NOT_FOUND,
            CustomError::ValidationError(..) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // An absent comment is reported with an empty body.
        if let CustomError::NotFound = self {
            return HttpResponse::NotFound().finish();
        }

        let mut error_message = json!({
            "success": false,
            "message": self.to_string(),
            "httpStatusCode": self.status_code().as_u16(),
            "error": self.kind(),
            "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
        });

        if let CustomError::ValidationError(errors) = self {
            error_message["errors"] = json!(errors);
        }

        HttpResponse::build(self.status_code()).json(error_message)
    }
}
