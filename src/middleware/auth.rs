use crate::config::AppConfig;
use actix_web::{Error, HttpMessage, dev::ServiceRequest, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use jsonwebtoken::{DecodingKey, Validation, decode};
use log::{error, warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub id: String,
    pub exp: usize,
}

/// Verify an HS256 JWT and attach its claims to the request.
pub async fn verify_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (Error, ServiceRequest)> {
    let secret = match req.app_data::<web::Data<AppConfig>>() {
        Some(config) => config.jwt_secret.clone(),
        None => {
            error!("AppConfig is not registered, cannot verify bearer tokens");
            return Err((
                actix_web::error::ErrorInternalServerError("Authentication is not configured"),
                req,
            ));
        }
    };

    let token_data = match decode::<Claims>(
        credentials.token(),
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    ) {
        Ok(data) => data,
        Err(e) => {
            warn!("Rejected bearer token: {}", e);
            return Err((actix_web::error::ErrorUnauthorized("Invalid token"), req));
        }
    };

    req.extensions_mut().insert(token_data.claims);
    Ok(req)
}

/// Get user ID from request extensions (use after auth middleware)
pub fn get_user_id_from_request(req: &actix_web::HttpRequest) -> Option<String> {
    req.extensions()
        .get::<Claims>()
        .map(|claims| claims.id.clone())
}

#[cfg(test)]
pub fn create_token(user_id: &str, secret: &str, ttl: chrono::Duration) -> String {
    let claims = Claims {
        id: user_id.to_owned(),
        exp: (chrono::Utc::now() + ttl).timestamp() as usize,
    };

    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}
