use crate::comment::model::{CommentCount, CommentDto};
use crate::comment::service::CommentStore;
use crate::middleware::auth::get_user_id_from_request;
use crate::utils::error::CustomError;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};
use log::{error, info, warn};
use mongodb::bson::oid::ObjectId;
use validator::Validate;

/// Name of the get-by-id resource, used to build `Location` headers.
pub const GET_COMMENT_ROUTE: &str = "get_comment";

fn require_id(raw: String, message: &str) -> Result<String, CustomError> {
    if raw.trim().is_empty() {
        return Err(CustomError::BadRequestError(message.to_string()));
    }
    Ok(raw)
}

fn validate_comment(comment: &CommentDto) -> Result<(), CustomError> {
    comment.validate().map_err(|errors| {
        warn!("Comment payload failed validation: {}", errors);
        CustomError::from(errors)
    })
}

/// Get all comments for a post
/// GET /api/comments/post/{post_id}
pub async fn get_post_comments(
    comment_store: web::Data<dyn CommentStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, CustomError> {
    let post_id = require_id(path.into_inner(), "Invalid postId provided.")?;

    let comments = comment_store.list_by_post(&post_id).await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// Get comment count for a post
/// GET /api/comments/count/{post_id}
pub async fn get_comment_count(
    comment_store: web::Data<dyn CommentStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, CustomError> {
    let post_id = require_id(path.into_inner(), "Invalid postId provided.")?;

    let count = comment_store.count_by_post(&post_id).await?;

    Ok(HttpResponse::Ok().json(CommentCount { post_id, count }))
}

/// Get a single comment by ID
/// GET /api/comments/{id}
pub async fn get_comment(
    comment_store: web::Data<dyn CommentStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, CustomError> {
    let id = require_id(path.into_inner(), "Invalid id provided.")?;

    let comment = comment_store
        .get_by_id(&id)
        .await?
        .ok_or(CustomError::NotFound)?;

    Ok(HttpResponse::Ok().json(comment))
}

/// Create a new comment. Any client-supplied id or timestamp is replaced.
/// POST /api/comments
pub async fn create_comment(
    req: HttpRequest,
    comment_store: web::Data<dyn CommentStore>,
    body: web::Json<CommentDto>,
) -> Result<HttpResponse, CustomError> {
    let mut comment = body.into_inner();
    validate_comment(&comment)?;

    let id = ObjectId::new().to_hex();
    comment.id = Some(id.clone());
    comment.created_at = None;
    comment.updated_at = None;

    let created = match comment_store.create(&comment).await {
        Ok(created) => created,
        Err(e) => {
            error!("Failed to create comment {}: {}", id, e);
            let message = match e {
                CustomError::InternalServerError(msg) => msg,
                other => other.to_string(),
            };
            return Err(CustomError::InternalServerError(message));
        }
    };

    let location = req
        .url_for(GET_COMMENT_ROUTE, [&id])
        .map_err(|e| CustomError::InternalServerError(format!("Failed to build location: {}", e)))?;

    info!(
        "Comment {} created on post {} by {}",
        id,
        created.post_id,
        get_user_id_from_request(&req).unwrap_or_default()
    );

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location.as_str()))
        .json(created))
}

/// Replace a comment's content
/// PUT /api/comments/{id}
pub async fn update_comment(
    req: HttpRequest,
    comment_store: web::Data<dyn CommentStore>,
    path: web::Path<String>,
    body: web::Json<Option<CommentDto>>,
) -> Result<HttpResponse, CustomError> {
    let id = require_id(path.into_inner(), "Invalid id provided.")?;

    let comment = body
        .into_inner()
        .ok_or_else(|| CustomError::BadRequestError("Comment data cannot be empty.".to_string()))?;
    validate_comment(&comment)?;

    if comment_store.get_by_id(&id).await?.is_none() {
        return Err(CustomError::NotFound);
    }

    comment_store.update(&id, &comment).await?;

    info!(
        "Comment {} updated by {}",
        id,
        get_user_id_from_request(&req).unwrap_or_default()
    );

    Ok(HttpResponse::NoContent().finish())
}

/// Delete a comment
/// DELETE /api/comments/{id}
pub async fn delete_comment(
    req: HttpRequest,
    comment_store: web::Data<dyn CommentStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, CustomError> {
    let id = require_id(path.into_inner(), "Invalid id provided.")?;

    if comment_store.get_by_id(&id).await?.is_none() {
        return Err(CustomError::NotFound);
    }

    comment_store.delete(&id).await?;

    info!(
        "Comment {} deleted by {}",
        id,
        get_user_id_from_request(&req).unwrap_or_default()
    );

    Ok(HttpResponse::NoContent().finish())
}

/// Requests on the base path without an id.
pub async fn missing_id() -> Result<HttpResponse, CustomError> {
    Err(CustomError::BadRequestError("Invalid id provided.".to_string()))
}
