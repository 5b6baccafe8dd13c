use crate::comment::model::{CommentDocument, CommentDto};
use crate::utils::error::CustomError;
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;

/// Parse a wire id into an `ObjectId`. Ids that are not 24-char hex
/// cannot exist in the collection, so callers treat `None` as absent.
pub fn parse_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}

impl From<CommentDocument> for CommentDto {
    fn from(doc: CommentDocument) -> Self {
        CommentDto {
            id: Some(doc.id.to_hex()),
            post_id: doc.post_id,
            author: doc.author,
            body: doc.body,
            created_at: Some(doc.created_at),
            updated_at: Some(doc.updated_at),
        }
    }
}

impl CommentDocument {
    /// Build a new document from an inbound comment. The dto must already
    /// carry the id assigned by the endpoint; its timestamps are ignored.
    pub fn from_dto(dto: &CommentDto, now: DateTime<Utc>) -> Result<Self, CustomError> {
        let id = dto
            .id
            .as_deref()
            .and_then(parse_id)
            .ok_or_else(|| CustomError::InternalServerError("Comment id is not a valid ObjectId".into()))?;

        Ok(CommentDocument {
            id,
            post_id: dto.post_id.clone(),
            author: dto.author.clone(),
            body: dto.body.clone(),
            created_at: now,
            updated_at: now,
        })
    }
}
