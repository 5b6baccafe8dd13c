use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Wire representation of a comment.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[validate(length(min = 1, message = "postId is required"))]
    pub post_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100, message = "author must be 1-100 characters"))]
    pub author: Option<String>,

    #[validate(length(min = 1, max = 2000, message = "body must be 1-2000 characters"))]
    pub body: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Storage representation of a comment in the `comments` collection.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CommentDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub post_id: String,
    pub author: Option<String>,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentCount {
    pub post_id: String,
    pub count: u64,
}
