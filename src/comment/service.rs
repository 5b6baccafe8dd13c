use crate::comment::mapper::parse_id;
use crate::comment::model::{CommentDocument, CommentDto};
use crate::utils::error::CustomError;
use async_trait::async_trait;
use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::bson::{self, doc};
use mongodb::{Client, Collection};

/// Persistence for comments. Implementations must be safe to share across
/// actix workers.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// All comments attached to `post_id`, oldest first.
    async fn list_by_post(&self, post_id: &str) -> Result<Vec<CommentDto>, CustomError>;

    async fn get_by_id(&self, id: &str) -> Result<Option<CommentDto>, CustomError>;

    /// Persist a comment whose `id` has already been assigned. Both
    /// timestamps are set by the store; the stored comment is returned.
    async fn create(&self, comment: &CommentDto) -> Result<CommentDto, CustomError>;

    /// Replace `postId`, `author` and `body` of an existing comment.
    async fn update(&self, id: &str, comment: &CommentDto) -> Result<(), CustomError>;

    async fn delete(&self, id: &str) -> Result<(), CustomError>;

    async fn count_by_post(&self, post_id: &str) -> Result<u64, CustomError>;
}

pub struct MongoCommentStore {
    collection: Collection<CommentDocument>,
}

impl MongoCommentStore {
    pub fn new(client: &Client, database: &str) -> Self {
        let collection = client
            .database(database)
            .collection::<CommentDocument>("comments");
        MongoCommentStore { collection }
    }
}

#[async_trait]
impl CommentStore for MongoCommentStore {
    async fn list_by_post(&self, post_id: &str) -> Result<Vec<CommentDto>, CustomError> {
        let cursor = self
            .collection
            .find(doc! { "post_id": post_id })
            .sort(doc! { "created_at": 1 })
            .await
            .map_err(|e| {
                CustomError::InternalServerError(format!("Failed to fetch comments: {}", e))
            })?;

        let comments: Vec<CommentDocument> = cursor.try_collect().await.map_err(|e| {
            CustomError::InternalServerError(format!("Failed to collect comments: {}", e))
        })?;

        Ok(comments.into_iter().map(CommentDto::from).collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<CommentDto>, CustomError> {
        let Some(comment_id) = parse_id(id) else {
            return Ok(None);
        };

        let comment = self
            .collection
            .find_one(doc! { "_id": comment_id })
            .await
            .map_err(|e| {
                CustomError::InternalServerError(format!("Failed to fetch comment: {}", e))
            })?;

        Ok(comment.map(CommentDto::from))
    }

    async fn create(&self, comment: &CommentDto) -> Result<CommentDto, CustomError> {
        let document = CommentDocument::from_dto(comment, Utc::now())?;

        self.collection.insert_one(&document).await.map_err(|e| {
            CustomError::InternalServerError(format!("Failed to add comment: {}", e))
        })?;

        Ok(CommentDto::from(document))
    }

    async fn update(&self, id: &str, comment: &CommentDto) -> Result<(), CustomError> {
        let Some(comment_id) = parse_id(id) else {
            return Ok(());
        };

        let updated_at = bson::to_bson(&Utc::now()).map_err(|e| {
            CustomError::InternalServerError(format!("Failed to encode timestamp: {}", e))
        })?;

        self.collection
            .update_one(
                doc! { "_id": comment_id },
                doc! {
                    "$set": {
                        "post_id": &comment.post_id,
                        "author": comment.author.as_deref(),
                        "body": &comment.body,
                        "updated_at": updated_at,
                    }
                },
            )
            .await
            .map_err(|e| {
                CustomError::InternalServerError(format!("Failed to update comment: {}", e))
            })?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), CustomError> {
        let Some(comment_id) = parse_id(id) else {
            return Ok(());
        };

        self.collection
            .delete_one(doc! { "_id": comment_id })
            .await
            .map_err(|e| {
                CustomError::InternalServerError(format!("Failed to delete comment: {}", e))
            })?;

        Ok(())
    }

    async fn count_by_post(&self, post_id: &str) -> Result<u64, CustomError> {
        self.collection
            .count_documents(doc! { "post_id": post_id })
            .await
            .map_err(|e| {
                CustomError::InternalServerError(format!("Failed to count comments: {}", e))
            })
    }
}
