use crate::comment::model::CommentDto;
use crate::comment::service::CommentStore;
use crate::utils::error::CustomError;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local store, selected with `STORE_BACKEND=memory`.
#[derive(Default)]
pub struct InMemoryCommentStore {
    comments: RwLock<HashMap<String, CommentDto>>,
}

impl InMemoryCommentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentStore for InMemoryCommentStore {
    async fn list_by_post(&self, post_id: &str) -> Result<Vec<CommentDto>, CustomError> {
        let comments = self.comments.read().await;
        let mut found: Vec<CommentDto> = comments
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        // ObjectId hex sorts by creation second, then counter.
        found.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(found)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<CommentDto>, CustomError> {
        Ok(self.comments.read().await.get(id).cloned())
    }

    async fn create(&self, comment: &CommentDto) -> Result<CommentDto, CustomError> {
        let id = comment
            .id
            .clone()
            .ok_or_else(|| CustomError::InternalServerError("Comment has no id".into()))?;

        let now = Utc::now();
        let mut stored = comment.clone();
        stored.created_at = Some(now);
        stored.updated_at = Some(now);

        self.comments.write().await.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: &str, comment: &CommentDto) -> Result<(), CustomError> {
        let mut comments = self.comments.write().await;
        if let Some(existing) = comments.get_mut(id) {
            existing.post_id = comment.post_id.clone();
            existing.author = comment.author.clone();
            existing.body = comment.body.clone();
            existing.updated_at = Some(Utc::now());
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), CustomError> {
        self.comments.write().await.remove(id);
        Ok(())
    }

    async fn count_by_post(&self, post_id: &str) -> Result<u64, CustomError> {
        let comments = self.comments.read().await;
        Ok(comments.values().filter(|c| c.post_id == post_id).count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: &str, post_id: &str, body: &str) -> CommentDto {
        CommentDto {
            id: Some(id.into()),
            post_id: post_id.into(),
            author: None,
            body: body.into(),
            created_at: None,
            updated_at: None,
        }
    }

    #[actix_web::test]
    async fn create_stamps_timestamps_and_returns_stored() {
        let store = InMemoryCommentStore::new();
        let mut inbound = comment("a", "p1", "hi");
        inbound.created_at = "1999-01-01T00:00:00Z".parse().ok();

        let returned = store.create(&inbound).await.unwrap();
        let stored = store.get_by_id("a").await.unwrap().unwrap();
        assert_eq!(returned, stored);
        assert!(stored.created_at.is_some());
        assert_eq!(stored.created_at, stored.updated_at);
        assert_ne!(stored.created_at, inbound.created_at);
    }

    #[actix_web::test]
    async fn lists_and_counts_only_matching_post() {
        let store = InMemoryCommentStore::new();
        store.create(&comment("a", "p1", "one")).await.unwrap();
        store.create(&comment("b", "p2", "two")).await.unwrap();
        store.create(&comment("c", "p1", "three")).await.unwrap();

        let listed = store.list_by_post("p1").await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|c| c.post_id == "p1"));
        assert_eq!(store.count_by_post("p1").await.unwrap(), 2);
        assert!(store.list_by_post("p3").await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn update_replaces_fields_but_keeps_identity() {
        let store = InMemoryCommentStore::new();
        store.create(&comment("a", "p1", "before")).await.unwrap();
        let created = store.get_by_id("a").await.unwrap().unwrap();

        let mut replacement = comment("ignored", "p2", "after");
        replacement.author = Some("ada".into());
        store.update("a", &replacement).await.unwrap();

        let updated = store.get_by_id("a").await.unwrap().unwrap();
        assert_eq!(updated.id.as_deref(), Some("a"));
        assert_eq!(updated.post_id, "p2");
        assert_eq!(updated.body, "after");
        assert_eq!(updated.author.as_deref(), Some("ada"));
        assert_eq!(updated.created_at, created.created_at);
        assert!(store.get_by_id("ignored").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn delete_removes_comment() {
        let store = InMemoryCommentStore::new();
        store.create(&comment("a", "p1", "hi")).await.unwrap();
        store.delete("a").await.unwrap();
        assert!(store.get_by_id("a").await.unwrap().is_none());
    }
}
