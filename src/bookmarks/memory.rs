// ABOUTME: In-memory bookmark store with a per-user size cap
// ABOUTME: Bookmarks are kept per user in insertion order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft

use super::{check_key, check_user, BookmarkStore};
use crate::config::BookmarkConfig;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use fooddraft_core::models::Bookmark;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory bookmark store
///
/// Cloning shares the underlying map.
#[derive(Clone)]
pub struct InMemoryBookmarkStore {
    store: Arc<RwLock<HashMap<String, Vec<Bookmark>>>>,
    max_per_user: usize,
}

impl InMemoryBookmarkStore {
    /// Create a store with the given limits
    #[must_use]
    pub fn new(config: BookmarkConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(HashMap::new())),
            max_per_user: config.max_per_user.max(1),
        }
    }

    /// Number of users with at least one bookmark
    pub async fn user_count(&self) -> usize {
        self.store.read().await.len()
    }
}

impl Default for InMemoryBookmarkStore {
    fn default() -> Self {
        Self::new(BookmarkConfig::default())
    }
}

#[async_trait]
impl BookmarkStore for InMemoryBookmarkStore {
    async fn upsert(&self, user_id: &str, bookmark: Bookmark) -> AppResult<()> {
        check_key(user_id, &bookmark.code)?;
        let mut store = self.store.write().await;
        let bookmarks = store.entry(user_id.to_owned()).or_default();

        if let Some(existing) = bookmarks.iter_mut().find(|b| b.code == bookmark.code) {
            *existing = bookmark;
            return Ok(());
        }
        if bookmarks.len() >= self.max_per_user {
            return Err(AppError::quota_exceeded(format!(
                "Bookmark limit of {} reached",
                self.max_per_user
            )));
        }
        debug!(user_id, code = %bookmark.code, "Bookmark added");
        bookmarks.push(bookmark);
        Ok(())
    }

    async fn delete(&self, user_id: &str, code: &str) -> AppResult<bool> {
        check_key(user_id, code)?;
        let mut store = self.store.write().await;
        let Some(bookmarks) = store.get_mut(user_id) else {
            return Ok(false);
        };
        let before = bookmarks.len();
        bookmarks.retain(|b| b.code != code);
        let removed = bookmarks.len() != before;
        if bookmarks.is_empty() {
            store.remove(user_id);
        }
        if removed {
            debug!(user_id, code, "Bookmark removed");
        }
        Ok(removed)
    }

    async fn list(&self, user_id: &str) -> AppResult<Vec<Bookmark>> {
        check_user(user_id)?;
        Ok(self
            .store
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn contains(&self, user_id: &str, code: &str) -> AppResult<bool> {
        check_key(user_id, code)?;
        Ok(self
            .store
            .read()
            .await
            .get(user_id)
            .is_some_and(|bookmarks| bookmarks.iter().any(|b| b.code == code)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[tokio::test]
    async fn test_upsert_replaces_in_place() {
        let store = InMemoryBookmarkStore::default();
        store.upsert("u", Bookmark::new("11111111", "One")).await.unwrap();
        store.upsert("u", Bookmark::new("22222222", "Two")).await.unwrap();
        store
            .upsert("u", Bookmark::new("11111111", "One, renamed"))
            .await
            .unwrap();

        let list = store.list("u").await.unwrap();
        let names: Vec<_> = list.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["One, renamed", "Two"]);
    }

    #[tokio::test]
    async fn test_cap_only_applies_to_new_codes() {
        let store = InMemoryBookmarkStore::new(BookmarkConfig { max_per_user: 1 });
        store.upsert("u", Bookmark::new("11111111", "One")).await.unwrap();
        store.upsert("u", Bookmark::new("11111111", "Again")).await.unwrap();
        let error = store
            .upsert("u", Bookmark::new("22222222", "Two"))
            .await
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::QuotaExceeded);
    }

    #[tokio::test]
    async fn test_empty_users_are_dropped() {
        let store = InMemoryBookmarkStore::default();
        store.upsert("u", Bookmark::new("11111111", "One")).await.unwrap();
        assert_eq!(store.user_count().await, 1);
        assert!(store.delete("u", "11111111").await.unwrap());
        assert_eq!(store.user_count().await, 0);
        assert!(!store.delete("u", "11111111").await.unwrap());
    }
}
