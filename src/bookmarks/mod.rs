// ABOUTME: Bookmark storage abstraction keyed by user and product code
// ABOUTME: Pluggable backend trait with an in-memory implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft

/// In-memory bookmark store
pub mod memory;

use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use fooddraft_core::models::Bookmark;
use serde::{Deserialize, Serialize};

pub use memory::InMemoryBookmarkStore;

/// Outcome of [`BookmarkStore::toggle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookmarkToggle {
    /// The product was not bookmarked and now is
    Added,
    /// The product was bookmarked and no longer is
    Removed,
}

/// Bookmark storage trait for pluggable backends
///
/// # Examples
///
/// ```rust
/// use fooddraft::bookmarks::{BookmarkStore, BookmarkToggle, InMemoryBookmarkStore};
/// use fooddraft::models::Bookmark;
/// # async fn example() -> Result<(), fooddraft::errors::AppError> {
/// let store = InMemoryBookmarkStore::default();
/// let bookmark = Bookmark::new("3017624010701", "Hazelnut spread");
///
/// assert_eq!(store.toggle("alice", bookmark.clone()).await?, BookmarkToggle::Added);
/// assert!(store.contains("alice", "3017624010701").await?);
/// assert_eq!(store.toggle("alice", bookmark).await?, BookmarkToggle::Removed);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// Insert `bookmark`, or replace the existing one with the same code
    ///
    /// A replaced bookmark keeps its position in [`list`](Self::list).
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty user or code, or `QuotaExceeded`
    /// when a new bookmark would exceed the per-user limit
    async fn upsert(&self, user_id: &str, bookmark: Bookmark) -> AppResult<()>;

    /// Remove the bookmark for `code`; `true` if one existed
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty user or code
    async fn delete(&self, user_id: &str, code: &str) -> AppResult<bool>;

    /// All bookmarks of `user_id`, oldest first
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty user
    async fn list(&self, user_id: &str) -> AppResult<Vec<Bookmark>>;

    /// Whether `code` is bookmarked by `user_id`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty user or code
    async fn contains(&self, user_id: &str, code: &str) -> AppResult<bool>;

    /// Remove the bookmark if present, otherwise add it
    ///
    /// # Errors
    ///
    /// Propagates errors from [`delete`](Self::delete) and [`upsert`](Self::upsert)
    async fn toggle(&self, user_id: &str, bookmark: Bookmark) -> AppResult<BookmarkToggle> {
        if self.delete(user_id, &bookmark.code).await? {
            Ok(BookmarkToggle::Removed)
        } else {
            self.upsert(user_id, bookmark).await?;
            Ok(BookmarkToggle::Added)
        }
    }
}

/// Reject blank user ids
pub(crate) fn check_user(user_id: &str) -> AppResult<()> {
    if user_id.trim().is_empty() {
        return Err(AppError::invalid_input("User id cannot be empty"));
    }
    Ok(())
}

/// Reject blank user ids and product codes
pub(crate) fn check_key(user_id: &str, code: &str) -> AppResult<()> {
    check_user(user_id)?;
    if code.trim().is_empty() {
        return Err(AppError::invalid_input("Product code cannot be empty"));
    }
    Ok(())
}
