// src/domain/bookmark.rs
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::{DomainError, DomainResult};

/// Bookmark as the remote service hands it to us.
///
/// The service owns the record; the client only ever holds a transient,
/// per-session copy. `deleted_at` is set while the bookmark sits in the trash.
#[derive(Builder, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    #[builder(default)]
    pub favicon: Option<String>,
    #[builder(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Bookmark {
    /// Validating constructor for bookmarks created on the client side.
    pub fn new<S: AsRef<str>>(id: S, url: S, title: S) -> DomainResult<Self> {
        let id_str = id.as_ref().trim();
        if id_str.is_empty() {
            return Err(DomainError::InvalidBookmarkId(
                "identifier must not be empty".to_string(),
            ));
        }

        let url_str = url.as_ref();
        url::Url::parse(url_str).map_err(|e| DomainError::InvalidUrl(e.to_string()))?;

        Ok(Self {
            id: id_str.to_string(),
            title: title.as_ref().to_string(),
            url: url_str.to_string(),
            favicon: None,
            deleted_at: None,
        })
    }

    /// Converts from the wire representation without re-validating the URL;
    /// the server is the system of record and may hold entries we would reject.
    pub fn from_remote(
        id: String,
        title: String,
        url: String,
        favicon: Option<String>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            title,
            url,
            favicon,
            deleted_at,
        }
    }

    pub fn is_trashed(&self) -> bool {
        self.deleted_at.is_some()
    }
}

impl fmt::Display for Bookmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.url)
    }
}
