// src/infrastructure/http.rs
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

use crate::application::error::ApplicationResult;
use crate::application::services::trash_service::TrashService;
use crate::config::Settings;
use crate::domain::bookmark::Bookmark;
use crate::infrastructure::error::InfrastructureError;

/// HTTP implementation of the trash boundary against the tmarks REST API.
#[derive(Debug)]
pub struct HttpTrashService {
    client: Client,
    base_url: Url,
    api_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BookmarkDto {
    id: String,
    title: String,
    url: String,
    #[serde(default)]
    favicon: Option<String>,
    #[serde(default)]
    deleted_at: Option<DateTime<Utc>>,
}

impl From<BookmarkDto> for Bookmark {
    fn from(dto: BookmarkDto) -> Self {
        Bookmark::from_remote(dto.id, dto.title, dto.url, dto.favicon, dto.deleted_at)
    }
}

#[derive(Debug, Deserialize)]
struct TrashPageDto {
    bookmarks: Vec<BookmarkDto>,
}

#[derive(Debug, Deserialize)]
struct EmptyTrashDto {
    count: usize,
}

impl HttpTrashService {
    pub fn new(settings: &Settings) -> Result<Self, InfrastructureError> {
        let base_url = Url::parse(&settings.api_url)
            .map_err(|e| InfrastructureError::InvalidEndpoint(e.to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|e| InfrastructureError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            api_token: settings.api_token.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, InfrastructureError> {
        self.base_url
            .join(path)
            .map_err(|e| InfrastructureError::InvalidEndpoint(e.to_string()))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, InfrastructureError> {
        let request = match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request
            .send()
            .await
            .map_err(|e| InfrastructureError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(InfrastructureError::Network(format!(
                "server returned {}",
                status
            )));
        }
        Ok(response)
    }
}

#[async_trait]
impl TrashService for HttpTrashService {
    #[instrument(skip(self), level = "debug")]
    async fn fetch_trash(&self, page_size: usize) -> ApplicationResult<Vec<Bookmark>> {
        let endpoint = self.endpoint("api/bookmarks/trash")?;
        let request = self
            .client
            .get(endpoint)
            .query(&[("page_size", page_size)]);

        let response = self.send(request).await?;
        let page: TrashPageDto = response
            .json()
            .await
            .map_err(|e| InfrastructureError::Serialization(e.to_string()))?;

        debug!("fetched {} trashed bookmarks", page.bookmarks.len());
        Ok(page.bookmarks.into_iter().map(Bookmark::from).collect())
    }

    #[instrument(skip(self), level = "debug")]
    async fn restore_from_trash(&self, id: &str) -> ApplicationResult<()> {
        let endpoint = self.endpoint(&format!("api/bookmarks/{}/restore", id))?;
        self.send(self.client.post(endpoint)).await?;
        Ok(())
    }

    #[instrument(skip(self), level = "debug")]
    async fn permanent_delete(&self, id: &str) -> ApplicationResult<()> {
        let endpoint = self.endpoint(&format!("api/bookmarks/{}/permanent", id))?;
        self.send(self.client.delete(endpoint)).await?;
        Ok(())
    }

    #[instrument(skip(self), level = "debug")]
    async fn empty_trash(&self) -> ApplicationResult<usize> {
        let endpoint = self.endpoint("api/bookmarks/trash")?;
        let response = self.send(self.client.delete(endpoint)).await?;
        let result: EmptyTrashDto = response
            .json()
            .await
            .map_err(|e| InfrastructureError::Serialization(e.to_string()))?;
        Ok(result.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_trash_page_json_when_deserialize_then_bookmarks_in_order() {
        let json = r#"{
            "bookmarks": [
                {"id": "b1", "title": "One", "url": "https://one.example", "deleted_at": "2026-08-01T12:00:00Z"},
                {"id": "b2", "title": "Two", "url": "https://two.example", "favicon": "https://two.example/icon.png"}
            ]
        }"#;
        let page: TrashPageDto = serde_json::from_str(json).unwrap();
        let bookmarks: Vec<Bookmark> = page.bookmarks.into_iter().map(Bookmark::from).collect();

        assert_eq!(bookmarks.len(), 2);
        assert_eq!(bookmarks[0].id, "b1");
        assert!(bookmarks[0].is_trashed());
        assert_eq!(bookmarks[1].id, "b2");
        assert_eq!(
            bookmarks[1].favicon.as_deref(),
            Some("https://two.example/icon.png")
        );
        assert!(!bookmarks[1].is_trashed());
    }

    #[test]
    fn given_empty_trash_json_when_deserialize_then_count_parsed() {
        let result: EmptyTrashDto = serde_json::from_str(r#"{"count": 3}"#).unwrap();
        assert_eq!(result.count, 3);
    }

    #[test]
    fn given_base_url_with_trailing_slash_when_endpoint_then_path_is_joined() {
        let settings = Settings {
            api_url: "https://marks.example/".to_string(),
            ..Settings::default()
        };
        let service = HttpTrashService::new(&settings).unwrap();
        let endpoint = service.endpoint("api/bookmarks/trash").unwrap();
        assert_eq!(endpoint.as_str(), "https://marks.example/api/bookmarks/trash");
    }

    #[test]
    fn given_invalid_base_url_when_new_then_returns_error() {
        let settings = Settings {
            api_url: "not a url".to_string(),
            ..Settings::default()
        };
        assert!(matches!(
            HttpTrashService::new(&settings),
            Err(InfrastructureError::InvalidEndpoint(_))
        ));
    }
}
