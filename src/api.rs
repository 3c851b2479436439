use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// HTTP metadata the store attaches to every object.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HttpMetadata {
    #[serde(rename = "contentType", default)]
    pub content_type: String,
}

/// User-defined metadata; only the thumbnail reference is interesting here.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CustomMetadata {
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// One listed remote-storage object, file or pseudo-directory.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Entry {
    pub key: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub uploaded: String,
    #[serde(rename = "httpMetadata", default)]
    pub http_metadata: HttpMetadata,
    #[serde(rename = "customMetadata", default)]
    pub custom_metadata: Option<CustomMetadata>,
}

impl Entry {
    /// MIME-like content type; empty string when the store sent none.
    pub fn content_type(&self) -> &str {
        &self.http_metadata.content_type
    }

    /// Opaque reference to a precomputed thumbnail, if the store has one.
    pub fn thumbnail(&self) -> Option<&str> {
        self.custom_metadata
            .as_ref()
            .and_then(|meta| meta.thumbnail.as_deref())
    }
}

#[derive(Clone)]
pub struct DriveClient {
    base_url: String,
    client: Client,
}

impl DriveClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List the entries directly under a working-directory prefix.
    ///
    /// The server returns entries in its own order; that order is preserved.
    pub async fn list_children(&self, prefix: &str) -> Result<Vec<Entry>> {
        let url = format!(
            "{}/api/children?prefix={}",
            self.base_url,
            urlencoding::encode(prefix)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to list children")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow::anyhow!("API error ({}): {}", status, error_text));
        }

        let text = response.text().await.context("Failed to read response")?;
        let entries: Vec<Entry> =
            serde_json::from_str(&text).context("Failed to parse listing response")?;

        Ok(entries)
    }

    /// Download the bytes behind an already-resolved preview URL.
    ///
    /// `url` is a site-relative path (`/webdav/...`); the base URL is prepended here.
    pub async fn fetch_preview(&self, url: &str) -> Result<Vec<u8>> {
        let absolute = format!("{}{}", self.base_url, url);

        let response = self
            .client
            .get(&absolute)
            .send()
            .await
            .context("Failed to fetch preview")?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow::anyhow!("Preview fetch failed: {}", status));
        }

        let bytes = response
            .bytes()
            .await
            .context("Failed to read preview body")?;

        Ok(bytes.to_vec())
    }
}
