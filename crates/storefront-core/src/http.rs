//! HTTP uploader for the storefront backend.
//!
//! In development the backend sits behind a proxy that forwards `/api/*`,
//! so every endpoint is resolved relative to one base URL.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::{UploadError, UploadResult};
use crate::upload::{SelectedFile, Uploader};

pub const DEFAULT_UPLOAD_PATH: &str = "/api/upload";
pub const DEFAULT_FIELD_NAME: &str = "image";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how to reach the backend
#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    pub base_url: Url,
    pub upload_path: String,
    /// Multipart field carrying the file
    pub field_name: String,
    pub timeout: Duration,
}

impl BackendConfig {
    pub fn new(base_url: &str) -> UploadResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| UploadError::Config(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(UploadError::Config(format!("{} cannot be a base URL", base_url)));
        }
        Ok(Self {
            base_url,
            upload_path: DEFAULT_UPLOAD_PATH.to_string(),
            field_name: DEFAULT_FIELD_NAME.to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve an API path against the base, keeping any base path prefix
    pub fn endpoint(&self, path: &str) -> UploadResult<Url> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        base.join(path.trim_start_matches('/'))
            .map_err(|e| UploadError::Config(format!("{}: {}", path, e)))
    }

    pub fn upload_endpoint(&self) -> UploadResult<Url> {
        self.endpoint(&self.upload_path)
    }
}

/// Body returned by the upload endpoint
#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(alias = "imageUrl", alias = "secure_url", alias = "location")]
    url: String,
}

/// Posts the file as `multipart/form-data` and adopts the returned URL
#[derive(Debug, Clone)]
pub struct HttpUploader {
    client: Client,
    endpoint: Url,
    field_name: String,
}

impl HttpUploader {
    pub fn new(config: &BackendConfig) -> UploadResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            endpoint: config.upload_endpoint()?,
            field_name: config.field_name.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Uploader for HttpUploader {
    async fn upload(&self, file: &SelectedFile) -> UploadResult<String> {
        let bytes = file.read().await?;
        tracing::debug!(endpoint = %self.endpoint, size = bytes.len(), "posting image");

        let part = Part::bytes(bytes.to_vec())
            .file_name(file.name().to_string())
            .mime_str(file.media_type())?;
        let form = Form::new().part(self.field_name.clone(), part);

        let response = self.client.post(self.endpoint.clone()).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::Rejected(rejection_message(status.as_u16(), &body)));
        }

        let body = response.text().await?;
        parse_upload_response(&body)
    }
}

fn rejection_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("server responded with status {}", status)
    } else {
        let snippet: String = body.chars().take(200).collect();
        format!("server responded with status {}: {}", status, snippet)
    }
}

fn parse_upload_response(body: &str) -> UploadResult<String> {
    let parsed: UploadResponse = serde_json::from_str(body)
        .map_err(|e| UploadError::Rejected(format!("unexpected upload response: {}", e)))?;
    Ok(parsed.url)
}
