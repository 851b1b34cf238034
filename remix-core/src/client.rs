//! HTTP client for the separation and analysis services.
//!
//! Both endpoints take one multipart field named `file` and answer with a
//! small JSON body. There is no authentication, no retry, and one generic
//! failure path: non-2xx statuses become [`RemixError::Service`], bodies
//! that fail to deserialize become [`RemixError::MalformedResponse`]
//! (the whole response is rejected, never partially applied).

use std::time::Duration;

use reqwest::blocking::{multipart, Client};

use crate::error::{RemixError, Result};
use crate::session::SelectedFile;
use crate::types::{RemixResponse, StemSet, TrackAnalysis};

/// Default base address of the processing services.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the service base address.
pub const BASE_URL_ENV: &str = "REMIX_API_BASE";

pub fn http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(10))
        // Separation runs 30-120s on a full-length track.
        .timeout(Duration::from_secs(300))
        .build()
        .expect("reqwest client build failed")
}

/// Client bound to one service base address.
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: http_client(),
        }
    }

    /// Builds a client from `REMIX_API_BASE`, falling back to localhost.
    pub fn from_env() -> Self {
        let base =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Uploads the file to `/remix` and returns the four stem URLs.
    pub fn separate(&self, file: &SelectedFile) -> Result<StemSet> {
        let body = self.upload("/remix", file)?;
        let parsed: RemixResponse =
            serde_json::from_str(&body).map_err(|e| RemixError::MalformedResponse {
                endpoint: "/remix".into(),
                reason: e.to_string(),
            })?;
        Ok(parsed.stems)
    }

    /// Uploads the file to `/analyze` and returns the tempo/mood report.
    pub fn analyze(&self, file: &SelectedFile) -> Result<TrackAnalysis> {
        let body = self.upload("/analyze", file)?;
        serde_json::from_str(&body).map_err(|e| RemixError::MalformedResponse {
            endpoint: "/analyze".into(),
            reason: e.to_string(),
        })
    }

    /// Downloads one stem's audio so a widget can bind to it.
    ///
    /// Stem URLs may come back absolute or relative to the service base.
    pub fn fetch_audio(&self, url: &str) -> Result<Vec<u8>> {
        let url = self.absolute(url);
        log::debug!("GET {url}");
        let resp = self.http.get(&url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(RemixError::Service(format!(
                "GET {url} returned {status}"
            )));
        }
        Ok(resp.bytes()?.to_vec())
    }

    /// Resolves a possibly-relative URL against the base address.
    pub fn absolute(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else if url.starts_with('/') {
            format!("{}{}", self.base_url, url)
        } else {
            format!("{}/{}", self.base_url, url)
        }
    }

    fn upload(&self, endpoint: &str, file: &SelectedFile) -> Result<String> {
        let part = multipart::Part::bytes(file.data.as_ref().clone())
            .file_name(file.name.clone());
        let form = multipart::Form::new().part("file", part);

        let url = format!("{}{}", self.base_url, endpoint);
        log::info!("POST {} ({} bytes)", url, file.data.len());

        let resp = self.http.post(&url).multipart(form).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(RemixError::Service(format!(
                "{endpoint} returned {status}"
            )));
        }
        Ok(resp.text()?)
    }
}
