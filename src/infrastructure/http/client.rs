//! JSON HTTP client
//!
//! Thin wrapper over `reqwest::blocking` bound to one base URL and one
//! timeout. Every transport failure is mapped to a [`ZoteroError`].

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ZoteroError, ZoteroResult};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 23119;

#[derive(Debug, Clone)]
pub struct JsonClient {
    client: Client,
    base_url: String,
    port: u16,
}

impl JsonClient {
    /// Client for `http://127.0.0.1:{port}{base_path}`.
    pub fn new(port: u16, base_path: &str, timeout: Duration) -> ZoteroResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("zotero-collection/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ZoteroError::Request(e.to_string()))?;

        Ok(Self {
            client,
            base_url: format!("http://{}:{}{}", DEFAULT_HOST, port, base_path),
            port,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    pub fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ZoteroResult<T> {
        let url = self.url(endpoint);
        tracing::debug!(method = "GET", url = %url, "request");
        self.send(&url, self.client.get(&url))
    }

    pub fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ZoteroResult<T> {
        let url = self.url(endpoint);
        tracing::debug!(method = "POST", url = %url, "request");
        self.send(&url, self.client.post(&url).json(body))
    }

    fn send<T: DeserializeOwned>(&self, url: &str, request: RequestBuilder) -> ZoteroResult<T> {
        let response = request.send().map_err(|e| self.transport_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ZoteroError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().map_err(|e| self.transport_error(url, e))?;
        serde_json::from_str(&body).map_err(|e| ZoteroError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    fn transport_error(&self, url: &str, err: reqwest::Error) -> ZoteroError {
        if err.is_connect() {
            ZoteroError::Connect { port: self.port }
        } else if err.is_timeout() {
            ZoteroError::Timeout {
                url: url.to_string(),
            }
        } else {
            ZoteroError::Request(err.to_string())
        }
    }
}
