//! `reqwest`-backed implementation of [`RoadApi`].
//!
//! Compiles for native targets (CLI) and for `wasm32-unknown-unknown`,
//! where reqwest delegates to the browser's `fetch`.

use crate::api::{delete_point_path, RoadApi, ROADPOINTS_PATH, STATS_PATH};
use crate::delete::DeleteResponse;
use crate::error::{Result, RoadError};
use crate::road_point::{points_from_json, PointId, RoadPoint};
use crate::stats::Stats;
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

impl From<reqwest::Error> for RoadError {
    fn from(err: reqwest::Error) -> Self {
        RoadError::Transport(err.to_string())
    }
}

/// HTTP client for the RoadPulse backend.
#[derive(Clone, Debug)]
pub struct HttpRoadApi {
    client: Client,
    base: String,
}

/// Builder for [`HttpRoadApi`].
#[derive(Debug, Default)]
pub struct HttpRoadApiBuilder {
    base_url: String,
    cookie: Option<String>,
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    timeout: Option<Duration>,
}

impl HttpRoadApiBuilder {
    /// Raw `Cookie` header carrying the backend session. Browsers ignore it;
    /// there the page's own cookies are sent.
    pub fn cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = Some(cookie.into());
        self
    }

    /// Per-request timeout. Only honored on native targets.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<HttpRoadApi> {
        let parsed = Url::parse(&self.base_url)
            .map_err(|e| RoadError::InvalidConfig(format!("{}: {e}", self.base_url)))?;
        if parsed.cannot_be_a_base() {
            return Err(RoadError::InvalidConfig(format!("{} is not a base URL", self.base_url)));
        }

        let mut headers = HeaderMap::new();
        if let Some(cookie) = &self.cookie {
            let value = HeaderValue::from_str(cookie)
                .map_err(|e| RoadError::InvalidConfig(format!("cookie header: {e}")))?;
            headers.insert(COOKIE, value);
        }

        let builder = Client::builder().default_headers(headers);
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match self.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };

        Ok(HttpRoadApi {
            client: builder.build()?,
            base: self.base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl HttpRoadApi {
    /// Client with default settings for the given origin, e.g.
    /// `"http://127.0.0.1:2101"`.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::builder(base_url).build()
    }

    pub fn builder(base_url: &str) -> HttpRoadApiBuilder {
        HttpRoadApiBuilder {
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.get_text(path).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// GET a success body as text.
    async fn get_text(&self, path: &str) -> Result<String> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RoadError::Status {
                status: status.as_u16(),
                url,
            });
        }
        Ok(response.text().await?)
    }
}

impl RoadApi for HttpRoadApi {
    async fn fetch_points(&self) -> Result<Vec<RoadPoint>> {
        let body = self.get_text(ROADPOINTS_PATH).await?;
        points_from_json(&body)
    }

    async fn fetch_stats(&self) -> Result<Stats> {
        self.get_json(STATS_PATH).await
    }

    async fn delete_point(&self, id: PointId) -> Result<DeleteResponse> {
        let url = self.url(&delete_point_path(id));
        debug!("POST {}", url);
        let response = self.client.post(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        // The backend reports "not found" as a JSON body on a 404, so the
        // body wins over the status whenever it parses.
        match serde_json::from_str::<DeleteResponse>(&body) {
            Ok(parsed) => Ok(parsed),
            Err(e) if status.is_success() => Err(e.into()),
            Err(_) => {
                warn!("Delete of point {} rejected with status {}", id, status);
                Err(RoadError::Status {
                    status: status.as_u16(),
                    url,
                })
            }
        }
    }
}
