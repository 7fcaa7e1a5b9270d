use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::model::WeatherRequest;

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.forecast.io/forecast";

/// Blocks left out of every request; only `currently` is rendered.
pub const EXCLUDED_BLOCKS: &str = "minutely,hourly,daily";

/// Client for the forecast.io (Dark Sky) forecast endpoint.
#[derive(Debug, Clone)]
pub struct ForecastIoProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl ForecastIoProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { api_key, base_url, http: Client::new() }
    }

    /// `<base>/<api_key>/<lat>,<long>?exclude=minutely,hourly,daily&units=<code>`
    pub fn request_url(&self, request: &WeatherRequest) -> String {
        format!(
            "{}/{}/{},{}?exclude={}&units={}",
            self.base_url,
            self.api_key,
            request.lat,
            request.long,
            EXCLUDED_BLOCKS,
            request.units.as_str(),
        )
    }
}

#[async_trait]
impl WeatherProvider for ForecastIoProvider {
    async fn fetch_raw(&self, request: &WeatherRequest) -> Result<String> {
        info!(lat = %request.lat, long = %request.long, units = %request.units, "Requesting forecast");

        let res = self
            .http
            .get(self.request_url(request))
            .send()
            .await
            .context("Failed to send request to forecast.io")?;

        let status = res.status();
        let body = res.text().await.context("Failed to read forecast.io response body")?;

        debug!(%status, bytes = body.len(), "Received forecast response");

        if !status.is_success() {
            return Err(anyhow!(
                "forecast.io request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        Ok(body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
