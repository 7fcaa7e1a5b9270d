use crate::{WeatherRequest, WeatherSnapshot, decode::decode_lenient};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod forecastio;

pub use forecastio::ForecastIoProvider;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Perform the request and return the raw response body.
    async fn fetch_raw(&self, request: &WeatherRequest) -> anyhow::Result<String>;

    /// Fetch and decode. A body that fails to decode yields a snapshot with
    /// no current conditions rather than an error.
    async fn get_weather(&self, request: &WeatherRequest) -> anyhow::Result<WeatherSnapshot> {
        let body = self.fetch_raw(request).await?;
        Ok(decode_lenient(body.as_bytes()))
    }
}
