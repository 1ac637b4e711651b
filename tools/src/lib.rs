//! The two lookups the briefing model can call: current weather and top
//! headlines. Each one is a single GET against a third-party provider.

pub mod error;
mod fetch;
pub mod news;
pub mod weather;

use async_trait::async_trait;

pub use error::ExternalServiceError;
pub use news::NewsProvider;
pub use weather::{WeatherProvider, WeatherReport};

/// The local handlers behind the tool catalog.
///
/// The orchestrator only talks to this trait, so tests can swap in canned
/// data without touching the network.
#[async_trait]
pub trait Lookups: Send + Sync {
    async fn weather(&self, city: &str) -> Result<WeatherReport, ExternalServiceError>;

    async fn headlines(&self) -> Result<Vec<String>, ExternalServiceError>;
}

/// The real providers, sharing one HTTP client.
pub struct Providers {
    pub weather: WeatherProvider,
    pub news: NewsProvider,
}

#[async_trait]
impl Lookups for Providers {
    async fn weather(&self, city: &str) -> Result<WeatherReport, ExternalServiceError> {
        self.weather.current(city).await
    }

    async fn headlines(&self) -> Result<Vec<String>, ExternalServiceError> {
        self.news.top_headlines().await
    }
}
