use serde::Deserialize;
use tracing::info;

use crate::error::ExternalServiceError;
use crate::fetch;

const PROVIDER: &str = "weather";

/// Current conditions for one city.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub city: String,
    pub condition: String,
    pub temperature: f64,
}

// Only the fields we read; everything else in the provider payload is ignored.
#[derive(Debug, Deserialize)]
struct CurrentWeather {
    name: Option<String>,
    main: Readings,
    weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
struct Readings {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

pub struct WeatherProvider {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    units: String,
}

impl WeatherProvider {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        units: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
            units: units.into(),
        }
    }

    pub async fn current(&self, city: &str) -> Result<WeatherReport, ExternalServiceError> {
        info!("Fetching current weather for '{}'", city);
        let query = [
            ("q", city),
            ("appid", self.api_key.as_str()),
            ("units", self.units.as_str()),
        ];
        let body = fetch::get_body(&self.http, PROVIDER, &self.base_url, &query).await?;
        parse_report(city, &body)
    }
}

/// Parse a provider payload into a report. A payload missing any field we
/// need is rejected whole; there is no partially filled report.
pub fn parse_report(requested_city: &str, body: &str) -> Result<WeatherReport, ExternalServiceError> {
    let current: CurrentWeather = fetch::decode(PROVIDER, body)?;

    let condition = current
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| ExternalServiceError::payload(PROVIDER, "`weather` entry list is empty"))?
        .description;

    let city = current
        .name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| requested_city.to_string());

    Ok(WeatherReport {
        city,
        condition,
        temperature: current.main.temp,
    })
}
