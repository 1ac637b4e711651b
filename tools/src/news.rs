use serde::Deserialize;
use tracing::info;

use crate::error::ExternalServiceError;
use crate::fetch;

const PROVIDER: &str = "news";

#[derive(Debug, Deserialize)]
struct TopHeadlines {
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    title: Option<String>,
}

pub struct NewsProvider {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    country: String,
}

impl NewsProvider {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
            country: country.into(),
        }
    }

    pub async fn top_headlines(&self) -> Result<Vec<String>, ExternalServiceError> {
        info!("Fetching top headlines ({})", self.country);
        let query = [
            ("country", self.country.as_str()),
            ("apiKey", self.api_key.as_str()),
        ];
        let body = fetch::get_body(&self.http, PROVIDER, &self.base_url, &query).await?;
        parse_headlines(&body)
    }
}

/// Titles in provider order. Articles without a title are skipped.
pub fn parse_headlines(body: &str) -> Result<Vec<String>, ExternalServiceError> {
    let top: TopHeadlines = fetch::decode(PROVIDER, body)?;
    Ok(top.articles.into_iter().filter_map(|a| a.title).collect())
}
