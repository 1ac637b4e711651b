pub mod briefing;
pub mod config;
pub mod conversation;
pub mod error;
pub mod llm;
pub mod registry;

use briefing_tools::{NewsProvider, Providers, WeatherProvider};

pub use briefing::{Briefing, DAILY_BRIEFING_PROMPT};
pub use config::Settings;
pub use error::BriefingError;
pub use llm::{Brain, ChatModel};

/// Wire the real model client and providers together from settings.
pub fn connect(settings: &Settings) -> Briefing<Brain, Providers> {
    let http = reqwest::Client::new();
    let providers = Providers {
        weather: WeatherProvider::new(
            http.clone(),
            settings.weather_base_url.as_str(),
            settings.weather_api_key.as_str(),
            settings.weather_units.as_str(),
        ),
        news: NewsProvider::new(
            http,
            settings.news_base_url.as_str(),
            settings.news_api_key.as_str(),
            settings.news_country.as_str(),
        ),
    };
    Briefing::new(Brain::new(settings), providers)
}
