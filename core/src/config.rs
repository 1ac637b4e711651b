use tracing::warn;

const DEFAULT_MODEL: &str = "gpt-3.5-turbo-1106";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const DEFAULT_NEWS_BASE_URL: &str = "https://newsapi.org/v2/top-headlines";

/// Runtime settings, read once at startup.
///
/// A missing credential is logged and left empty; the provider that needs it
/// reports the failure.
#[derive(Clone)]
pub struct Settings {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub model: String,
    pub weather_api_key: String,
    pub weather_base_url: String,
    pub weather_units: String,
    pub news_api_key: String,
    pub news_base_url: String,
    pub news_country: String,
}

impl Settings {
    /// Load `.env` if there is one, then read the process environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let credential = |key: &str| {
            lookup(key).unwrap_or_else(|| {
                warn!("{} is not set; requests that need it will fail", key);
                String::new()
            })
        };
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Self {
            openai_api_key: credential("OPENAI_API_KEY"),
            openai_base_url: or_default("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
            model: or_default("OPENAI_MODEL", DEFAULT_MODEL),
            weather_api_key: credential("WEATHER_API_KEY"),
            weather_base_url: or_default("WEATHER_BASE_URL", DEFAULT_WEATHER_BASE_URL),
            weather_units: or_default("WEATHER_UNITS", "metric"),
            news_api_key: credential("NEWS_API_KEY"),
            news_base_url: or_default("NEWS_BASE_URL", DEFAULT_NEWS_BASE_URL),
            news_country: or_default("NEWS_COUNTRY", "us"),
        }
    }
}
