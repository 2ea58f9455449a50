use crate::filter::GENRE_KEYWORDS;
use crate::models::SearchQuery;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const SEARCH_ENDPOINT: &str = "https://de1.api.radio-browser.info/json/stations/search";
pub const USER_AGENT: &str = "iOS-Radio-App/1.0";
pub const PRESET_PATH: &str = "RadioApp/Resources/preset_stations.json";
pub const MAX_PRESETS: usize = 20;

/// Everything the fetch needs, fixed at build time.
#[derive(Debug, Clone)]
pub struct PresetConfig {
    pub endpoint: Url,
    pub user_agent: String,
    pub timeout: Duration,
    pub query: SearchQuery,
    pub keywords: Vec<String>,
    pub max_presets: usize,
    pub output_path: PathBuf,
}

impl Default for PresetConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(SEARCH_ENDPOINT).expect("static endpoint URL"),
            user_agent: USER_AGENT.to_string(),
            timeout: Duration::from_secs(15),
            query: SearchQuery::default(),
            keywords: GENRE_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            max_presets: MAX_PRESETS,
            output_path: PathBuf::from(PRESET_PATH),
        }
    }
}
