use std::path::PathBuf;
use std::time::Duration as StdDuration;

use crate::config::{self, ConfigError};
use crate::models::{Category, NewsItem};

pub mod fetch;

#[derive(Debug, thiserror::Error)]
pub enum NewsServiceError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("news request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("news api status {0}")]
    Status(reqwest::StatusCode),
    #[error("news api error code {code}: {msg}")]
    Api { code: i64, msg: String },
    #[error("news response parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("news response missing result.newslist")]
    MalformedResponse,
    #[error("news api returned an empty newslist")]
    Empty,
}

pub struct NewsService {
    client: reqwest::Client,
    config_path: PathBuf,
}

impl NewsService {
    /// Build a news service reading its API key from the given config file.
    pub fn new(config_path: PathBuf) -> Result<Self, NewsServiceError> {
        let client = reqwest::Client::builder()
            .timeout(StdDuration::from_secs(15))
            .build()?;

        Ok(Self {
            client,
            config_path,
        })
    }

    /// Fetch `count` news items for a category.
    pub async fn get_news(
        &self,
        category: Category,
        count: usize,
    ) -> Result<Vec<NewsItem>, NewsServiceError> {
        let api_key = config::load_api_key(&self.config_path).await?;
        let items = fetch::fetch_news(&self.client, &api_key, category, count).await?;
        if items.is_empty() {
            return Err(NewsServiceError::Empty);
        }
        Ok(items)
    }
}

pub(crate) fn endpoint(category: Category) -> &'static str {
    match category {
        Category::Ai => "https://apis.tianapi.com/ai/index",
        Category::Anime => "https://apis.tianapi.com/dongman/index",
        Category::Esports => "https://apis.tianapi.com/esports/index",
    }
}
