use serde::{Deserialize, Serialize};

/// A single news entry, deserialized verbatim from the TianAPI response.
/// Absent fields default; presence checks happen at formatting time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctime: Option<String>,
    #[serde(default, rename = "picUrl", skip_serializing_if = "Option::is_none")]
    pub pic_url: Option<String>,
}

/// News topics the bot knows how to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Ai,
    Anime,
    Esports,
}

impl Category {
    /// User-facing topic name, used in digest headers and titles.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Ai => "AI",
            Category::Anime => "动漫",
            Category::Esports => "电竞",
        }
    }
}
