use serde::Deserialize;
use tracing::warn;

use crate::models::{Category, NewsItem};

use super::NewsServiceError;

#[derive(Debug, Deserialize)]
struct ApiResponse {
    code: i64,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    result: Option<ApiResult>,
}

#[derive(Debug, Deserialize)]
struct ApiResult {
    #[serde(default)]
    newslist: Option<Vec<NewsItem>>,
}

/// Fetch the raw newslist for a category from TianAPI.
pub async fn fetch_news(
    client: &reqwest::Client,
    api_key: &str,
    category: Category,
    count: usize,
) -> Result<Vec<NewsItem>, NewsServiceError> {
    let num = count.to_string();
    let resp = client
        .get(super::endpoint(category))
        .query(&[("key", api_key), ("num", num.as_str())])
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp
            .text()
            .await
            .unwrap_or_else(|_| "unable to read body".to_string());
        warn!("news api returned error status {status}: {body}");
        return Err(NewsServiceError::Status(status));
    }

    let raw = resp.bytes().await?;
    parse_response(&raw)
}

/// Parse the TianAPI response envelope: `{code: 200, result: {newslist: [..]}}`.
pub fn parse_response(raw: &[u8]) -> Result<Vec<NewsItem>, NewsServiceError> {
    let parsed: ApiResponse = serde_json::from_slice(raw).map_err(|e| {
        let preview = String::from_utf8_lossy(&raw[..raw.len().min(500)]);
        warn!("failed to parse news api response: {e}; body preview: {preview}");
        NewsServiceError::Parse(e)
    })?;

    if parsed.code != 200 {
        return Err(NewsServiceError::Api {
            code: parsed.code,
            msg: parsed.msg.unwrap_or_else(|| "unknown error".to_string()),
        });
    }

    parsed
        .result
        .and_then(|r| r.newslist)
        .ok_or(NewsServiceError::MalformedResponse)
}
