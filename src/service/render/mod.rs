use std::path::PathBuf;

use chromiumoxide::error::CdpError;
use chrono::Local;
use thiserror::Error;

use crate::models::{Category, NewsItem};

pub mod browser;
mod html;
mod text;

pub use html::build_digest_html;
pub use text::format_text_digest;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read template: {0}")]
    Template(#[source] std::io::Error),
    #[error("invalid browser configuration: {0}")]
    BrowserConfig(String),
    #[error("failed to launch browser: {0}")]
    Launch(#[source] CdpError),
    #[error("browser error: {0}")]
    Browser(#[from] CdpError),
    #[error("screenshot produced no data")]
    EmptyScreenshot,
}

/// Turns a newslist into a full-page PNG of the styled digest card.
///
/// The template is re-read on every render so it can be tweaked without a
/// restart; the browser behind [`browser::ScreenshotEngine`] is reused.
pub struct RenderService {
    engine: browser::ScreenshotEngine,
    template_path: PathBuf,
}

impl RenderService {
    pub fn new(template_path: PathBuf) -> Self {
        Self {
            engine: browser::ScreenshotEngine::new(),
            template_path,
        }
    }

    pub async fn render_digest(
        &self,
        category: Category,
        items: &[NewsItem],
    ) -> Result<Vec<u8>, RenderError> {
        let template = tokio::fs::read_to_string(&self.template_path)
            .await
            .map_err(RenderError::Template)?;

        let date = Local::now().format("%Y年%m月%d日").to_string();
        let html = build_digest_html(&template, category, items, &date);

        let bytes = self.engine.capture(&html).await?;
        if bytes.is_empty() {
            return Err(RenderError::EmptyScreenshot);
        }
        Ok(bytes)
    }

    /// Close the headless browser, if one was ever launched.
    pub async fn shutdown(&self) {
        self.engine.shutdown().await;
    }
}
