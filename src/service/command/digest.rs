use tracing::error;

use crate::service::news::{NewsService, NewsServiceError};
use crate::service::render::{format_text_digest, RenderError, RenderService};

use super::{Command, OutputFormat};

/// Reply payload for a news command: exactly one of these per command.
pub enum DigestReply {
    Text(String),
    Image(Vec<u8>),
}

/// Run a parsed command to completion: fetch, then format or render.
///
/// Errors are user-facing reply strings; the underlying cause is logged.
pub async fn handle(
    command: Command,
    news: &NewsService,
    render: &RenderService,
) -> Result<DigestReply, String> {
    let items = news
        .get_news(command.category, command.item_count())
        .await
        .map_err(|err| {
            error!(
                "failed to fetch {} news: {err}",
                command.category.display_name()
            );
            match err {
                NewsServiceError::Config(cause) => {
                    format!("请先配置{}文件", cause.path().display())
                }
                _ => "获取资讯失败，请稍后重试".to_string(),
            }
        })?;

    match command.format {
        OutputFormat::Text => Ok(DigestReply::Text(format_text_digest(
            command.category,
            &items,
        ))),
        OutputFormat::Image => {
            let bytes = render
                .render_digest(command.category, &items)
                .await
                .map_err(|err| {
                    error!("failed to render digest image: {err}");
                    match err {
                        RenderError::BrowserConfig(_) | RenderError::Launch(_) => {
                            "浏览器初始化失败，请稍后重试".to_string()
                        }
                        _ => "生成图片失败，请稍后重试".to_string(),
                    }
                })?;
            Ok(DigestReply::Image(bytes))
        }
    }
}
