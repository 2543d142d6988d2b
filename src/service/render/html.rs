use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::warn;

use crate::models::{Category, NewsItem};

/// Marker in the template replaced by the generated news units.
pub const CONTENT_MARKER: &str = "<!-- NEWS_CONTENT -->";
/// Marker in the template replaced by the render date.
pub const DATE_MARKER: &str = "<!-- DATE -->";

/// Heading placeholder in the template, swapped for the category heading.
const DEFAULT_HEADING: &str = "今日快讯";

const MAX_DESCRIPTION_CHARS: usize = 100;

/// Fill the digest template for a category.
///
/// Items without an image URL are skipped; every interpolated field is
/// HTML-escaped before injection.
pub fn build_digest_html(
    template: &str,
    category: Category,
    items: &[NewsItem],
    date: &str,
) -> String {
    let heading = format!("今日{}快讯", category.display_name());
    let mut units = String::new();

    for item in items {
        let Some(pic_url) = item.pic_url.as_deref().filter(|u| !u.is_empty()) else {
            warn!("skipping news item without an image url: {}", item.title);
            continue;
        };

        let title = if item.title.is_empty() {
            "未知标题"
        } else {
            item.title.as_str()
        };
        let description = item
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("无描述");
        let description = truncate_chars(description, MAX_DESCRIPTION_CHARS);
        let ctime = item
            .ctime
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or("未知时间");

        units.push_str(&format!(
            r#"
            <div class="news-unit">
                <img src="{pic}" alt="news image">
                <div class="text-block">
                    <div class="title">{title}</div>
                    <div class="description">{description}</div>
                    <div class="ctime">{ctime}</div>
                </div>
            </div>"#,
            pic = encode_double_quoted_attribute(pic_url),
            title = encode_text(title),
            description = encode_text(&description),
            ctime = encode_text(ctime),
        ));
    }

    // Heading first, so injected news text can never collide with the
    // placeholder string.
    template
        .replace(DEFAULT_HEADING, &heading)
        .replace(DATE_MARKER, date)
        .replace(CONTENT_MARKER, &units)
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max).collect();
    format!("{truncated}...")
}
