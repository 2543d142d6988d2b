use crate::models::{Category, NewsItem};

/// Format a newslist as the plain-text digest: a header line followed by one
/// numbered title-and-link entry per item.
pub fn format_text_digest(category: Category, items: &[NewsItem]) -> String {
    let mut content = format!("📢 最新{}资讯如下：\n", category.display_name());

    for (index, item) in items.iter().enumerate() {
        let title = single_line_or(&item.title, "未知标题");
        let url = single_line_or(&item.url, "未知链接");
        content.push_str(&format!("No.{}《{}》\n🔗{}\n", index + 1, title, url));
    }

    content
}

fn single_line_or(text: &str, fallback: &str) -> String {
    if text.is_empty() {
        fallback.to_string()
    } else {
        text.replace('\n', "")
    }
}
