use newsreport_bot::models::{Category, NewsItem};
use newsreport_bot::service::render::{build_digest_html, format_text_digest};

fn item(title: &str, url: &str, pic_url: Option<&str>) -> NewsItem {
    NewsItem {
        title: title.to_string(),
        url: url.to_string(),
        description: Some("一条简介".to_string()),
        ctime: Some("2026-08-07 09:00".to_string()),
        pic_url: pic_url.map(|u| u.to_string()),
    }
}

const TEMPLATE: &str = "<h1>今日快讯</h1>\n<span><!-- DATE --></span>\n<!-- NEWS_CONTENT -->";

#[test]
fn text_digest_has_one_entry_per_item() {
    let items: Vec<_> = (1..=10)
        .map(|i| item(&format!("标题{i}"), &format!("https://example.com/{i}"), None))
        .collect();

    let digest = format_text_digest(Category::Ai, &items);

    assert!(digest.starts_with("📢 最新AI资讯如下：\n"));
    assert_eq!(digest.matches("No.").count(), 10);
    assert_eq!(digest.matches("🔗").count(), 10);
    assert!(digest.contains("No.1《标题1》\n🔗https://example.com/1\n"));
    assert!(digest.contains("No.10《标题10》\n🔗https://example.com/10\n"));
}

#[test]
fn text_digest_uses_category_display_name() {
    let items = vec![item("标题", "https://example.com", None)];
    assert!(format_text_digest(Category::Anime, &items).contains("最新动漫资讯"));
    assert!(format_text_digest(Category::Esports, &items).contains("最新电竞资讯"));
}

#[test]
fn text_digest_strips_newlines_and_fills_placeholders() {
    let items = vec![
        item("换行\n标题", "https://example.com/a\nb", None),
        item("", "", None),
    ];

    let digest = format_text_digest(Category::Ai, &items);

    assert!(digest.contains("No.1《换行标题》\n🔗https://example.com/ab\n"));
    assert!(digest.contains("No.2《未知标题》\n🔗未知链接\n"));
}

#[test]
fn html_digest_renders_only_items_with_images() {
    let items = vec![
        item("有图", "https://example.com/1", Some("https://img.example.com/1.jpg")),
        item("无图", "https://example.com/2", None),
        item("空图", "https://example.com/3", Some("")),
    ];

    let html = build_digest_html(TEMPLATE, Category::Ai, &items, "2026年8月7日");

    assert_eq!(html.matches("news-unit").count(), 1);
    assert!(html.contains("有图"));
    assert!(!html.contains("无图"));
    assert!(!html.contains("<!-- NEWS_CONTENT -->"));
}

#[test]
fn html_digest_swaps_heading_and_date() {
    let items = vec![item("标题", "https://example.com", Some("https://img.example.com/p.jpg"))];

    let html = build_digest_html(TEMPLATE, Category::Esports, &items, "2026年8月7日");

    assert!(html.contains("<h1>今日电竞快讯</h1>"));
    assert!(html.contains("2026年8月7日"));
    assert!(!html.contains("<!-- DATE -->"));
}

#[test]
fn html_digest_escapes_injected_fields() {
    let mut news = item(
        "<script>alert(1)</script>",
        "https://example.com",
        Some("https://img.example.com/p.jpg\" onerror=\"x"),
    );
    news.description = Some("a & b < c".to_string());

    let html = build_digest_html(TEMPLATE, Category::Ai, &[news], "2026年8月7日");

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("a &amp; b &lt; c"));
    // The quote in the image url must not break out of the src attribute.
    assert!(!html.contains(r#".jpg" onerror"#));
    assert!(html.contains("&quot; onerror=&quot;x"));
}

#[test]
fn html_digest_truncates_long_descriptions() {
    let mut news = item("标题", "https://example.com", Some("https://img.example.com/p.jpg"));
    news.description = Some("长".repeat(150));

    let html = build_digest_html(TEMPLATE, Category::Ai, &[news], "2026年8月7日");

    let expected = format!("{}...", "长".repeat(100));
    assert!(html.contains(&expected));
    assert!(!html.contains(&"长".repeat(101)));
}

#[test]
fn html_digest_fills_missing_fields() {
    let news = NewsItem {
        title: String::new(),
        url: "https://example.com".to_string(),
        description: None,
        ctime: None,
        pic_url: Some("https://img.example.com/p.jpg".to_string()),
    };

    let html = build_digest_html(TEMPLATE, Category::Ai, &[news], "2026年8月7日");

    assert!(html.contains("未知标题"));
    assert!(html.contains("无描述"));
    assert!(html.contains("未知时间"));
}
