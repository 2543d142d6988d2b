use crate::models::Category;

pub mod digest;

/// How a digest is delivered back to the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Image,
}

/// A recognized news command: one of six fixed literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub category: Category,
    pub format: OutputFormat,
}

impl Command {
    /// Parse a message body into a command. Anything that is not exactly one
    /// of the six literals (modulo surrounding whitespace) is not a command.
    pub fn parse(input: &str) -> Option<Self> {
        let (category, format) = match input.trim() {
            "AI简讯" => (Category::Ai, OutputFormat::Text),
            "AI快讯" => (Category::Ai, OutputFormat::Image),
            "动漫简讯" => (Category::Anime, OutputFormat::Text),
            "动漫快讯" => (Category::Anime, OutputFormat::Image),
            "电竞简讯" => (Category::Esports, OutputFormat::Text),
            "电竞快讯" => (Category::Esports, OutputFormat::Image),
            _ => return None,
        };
        Some(Command { category, format })
    }

    /// Text digests carry 10 items, image digests 6.
    pub fn item_count(self) -> usize {
        match self.format {
            OutputFormat::Text => 10,
            OutputFormat::Image => 6,
        }
    }
}

pub fn help_text() -> &'static str {
    "新闻资讯获取助手\n\
     指令：\n\
     1. 发送\"AI简讯\"：获取文字版AI资讯，包含标题和原文链接\n\
     2. 发送\"AI快讯\"：获取图片版AI资讯，包含标题、简介和发布时间\n\
     3. 发送\"动漫简讯\"：获取文字版动漫资讯，包含标题和原文链接\n\
     4. 发送\"动漫快讯\"：获取图片版动漫资讯，包含标题、简介和发布时间\n\
     5. 发送\"电竞简讯\"：获取文字版电竞资讯，包含标题和原文链接\n\
     6. 发送\"电竞快讯\"：获取图片版电竞资讯，包含标题、简介和发布时间"
}
