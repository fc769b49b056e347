//! Novel Context - Entities

use serde::Serialize;

use super::ChapterNumber;

/// 章节
///
/// 不变量:
/// - number 在一次分章结果中从 1 开始连续递增
/// - title 为触发分章的整行（已去除首尾空白），或回退标题
/// - content 总是存在，空章节为空字符串
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chapter {
    /// 章节序号（阅读顺序）
    number: ChapterNumber,
    /// 章节标题
    title: String,
    /// 章节正文（保留原始换行）
    content: String,
}

impl Chapter {
    pub fn new(number: ChapterNumber, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn number(&self) -> ChapterNumber {
        self.number
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// 拆解为 (序号, 标题, 正文)
    pub fn into_parts(self) -> (ChapterNumber, String, String) {
        (self.number, self.title, self.content)
    }
}
