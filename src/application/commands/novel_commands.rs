//! Novel Commands

/// 解析小说内容为章节命令
#[derive(Debug, Clone)]
pub struct ParseNovelContent {
    /// 完整文本
    pub content: String,
    /// 可选标题，未识别到章节时作为回退章节标题
    pub title: Option<String>,
}
