//! Novel Command Handlers

use std::sync::Arc;

use crate::application::commands::ParseNovelContent;
use crate::application::error::ApplicationError;
use crate::application::ports::ChapterSegmenterPort;
use crate::domain::novel::Chapter;

// ============================================================================
// ParseNovelContent
// ============================================================================

/// 分章响应
#[derive(Debug, Clone)]
pub struct ParseNovelResponse {
    pub chapters: Vec<Chapter>,
    pub total_chapters: usize,
}

/// ParseNovelContent Handler - 将文本切分为章节
pub struct ParseNovelContentHandler {
    segmenter: Arc<dyn ChapterSegmenterPort>,
    /// 请求未提供标题时使用的回退标题
    default_title: String,
}

impl ParseNovelContentHandler {
    pub fn new(segmenter: Arc<dyn ChapterSegmenterPort>, default_title: impl Into<String>) -> Self {
        Self {
            segmenter,
            default_title: default_title.into(),
        }
    }

    pub async fn handle(
        &self,
        command: ParseNovelContent,
    ) -> Result<ParseNovelResponse, ApplicationError> {
        if command.content.is_empty() {
            return Err(ApplicationError::validation("内容不能为空"));
        }

        let fallback_title = command
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| self.default_title.clone());
        let content_bytes = command.content.len();

        // 大文本的分章是纯 CPU 计算，放到阻塞线程池中执行
        let segmenter = self.segmenter.clone();
        let content = command.content;
        let title = fallback_title.clone();
        let chapters = tokio::task::spawn_blocking(move || {
            segmenter.segment(&content, Some(title.as_str()))
        })
        .await?;

        let total_chapters = chapters.len();

        tracing::info!(
            title = %fallback_title,
            content_bytes = content_bytes,
            total_chapters = total_chapters,
            "Novel content parsed"
        );

        Ok(ParseNovelResponse {
            chapters,
            total_chapters,
        })
    }
}
