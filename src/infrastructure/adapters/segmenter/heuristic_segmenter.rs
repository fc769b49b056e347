//! Heuristic Chapter Segmenter
//!
//! 使用领域层的标题识别规则实现分章端口

use crate::application::ports::ChapterSegmenterPort;
use crate::domain::novel::Chapter;
use crate::domain::segment_chapters;

/// 基于标题行启发式规则的分章器
///
/// 无状态，可在多个请求间共享
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicChapterSegmenter;

impl HeuristicChapterSegmenter {
    pub fn new() -> Self {
        Self
    }
}

impl ChapterSegmenterPort for HeuristicChapterSegmenter {
    fn segment(&self, text: &str, fallback_title: Option<&str>) -> Vec<Chapter> {
        let chapters = segment_chapters(text, fallback_title);

        tracing::debug!(
            input_bytes = text.len(),
            chapters = chapters.len(),
            first_title = chapters.first().map(Chapter::title).unwrap_or_default(),
            "Text segmented into chapters"
        );

        chapters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_segment_through_port() {
        let segmenter: Arc<dyn ChapterSegmenterPort> = Arc::new(HeuristicChapterSegmenter::new());
        let chapters = segmenter.segment("Chapter 1\nabc\nChapter 2\ndef", None);

        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[1].number().get(), 2);
        assert_eq!(chapters[1].title(), "Chapter 2");
    }

    #[test]
    fn test_fallback_through_port() {
        let segmenter = HeuristicChapterSegmenter;
        let chapters = segmenter.segment("plain", Some("My Novel"));

        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title(), "My Novel");
        assert_eq!(chapters[0].content(), "plain");
    }
}
