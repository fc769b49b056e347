//! Chapter Segmenter Port - 分章抽象
//!
//! 定义分章的抽象接口，具体实现在 infrastructure/adapters 层

use crate::domain::novel::Chapter;

/// Chapter Segmenter Port
///
/// 分章器接口：原始文本进，有序章节出。实现必须对任意输入返回至少一个章节。
pub trait ChapterSegmenterPort: Send + Sync {
    /// 将文本切分为章节
    ///
    /// `fallback_title` 仅在没有识别到任何章节标题时作为唯一章节的标题
    fn segment(&self, text: &str, fallback_title: Option<&str>) -> Vec<Chapter>;
}
