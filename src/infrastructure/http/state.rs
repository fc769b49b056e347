//! Application State

use std::sync::Arc;

use crate::application::{ChapterSegmenterPort, ParseNovelContentHandler};
use crate::config::{SegmenterConfig, UploadConfig};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub parse_novel_handler: ParseNovelContentHandler,

    // ========== Settings ==========
    pub upload: UploadConfig,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        segmenter: Arc<dyn ChapterSegmenterPort>,
        segmenter_config: &SegmenterConfig,
        upload: UploadConfig,
    ) -> Self {
        Self {
            parse_novel_handler: ParseNovelContentHandler::new(
                segmenter,
                segmenter_config.default_title.clone(),
            ),
            upload,
        }
    }
}
