//! Domain Layer - 领域层
//!
//! 包含:
//! - Novel Context: 章节实体与值对象
//! - 章节标题识别规则与分章状态机

pub mod novel;

mod chapter_boundary;
mod chapter_segmenter;

pub use chapter_boundary::{
    detect_boundary, match_english_heading, match_numbered_heading, match_numbered_suffix,
    BoundaryKind, BoundaryMatch,
};
pub use chapter_segmenter::{segment_chapters, segment_chapters_default};
