//! Novel Context - 小说限界上下文
//!
//! 职责:
//! - 章节实体
//! - 章节序号与回退标题

mod entities;
mod value_objects;

pub use entities::Chapter;
pub use value_objects::{resolve_fallback_title, ChapterNumber, DEFAULT_FALLBACK_TITLE};
