//! Novel Context - Value Objects

use serde::Serialize;
use std::num::NonZeroUsize;

/// 章节未识别到任何标题时使用的默认回退标题
pub const DEFAULT_FALLBACK_TITLE: &str = "第一章";

/// 章节序号
///
/// 不变量:
/// - 从 1 开始
/// - 表示阅读顺序，与标题中出现的数字无关
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ChapterNumber(NonZeroUsize);

impl ChapterNumber {
    /// 第一章
    pub const FIRST: Self = Self(NonZeroUsize::MIN);

    /// 下一章序号
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for ChapterNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl std::fmt::Display for ChapterNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 解析调用方给出的回退标题
///
/// 空白标题视为未提供
pub fn resolve_fallback_title(title: Option<&str>) -> &str {
    title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(DEFAULT_FALLBACK_TITLE)
}
