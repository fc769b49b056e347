//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::novel::Chapter;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Novel DTOs
// ============================================================================

/// 分章请求
#[derive(Debug, Deserialize)]
pub struct ParseNovelRequest {
    /// 缺省时按空内容处理，由命令层给出校验错误
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChapterResponse {
    pub number: usize,
    pub title: String,
    pub content: String,
}

impl From<Chapter> for ChapterResponse {
    fn from(chapter: Chapter) -> Self {
        let (number, title, content) = chapter.into_parts();
        Self {
            number: number.get(),
            title,
            content,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ParseNovelResponse {
    pub chapters: Vec<ChapterResponse>,
    pub total_chapters: usize,
}

/// 上传响应
#[derive(Debug, Serialize)]
pub struct UploadNovelResponse {
    pub filename: Option<String>,
    pub title: Option<String>,
    pub chapters: Vec<ChapterResponse>,
    pub total_chapters: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::novel::ChapterNumber;

    #[test]
    fn test_parse_request_defaults() {
        let req: ParseNovelRequest = serde_json::from_str("{}").unwrap();
        assert!(req.content.is_empty());
        assert!(req.title.is_none());
    }

    #[test]
    fn test_chapter_response_from_chapter() {
        let chapter = Chapter::new(ChapterNumber::FIRST.next(), "第二章", "正文\n");
        let dto = ChapterResponse::from(chapter);

        assert_eq!(dto.number, 2);
        assert_eq!(dto.title, "第二章");
        assert_eq!(dto.content, "正文\n");
    }

    #[test]
    fn test_success_envelope() {
        let value = serde_json::to_value(ApiResponse::success(1)).unwrap();
        assert_eq!(value, serde_json::json!({ "errno": 0, "error": "", "data": 1 }));
    }
}
