//! Novel HTTP Handlers

use axum::{
    extract::{Multipart, State},
    Json,
};
use std::path::Path;
use std::sync::Arc;

use crate::application::ParseNovelContent;
use crate::infrastructure::http::dto::{
    ApiResponse, ChapterResponse, ParseNovelRequest, ParseNovelResponse, UploadNovelResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// 解码上传的文本（去除 UTF-8 BOM）
fn decode_text(bytes: &[u8]) -> Result<String, ApiError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    String::from_utf8(bytes.to_vec())
        .map_err(|_| ApiError::BadRequest("File must be valid UTF-8 text".to_string()))
}

/// 文件名去掉扩展名作为标题
fn title_from_filename(filename: &str) -> Option<String> {
    Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.to_string())
}

/// 将粘贴的小说内容切分为章节
pub async fn parse_novel(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ParseNovelRequest>,
) -> Result<Json<ApiResponse<ParseNovelResponse>>, ApiError> {
    let command = ParseNovelContent {
        content: req.content,
        title: req.title,
    };

    let result = state.parse_novel_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(ParseNovelResponse {
        total_chapters: result.total_chapters,
        chapters: result.chapters.into_iter().map(ChapterResponse::from).collect(),
    })))
}

/// 上传小说 TXT/MD 文件并切分为章节
pub async fn upload_novel(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<UploadNovelResponse>>, ApiError> {
    let mut title: Option<String> = None;
    let mut content: Option<String> = None;
    let mut filename: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
    })? {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "title" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read title: {}", e)))?;
                title = Some(text).filter(|t| !t.trim().is_empty());
            }
            "file" => {
                filename = field.file_name().map(|s| s.to_string());

                // 有文件名时只看扩展名白名单，没有文件名时才看是否声明为文本类型
                let is_allowed = match filename.as_deref() {
                    Some(f) => state.upload.allows_file(f),
                    None => field
                        .content_type()
                        .map(|ct| ct.starts_with("text/"))
                        .unwrap_or(false),
                };

                if !is_allowed {
                    return Err(ApiError::BadRequest(format!(
                        "Only {} files are allowed",
                        state.upload.allowed_extensions.join("/")
                    )));
                }

                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?;

                let max_size = state.upload.max_size();
                if bytes.len() > max_size {
                    return Err(ApiError::BadRequest(format!(
                        "File too large. Maximum size is {} bytes",
                        max_size
                    )));
                }

                content = Some(decode_text(&bytes)?);
            }
            _ => {}
        }
    }

    let content = content.ok_or_else(|| ApiError::BadRequest("File is required".to_string()))?;
    let title = title.or_else(|| filename.as_deref().and_then(title_from_filename));

    tracing::info!(
        filename = ?filename,
        title = ?title,
        bytes = content.len(),
        "Novel file uploaded"
    );

    let command = ParseNovelContent {
        content,
        title: title.clone(),
    };
    let result = state.parse_novel_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(UploadNovelResponse {
        filename,
        title,
        total_chapters: result.total_chapters,
        chapters: result.chapters.into_iter().map(ChapterResponse::from).collect(),
    })))
}

/// 未匹配的路由
pub async fn not_found() -> ApiError {
    ApiError::NotFound("No such endpoint".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_text_strips_bom() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice("第一章".as_bytes());
        assert_eq!(decode_text(&bytes).unwrap(), "第一章");
    }

    #[test]
    fn test_decode_text_plain() {
        assert_eq!(decode_text(b"Chapter 1").unwrap(), "Chapter 1");
    }

    #[test]
    fn test_decode_text_rejects_invalid_utf8() {
        assert!(matches!(
            decode_text(&[0xFF, 0xFE, 0x00]),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn test_title_from_filename() {
        assert_eq!(title_from_filename("斗破苍穹.txt").as_deref(), Some("斗破苍穹"));
        assert_eq!(title_from_filename("a.b.md").as_deref(), Some("a.b"));
        assert_eq!(title_from_filename(""), None);
    }
}
