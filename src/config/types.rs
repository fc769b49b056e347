//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::domain::novel::DEFAULT_FALLBACK_TITLE;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 上传配置
    #[serde(default)]
    pub upload: UploadConfig,

    /// 分章配置
    #[serde(default)]
    pub segmenter: SegmenterConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5060
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// 上传配置
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// 请求体/上传文件最大大小（字节），默认 50MB
    #[serde(default = "default_max_size_bytes")]
    pub max_size_bytes: u64,

    /// 允许上传的文件扩展名（不含点，小写）
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

fn default_max_size_bytes() -> u64 {
    50 * 1024 * 1024 // 50 MB
}

fn default_allowed_extensions() -> Vec<String> {
    vec!["txt".to_string(), "md".to_string()]
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_size_bytes: default_max_size_bytes(),
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

impl UploadConfig {
    /// 判断文件名的扩展名是否允许上传（不区分大小写）
    pub fn allows_file(&self, filename: &str) -> bool {
        std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.allowed_extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }

    /// 上传大小上限（usize，超出平台范围时取 usize::MAX）
    pub fn max_size(&self) -> usize {
        usize::try_from(self.max_size_bytes).unwrap_or(usize::MAX)
    }
}

/// 分章配置
#[derive(Debug, Clone, Deserialize)]
pub struct SegmenterConfig {
    /// 未识别到章节标题且请求未提供标题时的回退章节标题
    #[serde(default = "default_title")]
    pub default_title: String,
}

fn default_title() -> String {
    DEFAULT_FALLBACK_TITLE.to_string()
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            default_title: default_title(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
