//! Novelseg - 小说分章服务
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Novel Context: 章节实体与值对象
//! - 章节标题识别规则与分章状态机
//!
//! 应用层 (application/):
//! - Ports: 端口定义（ChapterSegmenter）
//! - Commands: 分章命令处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（分章、上传）
//! - Adapters: 启发式分章器

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
pub use domain::{segment_chapters, segment_chapters_default};
