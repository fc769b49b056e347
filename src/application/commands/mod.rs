//! 应用层 - 命令
//!
//! 处理分章等用例

mod novel_commands;

pub mod handlers;

pub use novel_commands::*;
