//! keypilot 应用模块
//!
//! 包含系统输入后端、配置管理、宏存储与一次性快捷操作

pub mod config;
pub mod input;
pub mod macros;
pub mod quick;
