//! 输入模块
//!
//! 提供基于 enigo 的系统键盘后端

pub mod keyboard;

pub use keyboard::EnigoBackend;
