//! `keypilot-core`：键盘输入模拟的纯逻辑层，不直接访问操作系统。
//!
//! 分层：
//! - **keymap**：按键名称 -> 平台原生键码
//! - **engine**：把动作翻译为有序、带时序的后端调用
//! - **sequencer**：可构建、可序列化的宏
//! - **backend**：后端能力抽象，真实实现由上层提供

pub mod action;
pub mod backend;
pub mod config;
pub mod engine;
pub mod error;
pub mod keymap;
pub mod platform;
pub mod sequencer;
pub mod shortcuts;

pub use action::Action;
pub use backend::{InputBackend, InputEvent, RecordedEvent, RecordingBackend};
pub use config::EngineConfig;
pub use engine::ActionEngine;
pub use error::{EngineError, InputError, KeyError, MacroError, PlatformError};
pub use keymap::{KeyCode, KeyMap};
pub use platform::{Platform, PlatformInfo};
pub use sequencer::Macro;
