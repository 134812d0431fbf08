//! keypilot-core 错误类型定义
//!
//! 按领域划分错误类型，使用 thiserror 自动派生 Error trait

use crate::platform::Platform;
use thiserror::Error;

/// 引擎统一错误类型
#[derive(Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// 平台相关错误
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// 按键解析错误
    #[error(transparent)]
    InvalidKey(#[from] KeyError),

    /// 宏记录错误
    #[error(transparent)]
    InvalidMacro(#[from] MacroError),

    /// 后端输入错误
    #[error(transparent)]
    Input(#[from] InputError),
}

/// 平台相关错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("Platform {os}/{arch} is not supported")]
    Unsupported { os: String, arch: String },

    #[error("Input backend unavailable: {0}")]
    BackendUnavailable(String),
}

/// 按键解析错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("Unsupported key: {name} (platform: {platform})")]
    UnknownKey { name: String, platform: Platform },

    #[error("Hotkey requires at least one key")]
    EmptyHotkey,
}

/// 宏记录错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MacroError {
    #[error("Macro records must be a list of action objects")]
    NotAList,

    #[error("Macro records must not be empty")]
    Empty,

    #[error("Malformed action record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },
}

/// 后端输入错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Injection failed: {0}")]
    InjectionFailed(String),

    #[error("Key code resolved for {expected} cannot be sent on {actual}")]
    PlatformMismatch {
        expected: Platform,
        actual: Platform,
    },
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;
