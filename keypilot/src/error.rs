//! keypilot 错误类型定义
//!
//! 核心引擎错误来自 keypilot-core，这里补充配置、宏存储错误并统一为 `AppError`

use keypilot_core::error::{EngineError, InputError, KeyError, MacroError, PlatformError};
use thiserror::Error;

/// 应用统一错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 引擎相关错误
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// 配置相关错误
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// 宏存储相关错误
    #[error(transparent)]
    Store(#[from] StoreError),

    /// 内部错误
    #[error("Internal error: {0}")]
    Internal(String),
}

/// 错误代码（用于 CLI 输出与退出码）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // 平台错误 1xxx
    UnsupportedPlatform,
    BackendUnavailable,

    // 引擎错误 2xxx
    InvalidKey,
    InvalidMacro,
    InjectionFailed,

    // 配置错误 3xxx
    ConfigLoadFailed,
    ConfigSaveFailed,

    // 宏存储错误 4xxx
    MacroNotFound,
    MacroStoreFailed,

    Internal,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::UnsupportedPlatform => write!(f, "UNSUPPORTED_PLATFORM"),
            ErrorCode::BackendUnavailable => write!(f, "BACKEND_UNAVAILABLE"),
            ErrorCode::InvalidKey => write!(f, "INVALID_KEY"),
            ErrorCode::InvalidMacro => write!(f, "INVALID_MACRO"),
            ErrorCode::InjectionFailed => write!(f, "INJECTION_FAILED"),
            ErrorCode::ConfigLoadFailed => write!(f, "CONFIG_LOAD_FAILED"),
            ErrorCode::ConfigSaveFailed => write!(f, "CONFIG_SAVE_FAILED"),
            ErrorCode::MacroNotFound => write!(f, "MACRO_NOT_FOUND"),
            ErrorCode::MacroStoreFailed => write!(f, "MACRO_STORE_FAILED"),
            ErrorCode::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// 配置相关错误
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("Failed to save configuration: {0}")]
    SaveFailed(String),
}

/// 宏存储相关错误
#[derive(Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Macro not found: {0}")]
    NotFound(String),

    #[error("Invalid macro name: {0:?}")]
    InvalidName(String),

    #[error("Failed to read macro: {0}")]
    ReadFailed(String),

    #[error("Failed to write macro: {0}")]
    WriteFailed(String),
}

macro_rules! from_engine_error {
    ($($error:ty),*) => {
        $(
            impl From<$error> for AppError {
                fn from(e: $error) -> Self {
                    AppError::Engine(e.into())
                }
            }
        )*
    };
}

from_engine_error!(PlatformError, KeyError, MacroError, InputError);

impl AppError {
    /// 获取对应的错误代码
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Engine(e) => match e {
                EngineError::Platform(PlatformError::Unsupported { .. }) => {
                    ErrorCode::UnsupportedPlatform
                }
                EngineError::Platform(PlatformError::BackendUnavailable(_)) => {
                    ErrorCode::BackendUnavailable
                }
                EngineError::InvalidKey(_) => ErrorCode::InvalidKey,
                EngineError::InvalidMacro(_) => ErrorCode::InvalidMacro,
                EngineError::Input(_) => ErrorCode::InjectionFailed,
            },
            AppError::Config(e) => match e {
                ConfigError::LoadFailed(_) => ErrorCode::ConfigLoadFailed,
                ConfigError::SaveFailed(_) => ErrorCode::ConfigSaveFailed,
            },
            AppError::Store(e) => match e {
                StoreError::NotFound(_) => ErrorCode::MacroNotFound,
                StoreError::InvalidName(_) => ErrorCode::MacroStoreFailed,
                StoreError::ReadFailed(_) => ErrorCode::MacroStoreFailed,
                StoreError::WriteFailed(_) => ErrorCode::MacroStoreFailed,
            },
            AppError::Internal(_) => ErrorCode::Internal,
        }
    }

    /// 平台错误发生在构造阶段，引擎不可用
    pub fn is_fatal(&self) -> bool {
        matches!(self, AppError::Engine(EngineError::Platform(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keypilot_core::Platform;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::UnsupportedPlatform.to_string(), "UNSUPPORTED_PLATFORM");
        assert_eq!(ErrorCode::InvalidKey.to_string(), "INVALID_KEY");
        assert_eq!(ErrorCode::MacroNotFound.to_string(), "MACRO_NOT_FOUND");
    }

    #[test]
    fn test_app_error_from_core_errors() {
        let error: AppError = KeyError::UnknownKey {
            name: "cmd".to_string(),
            platform: Platform::Linux,
        }
        .into();
        assert_eq!(error.code(), ErrorCode::InvalidKey);
        assert!(!error.is_fatal());

        let error: AppError = MacroError::Empty.into();
        assert_eq!(error.code(), ErrorCode::InvalidMacro);

        let error: AppError = InputError::InjectionFailed("denied".to_string()).into();
        assert_eq!(error.code(), ErrorCode::InjectionFailed);
    }

    #[test]
    fn test_platform_errors_are_fatal() {
        let error: AppError = PlatformError::Unsupported {
            os: "freebsd".to_string(),
            arch: "x86_64".to_string(),
        }
        .into();
        assert_eq!(error.code(), ErrorCode::UnsupportedPlatform);
        assert!(error.is_fatal());

        let error: AppError = PlatformError::BackendUnavailable("no display".to_string()).into();
        assert_eq!(error.code(), ErrorCode::BackendUnavailable);
        assert!(error.is_fatal());
    }

    #[test]
    fn test_config_and_store_error_display() {
        let error = ConfigError::LoadFailed("bad toml".to_string());
        assert!(error.to_string().contains("Failed to load configuration"));

        let error: AppError = StoreError::NotFound("login".to_string()).into();
        assert_eq!(error.to_string(), "Macro not found: login");
        assert_eq!(error.code(), ErrorCode::MacroNotFound);
    }
}
