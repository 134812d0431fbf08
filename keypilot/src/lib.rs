//! keypilot 应用库
//!
//! 在 keypilot-core 之上提供 enigo 输入后端、配置文件、宏存储、快捷操作与 CLI

pub mod commands;
pub mod error;
pub mod modules;

use keypilot_core::{ActionEngine, EngineConfig, Macro, Platform};
use modules::input::EnigoBackend;
use tracing_subscriber::EnvFilter;

pub use error::{AppError, ConfigError, ErrorCode, StoreError};
pub use keypilot_core::{
    Action, EngineError, InputBackend, InputEvent, KeyCode, KeyMap, PlatformInfo,
    RecordingBackend,
};
pub use modules::config::{ConfigManager, UserConfig};
pub use modules::macros::{MacroDocument, MacroStore};
pub use modules::quick;

pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// 初始化日志
///
/// `RUST_LOG` 优先；未设置时 `verbose` 为 true 使用 debug，否则 info
pub fn init_app(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// 为当前平台创建引擎，未提供配置时使用默认时序
pub fn create_engine(config: Option<EngineConfig>) -> Result<ActionEngine<EnigoBackend>, AppError> {
    let platform = Platform::current()?;
    let backend = EnigoBackend::new(platform)?;
    Ok(ActionEngine::for_platform(
        backend,
        platform,
        config.unwrap_or_default(),
    ))
}

/// 创建空宏
pub fn create_macro() -> Macro {
    Macro::new()
}

/// 检查当前平台能否注入输入
///
/// 创建一个引擎并立即清理丢弃；平台不受支持或后端不可用时返回错误
pub fn initialize() -> Result<bool, AppError> {
    let info = PlatformInfo::current()?;
    let mut engine = create_engine(None)?;
    engine.cleanup()?;
    tracing::info!("{} {} ready on {}", APP_NAME, APP_VERSION, info);
    Ok(true)
}
