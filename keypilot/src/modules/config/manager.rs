//! 配置管理器

use crate::error::ConfigError;
use arc_swap::ArcSwap;
use keypilot_core::config::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const APP_DIR: &str = "keypilot";
const CONFIG_FILE: &str = "config.toml";
const MACROS_DIR: &str = "macros";

/// 用户配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UserConfig {
    /// 宏存储目录，未设置时使用配置目录下的 `macros`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macros_dir: Option<PathBuf>,
    /// 引擎默认时序
    pub engine: EngineConfig,
}

/// 配置管理器
#[derive(Debug)]
pub struct ConfigManager {
    config: ArcSwap<UserConfig>,
    config_dir: PathBuf,
    config_path: PathBuf,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new(Self::default_dir())
    }
}

impl ConfigManager {
    pub fn new(config_dir: PathBuf) -> Self {
        let config_path = config_dir.join(CONFIG_FILE);
        let config = ArcSwap::new(Arc::new(UserConfig::default()));
        Self {
            config,
            config_dir,
            config_path,
        }
    }

    /// 默认配置目录
    pub fn default_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// 读取配置文件；文件不存在时使用默认配置
    pub fn load(&self) -> Result<UserConfig, ConfigError> {
        if !self.config_path.exists() {
            tracing::debug!("No config at {}, using defaults", self.config_path.display());
            return Ok(UserConfig::default());
        }
        let content = std::fs::read_to_string(&self.config_path)
            .map_err(|e| ConfigError::LoadFailed(e.to_string()))?;
        let config: UserConfig =
            toml::from_str(&content).map_err(|e| ConfigError::LoadFailed(e.to_string()))?;
        self.config.store(Arc::new(config.clone()));
        Ok(config)
    }

    pub fn save(&self, config: &UserConfig) -> Result<(), ConfigError> {
        let content =
            toml::to_string(config).map_err(|e| ConfigError::SaveFailed(e.to_string()))?;
        std::fs::create_dir_all(&self.config_dir)
            .map_err(|e| ConfigError::SaveFailed(e.to_string()))?;
        std::fs::write(&self.config_path, content)
            .map_err(|e| ConfigError::SaveFailed(e.to_string()))?;
        self.config.store(Arc::new(config.clone()));
        tracing::info!("Configuration saved to {}", self.config_path.display());
        Ok(())
    }

    pub fn current(&self) -> Arc<UserConfig> {
        self.config.load_full()
    }

    pub fn update<F>(&self, f: F) -> Result<(), ConfigError>
    where
        F: FnOnce(&mut UserConfig),
    {
        let mut config = (*self.current()).clone();
        f(&mut config);
        self.save(&config)
    }

    /// 当前生效的宏存储目录
    pub fn macros_dir(&self) -> PathBuf {
        self.current()
            .macros_dir
            .clone()
            .unwrap_or_else(|| self.config_dir.join(MACROS_DIR))
    }
}
