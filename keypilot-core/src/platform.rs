//! 平台识别
//!
//! 在启动时确定一次宿主平台，之后作为显式参数传入引擎

use crate::error::PlatformError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 支持的宿主平台，互斥
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    #[serde(rename = "macos")]
    MacOs,
    Linux,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::MacOs, Platform::Linux];

    /// 检测当前进程所在平台
    pub fn current() -> Result<Self, PlatformError> {
        Self::detect(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// 根据 OS/架构标识选择平台
    pub fn detect(os: &str, arch: &str) -> Result<Self, PlatformError> {
        match os {
            "windows" | "win32" => Ok(Platform::Windows),
            "macos" | "darwin" => Ok(Platform::MacOs),
            "linux" => Ok(Platform::Linux),
            _ => Err(PlatformError::Unsupported {
                os: os.to_string(),
                arch: arch.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Linux => "linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::detect(&s.to_lowercase(), std::env::consts::ARCH)
    }
}

/// 平台身份 (OS + 架构)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformInfo {
    pub platform: Platform,
    pub arch: String,
}

impl PlatformInfo {
    pub fn current() -> Result<Self, PlatformError> {
        Ok(Self {
            platform: Platform::current()?,
            arch: std::env::consts::ARCH.to_string(),
        })
    }
}

impl fmt::Display for PlatformInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.platform, self.arch)
    }
}
