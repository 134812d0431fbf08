//! 引擎默认时序配置

use serde::{Deserialize, Serialize};

/// `hold_key` 的默认按住时长 (毫秒)
pub const DEFAULT_HOLD_DURATION_MS: u64 = 1000;
/// `repeat_key` 的默认重复间隔 (毫秒)
pub const DEFAULT_REPEAT_INTERVAL_MS: u64 = 50;
/// 组合键各键按下之间的间隔 (毫秒)
pub const HOTKEY_PRESS_STAGGER_MS: u64 = 5;
/// 组合键各键释放之间的间隔 (毫秒)
pub const HOTKEY_RELEASE_STAGGER_MS: u64 = 2;

/// 引擎配置
///
/// 构造后不可变；动作省略时序字段时使用这里的值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// 动作前延迟 (毫秒)
    pub delay: u64,
    /// 按键序列/等待的间隔 (毫秒)
    pub interval: u64,
    /// 单键按住时长 (毫秒)
    pub duration: u64,
    /// 组合键按住时长 (毫秒)
    pub hotkey_delay: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            delay: 0,
            interval: 700,
            duration: 700,
            hotkey_delay: 1500,
        }
    }
}

impl EngineConfig {
    pub fn new(delay: u64, interval: u64, duration: u64, hotkey_delay: u64) -> Self {
        Self {
            delay,
            interval,
            duration,
            hotkey_delay,
        }
    }

    pub fn with_delay(mut self, delay: u64) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_interval(mut self, interval: u64) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_duration(mut self, duration: u64) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_hotkey_delay(mut self, hotkey_delay: u64) -> Self {
        self.hotkey_delay = hotkey_delay;
        self
    }
}
