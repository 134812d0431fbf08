//! 动作引擎
//!
//! 把高层请求 (单键、组合键、重复、按住、文本) 翻译为有序的后端调用。
//! 所有操作都是挂起式的，同一实例上的操作严格串行 (`&mut self`)

use crate::action::Action;
use crate::backend::InputBackend;
use crate::config::{
    DEFAULT_HOLD_DURATION_MS, DEFAULT_REPEAT_INTERVAL_MS, EngineConfig, HOTKEY_PRESS_STAGGER_MS,
    HOTKEY_RELEASE_STAGGER_MS,
};
use crate::error::{KeyError, Result};
use crate::keymap::{KeyCode, KeyMap};
use crate::platform::Platform;
use itertools::Itertools;
use serde_json::Value;

/// 动作引擎
///
/// 持有一个后端与一份配置。丢弃前必须调用 `cleanup`，否则修饰键可能在系统层面保持按下
#[derive(Debug)]
pub struct ActionEngine<B> {
    backend: B,
    keymap: &'static KeyMap,
    config: EngineConfig,
}

impl<B: InputBackend> ActionEngine<B> {
    pub fn new(backend: B, keymap: &'static KeyMap, config: EngineConfig) -> Self {
        tracing::debug!(
            "Action engine created for {} with {:?}",
            keymap.platform(),
            config
        );
        Self {
            backend,
            keymap,
            config,
        }
    }

    /// 使用指定平台的按键表创建引擎
    pub fn for_platform(backend: B, platform: Platform, config: EngineConfig) -> Self {
        Self::new(backend, KeyMap::for_platform(platform), config)
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    pub fn keymap(&self) -> &'static KeyMap {
        self.keymap
    }

    pub fn platform(&self) -> Platform {
        self.keymap.platform()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// 按下一个键
    pub async fn key_down(&mut self, key: &str, delay: Option<u64>) -> Result<()> {
        let code = self.keymap.resolve(key)?;
        self.pre_delay(delay.unwrap_or(self.config.delay)).await;
        self.backend.key_down(code)?;
        Ok(())
    }

    /// 释放一个键
    pub async fn key_up(&mut self, key: &str, delay: Option<u64>) -> Result<()> {
        let code = self.keymap.resolve(key)?;
        self.pre_delay(delay.unwrap_or(self.config.delay)).await;
        self.backend.key_up(code)?;
        Ok(())
    }

    /// 按下并释放一个键
    ///
    /// 即使 `duration` 为 0，释放也一定在按下之后
    pub async fn press_key(
        &mut self,
        key: &str,
        duration: Option<u64>,
        delay: Option<u64>,
    ) -> Result<()> {
        let code = self.keymap.resolve(key)?;
        self.pre_delay(delay.unwrap_or(self.config.delay)).await;
        self.tap(code, duration.unwrap_or(self.config.duration)).await
    }

    /// 注入文本 (一次后端调用，不做逐字符映射)
    pub async fn type_text(&mut self, text: &str, delay: Option<u64>) -> Result<()> {
        self.pre_delay(delay.unwrap_or(self.config.delay)).await;
        self.backend.send_text(text)?;
        Ok(())
    }

    /// 依次按下并释放多个键
    ///
    /// 每个键之前的 `interval` 停顿只在 `delay > 0` 时发生
    pub async fn press_keys<S: AsRef<str>>(
        &mut self,
        keys: &[S],
        interval: Option<u64>,
        delay: Option<u64>,
    ) -> Result<()> {
        let codes = self.keymap.resolve_all(keys)?;
        let interval = interval.unwrap_or(self.config.interval);
        let delay = delay.unwrap_or(self.config.delay);

        self.pre_delay(delay).await;
        for code in codes {
            if delay > 0 {
                self.backend.sleep(interval).await;
            }
            self.tap(code, self.config.duration).await?;
        }
        Ok(())
    }

    /// 组合键
    ///
    /// 按顺序按下 (间隔 5ms)，按住 `duration`，再逆序释放 (间隔 2ms)
    pub async fn press_hotkey<S: AsRef<str>>(
        &mut self,
        keys: &[S],
        duration: Option<u64>,
        delay: Option<u64>,
    ) -> Result<()> {
        if keys.is_empty() {
            return Err(KeyError::EmptyHotkey.into());
        }
        let codes = self.keymap.resolve_all(keys)?;
        let duration = duration.unwrap_or(self.config.hotkey_delay);

        tracing::debug!(
            "Hotkey {} held for {}ms",
            keys.iter().map(|k| k.as_ref()).join("+"),
            duration
        );

        self.pre_delay(delay.unwrap_or(self.config.delay)).await;

        for &code in &codes {
            self.backend.key_down(code)?;
            self.backend.sleep(HOTKEY_PRESS_STAGGER_MS).await;
        }

        self.backend.sleep(duration).await;

        for &code in codes.iter().rev() {
            self.backend.key_up(code)?;
            self.backend.sleep(HOTKEY_RELEASE_STAGGER_MS).await;
        }
        Ok(())
    }

    /// 按住一个键一段时间 (默认 1000ms)
    pub async fn hold_key(
        &mut self,
        key: &str,
        duration: Option<u64>,
        delay: Option<u64>,
    ) -> Result<()> {
        let code = self.keymap.resolve(key)?;
        self.pre_delay(delay.unwrap_or(self.config.delay)).await;
        self.tap(code, duration.unwrap_or(DEFAULT_HOLD_DURATION_MS)).await
    }

    /// 重复按键 `times` 次
    ///
    /// 每次按键使用默认时长与默认延迟；重复之间停顿 `interval` (默认 50ms)，最后一次之后不停顿
    pub async fn repeat_key(
        &mut self,
        key: &str,
        times: u32,
        interval: Option<u64>,
        delay: Option<u64>,
    ) -> Result<()> {
        let code = self.keymap.resolve(key)?;
        let interval = interval.unwrap_or(DEFAULT_REPEAT_INTERVAL_MS);
        self.pre_delay(delay.unwrap_or(self.config.delay)).await;

        for i in 0..times {
            self.pre_delay(self.config.delay).await;
            self.tap(code, self.config.duration).await?;
            if i + 1 < times && interval > 0 {
                self.backend.sleep(interval).await;
            }
        }
        Ok(())
    }

    /// 等待 `interval` 毫秒 (默认使用配置的 interval)
    pub async fn wait(&mut self, interval: Option<u64>) {
        self.backend
            .sleep(interval.unwrap_or(self.config.interval))
            .await;
    }

    /// 执行单个动作
    pub async fn execute(&mut self, action: &Action) -> Result<()> {
        tracing::debug!("Executing action: {}", action);
        match action {
            Action::PressAndRelease {
                key,
                duration,
                delay,
            } => self.press_key(key, *duration, *delay).await,
            Action::Hotkey {
                keys,
                duration,
                delay,
            } => self.press_hotkey(keys, *duration, *delay).await,
            Action::TypeText { text, delay } => self.type_text(text, *delay).await,
            Action::Hold {
                key,
                duration,
                delay,
            } => self.hold_key(key, *duration, *delay).await,
            Action::Wait { interval } => {
                self.wait(*interval).await;
                Ok(())
            }
        }
    }

    /// 顺序执行动作列表，前一个完成后才开始下一个；出错即中止
    pub async fn execute_sequence(&mut self, actions: &[Action]) -> Result<()> {
        for action in actions {
            self.execute(action).await?;
        }
        Ok(())
    }

    /// 顺序执行原始记录
    ///
    /// 未知类型的记录被跳过并输出警告；已知类型但结构不符的记录中止执行
    pub async fn execute_records(&mut self, records: &[Value]) -> Result<()> {
        for (index, record) in records.iter().enumerate() {
            if let Some(action) = Action::from_record(index, record)? {
                self.execute(&action).await?;
            }
        }
        Ok(())
    }

    /// 释放所有仍被按住的键，可重复调用
    pub fn cleanup(&mut self) -> Result<()> {
        match self.backend.cleanup() {
            Ok(()) => {
                tracing::debug!("Input backend cleaned up");
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Input backend cleanup failed: {}", e);
                Err(e.into())
            }
        }
    }

    async fn pre_delay(&mut self, delay: u64) {
        if delay > 0 {
            self.backend.sleep(delay).await;
        }
    }

    async fn tap(&mut self, code: KeyCode, duration: u64) -> Result<()> {
        self.backend.key_down(code)?;
        self.backend.sleep(duration).await;
        self.backend.key_up(code)?;
        Ok(())
    }
}
