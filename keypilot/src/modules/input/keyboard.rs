//! 键盘模拟后端
//!
//! 使用 enigo 库把引擎解析出的原生键码注入系统

use enigo::{Direction, Enigo, Key, Keyboard, Settings};
use keypilot_core::backend::InputBackend;
use keypilot_core::error::{InputError, PlatformError};
use keypilot_core::keymap::{KeyCode, KeyMap};
use keypilot_core::platform::Platform;

/// enigo 后端
///
/// Windows 键码按 virtual-key 发送，macOS/Linux 键码按 raw keycode 发送。
/// `cleanup` 先逆序释放本实例按住的键，再释放本平台所有修饰键
#[derive(Debug)]
pub struct EnigoBackend {
    /// enigo 实例
    enigo: Enigo,
    /// 键码所属平台
    platform: Platform,
    /// 仍被按住的键 (按下顺序)
    held: Vec<KeyCode>,
    /// 本平台修饰键
    modifiers: Vec<KeyCode>,
}

// 引擎独占后端，同一时刻只会有一个线程访问 enigo 实例
unsafe impl Send for EnigoBackend {}

impl EnigoBackend {
    /// 创建后端
    ///
    /// 无法连接系统输入子系统时返回 `BackendUnavailable`
    pub fn new(platform: Platform) -> Result<Self, PlatformError> {
        let settings = Settings {
            release_keys_when_dropped: true,
            ..Default::default()
        };
        let enigo = Enigo::new(&settings).map_err(|e| {
            tracing::warn!("Failed to create Enigo instance: {:?}", e);
            PlatformError::BackendUnavailable(e.to_string())
        })?;
        tracing::info!("Keyboard backend initialized for {}", platform);

        Ok(Self {
            enigo,
            platform,
            held: Vec::new(),
            modifiers: KeyMap::for_platform(platform).modifiers(),
        })
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// 当前仍被按住的键
    pub fn held(&self) -> &[KeyCode] {
        &self.held
    }

    fn send(&mut self, code: KeyCode, direction: Direction) -> Result<(), InputError> {
        if code.platform() != self.platform {
            return Err(InputError::PlatformMismatch {
                expected: code.platform(),
                actual: self.platform,
            });
        }

        let result = match self.platform {
            Platform::Windows => self.enigo.key(Key::Other(code.value()), direction),
            Platform::MacOs | Platform::Linux => self.enigo.raw(raw_code(code)?, direction),
        };
        result.map_err(|e| InputError::InjectionFailed(format!("{} {:?}: {}", code, direction, e)))
    }
}

impl InputBackend for EnigoBackend {
    fn key_down(&mut self, code: KeyCode) -> Result<(), InputError> {
        self.send(code, Direction::Press)?;
        self.held.push(code);
        Ok(())
    }

    fn key_up(&mut self, code: KeyCode) -> Result<(), InputError> {
        self.send(code, Direction::Release)?;
        self.held.retain(|held| *held != code);
        Ok(())
    }

    fn send_text(&mut self, text: &str) -> Result<(), InputError> {
        self.enigo
            .text(text)
            .map_err(|e| InputError::InjectionFailed(format!("Failed to type text: {}", e)))
    }

    fn cleanup(&mut self) -> Result<(), InputError> {
        let held = std::mem::take(&mut self.held);
        let mut first_error = None;
        for code in release_order(&held, &self.modifiers) {
            if let Err(e) = self.send(code, Direction::Release) {
                tracing::warn!("Failed to release {}: {}", code, e);
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// macOS/Linux 原始键码 (Linux 为 X11 keycode)
fn raw_code(code: KeyCode) -> Result<u16, InputError> {
    u16::try_from(code.value())
        .map_err(|_| InputError::InjectionFailed(format!("key code {} out of range", code)))
}

/// 释放顺序：先逆序释放按住的键，再释放其余修饰键
fn release_order(held: &[KeyCode], modifiers: &[KeyCode]) -> Vec<KeyCode> {
    let mut order: Vec<KeyCode> = held.iter().rev().copied().collect();
    for code in modifiers {
        if !order.contains(code) {
            order.push(*code);
        }
    }
    order
}
