//! 输入后端抽象
//!
//! 引擎只通过 `InputBackend` 产生物理效果；真实平台实现位于应用层，
//! 这里另外提供一个只记录调用的 `RecordingBackend`

use crate::error::InputError;
use crate::keymap::KeyCode;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// 输入后端能力
pub trait InputBackend: Send {
    /// 按下一个键
    fn key_down(&mut self, code: KeyCode) -> Result<(), InputError>;

    /// 释放一个键
    fn key_up(&mut self, code: KeyCode) -> Result<(), InputError>;

    /// 注入一段文本，Unicode 处理由后端负责
    fn send_text(&mut self, text: &str) -> Result<(), InputError>;

    /// 挂起调用方，不阻塞运行时上的其他任务
    fn sleep(&mut self, ms: u64) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(Duration::from_millis(ms))
    }

    /// 释放所有仍被按住的键，可重复调用
    fn cleanup(&mut self) -> Result<(), InputError>;
}

/// 后端调用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    Text(String),
    Sleep(u64),
    Cleanup,
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputEvent::KeyDown(code) => write!(f, "down  {}", code),
            InputEvent::KeyUp(code) => write!(f, "up    {}", code),
            InputEvent::Text(text) => write!(f, "text  {:?}", text),
            InputEvent::Sleep(ms) => write!(f, "sleep {}ms", ms),
            InputEvent::Cleanup => write!(f, "cleanup"),
        }
    }
}

/// 带时间戳的后端调用
#[derive(Debug, Clone)]
pub struct RecordedEvent {
    pub at: Instant,
    pub event: InputEvent,
}

#[derive(Debug, Default)]
struct Recording {
    events: Vec<RecordedEvent>,
    held: HashSet<KeyCode>,
}

/// 记录型后端
///
/// 不产生任何系统输入，只记录调用顺序与时间。克隆体共享同一份记录，
/// 便于把后端交给引擎后仍能检查结果
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    recording: Arc<Mutex<Recording>>,
    fail_text: bool,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建一个在文本注入时返回错误的后端
    pub fn failing_text() -> Self {
        Self {
            fail_text: true,
            ..Self::default()
        }
    }

    pub fn records(&self) -> Vec<RecordedEvent> {
        self.recording.lock().events.clone()
    }

    pub fn events(&self) -> Vec<InputEvent> {
        self.recording
            .lock()
            .events
            .iter()
            .map(|r| r.event.clone())
            .collect()
    }

    /// 只保留按键事件，附带时间戳
    pub fn key_events(&self) -> Vec<RecordedEvent> {
        self.recording
            .lock()
            .events
            .iter()
            .filter(|r| matches!(r.event, InputEvent::KeyDown(_) | InputEvent::KeyUp(_)))
            .cloned()
            .collect()
    }

    /// 当前仍处于按下状态的键
    pub fn held(&self) -> Vec<KeyCode> {
        self.recording.lock().held.iter().copied().collect()
    }

    pub fn clear(&self) {
        let mut recording = self.recording.lock();
        recording.events.clear();
        recording.held.clear();
    }

    fn push(&self, event: InputEvent) {
        let mut recording = self.recording.lock();
        match &event {
            InputEvent::KeyDown(code) => {
                recording.held.insert(*code);
            }
            InputEvent::KeyUp(code) => {
                recording.held.remove(code);
            }
            InputEvent::Cleanup => recording.held.clear(),
            _ => {}
        }
        recording.events.push(RecordedEvent {
            at: Instant::now(),
            event,
        });
    }
}

impl InputBackend for RecordingBackend {
    fn key_down(&mut self, code: KeyCode) -> Result<(), InputError> {
        self.push(InputEvent::KeyDown(code));
        Ok(())
    }

    fn key_up(&mut self, code: KeyCode) -> Result<(), InputError> {
        self.push(InputEvent::KeyUp(code));
        Ok(())
    }

    fn send_text(&mut self, text: &str) -> Result<(), InputError> {
        if self.fail_text {
            return Err(InputError::InjectionFailed("text injection refused".to_string()));
        }
        self.push(InputEvent::Text(text.to_string()));
        Ok(())
    }

    fn sleep(&mut self, ms: u64) -> impl Future<Output = ()> + Send {
        self.push(InputEvent::Sleep(ms));
        tokio::time::sleep(Duration::from_millis(ms))
    }

    fn cleanup(&mut self) -> Result<(), InputError> {
        self.push(InputEvent::Cleanup);
        Ok(())
    }
}
