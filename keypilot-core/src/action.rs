//! 声明式键盘动作及其记录格式
//!
//! 记录格式是带 `type` 字段的 JSON 对象:
//!
//! ```json
//! [
//!   {"type": "hotkey", "keys": ["ctrl", "a"], "duration": 50},
//!   {"type": "type", "text": "hello"},
//!   {"type": "wait", "interval": 200}
//! ]
//! ```
//!
//! 未知 `type` 的记录在解析边界被跳过，引擎内部只处理封闭的 `Action` 枚举

use crate::error::MacroError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// 记录格式中可识别的 `type` 值
pub const RECORD_TYPES: [&str; 5] = ["key", "hotkey", "type", "hold", "wait"];

/// 键盘动作
///
/// 时序字段为 `None` 时由引擎使用默认配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Action {
    /// 按下并释放单键
    #[serde(rename = "key")]
    PressAndRelease {
        key: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration: Option<u64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        delay: Option<u64>,
    },
    /// 组合键
    Hotkey {
        keys: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration: Option<u64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        delay: Option<u64>,
    },
    /// 文本注入
    #[serde(rename = "type")]
    TypeText {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        delay: Option<u64>,
    },
    /// 按住单键一段时间
    Hold {
        key: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration: Option<u64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        delay: Option<u64>,
    },
    /// 等待
    Wait {
        #[serde(default, alias = "duration", skip_serializing_if = "Option::is_none")]
        interval: Option<u64>,
    },
}

impl Action {
    /// 记录格式中的 `type` 值
    pub fn kind(&self) -> &'static str {
        match self {
            Action::PressAndRelease { .. } => "key",
            Action::Hotkey { .. } => "hotkey",
            Action::TypeText { .. } => "type",
            Action::Hold { .. } => "hold",
            Action::Wait { .. } => "wait",
        }
    }

    /// 转换为记录
    ///
    /// 与反序列化共用同一套 serde 定义；所有字段都是字符串或整数，序列化不会失败
    pub fn to_record(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// 从单条记录解析
    ///
    /// 未知类型返回 `Ok(None)` 并输出警告；已知类型但结构不符返回错误
    pub fn from_record(index: usize, record: &Value) -> Result<Option<Action>, MacroError> {
        let malformed = |reason: String| MacroError::MalformedRecord { index, reason };

        let object = record
            .as_object()
            .ok_or_else(|| malformed("record is not an object".to_string()))?;
        let kind = object
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| malformed("missing string field `type`".to_string()))?;

        if !RECORD_TYPES.contains(&kind) {
            tracing::warn!("Unknown action type: {} (record {})", kind, index);
            return Ok(None);
        }

        let action: Action =
            serde_json::from_value(record.clone()).map_err(|e| malformed(e.to_string()))?;
        if let Action::Hotkey { keys, .. } = &action {
            if keys.is_empty() {
                return Err(malformed("hotkey requires at least one key".to_string()));
            }
        }
        Ok(Some(action))
    }

    /// 解析记录列表
    ///
    /// 要求非空数组；任一已知类型记录结构不符则整体失败
    pub fn parse_records(records: &Value) -> Result<Vec<Action>, MacroError> {
        let list = records.as_array().ok_or(MacroError::NotAList)?;
        if list.is_empty() {
            return Err(MacroError::Empty);
        }

        let mut actions = Vec::with_capacity(list.len());
        for (index, record) in list.iter().enumerate() {
            if let Some(action) = Self::from_record(index, record)? {
                actions.push(action);
            }
        }
        Ok(actions)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::PressAndRelease { key, .. } => write!(f, "key {}", key),
            Action::Hotkey { keys, .. } => write!(f, "hotkey {}", keys.iter().join("+")),
            Action::TypeText { text, .. } => write!(f, "type {} chars", text.chars().count()),
            Action::Hold { key, duration, .. } => match duration {
                Some(ms) => write!(f, "hold {} for {}ms", key, ms),
                None => write!(f, "hold {}", key),
            },
            Action::Wait { interval } => match interval {
                Some(ms) => write!(f, "wait {}ms", ms),
                None => write!(f, "wait"),
            },
        }
    }
}
