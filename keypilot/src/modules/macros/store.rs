//! 宏文件存储
//!
//! 每个命名宏保存为一个 JSON 文档：
//!
//! ```json
//! {"name": "login", "created_at": "2024-05-01T08:00:00Z", "actions": [{"type": "type", "text": "admin"}]}
//! ```

use crate::error::{AppError, StoreError};
use chrono::{DateTime, Utc};
use keypilot_core::Macro;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// 持久化的宏文档
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroDocument {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub actions: Vec<Value>,
}

impl MacroDocument {
    pub fn from_macro(name: &str, m: &Macro) -> Self {
        Self {
            name: name.to_string(),
            created_at: Utc::now(),
            actions: m.to_records(),
        }
    }

    pub fn into_macro(self) -> Result<Macro, AppError> {
        let mut m = Macro::named(self.name);
        m.from_records(&Value::Array(self.actions))?;
        Ok(m)
    }
}

/// 宏存储
#[derive(Debug, Clone)]
pub struct MacroStore {
    dir: PathBuf,
}

impl MacroStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 保存命名宏，返回文件路径；同名宏会被覆盖
    pub fn save(&self, m: &Macro) -> Result<PathBuf, AppError> {
        let name = m
            .name()
            .ok_or_else(|| StoreError::InvalidName(String::new()))?;
        let path = self.path_for(name)?;
        let document = MacroDocument::from_macro(name, m);
        let content = serde_json::to_string_pretty(&document)
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        std::fs::create_dir_all(&self.dir).map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        tracing::info!("Saved macro {} ({} actions) to {}", name, m.len(), path.display());
        Ok(path)
    }

    /// 读取命名宏的文档
    pub fn document(&self, name: &str) -> Result<MacroDocument, AppError> {
        let path = self.path_for(name)?;
        if !path.exists() {
            return Err(StoreError::NotFound(name.to_string()).into());
        }
        let content =
            std::fs::read_to_string(&path).map_err(|e| StoreError::ReadFailed(e.to_string()))?;
        let document = serde_json::from_str(&content)
            .map_err(|e| StoreError::ReadFailed(format!("{}: {}", path.display(), e)))?;
        Ok(document)
    }

    pub fn load(&self, name: &str) -> Result<Macro, AppError> {
        self.document(name)?.into_macro()
    }

    /// 按名称排序列出已保存的宏
    pub fn list(&self) -> Result<Vec<String>, AppError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let entries =
            std::fs::read_dir(&self.dir).map_err(|e| StoreError::ReadFailed(e.to_string()))?;
        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();
        names.sort();
        Ok(names)
    }

    pub fn remove(&self, name: &str) -> Result<(), AppError> {
        let path = self.path_for(name)?;
        if !path.exists() {
            return Err(StoreError::NotFound(name.to_string()).into());
        }
        std::fs::remove_file(&path).map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        tracing::info!("Removed macro {}", name);
        Ok(())
    }

    /// 从任意文件读取宏，接受宏文档或纯记录列表
    pub fn load_file(path: &Path) -> Result<Macro, AppError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| StoreError::ReadFailed(format!("{}: {}", path.display(), e)))?;
        let value: Value = serde_json::from_str(&content)
            .map_err(|e| StoreError::ReadFailed(format!("{}: {}", path.display(), e)))?;

        if value.is_object() {
            let document: MacroDocument = serde_json::from_value(value)
                .map_err(|e| StoreError::ReadFailed(format!("{}: {}", path.display(), e)))?;
            return document.into_macro();
        }

        let mut m = Macro::new();
        if let Some(stem) = path.file_stem() {
            m.set_name(stem.to_string_lossy());
        }
        m.from_records(&value)?;
        Ok(m)
    }

    fn path_for(&self, name: &str) -> Result<PathBuf, StoreError> {
        Ok(self.dir.join(format!("{}.json", sanitize_name(name)?)))
    }
}

/// 宏名称规范化为 `[a-z0-9_-]`，其他字符替换为 `-`
pub fn sanitize_name(name: &str) -> Result<String, StoreError> {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '_' | '-' => c,
            _ => '-',
        })
        .collect();
    if sanitized.trim_matches('-').is_empty() {
        return Err(StoreError::InvalidName(name.to_string()));
    }
    Ok(sanitized)
}
