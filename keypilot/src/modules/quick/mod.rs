//! 一次性快捷操作
//!
//! 每个函数新建一个引擎，执行一件事，并且无论成败都清理这个引擎

use crate::create_engine;
use crate::error::AppError;
use keypilot_core::backend::InputBackend;
use keypilot_core::engine::ActionEngine;
use keypilot_core::error::EngineError;

/// 复制与粘贴之间的默认间隔 (毫秒)
pub const DEFAULT_COPY_PASTE_GAP_MS: u64 = 100;

/// 先清理引擎，再返回操作结果；操作错误优先
pub(crate) fn finish<B: InputBackend>(
    engine: &mut ActionEngine<B>,
    result: Result<(), EngineError>,
) -> Result<(), AppError> {
    let cleanup = engine.cleanup();
    Ok(result.and(cleanup)?)
}

pub async fn press_key(
    key: &str,
    duration: Option<u64>,
    delay: Option<u64>,
) -> Result<(), AppError> {
    let mut engine = create_engine(None)?;
    let result = engine.press_key(key, duration, delay).await;
    finish(&mut engine, result)
}

pub async fn press_hotkey(
    keys: &[&str],
    duration: Option<u64>,
    delay: Option<u64>,
) -> Result<(), AppError> {
    let mut engine = create_engine(None)?;
    let result = engine.press_hotkey(keys, duration, delay).await;
    finish(&mut engine, result)
}

pub async fn type_text(text: &str, delay: Option<u64>) -> Result<(), AppError> {
    let mut engine = create_engine(None)?;
    let result = engine.type_text(text, delay).await;
    finish(&mut engine, result)
}

pub async fn copy(hotkey_delay: Option<u64>, delay: Option<u64>) -> Result<(), AppError> {
    let mut engine = create_engine(None)?;
    let result = engine.copy(hotkey_delay, delay).await;
    finish(&mut engine, result)
}

pub async fn paste(hotkey_delay: Option<u64>, delay: Option<u64>) -> Result<(), AppError> {
    let mut engine = create_engine(None)?;
    let result = engine.paste(hotkey_delay, delay).await;
    finish(&mut engine, result)
}

pub async fn alt_tab(hotkey_delay: Option<u64>, delay: Option<u64>) -> Result<(), AppError> {
    let mut engine = create_engine(None)?;
    let result = engine.alt_tab(hotkey_delay, delay).await;
    finish(&mut engine, result)
}

pub async fn copy_paste(gap_ms: Option<u64>) -> Result<(), AppError> {
    let mut engine = create_engine(None)?;
    let result = copy_paste_with(&mut engine, gap_ms).await;
    finish(&mut engine, result)
}

pub async fn select_all_copy() -> Result<(), AppError> {
    let mut engine = create_engine(None)?;
    let result = select_all_copy_with(&mut engine).await;
    finish(&mut engine, result)
}

pub async fn select_all_paste() -> Result<(), AppError> {
    let mut engine = create_engine(None)?;
    let result = select_all_paste_with(&mut engine).await;
    finish(&mut engine, result)
}

/// 复制，等待 `gap_ms` (默认 100ms)，再粘贴
pub async fn copy_paste_with<B: InputBackend>(
    engine: &mut ActionEngine<B>,
    gap_ms: Option<u64>,
) -> Result<(), EngineError> {
    engine.copy(None, None).await?;
    engine.wait(Some(gap_ms.unwrap_or(DEFAULT_COPY_PASTE_GAP_MS))).await;
    engine.paste(None, None).await
}

/// 全选后复制
pub async fn select_all_copy_with<B: InputBackend>(
    engine: &mut ActionEngine<B>,
) -> Result<(), EngineError> {
    engine.select_all(None, None).await?;
    engine.copy(None, None).await
}

/// 全选后粘贴 (替换全部内容)
pub async fn select_all_paste_with<B: InputBackend>(
    engine: &mut ActionEngine<B>,
) -> Result<(), EngineError> {
    engine.select_all(None, None).await?;
    engine.paste(None, None).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use keypilot_core::backend::{InputEvent, RecordingBackend};
    use keypilot_core::config::EngineConfig;
    use keypilot_core::keymap::{KeyCode, KeyMap};
    use keypilot_core::platform::Platform;

    fn engine() -> (ActionEngine<RecordingBackend>, RecordingBackend) {
        let recorder = RecordingBackend::new();
        let config = EngineConfig::new(0, 100, 10, 20);
        let engine = ActionEngine::for_platform(recorder.clone(), Platform::Linux, config);
        (engine, recorder)
    }

    fn downs(recorder: &RecordingBackend) -> Vec<KeyCode> {
        recorder
            .events()
            .into_iter()
            .filter_map(|e| match e {
                InputEvent::KeyDown(code) => Some(code),
                _ => None,
            })
            .collect()
    }

    fn key(name: &str) -> KeyCode {
        KeyMap::for_platform(Platform::Linux).resolve(name).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_paste_waits_between_hotkeys() {
        let (mut engine, recorder) = engine();
        copy_paste_with(&mut engine, None).await.unwrap();
        assert_eq!(downs(&recorder), vec![key("ctrl"), key("c"), key("ctrl"), key("v")]);
        assert!(recorder.events().contains(&InputEvent::Sleep(DEFAULT_COPY_PASTE_GAP_MS)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_all_paste_pastes() {
        let (mut engine, recorder) = engine();
        select_all_paste_with(&mut engine).await.unwrap();
        assert_eq!(downs(&recorder), vec![key("ctrl"), key("a"), key("ctrl"), key("v")]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_finish_cleans_up_on_error() {
        let (mut engine, recorder) = engine();
        let result = engine.press_key("missing", None, None).await;
        let err = finish(&mut engine, result).unwrap_err();
        assert_eq!(err.code(), crate::error::ErrorCode::InvalidKey);
        assert_eq!(recorder.events(), vec![InputEvent::Cleanup]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_all_copy() {
        let (mut engine, recorder) = engine();
        select_all_copy_with(&mut engine).await.unwrap();
        assert_eq!(downs(&recorder), vec![key("ctrl"), key("a"), key("ctrl"), key("c")]);
    }
}
