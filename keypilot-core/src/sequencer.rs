//! 宏：有序、可持久化的动作序列

use crate::action::Action;
use crate::backend::InputBackend;
use crate::engine::ActionEngine;
use crate::error::{MacroError, Result};
use serde_json::Value;

/// 宏
///
/// 由构建者独占；`exec` 之后动作列表被清空，可重新构建
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Macro {
    name: Option<String>,
    actions: Vec<Action>,
}

impl Macro {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            actions: Vec::new(),
        }
    }

    pub fn from_actions(actions: Vec<Action>) -> Self {
        Self {
            name: None,
            actions,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }

    /// 追加一个动作
    pub fn add(&mut self, action: Action) -> &mut Self {
        self.actions.push(action);
        self
    }

    pub fn press_key(
        &mut self,
        key: impl Into<String>,
        duration: Option<u64>,
        delay: Option<u64>,
    ) -> &mut Self {
        self.add(Action::PressAndRelease {
            key: key.into(),
            duration,
            delay,
        })
    }

    pub fn type_text(&mut self, text: impl Into<String>, delay: Option<u64>) -> &mut Self {
        self.add(Action::TypeText {
            text: text.into(),
            delay,
        })
    }

    pub fn press_hotkey<S: Into<String>>(
        &mut self,
        keys: impl IntoIterator<Item = S>,
        duration: Option<u64>,
        delay: Option<u64>,
    ) -> &mut Self {
        self.add(Action::Hotkey {
            keys: keys.into_iter().map(Into::into).collect(),
            duration,
            delay,
        })
    }

    pub fn hold_key(
        &mut self,
        key: impl Into<String>,
        duration: Option<u64>,
        delay: Option<u64>,
    ) -> &mut Self {
        self.add(Action::Hold {
            key: key.into(),
            duration,
            delay,
        })
    }

    pub fn wait(&mut self, duration_ms: u64) -> &mut Self {
        self.add(Action::Wait {
            interval: Some(duration_ms),
        })
    }

    /// 执行整个宏，然后无论成败都清理引擎
    ///
    /// 返回序列错误 (若有)，否则返回清理错误
    pub async fn exec<B: InputBackend>(&mut self, engine: &mut ActionEngine<B>) -> Result<()> {
        let actions = std::mem::take(&mut self.actions);
        tracing::info!(
            "Executing macro {} ({} actions)",
            self.name.as_deref().unwrap_or("<unnamed>"),
            actions.len()
        );

        let result = engine.execute_sequence(&actions).await;
        let cleanup = engine.cleanup();
        result.and(cleanup)
    }

    /// 导出为记录列表
    pub fn to_records(&self) -> Vec<Value> {
        self.actions.iter().map(Action::to_record).collect()
    }

    /// 用记录列表替换当前动作
    ///
    /// 失败时保持原有动作不变
    pub fn from_records(&mut self, records: &Value) -> Result<&mut Self, MacroError> {
        self.actions = Action::parse_records(records)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{InputEvent, RecordingBackend};
    use crate::config::EngineConfig;
    use crate::error::EngineError;
    use crate::platform::Platform;
    use serde_json::json;

    fn engine() -> (ActionEngine<RecordingBackend>, RecordingBackend) {
        let recorder = RecordingBackend::new();
        let engine =
            ActionEngine::for_platform(recorder.clone(), Platform::Linux, EngineConfig::default());
        (engine, recorder)
    }

    #[test]
    fn test_builder_chains_in_order() {
        let mut m = Macro::named("greet");
        m.press_hotkey(["ctrl", "a"], Some(20), None)
            .type_text("hello", None)
            .wait(250)
            .press_key("enter", None, Some(10))
            .hold_key("shift", Some(500), None);

        assert_eq!(m.name(), Some("greet"));
        assert_eq!(m.len(), 5);
        assert_eq!(
            m.actions()[2],
            Action::Wait {
                interval: Some(250)
            }
        );
        assert_eq!(m.actions()[0].kind(), "hotkey");
    }

    #[test]
    fn test_from_records_rejects_empty_list() {
        let mut m = Macro::new();
        m.wait(10);
        assert_eq!(m.from_records(&json!([])).unwrap_err(), MacroError::Empty);
        assert_eq!(m.from_records(&json!("wait")).unwrap_err(), MacroError::NotAList);
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_from_records_keeps_state_on_malformed_record() {
        let mut m = Macro::new();
        m.press_key("a", None, None);
        let before = m.clone();
        let records = json!([{"type": "wait", "interval": 5}, {"type": "type"}]);
        assert!(m.from_records(&records).is_err());
        assert_eq!(m, before);
    }

    #[test]
    fn test_records_round_trip() {
        let records = json!([{"type": "wait", "interval": 10}]);
        let mut m = Macro::new();
        m.from_records(&records).unwrap();
        assert_eq!(Value::Array(m.to_records()), records);

        let mut built = Macro::new();
        built
            .press_hotkey(["alt", "tab"], None, Some(100))
            .type_text("ok", None);
        let mut restored = Macro::new();
        restored.from_records(&Value::Array(built.to_records())).unwrap();
        assert_eq!(restored.actions(), built.actions());
    }

    #[tokio::test(start_paused = true)]
    async fn test_exec_runs_clears_and_cleans_up() {
        let (mut engine, recorder) = engine();
        let mut m = Macro::new();
        m.type_text("hi", None).wait(10);

        m.exec(&mut engine).await.unwrap();

        assert!(m.is_empty());
        assert_eq!(
            recorder.events(),
            vec![
                InputEvent::Text("hi".to_string()),
                InputEvent::Sleep(10),
                InputEvent::Cleanup,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_exec_cleans_up_after_failure() {
        let (mut engine, recorder) = engine();
        let mut m = Macro::new();
        m.add(Action::Hotkey {
            keys: vec!["ctrl".into(), "c".into()],
            duration: Some(0),
            delay: None,
        })
        .press_key("no-such-key", None, None)
        .type_text("unreachable", None);

        let err = m.exec(&mut engine).await.unwrap_err();
        assert!(matches!(err, EngineError::InvalidKey(_)));
        assert_eq!(recorder.events().last(), Some(&InputEvent::Cleanup));
        assert!(!recorder
            .events()
            .contains(&InputEvent::Text("unreachable".to_string())));
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_macro_is_noop() {
        let (mut engine, recorder) = engine();
        Macro::new().exec(&mut engine).await.unwrap();
        assert_eq!(recorder.events(), vec![InputEvent::Cleanup]);
    }
}
