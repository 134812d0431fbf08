//! CLI 命令
//!
//! 解析命令行参数并分发到引擎、配置与宏存储

use crate::error::AppError;
use crate::modules::config::ConfigManager;
use crate::modules::macros::MacroStore;
use crate::modules::quick::finish;
use crate::{create_engine, initialize};
use clap::{Parser, Subcommand};
use keypilot_core::backend::{InputBackend, RecordingBackend};
use keypilot_core::config::EngineConfig;
use keypilot_core::engine::ActionEngine;
use keypilot_core::keymap::KeyMap;
use keypilot_core::platform::Platform;
use std::path::PathBuf;
use tokio::time::Instant;

/// 跨平台键盘输入模拟
#[derive(Debug, Parser)]
#[command(name = "keypilot", author, version, about, long_about = None)]
pub struct Cli {
    /// 只记录后端调用并打印，不注入任何输入
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// 输出 debug 日志
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 配置目录 (默认为系统配置目录下的 keypilot)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// 覆盖默认的动作前延迟 (ms)
    #[arg(long)]
    pub delay: Option<u64>,

    /// 覆盖默认的间隔 (ms)
    #[arg(long)]
    pub interval: Option<u64>,

    /// 覆盖默认的按键时长 (ms)
    #[arg(long)]
    pub duration: Option<u64>,

    /// 覆盖默认的组合键按住时长 (ms)
    #[arg(long)]
    pub hotkey_delay: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 列出可用的键名
    Keys {
        /// 目标平台 (windows, macos, linux)，默认为当前平台
        #[arg(long)]
        platform: Option<Platform>,
    },
    /// 按下并释放一个键
    Press { key: String },
    /// 组合键，例如 ctrl+shift+escape
    Hotkey { combo: String },
    /// 输入一段文本
    Type { text: String },
    /// 按住一个键
    Hold {
        key: String,
        /// 按住时长 (ms)，默认 1000
        #[arg(long)]
        duration: Option<u64>,
    },
    /// 重复按键
    Repeat {
        key: String,
        times: u32,
        /// 重复间隔 (ms)，默认 50
        #[arg(long)]
        interval: Option<u64>,
    },
    /// 执行宏文件 (宏文档或纯记录列表)
    Run { file: PathBuf },
    /// 管理已保存的宏
    Macro {
        #[command(subcommand)]
        command: MacroCommand,
    },
    /// 检查平台与输入后端，并写入默认配置
    Init,
}

#[derive(Debug, Subcommand)]
pub enum MacroCommand {
    /// 从文件导入宏并以指定名称保存
    Save { name: String, file: PathBuf },
    /// 列出已保存的宏
    List,
    /// 打印宏文档
    Show { name: String },
    /// 删除宏
    Remove { name: String },
}

impl Cli {
    /// 在配置文件的时序之上应用命令行覆盖
    pub fn engine_config(&self, base: EngineConfig) -> EngineConfig {
        EngineConfig {
            delay: self.delay.unwrap_or(base.delay),
            interval: self.interval.unwrap_or(base.interval),
            duration: self.duration.unwrap_or(base.duration),
            hotkey_delay: self.hotkey_delay.unwrap_or(base.hotkey_delay),
        }
    }
}

/// 执行命令，错误带上错误代码
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    dispatch(cli)
        .await
        .map_err(|e| anyhow::anyhow!("[{}] {}", e.code(), e))
}

async fn dispatch(cli: Cli) -> Result<(), AppError> {
    let manager = match &cli.config_dir {
        Some(dir) => ConfigManager::new(dir.clone()),
        None => ConfigManager::default(),
    };
    let user_config = manager.load()?;
    let config = cli.engine_config(user_config.engine);
    tracing::debug!("Engine config: {:?}", config);

    match cli.command {
        Command::Keys { platform } => list_keys(platform),
        Command::Macro { command } => {
            macro_command(&MacroStore::new(manager.macros_dir()), command)
        }
        Command::Init => init(&manager),
        command if cli.dry_run => {
            let platform = Platform::current()?;
            let recorder = RecordingBackend::new();
            let mut engine = ActionEngine::for_platform(recorder.clone(), platform, config);
            let started = Instant::now();
            let result = perform(&mut engine, command).await;
            print_events(&recorder, started);
            result
        }
        command => {
            let mut engine = create_engine(Some(config))?;
            perform(&mut engine, command).await
        }
    }
}

/// 在引擎上执行一个输入命令，结束后总是清理
async fn perform<B: InputBackend>(
    engine: &mut ActionEngine<B>,
    command: Command,
) -> Result<(), AppError> {
    let result = match command {
        Command::Press { key } => engine.press_key(&key, None, None).await,
        Command::Hotkey { combo } => engine.press_hotkey(&split_combo(&combo), None, None).await,
        Command::Type { text } => engine.type_text(&text, None).await,
        Command::Hold { key, duration } => engine.hold_key(&key, duration, None).await,
        Command::Repeat {
            key,
            times,
            interval,
        } => engine.repeat_key(&key, times, interval, None).await,
        Command::Run { file } => {
            let mut m = MacroStore::load_file(&file)?;
            // exec 自行清理
            return Ok(m.exec(engine).await?);
        }
        Command::Keys { .. } | Command::Macro { .. } | Command::Init => {
            return Err(AppError::Internal("not an input command".to_string()));
        }
    };
    finish(engine, result)
}

/// `ctrl+shift+escape` 拆分为键名列表
fn split_combo(combo: &str) -> Vec<&str> {
    combo
        .split('+')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .collect()
}

fn print_events(recorder: &RecordingBackend, started: Instant) {
    for record in recorder.records() {
        let offset = record.at.saturating_duration_since(started).as_millis();
        println!("{:>7}ms  {}", offset, record.event);
    }
}

fn list_keys(platform: Option<Platform>) -> Result<(), AppError> {
    let platform = match platform {
        Some(platform) => platform,
        None => Platform::current()?,
    };
    let keymap = KeyMap::for_platform(platform);
    for name in keymap.names() {
        println!("{:<16} {}", name, keymap.resolve(name)?);
    }
    Ok(())
}

fn macro_command(store: &MacroStore, command: MacroCommand) -> Result<(), AppError> {
    match command {
        MacroCommand::Save { name, file } => {
            let mut m = MacroStore::load_file(&file)?;
            m.set_name(name);
            let path = store.save(&m)?;
            println!("{}", path.display());
        }
        MacroCommand::List => {
            for name in store.list()? {
                println!("{}", name);
            }
        }
        MacroCommand::Show { name } => {
            let document = store.document(&name)?;
            let content = serde_json::to_string_pretty(&document)
                .map_err(|e| AppError::Internal(e.to_string()))?;
            println!("{}", content);
        }
        MacroCommand::Remove { name } => store.remove(&name)?,
    }
    Ok(())
}

fn init(manager: &ConfigManager) -> Result<(), AppError> {
    initialize()?;
    if !manager.config_path().exists() {
        manager.save(&manager.current())?;
    }
    println!("{}", manager.config_path().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use keypilot_core::backend::InputEvent;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_split_combo() {
        assert_eq!(split_combo("ctrl+shift+escape"), vec!["ctrl", "shift", "escape"]);
        assert_eq!(split_combo(" ctrl + c "), vec!["ctrl", "c"]);
        assert!(split_combo("+").is_empty());
    }

    #[test]
    fn test_timing_overrides_apply_over_config() {
        let cli = parse(&["keypilot", "--delay", "10", "--hotkey-delay", "50", "press", "a"]);
        let config = cli.engine_config(EngineConfig::new(0, 100, 200, 500));
        assert_eq!(config, EngineConfig::new(10, 100, 200, 50));
    }

    #[test]
    fn test_hold_duration_is_command_scoped() {
        let cli = parse(&["keypilot", "hold", "shift", "--duration", "300", "--dry-run"]);
        assert!(cli.dry_run);
        assert_eq!(cli.duration, None);
        assert!(matches!(
            cli.command,
            Command::Hold { ref key, duration: Some(300) } if key == "shift"
        ));
    }

    #[test]
    fn test_keys_platform_parses() {
        let cli = parse(&["keypilot", "keys", "--platform", "macos"]);
        assert!(matches!(
            cli.command,
            Command::Keys {
                platform: Some(Platform::MacOs)
            }
        ));
        assert!(Cli::try_parse_from(["keypilot", "keys", "--platform", "amiga"]).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_perform_hotkey_then_cleanup() {
        let recorder = RecordingBackend::new();
        let config = EngineConfig::new(0, 100, 200, 10);
        let mut engine = ActionEngine::for_platform(recorder.clone(), Platform::Linux, config);
        perform(
            &mut engine,
            Command::Hotkey {
                combo: "ctrl+c".to_string(),
            },
        )
        .await
        .unwrap();

        let events = recorder.events();
        assert_eq!(events.last(), Some(&InputEvent::Cleanup));
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, InputEvent::KeyDown(_)))
                .count(),
            2
        );
        assert!(recorder.held().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_perform_unknown_key_still_cleans_up() {
        let recorder = RecordingBackend::new();
        let mut engine =
            ActionEngine::for_platform(recorder.clone(), Platform::Linux, EngineConfig::default());
        let err = perform(
            &mut engine,
            Command::Press {
                key: "nope".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.code(), crate::error::ErrorCode::InvalidKey);
        assert_eq!(recorder.events(), vec![InputEvent::Cleanup]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_perform_runs_macro_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("greet.json");
        std::fs::write(
            &file,
            r#"[{"type": "type", "text": "hi"}, {"type": "wait", "interval": 5}]"#,
        )
        .unwrap();

        let recorder = RecordingBackend::new();
        let mut engine =
            ActionEngine::for_platform(recorder.clone(), Platform::Linux, EngineConfig::default());
        perform(&mut engine, Command::Run { file }).await.unwrap();
        assert_eq!(
            recorder.events(),
            vec![
                InputEvent::Text("hi".to_string()),
                InputEvent::Sleep(5),
                InputEvent::Cleanup
            ]
        );
    }

    #[test]
    fn test_macro_command_save_list_remove() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("input.json");
        std::fs::write(&file, r#"[{"type": "key", "key": "enter"}]"#).unwrap();
        let store = MacroStore::new(dir.path().join("macros"));

        macro_command(
            &store,
            MacroCommand::Save {
                name: "submit".to_string(),
                file,
            },
        )
        .unwrap();
        assert_eq!(store.list().unwrap(), vec!["submit".to_string()]);
        assert_eq!(store.load("submit").unwrap().name(), Some("submit"));

        macro_command(
            &store,
            MacroCommand::Remove {
                name: "submit".to_string(),
            },
        )
        .unwrap();
        assert!(store.list().unwrap().is_empty());
    }
}
