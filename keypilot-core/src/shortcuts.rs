//! 常用快捷操作
//!
//! 只是固定按键组合的 `press_hotkey` / `repeat_key` 调用，没有独立逻辑。
//! 参数 `hotkey_delay` / `delay` 为 `None` 时使用引擎配置

use crate::backend::InputBackend;
use crate::engine::ActionEngine;
use crate::error::Result;
use crate::platform::Platform;

macro_rules! hotkey_shortcuts {
    ($($(#[$doc:meta])* $name:ident => [$($key:literal),+];)*) => {
        impl<B: InputBackend> ActionEngine<B> {
            $(
                $(#[$doc])*
                pub async fn $name(
                    &mut self,
                    hotkey_delay: Option<u64>,
                    delay: Option<u64>,
                ) -> Result<()> {
                    self.press_hotkey(&[$($key),+], hotkey_delay, delay).await
                }
            )*
        }
    };
}

macro_rules! repeat_shortcuts {
    ($($(#[$doc:meta])* $name:ident => $key:literal;)*) => {
        impl<B: InputBackend> ActionEngine<B> {
            $(
                $(#[$doc])*
                pub async fn $name(
                    &mut self,
                    times: u32,
                    interval: Option<u64>,
                    delay: Option<u64>,
                ) -> Result<()> {
                    let interval = interval.unwrap_or(self.config().interval);
                    self.repeat_key($key, times, Some(interval), delay).await
                }
            )*
        }
    };
}

hotkey_shortcuts! {
    /// Ctrl+C
    copy => ["ctrl", "c"];
    /// Ctrl+V
    paste => ["ctrl", "v"];
    /// Ctrl+X
    cut => ["ctrl", "x"];
    /// Ctrl+A
    select_all => ["ctrl", "a"];
    /// Ctrl+Z
    undo => ["ctrl", "z"];
    /// Ctrl+Y
    redo => ["ctrl", "y"];
    /// Ctrl+S
    save => ["ctrl", "s"];
    /// Ctrl+F
    find => ["ctrl", "f"];
    /// Ctrl+H
    replace => ["ctrl", "h"];
    /// Alt+Tab
    alt_tab => ["alt", "tab"];
    /// Alt+F4
    alt_f4 => ["alt", "f4"];
    /// Ctrl+Shift+Esc
    task_manager => ["ctrl", "shift", "escape"];
    /// Cmd+C (macOS)
    cmd_copy => ["cmd", "c"];
    /// Cmd+V (macOS)
    cmd_paste => ["cmd", "v"];
    /// Cmd+X (macOS)
    cmd_cut => ["cmd", "x"];
    /// Cmd+S (macOS)
    cmd_save => ["cmd", "s"];
    /// Cmd+Tab (macOS)
    cmd_tab => ["cmd", "tab"];
}

repeat_shortcuts! {
    arrow_up => "up";
    arrow_down => "down";
    arrow_left => "left";
    arrow_right => "right";
    tab => "tab";
    space => "space";
    backspace => "backspace";
    delete => "delete";
}

impl<B: InputBackend> ActionEngine<B> {
    /// 单击系统键 (Windows 键 / Linux Super / macOS Command)，按住 `hotkey_delay`
    pub async fn win_key(&mut self, hotkey_delay: Option<u64>, delay: Option<u64>) -> Result<()> {
        let key = match self.platform() {
            Platform::Windows => "lwin",
            Platform::Linux => "lsuper",
            Platform::MacOs => "lcmd",
        };
        let duration = hotkey_delay.unwrap_or(self.config().hotkey_delay);
        self.press_key(key, Some(duration), delay).await
    }
}
