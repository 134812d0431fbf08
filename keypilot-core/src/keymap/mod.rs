//! 按键名称到平台原生键码的映射
//!
//! 每个平台一张只读表，进程内首次使用时构建

mod linux;
mod macos;
mod windows;

use crate::error::KeyError;
use crate::platform::Platform;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;

lazy_static! {
    static ref WINDOWS_KEYMAP: KeyMap = KeyMap::build(Platform::Windows, windows::KEYS);
    static ref MACOS_KEYMAP: KeyMap = KeyMap::build(Platform::MacOs, macos::KEYS);
    static ref LINUX_KEYMAP: KeyMap = KeyMap::build(Platform::Linux, linux::KEYS);
}

/// 平台原生键码
///
/// 只用于透传给后端，不参与运算；仅在解析它的平台上有效
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode {
    value: u32,
    platform: Platform,
}

impl KeyCode {
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:#04x}", self.platform, self.value)
    }
}

/// 修饰键名称；各平台表中存在的部分构成该平台的修饰键集合
const MODIFIER_NAMES: &[&str] = &[
    "ctrl", "lctrl", "rctrl", "shift", "lshift", "rshift", "alt", "lalt", "ralt", "super",
    "lsuper", "rsuper", "win", "lwin", "rwin", "cmd", "lcmd", "rcmd", "option", "fn",
];

/// 单一平台的按键表
#[derive(Debug)]
pub struct KeyMap {
    platform: Platform,
    codes: HashMap<&'static str, u32>,
}

impl KeyMap {
    fn build(platform: Platform, keys: &'static [(&'static str, u32)]) -> Self {
        let codes = keys.iter().copied().collect();
        Self { platform, codes }
    }

    /// 获取指定平台的按键表
    pub fn for_platform(platform: Platform) -> &'static KeyMap {
        match platform {
            Platform::Windows => &WINDOWS_KEYMAP,
            Platform::MacOs => &MACOS_KEYMAP,
            Platform::Linux => &LINUX_KEYMAP,
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// 解析按键名称
    ///
    /// 名称先去空白并转小写；表中不存在即失败，不会回退到默认键
    pub fn resolve(&self, name: &str) -> Result<KeyCode, KeyError> {
        let normalized = name.trim().to_lowercase();
        self.codes
            .get(normalized.as_str())
            .map(|&value| KeyCode {
                value,
                platform: self.platform,
            })
            .ok_or_else(|| KeyError::UnknownKey {
                name: name.to_string(),
                platform: self.platform,
            })
    }

    /// 按顺序解析一组按键，任一失败即整体失败
    pub fn resolve_all<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<KeyCode>, KeyError> {
        names.iter().map(|name| self.resolve(name.as_ref())).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.codes.contains_key(name.trim().to_lowercase().as_str())
    }

    /// 所有支持的按键名称 (已排序)
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.codes.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// 本平台全部修饰键 (按键码去重，升序)
    pub fn modifiers(&self) -> Vec<KeyCode> {
        let mut values: Vec<u32> = MODIFIER_NAMES
            .iter()
            .filter_map(|name| self.codes.get(name).copied())
            .collect();
        values.sort_unstable();
        values.dedup();
        values
            .into_iter()
            .map(|value| KeyCode {
                value,
                platform: self.platform,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const COMMON_KEYS: &[&str] = &[
        "a", "z", "0", "9", "f1", "f12", "ctrl", "shift", "alt", "tab", "enter", "escape",
        "space", "backspace", "delete", "left", "right", "up", "down", "home", "end", "pageup",
        "pagedown", "numpad5", "comma", "semicolon", "capslock", "volumeup",
    ];

    fn table(platform: Platform) -> &'static [(&'static str, u32)] {
        match platform {
            Platform::Windows => windows::KEYS,
            Platform::MacOs => macos::KEYS,
            Platform::Linux => linux::KEYS,
        }
    }

    #[test]
    fn test_tables_have_unique_names() {
        for platform in Platform::ALL {
            let mut seen = HashSet::new();
            for (name, _) in table(platform) {
                assert!(seen.insert(*name), "duplicate key {name} on {platform}");
                assert_eq!(*name, name.to_lowercase());
            }
            assert_eq!(KeyMap::for_platform(platform).len(), seen.len());
        }
    }

    #[test]
    fn test_every_documented_name_resolves() {
        for platform in Platform::ALL {
            let keymap = KeyMap::for_platform(platform);
            for (name, value) in table(platform) {
                let code = keymap.resolve(name).unwrap();
                assert_eq!(code.value(), *value);
                assert_eq!(code.platform(), platform);
            }
            for name in COMMON_KEYS {
                assert!(keymap.contains(name), "{name} missing on {platform}");
            }
        }
    }

    #[test]
    fn test_unknown_name_fails() {
        let keymap = KeyMap::for_platform(Platform::Linux);
        let err = keymap.resolve("hyperspace").unwrap_err();
        assert_eq!(
            err,
            KeyError::UnknownKey {
                name: "hyperspace".to_string(),
                platform: Platform::Linux,
            }
        );
    }

    #[test]
    fn test_platform_specific_names_are_absent() {
        assert!(KeyMap::for_platform(Platform::Windows).resolve("cmd").is_err());
        assert!(KeyMap::for_platform(Platform::Linux).resolve("cmd").is_err());
        assert!(KeyMap::for_platform(Platform::MacOs).resolve("lwin").is_err());
        assert!(KeyMap::for_platform(Platform::MacOs).resolve("cmd").is_ok());
        assert!(KeyMap::for_platform(Platform::Windows).resolve("lwin").is_ok());
    }

    #[test]
    fn test_resolve_normalizes_case_and_whitespace() {
        let keymap = KeyMap::for_platform(Platform::Windows);
        assert_eq!(keymap.resolve(" Ctrl ").unwrap(), keymap.resolve("ctrl").unwrap());
        assert_eq!(keymap.resolve("F5").unwrap().value(), 0x74);
    }

    #[test]
    fn test_linux_codes_match_x11() {
        let keymap = KeyMap::for_platform(Platform::Linux);
        assert_eq!(keymap.resolve("a").unwrap().value(), 38);
        assert_eq!(keymap.resolve("semicolon").unwrap().value(), 47);
        assert_eq!(keymap.resolve("backquote").unwrap().value(), 49);
        assert_eq!(keymap.resolve("ctrl").unwrap(), keymap.resolve("lctrl").unwrap());
    }

    #[test]
    fn test_resolve_all_fails_on_first_unknown() {
        let keymap = KeyMap::for_platform(Platform::Windows);
        let codes = keymap.resolve_all(&["ctrl", "shift", "escape"]).unwrap();
        assert_eq!(codes.len(), 3);
        assert!(keymap.resolve_all(&["ctrl", "nope", "c"]).is_err());
    }

    #[test]
    fn test_names_sorted() {
        let names = KeyMap::for_platform(Platform::MacOs).names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert!(names.contains(&"cmd"));
    }

    #[test]
    fn test_modifiers_are_deduplicated_per_platform() {
        let linux = KeyMap::for_platform(Platform::Linux);
        let values: Vec<u32> = linux.modifiers().iter().map(KeyCode::value).collect();
        assert_eq!(values, vec![37, 50, 62, 64, 105, 108, 133, 134]);

        let macos = KeyMap::for_platform(Platform::MacOs).modifiers();
        assert!(macos.contains(&KeyMap::for_platform(Platform::MacOs).resolve("cmd").unwrap()));
        assert!(macos.iter().all(|code| code.platform() == Platform::MacOs));

        let windows = KeyMap::for_platform(Platform::Windows);
        let modifiers = windows.modifiers();
        assert!(modifiers.contains(&windows.resolve("lwin").unwrap()));
        assert!(!modifiers.contains(&windows.resolve("a").unwrap()));
    }
}
