//! macOS 键码表 (CGKeyCode, ANSI 布局)
//!
//! 没有对应硬件键的名称 (如 printscreen、媒体键) 不在表中

pub(super) const KEYS: &[(&str, u32)] = &[
    // Letters
    ("a", 0x00), ("b", 0x0B), ("c", 0x08), ("d", 0x02), ("e", 0x0E), ("f", 0x03), ("g", 0x05),
    ("h", 0x04), ("i", 0x22), ("j", 0x26), ("k", 0x28), ("l", 0x25), ("m", 0x2E), ("n", 0x2D),
    ("o", 0x1F), ("p", 0x23), ("q", 0x0C), ("r", 0x0F), ("s", 0x01), ("t", 0x11), ("u", 0x20),
    ("v", 0x09), ("w", 0x0D), ("x", 0x07), ("y", 0x10), ("z", 0x06),
    // Numbers
    ("0", 0x1D), ("1", 0x12), ("2", 0x13), ("3", 0x14), ("4", 0x15),
    ("5", 0x17), ("6", 0x16), ("7", 0x1A), ("8", 0x1C), ("9", 0x19),
    // Function keys
    ("f1", 0x7A), ("f2", 0x78), ("f3", 0x63), ("f4", 0x76), ("f5", 0x60), ("f6", 0x61),
    ("f7", 0x62), ("f8", 0x64), ("f9", 0x65), ("f10", 0x6D), ("f11", 0x67), ("f12", 0x6F),
    // Special keys
    ("backspace", 0x33), ("tab", 0x30), ("enter", 0x24), ("escape", 0x35), ("space", 0x31),
    // Modifiers
    ("ctrl", 0x3B), ("shift", 0x38), ("alt", 0x3A), ("option", 0x3A),
    ("cmd", 0x37), ("lcmd", 0x37), ("rcmd", 0x36), ("fn", 0x3F),
    ("lshift", 0x38), ("rshift", 0x3C), ("lctrl", 0x3B), ("rctrl", 0x3E),
    ("lalt", 0x3A), ("ralt", 0x3D),
    // Navigation
    ("left", 0x7B), ("right", 0x7C), ("up", 0x7E), ("down", 0x7D),
    ("insert", 0x72), ("delete", 0x75), ("home", 0x73), ("end", 0x77),
    ("pageup", 0x74), ("pagedown", 0x79),
    // Numpad
    ("numpad0", 0x52), ("numpad1", 0x53), ("numpad2", 0x54), ("numpad3", 0x55),
    ("numpad4", 0x56), ("numpad5", 0x57), ("numpad6", 0x58), ("numpad7", 0x59),
    ("numpad8", 0x5B), ("numpad9", 0x5C), ("numpaddecimal", 0x41),
    ("numpaddivide", 0x4B), ("numpadmultiply", 0x43),
    ("numpadsubtract", 0x4E), ("numpadadd", 0x45), ("numpadenter", 0x4C),
    // Symbols
    ("backquote", 0x32), ("hyphen", 0x1B), ("equal", 0x18),
    ("squarebracketstart", 0x21), ("squarebracketend", 0x1E),
    ("bslash", 0x2A), ("semicolon", 0x29), ("quote", 0x27),
    ("comma", 0x2B), ("dot", 0x2F), ("fslash", 0x2C),
    // Lock keys
    ("capslock", 0x39), ("numlock", 0x47),
    // Volume keys
    ("volumemute", 0x4A), ("volumedown", 0x49), ("volumeup", 0x48),
];
