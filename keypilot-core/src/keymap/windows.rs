//! Windows 键码表 (virtual-key code)

pub(super) const KEYS: &[(&str, u32)] = &[
    // Letters
    ("a", 0x41), ("b", 0x42), ("c", 0x43), ("d", 0x44), ("e", 0x45), ("f", 0x46), ("g", 0x47),
    ("h", 0x48), ("i", 0x49), ("j", 0x4A), ("k", 0x4B), ("l", 0x4C), ("m", 0x4D), ("n", 0x4E),
    ("o", 0x4F), ("p", 0x50), ("q", 0x51), ("r", 0x52), ("s", 0x53), ("t", 0x54), ("u", 0x55),
    ("v", 0x56), ("w", 0x57), ("x", 0x58), ("y", 0x59), ("z", 0x5A),
    // Numbers
    ("0", 0x30), ("1", 0x31), ("2", 0x32), ("3", 0x33), ("4", 0x34),
    ("5", 0x35), ("6", 0x36), ("7", 0x37), ("8", 0x38), ("9", 0x39),
    // Function keys
    ("f1", 0x70), ("f2", 0x71), ("f3", 0x72), ("f4", 0x73), ("f5", 0x74), ("f6", 0x75),
    ("f7", 0x76), ("f8", 0x77), ("f9", 0x78), ("f10", 0x79), ("f11", 0x7A), ("f12", 0x7B),
    // Special keys
    ("backspace", 0x08), ("tab", 0x09), ("enter", 0x0D), ("escape", 0x1B), ("space", 0x20),
    // Modifiers
    ("ctrl", 0x11), ("shift", 0x10), ("alt", 0x12), ("win", 0x5B),
    ("lshift", 0xA0), ("rshift", 0xA1), ("lctrl", 0xA2), ("rctrl", 0xA3),
    ("lalt", 0xA4), ("ralt", 0xA5), ("lwin", 0x5B), ("rwin", 0x5C), ("apps", 0x5D),
    // Navigation
    ("left", 0x25), ("right", 0x27), ("up", 0x26), ("down", 0x28),
    ("insert", 0x2D), ("delete", 0x2E), ("home", 0x24), ("end", 0x23),
    ("pageup", 0x21), ("pagedown", 0x22),
    // Numpad
    ("numpad0", 0x60), ("numpad1", 0x61), ("numpad2", 0x62), ("numpad3", 0x63),
    ("numpad4", 0x64), ("numpad5", 0x65), ("numpad6", 0x66), ("numpad7", 0x67),
    ("numpad8", 0x68), ("numpad9", 0x69), ("numpaddecimal", 0x6E),
    ("numpaddivide", 0x6F), ("numpadmultiply", 0x6A),
    ("numpadsubtract", 0x6D), ("numpadadd", 0x6B),
    // Symbols (US layout OEM keys)
    ("backquote", 0xC0), ("hyphen", 0xBD), ("equal", 0xBB),
    ("squarebracketstart", 0xDB), ("squarebracketend", 0xDD),
    ("bslash", 0xDC), ("semicolon", 0xBA), ("quote", 0xDE),
    ("comma", 0xBC), ("dot", 0xBE), ("fslash", 0xBF),
    // Lock keys
    ("capslock", 0x14), ("numlock", 0x90), ("scrolllock", 0x91),
    // Media keys
    ("volumemute", 0xAD), ("volumedown", 0xAE), ("volumeup", 0xAF),
    ("mediaplaypause", 0xB3), ("mediastop", 0xB2), ("mediaprev", 0xB1), ("medianext", 0xB0),
    // Browser keys
    ("browserhome", 0xAC), ("browserback", 0xA6), ("browserforward", 0xA7),
    ("browserrefresh", 0xA8), ("browserstop", 0xA9), ("browsersearch", 0xAA),
    // Print/System
    ("printscreen", 0x2C), ("pause", 0x13),
];
