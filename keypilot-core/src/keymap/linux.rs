//! Linux 键码表 (X11 keycode)

pub(super) const KEYS: &[(&str, u32)] = &[
    // Letters
    ("a", 38), ("b", 56), ("c", 54), ("d", 40), ("e", 26), ("f", 41), ("g", 42),
    ("h", 43), ("i", 31), ("j", 44), ("k", 45), ("l", 46), ("m", 58), ("n", 57),
    ("o", 32), ("p", 33), ("q", 24), ("r", 27), ("s", 39), ("t", 28), ("u", 30),
    ("v", 55), ("w", 25), ("x", 53), ("y", 29), ("z", 52),
    // Numbers
    ("0", 19), ("1", 10), ("2", 11), ("3", 12), ("4", 13),
    ("5", 14), ("6", 15), ("7", 16), ("8", 17), ("9", 18),
    // Function keys
    ("f1", 67), ("f2", 68), ("f3", 69), ("f4", 70), ("f5", 71), ("f6", 72),
    ("f7", 73), ("f8", 74), ("f9", 75), ("f10", 76), ("f11", 95), ("f12", 96),
    // Special keys
    ("backspace", 22), ("tab", 23), ("enter", 36), ("escape", 9), ("space", 65),
    // Modifiers
    ("ctrl", 37), ("shift", 50), ("alt", 64), ("super", 133),
    ("lshift", 50), ("rshift", 62), ("lctrl", 37), ("rctrl", 105),
    ("lalt", 64), ("ralt", 108), ("lsuper", 133), ("rsuper", 134), ("apps", 135),
    // Navigation
    ("left", 113), ("right", 114), ("up", 111), ("down", 116),
    ("insert", 118), ("delete", 119), ("home", 110), ("end", 115),
    ("pageup", 112), ("pagedown", 117),
    // Numpad
    ("numpad0", 90), ("numpad1", 87), ("numpad2", 88), ("numpad3", 89),
    ("numpad4", 83), ("numpad5", 84), ("numpad6", 85), ("numpad7", 79),
    ("numpad8", 80), ("numpad9", 81), ("numpaddecimal", 91),
    ("numpaddivide", 106), ("numpadmultiply", 63),
    ("numpadsubtract", 82), ("numpadadd", 86), ("numpadenter", 104),
    // Symbols
    ("backquote", 49), ("hyphen", 20), ("equal", 21),
    ("squarebracketstart", 34), ("squarebracketend", 35),
    ("bslash", 51), ("semicolon", 47), ("quote", 48),
    ("comma", 59), ("dot", 60), ("fslash", 61),
    // Lock keys
    ("capslock", 66), ("numlock", 77), ("scrolllock", 78),
    // Media keys (XF86)
    ("volumemute", 121), ("volumedown", 122), ("volumeup", 123),
    ("mediaplaypause", 172), ("mediastop", 174), ("mediaprev", 173), ("medianext", 171),
    // Browser keys
    ("browserhome", 180), ("browserback", 166), ("browserforward", 167),
    ("browserrefresh", 168), ("browserstop", 169), ("browsersearch", 170),
    // Print/System
    ("printscreen", 107), ("pause", 127),
];
