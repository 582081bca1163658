use core::mem;

use glfw3_sys as sys;

#[repr(i32)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Key {
    Space = sys::GLFW_KEY_SPACE,

    Apostrophe = sys::GLFW_KEY_APOSTROPHE,

    Comma = sys::GLFW_KEY_COMMA,
    Minus = sys::GLFW_KEY_MINUS,
    Period = sys::GLFW_KEY_PERIOD,
    Slash = sys::GLFW_KEY_SLASH,
    Num0 = sys::GLFW_KEY_0,
    Num1 = sys::GLFW_KEY_1,
    Num2 = sys::GLFW_KEY_2,
    Num3 = sys::GLFW_KEY_3,
    Num4 = sys::GLFW_KEY_4,
    Num5 = sys::GLFW_KEY_5,
    Num6 = sys::GLFW_KEY_6,
    Num7 = sys::GLFW_KEY_7,
    Num8 = sys::GLFW_KEY_8,
    Num9 = sys::GLFW_KEY_9,

    Semicolon = sys::GLFW_KEY_SEMICOLON,

    Equal = sys::GLFW_KEY_EQUAL,

    A = sys::GLFW_KEY_A,
    B = sys::GLFW_KEY_B,
    C = sys::GLFW_KEY_C,
    D = sys::GLFW_KEY_D,
    E = sys::GLFW_KEY_E,
    F = sys::GLFW_KEY_F,
    G = sys::GLFW_KEY_G,
    H = sys::GLFW_KEY_H,
    I = sys::GLFW_KEY_I,
    J = sys::GLFW_KEY_J,
    K = sys::GLFW_KEY_K,
    L = sys::GLFW_KEY_L,
    M = sys::GLFW_KEY_M,
    N = sys::GLFW_KEY_N,
    O = sys::GLFW_KEY_O,
    P = sys::GLFW_KEY_P,
    Q = sys::GLFW_KEY_Q,
    R = sys::GLFW_KEY_R,
    S = sys::GLFW_KEY_S,
    T = sys::GLFW_KEY_T,
    U = sys::GLFW_KEY_U,
    V = sys::GLFW_KEY_V,
    W = sys::GLFW_KEY_W,
    X = sys::GLFW_KEY_X,
    Y = sys::GLFW_KEY_Y,
    Z = sys::GLFW_KEY_Z,
    LeftBracket = sys::GLFW_KEY_LEFT_BRACKET,
    Backslash = sys::GLFW_KEY_BACKSLASH,
    RightBracket = sys::GLFW_KEY_RIGHT_BRACKET,

    GraveAccent = sys::GLFW_KEY_GRAVE_ACCENT,

    World1 = sys::GLFW_KEY_WORLD_1,
    World2 = sys::GLFW_KEY_WORLD_2,

    Escape = sys::GLFW_KEY_ESCAPE,
    Enter = sys::GLFW_KEY_ENTER,
    Tab = sys::GLFW_KEY_TAB,
    Backspace = sys::GLFW_KEY_BACKSPACE,
    Insert = sys::GLFW_KEY_INSERT,
    Delete = sys::GLFW_KEY_DELETE,
    Right = sys::GLFW_KEY_RIGHT,
    Left = sys::GLFW_KEY_LEFT,
    Down = sys::GLFW_KEY_DOWN,
    Up = sys::GLFW_KEY_UP,
    PageUp = sys::GLFW_KEY_PAGE_UP,
    PageDown = sys::GLFW_KEY_PAGE_DOWN,
    Home = sys::GLFW_KEY_HOME,
    End = sys::GLFW_KEY_END,

    CapsLock = sys::GLFW_KEY_CAPS_LOCK,
    ScrollLock = sys::GLFW_KEY_SCROLL_LOCK,
    NumLock = sys::GLFW_KEY_NUM_LOCK,
    PrintScreen = sys::GLFW_KEY_PRINT_SCREEN,
    Pause = sys::GLFW_KEY_PAUSE,

    F1 = sys::GLFW_KEY_F1,
    F2 = sys::GLFW_KEY_F2,
    F3 = sys::GLFW_KEY_F3,
    F4 = sys::GLFW_KEY_F4,
    F5 = sys::GLFW_KEY_F5,
    F6 = sys::GLFW_KEY_F6,
    F7 = sys::GLFW_KEY_F7,
    F8 = sys::GLFW_KEY_F8,
    F9 = sys::GLFW_KEY_F9,
    F10 = sys::GLFW_KEY_F10,
    F11 = sys::GLFW_KEY_F11,
    F12 = sys::GLFW_KEY_F12,
    F13 = sys::GLFW_KEY_F13,
    F14 = sys::GLFW_KEY_F14,
    F15 = sys::GLFW_KEY_F15,
    F16 = sys::GLFW_KEY_F16,
    F17 = sys::GLFW_KEY_F17,
    F18 = sys::GLFW_KEY_F18,
    F19 = sys::GLFW_KEY_F19,
    F20 = sys::GLFW_KEY_F20,
    F21 = sys::GLFW_KEY_F21,
    F22 = sys::GLFW_KEY_F22,
    F23 = sys::GLFW_KEY_F23,
    F24 = sys::GLFW_KEY_F24,
    F25 = sys::GLFW_KEY_F25,

    Kp0 = sys::GLFW_KEY_KP_0,
    Kp1 = sys::GLFW_KEY_KP_1,
    Kp2 = sys::GLFW_KEY_KP_2,
    Kp3 = sys::GLFW_KEY_KP_3,
    Kp4 = sys::GLFW_KEY_KP_4,
    Kp5 = sys::GLFW_KEY_KP_5,
    Kp6 = sys::GLFW_KEY_KP_6,
    Kp7 = sys::GLFW_KEY_KP_7,
    Kp8 = sys::GLFW_KEY_KP_8,
    Kp9 = sys::GLFW_KEY_KP_9,
    KpDecimal = sys::GLFW_KEY_KP_DECIMAL,
    KpDivide = sys::GLFW_KEY_KP_DIVIDE,
    KpMultiply = sys::GLFW_KEY_KP_MULTIPLY,
    KpSubtract = sys::GLFW_KEY_KP_SUBTRACT,
    KpAdd = sys::GLFW_KEY_KP_ADD,
    KpEnter = sys::GLFW_KEY_KP_ENTER,
    KpEqual = sys::GLFW_KEY_KP_EQUAL,

    LeftShift = sys::GLFW_KEY_LEFT_SHIFT,
    LeftControl = sys::GLFW_KEY_LEFT_CONTROL,
    LeftAlt = sys::GLFW_KEY_LEFT_ALT,
    LeftSuper = sys::GLFW_KEY_LEFT_SUPER,
    RightShift = sys::GLFW_KEY_RIGHT_SHIFT,
    RightControl = sys::GLFW_KEY_RIGHT_CONTROL,
    RightAlt = sys::GLFW_KEY_RIGHT_ALT,
    RightSuper = sys::GLFW_KEY_RIGHT_SUPER,
    Menu = sys::GLFW_KEY_MENU,

    Unknown = sys::GLFW_KEY_UNKNOWN,
}

impl TryFrom<i32> for Key {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        let ranges = [
            32..=32,
            39..=39,
            44..=57,
            59..=59,
            61..=61,
            65..=93,
            96..=96,
            161..=162,
            256..=269,
            280..=284,
            290..=314,
            320..=336,
            340..=348,
        ];
        for range in ranges {
            if range.contains(&value) {
                return Ok(unsafe { mem::transmute(value) });
            }
        }
        Err(value)
    }
}

impl Key {
    /// Keys outside GLFW's named set (and `GLFW_KEY_UNKNOWN`) map to `Key::Unknown`.
    pub(crate) fn from_raw(value: i32) -> Key {
        Key::try_from(value).unwrap_or(Key::Unknown)
    }
}

pub type Scancode = core::ffi::c_int;

/// Native endian UTF-32
pub type Codepoint = core::ffi::c_uint;

bitflags::bitflags! {
    #[repr(transparent)]
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct Modifiers: i32 {
        const SHIFT     = sys::GLFW_MOD_SHIFT;
        const CONTROL   = sys::GLFW_MOD_CONTROL;
        const ALT       = sys::GLFW_MOD_ALT;
        const SUPER     = sys::GLFW_MOD_SUPER;
        const CAPS_LOCK = sys::GLFW_MOD_CAPS_LOCK;
        const NUM_LOCK  = sys::GLFW_MOD_NUM_LOCK;
    }
}

#[repr(i32)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Action {
    Release = sys::GLFW_RELEASE,
    Press = sys::GLFW_PRESS,
    Repeat = sys::GLFW_REPEAT,
}

impl TryFrom<i32> for Action {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if value >= sys::GLFW_RELEASE && value <= sys::GLFW_REPEAT {
            return Ok(unsafe { mem::transmute(value) });
        }
        Err(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_from_named_codes() {
        assert_eq!(Ok(Key::Escape), Key::try_from(sys::GLFW_KEY_ESCAPE));
        assert_eq!(Ok(Key::A), Key::try_from(sys::GLFW_KEY_A));
        assert_eq!(Ok(Key::Menu), Key::try_from(sys::GLFW_KEY_LAST));
        assert_eq!(Ok(Key::F25), Key::try_from(sys::GLFW_KEY_F25));
    }

    #[test]
    fn key_from_gaps_in_the_table() {
        assert_eq!(Err(40), Key::try_from(40));
        assert_eq!(Err(270), Key::try_from(270));
        assert_eq!(Key::Unknown, Key::from_raw(sys::GLFW_KEY_UNKNOWN));
        assert_eq!(Key::Unknown, Key::from_raw(1000));
    }

    #[test]
    fn action_bounds() {
        assert_eq!(Ok(Action::Repeat), Action::try_from(sys::GLFW_REPEAT));
        assert_eq!(Err(3), Action::try_from(3));
        assert_eq!(Err(-1), Action::try_from(-1));
    }

    #[test]
    fn modifiers_drop_unknown_bits() {
        let mods = Modifiers::from_bits_truncate(sys::GLFW_MOD_SHIFT | sys::GLFW_MOD_ALT | 0x100);
        assert_eq!(Modifiers::SHIFT | Modifiers::ALT, mods);
    }
}
