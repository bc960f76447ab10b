use std::fmt;

/// Keyboard key identifier.
///
/// Covers the keys applications commonly bind. Anything else maps to
/// `Key::Unknown(u32)` carrying the platform key code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

/// Short upper-case names used in diagnostics ("UP", "W", "SPACE").
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Escape => f.write_str("ESCAPE"),
            Key::Enter => f.write_str("ENTER"),
            Key::Space => f.write_str("SPACE"),
            Key::ArrowUp => f.write_str("UP"),
            Key::ArrowDown => f.write_str("DOWN"),
            Key::ArrowLeft => f.write_str("LEFT"),
            Key::ArrowRight => f.write_str("RIGHT"),
            Key::Unknown(code) => write!(f, "UNKNOWN({code})"),
            letter => fmt::Debug::fmt(letter, f),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
    },

    /// Window focus change.
    Focused(bool),
}
