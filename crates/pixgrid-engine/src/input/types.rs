/// Keyboard key identifier.
///
/// The runtime maps platform key codes into these variants. Keys without a
/// variant are dropped during translation; the identifier range stays fixed so
/// per-frame state fits in flat arrays.
#[repr(u16)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    // Common control keys
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Modifiers as keys; left and right variants share one identifier
    Shift,
    Control,
    Alt,
    Meta,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Digits
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    // Function keys
    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,
}

impl Key {
    /// Number of key identifiers.
    pub const COUNT: usize = Key::F12 as usize + 1;
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    /// Extra buttons; only `Other(0)..Other(MouseButton::EXTRA_SLOTS)` are tracked.
    Other(u16),
}

impl MouseButton {
    /// Number of `Other(n)` buttons with their own identifier.
    pub const EXTRA_SLOTS: usize = 3;

    /// Number of button identifiers.
    pub const COUNT: usize = 5 + Self::EXTRA_SLOTS;

    fn slot(self) -> usize {
        match self {
            MouseButton::Left => 0,
            MouseButton::Right => 1,
            MouseButton::Middle => 2,
            MouseButton::Back => 3,
            MouseButton::Forward => 4,
            MouseButton::Other(n) => 5 + n as usize,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Identifier in the shared key/button space.
///
/// Keys occupy `0..Key::COUNT`, mouse buttons follow. Ids at or above
/// [`InputId::COUNT`] are representable (e.g. `MouseButton::Other(200)`) but
/// have no state slot.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct InputId(usize);

impl InputId {
    /// Size of the tracked identifier range.
    pub const COUNT: usize = Key::COUNT + MouseButton::COUNT;

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_tracked(self) -> bool {
        self.0 < Self::COUNT
    }

    /// Iterates every tracked identifier.
    pub fn all() -> impl Iterator<Item = InputId> {
        (0..Self::COUNT).map(InputId)
    }
}

impl From<Key> for InputId {
    #[inline]
    fn from(key: Key) -> Self {
        InputId(key as usize)
    }
}

impl From<MouseButton> for InputId {
    #[inline]
    fn from(button: MouseButton) -> Self {
        InputId(Key::COUNT + button.slot())
    }
}

/// Pointer move event in physical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        /// Auto-repeat while held; does not count as another press.
        repeat: bool,
    },

    PointerMoved(PointerMoveEvent),
    PointerButton(PointerButtonEvent),

    /// Pointer left the window surface.
    PointerLeft,

    /// Window focus change.
    Focused(bool),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_and_buttons_do_not_overlap() {
        let last_key = InputId::from(Key::F12);
        let first_button = InputId::from(MouseButton::Left);
        assert_eq!(last_key.index() + 1, first_button.index());
    }

    #[test]
    fn tracked_range_covers_extra_buttons() {
        assert!(InputId::from(MouseButton::Other(0)).is_tracked());
        let last = MouseButton::Other(MouseButton::EXTRA_SLOTS as u16 - 1);
        assert_eq!(InputId::from(last).index(), InputId::COUNT - 1);
        assert!(!InputId::from(MouseButton::Other(MouseButton::EXTRA_SLOTS as u16)).is_tracked());
    }

    #[test]
    fn all_yields_every_slot_once() {
        assert_eq!(InputId::all().count(), InputId::COUNT);
    }
}
