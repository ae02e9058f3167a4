use super::device::InputSource;
use super::types::{InputId, Key, MouseButton};

/// Per-frame classification of a digital input.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum InputState {
    /// Held last frame and this frame.
    Down,
    /// Not held last frame nor this frame.
    Up,
    /// Went down this frame.
    Pressed,
    /// Went up this frame.
    Released,
}

impl InputState {
    #[inline]
    pub const fn from_frames(last: bool, current: bool) -> Self {
        match (last, current) {
            (true, true) => InputState::Down,
            (false, false) => InputState::Up,
            (false, true) => InputState::Pressed,
            (true, false) => InputState::Released,
        }
    }

    /// True for `Down` and `Pressed`.
    #[inline]
    pub const fn is_held(self) -> bool {
        matches!(self, InputState::Down | InputState::Pressed)
    }
}

/// Two-frame snapshot of every tracked identifier.
///
/// Frame protocol:
/// 1. [`poll`](Self::poll) once at frame begin
/// 2. any number of [`classify`](Self::classify) calls, all seeing the same snapshot
/// 3. [`commit`](Self::commit) once after rendering
///
/// Edge states (`Pressed`/`Released`) are therefore visible for exactly one frame.
#[derive(Debug, Clone)]
pub struct InputTracker {
    last: [bool; InputId::COUNT],
    current: [bool; InputId::COUNT],
}

impl Default for InputTracker {
    fn default() -> Self {
        Self {
            last: [false; InputId::COUNT],
            current: [false; InputId::COUNT],
        }
    }
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the current frame from `source`.
    pub fn poll(&mut self, source: &impl InputSource) {
        for id in InputId::all() {
            self.current[id.index()] = source.is_down(id);
        }
    }

    /// Classifies `id` from the last and current snapshots.
    ///
    /// # Panics
    /// If `id` is outside the tracked range; that is a caller bug, not a
    /// device condition.
    pub fn classify(&self, id: InputId) -> InputState {
        let i = id.index();
        assert!(
            id.is_tracked(),
            "input id {i} outside tracked range 0..{}",
            InputId::COUNT
        );
        InputState::from_frames(self.last[i], self.current[i])
    }

    #[inline]
    pub fn key(&self, key: Key) -> InputState {
        self.classify(key.into())
    }

    #[inline]
    pub fn button(&self, button: MouseButton) -> InputState {
        self.classify(button.into())
    }

    /// Ends the frame: the current snapshot becomes the previous one.
    pub fn commit(&mut self) {
        self.last = self.current;
    }
}
