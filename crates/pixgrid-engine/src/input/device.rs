use crate::coords::Vec2;

use super::types::{
    InputEvent,
    InputId,
    KeyState,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};

/// Digital input capability: "is this identifier held right now?"
///
/// [`InputTracker::poll`](super::InputTracker::poll) queries every tracked id
/// through this trait once per frame.
pub trait InputSource {
    fn is_down(&self, id: InputId) -> bool;
}

/// Live input state for the window, updated as platform events arrive.
///
/// Several physical keys can share one identifier (left/right Shift, both
/// Enter keys), so each id counts the sources currently holding it and stays
/// down until the last one is released. Ids outside the tracked range (exotic
/// mouse buttons) are ignored.
#[derive(Debug, Clone)]
pub struct DeviceInput {
    held: [u8; InputId::COUNT],

    /// Pointer position in physical pixels; `None` while outside the window.
    pointer_pos: Option<Vec2>,
}

impl Default for DeviceInput {
    fn default() -> Self {
        Self {
            held: [0; InputId::COUNT],
            pointer_pos: None,
        }
    }
}

impl DeviceInput {
    /// Applies a platform-agnostic input event to the live state.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::Focused(focused) => {
                if !*focused {
                    // The matching release events go to whichever window took focus.
                    self.held = [0; InputId::COUNT];
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some(Vec2::new(*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key { repeat: true, .. } => {}

            InputEvent::Key { key, state, .. } => {
                self.update((*key).into(), *state == KeyState::Pressed);
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state }) => {
                self.update((*button).into(), *state == MouseButtonState::Pressed);
            }
        }
    }

    fn update(&mut self, id: InputId, pressed: bool) {
        let Some(count) = self.held.get_mut(id.index()) else {
            log::trace!("ignoring untracked input id {}", id.index());
            return;
        };
        *count = if pressed {
            count.saturating_add(1)
        } else {
            count.saturating_sub(1)
        };
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer_pos
    }
}

impl InputSource for DeviceInput {
    #[inline]
    fn is_down(&self, id: InputId) -> bool {
        self.held.get(id.index()).is_some_and(|&n| n > 0)
    }
}
