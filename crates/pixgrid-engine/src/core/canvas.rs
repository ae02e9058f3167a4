use crate::config::{ConfigError, EngineConfig};
use crate::coords::Vec2;
use crate::grid::{CellBuffer, GridError, GridLayout};
use crate::input::{InputSource, InputState, InputTracker, Key, MouseButton};
use crate::paint::{PackedRgb, Rgb};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Phase {
    /// Between frames.
    Ready,
    /// Between `frame_begin` and `frame_end`.
    InFrame,
}

/// What the presenter has to do at the end of a frame.
#[derive(Debug)]
pub struct FramePlan<'a> {
    /// Full vertex color buffer when any cell changed this frame.
    pub colors: Option<&'a [Rgb]>,
    /// Clear color for the frame.
    pub clear: Rgb,
}

/// Platform-independent engine state.
///
/// Owns the cell colors, the input snapshots, the layout, and the background
/// color, and enforces the frame protocol. [`Engine`](super::Engine) drives a
/// `Canvas` with real window input and GPU presentation; tests drive it
/// directly.
#[derive(Debug, Clone)]
pub struct Canvas {
    cells: CellBuffer,
    input: InputTracker,
    layout: GridLayout,
    background: Rgb,
    phase: Phase,
}

impl Canvas {
    pub fn new(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            cells: CellBuffer::new(config.cols, config.rows, config.cell_color),
            input: InputTracker::new(),
            layout: GridLayout::new(config),
            background: Rgb::decode(config.background),
            phase: Phase::Ready,
        })
    }

    #[inline]
    pub fn cells(&self) -> &CellBuffer {
        &self.cells
    }

    #[inline]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Starts a frame: snapshots input from `source` and clears the dirty flag.
    ///
    /// # Panics
    /// If a frame is already in progress.
    pub fn frame_begin(&mut self, source: &impl InputSource) {
        assert_eq!(self.phase, Phase::Ready, "frame_begin called twice without frame_end");
        self.input.poll(source);
        self.cells.reset_dirty();
        self.phase = Phase::InFrame;
    }

    /// Ends a frame: hands the frame plan to `present`, then commits input.
    ///
    /// Input is committed after presenting so that `Pressed`/`Released` are
    /// observable for exactly one frame.
    ///
    /// # Panics
    /// If no frame is in progress.
    pub fn frame_end<F>(&mut self, present: F)
    where
        F: FnOnce(&FramePlan<'_>),
    {
        assert_eq!(self.phase, Phase::InFrame, "frame_end called without frame_begin");

        let plan = FramePlan {
            colors: self.cells.is_dirty().then(|| self.cells.vertex_colors()),
            clear: self.background,
        };
        present(&plan);

        self.input.commit();
        self.phase = Phase::Ready;
    }

    /// Applies a framebuffer resize; returns whether the projection changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        self.layout.resize(width, height)
    }

    pub fn set_background(&mut self, color: PackedRgb) {
        self.background = Rgb::decode(color);
    }

    pub fn set_cell(&mut self, x: i32, y: i32, color: PackedRgb) -> Result<(), GridError> {
        self.cells.set(x, y, color)
    }

    pub fn get_cell(&self, x: i32, y: i32) -> Result<PackedRgb, GridError> {
        self.cells.get(x, y)
    }

    #[inline]
    pub fn key_state(&self, key: Key) -> InputState {
        self.input.key(key)
    }

    #[inline]
    pub fn button_state(&self, button: MouseButton) -> InputState {
        self.input.button(button)
    }

    /// Cell under `pointer` (framebuffer pixels), if any.
    pub fn hovered_cell(&self, pointer: Option<Vec2>) -> Option<(i32, i32)> {
        pointer.and_then(|p| self.layout.cell_at(p))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::input::InputId;
    use crate::paint::palette::{BLUE, CELL_DEFAULT, GREEN, RED};

    #[derive(Default)]
    struct Held(HashSet<InputId>);

    impl InputSource for Held {
        fn is_down(&self, id: InputId) -> bool {
            self.0.contains(&id)
        }
    }

    fn canvas() -> Canvas {
        let config = EngineConfig::default()
            .with_grid(80, 40)
            .with_cell_size(16)
            .with_gap(1);
        Canvas::new(&config).unwrap()
    }

    /// Runs one frame and returns whether colors were handed to the presenter.
    fn end_frame(c: &mut Canvas) -> bool {
        let mut uploaded = false;
        c.frame_end(|plan| uploaded = plan.colors.is_some());
        uploaded
    }

    #[test]
    fn rejects_invalid_config() {
        let config = EngineConfig::default().with_grid(0, 0);
        assert!(Canvas::new(&config).is_err());
    }

    #[test]
    fn green_cell_round_trip_without_redundant_upload() {
        let mut c = canvas();
        let idle = Held::default();

        c.frame_begin(&idle);
        c.set_cell(0, 0, GREEN).unwrap();
        assert!(c.cells().is_dirty());
        assert!(end_frame(&mut c));

        c.frame_begin(&idle);
        assert_eq!(c.get_cell(0, 0), Ok(Rgb::decode(GREEN).encode()));
        c.set_cell(0, 0, GREEN).unwrap();
        assert!(!c.cells().is_dirty());
        assert!(!end_frame(&mut c));
    }

    #[test]
    fn writes_are_visible_within_the_frame() {
        let mut c = canvas();
        c.frame_begin(&Held::default());
        c.set_cell(5, 7, RED).unwrap();
        assert_eq!(c.get_cell(5, 7), Ok(RED));
        c.set_cell(5, 7, BLUE).unwrap();
        assert_eq!(c.get_cell(5, 7), Ok(BLUE));
        end_frame(&mut c);
    }

    #[test]
    fn dirty_flag_resets_each_frame() {
        let mut c = canvas();
        c.frame_begin(&Held::default());
        c.set_cell(1, 1, RED).unwrap();
        assert!(end_frame(&mut c));

        c.frame_begin(&Held::default());
        assert!(!c.cells().is_dirty());
        assert!(!end_frame(&mut c));
    }

    #[test]
    fn out_of_bounds_leaves_grid_untouched() {
        let mut c = canvas();
        c.frame_begin(&Held::default());
        assert!(matches!(c.set_cell(80, 0, RED), Err(GridError::OutOfBounds { .. })));
        assert!(matches!(c.get_cell(0, 40), Err(GridError::OutOfBounds { .. })));
        assert_eq!(c.get_cell(0, 1), Ok(CELL_DEFAULT));
        assert!(!end_frame(&mut c));
    }

    #[test]
    fn key_edges_follow_frames() {
        let mut c = canvas();
        let w_down = Held([InputId::from(Key::W)].into_iter().collect());

        c.frame_begin(&w_down);
        assert_eq!(c.key_state(Key::W), InputState::Pressed);
        end_frame(&mut c);

        c.frame_begin(&w_down);
        assert_eq!(c.key_state(Key::W), InputState::Down);
        end_frame(&mut c);

        c.frame_begin(&Held::default());
        assert_eq!(c.key_state(Key::W), InputState::Released);
        end_frame(&mut c);

        c.frame_begin(&Held::default());
        assert_eq!(c.key_state(Key::W), InputState::Up);
        end_frame(&mut c);
    }

    #[test]
    fn buttons_are_tracked_independently() {
        let mut c = canvas();
        let left = Held([InputId::from(MouseButton::Left)].into_iter().collect());
        c.frame_begin(&left);
        assert_eq!(c.button_state(MouseButton::Left), InputState::Pressed);
        assert_eq!(c.button_state(MouseButton::Right), InputState::Up);
        end_frame(&mut c);
    }

    #[test]
    fn background_feeds_clear_color() {
        let mut c = canvas();
        c.set_background(0x102030);
        c.frame_begin(&Held::default());
        let mut clear = None;
        c.frame_end(|plan| clear = Some(plan.clear));
        assert_eq!(clear.map(Rgb::encode), Some(0x102030));
    }

    #[test]
    fn hover_uses_layout_offset() {
        let c = canvas();
        // 30 px margin, split evenly.
        assert_eq!(c.hovered_cell(Some(Vec2::new(16.0, 16.0))), Some((0, 0)));
        assert_eq!(c.hovered_cell(Some(Vec2::new(14.0, 16.0))), None);
        assert_eq!(c.hovered_cell(Some(Vec2::zero())), None);
        assert_eq!(c.hovered_cell(None), None);
    }

    #[test]
    fn resize_keeps_cells_and_input() {
        let mut c = canvas();
        c.frame_begin(&Held::default());
        c.set_cell(3, 3, RED).unwrap();
        end_frame(&mut c);

        assert!(c.resize(2000, 1000));
        assert_eq!(c.get_cell(3, 3), Ok(RED));
        assert_eq!(c.phase, Phase::Ready);
    }

    #[test]
    #[should_panic(expected = "frame_end called without frame_begin")]
    fn frame_end_requires_frame_begin() {
        let mut c = canvas();
        c.frame_end(|_| {});
    }

    #[test]
    #[should_panic(expected = "frame_begin called twice")]
    fn nested_frame_begin_panics() {
        let mut c = canvas();
        c.frame_begin(&Held::default());
        c.frame_begin(&Held::default());
    }
}
