use crate::config::EngineConfig;
use crate::coords::mat4::{self, Mat4};
use crate::coords::Vec2;

/// Placement of the fixed-size grid inside the framebuffer.
///
/// Recomputed on resize. The offset centers the grid and is negative on an axis
/// where the framebuffer is smaller than the grid; the grid then overflows
/// evenly on both sides.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    cols: u32,
    rows: u32,
    pitch: f32,
    grid_size: Vec2,
    framebuffer: (u32, u32),
    offset: Vec2,
    proj_view: Mat4,
}

impl GridLayout {
    /// Lays the grid out in a framebuffer of the configured window size.
    pub fn new(config: &EngineConfig) -> Self {
        let (grid_w, grid_h) = config.grid_pixels();
        let (win_w, win_h) = config.window_size();

        let mut layout = Self {
            cols: config.cols,
            rows: config.rows,
            pitch: config.pitch() as f32,
            grid_size: Vec2::new(grid_w as f32, grid_h as f32),
            framebuffer: (0, 0),
            offset: Vec2::zero(),
            proj_view: mat4::IDENTITY,
        };
        layout.resize(win_w, win_h);
        layout
    }

    /// Recomputes offset and projection for a framebuffer of `width x height`.
    ///
    /// Zero-sized framebuffers (minimized windows) are ignored; returns whether
    /// the layout changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 || self.framebuffer == (width, height) {
            return false;
        }

        let (w, h) = (width as f32, height as f32);
        self.framebuffer = (width, height);
        self.offset = Vec2::new((w - self.grid_size.x) / 2.0, (h - self.grid_size.y) / 2.0);

        let proj = mat4::ortho(0.0, w, h, 0.0, 0.0, 1.0);
        self.proj_view = mat4::mul(&proj, &mat4::translation(self.offset));
        true
    }

    /// Projection times centering translation, for the vertex shader.
    #[inline]
    pub fn projection(&self) -> Mat4 {
        self.proj_view
    }

    /// Maps a framebuffer pixel to the cell under it.
    ///
    /// Floors `(pointer - offset) / (cell + gap)` per axis, so positions left of
    /// or above the grid never land in row/column 0. A position in the gap
    /// after a cell reports that cell.
    pub fn cell_at(&self, pointer: Vec2) -> Option<(i32, i32)> {
        let rel = pointer - self.offset;
        let x = (rel.x / self.pitch).floor();
        let y = (rel.y / self.pitch).floor();

        let inside = x >= 0.0 && y >= 0.0 && x < self.cols as f32 && y < self.rows as f32;
        inside.then_some((x as i32, y as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::mat4::transform_point;

    fn config() -> EngineConfig {
        EngineConfig::default().with_grid(80, 40).with_cell_size(16).with_gap(1)
    }

    #[test]
    fn initial_layout_centers_grid_in_margin() {
        let layout = GridLayout::new(&config());
        assert_eq!(layout.framebuffer, (1359 + 30, 679 + 30));
        assert_eq!(layout.offset, Vec2::new(15.0, 15.0));
    }

    #[test]
    fn resize_recenters() {
        let mut layout = GridLayout::new(&config());
        assert!(layout.resize(1559, 779));
        assert_eq!(layout.offset, Vec2::new(100.0, 50.0));
        assert!(!layout.resize(1559, 779));
    }

    #[test]
    fn zero_size_is_ignored() {
        let mut layout = GridLayout::new(&config());
        let before = layout.clone();
        assert!(!layout.resize(0, 600));
        assert_eq!(layout, before);
    }

    #[test]
    fn smaller_window_gives_negative_offset() {
        let mut layout = GridLayout::new(&config());
        layout.resize(1159, 579);
        assert_eq!(layout.offset, Vec2::new(-100.0, -50.0));
        // Window origin sits inside the grid now.
        assert_eq!(layout.cell_at(Vec2::zero()), Some((5, 2)));
    }

    #[test]
    fn hover_inside_first_cell() {
        let layout = GridLayout::new(&config());
        let off = layout.offset;
        assert_eq!(layout.cell_at(off), Some((0, 0)));
        assert_eq!(layout.cell_at(off + Vec2::new(15.5, 15.5)), Some((0, 0)));
        assert_eq!(layout.cell_at(off + Vec2::new(17.0, 0.0)), Some((1, 0)));
    }

    #[test]
    fn hover_outside_grid_is_none() {
        let layout = GridLayout::new(&config());
        let off = layout.offset;
        for p in [
            Vec2::zero(),
            off - Vec2::new(1.0, 0.0),
            off - Vec2::new(0.0, 0.5),
            off + Vec2::new(80.0 * 17.0, 0.0),
            off + Vec2::new(0.0, 40.0 * 17.0),
        ] {
            assert_eq!(layout.cell_at(p), None, "{p:?}");
        }
    }

    #[test]
    fn hover_last_cell() {
        let layout = GridLayout::new(&config());
        let p = layout.offset + Vec2::new(79.0 * 17.0 + 3.0, 39.0 * 17.0 + 3.0);
        assert_eq!(layout.cell_at(p), Some((79, 39)));
    }

    #[test]
    fn projection_maps_grid_center_to_screen_center() {
        let cfg = EngineConfig {
            margin: 0,
            ..EngineConfig::default().with_grid(10, 10).with_cell_size(10)
        };
        let mut layout = GridLayout::new(&cfg);
        layout.resize(200, 100);
        // Grid center (50, 50) sits at framebuffer center once offset is applied.
        let ndc = transform_point(&layout.projection(), Vec2::new(50.0, 50.0));
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5, "{ndc:?}");
    }
}
