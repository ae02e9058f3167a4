use crate::paint::palette;
use crate::paint::PackedRgb;

use super::ConfigError;

/// Engine configuration.
///
/// Grid dimensions are fixed for the lifetime of an engine; changing them means
/// building a new engine. `Default` reproduces the classic 320x240 grid of
/// 5 px cells with no gap.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Number of cells on the X axis.
    pub cols: u32,
    /// Number of cells on the Y axis.
    pub rows: u32,
    /// Edge length of one cell in pixels.
    pub cell_size: u32,
    /// Pixels left empty between neighbouring cells.
    pub gap: u32,
    /// Synchronize presentation with the display refresh.
    pub vsync: bool,
    /// Initial clear color.
    pub background: PackedRgb,
    /// Initial color of every cell.
    pub cell_color: PackedRgb,
    pub title: String,
    /// Extra window pixels around the grid (split evenly on both sides).
    pub margin: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cols: 320,
            rows: 240,
            cell_size: 5,
            gap: 0,
            vsync: false,
            background: palette::BACKGROUND_DEFAULT,
            cell_color: palette::CELL_DEFAULT,
            title: "pixgrid".to_string(),
            margin: 30,
        }
    }
}

impl EngineConfig {
    pub fn with_grid(mut self, cols: u32, rows: u32) -> Self {
        self.cols = cols;
        self.rows = rows;
        self
    }

    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    pub fn with_background(mut self, color: PackedRgb) -> Self {
        self.background = color;
        self
    }

    pub fn with_cell_color(mut self, color: PackedRgb) -> Self {
        self.cell_color = color;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Checks that the grid is non-empty and fits the GPU index and window ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(ConfigError::EmptyGrid {
                cols: self.cols,
                rows: self.rows,
            });
        }
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        let cells = self.cols as u64 * self.rows as u64;
        // Six u32 indices per cell; the index count itself must fit a u32.
        if cells * 6 > u32::MAX as u64 {
            return Err(ConfigError::TooManyCells { cells });
        }

        let pitch = self.cell_size as u64 + self.gap as u64;
        let max_axis = self.cols.max(self.rows) as u64;
        if max_axis * pitch + self.margin as u64 > u32::MAX as u64 {
            return Err(ConfigError::WindowTooLarge);
        }

        Ok(())
    }

    /// Distance in pixels between the origins of neighbouring cells.
    #[inline]
    pub fn pitch(&self) -> u32 {
        self.cell_size + self.gap
    }

    /// Size of the drawn grid in pixels: `n * (cell + gap) - gap` per axis.
    pub fn grid_pixels(&self) -> (u32, u32) {
        let pitch = self.pitch();
        (
            (self.cols * pitch).saturating_sub(self.gap),
            (self.rows * pitch).saturating_sub(self.gap),
        )
    }

    /// Initial window size: the grid plus the margin.
    pub fn window_size(&self) -> (u32, u32) {
        let (w, h) = self.grid_pixels();
        (w + self.margin, h + self.margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_classic_grid() {
        let cfg = EngineConfig::default();
        assert_eq!((cfg.cols, cfg.rows, cfg.cell_size, cfg.gap), (320, 240, 5, 0));
        assert_eq!(cfg.grid_pixels(), (1600, 1200));
        assert_eq!(cfg.window_size(), (1630, 1230));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn grid_pixels_drop_trailing_gap() {
        let cfg = EngineConfig::default().with_grid(80, 40).with_cell_size(16).with_gap(1);
        assert_eq!(cfg.pitch(), 17);
        assert_eq!(cfg.grid_pixels(), (80 * 17 - 1, 40 * 17 - 1));
    }

    #[test]
    fn validate_rejects_empty_grid() {
        let cfg = EngineConfig::default().with_grid(0, 10);
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyGrid { cols: 0, rows: 10 }));
    }

    #[test]
    fn validate_rejects_zero_cell_size() {
        let cfg = EngineConfig::default().with_cell_size(0);
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroCellSize));
    }

    #[test]
    fn validate_rejects_index_overflow() {
        let cfg = EngineConfig::default().with_grid(65_536, 65_536).with_cell_size(1);
        assert!(matches!(cfg.validate(), Err(ConfigError::TooManyCells { .. })));
    }

    #[test]
    fn validate_rejects_huge_window() {
        let cfg = EngineConfig::default().with_grid(10, 10).with_cell_size(u32::MAX / 4);
        assert_eq!(cfg.validate(), Err(ConfigError::WindowTooLarge));
    }
}
