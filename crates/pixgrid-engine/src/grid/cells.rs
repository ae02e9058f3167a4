use crate::paint::{PackedRgb, Rgb};

use super::geometry::QUAD_VERTEX_COUNT;
use super::GridError;

/// CPU-side vertex colors, one flat color per cell replicated over its 4 vertices.
///
/// This buffer is authoritative: writes are visible to reads immediately, and
/// the GPU copy is refreshed wholesale at frame end when [`is_dirty`](Self::is_dirty).
#[derive(Debug, Clone)]
pub struct CellBuffer {
    cols: u32,
    rows: u32,
    colors: Vec<Rgb>,
    dirty: bool,
}

impl CellBuffer {
    /// Creates a buffer with every cell set to `fill`.
    pub fn new(cols: u32, rows: u32, fill: PackedRgb) -> Self {
        let vertices = cols as usize * rows as usize * QUAD_VERTEX_COUNT;
        Self {
            cols,
            rows,
            colors: vec![Rgb::decode(fill); vertices],
            dirty: false,
        }
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.cols && (y as u32) < self.rows
    }

    /// First vertex of cell `(x, y)`: `(y * cols + x) * 4`.
    fn base(&self, x: i32, y: i32) -> Result<usize, GridError> {
        if !self.contains(x, y) {
            return Err(GridError::OutOfBounds {
                x,
                y,
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok((y as usize * self.cols as usize + x as usize) * QUAD_VERTEX_COUNT)
    }

    /// Writes `color` into all four vertices of cell `(x, y)`.
    ///
    /// Marks the buffer dirty only when the color actually changes; rewriting
    /// the same color does not trigger an upload.
    pub fn set(&mut self, x: i32, y: i32, color: PackedRgb) -> Result<(), GridError> {
        let base = self.base(x, y)?;
        let color = Rgb::decode(color);

        let quad = &mut self.colors[base..base + QUAD_VERTEX_COUNT];
        if !quad[0].approx_eq(color) {
            self.dirty = true;
        }
        quad.fill(color);
        Ok(())
    }

    /// Returns the stored color of cell `(x, y)` re-encoded as `0xRRGGBB`.
    pub fn get(&self, x: i32, y: i32) -> Result<PackedRgb, GridError> {
        let base = self.base(x, y)?;
        Ok(self.colors[base].encode())
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[inline]
    pub fn reset_dirty(&mut self) {
        self.dirty = false;
    }

    /// Flat per-vertex colors in upload order.
    #[inline]
    pub fn vertex_colors(&self) -> &[Rgb] {
        &self.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::palette::{BLUE, CELL_DEFAULT, GREEN, RED};

    #[test]
    fn starts_filled_and_clean() {
        let cells = CellBuffer::new(3, 2, CELL_DEFAULT);
        assert_eq!(cells.vertex_colors().len(), 3 * 2 * 4);
        assert!(!cells.is_dirty());
        assert_eq!(cells.get(2, 1), Ok(CELL_DEFAULT));
    }

    #[test]
    fn set_then_get_round_trips_through_codec() {
        let mut cells = CellBuffer::new(4, 4, CELL_DEFAULT);
        for (x, y, c) in [(0, 0, GREEN), (3, 3, 0x123456), (1, 2, 0xFEDCBA)] {
            cells.set(x, y, c).unwrap();
            assert_eq!(cells.get(x, y), Ok(Rgb::decode(c).encode()));
        }
    }

    #[test]
    fn set_replicates_over_all_four_vertices() {
        let mut cells = CellBuffer::new(2, 2, CELL_DEFAULT);
        cells.set(1, 1, RED).unwrap();
        let base = 3 * 4; // cell (1, 1) in a 2-wide grid
        let quad = &cells.vertex_colors()[base..base + 4];
        assert!(quad.iter().all(|c| *c == Rgb::decode(RED)));
    }

    #[test]
    fn out_of_bounds_fails_without_mutation() {
        let mut cells = CellBuffer::new(3, 3, CELL_DEFAULT);
        let before = cells.vertex_colors().to_vec();

        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 3), (i32::MAX, i32::MIN)] {
            assert_eq!(
                cells.set(x, y, BLUE),
                Err(GridError::OutOfBounds { x, y, cols: 3, rows: 3 })
            );
            assert!(cells.get(x, y).is_err());
        }

        assert_eq!(cells.vertex_colors(), &before[..]);
        assert!(!cells.is_dirty());
    }

    #[test]
    fn row_overflow_does_not_wrap_into_next_row() {
        let mut cells = CellBuffer::new(2, 2, CELL_DEFAULT);
        // (2, 0) would alias (0, 1) with unchecked index math.
        assert!(cells.set(2, 0, RED).is_err());
        assert_eq!(cells.get(0, 1), Ok(CELL_DEFAULT));
    }

    #[test]
    fn identical_write_keeps_dirty_clear() {
        let mut cells = CellBuffer::new(2, 2, CELL_DEFAULT);
        cells.set(0, 0, GREEN).unwrap();
        assert!(cells.is_dirty());

        cells.reset_dirty();
        cells.set(0, 0, GREEN).unwrap();
        assert!(!cells.is_dirty());
    }

    #[test]
    fn writing_default_color_is_not_a_change() {
        let mut cells = CellBuffer::new(2, 2, CELL_DEFAULT);
        cells.set(1, 0, CELL_DEFAULT).unwrap();
        assert!(!cells.is_dirty());
    }
}
