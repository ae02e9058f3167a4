use crate::config::EngineConfig;

/// Vertices per cell quad.
pub const QUAD_VERTEX_COUNT: usize = 4;

/// Indices per cell quad (two triangles).
pub const QUAD_INDEX_COUNT: usize = 6;

/// Triangle pattern for one quad, relative to its first vertex.
///
/// With the vertex order top-right, top-left, bottom-left, bottom-right both
/// triangles wind counter-clockwise once +Y is flipped up by the projection.
pub const QUAD_INDICES: [u32; QUAD_INDEX_COUNT] = [0, 1, 2, 2, 3, 0];

/// Static mesh for a `cols x rows` grid of quads.
///
/// Built once; positions and indices never change afterwards.
#[derive(Debug, Clone)]
pub struct GridGeometry {
    cols: u32,
    rows: u32,
    positions: Vec<[f32; 2]>,
    indices: Vec<u32>,
}

impl GridGeometry {
    /// Lays out quad `i` at cell `(i % cols, i / cols)`, covering
    /// `[x*(cell+gap), x*(cell+gap)+cell]` on each axis.
    pub fn build(cols: u32, rows: u32, cell_size: u32, gap: u32) -> Self {
        let cell_count = cols as usize * rows as usize;
        let pitch = (cell_size + gap) as f32;
        let size = cell_size as f32;

        let mut positions = Vec::with_capacity(cell_count * QUAD_VERTEX_COUNT);
        let mut indices = Vec::with_capacity(cell_count * QUAD_INDEX_COUNT);

        for i in 0..cell_count {
            let x = (i % cols as usize) as f32;
            let y = (i / cols as usize) as f32;

            let x_min = x * pitch;
            let x_max = x_min + size;
            let y_min = y * pitch;
            let y_max = y_min + size;

            positions.push([x_max, y_min]);
            positions.push([x_min, y_min]);
            positions.push([x_min, y_max]);
            positions.push([x_max, y_max]);

            let base = (i * QUAD_VERTEX_COUNT) as u32;
            indices.extend(QUAD_INDICES.iter().map(|&o| base + o));
        }

        Self {
            cols,
            rows,
            positions,
            indices,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::build(config.cols, config.rows, config.cell_size, config.gap)
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Vertex positions in pixels, four per cell.
    #[inline]
    pub fn positions(&self) -> &[[f32; 2]] {
        &self.positions
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_by_one_grid_has_two_adjacent_quads() {
        let g = GridGeometry::build(2, 1, 5, 0);
        assert_eq!(g.indices().len(), 12);
        assert_eq!(g.positions().len(), 8);

        assert_eq!(
            &g.positions()[..4],
            &[[5.0, 0.0], [0.0, 0.0], [0.0, 5.0], [5.0, 5.0]]
        );
        assert_eq!(
            &g.positions()[4..],
            &[[10.0, 0.0], [5.0, 0.0], [5.0, 5.0], [10.0, 5.0]]
        );
    }

    #[test]
    fn quads_do_not_overlap() {
        let g = GridGeometry::build(2, 1, 5, 0);
        let first_max_x = g.positions()[..4].iter().map(|p| p[0]).fold(f32::MIN, f32::max);
        let second_min_x = g.positions()[4..].iter().map(|p| p[0]).fold(f32::MAX, f32::min);
        assert!(first_max_x <= second_min_x);
    }

    #[test]
    fn index_pattern_is_offset_per_quad() {
        let g = GridGeometry::build(2, 1, 5, 0);
        assert_eq!(g.indices(), &[0, 1, 2, 2, 3, 0, 4, 5, 6, 6, 7, 4]);
        assert_eq!(g.index_count(), 12);
    }

    #[test]
    fn gap_shifts_cells_by_pitch() {
        let g = GridGeometry::build(3, 2, 16, 1);
        // cell (2, 1) -> quad 5; top-left vertex is the second one
        let top_left = g.positions()[5 * QUAD_VERTEX_COUNT + 1];
        assert_eq!(top_left, [34.0, 17.0]);
        let bottom_right = g.positions()[5 * QUAD_VERTEX_COUNT + 3];
        assert_eq!(bottom_right, [50.0, 33.0]);
    }

    #[test]
    fn triangles_wind_counter_clockwise_on_screen() {
        let g = GridGeometry::build(1, 1, 4, 0);
        let p = g.positions();
        for tri in g.indices().chunks(3) {
            let [a, b, c] = [p[tri[0] as usize], p[tri[1] as usize], p[tri[2] as usize]];
            // Signed area with +Y flipped up.
            let area = (b[0] - a[0]) * (-(c[1]) + a[1]) - (-(b[1]) + a[1]) * (c[0] - a[0]);
            assert!(area > 0.0, "triangle {tri:?} is not CCW");
        }
    }
}
