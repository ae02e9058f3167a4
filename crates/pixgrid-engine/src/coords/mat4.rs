use super::Vec2;

/// Column-major 4x4 matrix, laid out the way WGSL `mat4x4<f32>` expects.
pub type Mat4 = [[f32; 4]; 4];

pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Right-handed orthographic projection with a `[0, 1]` depth range (wgpu clip space).
///
/// Passing `bottom = height, top = 0` yields a top-left origin with +Y down.
pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let rcp_width = 1.0 / (right - left);
    let rcp_height = 1.0 / (top - bottom);
    let r = 1.0 / (near - far);
    [
        [2.0 * rcp_width, 0.0, 0.0, 0.0],
        [0.0, 2.0 * rcp_height, 0.0, 0.0],
        [0.0, 0.0, r, 0.0],
        [
            -(left + right) * rcp_width,
            -(top + bottom) * rcp_height,
            r * near,
            1.0,
        ],
    ]
}

/// Translation by `offset` in the XY plane.
pub fn translation(offset: Vec2) -> Mat4 {
    let mut m = IDENTITY;
    m[3][0] = offset.x;
    m[3][1] = offset.y;
    m
}

/// Returns `a * b`.
pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [[0.0f32; 4]; 4];
    for (col, out_col) in out.iter_mut().enumerate() {
        for (row, cell) in out_col.iter_mut().enumerate() {
            *cell = (0..4).map(|k| a[k][row] * b[col][k]).sum();
        }
    }
    out
}

/// Transforms the point `(p.x, p.y, 0, 1)` and returns clip-space `(x, y)`.
#[cfg(test)]
pub(crate) fn transform_point(m: &Mat4, p: Vec2) -> Vec2 {
    Vec2::new(
        m[0][0] * p.x + m[1][0] * p.y + m[3][0],
        m[0][1] * p.x + m[1][1] * p.y + m[3][1],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5
    }

    #[test]
    fn ortho_maps_window_corners_to_ndc() {
        let m = ortho(0.0, 200.0, 100.0, 0.0, 0.0, 1.0);
        assert!(close(transform_point(&m, Vec2::new(0.0, 0.0)), Vec2::new(-1.0, 1.0)));
        assert!(close(transform_point(&m, Vec2::new(200.0, 100.0)), Vec2::new(1.0, -1.0)));
        assert!(close(transform_point(&m, Vec2::new(100.0, 50.0)), Vec2::zero()));
    }

    #[test]
    fn ortho_keeps_z_zero_inside_depth_range() {
        let m = ortho(0.0, 10.0, 10.0, 0.0, 0.0, 1.0);
        // z' = m[2][2] * 0 + m[3][2]
        assert_eq!(m[3][2], 0.0);
    }

    #[test]
    fn mul_with_identity_is_noop() {
        let m = ortho(0.0, 64.0, 32.0, 0.0, 0.0, 1.0);
        assert_eq!(mul(&m, &IDENTITY), m);
        assert_eq!(mul(&IDENTITY, &m), m);
    }

    #[test]
    fn translation_is_applied_before_projection() {
        let proj = ortho(0.0, 200.0, 100.0, 0.0, 0.0, 1.0);
        let m = mul(&proj, &translation(Vec2::new(100.0, 50.0)));
        assert!(close(transform_point(&m, Vec2::zero()), Vec2::zero()));
    }
}
