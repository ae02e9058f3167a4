use std::fmt;

/// Failure of a bounds-checked cell access.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridError {
    /// `(x, y)` lies outside `[0, cols) x [0, rows)`.
    OutOfBounds { x: i32, y: i32, cols: u32, rows: u32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { x, y, cols, rows } => {
                write!(f, "cell ({x}, {y}) out of bounds for {cols}x{rows} grid")
            }
        }
    }
}

impl std::error::Error for GridError {}
