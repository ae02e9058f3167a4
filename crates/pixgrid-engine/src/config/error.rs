use std::fmt;

/// Rejected engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The grid has no columns or no rows.
    EmptyGrid { cols: u32, rows: u32 },
    /// Cells must be at least one pixel wide.
    ZeroCellSize,
    /// Vertex indices would not fit the `u32` index buffer.
    TooManyCells { cells: u64 },
    /// The window would exceed the `u32` pixel range.
    WindowTooLarge,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyGrid { cols, rows } => {
                write!(f, "grid must have at least one cell, got {cols}x{rows}")
            }
            ConfigError::ZeroCellSize => write!(f, "cell size must be at least one pixel"),
            ConfigError::TooManyCells { cells } => {
                write!(f, "{cells} cells exceed the 32-bit index range")
            }
            ConfigError::WindowTooLarge => write!(f, "window size overflows 32-bit pixels"),
        }
    }
}

impl std::error::Error for ConfigError {}
