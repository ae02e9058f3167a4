//! Named packed colors.

use super::PackedRgb;

pub const BLACK: PackedRgb = 0x000000;
pub const WHITE: PackedRgb = 0xFFFFFF;
pub const RED: PackedRgb = 0xFF0000;
pub const GREEN: PackedRgb = 0x00FF00;
pub const BLUE: PackedRgb = 0x0000FF;

/// Clear color used until the application calls `set_background`.
pub const BACKGROUND_DEFAULT: PackedRgb = 0x252525;

/// Color every cell starts with.
pub const CELL_DEFAULT: PackedRgb = 0xDDDDDD;
