//! Cursor moving at a fixed speed in cells per second, plus mouse painting.
//!
//! WASD steers the red cursor. Holding the left mouse button paints the cell
//! under the pointer blue.

use anyhow::Result;
use pixgrid_engine::logging::{init_logging, LoggingConfig};
use pixgrid_engine::time::FrameClock;
use pixgrid_engine::{palette, Engine, EngineConfig, Key, MouseButton};

/// Cursor speed in cells per (scaled) second.
const SPEED: f32 = 16.0;
/// Applied on top of the frame delta.
const TIME_SCALE: f32 = 3.5;

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(err) = run() {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = EngineConfig::default()
        .with_grid(80, 40)
        .with_cell_size(16)
        .with_gap(1)
        .with_title("pixgrid paint");
    let mut engine = Engine::init(config)?;
    let max_x = (engine.config().cols - 1) as f32;
    let max_y = (engine.config().rows - 1) as f32;

    let mut clock = FrameClock::new();
    let (mut x, mut y) = (0.0f32, 0.0f32);

    while engine.is_running() {
        engine.frame_begin();
        let step = SPEED * clock.tick() * TIME_SCALE;

        engine.set_cell(x as i32, y as i32, palette::GREEN)?;

        let held = |key: Key| engine.get_key_state(key).is_held();
        if held(Key::W) {
            y -= step;
        }
        if held(Key::S) {
            y += step;
        }
        if held(Key::A) {
            x -= step;
        }
        if held(Key::D) {
            x += step;
        }
        x = x.clamp(0.0, max_x);
        y = y.clamp(0.0, max_y);

        engine.set_cell(x as i32, y as i32, palette::RED)?;

        if engine.get_button_state(MouseButton::Left).is_held() {
            if let Some((hx, hy)) = engine.get_hovered_cell() {
                engine.set_cell(hx, hy, palette::BLUE)?;
            }
        }

        engine.frame_end();
    }

    engine.deinit();
    Ok(())
}
