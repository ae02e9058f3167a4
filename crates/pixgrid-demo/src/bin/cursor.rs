//! WASD moves a red cursor one cell per frame and leaves a green trail.

use anyhow::Result;
use pixgrid_engine::logging::{init_logging, LoggingConfig};
use pixgrid_engine::{palette, Engine, EngineConfig, Key};

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(err) = run() {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut engine = Engine::init(EngineConfig::default().with_title("pixgrid cursor"))?;
    let max_x = engine.config().cols as i32 - 1;
    let max_y = engine.config().rows as i32 - 1;

    let (mut x, mut y) = (0i32, 0i32);

    while engine.is_running() {
        engine.frame_begin();

        engine.set_cell(x, y, palette::GREEN)?;

        let held = |key: Key| engine.get_key_state(key).is_held();
        if held(Key::W) {
            y -= 1;
        }
        if held(Key::S) {
            y += 1;
        }
        if held(Key::A) {
            x -= 1;
        }
        if held(Key::D) {
            x += 1;
        }
        x = x.clamp(0, max_x);
        y = y.clamp(0, max_y);

        engine.set_cell(x, y, palette::RED)?;

        engine.frame_end();
    }

    engine.deinit();
    Ok(())
}
