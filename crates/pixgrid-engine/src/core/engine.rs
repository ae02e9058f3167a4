use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;

use crate::config::EngineConfig;
use crate::device::{GpuInit, SurfaceErrorAction};
use crate::grid::{GridError, GridGeometry};
use crate::input::{InputState, Key, MouseButton};
use crate::paint::PackedRgb;
use crate::render::{GridRenderer, RenderTarget};
use crate::window::{Runtime, WindowConfig};

use super::Canvas;

/// Pixel grid engine: one window, one grid, one draw per frame.
///
/// ```no_run
/// use pixgrid_engine::core::Engine;
/// use pixgrid_engine::config::EngineConfig;
///
/// let mut engine = Engine::init(EngineConfig::default())?;
/// while engine.is_running() {
///     engine.frame_begin();
///     engine.set_cell(0, 0, 0xFF0000)?;
///     engine.frame_end();
/// }
/// engine.deinit();
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct Engine {
    config: EngineConfig,
    canvas: Canvas,
    renderer: GridRenderer,
    // Dropped last: GPU resources above belong to the device it owns.
    runtime: Runtime,
    fatal: bool,
}

impl Engine {
    /// Validates `config`, opens the window and prepares the GPU buffers.
    pub fn init(config: EngineConfig) -> Result<Self> {
        let canvas = Canvas::new(&config).context("invalid engine configuration")?;

        let (width, height) = config.window_size();
        let window = WindowConfig {
            title: config.title.clone(),
            initial_size: PhysicalSize::new(width, height),
        };
        let mut runtime = Runtime::new(window, GpuInit::default().with_vsync(config.vsync))?;

        let geometry = GridGeometry::from_config(&config);
        let renderer = runtime
            .with_surface(|_, gpu| {
                GridRenderer::new(
                    gpu.device(),
                    gpu.surface_format(),
                    &geometry,
                    canvas.cells().vertex_colors(),
                    canvas.layout().projection(),
                )
            })
            .context("window closed during initialization")?;

        let mut engine = Self {
            config,
            canvas,
            renderer,
            runtime,
            fatal: false,
        };
        engine.apply_resize();

        log::info!(
            "engine ready: {}x{} cells, {} px cells, gap {}",
            engine.config.cols,
            engine.config.rows,
            engine.config.cell_size,
            engine.config.gap
        );
        Ok(engine)
    }

    /// Releases the window and all GPU resources.
    pub fn deinit(self) {
        log::info!("engine shutting down");
        drop(self);
    }

    /// Configuration the engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// False once the window was asked to close or presentation failed fatally.
    pub fn is_running(&self) -> bool {
        !self.fatal && !self.runtime.close_requested()
    }

    /// Pumps platform events and snapshots input for this frame.
    ///
    /// # Panics
    /// If the previous frame was not ended.
    pub fn frame_begin(&mut self) {
        self.runtime.poll_events();
        self.apply_resize();
        self.canvas.frame_begin(self.runtime.input());
    }

    /// Uploads changed colors, draws the grid and presents it.
    ///
    /// # Panics
    /// If no frame is in progress.
    pub fn frame_end(&mut self) {
        let Self {
            canvas,
            renderer,
            runtime,
            fatal,
            ..
        } = self;

        canvas.frame_end(|plan| {
            let presented = runtime.with_surface(|window, gpu| {
                if let Some(colors) = plan.colors {
                    renderer.upload_colors(gpu.queue(), colors);
                }

                let mut frame = match gpu.begin_frame() {
                    Ok(frame) => frame,
                    Err(err) => return gpu.handle_surface_error(err) != SurfaceErrorAction::Fatal,
                };

                let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
                renderer.draw(&mut target, plan.clear);

                window.pre_present_notify();
                gpu.submit(frame);
                true
            });

            match presented {
                Some(true) => {}
                Some(false) => {
                    log::error!("surface lost beyond recovery, stopping");
                    *fatal = true;
                }
                None => {
                    log::error!("window is gone, stopping");
                    *fatal = true;
                }
            }
        });
    }

    pub fn set_background(&mut self, color: PackedRgb) {
        self.canvas.set_background(color);
    }

    /// Sets the color of cell `(x, y)`.
    pub fn set_cell(&mut self, x: i32, y: i32, color: PackedRgb) -> Result<(), GridError> {
        self.canvas.set_cell(x, y, color)
    }

    /// Color of cell `(x, y)` as `0xRRGGBB`.
    pub fn get_cell(&self, x: i32, y: i32) -> Result<PackedRgb, GridError> {
        self.canvas.get_cell(x, y)
    }

    pub fn get_key_state(&self, key: Key) -> InputState {
        self.canvas.key_state(key)
    }

    pub fn get_button_state(&self, button: MouseButton) -> InputState {
        self.canvas.button_state(button)
    }

    /// Cell under the pointer, `None` outside the grid or the window.
    pub fn get_hovered_cell(&self) -> Option<(i32, i32)> {
        self.canvas.hovered_cell(self.runtime.input().pointer())
    }

    fn apply_resize(&mut self) {
        let Some(size) = self.runtime.take_resize() else {
            return;
        };
        if !self.canvas.resize(size.width, size.height) {
            return;
        }

        log::debug!("framebuffer resized to {}x{}", size.width, size.height);
        let projection = self.canvas.layout().projection();
        let renderer = &self.renderer;
        self.runtime
            .with_surface(|_, gpu| renderer.write_projection(gpu.queue(), projection));
    }
}
