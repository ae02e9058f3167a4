use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use crate::device::{Gpu, GpuInit};
use crate::input::platform::winit::translate_window_event;
use crate::input::DeviceInput;

/// Upper bound for the platform to deliver `resumed` and let us create the window.
const WINDOW_CREATE_TIMEOUT: Duration = Duration::from_secs(5);

/// Window configuration.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    /// Inner size in physical pixels; the grid is laid out in physical pixels.
    pub initial_size: PhysicalSize<u32>,
}

/// Single-window platform runtime driven by the caller's frame loop.
///
/// Instead of handing control to `EventLoop::run_app`, pending events are
/// pumped without blocking from [`poll_events`](Self::poll_events), once per
/// frame.
pub struct Runtime {
    // Declared first so the window is dropped before its event loop.
    host: Host,
    event_loop: EventLoop<()>,
    exited: bool,
}

impl Runtime {
    /// Creates the event loop, the window and its GPU context.
    pub fn new(config: WindowConfig, gpu_init: GpuInit) -> Result<Self> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;

        let mut runtime = Self {
            host: Host::new(config, gpu_init),
            event_loop,
            exited: false,
        };

        // The window can only be created from inside the event loop, on `resumed`.
        let deadline = Instant::now() + WINDOW_CREATE_TIMEOUT;
        while runtime.host.entry.is_none() {
            if let Some(err) = runtime.host.init_error.take() {
                return Err(err);
            }
            anyhow::ensure!(!runtime.exited, "event loop exited before the window was created");
            anyhow::ensure!(
                Instant::now() < deadline,
                "timed out waiting for the window to be created"
            );
            runtime.pump(Some(Duration::from_millis(10)));
        }

        Ok(runtime)
    }

    fn pump(&mut self, timeout: Option<Duration>) {
        if self.exited {
            return;
        }
        if let PumpStatus::Exit(code) = self.event_loop.pump_app_events(timeout, &mut self.host) {
            log::debug!("event loop exited with code {code}");
            self.exited = true;
        }
    }

    /// Processes all pending platform events without waiting.
    pub fn poll_events(&mut self) {
        self.pump(Some(Duration::ZERO));
    }

    /// True once the user asked to close the window or the loop has exited.
    pub fn close_requested(&self) -> bool {
        self.host.close_requested || self.exited
    }

    /// Live input state, updated by [`poll_events`](Self::poll_events).
    pub fn input(&self) -> &DeviceInput {
        &self.host.input
    }

    /// Returns the latest framebuffer size if it changed since the last call.
    pub fn take_resize(&mut self) -> Option<PhysicalSize<u32>> {
        self.host.pending_resize.take()
    }

    /// Runs `f` with the window and its GPU context.
    ///
    /// Returns `None` when the window is gone.
    pub fn with_surface<R>(&mut self, f: impl FnOnce(&Window, &mut Gpu<'_>) -> R) -> Option<R> {
        self.host
            .entry
            .as_mut()
            .map(|entry| entry.with_mut(|fields| f(fields.window, fields.gpu)))
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct Host {
    config: WindowConfig,
    gpu_init: GpuInit,

    entry: Option<WindowEntry>,
    input: DeviceInput,

    pending_resize: Option<PhysicalSize<u32>>,
    close_requested: bool,
    init_error: Option<anyhow::Error>,
}

impl Host {
    fn new(config: WindowConfig, gpu_init: GpuInit) -> Self {
        Self {
            config,
            gpu_init,
            entry: None,
            input: DeviceInput::default(),
            pending_resize: None,
            close_requested: false,
            init_error: None,
        }
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        let entry = WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed for window")?;

        self.pending_resize = Some(entry.with_window(|w| w.inner_size()));
        self.entry = Some(entry);
        Ok(())
    }
}

impl ApplicationHandler for Host {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || self.init_error.is_some() {
            return;
        }

        event_loop.set_control_flow(ControlFlow::Poll);

        match self.create_window_entry(event_loop) {
            Ok(()) => log::debug!("window created"),
            Err(e) => {
                log::error!("failed to create window: {e:#}");
                self.init_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };
        if entry.with_window(|w| w.id()) != window_id {
            return;
        }

        if let Some(ev) = translate_window_event(&event) {
            self.input.apply_event(&ev);
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("window close requested");
                self.close_requested = true;
            }

            WindowEvent::Resized(new_size) => {
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                self.pending_resize = Some(new_size);
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                self.pending_resize = Some(new_size);
            }

            _ => {}
        }
    }
}
