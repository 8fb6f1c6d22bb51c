//=========================================================================
// Platform Subsystem
//
// Bridges winit (OS-level events) with the core via a crossbeam channel,
// and drives the fixed-rate tick loop.
//
// Architecture:
// ```text
//  Event-loop thread (single thread):
//  ┌──────────────────────────────────────────────────────┐
//  │  Winit Event Loop                                    │
//  │   ↓                                                  │
//  │  InputProcessor (winit → InputEvent)                 │
//  │   ↓                                                  │
//  │  InputBuffer (per-frame, arrival order)              │
//  │   ↓                                                  │
//  │  about_to_wait: tick due? → request_redraw           │
//  │   ↓                                                  │
//  │  RedrawRequested                                     │
//  │   ├─ flush buffer ──► channel ──► EventCollector     │
//  │   ├─ CoreSystemsOrchestrator::tick()                 │
//  │   └─ Renderer::render(RenderFrame)                   │
//  │   ↓                                                  │
//  │  ControlFlow::WaitUntil(next tick)                   │
//  └──────────────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: exactly one tick and one render
//   per redraw, and a redraw is only requested when a tick is due
// - **Channel even on one thread**: the core only ever sees
//   `PlatformEvent`s, never winit types
// - **Graceful channel disconnect**: if the core side is gone the
//   platform logs a warning and keeps the window closable
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;
mod pacer;

//=== External Crates =====================================================

use std::time::Instant;

use crossbeam_channel::{Sender, TrySendError};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use crate::core::render::Renderer;
use crate::core::{CoreSystemsOrchestrator, TickControl};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;
use pacer::TickPacer;

//=== WindowConfig ========================================================

/// Window parameters applied when the window is first created.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WindowConfig {
    pub(crate) title: String,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

//=== Platform ============================================================

/// Window owner, input translator and tick driver.
///
/// Runs on the thread that called [`Platform::run`] (winit requires the
/// main thread on macOS/iOS).
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,
    config: WindowConfig,

    /// Buffers input until the next frame boundary.
    buffer: InputBuffer,
    event_sender: Sender<PlatformEvent>,
    input_processor: InputProcessor,

    core: CoreSystemsOrchestrator,
    renderer: Box<dyn Renderer>,
    pacer: TickPacer,

    /// Coin total shown in the title bar.
    shown_coins: u64,
    /// First fatal error raised inside the event loop.
    fatal: Option<PlatformError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a platform. The window is created lazily in `resumed()`.
    pub(crate) fn new(
        event_sender: Sender<PlatformEvent>,
        core: CoreSystemsOrchestrator,
        renderer: Box<dyn Renderer>,
        config: WindowConfig,
        tps: f64,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized ({} TPS)", tps);
        Self {
            window: None,
            config,
            buffer: InputBuffer::new(),
            event_sender,
            input_processor: InputProcessor::new(),
            core,
            renderer,
            pacer: TickPacer::new(tps, Instant::now()),
            shown_coins: 0,
            fatal: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running, or if the window cannot be opened.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.pacer.next_deadline()));

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)?;

        match self.fatal.take() {
            Some(err) => Err(err),
            None => {
                info!(target: "platform", "Event loop exited, {} coins collected", self.core.state().coins.get());
                Ok(())
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends buffered input to the core side of the bridge.
    ///
    /// A full or disconnected channel drops the batch with a warning
    /// rather than blocking the event loop.
    fn flush_input_buffer(&mut self) {
        let Some(events) = self.buffer.drain() else {
            return;
        };
        let count = events.len();

        trace!(target: "platform::input", "Flushing {} events", count);

        match self.event_sender.try_send(PlatformEvent::Inputs(events)) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                warn!(target: "platform::input", "Channel full, dropping {} events", count);
            }
            Err(TrySendError::Disconnected(_)) => {
                warn!(target: "platform::input", "Channel disconnected, dropping {} events", count);
            }
        }
    }

    /// One frame: flush input, tick once, render once.
    fn run_frame(&mut self, now: Instant) -> TickControl {
        self.flush_input_buffer();

        if self.core.tick() == TickControl::Exit {
            return TickControl::Exit;
        }
        self.pacer.advance(now);

        let frame = self.core.render_frame();
        self.renderer.render(&frame);

        if frame.coins != self.shown_coins {
            self.shown_coins = frame.coins;
            if let Some(window) = &self.window {
                window.set_title(&format!("{} (coins: {})", self.config.title, frame.coins));
            }
        }

        TickControl::Continue
    }

    /// Sends the close message and lets the core empty the bridge.
    ///
    /// No update tick runs here, even when the channel was too full to
    /// take the close message.
    fn close_bridge(&mut self) -> TickControl {
        if let Err(err) = self.event_sender.try_send(PlatformEvent::WindowClosed) {
            debug!(target: "platform", "Close message not delivered: {}", err);
        }
        self.core.drain()
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if self.close_bridge() != TickControl::Exit {
            debug!(target: "platform", "Bridge emptied before the close message arrived");
        }
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: PlatformError) {
        error!(target: "platform", "{}", err);
        if self.fatal.is_none() {
            self.fatal = Some(err);
        }
        self.shutdown(event_loop);
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on first resume.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (resume after suspend)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => self.fail(event_loop, PlatformError::WindowCreation(e)),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.shutdown(event_loop);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match self.input_processor.process_key_event(&key_event) {
                    Some(event) => self.buffer.push(event),
                    None => trace!(target: "platform::input", "Key event ignored"),
                }
            }

            WindowEvent::Focused(focused) => {
                if let Some(event) = self.input_processor.process_focus(focused) {
                    debug!(target: "platform::input", "Focus lost, releasing held keys");
                    self.buffer.push(event);
                }
            }

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                if !self.pacer.is_due(now) {
                    return;
                }
                if self.run_frame(now) == TickControl::Exit {
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }

    /// Requests a redraw when the next tick is due, then sleeps until it.
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.pacer.is_due(Instant::now()) {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.pacer.next_deadline()));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, InputSystem, KeyCode};
    use crate::core::render::RenderFrame;
    use crate::core::world::{GameState, Level, PhysicsParams, Viewport};
    use crossbeam_channel::{bounded, Receiver};
    use std::sync::{Arc, Mutex};

    //--- Test Helpers -----------------------------------------------------

    /// Records coin totals of every rendered frame.
    struct Recorder(Arc<Mutex<Vec<u64>>>);

    impl Renderer for Recorder {
        fn render(&mut self, frame: &RenderFrame) {
            if let Ok(mut frames) = self.0.lock() {
                frames.push(frame.coins);
            }
        }
    }

    fn config() -> WindowConfig {
        WindowConfig { title: "Test".into(), width: 320, height: 240 }
    }

    /// Platform wired to a core; also returns a spare receiver clone to
    /// observe what crosses the bridge.
    fn platform(capacity: usize) -> (Platform, Receiver<PlatformEvent>, Arc<Mutex<Vec<u64>>>) {
        let (tx, rx) = bounded(capacity);
        let level = Level::builtin().unwrap();
        let core = CoreSystemsOrchestrator::new(
            rx.clone(),
            InputSystem::with_default_bindings(),
            GameState::new(level),
            PhysicsParams::default(),
            Viewport::default(),
            16,
        );
        let frames = Arc::new(Mutex::new(Vec::new()));
        let platform = Platform::new(tx, core, Box::new(Recorder(frames.clone())), config(), 60.0);
        (platform, rx, frames)
    }

    //=====================================================================
    // Construction
    //=====================================================================

    #[test]
    fn platform_creation_is_lazy() {
        let (platform, _rx, _frames) = platform(8);
        assert!(platform.window.is_none(), "Window should be created lazily");
        assert!(platform.pacer.is_due(Instant::now()));
    }

    //=====================================================================
    // Flush Tests
    //=====================================================================

    #[test]
    fn flush_empty_buffer_is_noop() {
        let (mut platform, rx, _frames) = platform(8);

        platform.flush_input_buffer();

        assert!(rx.try_recv().is_err(), "No events should be sent for empty buffer");
    }

    #[test]
    fn flush_sends_buffered_events() {
        let (mut platform, rx, _frames) = platform(8);
        platform.buffer.push(InputEvent::KeyDown(KeyCode::Space));

        platform.flush_input_buffer();

        assert_eq!(
            rx.try_recv().ok(),
            Some(PlatformEvent::Inputs(vec![InputEvent::KeyDown(KeyCode::Space)]))
        );
    }

    #[test]
    fn flush_drops_batch_when_channel_full() {
        let (mut platform, rx, _frames) = platform(1);

        platform.buffer.push(InputEvent::KeyDown(KeyCode::KeyA));
        platform.flush_input_buffer();
        platform.buffer.push(InputEvent::KeyDown(KeyCode::KeyD));
        platform.flush_input_buffer();

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err(), "Second batch should have been dropped");
        assert!(platform.buffer.is_empty());
    }

    //=====================================================================
    // Frame Tests
    //=====================================================================

    #[test]
    fn each_frame_ticks_and_renders_once() {
        let (mut platform, _rx, frames) = platform(8);
        let now = Instant::now();

        for _ in 0..3 {
            assert_eq!(platform.run_frame(now), TickControl::Continue);
        }

        assert_eq!(platform.core.state().animation.tick(), 3);
        assert_eq!(frames.lock().map(|f| f.len()).unwrap_or(0), 3);
    }

    #[test]
    fn buffered_input_reaches_the_core_on_the_next_frame() {
        let (mut platform, _rx, _frames) = platform(8);
        let start = platform.core.state().player.position;

        platform.buffer.push(InputEvent::KeyDown(KeyCode::ArrowRight));
        for _ in 0..20 {
            platform.run_frame(Instant::now());
        }

        assert!(platform.core.state().player.position.x > start.x);
    }

    //=====================================================================
    // Shutdown Tests
    //=====================================================================

    #[test]
    fn close_bridge_stops_the_core_without_ticking() {
        let (mut platform, _rx, frames) = platform(8);
        platform.buffer.push(InputEvent::KeyDown(KeyCode::ArrowRight));
        platform.flush_input_buffer();

        assert_eq!(platform.close_bridge(), TickControl::Exit);
        assert_eq!(platform.core.state().animation.tick(), 0);
        assert_eq!(frames.lock().map(|f| f.len()).unwrap_or(0), 0);
    }

    #[test]
    fn close_bridge_with_full_channel_does_not_update() {
        let (mut platform, rx, _frames) = platform(1);
        let start = platform.core.state().player.position;
        platform.buffer.push(InputEvent::KeyDown(KeyCode::ArrowRight));
        platform.flush_input_buffer();

        assert_eq!(platform.close_bridge(), TickControl::Continue);
        assert_eq!(platform.core.state().animation.tick(), 0);
        assert_eq!(platform.core.state().player.position, start);
        assert!(rx.try_recv().is_err(), "Queued input should have been discarded");
    }

    #[test]
    fn run_frame_schedules_next_tick() {
        let (mut platform, _rx, _frames) = platform(8);
        let now = Instant::now();

        platform.run_frame(now);

        assert!(!platform.pacer.is_due(now));
    }
}
