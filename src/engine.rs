//=========================================================================
// Pheasant Engine
//
// Main entry point: configuration, validation and the run loop.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Event loop]
//         │                          │
//         ├─ with_tps()              ├─ init() (input bindings)
//         ├─ with_level()            └─ runs platform until the
//         ├─ with_viewport()            window closes
//         └─ ...
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Sender};
use glam::DVec2;
use log::{info, warn};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::{InputSystem, PlayerAction};
use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use crate::core::render::{AsciiRenderer, Renderer};
use crate::core::world::{GameState, Level, LevelError, PhysicsParams, Viewport};
use crate::core::CoreSystemsOrchestrator;
use crate::platform::{Platform, WindowConfig};

//=== EngineError =========================================================

/// Anything that stops the engine from starting or running.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid level: {0}")]
    Level(#[from] LevelError),

    #[error("platform failure: {0}")]
    Platform(#[from] PlatformError),
}

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0
/// - **Channel capacity**: 128 batches
/// - **Level**: the built-in 64x16 level, player at (0, 0)
/// - **Viewport**: 16x12 tiles, 16 px per tile
/// - **Window**: "Pheasant", 1280x960
/// - **Renderer**: [`AsciiRenderer`]
///
/// # Examples
///
/// ```no_run
/// use pheasant::EngineBuilder;
///
/// # fn main() -> Result<(), pheasant::EngineError> {
/// EngineBuilder::new()
///     .with_tps(120.0)
///     .with_window_title("Pheasant (fast)")
///     .build()?
///     .run()?;
/// # Ok(())
/// # }
/// ```
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
    level: Option<Level>,
    start: Option<DVec2>,
    viewport: Viewport,
    tile_size: u32,
    physics: PhysicsParams,
    window_title: String,
    window_size: (u32, u32),
    renderer: Option<Box<dyn Renderer>>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            level: None,
            start: None,
            viewport: Viewport::default(),
            tile_size: 16,
            physics: PhysicsParams::default(),
            window_title: "Pheasant".to_string(),
            window_size: (1280, 960),
            renderer: None,
        }
    }

    /// Sets the target ticks per second.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// Batches that do not fit are dropped with a warning.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Replaces the built-in level.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Overrides the level's spawn position (top-left of the player box).
    pub fn with_start_position(mut self, start: DVec2) -> Self {
        self.start = Some(start);
        self
    }

    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        assert!(
            viewport.width > 0 && viewport.height > 0,
            "Viewport must be at least 1x1 tiles, got {}x{}",
            viewport.width,
            viewport.height
        );
        self.viewport = viewport;
        self
    }

    /// Pixels per tile in the render frame.
    ///
    /// # Panics
    ///
    /// Panics if `tile_size == 0`.
    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        assert!(tile_size > 0, "Tile size must be positive");
        self.tile_size = tile_size;
        self
    }

    pub fn with_physics(mut self, physics: PhysicsParams) -> Self {
        self.physics = physics;
        self
    }

    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    /// Inner window size in logical pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be positive, got {}x{}", width, height);
        self.window_size = (width, height);
        self
    }

    /// Replaces the default [`AsciiRenderer`].
    pub fn with_renderer<R: Renderer + 'static>(mut self, renderer: R) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Validates the configuration and builds the engine.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Level`] if the level is malformed or smaller
    /// than the viewport.
    pub fn build(self) -> Result<Engine, EngineError> {
        let mut level = match self.level {
            Some(level) => level,
            None => Level::builtin()?,
        };
        if let Some(start) = self.start {
            level = level.with_start(start);
        }
        level.check_viewport(self.viewport)?;

        if !level.grid.contains(level.start) {
            warn!(
                target: "core",
                "Start position ({}, {}) lies outside the level",
                level.start.x,
                level.start.y
            );
        }

        info!(
            target: "core",
            "Building engine (TPS: {}, channel: {}, level: {}x{}, viewport: {}x{})",
            self.tps,
            self.channel_capacity,
            level.grid.width(),
            level.grid.height(),
            self.viewport.width,
            self.viewport.height
        );

        let (sender, receiver) = bounded(self.channel_capacity);
        let orchestrator = CoreSystemsOrchestrator::new(
            receiver,
            InputSystem::with_default_bindings(),
            GameState::new(level),
            self.physics,
            self.viewport,
            self.tile_size,
        );

        Ok(Engine {
            orchestrator,
            sender,
            renderer: self.renderer.unwrap_or_else(|| Box::new(AsciiRenderer::new())),
            window: WindowConfig {
                title: self.window_title,
                width: self.window_size.0,
                height: self.window_size.1,
            },
            tps: self.tps,
        })
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Configured engine, ready to run.
///
/// # Architecture
///
/// ```text
/// Engine
///   └─► Platform (winit event loop, this thread)
///         ├─► InputProcessor / InputBuffer
///         ├─► channel ─► CoreSystemsOrchestrator (tick @ TPS)
///         └─► Renderer (once per tick)
/// ```
pub struct Engine {
    orchestrator: CoreSystemsOrchestrator,
    sender: Sender<PlatformEvent>,
    renderer: Box<dyn Renderer>,
    window: WindowConfig,
    tps: f64,
}

impl Engine {
    //--- Initialization ---------------------------------------------------

    /// Adjusts input bindings before running.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pheasant::prelude::*;
    /// # fn main() -> Result<(), EngineError> {
    /// EngineBuilder::new()
    ///     .build()?
    ///     .init(|input| {
    ///         input.bind_key(KeyCode::KeyZ, PlayerAction::Jump);
    ///     })
    ///     .run()
    /// # }
    /// ```
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut InputSystem<PlayerAction>),
    {
        info!(target: "core", "Initializing input bindings");
        init_fn(self.orchestrator.input_mut());
        self
    }

    /// Current simulation state.
    pub fn state(&self) -> &GameState {
        self.orchestrator.state()
    }

    //--- Execution --------------------------------------------------------

    /// Opens the window and runs until it is closed.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Platform`] if the event loop or window
    /// cannot be created, or the event loop fails.
    pub fn run(self) -> Result<(), EngineError> {
        info!(target: "core", "Starting engine runtime (TPS: {})", self.tps);

        let platform = Platform::new(self.sender, self.orchestrator, self.renderer, self.window, self.tps);
        platform.run()?;

        info!(target: "core", "Engine shutdown complete");
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
