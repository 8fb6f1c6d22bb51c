//=========================================================================
// Core Systems Orchestrator
//
// Central coordinator for everything that runs once per tick.
//
// Responsibilities:
// - Drain platform events through the bridge
// - Update the input system and sample the player actions
// - Run the world update step
// - Produce the render frame for the tick
//
// Notes:
// The orchestrator is driven by the platform on the event-loop thread:
// one `tick()` followed by one `render_frame()` per frame. It never
// sleeps or blocks; pacing belongs to the platform.
//
//=========================================================================

//=== Submodules ==========================================================
pub mod input;
pub(crate) mod platform_bridge;
pub mod render;
pub mod world;

//=== External Crates =====================================================
use crossbeam_channel::Receiver;
use log::{debug, info};

//=== Internal Modules ====================================================
use input::{InputSampler, InputSystem, PlayerAction};
use platform_bridge::{EventCollector, PlatformEvent};
use render::RenderFrame;
use world::{update_step, GameState, PhysicsParams, TickReport, Viewport};

pub(crate) use platform_bridge::TickControl;
pub use platform_bridge::PlatformError;

//=== CoreSystemsOrchestrator =============================================
//
// Owns the simulation state and the input pipeline feeding it.
//
pub(crate) struct CoreSystemsOrchestrator {
    collector: EventCollector,
    input: InputSystem<PlayerAction>,
    state: GameState,
    params: PhysicsParams,
    viewport: Viewport,
    tile_size: u32,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------
    pub(crate) fn new(
        receiver: Receiver<PlatformEvent>,
        input: InputSystem<PlayerAction>,
        state: GameState,
        params: PhysicsParams,
        viewport: Viewport,
        tile_size: u32,
    ) -> Self {
        Self {
            collector: EventCollector::new(receiver),
            input,
            state,
            params,
            viewport,
            tile_size,
        }
    }

    //--- tick() -----------------------------------------------------------
    //
    // One simulation step:
    //  1. Collect platform events (exit on close/disconnect)
    //  2. Feed them to the input system
    //  3. Run the update step with the sampled actions
    //
    pub(crate) fn tick(&mut self) -> TickControl {
        if self.collector.collect_frame() == TickControl::Exit {
            info!(target: "core", "Core shutting down after {} ticks", self.state.animation.tick());
            return TickControl::Exit;
        }

        self.input.process_frame(self.collector.events());
        let sample = self.input.sample();

        let report = update_step(&mut self.state, &self.params, sample);
        self.log_report(report);

        TickControl::Continue
    }

    //--- drain() ----------------------------------------------------------
    //
    // Empties the bridge without running the update step. Returns `Exit`
    // once the close message (or a disconnect) is seen, `Continue` if the
    // channel ran dry first.
    //
    pub(crate) fn drain(&mut self) -> TickControl {
        loop {
            if self.collector.collect_frame() == TickControl::Exit {
                info!(target: "core", "Core shutting down after {} ticks", self.state.animation.tick());
                return TickControl::Exit;
            }
            if self.collector.events().is_empty() {
                return TickControl::Continue;
            }
            debug!(target: "core", "Discarding {} queued input events", self.collector.events().len());
        }
    }

    //--- render_frame() ---------------------------------------------------
    pub(crate) fn render_frame(&self) -> RenderFrame {
        RenderFrame::capture(&self.state, self.viewport, self.tile_size)
    }

    //--- Accessors --------------------------------------------------------

    pub(crate) fn state(&self) -> &GameState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn input(&self) -> &InputSystem<PlayerAction> {
        &self.input
    }

    pub(crate) fn input_mut(&mut self) -> &mut InputSystem<PlayerAction> {
        &mut self.input
    }

    //--- Internal Helpers -------------------------------------------------

    fn log_report(&self, report: TickReport) {
        if report.coins_collected > 0 {
            info!(
                target: "core",
                "Collected {} coin(s), total {} ({} left)",
                report.coins_collected,
                self.state.coins.get(),
                self.state.grid.count(world::Tile::Collectible)
            );
        }
        if report.jumped {
            debug!(target: "core", "Jump at ({:.2}, {:.2})", self.state.player.position.x, self.state.player.position.y);
        }
        if report.landed {
            debug!(target: "core", "Landed at ({:.2}, {:.2})", self.state.player.position.x, self.state.player.position.y);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
