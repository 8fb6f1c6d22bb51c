//=========================================================================
// Pheasant - Library Root
//
// A small tile-based platformer: one player, a scrolling level, coins,
// gravity and tile collision, ticked at a fixed rate.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder`, `Engine`)
// - Expose the simulation core (`core::world`) for headless use
// - Keep the winit platform layer internal
//
// Typical usage:
// ```no_run
// use pheasant::EngineBuilder;
//
// fn main() -> Result<(), pheasant::EngineError> {
//     EngineBuilder::new().build()?.run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the world simulation, the input pipeline and the render
// contract. Everything in it runs without a window.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the window and the event loop; `engine` wires it to
// the core.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------
pub use engine::{Engine, EngineBuilder, EngineError};
