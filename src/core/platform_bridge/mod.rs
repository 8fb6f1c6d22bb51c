//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the windowing layer with the core.
//
// Defines the contract between platform implementations and core logic,
// so the winit backend can be swapped (or replaced by a headless driver)
// without touching the simulation.
//
// Components:
// - `interface`: Event types and error definitions (the contract)
// - `event_collector`: Core-side event collection
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::PlatformEvent;
pub use interface::PlatformError;
