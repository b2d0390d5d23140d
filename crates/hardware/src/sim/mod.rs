//! Simulation driver and program loading.
//!
//! Provides the image loader and the `Simulator`, which runs a CPU until it
//! leaves the instruction store, halts, or traps.

/// Program image loading from disk.
pub mod loader;

/// Run loop and outcome reporting.
pub mod simulator;

pub use loader::load_image;
pub use simulator::{RunOutcome, Simulator};
