//! System-on-Chip (SoC) Components.
//!
//! This module organizes the pieces of the simulated machine outside the
//! core: the memory image, the banked heap, the console streams, the control
//! port map, and the builder that assembles them.

/// System builder and top-level `System` type.
pub mod builder;

/// Console stream abstraction and implementations.
pub mod console;

/// Program image and banked heap.
pub mod memory;

/// Control port address map.
pub mod ports;

pub use builder::System;
pub use console::{BufferConsole, Console, StdConsole};
