//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Constants:** Memory layout of the instruction store, data region, and heap banks.
//! 2. **Error Handling:** Trap representations and the error types of the run loop and loader.
//! 3. **Register Management:** The 32-entry register file with a hardwired zero register.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types and trap definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{HEAP_BASE, HEAP_END, PC_LIMIT};
pub use error::{LoadError, SimError, Trap};
pub use reg::RegisterFile;
