//! Shared test helpers.


/// Simulator harness over an in-memory console.
pub mod harness;
