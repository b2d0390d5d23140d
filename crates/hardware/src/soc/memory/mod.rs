//! Machine Memory.
//!
//! This module implements the two backing stores of the machine. It provides:
//! 1. **Image:** The loaded 2048-byte image: the read-only instruction store followed by
//!    the inert data region.
//! 2. **Heap:** The 128 fixed banks reachable through load/store, together with the
//!    first-fit bank allocator driven by the control ports.

/// Bank-backed heap and first-fit allocator.
pub mod heap;

/// Loaded memory image (instruction store and data region).
pub mod image;

pub use heap::{Bank, BankHeap};
pub use image::Image;
