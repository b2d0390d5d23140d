//! # Unit Components
//!
//! This module serves as the central hub for the unit tests of each part of
//! the machine: shared types, the instruction set, the core, the SoC, and the
//! simulation driver.





/// Unit tests for the image loader and simulator run loop.
pub mod sim;
