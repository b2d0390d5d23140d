//! Core processor implementation.
//!
//! This module contains the CPU state and fetch-decode-execute engine, and
//! the execution units it dispatches to.

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Execution units (ALU, branch resolution, load/store).
pub mod units;

pub use self::cpu::{Cpu, StepOutcome};
