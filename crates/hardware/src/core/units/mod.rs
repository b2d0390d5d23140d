//! Execution units and functional components.
//!
//! This module contains the integer ALU, the branch resolution unit, and
//! the load/store unit used by the execution engine.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit: conditional branch evaluation.
pub mod bru;

/// Load/Store Unit: heap access byte assembly.
pub mod lsu;
