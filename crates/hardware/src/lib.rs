//! RISK-XVII instruction-set simulator library.
//!
//! This crate implements a single-cycle simulator for a small 32-bit load/store
//! architecture with the following:
//! 1. **Core:** Register file, program counter, and the fetch-decode-execute loop.
//! 2. **ISA:** Byte-packed instruction decoding, immediates, and a disassembler.
//! 3. **SoC:** Instruction store, banked heap with a first-fit allocator, and the
//!    memory-mapped console/allocator control ports.
//! 4. **Simulation:** Image loader, run loop, configuration, and statistics.

/// Common types and constants (memory layout, registers, traps).
pub mod common;
/// Simulator configuration (tracing, statistics, allocator sizing).
pub mod config;
/// CPU core (architectural state, execution, memory access, ALU).
pub mod core;
/// Instruction set (decode, instruction fields, disassembly, opcodes).
pub mod isa;
/// Image loader and the top-level run loop.
pub mod sim;
/// System-on-chip (image memory, bank heap, control ports, console).
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load it from JSON.
pub use crate::config::Config;
/// Main CPU type; holds the register file, program counter, and system.
pub use crate::core::Cpu;
/// Top-level simulator driving a `Cpu` until it leaves the instruction window.
pub use crate::sim::Simulator;
/// Memory system (image, heap, console) attached to the CPU.
pub use crate::soc::System;
