//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which owns the entire
//! machine state. It coordinates the following:
//! 1. **State Management:** Maintains the register file and program counter.
//! 2. **Execution:** Fetches, decodes, and dispatches one instruction per step.
//! 3. **Memory Access:** Routes loads and stores to the control ports or the heap.
//! 4. **System Integration:** Owns the image, heap, and console through `System`.

/// Instruction execution and dispatch.
pub mod execution;

/// Load/store routing between control ports and the heap.
pub mod memory;

/// Control port side effects.
pub mod ports;

use std::io::{self, Write};

use crate::common::RegisterFile;
use crate::common::constants::PC_LIMIT;
use crate::config::{AllocSizing, Config};
use crate::soc::System;
use crate::soc::console::{Console, StdConsole};
use crate::stats::SimStats;

pub use self::execution::StepOutcome;

/// Main CPU structure containing all machine state.
///
/// The CPU executes strictly in program order, one instruction per step,
/// with no pipelining or speculation.
#[derive(Debug)]
pub struct Cpu<C: Console = StdConsole> {
    /// General Purpose Registers.
    pub regs: RegisterFile,
    /// Program Counter (byte offset into the instruction store).
    pub pc: u32,
    /// Image, heap, and console.
    pub bus: System<C>,
    /// Log every executed instruction at `trace` level.
    pub trace: bool,
    /// Request sizing policy of the allocator port.
    pub alloc_sizing: AllocSizing,
    /// Run statistics.
    pub stats: SimStats,
}

impl<C: Console> Cpu<C> {
    /// Creates a CPU in its reset state attached to `system`.
    ///
    /// All registers are zero and the program counter starts at 0.
    ///
    /// # Arguments
    ///
    /// * `system` - The machine the CPU executes against.
    /// * `config` - Run configuration (tracing, allocator sizing).
    pub fn new(system: System<C>, config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: 0,
            bus: system,
            trace: config.general.trace_instructions,
            alloc_sizing: config.heap.alloc_sizing,
            stats: SimStats::default(),
        }
    }

    /// Returns `true` while the program counter is inside the instruction store.
    pub const fn running(&self) -> bool {
        self.pc < PC_LIMIT
    }

    /// Writes the program counter and all registers to the console output.
    ///
    /// # Errors
    ///
    /// Propagates write failures on the console output.
    pub fn dump_state(&mut self) -> io::Result<()> {
        let out = self.bus.console.output();
        writeln!(out, "PC = {:#010x};", self.pc)?;
        self.regs.dump(out)
    }
}
