//! General-Purpose Register File.
//!
//! This module implements the register file of the machine. It performs the following:
//! 1. **Storage:** Maintains 32 word-sized registers (`R[0]`-`R[31]`).
//! 2. **Invariant Enforcement:** Ensures that register `R[0]` is hardwired to zero.
//! 3. **Debugging:** Writes the register dump used by the dump port and by fatal traps.

use std::io::{self, Write};

use crate::common::constants::NUM_REGS;

/// General-purpose register file.
///
/// Register `R[0]` is hardwired to zero: writes targeting it are discarded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u32; NUM_REGS],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `R[0]` always returns 0.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `R[0]` are ignored.
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Returns a snapshot of all registers in index order.
    pub fn snapshot(&self) -> [u32; NUM_REGS] {
        let mut out = self.regs;
        out[0] = 0;
        out
    }

    /// Writes every register as `R[i] = 0x%08x;`, one per line.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn dump(&self, out: &mut dyn Write) -> io::Result<()> {
        for (i, val) in self.snapshot().iter().enumerate() {
            writeln!(out, "R[{i}] = {val:#010x};")?;
        }
        Ok(())
    }
}
