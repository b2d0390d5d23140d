//! Control port side effects.
//!
//! Implements what happens when a store or load hits one of the addresses in
//! [`crate::soc::ports`]. Console output is written to the console stream and
//! flushed before any console read, so prompts appear before the machine
//! blocks on input.

use std::io::Write;

use tracing::warn;

use super::Cpu;
use super::execution::Flow;
use crate::common::SimError;
use crate::isa::abi::REG_ALLOC_RESULT;
use crate::soc::console::Console;
use crate::soc::ports::{ReadPort, WritePort};

impl<C: Console> Cpu<C> {
    /// Applies a write port.
    ///
    /// # Returns
    ///
    /// `Some(flow)` when the port handled the store. `None` when the heap
    /// byte dump was given an address outside the heap; the store then falls
    /// through to ordinary memory.
    pub(crate) fn write_port(
        &mut self,
        port: WritePort,
        value: u32,
    ) -> Result<Option<Flow>, SimError> {
        match port {
            WritePort::ConsoleChar => self.bus.console.output().write_all(&[value as u8])?,
            WritePort::ConsoleSigned => write!(self.bus.console.output(), "{}", value as i32)?,
            WritePort::ConsoleHex => write!(self.bus.console.output(), "{value:x}")?,
            WritePort::Halt => {
                writeln!(self.bus.console.output(), "CPU Halt Requested")?;
                return Ok(Some(Flow::Halt));
            }
            WritePort::DumpPc => writeln!(self.bus.console.output(), "{:x}", self.pc)?,
            WritePort::DumpRegisters => self.dump_state()?,
            WritePort::DumpHeapByte => {
                let Some(byte) = self.bus.heap.read_u8(value) else {
                    return Ok(None);
                };
                writeln!(self.bus.console.output(), "{byte:x}")?;
            }
            WritePort::Malloc => self.allocate(value),
            WritePort::Free => self.release(value),
        }
        Ok(Some(Flow::Next))
    }

    /// Applies a read port and returns the value for `rd`.
    ///
    /// A character is sign-extended from its byte value. Exhausted or
    /// malformed input reads as 0.
    pub(crate) fn read_port(&mut self, port: ReadPort) -> Result<u32, SimError> {
        self.bus.console.output().flush()?;
        let value = match port {
            ReadPort::ConsoleChar => match self.bus.console.read_char()? {
                Some(c) => c as i8 as i32 as u32,
                None => {
                    warn!(pc = self.pc, "console input exhausted, reading 0");
                    0
                }
            },
            ReadPort::ConsoleSigned => match self.bus.console.read_int()? {
                Some(v) => v as u32,
                None => {
                    warn!(pc = self.pc, "no integer on console input, reading 0");
                    0
                }
            },
        };
        Ok(value)
    }

    /// Allocates heap banks and places the address (or 0) in `R[28]`.
    fn allocate(&mut self, value: u32) {
        let size = self.alloc_sizing.request_size(value);
        let addr = if let Some(addr) = self.bus.heap.allocate(size) {
            self.stats.allocations += 1;
            addr
        } else {
            warn!(pc = self.pc, size, "heap allocation failed");
            self.stats.allocation_failures += 1;
            0
        };
        self.regs.write(REG_ALLOC_RESULT, addr);
    }

    /// Releases the allocation holding `addr`; a no-op for free or non-heap addresses.
    fn release(&mut self, addr: u32) {
        if self.bus.heap.free(addr) > 0 {
            self.stats.frees += 1;
        }
    }
}
