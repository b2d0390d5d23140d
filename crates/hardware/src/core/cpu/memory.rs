//! Memory access handling for loads and stores.
//!
//! Every access is first offered to the control ports. Anything that is not
//! a port must lie entirely inside the heap: each byte of a multi-byte access
//! is located in its own bank, so an access may straddle two banks. A byte
//! outside the heap raises an illegal operation before any byte is written.

use super::Cpu;
use super::execution::Flow;
use crate::common::{SimError, Trap};
use crate::core::units::lsu::{LoadKind, Lsu, StoreWidth};
use crate::soc::console::Console;
use crate::soc::memory::BankHeap;
use crate::soc::ports::{ReadPort, WritePort};

impl<C: Console> Cpu<C> {
    /// Performs a load at `addr`.
    ///
    /// # Arguments
    ///
    /// * `addr` - Effective address (`rs1 + imm`).
    /// * `kind` - Load width and extension.
    /// * `raw`  - The instruction word, reported if the access traps.
    ///
    /// # Returns
    ///
    /// The value to write back to `rd`.
    pub(crate) fn load(&mut self, addr: u32, kind: LoadKind, raw: u32) -> Result<u32, SimError> {
        if let Some(port) = ReadPort::decode(addr) {
            self.stats.port_accesses += 1;
            return self.read_port(port);
        }
        if !heap_span(addr, kind.width()) {
            return Err(Trap::IllegalOperation(raw).into());
        }

        let mut bytes = [0u8; 4];
        for (offset, slot) in (0u32..).zip(bytes.iter_mut().take(kind.width())) {
            *slot = self
                .bus
                .heap
                .read_u8(addr.wrapping_add(offset))
                .ok_or(Trap::IllegalOperation(raw))?;
        }
        Ok(Lsu::assemble(kind, bytes))
    }

    /// Performs a store of `value` at `addr`.
    ///
    /// # Returns
    ///
    /// `Flow::Halt` if the store hit the halt port, otherwise `Flow::Next`.
    pub(crate) fn store(
        &mut self,
        addr: u32,
        width: StoreWidth,
        value: u32,
        raw: u32,
    ) -> Result<Flow, SimError> {
        if let Some(port) = WritePort::decode(addr) {
            if let Some(flow) = self.write_port(port, value)? {
                self.stats.port_accesses += 1;
                return Ok(flow);
            }
        }
        if !heap_span(addr, width.width()) {
            return Err(Trap::IllegalOperation(raw).into());
        }

        for (offset, byte) in (0u32..).zip(Lsu::store_bytes(width, value)) {
            self.bus
                .heap
                .write_u8(addr.wrapping_add(offset), byte)
                .ok_or(Trap::IllegalOperation(raw))?;
        }
        Ok(Flow::Next)
    }
}

/// Returns `true` if all `width` bytes starting at `addr` are heap bytes.
fn heap_span(addr: u32, width: usize) -> bool {
    (0..width as u32).all(|offset| {
        addr.checked_add(offset)
            .is_some_and(BankHeap::contains)
    })
}
