//! Banked Heap and First-Fit Allocator.
//!
//! The heap is a fixed chain of 128 banks of 64 bytes each, laid out at
//! strictly increasing addresses from `HEAP_BASE`. The chain is stored as an
//! arena: bank `i + 1` is the successor of bank `i`.
//!
//! Each bank carries an allocation tag. Zero means free; any other value is the
//! id of the allocation that owns the bank. Every bank of one allocation shares
//! the same id, which is the only key used to release the group again.

use tracing::debug;

use crate::common::constants::{BANK_SIZE, HEAP_BASE, HEAP_END, NUM_BANKS};

/// Tag value of a bank that belongs to no allocation.
pub const FREE_TAG: u32 = 0;

/// First allocation id handed out.
const FIRST_ALLOC_ID: u32 = 1;

/// A single 64-byte heap bank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bank {
    start: u32,
    tag: u32,
    data: [u8; BANK_SIZE as usize],
}

impl Bank {
    fn new(start: u32) -> Self {
        Self {
            start,
            tag: FREE_TAG,
            data: [0; BANK_SIZE as usize],
        }
    }

    /// Address of the first byte of this bank.
    pub const fn start(&self) -> u32 {
        self.start
    }

    /// One past the last byte of this bank.
    pub const fn end(&self) -> u32 {
        self.start + BANK_SIZE
    }

    /// Allocation id owning this bank, or [`FREE_TAG`].
    pub const fn tag(&self) -> u32 {
        self.tag
    }

    /// Returns `true` if some allocation owns this bank.
    pub const fn is_allocated(&self) -> bool {
        self.tag != FREE_TAG
    }

    /// Returns the bank payload.
    pub const fn data(&self) -> &[u8; BANK_SIZE as usize] {
        &self.data
    }
}

/// The chain of heap banks plus the allocation id generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BankHeap {
    banks: Vec<Bank>,
    next_id: u32,
}

impl Default for BankHeap {
    fn default() -> Self {
        Self::new()
    }
}

impl BankHeap {
    /// Creates the full chain of free, zero-filled banks.
    pub fn new() -> Self {
        let banks = (0..NUM_BANKS as u32)
            .map(|i| Bank::new(HEAP_BASE + i * BANK_SIZE))
            .collect();
        Self {
            banks,
            next_id: FIRST_ALLOC_ID,
        }
    }

    /// Returns the banks in address order.
    pub fn banks(&self) -> &[Bank] {
        &self.banks
    }

    /// Returns `true` if `addr` lies inside the heap range.
    pub const fn contains(addr: u32) -> bool {
        addr >= HEAP_BASE && addr < HEAP_END
    }

    /// Number of banks needed to hold `size` bytes (at least one).
    pub const fn banks_required(size: u32) -> usize {
        let banks = size.div_ceil(BANK_SIZE) as usize;
        if banks == 0 { 1 } else { banks }
    }

    /// Finds the bank whose address range holds `addr`.
    ///
    /// Walks the chain and stops at the first bank whose successor starts
    /// past `addr`.
    pub fn bank_index(&self, addr: u32) -> Option<usize> {
        if !Self::contains(addr) {
            return None;
        }
        self.banks.iter().position(|bank| bank.end() > addr)
    }

    /// Reads one heap byte.
    pub fn read_u8(&self, addr: u32) -> Option<u8> {
        let idx = self.bank_index(addr)?;
        let bank = &self.banks[idx];
        Some(bank.data[(addr - bank.start) as usize])
    }

    /// Writes one heap byte. Returns `None` if `addr` is outside the heap.
    pub fn write_u8(&mut self, addr: u32, val: u8) -> Option<()> {
        let idx = self.bank_index(addr)?;
        let bank = &mut self.banks[idx];
        bank.data[(addr - bank.start) as usize] = val;
        Some(())
    }

    /// Allocates enough consecutive free banks to hold `size` bytes.
    ///
    /// First fit in address order. A candidate run that is broken by an
    /// allocated bank resumes the scan from that bank. On success every bank
    /// of the run is stamped with one fresh id and the address of the first
    /// bank is returned. On failure no bank is modified.
    pub fn allocate(&mut self, size: u32) -> Option<u32> {
        let required = Self::banks_required(size);
        let mut idx = 0;

        while idx < self.banks.len() {
            if self.banks[idx].is_allocated() {
                idx += 1;
                continue;
            }

            let run = self.banks[idx..]
                .iter()
                .take(required)
                .take_while(|bank| !bank.is_allocated())
                .count();

            if run == required {
                let id = self.mint_id();
                for bank in &mut self.banks[idx..idx + required] {
                    bank.tag = id;
                }
                let addr = self.banks[idx].start;
                debug!(id, banks = required, addr, "heap allocation");
                return Some(addr);
            }

            idx += run;
        }

        debug!(size, banks = required, "heap allocation failed");
        None
    }

    /// Releases the allocation that owns the bank holding `addr`.
    ///
    /// Clears the tag of the owning bank and of every immediately following
    /// bank carrying the same id. Addresses outside any live allocation are
    /// ignored.
    ///
    /// # Returns
    ///
    /// The number of banks released.
    pub fn free(&mut self, addr: u32) -> usize {
        let Some(start) = self.bank_index(addr) else {
            return 0;
        };
        let id = self.banks[start].tag;
        if id == FREE_TAG {
            return 0;
        }

        let mut released = 0;
        for bank in self.banks[start..].iter_mut().take_while(|bank| bank.tag == id) {
            bank.tag = FREE_TAG;
            released += 1;
        }
        debug!(id, banks = released, addr, "heap release");
        released
    }

    /// Number of banks currently owned by some allocation.
    pub fn allocated_banks(&self) -> usize {
        self.banks.iter().filter(|bank| bank.is_allocated()).count()
    }

    fn mint_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = match self.next_id.wrapping_add(1) {
            FREE_TAG => FIRST_ALLOC_ID,
            next => next,
        };
        id
    }
}
