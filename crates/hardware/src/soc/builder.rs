//! Machine construction and top-level `System` type.
//!
//! The system owns everything a running program can touch apart from the
//! register file:
//! 1. **Image:** The 2048-byte instruction and data store loaded from disk.
//! 2. **Heap:** The banked region at `0xB700` managed by the allocator ports.
//! 3. **Console:** The streams behind the console read and write ports.

use crate::soc::console::{Console, StdConsole};
use crate::soc::memory::{BankHeap, Image};

/// Top-level system instance: memory image, heap, and console.
#[derive(Debug)]
pub struct System<C: Console = StdConsole> {
    /// Instruction store (bytes 0..1024) and data store (bytes 1024..2048).
    pub image: Image,
    /// Banked dynamic heap, all banks free at construction.
    pub heap: BankHeap,
    /// Streams attached to the console ports.
    pub console: C,
}

impl<C: Console> System<C> {
    /// Builds a system around a loaded image with a fresh, fully free heap.
    ///
    /// # Arguments
    ///
    /// * `image` - The program image; executed from address 0.
    /// * `console` - Streams for the console ports.
    ///
    /// # Returns
    ///
    /// A `System` ready to be attached to a `Cpu`.
    pub fn new(image: Image, console: C) -> Self {
        Self {
            image,
            heap: BankHeap::new(),
            console,
        }
    }
}
