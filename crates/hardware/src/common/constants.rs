//! Global System Constants.
//!
//! This module defines the fixed memory map of the machine. It includes:
//! 1. **Image Constants:** Sizes of the instruction store and the inert data region.
//! 2. **Control-Flow Constants:** The instruction window and the highest legal jump target.
//! 3. **Heap Constants:** Bank geometry and the address range covered by the banks.

/// Size of the instruction store in bytes.
pub const INST_MEM_SIZE: usize = 1024;

/// Size of the data region that follows the instruction store in an image.
pub const DATA_MEM_SIZE: usize = 1024;

/// Exact size of a loadable memory image.
pub const IMAGE_SIZE: usize = INST_MEM_SIZE + DATA_MEM_SIZE;

/// Size of one instruction word in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// The run loop stops once the program counter reaches this value.
pub const PC_LIMIT: u32 = INST_MEM_SIZE as u32;

/// Lowest legal control-flow target.
pub const MIN_JUMP_TARGET: i32 = 0;

/// Highest legal control-flow target (the last instruction slot).
pub const MAX_JUMP_TARGET: i32 = PC_LIMIT as i32 - INSTRUCTION_SIZE as i32;

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 32;

/// Payload size of a single heap bank in bytes.
pub const BANK_SIZE: u32 = 64;

/// Number of banks backing the heap.
pub const NUM_BANKS: usize = 128;

/// Address of the first byte of the first bank.
pub const HEAP_BASE: u32 = 0xB700;

/// Total heap size in bytes.
pub const HEAP_SIZE: u32 = BANK_SIZE * NUM_BANKS as u32;

/// One past the last heap byte.
pub const HEAP_END: u32 = HEAP_BASE + HEAP_SIZE;
