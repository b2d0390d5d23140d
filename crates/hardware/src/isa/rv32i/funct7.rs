//! Function Codes (funct7).
//!
//! Only the `add`/`sub` and `srl`/`sra` pairs consult `funct7`.

/// Default operation (ADD, SRL).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate operation (SUB).
pub const SUB: u32 = 0b0100000;
/// Alias for SUB (used for Shift Right Arithmetic).
pub const SRA: u32 = 0b0100000;
