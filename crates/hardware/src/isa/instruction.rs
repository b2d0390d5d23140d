//! Instruction encoding and field extraction.
//!
//! An instruction word is fetched as four little-endian bytes `b0..b3` and every
//! field is assembled from those byte lanes rather than from whole-word shifts.
//! Fields that straddle a byte boundary take their low bit from the top of the
//! previous byte.

/// Bit mask for the opcode inside `b0` (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for the low nibble of a byte.
pub const LOW_NIBBLE: u32 = 0x0F;
/// Bit mask for the funct3 field inside `b1` (bits 4-6).
pub const FUNCT3_MASK: u32 = 0x70;
/// Shift that aligns the funct3 field after masking.
pub const FUNCT3_SHIFT: u32 = 4;
/// Shift that moves the top bit of a byte down to bit 0.
pub const TOP_BIT_SHIFT: u32 = 7;
/// Bit mask for the single low bit of `b3` that completes `rs2`.
pub const RS2_HIGH_MASK: u32 = 0x01;
/// Bit mask for a single byte lane.
pub const BYTE_MASK: u32 = 0xFF;

/// Trait for extracting instruction fields from the raw instruction word.
pub trait InstructionBits {
    /// Returns byte lane `n` (0 = least significant) of the word.
    fn byte(&self, n: u32) -> u32;

    /// Extracts the opcode: `b0 & 0x7F`.
    fn opcode(&self) -> u32;

    /// Extracts the destination register: `((b1 & 0x0F) << 1) | (b0 >> 7)`.
    fn rd(&self) -> usize;

    /// Extracts the funct3 field: `(b1 & 0x70) >> 4`.
    fn funct3(&self) -> u32;

    /// Extracts the first source register: `((b2 & 0x0F) << 1) | (b1 >> 7)`.
    fn rs1(&self) -> usize;

    /// Extracts the second source register: `(b2 >> 4) | ((b3 & 0x01) << 4)`.
    fn rs2(&self) -> usize;

    /// Extracts the funct7 field: `b3 >> 1`.
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn byte(&self, n: u32) -> u32 {
        (self >> (8 * n)) & BYTE_MASK
    }

    #[inline(always)]
    fn opcode(&self) -> u32 {
        self.byte(0) & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        (((self.byte(1) & LOW_NIBBLE) << 1) | (self.byte(0) >> TOP_BIT_SHIFT)) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self.byte(1) & FUNCT3_MASK) >> FUNCT3_SHIFT
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        (((self.byte(2) & LOW_NIBBLE) << 1) | (self.byte(1) >> TOP_BIT_SHIFT)) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self.byte(2) >> 4) | ((self.byte(3) & RS2_HIGH_MASK) << 4)) as usize
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        self.byte(3) >> 1
    }
}

/// Decoded instruction structure containing all extracted fields.
///
/// All five immediates are computed for every word regardless of opcode;
/// execution consults only the one its format uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction word.
    pub raw: u32,
    /// Extracted opcode field.
    pub opcode: u32,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Function code field 3.
    pub funct3: u32,
    /// Function code field 7.
    pub funct7: u32,
    /// Sign-extended I-type immediate.
    pub imm_i: i32,
    /// Sign-extended S-type immediate.
    pub imm_s: i32,
    /// Sign-extended SB-type (branch) immediate.
    pub imm_sb: i32,
    /// U-type immediate, already placed in bits 12-31.
    pub imm_u: i32,
    /// Sign-extended UJ-type (jump) immediate.
    pub imm_uj: i32,
}
