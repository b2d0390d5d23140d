//! Instruction Decoder.
//!
//! This module turns a fetched 32-bit word into a structured `Decoded` record.
//! It extracts the opcode, register indices and function codes, and builds all
//! five immediates (I, S, SB, U, UJ) from byte-lane slices of the word. Each
//! signed format is sign-extended by OR-ing its upper bits with ones when its
//! top bit is set.

use crate::isa::instruction::{Decoded, InstructionBits, LOW_NIBBLE, TOP_BIT_SHIFT};

/// Sign bit of the 12-bit I and S immediates.
const IMM12_SIGN_BIT: u32 = 0x800;

/// Extension mask applied to negative 12-bit immediates.
const IMM12_EXTEND: u32 = 0xFFFF_F000;

/// Sign bit of the 13-bit SB immediate.
const SB_SIGN_BIT: u32 = 0x1000;

/// Extension mask applied to negative SB immediates.
const SB_EXTEND: u32 = 0xFFFF_E000;

/// Sign bit of the 21-bit UJ immediate.
const UJ_SIGN_BIT: u32 = 0x10_0000;

/// Extension mask applied to negative UJ immediates.
const UJ_EXTEND: u32 = 0xFFE0_0000;

/// Mask selecting imm[10:5] from `b3` for the SB format (bit 0 and bit 7 excluded).
const SB_B3_MID_MASK: u32 = 0x7E;

/// Mask selecting imm[10:4] from `b3` for the UJ format.
const UJ_B3_LOW_MASK: u32 = 0x7F;

/// Mask selecting imm[11] (bit 4) from `b2` for the UJ format.
const UJ_B2_BIT11_MASK: u32 = 0x10;

/// Assembles an instruction word from four instruction-store bytes.
#[inline]
pub const fn fetch_word(bytes: [u8; 4]) -> u32 {
    u32::from_le_bytes(bytes)
}

/// Decodes an instruction word into its component fields.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction word to decode
///
/// # Returns
///
/// A `Decoded` structure containing all extracted instruction fields.
pub fn decode(inst: u32) -> Decoded {
    Decoded {
        raw: inst,
        opcode: inst.opcode(),
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct3: inst.funct3(),
        funct7: inst.funct7(),
        imm_i: decode_i_type_imm(inst),
        imm_s: decode_s_type_imm(inst),
        imm_sb: decode_sb_type_imm(inst),
        imm_u: decode_u_type_imm(inst),
        imm_uj: decode_uj_type_imm(inst),
    }
}

/// I-type: bits 0-3 from `b2 >> 4`, bits 4-11 from `b3 << 4`.
fn decode_i_type_imm(inst: u32) -> i32 {
    let raw = (inst.byte(2) >> 4) | (inst.byte(3) << 4);
    sign_extend(raw, IMM12_SIGN_BIT, IMM12_EXTEND)
}

/// S-type: bits 0-4 shared with `rd`, bits 5-11 shared with `funct7`.
fn decode_s_type_imm(inst: u32) -> i32 {
    let low = ((inst.byte(1) & LOW_NIBBLE) << 1) | (inst.byte(0) >> TOP_BIT_SHIFT);
    let high = (inst.byte(3) >> 1) << 5;
    sign_extend(low | high, IMM12_SIGN_BIT, IMM12_EXTEND)
}

/// SB-type: the top bit of `b0` lands at bit 11 and the top bit of `b3` at bit 12.
fn decode_sb_type_imm(inst: u32) -> i32 {
    let b0 = inst.byte(0);
    let b1 = inst.byte(1);
    let b3 = inst.byte(3);

    let raw = ((b0 >> TOP_BIT_SHIFT) << 11)
        | ((b1 & LOW_NIBBLE) << 1)
        | ((b3 & SB_B3_MID_MASK) << 4)
        | ((b3 >> TOP_BIT_SHIFT) << 12);
    sign_extend(raw, SB_SIGN_BIT, SB_EXTEND)
}

/// U-type: the upper 20 bits in place; bit 31 of the word is already the sign.
fn decode_u_type_imm(inst: u32) -> i32 {
    let raw = ((inst.byte(1) >> 4) << 12) | (inst.byte(2) << 16) | (inst.byte(3) << 24);
    raw as i32
}

/// UJ-type: scattered across `b1..b3`, sign bit 20.
fn decode_uj_type_imm(inst: u32) -> i32 {
    let b1 = inst.byte(1);
    let b2 = inst.byte(2);
    let b3 = inst.byte(3);

    let raw = ((b3 >> TOP_BIT_SHIFT) << 20)
        | ((b2 & LOW_NIBBLE) << 16)
        | ((b1 >> 4) << 12)
        | ((b2 & UJ_B2_BIT11_MASK) << 7)
        | ((b3 & UJ_B3_LOW_MASK) << 4)
        | ((b2 >> 5) << 1);
    sign_extend(raw, UJ_SIGN_BIT, UJ_EXTEND)
}

/// Sets every bit in `extend` when `sign_bit` is set in `val`.
#[inline]
const fn sign_extend(val: u32, sign_bit: u32, extend: u32) -> i32 {
    if val & sign_bit != 0 {
        (val | extend) as i32
    } else {
        val as i32
    }
}
