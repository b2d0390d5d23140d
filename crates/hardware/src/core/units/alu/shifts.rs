//! ALU shift operations.
//!
//! Logical shifts use the low 5 bits of the shift amount.
//!
//! `Sra` repeats, `b` times, a step that shifts right arithmetically by one
//! and carries the old bit 0 into bit 31. The count is never clamped. The
//! step reaches a fixed point within 64 repetitions (zero stays zero, any
//! other value becomes all ones), so larger counts, including negative
//! register values, stop there with the same result the unbounded loop gives.

use super::AluOp;

/// Bit mask for the shift amount of logical shifts (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1f;

/// Repetitions after which the `Sra` step no longer changes its value.
const SRA_FIXED_POINT_STEPS: u32 = 64;

/// One `Sra` step: arithmetic shift right by one, old bit 0 into bit 31.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
const fn sra_step(value: u32) -> u32 {
    (((value as i32) >> 1) as u32) | ((value & 1) << 31)
}

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount (the full register value).
///
/// # Returns
///
/// The 32-bit result. Returns `0` for non-shift opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Sll => a << (b & SHAMT_MASK),
        AluOp::Srl => a >> (b & SHAMT_MASK),
        AluOp::Sra => {
            let steps = if b < SRA_FIXED_POINT_STEPS {
                b
            } else {
                SRA_FIXED_POINT_STEPS
            };
            let mut value = a;
            let mut i = 0;
            while i < steps {
                value = sra_step(value);
                i += 1;
            }
            value
        }
        _ => 0,
    }
}
