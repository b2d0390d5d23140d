//! Branch Resolution Unit (BRU).
//!
//! Evaluates the condition of the six conditional branches. Signed
//! comparisons reinterpret register words as `i32`; unsigned comparisons use
//! them as stored.

use crate::isa::rv32i::funct3;

/// Branch condition selected by `funct3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchCond {
    /// `beq`: equal.
    Eq,
    /// `bne`: not equal.
    Ne,
    /// `blt`: signed less than.
    Lt,
    /// `bge`: signed greater or equal.
    Ge,
    /// `bltu`: unsigned less than.
    Ltu,
    /// `bgeu`: unsigned greater or equal.
    Geu,
}

impl BranchCond {
    /// Maps a branch `funct3` to its condition; `None` for `010` and `011`.
    pub const fn from_funct3(f3: u32) -> Option<Self> {
        Some(match f3 {
            funct3::BEQ => Self::Eq,
            funct3::BNE => Self::Ne,
            funct3::BLT => Self::Lt,
            funct3::BGE => Self::Ge,
            funct3::BLTU => Self::Ltu,
            funct3::BGEU => Self::Geu,
            _ => return None,
        })
    }

    /// Returns `true` when the branch is taken for operands `a` (`rs1`) and `b` (`rs2`).
    pub const fn evaluate(self, a: u32, b: u32) -> bool {
        match self {
            Self::Eq => a == b,
            Self::Ne => a != b,
            Self::Lt => (a as i32) < (b as i32),
            Self::Ge => (a as i32) >= (b as i32),
            Self::Ltu => a < b,
            Self::Geu => a >= b,
        }
    }

    /// Offset used by the lower-bound check of a taken branch with immediate `imm`.
    ///
    /// `beq` checks the doubled immediate against the lower bound while
    /// jumping by (and upper-bound checking) the undoubled one; every other
    /// condition checks the offset it jumps by.
    pub const fn check_offset(self, imm: i32) -> i32 {
        match self {
            Self::Eq => imm.wrapping_shl(1),
            _ => imm,
        }
    }
}
