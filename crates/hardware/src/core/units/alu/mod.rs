//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU shared by the register-register
//! and register-immediate instruction classes. Operands and results are
//! 32-bit register words; signed operations reinterpret them as `i32`.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      Or, And, Xor, Slt, Sltu
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical and comparison operations (or, and, xor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::isa::rv32i::{funct3, funct7};

/// ALU operation selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition.
    #[default]
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Shift left logical.
    Sll,
    /// Set less than (signed).
    Slt,
    /// Set less than unsigned.
    Sltu,
    /// Bitwise XOR.
    Xor,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic, one bit at a time, `b` times; each step also
    /// carries bit 0 into bit 31.
    Sra,
    /// Bitwise OR.
    Or,
    /// Bitwise AND.
    And,
}

impl AluOp {
    /// Selects the operation of a register-register instruction.
    ///
    /// `funct7` only distinguishes the `000` and `101` groups; every other
    /// `funct3` ignores it.
    ///
    /// # Returns
    ///
    /// `None` for encodings with no defined operation.
    pub const fn from_reg(f3: u32, f7: u32) -> Option<Self> {
        Some(match (f3, f7) {
            (funct3::ADD_SUB, funct7::DEFAULT) => Self::Add,
            (funct3::ADD_SUB, funct7::SUB) => Self::Sub,
            (funct3::SRL_SRA, funct7::DEFAULT) => Self::Srl,
            (funct3::SRL_SRA, funct7::SRA) => Self::Sra,
            (funct3::ADD_SUB | funct3::SRL_SRA, _) => return None,
            (funct3::SLL, _) => Self::Sll,
            (funct3::SLT, _) => Self::Slt,
            (funct3::SLTU, _) => Self::Sltu,
            (funct3::XOR, _) => Self::Xor,
            (funct3::OR, _) => Self::Or,
            (funct3::AND, _) => Self::And,
            _ => return None,
        })
    }

    /// Selects the operation of a register-immediate instruction.
    ///
    /// Immediate shifts are not part of the instruction set.
    pub const fn from_imm(f3: u32) -> Option<Self> {
        Some(match f3 {
            funct3::ADD_SUB => Self::Add,
            funct3::XOR => Self::Xor,
            funct3::OR => Self::Or,
            funct3::AND => Self::And,
            funct3::SLT => Self::Slt,
            funct3::SLTU => Self::Sltu,
            _ => return None,
        })
    }
}

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// Dispatches to the appropriate submodule based on the operation type.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand (`rs1`)
    /// * `b`  - Second operand (`rs2` or the sign-extended immediate)
    ///
    /// # Returns
    ///
    /// The 32-bit result.
    ///
    /// # Examples
    ///
    /// ```
    /// use riskxvii_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 42, 8), 50);
    /// assert_eq!(Alu::execute(AluOp::Sub, 0, 1), 0xFFFF_FFFF);
    /// assert_eq!(Alu::execute(AluOp::Slt, -5_i32 as u32, 10), 1);
    /// assert_eq!(Alu::execute(AluOp::Sltu, -5_i32 as u32, 10), 0);
    /// assert_eq!(Alu::execute(AluOp::Sll, 0x1, 4), 0x10);
    /// ```
    pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::Or | AluOp::And | AluOp::Xor | AluOp::Slt | AluOp::Sltu => {
                logic::execute(op, a, b)
            }
            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b),
        }
    }
}
