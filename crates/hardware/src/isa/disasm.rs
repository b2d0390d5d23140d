//! Instruction Disassembler.
//!
//! Converts an instruction word into a human-readable mnemonic string for
//! trace logging and test diagnostics. Registers are rendered as `xN`.
//!
//! # Usage
//!
//! ```
//! use riskxvii_core::isa::disasm::disassemble;
//! let text = disassemble(0x00A0_0293); // addi x5, x0, 10
//! assert_eq!(text, "addi x5, x0, 10");
//! ```

use crate::isa::decode::decode;
use crate::isa::instruction::Decoded;
use crate::isa::rv32i::{funct3 as f3, funct7 as f7, opcodes as op};

/// Disassembles an instruction word into a human-readable string.
///
/// Returns a mnemonic like `"add x5, x6, x7"` or `"unknown"` for
/// encodings the machine does not implement.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction word.
pub fn disassemble(inst: u32) -> String {
    let d = decode(inst);
    match d.opcode {
        op::OP_REG => reg_op(&d),
        op::OP_IMM => imm_op(&d),
        op::OP_LOAD => load_op(&d),
        op::OP_STORE => store_op(&d),
        op::OP_BRANCH => branch_op(&d),
        op::OP_JALR => format!("jalr x{}, {}(x{})", d.rd, d.imm_i, d.rs1),
        op::OP_LUI => format!("lui x{}, {:#x}", d.rd, d.imm_u as u32),
        op::OP_JAL => format!("jal x{}, {}", d.rd, d.imm_uj),
        _ => unknown(),
    }
}

fn unknown() -> String {
    String::from("unknown")
}

fn reg_op(d: &Decoded) -> String {
    let name = match (d.funct3, d.funct7) {
        (f3::ADD_SUB, f7::DEFAULT) => "add",
        (f3::ADD_SUB, f7::SUB) => "sub",
        (f3::SRL_SRA, f7::DEFAULT) => "srl",
        (f3::SRL_SRA, f7::SRA) => "sra",
        (f3::XOR, _) => "xor",
        (f3::OR, _) => "or",
        (f3::AND, _) => "and",
        (f3::SLL, _) => "sll",
        (f3::SLT, _) => "slt",
        (f3::SLTU, _) => "sltu",
        _ => return unknown(),
    };
    format!("{name} x{}, x{}, x{}", d.rd, d.rs1, d.rs2)
}

fn imm_op(d: &Decoded) -> String {
    let name = match d.funct3 {
        f3::ADD_SUB => "addi",
        f3::XOR => "xori",
        f3::OR => "ori",
        f3::AND => "andi",
        f3::SLT => "slti",
        f3::SLTU => "sltiu",
        _ => return unknown(),
    };
    format!("{name} x{}, x{}, {}", d.rd, d.rs1, d.imm_i)
}

fn load_op(d: &Decoded) -> String {
    let name = match d.funct3 {
        f3::LB => "lb",
        f3::LH => "lh",
        f3::LW => "lw",
        f3::LBU => "lbu",
        f3::LHU => "lhu",
        _ => return unknown(),
    };
    format!("{name} x{}, {}(x{})", d.rd, d.imm_i, d.rs1)
}

fn store_op(d: &Decoded) -> String {
    let name = match d.funct3 {
        f3::SB => "sb",
        f3::SH => "sh",
        f3::SW => "sw",
        _ => return unknown(),
    };
    format!("{name} x{}, {}(x{})", d.rs2, d.imm_s, d.rs1)
}

fn branch_op(d: &Decoded) -> String {
    let name = match d.funct3 {
        f3::BEQ => "beq",
        f3::BNE => "bne",
        f3::BLT => "blt",
        f3::BGE => "bge",
        f3::BLTU => "bltu",
        f3::BGEU => "bgeu",
        _ => return unknown(),
    };
    format!("{name} x{}, x{}, {}", d.rs1, d.rs2, d.imm_sb)
}
