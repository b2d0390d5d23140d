//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains opcode and function-code tables, field extraction from the
//! byte-packed instruction word, immediate decoding, and disassembly.
//!
//! # Instruction families
//!
//! * R: register-register ALU (`add`, `sub`, `xor`, `or`, `and`, shifts, `slt`, `sltu`).
//! * I: immediate ALU, loads, and `jalr`.
//! * S: stores.
//! * SB: conditional branches.
//! * U: `lui`.
//! * UJ: `jal`.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction decoding logic for all immediate formats.
pub mod decode;

/// Instruction disassembler for trace logging and diagnostics.
pub mod disasm;

/// Instruction field extraction and the decoded instruction record.
pub mod instruction;

/// Base integer instruction set (opcodes and function codes).
pub mod rv32i;
