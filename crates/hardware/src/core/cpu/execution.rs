//! Main Execution Loop.
//!
//! This module implements the execution cycle of the CPU. It performs the following:
//! 1. **Fetch and Decode:** Reads the word at the program counter and decodes every field.
//! 2. **Dispatch:** Selects the instruction family by opcode and validates `funct3`/`funct7`.
//! 3. **Control Flow:** Range-checks every jump and taken branch target against `[0, 1020]`.
//! 4. **Observability:** Logs each instruction with its disassembly when tracing is on.
//!
//! For ALU, immediate, load, and `lui` instructions a destination of `R[0]`
//! skips the whole computation, including any load side effect. Encoding
//! validity is still checked first. Jumps and branches always transfer
//! control; `R[0]` only suppresses the link write.

use tracing::trace;

use super::Cpu;
use crate::common::constants::{INSTRUCTION_SIZE, MAX_JUMP_TARGET, MIN_JUMP_TARGET};
use crate::common::{SimError, Trap};
use crate::core::units::alu::{Alu, AluOp};
use crate::core::units::bru::BranchCond;
use crate::core::units::lsu::{LoadKind, StoreWidth};
use crate::isa::abi::REG_ZERO;
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::Decoded;
use crate::isa::rv32i::opcodes as op;
use crate::soc::console::Console;

/// Result of executing one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The machine may keep running.
    Continue,
    /// The program wrote to the halt port.
    Halted,
}

/// Program counter update requested by an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    /// Advance to the next sequential instruction.
    Next,
    /// Continue at the given, already range-checked, address.
    Jump(u32),
    /// Stop the machine.
    Halt,
}

impl<C: Console> Cpu<C> {
    /// Executes one instruction at the current program counter.
    ///
    /// # Returns
    ///
    /// `StepOutcome::Halted` after a halt port write, otherwise
    /// `StepOutcome::Continue`. The program counter is left untouched by a
    /// halt or a trap.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Trap`] for an unimplemented encoding or an
    /// illegal target or address, and [`SimError::Console`] when a console
    /// stream fails.
    pub fn step(&mut self) -> Result<StepOutcome, SimError> {
        let Some(raw) = self.bus.image.fetch(self.pc) else {
            return Err(Trap::IllegalOperation(0).into());
        };
        let d = decode(raw);

        if self.trace {
            trace!("{:#010x}: {:#010x}  {}", self.pc, raw, disassemble(raw));
        }
        self.stats.cycles += 1;

        let flow = match d.opcode {
            op::OP_REG => self.exec_reg(&d)?,
            op::OP_IMM => self.exec_imm(&d)?,
            op::OP_LOAD => self.exec_load(&d)?,
            op::OP_STORE => self.exec_store(&d)?,
            op::OP_BRANCH => self.exec_branch(&d)?,
            op::OP_JALR => self.exec_jalr(&d)?,
            op::OP_JAL => self.exec_jal(&d)?,
            op::OP_LUI => self.exec_lui(&d),
            _ => return Err(Trap::NotImplemented(raw).into()),
        };

        match flow {
            Flow::Next => {
                self.pc += INSTRUCTION_SIZE;
                Ok(StepOutcome::Continue)
            }
            Flow::Jump(target) => {
                self.pc = target;
                Ok(StepOutcome::Continue)
            }
            Flow::Halt => Ok(StepOutcome::Halted),
        }
    }

    fn exec_reg(&mut self, d: &Decoded) -> Result<Flow, SimError> {
        let alu_op = AluOp::from_reg(d.funct3, d.funct7).ok_or(Trap::NotImplemented(d.raw))?;
        self.stats.inst_alu += 1;
        if d.rd != REG_ZERO {
            let result = Alu::execute(alu_op, self.regs.read(d.rs1), self.regs.read(d.rs2));
            self.regs.write(d.rd, result);
        }
        Ok(Flow::Next)
    }

    fn exec_imm(&mut self, d: &Decoded) -> Result<Flow, SimError> {
        let alu_op = AluOp::from_imm(d.funct3).ok_or(Trap::NotImplemented(d.raw))?;
        self.stats.inst_alu += 1;
        if d.rd != REG_ZERO {
            let result = Alu::execute(alu_op, self.regs.read(d.rs1), d.imm_i as u32);
            self.regs.write(d.rd, result);
        }
        Ok(Flow::Next)
    }

    fn exec_load(&mut self, d: &Decoded) -> Result<Flow, SimError> {
        let kind = LoadKind::from_funct3(d.funct3).ok_or(Trap::NotImplemented(d.raw))?;
        self.stats.inst_load += 1;
        if d.rd != REG_ZERO {
            let addr = self.regs.read(d.rs1).wrapping_add(d.imm_i as u32);
            let value = self.load(addr, kind, d.raw)?;
            self.regs.write(d.rd, value);
        }
        Ok(Flow::Next)
    }

    fn exec_store(&mut self, d: &Decoded) -> Result<Flow, SimError> {
        let width = StoreWidth::from_funct3(d.funct3).ok_or(Trap::NotImplemented(d.raw))?;
        self.stats.inst_store += 1;
        let addr = self.regs.read(d.rs1).wrapping_add(d.imm_s as u32);
        self.store(addr, width, self.regs.read(d.rs2), d.raw)
    }

    fn exec_branch(&mut self, d: &Decoded) -> Result<Flow, SimError> {
        let cond = BranchCond::from_funct3(d.funct3).ok_or(Trap::NotImplemented(d.raw))?;
        self.stats.inst_branch += 1;
        if !cond.evaluate(self.regs.read(d.rs1), self.regs.read(d.rs2)) {
            return Ok(Flow::Next);
        }
        self.stats.branches_taken += 1;

        let lower = offset_target(self.pc, cond.check_offset(d.imm_sb));
        let target = offset_target(self.pc, d.imm_sb);
        if lower < MIN_JUMP_TARGET || target > MAX_JUMP_TARGET {
            return Err(Trap::IllegalOperation(d.raw).into());
        }
        Ok(Flow::Jump(target as u32))
    }

    fn exec_jalr(&mut self, d: &Decoded) -> Result<Flow, SimError> {
        self.stats.inst_jump += 1;
        let target = checked_target(self.regs.read(d.rs1), d.imm_i, d.raw)?;
        self.regs.write(d.rd, self.pc + INSTRUCTION_SIZE);
        Ok(Flow::Jump(target))
    }

    fn exec_jal(&mut self, d: &Decoded) -> Result<Flow, SimError> {
        self.stats.inst_jump += 1;
        let target = checked_target(self.pc, d.imm_uj, d.raw)?;
        self.regs.write(d.rd, self.pc + INSTRUCTION_SIZE);
        Ok(Flow::Jump(target))
    }

    fn exec_lui(&mut self, d: &Decoded) -> Flow {
        self.stats.inst_upper += 1;
        if d.rd != REG_ZERO {
            self.regs.write(d.rd, d.imm_u as u32);
        }
        Flow::Next
    }
}

/// Adds a signed offset to a base address with 32-bit wraparound, viewed as signed.
const fn offset_target(base: u32, offset: i32) -> i32 {
    base.wrapping_add(offset as u32) as i32
}

/// Computes `base + offset` and requires it to lie in `[0, 1020]`.
const fn checked_target(base: u32, offset: i32, raw: u32) -> Result<u32, Trap> {
    let target = offset_target(base, offset);
    if target < MIN_JUMP_TARGET || target > MAX_JUMP_TARGET {
        return Err(Trap::IllegalOperation(raw));
    }
    Ok(target as u32)
}
