use riskxvii_core::isa::rv32i::opcodes::*;

/// Builds raw instruction words field by field.
///
/// Field placement follows the machine's decoder: `rd` at bits 7..12,
/// `funct3` at 12..15, `rs1` at 15..20, `rs2` at 20..25, `funct7` at 25..32,
/// and the immediate scattered per format.
pub struct InstructionBuilder {
    opcode: u32,
    rd: u32,
    funct3: u32,
    rs1: u32,
    rs2: u32,
    funct7: u32,
    imm: i32,
}

impl Default for InstructionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self {
            opcode: 0,
            rd: 0,
            funct3: 0,
            rs1: 0,
            rs2: 0,
            funct7: 0,
            imm: 0,
        }
    }

    pub fn opcode(mut self, op: u32) -> Self {
        self.opcode = op;
        self
    }

    pub fn rd(mut self, rd: u32) -> Self {
        self.rd = rd;
        self
    }

    pub fn rs1(mut self, rs1: u32) -> Self {
        self.rs1 = rs1;
        self
    }

    pub fn rs2(mut self, rs2: u32) -> Self {
        self.rs2 = rs2;
        self
    }

    pub fn funct3(mut self, funct3: u32) -> Self {
        self.funct3 = funct3;
        self
    }

    pub fn funct7(mut self, funct7: u32) -> Self {
        self.funct7 = funct7;
        self
    }

    pub fn imm(mut self, imm: i32) -> Self {
        self.imm = imm;
        self
    }

    // --- Helpers for Common Instructions ---

    fn reg(mut self, rd: u32, rs1: u32, rs2: u32, funct3: u32, funct7: u32) -> Self {
        self.opcode = OP_REG;
        self.rd = rd;
        self.rs1 = rs1;
        self.rs2 = rs2;
        self.funct3 = funct3;
        self.funct7 = funct7;
        self
    }

    fn imm_op(mut self, opcode: u32, rd: u32, rs1: u32, imm: i32, funct3: u32) -> Self {
        self.opcode = opcode;
        self.rd = rd;
        self.rs1 = rs1;
        self.imm = imm;
        self.funct3 = funct3;
        self
    }

    fn store(mut self, rs1: u32, rs2: u32, imm: i32, funct3: u32) -> Self {
        self.opcode = OP_STORE;
        self.rs1 = rs1;
        self.rs2 = rs2;
        self.imm = imm;
        self.funct3 = funct3;
        self
    }

    fn branch(mut self, rs1: u32, rs2: u32, imm: i32, funct3: u32) -> Self {
        self.opcode = OP_BRANCH;
        self.rs1 = rs1;
        self.rs2 = rs2;
        self.imm = imm;
        self.funct3 = funct3;
        self
    }

    pub fn add(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(rd, rs1, rs2, 0b000, 0b0000000)
    }

    pub fn sub(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(rd, rs1, rs2, 0b000, 0b0100000)
    }

    pub fn sll(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(rd, rs1, rs2, 0b001, 0b0000000)
    }

    pub fn slt(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(rd, rs1, rs2, 0b010, 0b0000000)
    }

    pub fn sltu(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(rd, rs1, rs2, 0b011, 0b0000000)
    }

    pub fn xor(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(rd, rs1, rs2, 0b100, 0b0000000)
    }

    pub fn srl(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(rd, rs1, rs2, 0b101, 0b0000000)
    }

    pub fn sra(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(rd, rs1, rs2, 0b101, 0b0100000)
    }

    pub fn or(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(rd, rs1, rs2, 0b110, 0b0000000)
    }

    pub fn and(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(rd, rs1, rs2, 0b111, 0b0000000)
    }

    pub fn addi(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.imm_op(OP_IMM, rd, rs1, imm, 0b000)
    }

    pub fn slti(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.imm_op(OP_IMM, rd, rs1, imm, 0b010)
    }

    pub fn sltiu(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.imm_op(OP_IMM, rd, rs1, imm, 0b011)
    }

    pub fn xori(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.imm_op(OP_IMM, rd, rs1, imm, 0b100)
    }

    pub fn ori(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.imm_op(OP_IMM, rd, rs1, imm, 0b110)
    }

    pub fn andi(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.imm_op(OP_IMM, rd, rs1, imm, 0b111)
    }

    pub fn lb(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.imm_op(OP_LOAD, rd, rs1, imm, 0b000)
    }

    pub fn lh(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.imm_op(OP_LOAD, rd, rs1, imm, 0b001)
    }

    pub fn lw(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.imm_op(OP_LOAD, rd, rs1, imm, 0b010)
    }

    pub fn lbu(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.imm_op(OP_LOAD, rd, rs1, imm, 0b100)
    }

    pub fn lhu(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.imm_op(OP_LOAD, rd, rs1, imm, 0b101)
    }

    pub fn jalr(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.imm_op(OP_JALR, rd, rs1, imm, 0b000)
    }

    pub fn sb(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.store(rs1, rs2, imm, 0b000)
    }

    pub fn sh(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.store(rs1, rs2, imm, 0b001)
    }

    pub fn sw(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.store(rs1, rs2, imm, 0b010)
    }

    pub fn beq(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.branch(rs1, rs2, imm, 0b000)
    }

    pub fn bne(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.branch(rs1, rs2, imm, 0b001)
    }

    pub fn blt(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.branch(rs1, rs2, imm, 0b100)
    }

    pub fn bge(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.branch(rs1, rs2, imm, 0b101)
    }

    pub fn bltu(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.branch(rs1, rs2, imm, 0b110)
    }

    pub fn bgeu(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.branch(rs1, rs2, imm, 0b111)
    }

    /// `lui rd, imm`: `imm` is the 20-bit upper immediate, unshifted.
    pub fn lui(mut self, rd: u32, imm: i32) -> Self {
        self.opcode = OP_LUI;
        self.rd = rd;
        self.imm = imm;
        self
    }

    pub fn jal(mut self, rd: u32, imm: i32) -> Self {
        self.opcode = OP_JAL;
        self.rd = rd;
        self.imm = imm;
        self
    }

    pub fn build(self) -> u32 {
        let opcode = self.opcode & 0x7F;
        let rd = (self.rd & 0x1F) << 7;
        let funct3 = (self.funct3 & 0x7) << 12;
        let rs1 = (self.rs1 & 0x1F) << 15;
        let rs2 = (self.rs2 & 0x1F) << 20;
        let funct7 = (self.funct7 & 0x7F) << 25;

        match opcode {
            OP_REG => funct7 | rs2 | rs1 | funct3 | rd | opcode,
            OP_IMM | OP_LOAD | OP_JALR => {
                let imm_val = (self.imm as u32) & 0xFFF;
                (imm_val << 20) | rs1 | funct3 | rd | opcode
            }
            OP_STORE => {
                let imm_val = self.imm as u32;
                let imm_11_5 = ((imm_val >> 5) & 0x7F) << 25;
                let imm_4_0 = (imm_val & 0x1F) << 7;
                imm_11_5 | rs2 | rs1 | funct3 | imm_4_0 | opcode
            }
            OP_BRANCH => {
                let imm_val = self.imm as u32;
                let bit_12 = ((imm_val >> 12) & 0x1) << 31;
                let bits_10_5 = ((imm_val >> 5) & 0x3F) << 25;
                let bits_4_1 = ((imm_val >> 1) & 0xF) << 8;
                let bit_11 = ((imm_val >> 11) & 0x1) << 7;
                bit_12 | bits_10_5 | rs2 | rs1 | funct3 | bits_4_1 | bit_11 | opcode
            }
            OP_LUI => {
                let imm_val = (self.imm as u32) & 0xFFFFF;
                (imm_val << 12) | rd | opcode
            }
            OP_JAL => {
                let imm_val = self.imm as u32;
                let bit_20 = ((imm_val >> 20) & 0x1) << 31;
                let bits_10_1 = ((imm_val >> 1) & 0x3FF) << 21;
                let bit_11 = ((imm_val >> 11) & 0x1) << 20;
                let bits_19_12 = ((imm_val >> 12) & 0xFF) << 12;
                bit_20 | bits_10_1 | bit_11 | bits_19_12 | rd | opcode
            }
            _ => funct7 | rs2 | rs1 | funct3 | rd | opcode,
        }
    }
}

/// Shorthand for `InstructionBuilder::new()`.
pub fn inst() -> InstructionBuilder {
    InstructionBuilder::new()
}

/// Returns the instructions that load `value` into `rd` (`lui` + `addi`).
pub fn li(rd: u32, value: u32) -> [u32; 2] {
    let low = ((value & 0xFFF) as i32) << 20 >> 20;
    let upper = value.wrapping_sub(low as u32) >> 12;
    [
        inst().lui(rd, upper as i32).build(),
        inst().addi(rd, rd, low).build(),
    ]
}
