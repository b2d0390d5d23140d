//! Register file tests.

use pretty_assertions::assert_eq;
use riskxvii_core::common::RegisterFile;

#[test]
fn zero_register_ignores_writes() {
    let mut regs = RegisterFile::new();
    regs.write(0, 0xDEAD_BEEF);
    assert_eq!(regs.read(0), 0);
}

#[test]
fn general_registers_round_trip() {
    let mut regs = RegisterFile::new();
    for i in 1..32 {
        regs.write(i, (i as u32) * 0x0101_0101);
    }
    for i in 1..32 {
        assert_eq!(regs.read(i), (i as u32) * 0x0101_0101);
    }
}

#[test]
fn dump_lists_every_register() {
    let mut regs = RegisterFile::new();
    regs.write(5, 10);
    let mut out = Vec::new();
    regs.dump(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 32);
    assert_eq!(lines[0], "R[0] = 0x00000000;");
    assert_eq!(lines[5], "R[5] = 0x0000000a;");
    assert_eq!(lines[31], "R[31] = 0x00000000;");
}
