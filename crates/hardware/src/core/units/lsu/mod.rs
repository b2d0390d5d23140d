//! Load/Store Unit (LSU).
//!
//! This module turns the bytes of a heap access into a register value and a
//! register value into the bytes of a store.
//!
//! Multi-byte loads do not assemble a little-endian word. The machine being
//! modelled combines the bytes as follows, and programs observe exactly this:
//! - `lh`: `b0 | b1`, no sign extension.
//! - `lw`: `b0 | b1 | b2 | b3`.
//! - `lhu`: `(b0 << 8) | b1`.
//!
//! Stores write the value little-endian, least-significant byte first.

use crate::isa::rv32i::funct3;

/// Width and extension of a load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadKind {
    /// `lb`: one byte, sign-extended.
    Byte,
    /// `lh`: two bytes OR-ed together.
    Half,
    /// `lw`: four bytes OR-ed together.
    Word,
    /// `lbu`: one byte, zero-extended.
    ByteUnsigned,
    /// `lhu`: first byte shifted above the second.
    HalfUnsigned,
}

impl LoadKind {
    /// Maps a load `funct3` to its kind; `None` for undefined encodings.
    pub const fn from_funct3(f3: u32) -> Option<Self> {
        Some(match f3 {
            funct3::LB => Self::Byte,
            funct3::LH => Self::Half,
            funct3::LW => Self::Word,
            funct3::LBU => Self::ByteUnsigned,
            funct3::LHU => Self::HalfUnsigned,
            _ => return None,
        })
    }

    /// Number of bytes read.
    pub const fn width(self) -> usize {
        match self {
            Self::Byte | Self::ByteUnsigned => 1,
            Self::Half | Self::HalfUnsigned => 2,
            Self::Word => 4,
        }
    }
}

/// Width of a store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreWidth {
    /// `sb`
    Byte,
    /// `sh`
    Half,
    /// `sw`
    Word,
}

impl StoreWidth {
    /// Maps a store `funct3` to its width; `None` for undefined encodings.
    pub const fn from_funct3(f3: u32) -> Option<Self> {
        Some(match f3 {
            funct3::SB => Self::Byte,
            funct3::SH => Self::Half,
            funct3::SW => Self::Word,
            _ => return None,
        })
    }

    /// Number of bytes written.
    pub const fn width(self) -> usize {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
        }
    }
}

/// Load/Store Unit (LSU) for memory operations.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Builds the register value of a load from the bytes read.
    ///
    /// # Arguments
    ///
    /// * `kind`  - The load variant
    /// * `bytes` - Bytes read from consecutive addresses; only the first
    ///   `kind.width()` are used.
    ///
    /// # Returns
    ///
    /// The value written to `rd`.
    pub const fn assemble(kind: LoadKind, bytes: [u8; 4]) -> u32 {
        let [b0, b1, b2, b3] = [
            bytes[0] as u32,
            bytes[1] as u32,
            bytes[2] as u32,
            bytes[3] as u32,
        ];
        match kind {
            LoadKind::Byte => bytes[0] as i8 as i32 as u32,
            LoadKind::ByteUnsigned => b0,
            LoadKind::Half => b0 | b1,
            LoadKind::HalfUnsigned => (b0 << 8) | b1,
            LoadKind::Word => b0 | b1 | b2 | b3,
        }
    }

    /// Splits a register value into the bytes a store writes, in address order.
    pub fn store_bytes(width: StoreWidth, value: u32) -> impl Iterator<Item = u8> {
        value.to_le_bytes().into_iter().take(width.width())
    }
}
