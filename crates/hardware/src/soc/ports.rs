//! Control Port Map.
//!
//! A fixed set of addresses that trigger console, debug, or allocator side
//! effects instead of addressing memory. Stores are offered to the write
//! ports before any heap access; loads consult the read ports first.
//!
//! | address | direction | effect |
//! |---|---|---|
//! | `0x0800` | write | emit one character |
//! | `0x0804` | write | emit a signed decimal |
//! | `0x0808` | write | emit unsigned hexadecimal |
//! | `0x080C` | write | halt |
//! | `0x0812` | read | read one character |
//! | `0x0816` | read | read a signed decimal |
//! | `0x0820` | write | dump the program counter |
//! | `0x0824` | write | dump the counter and registers |
//! | `0x0828` | write | dump one heap byte |
//! | `0x0830` | write | allocate |
//! | `0x0834` | write | free |

/// Console Write Character.
pub const CONSOLE_WRITE_CHAR: u32 = 0x0800;
/// Console Write Signed Integer.
pub const CONSOLE_WRITE_SIGNED: u32 = 0x0804;
/// Console Write Unsigned Integer (hexadecimal).
pub const CONSOLE_WRITE_HEX: u32 = 0x0808;
/// Halt.
pub const HALT: u32 = 0x080C;
/// Console Read Character.
pub const CONSOLE_READ_CHAR: u32 = 0x0812;
/// Console Read Signed Integer.
pub const CONSOLE_READ_SIGNED: u32 = 0x0816;
/// Dump PC.
pub const DUMP_PC: u32 = 0x0820;
/// Dump Register Banks.
pub const DUMP_REGISTERS: u32 = 0x0824;
/// Dump Memory Word.
pub const DUMP_HEAP_BYTE: u32 = 0x0828;
/// Allocate heap banks.
pub const MALLOC: u32 = 0x0830;
/// Free heap banks.
pub const FREE: u32 = 0x0834;

/// Ports intercepted on the store path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WritePort {
    /// Emit the low byte of the value as a character.
    ConsoleChar,
    /// Emit the value as a signed decimal.
    ConsoleSigned,
    /// Emit the value as unsigned lowercase hexadecimal.
    ConsoleHex,
    /// Print a halt notice and stop the machine.
    Halt,
    /// Print the program counter in hexadecimal.
    DumpPc,
    /// Print the program counter and all registers.
    DumpRegisters,
    /// Print the heap byte at the address held in the value.
    ///
    /// A value outside the heap is not handled here: the store falls through
    /// to ordinary memory at `0x0828`, which raises an illegal operation.
    DumpHeapByte,
    /// Allocate heap banks; the result lands in `R[28]`.
    Malloc,
    /// Release the allocation holding the address in the value.
    Free,
}

impl WritePort {
    /// Maps a store address to a port, if it is one.
    pub const fn decode(addr: u32) -> Option<Self> {
        Some(match addr {
            CONSOLE_WRITE_CHAR => Self::ConsoleChar,
            CONSOLE_WRITE_SIGNED => Self::ConsoleSigned,
            CONSOLE_WRITE_HEX => Self::ConsoleHex,
            HALT => Self::Halt,
            DUMP_PC => Self::DumpPc,
            DUMP_REGISTERS => Self::DumpRegisters,
            DUMP_HEAP_BYTE => Self::DumpHeapByte,
            MALLOC => Self::Malloc,
            FREE => Self::Free,
            _ => return None,
        })
    }

    /// Returns the address this port is mapped at.
    pub const fn addr(self) -> u32 {
        match self {
            Self::ConsoleChar => CONSOLE_WRITE_CHAR,
            Self::ConsoleSigned => CONSOLE_WRITE_SIGNED,
            Self::ConsoleHex => CONSOLE_WRITE_HEX,
            Self::Halt => HALT,
            Self::DumpPc => DUMP_PC,
            Self::DumpRegisters => DUMP_REGISTERS,
            Self::DumpHeapByte => DUMP_HEAP_BYTE,
            Self::Malloc => MALLOC,
            Self::Free => FREE,
        }
    }
}

/// Ports intercepted on the load path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadPort {
    /// Read one character, skipping leading whitespace.
    ConsoleChar,
    /// Read one signed decimal integer.
    ConsoleSigned,
}

impl ReadPort {
    /// Maps a load address to a port, if it is one.
    pub const fn decode(addr: u32) -> Option<Self> {
        match addr {
            CONSOLE_READ_CHAR => Some(Self::ConsoleChar),
            CONSOLE_READ_SIGNED => Some(Self::ConsoleSigned),
            _ => None,
        }
    }

    /// Returns the address this port is mapped at.
    pub const fn addr(self) -> u32 {
        match self {
            Self::ConsoleChar => CONSOLE_READ_CHAR,
            Self::ConsoleSigned => CONSOLE_READ_SIGNED,
        }
    }
}
