//! Trap and error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Trap Representation:** The two fatal execution categories, each carrying the raw
//!    instruction word that caused it.
//! 2. **Run Errors:** Everything that can abort a run, traps and console I/O failures alike.
//! 3. **Load Errors:** Failures while reading a memory image from disk.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal execution conditions.
///
/// Both variants are unrecoverable: the run loop stops, the caller dumps the
/// machine state, and the process exits. The `Display` output is the exact
/// diagnostic line printed before the register dump.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Trap {
    /// The opcode/func3/func7 combination has no defined semantics.
    ///
    /// The associated value is the raw instruction word.
    #[error("Instruction Not Implemented: {0:#010x}")]
    NotImplemented(u32),

    /// A control-flow target or a load/store address is out of range.
    ///
    /// The associated value is the raw instruction word.
    #[error("Illegal Operation: {0:#010x}")]
    IllegalOperation(u32),
}

impl Trap {
    /// Returns the raw instruction word that raised the trap.
    pub const fn raw(&self) -> u32 {
        match self {
            Self::NotImplemented(raw) | Self::IllegalOperation(raw) => *raw,
        }
    }
}

/// Errors that abort a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    /// The executed program hit a fatal trap.
    #[error(transparent)]
    Trap(#[from] Trap),

    /// Reading from or writing to the console streams failed.
    #[error("console I/O failed: {0}")]
    Console(#[from] io::Error),
}

/// Errors raised while loading a memory image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image file could not be opened or read.
    #[error("Unable to open input file: {}: {source}", path.display())]
    Open {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The image does not have the required size.
    #[error("Error reading from file: expected {expected} bytes, found {actual}")]
    Size {
        /// Required image size in bytes.
        expected: usize,
        /// Size of the supplied image in bytes.
        actual: usize,
    },
}
