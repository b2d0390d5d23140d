//! Configuration system for the RISK-XVII virtual machine.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline values so that an empty document is a valid configuration.
//! 2. **Structures:** Hierarchical config for general run options and the heap allocator.
//! 3. **Enums:** Allocation sizing policy for the allocator port.
//!
//! Configuration is supplied as JSON (`--config` on the command line) or built with
//! `Config::default()`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default configuration constants for the machine.
mod defaults {
    /// Request size used by the allocator port under [`super::AllocSizing::FixedWord`].
    ///
    /// Matches the size of the stored register value in bytes.
    pub const FIXED_WORD_REQUEST: u32 = 4;
}

/// How the allocator port derives the size of a request.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum AllocSizing {
    /// Every request asks for one register-sized word, whatever value is stored.
    ///
    /// Every request then fits in one bank, so multi-bank allocations never occur.
    #[default]
    #[serde(alias = "Fixed")]
    FixedWord,

    /// The value stored to the port is the requested size in bytes.
    ///
    /// Opt-in; requests larger than one bank take a contiguous run of banks.
    Requested,
}

impl AllocSizing {
    /// Returns the request size in bytes for a value stored to the allocator port.
    ///
    /// # Arguments
    ///
    /// * `value` - The register value written to the port.
    pub const fn request_size(self, value: u32) -> u32 {
        match self {
            Self::Requested => value,
            Self::FixedWord => defaults::FIXED_WORD_REQUEST,
        }
    }
}

/// Errors raised while reading a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("unable to read config {}: {source}", path.display())]
    Read {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid configuration JSON.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Main configuration structure for the machine.
///
/// Every section and field is optional in the serialized form.
///
/// # Examples
///
/// ```
/// use riskxvii_core::config::{AllocSizing, Config};
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "heap": { "alloc_sizing": "Requested" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert!(!config.general.print_stats);
/// assert_eq!(config.heap.alloc_sizing, AllocSizing::Requested);
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// General run settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Heap allocator settings
    #[serde(default)]
    pub heap: HeapConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents are malformed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General run settings and options.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Log every executed instruction with its disassembly at `trace` level
    #[serde(default)]
    pub trace_instructions: bool,

    /// Print run statistics to stderr when the machine stops
    #[serde(default)]
    pub print_stats: bool,
}

/// Heap allocator settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct HeapConfig {
    /// Request sizing policy of the allocator port
    #[serde(default)]
    pub alloc_sizing: AllocSizing,
}
