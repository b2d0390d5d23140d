//! Memory Image.
//!
//! The image is populated once at load time and never mutated while the
//! machine runs. Its first half is the instruction store; the second half is
//! a data region that execution never references.

use crate::common::LoadError;
use crate::common::constants::{IMAGE_SIZE, INST_MEM_SIZE, INSTRUCTION_SIZE};
use crate::isa::decode::fetch_word;

/// A loaded memory image.
#[derive(Clone, PartialEq, Eq)]
pub struct Image {
    bytes: Box<[u8; IMAGE_SIZE]>,
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}

impl Image {
    /// Builds an image from raw file contents.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Size`] unless `data` is exactly 2048 bytes long.
    pub fn from_bytes(data: &[u8]) -> Result<Self, LoadError> {
        let bytes: [u8; IMAGE_SIZE] = data.try_into().map_err(|_| LoadError::Size {
            expected: IMAGE_SIZE,
            actual: data.len(),
        })?;
        Ok(Self {
            bytes: Box::new(bytes),
        })
    }

    /// Builds an image whose instruction store starts with `program`.
    ///
    /// Remaining bytes are zero. Words beyond the instruction store are dropped.
    pub fn from_words(program: &[u32]) -> Self {
        let mut bytes = Box::new([0u8; IMAGE_SIZE]);
        let slots = INST_MEM_SIZE / INSTRUCTION_SIZE as usize;
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(program.iter().take(slots)) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        Self { bytes }
    }

    /// Returns the instruction store.
    pub fn instructions(&self) -> &[u8] {
        &self.bytes[..INST_MEM_SIZE]
    }

    /// Returns the data region that follows the instruction store.
    pub fn data(&self) -> &[u8] {
        &self.bytes[INST_MEM_SIZE..]
    }

    /// Fetches the instruction word at `pc`.
    ///
    /// Bytes are read from the image as laid out on disk, so a misaligned
    /// counter near the end of the store reads into the data region.
    /// Returns `None` only when the four bytes would run past the image.
    pub fn fetch(&self, pc: u32) -> Option<u32> {
        let start = pc as usize;
        let word = self.bytes.get(start..start + INSTRUCTION_SIZE as usize)?;
        let mut lanes = [0u8; 4];
        lanes.copy_from_slice(word);
        Some(fetch_word(lanes))
    }
}
