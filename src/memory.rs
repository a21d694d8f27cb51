use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::decoder::WORD_BYTES;

/// Word-addressed memory. Addresses are word indices.
pub trait Bus {
    fn len_words(&self) -> usize;
    fn read_word(&mut self, addr: i32) -> Result<u32>;
    fn write_word(&mut self, addr: i32, val: u32) -> Result<()>;
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ImageError {
    #[error("insufficient bytes at word address {word}")]
    Truncated { word: usize },
}

/// Flat memory image holding an object file's words; code and data share it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMemory {
    pub words: Vec<u32>,
}

impl WordMemory {
    pub fn new(len_words: usize) -> Self {
        Self {
            words: vec![0; len_words],
        }
    }

    /// Interprets `bytes` as consecutive little-endian words.
    pub fn from_object(bytes: &[u8]) -> Result<Self, ImageError> {
        let chunks = bytes.chunks_exact(WORD_BYTES);
        if !chunks.remainder().is_empty() {
            return Err(ImageError::Truncated {
                word: bytes.len() / WORD_BYTES,
            });
        }
        let words = chunks
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        Ok(Self { words })
    }

    /// Pads the image with zero words up to `len_words`. Never shrinks.
    pub fn grow_to(&mut self, len_words: usize) {
        if len_words > self.words.len() {
            self.words.resize(len_words, 0);
        }
    }

    pub fn to_object(&self) -> Vec<u8> {
        self.words.iter().flat_map(|w| w.to_le_bytes()).collect()
    }

    fn slot(&self, addr: i32) -> Result<usize> {
        match usize::try_from(addr) {
            Ok(i) if i < self.words.len() => Ok(i),
            _ => bail!(
                "word address {addr} outside memory of {} words",
                self.words.len()
            ),
        }
    }
}

impl Bus for WordMemory {
    fn len_words(&self) -> usize {
        self.words.len()
    }
    fn read_word(&mut self, addr: i32) -> Result<u32> {
        let i = self.slot(addr)?;
        Ok(self.words[i])
    }
    fn write_word(&mut self, addr: i32, val: u32) -> Result<()> {
        let i = self.slot(addr)?;
        self.words[i] = val;
        Ok(())
    }
}
