use crate::decoder::{operand_bytes, WORD_BYTES};

/// Output buffer of little-endian words.
#[derive(Debug, Default)]
pub struct Encoder {
    buf: Vec<u8>,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the next word to be written.
    pub fn word_index(&self) -> usize {
        self.buf.len() / WORD_BYTES
    }

    pub fn emit_plain(&mut self, opcode: u8) {
        self.buf.extend_from_slice(&[opcode, 0, 0, 0]);
    }

    /// Opcode plus operand truncated to 24 bits.
    pub fn emit_operand(&mut self, opcode: u8, value: i32) {
        self.buf.push(opcode);
        self.buf.extend_from_slice(&operand_bytes(value));
    }

    /// Opcode with a zero operand to be patched later; returns its word index.
    pub fn emit_reserved(&mut self, opcode: u8) -> usize {
        let idx = self.word_index();
        self.emit_plain(opcode);
        idx
    }

    /// Raw 32-bit data word.
    pub fn emit_data(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Overwrites bytes 1..=3 of word `word_index`; the opcode byte is kept.
    pub fn patch_operand(&mut self, word_index: usize, value: i32) {
        let at = word_index * WORD_BYTES + 1;
        self.buf[at..at + 3].copy_from_slice(&operand_bytes(value));
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
