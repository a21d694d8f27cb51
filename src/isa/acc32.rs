use crate::decoder::{opcode_of, operand_of, Decoded, Decoder, Op};
use crate::instructions;

/// Decoder for the 32-bit accumulator word format: opcode in the low byte,
/// signed 24-bit operand in the upper three bytes.
pub struct Acc32Decoder;

impl Acc32Decoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Acc32Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for Acc32Decoder {
    fn decode(&self, raw32: u32) -> Option<Decoded> {
        let op = Op::from_code(opcode_of(raw32))?;
        // Operand-less opcodes ignore whatever sits in the upper bytes.
        let operand = if instructions::desc(op).takes_operand {
            operand_of(raw32)
        } else {
            0
        };
        Some(Decoded { op, operand })
    }
}
