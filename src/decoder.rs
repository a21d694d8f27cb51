use serde::{Deserialize, Serialize};

/// Size of one instruction/data word in bytes.
pub const WORD_BYTES: usize = 4;

/// Inclusive bounds of a 24-bit two's-complement operand.
pub const OPERAND_MIN: i32 = -(1 << 23);
pub const OPERAND_MAX: i32 = (1 << 23) - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Op {
    Ldc = 0,
    Adc = 1,
    Ldl = 2,
    Stl = 3,
    Ldnl = 4,
    Stnl = 5,
    Add = 6,
    Sub = 7,
    Shl = 8,
    Shr = 9,
    Adj = 10,
    A2sp = 11,
    Sp2a = 12,
    Call = 13,
    Return = 14,
    Brz = 15,
    Brlz = 16,
    Br = 17,
    Halt = 18,
}

impl Op {
    pub const ALL: [Op; 19] = [
        Op::Ldc,
        Op::Adc,
        Op::Ldl,
        Op::Stl,
        Op::Ldnl,
        Op::Stnl,
        Op::Add,
        Op::Sub,
        Op::Shl,
        Op::Shr,
        Op::Adj,
        Op::A2sp,
        Op::Sp2a,
        Op::Call,
        Op::Return,
        Op::Brz,
        Op::Brlz,
        Op::Br,
        Op::Halt,
    ];

    pub fn from_code(code: u8) -> Option<Op> {
        Op::ALL.get(code as usize).copied()
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoded {
    pub op: Op,
    /// Sign-extended operand from bytes 1..=3; zero for operand-less opcodes.
    pub operand: i32,
}

pub trait Decoder {
    fn decode(&self, raw32: u32) -> Option<Decoded>;
}

/// Low byte of a word.
pub fn opcode_of(raw32: u32) -> u8 {
    (raw32 & 0xFF) as u8
}

/// High 24 bits of a word, sign-extended.
pub fn operand_of(raw32: u32) -> i32 {
    (raw32 as i32) >> 8
}

/// Little-endian bytes 1..=3 of a word carrying `value` truncated to 24 bits.
pub fn operand_bytes(value: i32) -> [u8; 3] {
    let v = value as u32;
    [(v & 0xFF) as u8, ((v >> 8) & 0xFF) as u8, ((v >> 16) & 0xFF) as u8]
}

/// Packs an opcode and operand into a raw word.
pub fn pack_word(opcode: u8, operand: i32) -> u32 {
    ((operand as u32) << 8) | opcode as u32
}
