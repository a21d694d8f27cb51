use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::OnceLock;

use crate::decoder::Op;

#[derive(Debug, Clone, Copy)]
pub struct InstrDesc {
    pub op: Op,
    pub mnemonic: &'static str,
    pub takes_operand: bool,
}

/// Real opcodes. The opcode value of each entry equals its index.
pub const TABLE: &[InstrDesc] = &[
    InstrDesc { op: Op::Ldc, mnemonic: "ldc", takes_operand: true },
    InstrDesc { op: Op::Adc, mnemonic: "adc", takes_operand: true },
    InstrDesc { op: Op::Ldl, mnemonic: "ldl", takes_operand: true },
    InstrDesc { op: Op::Stl, mnemonic: "stl", takes_operand: true },
    InstrDesc { op: Op::Ldnl, mnemonic: "ldnl", takes_operand: true },
    InstrDesc { op: Op::Stnl, mnemonic: "stnl", takes_operand: true },
    InstrDesc { op: Op::Add, mnemonic: "add", takes_operand: false },
    InstrDesc { op: Op::Sub, mnemonic: "sub", takes_operand: false },
    InstrDesc { op: Op::Shl, mnemonic: "shl", takes_operand: false },
    InstrDesc { op: Op::Shr, mnemonic: "shr", takes_operand: false },
    InstrDesc { op: Op::Adj, mnemonic: "adj", takes_operand: true },
    InstrDesc { op: Op::A2sp, mnemonic: "a2sp", takes_operand: false },
    InstrDesc { op: Op::Sp2a, mnemonic: "sp2a", takes_operand: false },
    InstrDesc { op: Op::Call, mnemonic: "call", takes_operand: true },
    InstrDesc { op: Op::Return, mnemonic: "return", takes_operand: false },
    InstrDesc { op: Op::Brz, mnemonic: "brz", takes_operand: true },
    InstrDesc { op: Op::Brlz, mnemonic: "brlz", takes_operand: true },
    InstrDesc { op: Op::Br, mnemonic: "br", takes_operand: true },
    InstrDesc { op: Op::Halt, mnemonic: "HALT", takes_operand: false },
];

/// Opcodes whose symbolic operands are resolved as PC-relative displacements.
pub const BRANCH_RANGE: RangeInclusive<u8> = 13..=17;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pseudo {
    /// Emits the operand as a raw 32-bit word.
    Data,
    /// Overrides the word index of the label on the same line.
    Set,
}

#[derive(Debug, Clone, Copy)]
pub struct PseudoDesc {
    pub pseudo: Pseudo,
    pub mnemonic: &'static str,
    pub takes_operand: bool,
}

pub const PSEUDO: &[PseudoDesc] = &[
    PseudoDesc { pseudo: Pseudo::Data, mnemonic: "data", takes_operand: true },
    PseudoDesc { pseudo: Pseudo::Set, mnemonic: "SET", takes_operand: true },
];

#[derive(Debug, Clone, Copy)]
pub enum Mnemonic {
    Real(&'static InstrDesc),
    Pseudo(&'static PseudoDesc),
}

impl Mnemonic {
    pub fn takes_operand(&self) -> bool {
        match self {
            Mnemonic::Real(d) => d.takes_operand,
            Mnemonic::Pseudo(p) => p.takes_operand,
        }
    }
}

fn index() -> &'static HashMap<&'static str, Mnemonic> {
    static INDEX: OnceLock<HashMap<&'static str, Mnemonic>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut map = HashMap::with_capacity(TABLE.len() + PSEUDO.len());
        for d in TABLE {
            map.insert(d.mnemonic, Mnemonic::Real(d));
        }
        for p in PSEUDO {
            map.insert(p.mnemonic, Mnemonic::Pseudo(p));
        }
        map
    })
}

/// Exact, case-sensitive mnemonic lookup.
pub fn lookup(mnemonic: &str) -> Option<Mnemonic> {
    index().get(mnemonic).copied()
}

pub fn desc(op: Op) -> &'static InstrDesc {
    &TABLE[op.code() as usize]
}

pub fn is_branch(op: Op) -> bool {
    BRANCH_RANGE.contains(&op.code())
}
