use anyhow::Error;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decoder::{opcode_of, Decoder};
use crate::disasm::fmt_decoded;
use crate::exec::{Executor, Flow};
use crate::memory::Bus;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuConfig {
    /// Upper bound on executed instructions; `None` runs until `HALT` or a trap.
    pub max_steps: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cpu {
    pub a: i32,  // accumulator
    pub b: i32,  // previous accumulator
    pub sp: i32, // stack/frame pointer, word index
    pub pc: i32, // word index of the next instruction
    #[serde(skip)]
    pub cfg: CpuConfig,
}

bitflags! {
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunFlags: u8 {
const TRACE = 1 << 0;       // register trace after every step
const DUMP_BEFORE = 1 << 1; // memory dump of the loaded image
const DUMP_AFTER = 1 << 2;  // memory dump once halted
}
}

#[derive(thiserror::Error, Debug)]
pub enum Trap {
    #[error("unknown instruction with code {opcode:#04x} at pc={pc:#010x}")]
    InvalidInstruction { opcode: u8, pc: i32 },
    #[error("pc={pc:#010x} outside program image of {len} words")]
    PcOutOfBounds { pc: i32, len: usize },
    #[error("bus error at word {addr:#010x}: {source}")]
    Bus { addr: i32, #[source] source: Error },
    #[error("step limit of {steps} instructions reached")]
    StepLimit { steps: u64 },
}

impl Cpu {
    pub fn new(cfg: CpuConfig) -> Self {
        Self {
            a: 0,
            b: 0,
            sp: 0,
            pc: 0,
            cfg,
        }
    }

    pub fn reset(&mut self, reset_pc: i32) {
        self.a = 0;
        self.b = 0;
        self.sp = 0;
        self.pc = reset_pc;
    }

    /// Executes the word at `pc`. The program counter moves past it unless
    /// the instruction halts.
    pub fn step<B: Bus, D: Decoder, X: Executor>(
        &mut self,
        bus: &mut B,
        dec: &D,
        exec: &X,
    ) -> Result<Flow, Trap> {
        let pc = self.pc;
        let len = bus.len_words();
        if pc < 0 || pc as usize >= len {
            return Err(Trap::PcOutOfBounds { pc, len });
        }
        let raw32 = bus
            .read_word(pc)
            .map_err(|source| Trap::Bus { addr: pc, source })?;
        let d = dec.decode(raw32).ok_or(Trap::InvalidInstruction {
            opcode: opcode_of(raw32),
            pc,
        })?;
        debug!(pc, insn = %fmt_decoded(&d), "exec");
        let flow = exec.exec(self, bus, d)?;
        if flow == Flow::Continue {
            self.pc = self.pc.wrapping_add(1);
        }
        Ok(flow)
    }

    /// Runs until `HALT`, returning the number of executed instructions
    /// (the halt included). `on_step` observes the state after every
    /// non-halting instruction.
    pub fn run<B, D, X, F>(&mut self, bus: &mut B, dec: &D, exec: &X, mut on_step: F) -> Result<u64, Trap>
    where
        B: Bus,
        D: Decoder,
        X: Executor,
        F: FnMut(&Cpu),
    {
        let mut steps = 0u64;
        loop {
            if let Some(max) = self.cfg.max_steps {
                if steps >= max {
                    return Err(Trap::StepLimit { steps });
                }
            }
            let flow = self.step(bus, dec, exec)?;
            steps += 1;
            match flow {
                Flow::Halt => {
                    debug!(steps, pc = self.pc, "halted");
                    return Ok(steps);
                }
                Flow::Continue => on_step(self),
            }
        }
    }
}
