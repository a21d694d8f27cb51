pub mod asm;
pub mod cpu;
pub mod decoder;
pub mod disasm;
pub mod dump;
pub mod exec;
pub mod instructions;
pub mod memory;

pub mod isa {
    pub mod acc32; // 32-bit word, 8-bit opcode, 24-bit operand
}

pub use asm::{assemble, Assembly};
pub use cpu::{Cpu, CpuConfig, RunFlags, Trap};
pub use memory::{Bus, ImageError, WordMemory};
