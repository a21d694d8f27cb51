//! Textual renderings of interpreter state: memory dumps and register traces.

use std::io::{self, Write};

use crate::cpu::Cpu;

const WORDS_PER_LINE: usize = 4;

/// Hex listing of `words`, four per line, each line prefixed with the index
/// of its first word. Words are printed most significant byte first.
pub fn write_memory<W: Write>(out: &mut W, words: &[u32]) -> io::Result<()> {
    writeln!(out, "(big endian)")?;
    for (line, chunk) in words.chunks(WORDS_PER_LINE).enumerate() {
        write!(out, "{:08x}: ", line * WORDS_PER_LINE)?;
        for (i, w) in chunk.iter().enumerate() {
            let sep = if i == WORDS_PER_LINE - 1 { '\n' } else { ' ' };
            write!(out, "{w:08x}{sep}")?;
        }
        if chunk.len() < WORDS_PER_LINE {
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn write_registers<W: Write>(out: &mut W, cpu: &Cpu) -> io::Result<()> {
    write!(
        out,
        "a\t: {}\nb\t: {}\npc\t: {}\nsp\t: {}\n\n",
        cpu.a, cpu.b, cpu.pc, cpu.sp
    )
}
