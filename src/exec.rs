use crate::cpu::{Cpu, Trap};
use crate::decoder::{Decoded, Op};
use crate::memory::Bus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Halt,
}

pub trait Executor {
    fn exec<B: Bus>(&self, cpu: &mut Cpu, bus: &mut B, d: Decoded) -> Result<Flow, Trap>;
}

fn load<B: Bus>(bus: &mut B, addr: i32) -> Result<i32, Trap> {
    bus.read_word(addr)
        .map(|w| w as i32)
        .map_err(|source| Trap::Bus { addr, source })
}

fn store<B: Bus>(bus: &mut B, addr: i32, val: i32) -> Result<(), Trap> {
    bus.write_word(addr, val as u32)
        .map_err(|source| Trap::Bus { addr, source })
}

/// Integer executor. Arithmetic wraps at 32 bits; branch displacements are
/// relative to the following word because `pc` advances after every step.
pub struct IntExecutor;
impl Executor for IntExecutor {
    fn exec<B: Bus>(&self, cpu: &mut Cpu, bus: &mut B, d: Decoded) -> Result<Flow, Trap> {
        let op = d.operand;
        match d.op {
            Op::Ldc => {
                cpu.b = cpu.a;
                cpu.a = op;
            }
            Op::Adc => {
                cpu.a = cpu.a.wrapping_add(op);
            }
            Op::Ldl => {
                let v = load(bus, cpu.sp.wrapping_add(op))?;
                cpu.b = cpu.a;
                cpu.a = v;
            }
            Op::Stl => {
                store(bus, cpu.sp.wrapping_add(op), cpu.a)?;
                cpu.a = cpu.b;
            }
            Op::Ldnl => {
                cpu.a = load(bus, cpu.a.wrapping_add(op))?;
            }
            Op::Stnl => {
                store(bus, cpu.a.wrapping_add(op), cpu.b)?;
            }
            Op::Add => {
                cpu.a = cpu.a.wrapping_add(cpu.b);
            }
            Op::Sub => {
                cpu.a = cpu.b.wrapping_sub(cpu.a);
            }
            Op::Shl => {
                // shift count taken modulo 32
                cpu.a = cpu.b.wrapping_shl(cpu.a as u32);
            }
            Op::Shr => {
                cpu.a = cpu.b.wrapping_shr(cpu.a as u32);
            }
            Op::Adj => {
                cpu.sp = cpu.sp.wrapping_add(op);
            }
            Op::A2sp => {
                cpu.sp = cpu.a;
                cpu.a = cpu.b;
            }
            Op::Sp2a => {
                cpu.b = cpu.a;
                cpu.a = cpu.sp;
            }
            Op::Call => {
                cpu.b = cpu.a;
                cpu.a = cpu.pc;
                cpu.pc = cpu.pc.wrapping_add(op);
            }
            Op::Return => {
                cpu.pc = cpu.a;
                cpu.a = cpu.b;
            }
            Op::Brz => {
                if cpu.a == 0 {
                    cpu.pc = cpu.pc.wrapping_add(op);
                }
            }
            Op::Brlz => {
                if cpu.a < 0 {
                    cpu.pc = cpu.pc.wrapping_add(op);
                }
            }
            Op::Br => {
                cpu.pc = cpu.pc.wrapping_add(op);
            }
            Op::Halt => return Ok(Flow::Halt),
        }
        Ok(Flow::Continue)
    }
}
