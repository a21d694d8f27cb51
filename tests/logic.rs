use accvm::decoder::pack_word;
use accvm::exec::IntExecutor;
use accvm::isa::acc32::Acc32Decoder;
use accvm::{Cpu, CpuConfig, WordMemory};

fn run(words: &[u32]) -> Cpu {
    let mut mem = WordMemory { words: words.to_vec() };
    let mut cpu = Cpu::new(CpuConfig::default());
    cpu.run(&mut mem, &Acc32Decoder::new(), &IntExecutor, |_| {})
        .unwrap();
    cpu
}

fn ldc(v: i32) -> u32 {
    pack_word(0, v)
}

fn op(code: u8) -> u32 {
    pack_word(code, 0)
}

const HALT: u32 = 18;

#[test]
fn ldc_shifts_a_into_b() {
    let cpu = run(&[ldc(3), ldc(4), HALT]);
    assert_eq!((cpu.a, cpu.b), (4, 3));
}

#[test]
fn add_and_sub() {
    let cpu = run(&[ldc(3), ldc(4), op(6), HALT]);
    assert_eq!(cpu.a, 7);
    // sub computes b - a
    let cpu = run(&[ldc(10), ldc(3), op(7), HALT]);
    assert_eq!(cpu.a, 7);
}

#[test]
fn shifts_are_b_by_a() {
    let cpu = run(&[ldc(1), ldc(4), op(8), HALT]);
    assert_eq!(cpu.a, 16);
    // arithmetic right shift keeps the sign
    let cpu = run(&[ldc(-16), ldc(2), op(9), HALT]);
    assert_eq!(cpu.a, -4);
}

#[test]
fn adc_wraps_at_32_bits() {
    // 0: ldc 4  1: ldnl 0  2: adc 1  3: HALT  4: 0x7fffffff
    let cpu = run(&[ldc(4), pack_word(4, 0), pack_word(1, 1), HALT, 0x7fff_ffff]);
    assert_eq!(cpu.a, i32::MIN);
}

#[test]
fn stack_pointer_moves() {
    // ldc 5; a2sp; adj -2; sp2a
    let cpu = run(&[ldc(5), op(11), pack_word(10, -2), op(12), HALT]);
    assert_eq!(cpu.sp, 3);
    assert_eq!((cpu.a, cpu.b), (3, 0));
}

#[test]
fn operand_extremes_sign_extend() {
    let cpu = run(&[ldc(8_388_607), ldc(-8_388_608), HALT]);
    assert_eq!((cpu.b, cpu.a), (8_388_607, -8_388_608));
}
