use accvm::decoder::pack_word;
use accvm::exec::{Flow, IntExecutor};
use accvm::isa::acc32::Acc32Decoder;
use accvm::{assemble, Cpu, CpuConfig, WordMemory};
use pretty_assertions::assert_eq;

fn load(src: &str) -> WordMemory {
    let out = assemble("smoke.s", src);
    assert!(out.errors().next().is_none(), "{:?}", out.diagnostics);
    WordMemory::from_object(&out.object.expect("object")).unwrap()
}

#[test]
fn label_operand_assembles_and_runs() {
    let out = assemble("smoke.s", "a: ldc 5\n adc a\n HALT\n");
    assert!(out.diagnostics.is_empty());
    let obj = out.object.unwrap();
    assert_eq!(obj, vec![0, 5, 0, 0, 1, 0, 0, 0, 18, 0, 0, 0]);

    let mut mem = WordMemory::from_object(&obj).unwrap();
    let mut cpu = Cpu::new(CpuConfig::default());
    let mut trace = Vec::new();
    let steps = cpu
        .run(&mut mem, &Acc32Decoder::new(), &IntExecutor, |c| {
            trace.push((c.a, c.b, c.pc, c.sp))
        })
        .unwrap();
    assert_eq!(steps, 3);
    // a label used by a non-branch instruction is its absolute index (0)
    assert_eq!(trace, vec![(5, 0, 1, 0), (5, 0, 2, 0)]);
    assert_eq!((cpu.a, cpu.b, cpu.pc, cpu.sp), (5, 0, 2, 0));
}

#[test]
fn single_step_by_hand() {
    let mut mem = WordMemory {
        words: vec![pack_word(0, 7), pack_word(1, -2), pack_word(18, 0)],
    };
    let mut cpu = Cpu::new(CpuConfig::default());
    cpu.reset(0);
    let dec = Acc32Decoder::new();
    let exec = IntExecutor;

    assert_eq!(cpu.step(&mut mem, &dec, &exec).unwrap(), Flow::Continue);
    assert_eq!((cpu.a, cpu.pc), (7, 1));
    assert_eq!(cpu.step(&mut mem, &dec, &exec).unwrap(), Flow::Continue);
    assert_eq!((cpu.a, cpu.pc), (5, 2));
    assert_eq!(cpu.step(&mut mem, &dec, &exec).unwrap(), Flow::Halt);
    assert_eq!((cpu.a, cpu.pc), (5, 2));
}

#[test]
fn countdown_loop() {
    let mut mem = load(
        "        ldc 3       ; counter
loop:   brz done
        adc -1
        br loop
done:   HALT
",
    );
    let mut cpu = Cpu::new(CpuConfig::default());
    let steps = cpu
        .run(&mut mem, &Acc32Decoder::new(), &IntExecutor, |_| {})
        .unwrap();
    assert_eq!(steps, 12);
    assert_eq!((cpu.a, cpu.pc), (0, 4));
}

#[test]
fn data_word_read_modify_write() {
    let mut mem = load(
        "        ldc total
        ldnl 0
        adc 7
        ldc total
        stnl 0
        HALT
total:  data 10
",
    );
    let mut cpu = Cpu::new(CpuConfig::default());
    cpu.run(&mut mem, &Acc32Decoder::new(), &IntExecutor, |_| {})
        .unwrap();
    assert_eq!(mem.words[6], 17);
    assert_eq!((cpu.a, cpu.b), (6, 17));
}
