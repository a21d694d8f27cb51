use accvm::exec::IntExecutor;
use accvm::isa::acc32::Acc32Decoder;
use accvm::{assemble, Cpu, CpuConfig, WordMemory};

#[test]
fn call_saves_return_address_and_return_resumes_after_call() {
    // The callee spills the return address to the stack, doubles the
    // argument passed in b, reloads the return address and returns.
    let src = "\
        ldc stack
        a2sp
        ldc 21
        call double
        HALT
double: stl 0
        add
        ldl 0
        return
stack:  data 0
";
    let out = assemble("call.s", src);
    assert!(out.diagnostics.is_empty(), "{:?}", out.diagnostics);
    let mut mem = WordMemory::from_object(&out.object.unwrap()).unwrap();

    let mut cpu = Cpu::new(CpuConfig::default());
    let mut pcs = Vec::new();
    let steps = cpu
        .run(&mut mem, &Acc32Decoder::new(), &IntExecutor, |c| pcs.push(c.pc))
        .unwrap();

    assert_eq!(steps, 9);
    assert_eq!(pcs, vec![1, 2, 3, 5, 6, 7, 8, 4]);
    assert_eq!((cpu.a, cpu.b, cpu.sp, cpu.pc), (42, 42, 9, 4));
    // return address of the call at word 3
    assert_eq!(mem.words[9], 3);
}

#[test]
fn call_operand_is_displacement_from_next_word() {
    let out = assemble("call.s", "call f\nHALT\nf: return\n");
    let obj = out.object.unwrap();
    // f is word 2, call is word 0: 2 - (0 + 1) = 1
    assert_eq!(&obj[0..4], &[13, 1, 0, 0]);
}
