use accvm::decoder::{operand_bytes, operand_of, pack_word, Decoder, Op, OPERAND_MAX, OPERAND_MIN};
use accvm::disasm::fmt_decoded;
use accvm::isa::acc32::Acc32Decoder;

#[test]
fn decode_signed_operand() {
    let dec = Acc32Decoder::new();
    let d = dec.decode(pack_word(17, -3)).unwrap();
    assert_eq!(d.op, Op::Br);
    assert_eq!(d.operand, -3);
    assert_eq!(fmt_decoded(&d), "br -3");
}

#[test]
fn operand_less_opcodes_ignore_upper_bytes() {
    let dec = Acc32Decoder::new();
    let d = dec.decode(pack_word(6, 0x55)).unwrap();
    assert_eq!(d.op, Op::Add);
    assert_eq!(d.operand, 0);
    assert_eq!(fmt_decoded(&d), "add");
    assert_eq!(fmt_decoded(&dec.decode(18).unwrap()), "HALT");
}

#[test]
fn opcodes_past_halt_do_not_decode() {
    let dec = Acc32Decoder::new();
    for code in 19..=255u32 {
        assert!(dec.decode(code).is_none(), "opcode {code}");
    }
}

#[test]
fn operand_helpers() {
    assert_eq!(operand_bytes(-1), [0xff, 0xff, 0xff]);
    assert_eq!(operand_bytes(0x0012_3456), [0x56, 0x34, 0x12]);
    // truncation to 24 bits
    assert_eq!(operand_bytes(0x0100_0001), [0x01, 0x00, 0x00]);
    assert_eq!(operand_of(0xffff_ff00), -1);
    assert_eq!(operand_of(0x7fff_ff00), 8_388_607);
    assert_eq!(operand_of(0x8000_0000), -8_388_608);
    assert_eq!(operand_of(pack_word(0, OPERAND_MAX)), OPERAND_MAX);
    assert_eq!(operand_of(pack_word(0, OPERAND_MIN)), OPERAND_MIN);
    // one past either end wraps to the other
    assert_eq!(operand_of(pack_word(0, OPERAND_MAX + 1)), OPERAND_MIN);
    assert_eq!(operand_of(pack_word(0, OPERAND_MIN - 1)), OPERAND_MAX);
}
