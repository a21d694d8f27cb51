use accvm::decoder::Op;
use accvm::instructions::{is_branch, lookup, Mnemonic, Pseudo, BRANCH_RANGE, TABLE};

#[test]
fn table_index_is_opcode() {
    assert_eq!(TABLE.len(), 19);
    for (i, d) in TABLE.iter().enumerate() {
        assert_eq!(d.op.code() as usize, i, "{}", d.mnemonic);
        assert_eq!(Op::from_code(i as u8), Some(d.op));
    }
    assert_eq!(Op::from_code(19), None);
}

#[test]
fn lookup_is_exact_and_case_sensitive() {
    assert!(matches!(lookup("ldc"), Some(Mnemonic::Real(d)) if d.op == Op::Ldc && d.takes_operand));
    assert!(matches!(lookup("HALT"), Some(Mnemonic::Real(d)) if d.op == Op::Halt && !d.takes_operand));
    assert!(matches!(lookup("SET"), Some(Mnemonic::Pseudo(p)) if p.pseudo == Pseudo::Set));
    assert!(matches!(lookup("data"), Some(Mnemonic::Pseudo(p)) if p.pseudo == Pseudo::Data));
    assert!(lookup("halt").is_none());
    assert!(lookup("set").is_none());
    assert!(lookup("ld").is_none());
    assert!(lookup("ldcx").is_none());
}

#[test]
fn branch_class_is_call_through_br() {
    assert_eq!(BRANCH_RANGE, 13..=17);
    let branches: Vec<&str> = TABLE
        .iter()
        .filter(|d| is_branch(d.op))
        .map(|d| d.mnemonic)
        .collect();
    assert_eq!(branches, vec!["call", "return", "brz", "brlz", "br"]);
}
