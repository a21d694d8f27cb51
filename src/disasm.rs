use crate::decoder::Decoded;
use crate::instructions::desc;

pub fn fmt_decoded(d: &Decoded) -> String {
    let info = desc(d.op);
    if info.takes_operand {
        format!("{} {}", info.mnemonic, d.operand)
    } else {
        info.mnemonic.to_string()
    }
}
