//! Second pass: patch reserved operands once every label is known.

use tracing::debug;

use super::diag::{DiagKind, Diagnostics, Severity};
use super::encoder::Encoder;
use super::symbols::SymbolTable;

/// Operand written for a use at `use_word` of a label at `def_word`.
/// Branch-class uses get a displacement from the word after the use.
pub fn patch_value(def_word: i32, use_word: usize, is_branch: bool) -> i32 {
    if is_branch {
        def_word.wrapping_sub(use_word as i32).wrapping_sub(1)
    } else {
        def_word
    }
}

pub fn resolve(file: &str, symbols: &mut SymbolTable, enc: &mut Encoder, diags: &mut Diagnostics) {
    for u in symbols.take_uses() {
        let Some(slot) = symbols.lookup(&u.name) else {
            diags.push(Severity::Error, file, u.line, DiagKind::UndefinedLabel, &u.name);
            continue;
        };
        symbols.mark_used(slot);
        let value = patch_value(symbols.defs()[slot].word_index, u.word_index, u.is_branch);
        debug!(label = %u.name, word = u.word_index, value, "fixup");
        enc.patch_operand(u.word_index, value);
    }

    for d in symbols.defs().iter().filter(|d| !d.used) {
        diags.push(Severity::Warning, file, d.line, DiagKind::UnusedLabel, &d.name);
    }
}
