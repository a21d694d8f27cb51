//! Two-pass assembler for the accumulator machine.
//!
//! Pass one walks the source a line at a time, recording label definitions
//! and emitting one word per instruction; operands that name labels are
//! reserved and remembered as uses. Pass two ([`fixup::resolve`]) patches
//! every use. An object is produced only if no error was reported.
//!
//! ```
//! let out = accvm::asm::assemble("demo.s", "start: ldc 5\n br start\n HALT\n");
//! assert_eq!(out.object.unwrap(), vec![0, 5, 0, 0, 17, 0xfe, 0xff, 0xff, 18, 0, 0, 0]);
//! ```

pub mod diag;
pub mod encoder;
pub mod fixup;
pub mod literal;
pub mod parser;
pub mod symbols;

use tracing::{info, warn};

use crate::instructions::{self, Mnemonic, Pseudo};
use diag::{DiagKind, Diagnostic, Diagnostics, Severity};
use encoder::Encoder;
use literal::parse_literal;
use parser::{parse_statement, split_label, strip_line, Operand, Statement};
use symbols::{LabelDef, SymbolTable};

/// Result of assembling one source file.
#[derive(Debug)]
pub struct Assembly {
    /// Object bytes; `None` when any error was reported.
    pub object: Option<Vec<u8>>,
    pub diagnostics: Vec<Diagnostic>,
    /// Final label table, for listing generators.
    pub labels: Vec<LabelDef>,
}

impl Assembly {
    pub fn is_ok(&self) -> bool {
        self.object.is_some()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity == Severity::Warning)
    }
}

/// Label context of the line being assembled.
#[derive(Debug, Clone, Copy)]
struct LineLabel {
    present: bool,
    // None when the definition was a rejected duplicate
    slot: Option<usize>,
}

/// Per-file assembly state. A fresh session is used for every file.
pub struct Session<'f> {
    file: &'f str,
    line: usize,
    text: String,
    encoder: Encoder,
    symbols: SymbolTable,
    diags: Diagnostics,
}

impl<'f> Session<'f> {
    pub fn new(file: &'f str) -> Self {
        Self {
            file,
            line: 0,
            text: String::new(),
            encoder: Encoder::new(),
            symbols: SymbolTable::new(),
            diags: Diagnostics::default(),
        }
    }

    fn error(&mut self, kind: DiagKind) {
        self.diags
            .push(Severity::Error, self.file, self.line, kind, &self.text);
    }

    /// Parses a literal, reporting failures and substituting 0.
    fn literal(&mut self, text: &str) -> i32 {
        match parse_literal(text) {
            Ok(v) => v,
            Err(e) => {
                self.error(e.into());
                0
            }
        }
    }

    /// Assembles the next physical source line.
    pub fn feed_line(&mut self, raw: &str) {
        self.line += 1;
        let text = strip_line(raw);
        self.text.clear();
        self.text.push_str(text);

        let (label, rest) = match split_label(text) {
            Ok(parts) => parts,
            Err(kind) => return self.error(kind),
        };

        let mut line_label = LineLabel { present: false, slot: None };
        if let Some(name) = label {
            line_label.present = true;
            let here = self.encoder.word_index() as i32;
            line_label.slot = self.symbols.define(name, self.line, here);
            if line_label.slot.is_none() {
                self.error(DiagKind::DuplicateLabel);
            }
        }

        match parse_statement(rest) {
            Ok(Some(stmt)) => self.statement(stmt, line_label),
            Ok(None) => {}
            Err(kind) => self.error(kind),
        }
    }

    fn statement(&mut self, stmt: Statement<'_>, label: LineLabel) {
        let Some(mnemonic) = instructions::lookup(stmt.mnemonic) else {
            return self.error(DiagKind::UnknownInstruction);
        };

        match (mnemonic, stmt.operand) {
            (Mnemonic::Real(d), None) if d.takes_operand => self.error(DiagKind::ExpectedOperand),
            (Mnemonic::Pseudo(p), None) if p.takes_operand => {
                self.error(DiagKind::ExpectedPseudoOperand)
            }
            (m, Some(_)) if !m.takes_operand() => self.error(DiagKind::UnexpectedOperand),
            (Mnemonic::Real(d), None) => self.encoder.emit_plain(d.op.code()),
            (Mnemonic::Real(d), Some(Operand::Number(text))) => {
                let value = self.literal(text);
                self.encoder.emit_operand(d.op.code(), value);
            }
            (Mnemonic::Real(d), Some(Operand::Symbol(name))) => {
                let at = self.encoder.emit_reserved(d.op.code());
                self.symbols
                    .record_use(name, self.line, at, instructions::is_branch(d.op));
            }
            (Mnemonic::Pseudo(_), None) => {}
            (Mnemonic::Pseudo(_), Some(Operand::Symbol(_))) => {
                self.error(DiagKind::ExpectedNumericOperand)
            }
            (Mnemonic::Pseudo(p), Some(Operand::Number(text))) => {
                let value = self.literal(text);
                match p.pseudo {
                    Pseudo::Data => self.encoder.emit_data(value),
                    Pseudo::Set if !label.present => self.error(DiagKind::SetWithoutLabel),
                    Pseudo::Set => {
                        if let Some(slot) = label.slot {
                            self.symbols.set_word_index(slot, value);
                        }
                    }
                }
            }
        }
    }

    /// Runs the fixup pass and produces the file's result.
    pub fn finish(mut self) -> Assembly {
        fixup::resolve(self.file, &mut self.symbols, &mut self.encoder, &mut self.diags);

        let failed = self.diags.has_errors();
        let object = if failed {
            warn!(file = self.file, "assembly failed, no object produced");
            None
        } else {
            let bytes = self.encoder.into_bytes();
            info!(file = self.file, words = bytes.len() / 4, "assembled");
            Some(bytes)
        };
        Assembly {
            object,
            diagnostics: self.diags.into_vec(),
            labels: self.symbols.into_defs(),
        }
    }
}

/// Assembles a complete source text.
pub fn assemble(file: &str, source: &str) -> Assembly {
    let mut session = Session::new(file);
    for raw in source.lines() {
        session.feed_line(raw);
    }
    session.finish()
}
