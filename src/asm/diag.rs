use std::fmt;

use serde::Serialize;

use super::literal::LiteralError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        })
    }
}

/// Everything the assembler reports about its input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DiagKind {
    #[error("expected operand to instruction")]
    ExpectedOperand,
    #[error("expected operand to pseudo instruction")]
    ExpectedPseudoOperand,
    #[error("unexpected operand to instruction")]
    UnexpectedOperand,
    #[error("unknown instruction")]
    UnknownInstruction,
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    #[error("expected hexadecimal number")]
    ExpectedHex,
    #[error("expected number")]
    ExpectedNumber,
    #[error("label names must begin with a letter")]
    BadNameStart,
    #[error("duplicate label definition")]
    DuplicateLabel,
    #[error("expected number literal operand to pseudo instruction")]
    ExpectedNumericOperand,
    #[error("expected label preceding 'SET'")]
    SetWithoutLabel,
    #[error("undefined label")]
    UndefinedLabel,
    #[error("unused label")]
    UnusedLabel,
}

impl From<LiteralError> for DiagKind {
    fn from(e: LiteralError) -> Self {
        match e {
            LiteralError::UnexpectedChar(c) => DiagKind::UnexpectedChar(c),
            LiteralError::EmptyHex => DiagKind::ExpectedHex,
            LiteralError::Empty => DiagKind::ExpectedNumber,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub file: String,
    /// 1-based source line.
    pub line: usize,
    pub kind: DiagKind,
    pub message: String,
    /// The offending source text.
    pub snippet: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}: {}\n\t{}",
            self.file, self.line, self.severity, self.message, self.snippet
        )
    }
}

/// Collects diagnostics for one source file.
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn push(&mut self, severity: Severity, file: &str, line: usize, kind: DiagKind, snippet: &str) {
        self.items.push(Diagnostic {
            severity,
            file: file.to_string(),
            line,
            message: kind.to_string(),
            kind,
            snippet: snippet.to_string(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}
