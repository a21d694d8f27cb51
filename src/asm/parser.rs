//! Line grammar: `[label ':'] [mnemonic [operand]]`.
//!
//! A line is parsed in two stages. [`split_label`] peels off at most one
//! label definition, then [`parse_statement`] reads exactly one statement
//! from what remains. A second `name:` in the remainder is rejected by the
//! statement stage as an unexpected character.

use super::diag::DiagKind;
use super::literal::is_numeric;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand<'a> {
    /// Literal text, parsed when encoded.
    Number(&'a str),
    /// Label name, resolved by the fixup pass.
    Symbol(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statement<'a> {
    pub mnemonic: &'a str,
    pub operand: Option<Operand<'a>>,
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

fn is_operand_char(c: char) -> bool {
    c == '+' || c == '-' || c.is_ascii_alphanumeric()
}

/// Drops the `;` comment and surrounding spaces/tabs.
pub fn strip_line(raw: &str) -> &str {
    let code = match raw.find(';') {
        Some(p) => &raw[..p],
        None => raw,
    };
    code.trim_matches(is_blank)
}

/// Length of the name at the start of `text`, which must begin with a letter.
fn scan_name(text: &str) -> Result<usize, DiagKind> {
    match text.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return Err(DiagKind::BadNameStart),
    }
    Ok(text.find(|c: char| !is_name_char(c)).unwrap_or(text.len()))
}

/// Splits a stripped line into an optional label and the remaining statement
/// text (with leading blanks removed).
pub fn split_label(text: &str) -> Result<(Option<&str>, &str), DiagKind> {
    if text.is_empty() {
        return Ok((None, text));
    }
    let end = scan_name(text)?;
    match text[end..].strip_prefix(':') {
        Some(rest) => Ok((Some(&text[..end]), rest.trim_start_matches(is_blank))),
        None => Ok((None, text)),
    }
}

/// Parses one statement. Empty text is an empty statement.
pub fn parse_statement(text: &str) -> Result<Option<Statement<'_>>, DiagKind> {
    if text.is_empty() {
        return Ok(None);
    }
    let end = scan_name(text)?;
    let mnemonic = &text[..end];
    if end == text.len() {
        return Ok(Some(Statement { mnemonic, operand: None }));
    }

    let token = text[end..].trim_matches(is_blank);
    if token.is_empty() {
        return Ok(Some(Statement { mnemonic, operand: None }));
    }
    if let Some(bad) = token.chars().find(|&c| !is_operand_char(c)) {
        return Err(DiagKind::UnexpectedChar(bad));
    }

    let operand = if is_numeric(token) {
        Operand::Number(token)
    } else {
        // starts with a letter here; names carry no signs
        if let Some(bad) = token.chars().find(|&c| !is_name_char(c)) {
            return Err(DiagKind::UnexpectedChar(bad));
        }
        Operand::Symbol(token)
    };
    Ok(Some(Statement {
        mnemonic,
        operand: Some(operand),
    }))
}
