//! Numeric literals: optionally signed decimal, `0`-prefixed octal and
//! `0x`/`0X`-prefixed hexadecimal.

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    #[error("expected hexadecimal number")]
    EmptyHex,
    #[error("expected number")]
    Empty,
}

/// Returns true when `token` should be read as a number rather than a name.
pub fn is_numeric(token: &str) -> bool {
    matches!(token.chars().next(), Some(c) if c == '+' || c == '-' || c.is_ascii_digit())
}

pub fn parse_literal(token: &str) -> Result<i32, LiteralError> {
    let (negative, digits) = match token.as_bytes().first() {
        Some(b'+') => (false, &token[1..]),
        Some(b'-') => (true, &token[1..]),
        _ => (false, token),
    };

    let mut chars = digits.chars();
    let magnitude = match (chars.next(), chars.next()) {
        (None, _) => return Err(LiteralError::Empty),
        (Some(c), None) => digit_value(c, 10)?,
        (Some('0'), Some('x' | 'X')) => {
            let hex = &digits[2..];
            if hex.is_empty() {
                return Err(LiteralError::EmptyHex);
            }
            accumulate(hex, 16)?
        }
        (Some('0'), Some(_)) => accumulate(&digits[1..], 8)?,
        _ => accumulate(digits, 10)?,
    };

    let value = magnitude as i32;
    Ok(if negative { value.wrapping_neg() } else { value })
}

fn digit_value(c: char, radix: u32) -> Result<u32, LiteralError> {
    c.to_digit(radix).ok_or(LiteralError::UnexpectedChar(c))
}

// Wraps modulo 2^32 like the 32-bit word it ends up in.
fn accumulate(digits: &str, radix: u32) -> Result<u32, LiteralError> {
    digits.chars().try_fold(0u32, |acc, c| {
        let d = digit_value(c, radix)?;
        Ok(acc.wrapping_mul(radix).wrapping_add(d))
    })
}
