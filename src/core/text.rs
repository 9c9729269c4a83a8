use crate::core::{CalcError, Operator, Result};
use crate::domain::model::{MAX_REPEAT_LEN, MAX_TEXT_LEN};

/// Applies `op` to an alphabetic operand and a count. The length gate runs
/// first, then operator admissibility, then the operation itself.
pub fn evaluate(text: &str, op: Operator, count: i32) -> Result<String> {
    if text.len() > MAX_TEXT_LEN {
        return Err(CalcError::StringTooLong);
    }

    match op {
        Operator::Add => Ok(shift(text, i64::from(count))),
        Operator::Sub => Ok(shift(text, -i64::from(count))),
        Operator::Mul => Ok(repeat(text, count)),
        Operator::Div => Ok(cut(text, count)),
        Operator::Rem => Err(CalcError::ModuloNotAllowedForStrings),
    }
}

/// Rotates every letter by `amount` positions within its own case's
/// alphabet. Negative amounts rotate backward.
fn shift(text: &str, amount: i64) -> String {
    let offset = amount.rem_euclid(26) as u8;
    text.chars().map(|c| rotate(c, offset)).collect()
}

fn rotate(c: char, offset: u8) -> char {
    if !c.is_ascii_alphabetic() {
        return c;
    }
    let base = if c.is_ascii_lowercase() { b'a' } else { b'A' };
    let pos = (c as u8 - base + offset) % 26;
    (base + pos) as char
}

fn repeat(text: &str, count: i32) -> String {
    if text.is_empty() || count <= 0 {
        return String::new();
    }
    let whole_copies = MAX_REPEAT_LEN / text.len();
    text.repeat(whole_copies.min(count as usize))
}

fn cut(text: &str, count: i32) -> String {
    if count <= 0 {
        return text.to_string();
    }
    let keep = text.len().saturating_sub(count as usize);
    text[..keep].to_string()
}
