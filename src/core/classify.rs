use crate::core::{CalcError, Expression, Operand, Operator, Result};
use crate::utils::validation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OperandKind {
    Letters,
    Digits,
    Other,
}

fn kind_of(side: &str) -> OperandKind {
    if validation::is_all_alphabetic(side) {
        OperandKind::Letters
    } else if validation::is_all_digits(side) {
        OperandKind::Digits
    } else {
        OperandKind::Other
    }
}

/// Splits the line at the first operator character, scanning left to right.
fn split_at_operator(line: &str) -> Result<(&str, Operator, &str)> {
    for (i, c) in line.char_indices() {
        if let Some(op) = Operator::from_char(c) {
            return Ok((&line[..i], op, &line[i + c.len_utf8()..]));
        }
    }
    Err(CalcError::NoOperator)
}

/// Converts a digit-only string into an `i32`, rejecting it as soon as the
/// running total passes `i32::MAX`. Leading zeros parse as their numeric
/// value; a sign can never occur here because the splitter claims the first
/// `-` as the operator.
pub fn parse_bounded_int(digits: &str) -> Result<i32> {
    let mut value: i64 = 0;
    for c in digits.chars() {
        let digit = c.to_digit(10).ok_or(CalcError::InvalidCharacters)?;
        value = value * 10 + i64::from(digit);
        if value > i64::from(i32::MAX) {
            return Err(CalcError::IntegerOutOfRange);
        }
    }
    Ok(value as i32)
}

/// Validates one raw input line and classifies it into an `Expression`.
///
/// Both sides are classified by kind before any integer is parsed, so a
/// side that cannot pair into a valid combination never reports a parse
/// error in its place.
pub fn classify_line(line: &str) -> Result<Expression> {
    if validation::has_whitespace(line) {
        return Err(CalcError::WhitespacePresent);
    }
    if !validation::has_only_allowed_characters(line) {
        return Err(CalcError::InvalidCharacters);
    }

    let (left, op, right) = split_at_operator(line)?;
    if left.is_empty() || right.is_empty() {
        return Err(CalcError::MissingOperand);
    }

    match (kind_of(left), kind_of(right)) {
        (OperandKind::Letters, OperandKind::Letters) => Err(CalcError::BothOperandsAreStrings),
        (OperandKind::Digits, OperandKind::Digits) => Ok(Expression {
            left: Operand::Int(parse_bounded_int(left)?),
            op,
            right: Operand::Int(parse_bounded_int(right)?),
        }),
        (OperandKind::Letters, OperandKind::Digits) => Ok(Expression {
            left: Operand::Text(left.to_string()),
            op,
            right: Operand::Int(parse_bounded_int(right)?),
        }),
        (OperandKind::Digits, OperandKind::Letters) => Ok(Expression {
            left: Operand::Int(parse_bounded_int(left)?),
            op,
            right: Operand::Text(right.to_string()),
        }),
        _ => Err(CalcError::InvalidOperandCombination),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_at_first_operator() {
        let (left, op, right) = split_at_operator("12+34").unwrap();
        assert_eq!(left, "12");
        assert_eq!(op, Operator::Add);
        assert_eq!(right, "34");

        // Only the first operator splits; the rest stays in the right side.
        let (left, op, right) = split_at_operator("1-2+3").unwrap();
        assert_eq!(left, "1");
        assert_eq!(op, Operator::Sub);
        assert_eq!(right, "2+3");

        assert_eq!(split_at_operator("1234"), Err(CalcError::NoOperator));
        assert_eq!(split_at_operator(""), Err(CalcError::NoOperator));
    }

    #[test]
    fn test_parse_bounded_int() {
        assert_eq!(parse_bounded_int("0"), Ok(0));
        assert_eq!(parse_bounded_int("007"), Ok(7));
        assert_eq!(parse_bounded_int("2147483647"), Ok(i32::MAX));
        assert_eq!(
            parse_bounded_int("2147483648"),
            Err(CalcError::IntegerOutOfRange)
        );
        assert_eq!(
            parse_bounded_int("99999999999999999999"),
            Err(CalcError::IntegerOutOfRange)
        );
    }

    #[test]
    fn test_integer_pair() {
        let expr = classify_line("12+34").unwrap();
        assert_eq!(expr.left, Operand::Int(12));
        assert_eq!(expr.op, Operator::Add);
        assert_eq!(expr.right, Operand::Int(34));
    }

    #[test]
    fn test_text_and_integer_pair_in_either_order() {
        let expr = classify_line("abc*3").unwrap();
        assert_eq!(expr.left, Operand::Text("abc".to_string()));
        assert_eq!(expr.right, Operand::Int(3));

        let expr = classify_line("3*abc").unwrap();
        assert_eq!(expr.left, Operand::Int(3));
        assert_eq!(expr.right, Operand::Text("abc".to_string()));
    }

    #[test]
    fn test_rejections() {
        assert_eq!(classify_line("1 +2"), Err(CalcError::WhitespacePresent));
        // Vertical tab is whitespace, not merely a disallowed character.
        assert_eq!(classify_line("1\x0B+2"), Err(CalcError::WhitespacePresent));
        assert_eq!(classify_line("hello!+2"), Err(CalcError::InvalidCharacters));
        assert_eq!(classify_line("1234"), Err(CalcError::NoOperator));
        assert_eq!(classify_line(""), Err(CalcError::NoOperator));
        assert_eq!(classify_line("+2"), Err(CalcError::MissingOperand));
        assert_eq!(classify_line("2+"), Err(CalcError::MissingOperand));
        assert_eq!(classify_line("%"), Err(CalcError::MissingOperand));
        assert_eq!(classify_line("ab+cd"), Err(CalcError::BothOperandsAreStrings));
        assert_eq!(
            classify_line("a1b+2"),
            Err(CalcError::InvalidOperandCombination)
        );
        assert_eq!(
            classify_line("5++5"),
            Err(CalcError::InvalidOperandCombination)
        );
    }

    #[test]
    fn test_kinds_decided_before_any_parse() {
        // The mixed left side disqualifies the pair, so the oversized right
        // side is never parsed.
        assert_eq!(
            classify_line("a1b+99999999999"),
            Err(CalcError::InvalidOperandCombination)
        );
        // Two alphabetic sides outrank everything about the operator.
        assert_eq!(classify_line("ab%cd"), Err(CalcError::BothOperandsAreStrings));
    }
}
