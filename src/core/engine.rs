use crate::core::{arith, classify, text};
use crate::core::{CalcError, Expression, Operand, Result};

/// Evaluates one raw input line into its output line: classify, dispatch on
/// the operand pair, format. Holds no state between calls.
pub fn evaluate_line(line: &str) -> Result<String> {
    let Expression { left, op, right } = classify::classify_line(line)?;

    match (left, right) {
        (Operand::Int(lhs), Operand::Int(rhs)) => {
            Ok(arith::evaluate(lhs, op, rhs)?.to_string())
        }
        (Operand::Text(s), Operand::Int(n)) | (Operand::Int(n), Operand::Text(s)) => {
            text::evaluate(&s, op, n)
        }
        (Operand::Text(_), Operand::Text(_)) => Err(CalcError::BothOperandsAreStrings),
    }
}
