use crate::core::{CalcError, Operator, Result};

/// Evaluates `lhs op rhs` in 64-bit space and narrows at the end, so an
/// overflowing result is reported instead of wrapped. Division and
/// remainder truncate toward zero.
pub fn evaluate(lhs: i32, op: Operator, rhs: i32) -> Result<i32> {
    let lhs = i64::from(lhs);
    let rhs = i64::from(rhs);

    let wide = match op {
        Operator::Add => lhs + rhs,
        Operator::Sub => lhs - rhs,
        Operator::Mul => lhs * rhs,
        Operator::Div => {
            if rhs == 0 {
                return Err(CalcError::DivideByZero);
            }
            lhs / rhs
        }
        Operator::Rem => {
            if rhs == 0 {
                return Err(CalcError::DivideByZero);
            }
            lhs % rhs
        }
    };

    i32::try_from(wide).map_err(|_| CalcError::IntegerOverflow)
}
