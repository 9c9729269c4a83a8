pub mod arith;
pub mod classify;
pub mod engine;
pub mod text;

pub use crate::domain::model::{Expression, Operand, Operator};
pub use crate::utils::error::{CalcError, Result};
