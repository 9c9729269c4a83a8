use thiserror::Error;

/// Everything that can go wrong while handling one input line.
///
/// Each variant maps to exactly one `Error: ` output line; none of them
/// ends the session. All variants are unit variants, so values stay cheap
/// to clone and direct to compare in tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("whitespace not allowed")]
    WhitespacePresent,

    #[error("invalid characters")]
    InvalidCharacters,

    #[error("no operator found")]
    NoOperator,

    #[error("missing operand")]
    MissingOperand,

    #[error("both operands cannot be strings")]
    BothOperandsAreStrings,

    #[error("invalid operand combination")]
    InvalidOperandCombination,

    #[error("integer out of range")]
    IntegerOutOfRange,

    #[error("divide by zero")]
    DivideByZero,

    #[error("integer overflow/underflow")]
    IntegerOverflow,

    #[error("string too long")]
    StringTooLong,

    #[error("% not allowed with strings")]
    ModuloNotAllowedForStrings,

    #[error("line too long")]
    LineTooLong,
}

pub type Result<T> = std::result::Result<T, CalcError>;
