use std::fmt;

/// Longest text operand the string evaluator accepts, in bytes.
pub const MAX_TEXT_LEN: usize = 100;

/// Output cap for the repeat operation, in bytes. Only whole copies of the
/// operand are appended under this cap.
pub const MAX_REPEAT_LEN: usize = 1024;

/// Longest input line the shell accepts, in bytes (newline excluded).
pub const MAX_LINE_LEN: usize = 256;

/// The operator is the first of these five characters found in the line,
/// scanning left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '%' => Some(Operator::Rem),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Rem => '%',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A classified operand: a bounded integer or an alphabetic string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Int(i32),
    Text(String),
}

/// One fully classified input line. The classifier never produces a
/// text/text pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub left: Operand,
    pub op: Operator,
    pub right: Operand,
}
