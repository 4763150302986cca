use crate::common::Int;
use crate::parse::TokenKind;

/// The single failure type of an evaluation. Every variant aborts the whole evaluation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RollError {
    #[error("(at position {position}): expected {}, found {}", fmt_expected(.expected), fmt_found(.found))]
    UnexpectedToken {
        position: usize,
        expected: Vec<TokenKind>,
        found: Option<String>,
    },
    #[error("cannot roll a die with {0} faces")]
    InvalidSides(Int),
    #[error("cannot roll {0} dice")]
    InvalidCount(Int),
    #[error("no parameter given for {0}")]
    MissingModifierParameter(&'static str),
    #[error("constant {0:?} does not fit in a 32-bit integer")]
    ConstantOutOfRange(String),
    #[error("cannot drop {drop} dice from a group of {available}")]
    DropTooMany { drop: usize, available: usize },
    #[error("cannot divide by zero")]
    ZeroDivision,
    #[error("integer overflow")]
    Overflow,
    #[error("too many dice rolled")]
    TooManyRolls,
}

fn fmt_expected(expected: &[TokenKind]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [a] => a.to_string(),
        [a, b] => format!("{} or {}", a, b),
        [init @ .., last] => {
            let init: Vec<_> = init.iter().map(TokenKind::as_str).collect();
            format!("{}, or {}", init.join(", "), last)
        }
    }
}

fn fmt_found(found: &Option<String>) -> String {
    match found {
        Some(slice) => format!("{:?}", slice),
        None => "end of input".to_string(),
    }
}
