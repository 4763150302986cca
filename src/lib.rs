//! Evaluates dice notation such as `3d6+2`, `4d6d1` or `2d20t1*2`.
//!
//! ```
//! let evaluation = dice_notation::evaluate("4d6d1").unwrap();
//! let rolled = &evaluation.rolls()[0];
//! assert_eq!(rolled.len(), 4);
//! assert!((3..=18).contains(&evaluation.total()));
//! ```

pub mod common;
mod error;
mod eval;
pub mod parse;
pub mod roll;

pub use error::RollError;
pub use eval::Evaluation;
pub use parse::tokenize;
pub use roll::{RollContext, RollHistory, Roller};

/// Evaluates `s` with a cryptographically secure generator and the default roll budget.
pub fn evaluate(s: &str) -> Result<Evaluation, RollError> {
    RollContext::default().eval(s)
}

/// Evaluates `s` drawing faces from `roller`, with the default roll budget.
pub fn evaluate_with<R: Roller>(s: &str, roller: R) -> Result<Evaluation, RollError> {
    RollContext::new_bounded(roll::DEFAULT_MAX_ROLLS, roller).eval(s)
}
