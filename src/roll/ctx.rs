use super::roller::Roller;
use crate::common::*;
use crate::error::RollError;
use crate::eval::Evaluation;
use crate::parse::{Parser, TokenStream};
use std::num::NonZeroUsize;

pub type DefaultRoller = rand::rngs::ThreadRng;

/// The roll budget used by [RollContext::default].
pub const DEFAULT_MAX_ROLLS: usize = 1000;

/// Owns the random source and the roll budget for evaluations.
///
/// Each call to [RollContext::eval] works on a fresh token stream and a fresh roll
/// history, so nothing leaks from one evaluation into the next.
pub struct RollContext<R = DefaultRoller> {
    max_rolls: Option<usize>,
    rolls: usize,
    roller: R,
}

impl<R: Roller> RollContext<R> {
    pub fn new(max_rolls: Option<usize>, roller: R) -> Self {
        Self {
            max_rolls,
            rolls: 0,
            roller,
        }
    }

    pub fn new_bounded(max_rolls: usize, roller: R) -> Self {
        Self::new(Some(max_rolls), roller)
    }

    pub fn new_unbounded(roller: R) -> Self {
        Self::new(None, roller)
    }

    pub fn max_rolls(&self) -> Option<usize> {
        self.max_rolls
    }

    fn count_rolls(&mut self, n: usize) -> RResult<()> {
        self.rolls = self.rolls.saturating_add(n);
        if self.max_rolls.map_or(false, |max| self.rolls > max) {
            Err(RollError::TooManyRolls)
        } else {
            Ok(())
        }
    }

    /// Rolls `num` dice with `sides` faces each. The budget is checked before any face is drawn.
    pub fn roll(&mut self, num: NonZeroUsize, sides: NonZeroUInt) -> RResult<RollGroup> {
        self.count_rolls(num.get())?;
        let faces: Vec<_> = self.roller.roll_iter(num.get(), sides).collect();
        NonEmpty::try_from_vec(faces).map_err(|_| RollError::InvalidCount(0))
    }

    /// Evaluates one expression. The input is lowercased before tokenizing.
    pub fn eval(&mut self, s: &str) -> RResult<Evaluation> {
        self.rolls = 0;
        let source = s.to_lowercase();
        Parser::new(TokenStream::new(&source), self).parse()
    }
}

impl Default for RollContext {
    fn default() -> Self {
        Self::new(Some(DEFAULT_MAX_ROLLS), rand::thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::roller::StepRoller;

    fn mock_roller() -> StepRoller {
        StepRoller::new(NonZeroUInt::new(10).unwrap(), 1)
    }

    fn num(x: usize) -> NonZeroUsize {
        NonZeroUsize::new(x).unwrap()
    }

    fn sides(x: UInt) -> NonZeroUInt {
        NonZeroUInt::new(x).unwrap()
    }

    #[test]
    fn test_roll_group() {
        let mut ctx = RollContext::new_unbounded(mock_roller());
        let group = ctx.roll(num(4), sides(6)).unwrap();
        assert_eq!(group.into_vec(), vec![4, 5, 6, 1]);
    }

    #[test]
    fn test_budget() {
        let mut ctx = RollContext::new_bounded(5, mock_roller());
        assert!(ctx.roll(num(3), sides(6)).is_ok());
        assert!(ctx.roll(num(2), sides(6)).is_ok());
        assert_eq!(ctx.roll(num(1), sides(6)), Err(RollError::TooManyRolls));
    }

    #[test]
    fn test_budget_resets_per_eval() {
        let mut ctx = RollContext::new_bounded(5, mock_roller());
        assert!(ctx.eval("5d6").is_ok());
        assert!(ctx.eval("5d6").is_ok());
        assert_eq!(ctx.eval("3d6+3d6"), Err(RollError::TooManyRolls));
        assert_eq!(ctx.eval("6d6"), Err(RollError::TooManyRolls));
    }

    #[test]
    fn test_history_resets_per_eval() {
        let mut ctx = RollContext::new_unbounded(mock_roller());
        let first = ctx.eval("3d6").unwrap();
        assert_eq!(first.history().len(), 1);
        let second = ctx.eval("2 + 2").unwrap();
        assert!(second.history().is_empty());
        assert_eq!(first.history().len(), 1);
    }

    #[test]
    fn test_default_context() {
        let mut ctx = RollContext::default();
        assert_eq!(ctx.max_rolls(), Some(DEFAULT_MAX_ROLLS));
        let result = ctx.eval("10d6").unwrap();
        assert!((10..=60).contains(&result.total()));
        assert_eq!(ctx.eval("1001d6"), Err(RollError::TooManyRolls));
    }
}
