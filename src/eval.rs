use crate::common::{Int, RollGroup};
use crate::roll::RollHistory;
use std::fmt;

/// The outcome of a successful evaluation: the total and a snapshot of every dice group
/// rolled on the way.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Evaluation {
    total: Int,
    history: RollHistory,
}

impl Evaluation {
    pub(crate) fn new(total: Int, history: RollHistory) -> Self {
        Self { total, history }
    }

    pub fn total(&self) -> Int {
        self.total
    }

    /// Raw faces of each dice group, before any modifier, in evaluation order.
    pub fn history(&self) -> &RollHistory {
        &self.history
    }

    pub fn into_history(self) -> RollHistory {
        self.history
    }

    pub fn rolls(&self) -> &[RollGroup] {
        self.history.groups()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.history.is_empty() {
            write!(f, "{}", self.total)
        } else {
            write!(f, "{} = {}", self.history, self.total)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::vec1;

    #[test]
    fn test_display() {
        assert_eq!(Evaluation::new(7, RollHistory::new()).to_string(), "7");

        let mut history = RollHistory::new();
        history.push(vec1![4, 2, 6]);
        history.push(vec1![17]);
        let evaluation = Evaluation::new(29, history);
        assert_eq!(evaluation.to_string(), "[4, 2, 6] [17] = 29");
        assert_eq!(evaluation.rolls().len(), 2);
        assert_eq!(evaluation.into_history().into_vec()[1], vec1![17]);
    }
}
