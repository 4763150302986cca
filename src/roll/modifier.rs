use crate::common::{RResult, UInt};
use crate::error::RollError;
use std::fmt;

/// A modifier applied to the faces of one dice group, after the raw faces were recorded.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Modifier {
    /// `dK`: remove the `K` lowest faces.
    DropLowest(usize),
    /// `tK`: keep only the `K` highest faces.
    KeepTop(usize),
}

impl Modifier {
    pub fn name(&self) -> &'static str {
        match self {
            Self::DropLowest(_) => "drop",
            Self::KeepTop(_) => "top",
        }
    }

    /// Applies the modifier to a working copy of the faces. The returned faces are sorted
    /// ascending.
    pub fn apply(self, mut dice: Vec<UInt>) -> RResult<Vec<UInt>> {
        let remove = match self {
            Self::DropLowest(drop) if drop > dice.len() => {
                return Err(RollError::DropTooMany {
                    drop,
                    available: dice.len(),
                })
            }
            Self::DropLowest(drop) => drop,
            Self::KeepTop(keep) => dice.len().saturating_sub(keep),
        };
        dice.sort_unstable();
        dice.drain(..remove);
        Ok(dice)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DropLowest(x) => write!(f, "d{}", x),
            Self::KeepTop(x) => write!(f, "t{}", x),
        }
    }
}
