mod ctx;
mod history;
mod modifier;
mod roller;

pub use ctx::{DefaultRoller, RollContext, DEFAULT_MAX_ROLLS};
pub use history::RollHistory;
pub use modifier::Modifier;
pub use roller::Roller;

#[cfg(test)]
pub(crate) use roller::StepRoller;
