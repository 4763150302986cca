use crate::common::RollGroup;
use std::fmt;

/// The raw dice groups rolled during one evaluation, in the order they were rolled.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct RollHistory {
    groups: Vec<RollGroup>,
}

impl RollHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a group. Recorded groups are never touched again.
    pub(crate) fn push(&mut self, group: RollGroup) {
        self.groups.push(group);
    }

    pub fn groups(&self) -> &[RollGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RollGroup> {
        self.groups.iter()
    }

    pub fn into_vec(self) -> Vec<RollGroup> {
        self.groups
    }
}

impl IntoIterator for RollHistory {
    type Item = RollGroup;
    type IntoIter = std::vec::IntoIter<RollGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a> IntoIterator for &'a RollHistory {
    type Item = &'a RollGroup;
    type IntoIter = std::slice::Iter<'a, RollGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for RollHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:?}", &group[..])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::vec1;

    #[test]
    fn test_push_keeps_order() {
        let mut history = RollHistory::new();
        assert!(history.is_empty());
        history.push(vec1![3, 1]);
        history.push(vec1![6]);
        assert_eq!(history.len(), 2);
        assert_eq!(&history.groups()[0][..], &[3, 1]);
        assert_eq!(&history.groups()[1][..], &[6]);
    }

    #[test]
    fn test_display() {
        let mut history = RollHistory::new();
        assert_eq!(history.to_string(), "");
        history.push(vec1![4, 2, 6]);
        history.push(vec1![17]);
        assert_eq!(history.to_string(), "[4, 2, 6] [17]");
    }
}
