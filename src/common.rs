use crate::error::RollError;
use std::num::NonZeroU32;

pub use vec1::vec1;

/// The integer type every expression evaluates to.
pub type Int = i32;
/// The type of a single die face.
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

pub type NonEmpty<T> = vec1::Vec1<T>;

/// The raw faces produced by one dice-roll construct, in roll order.
pub type RollGroup = NonEmpty<UInt>;

pub(crate) type RResult<T> = Result<T, RollError>;

pub(crate) fn checked(value: Option<Int>) -> RResult<Int> {
    value.ok_or(RollError::Overflow)
}

/// Sums dice faces, failing instead of wrapping when the total does not fit in an [Int].
pub(crate) fn sum_faces(faces: &[UInt]) -> RResult<Int> {
    faces.iter().try_fold(0, |acc: Int, &face| {
        checked(Int::try_from(face).ok().and_then(|face| acc.checked_add(face)))
    })
}
