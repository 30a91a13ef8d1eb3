//! Inclusive range checks for ordered values such as `chrono` date-times.

/// True iff `start <= value <= end`.
pub fn between<T: PartialOrd + ?Sized>(value: &T, start: &T, end: &T) -> bool {
    start <= value && value <= end
}

/// Method form of [`between`], available on every `PartialOrd` type.
pub trait Between: PartialOrd {
    fn between(&self, start: &Self, end: &Self) -> bool {
        between(self, start, end)
    }
}

impl<T: PartialOrd + ?Sized> Between for T {}
