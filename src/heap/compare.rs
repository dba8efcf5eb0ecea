//! Comparators of the BinaryHeap.

use super::root::cmp::Ordering;

/// Compare
///
/// A total order over `T`: `compare(a, b)` returns `Less` if `a` is strictly smaller than `b`.
///
/// Any `Fn(&T, &T) -> Ordering` is a `Compare<T>`.
pub trait Compare<T: ?Sized> {
    /// Compares `left` and `right`.
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, left: &T, right: &T) -> Ordering { self(left, right) }
}

/// Natural
///
/// Orders by `Ord`, so that a heap pops its smallest element first.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    fn compare(&self, left: &T, right: &T) -> Ordering { left.cmp(right) }
}

/// Reversed
///
/// Orders by the reverse of `Ord`, so that a heap pops its largest element first.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Reversed;

impl<T: Ord + ?Sized> Compare<T> for Reversed {
    fn compare(&self, left: &T, right: &T) -> Ordering { right.cmp(left) }
}

#[cfg(test)]
mod tests {

use super::*;

#[test]
fn compare_natural() {
    assert_eq!(Ordering::Less, Natural.compare(&1, &2));
    assert_eq!(Ordering::Equal, Natural.compare(&2, &2));
    assert_eq!(Ordering::Greater, Natural.compare("b", "a"));
}

#[test]
fn compare_reversed() {
    assert_eq!(Ordering::Greater, Reversed.compare(&1, &2));
    assert_eq!(Ordering::Less, Reversed.compare("b", "a"));
}

#[test]
fn compare_closure() {
    let by_length = |a: &&str, b: &&str| a.len().cmp(&b.len());

    assert_eq!(Ordering::Less, by_length.compare(&"z", &"aa"));
}

}
