use std::{cmp::Ordering, ops::Add};

/// A finite value or infinity.
///
/// Infinity is the unique maximum and absorbs addition. It is used wherever
/// "unreachable" or "unbounded" must be represented as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cost<W> {
    Finite(W),
    Infinite,
}

pub use Cost::*;

impl<W> Cost<W> {
    pub fn is_finite(&self) -> bool {
        matches!(self, Finite(_))
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Infinite)
    }

    pub fn finite(self) -> Option<W> {
        match self {
            Finite(value) => Some(value),
            Infinite => None,
        }
    }

    pub fn as_ref(&self) -> Cost<&W> {
        match self {
            Finite(value) => Finite(value),
            Infinite => Infinite,
        }
    }

    pub fn map<U, F: FnOnce(W) -> U>(self, f: F) -> Cost<U> {
        match self {
            Finite(value) => Finite(f(value)),
            Infinite => Infinite,
        }
    }
}

impl<W: PartialOrd> Cost<W> {
    /// The smaller of the two. On incomparable values `self` is kept.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }
}

impl<W> From<W> for Cost<W> {
    fn from(value: W) -> Self {
        Finite(value)
    }
}

impl<W: Add<Output = W>> Add for Cost<W> {
    type Output = Cost<W>;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Finite(lhs), Finite(rhs)) => Finite(lhs + rhs),
            _ => Infinite,
        }
    }
}

impl<W: Add<Output = W>> Add<W> for Cost<W> {
    type Output = Cost<W>;

    fn add(self, rhs: W) -> Self::Output {
        self.map(|lhs| lhs + rhs)
    }
}

impl<W: PartialOrd> PartialOrd for Cost<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Finite(lhs), Finite(rhs)) => lhs.partial_cmp(rhs),
            (Finite(_), Infinite) => Some(Ordering::Less),
            (Infinite, Finite(_)) => Some(Ordering::Greater),
            (Infinite, Infinite) => Some(Ordering::Equal),
        }
    }
}

impl<W: Ord> Ord for Cost<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Finite(lhs), Finite(rhs)) => lhs.cmp(rhs),
            (Finite(_), Infinite) => Ordering::Less,
            (Infinite, Finite(_)) => Ordering::Greater,
            (Infinite, Infinite) => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinite_is_maximum() {
        assert!(Finite(u64::MAX) < Infinite);
        assert_eq!(Infinite.cmp(&Cost::<u64>::Infinite), Ordering::Equal);

        let mut costs = vec![Infinite, Finite(3), Finite(1)];
        costs.sort();
        assert_eq!(costs, vec![Finite(1), Finite(3), Infinite]);
    }

    #[test]
    fn addition_absorbs_infinity() {
        assert_eq!(Finite(2) + Finite(3), Finite(5));
        assert_eq!(Finite(2) + Infinite, Infinite);
        assert_eq!(Cost::<i32>::Infinite + 4, Infinite);
    }

    #[test]
    fn min_prefers_finite() {
        assert_eq!(Infinite.min(Finite(7)), Finite(7));
        assert_eq!(Finite(2).min(Finite(7)), Finite(2));
        assert_eq!(Finite(2.5).min(Infinite), Finite(2.5));
    }
}
