//! Demand accounting for subscription backpressure.

use std::ops::{Add, AddAssign};

/// Number of values an observer is willing to accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Demand {
    Unlimited,
    Max(usize),
}

impl Demand {
    /// No additional values.
    pub const NONE: Demand = Demand::Max(0);

    pub fn max(count: usize) -> Self {
        Demand::Max(count)
    }

    pub fn unlimited() -> Self {
        Demand::Unlimited
    }

    pub fn is_none(&self) -> bool {
        *self == Demand::NONE
    }

    /// Consume one unit of demand. Returns false when none is outstanding.
    pub(crate) fn take_one(&mut self) -> bool {
        match self {
            Demand::Unlimited => true,
            Demand::Max(0) => false,
            Demand::Max(count) => {
                *count -= 1;
                true
            }
        }
    }
}

impl Default for Demand {
    fn default() -> Self {
        Demand::NONE
    }
}

impl Add for Demand {
    type Output = Demand;

    fn add(self, rhs: Demand) -> Demand {
        match (self, rhs) {
            (Demand::Max(a), Demand::Max(b)) => Demand::Max(a.saturating_add(b)),
            _ => Demand::Unlimited,
        }
    }
}

impl AddAssign for Demand {
    fn add_assign(&mut self, rhs: Demand) {
        *self = *self + rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_one_decrements_until_exhausted() {
        let mut demand = Demand::max(2);
        assert!(demand.take_one());
        assert!(demand.take_one());
        assert!(!demand.take_one());
        assert!(demand.is_none());
    }

    #[test]
    fn unlimited_never_exhausts() {
        let mut demand = Demand::unlimited();
        for _ in 0..1000 {
            assert!(demand.take_one());
        }
        assert_eq!(demand, Demand::Unlimited);
    }

    #[test]
    fn addition_saturates_and_absorbs_into_unlimited() {
        assert_eq!(Demand::max(2) + Demand::max(3), Demand::max(5));
        assert_eq!(Demand::max(usize::MAX) + Demand::max(1), Demand::max(usize::MAX));
        assert_eq!(Demand::max(1) + Demand::unlimited(), Demand::Unlimited);

        let mut demand = Demand::NONE;
        demand += Demand::max(1);
        assert_eq!(demand, Demand::max(1));
    }
}
