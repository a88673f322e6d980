//! Sources deciding which seats start out booked.
//!
//! The grid asks its source once per seat when it is built and never again,
//! so a source only shapes the initial layout.

use std::collections::HashSet;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::app::types::SeatId;

/// Decide whether the seat at `(row, position)` starts booked.
pub trait AvailabilitySource {
    fn is_booked(&mut self, row: &str, position: usize) -> bool;
}

impl<F> AvailabilitySource for F
where
    F: FnMut(&str, usize) -> bool,
{
    fn is_booked(&mut self, row: &str, position: usize) -> bool {
        self(row, position)
    }
}

/// Marks each seat booked independently with a fixed probability.
pub struct RandomAvailability<R: Rng> {
    rng: R,
    probability: f64,
}

impl RandomAvailability<ThreadRng> {
    /// Non-reproducible layout backed by the thread-local generator.
    pub fn new(probability: f64) -> Self {
        RandomAvailability {
            rng: rand::rng(),
            probability: sanitize(probability),
        }
    }
}

impl RandomAvailability<StdRng> {
    /// Reproducible layout: the same seed always yields the same grid.
    pub fn seeded(probability: f64, seed: u64) -> Self {
        RandomAvailability {
            rng: StdRng::seed_from_u64(seed),
            probability: sanitize(probability),
        }
    }
}

// `random_bool` panics outside [0, 1]; NaN books nothing.
fn sanitize(probability: f64) -> f64 {
    if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 1.0)
    }
}

impl<R: Rng> AvailabilitySource for RandomAvailability<R> {
    fn is_booked(&mut self, _row: &str, _position: usize) -> bool {
        self.rng.random_bool(self.probability)
    }
}

/// Explicit table of booked seats; everything else is available.
#[derive(Clone, Debug, Default)]
pub struct FixedAvailability {
    booked: HashSet<SeatId>,
}

impl FixedAvailability {
    pub fn new(booked: impl IntoIterator<Item = SeatId>) -> Self {
        FixedAvailability {
            booked: booked.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.booked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.booked.is_empty()
    }
}

impl AvailabilitySource for FixedAvailability {
    fn is_booked(&mut self, row: &str, position: usize) -> bool {
        self.booked.contains(&SeatId::new(row, position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_table_marks_only_listed_seats() {
        let mut src = FixedAvailability::new([SeatId::new("A", 1), SeatId::new("C", 0)]);
        assert_eq!(src.len(), 2);
        assert!(!src.is_empty());
        assert!(FixedAvailability::new(Vec::<SeatId>::new()).is_empty());
        assert!(src.is_booked("A", 1));
        assert!(src.is_booked("C", 0));
        assert!(!src.is_booked("A", 0));
        assert!(!src.is_booked("B", 1));
    }

    #[test]
    fn seeded_sources_agree() {
        let mut a = RandomAvailability::seeded(0.3, 0x1234);
        let mut b = RandomAvailability::seeded(0.3, 0x1234);
        let xs: Vec<bool> = (0..64).map(|i| a.is_booked("A", i)).collect();
        let ys: Vec<bool> = (0..64).map(|i| b.is_booked("A", i)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn probability_extremes() {
        let mut never = RandomAvailability::seeded(0.0, 1);
        let mut always = RandomAvailability::seeded(1.0, 1);
        assert!((0..32).all(|i| !never.is_booked("A", i)));
        assert!((0..32).all(|i| always.is_booked("A", i)));
    }

    #[test]
    fn out_of_range_probabilities_do_not_panic() {
        let mut nan = RandomAvailability::seeded(f64::NAN, 1);
        assert!((0..32).all(|i| !nan.is_booked("A", i)));
        let mut low = RandomAvailability::new(-2.0);
        assert!((0..32).all(|i| !low.is_booked("A", i)));
        let mut high = RandomAvailability::seeded(f64::INFINITY, 1);
        assert!((0..32).all(|i| high.is_booked("A", i)));
    }

    #[test]
    fn closures_are_sources() {
        let mut even = |_row: &str, pos: usize| pos % 2 == 0;
        assert!(even.is_booked("A", 0));
        assert!(!even.is_booked("A", 1));
    }
}
