// src/types/cmp.rs
//
// Ordering for `Rational`, and comparisons against plain integers.
// Equality between two rationals is the derived field-wise one.

use std::cmp::Ordering;

use super::rational::Rational;

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other)
    }
}

impl PartialEq<i64> for Rational {
    fn eq(&self, other: &i64) -> bool {
        self.is_integer() && self.numer() == *other
    }
}

impl PartialEq<Rational> for i64 {
    fn eq(&self, other: &Rational) -> bool {
        other == self
    }
}

impl PartialOrd<i64> for Rational {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.compare_to_integer(*other))
    }
}

impl PartialOrd<Rational> for i64 {
    fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
        Some(other.compare_to_integer(*self).reverse())
    }
}
