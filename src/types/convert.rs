// src/types/convert.rs
//
// Conversions into and out of `Rational`, plus the `num-traits` glue.

use std::iter::{Product, Sum};

use num_traits::{One, ToPrimitive, Zero};

use super::rational::Rational;
use crate::error::RationalError;

impl Default for Rational {
    fn default() -> Self {
        Rational::ZERO
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Rational::from_integer(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Rational::from_integer(i64::from(n))
    }
}

impl TryFrom<(i64, i64)> for Rational {
    type Error = RationalError;

    fn try_from((numer, denom): (i64, i64)) -> Result<Self, Self::Error> {
        Rational::try_new(numer, denom)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Rational::ZERO
    }

    fn is_zero(&self) -> bool {
        Rational::is_zero(self)
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational::ONE
    }
}

impl ToPrimitive for Rational {
    /// Truncates toward zero.
    fn to_i64(&self) -> Option<i64> {
        Some(self.numer() / self.denom())
    }

    fn to_u64(&self) -> Option<u64> {
        if self.is_negative() {
            None
        } else {
            (self.numer() / self.denom()).to_u64()
        }
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.numer() as f64 / self.denom() as f64)
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Rational::ZERO, |acc, x| acc + *x)
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::ONE, |acc, x| acc * x)
    }
}

impl<'a> Product<&'a Rational> for Rational {
    fn product<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Rational::ONE, |acc, x| acc * *x)
    }
}
