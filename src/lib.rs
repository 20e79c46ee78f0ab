//! Exact rational arithmetic over `i64`.
//!
//! A [`Rational`] is always stored in lowest terms with a positive
//! denominator. Operators abort on a zero divisor or on `i64` overflow; the
//! `try_*` / `checked_*` methods report the same conditions as
//! [`RationalError`] instead.

mod error;
mod math;
mod types;

pub use error::{RationalError, Result};
pub use math::gcd;
pub use types::Rational;
