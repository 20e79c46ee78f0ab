// src/types/rational.rs
//
// Exact rational number over `i64`.
//
// Every value that leaves a public operation is in canonical form:
//
//   - denominator > 0 (the sign lives on the numerator)
//   - gcd(|numerator|, denominator) == 1
//   - zero is stored as 0/1
//
// Because the form is canonical, equality and hashing are field-wise.
//
// The `try_*_assign` methods are the canonical arithmetic. They compute into
// locals and only write the receiver once the result is known to be valid,
// so a failed operation never leaves a half-updated value behind. The
// operator traits in `ops.rs` and the named methods below are thin layers
// over them that abort on failure.

use std::cmp::Ordering;

use num_integer::Integer;

use crate::error::{fatal, RationalError, Result};
use crate::math::gcd;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

/// Brings `numer/denom` into canonical form.
fn reduce(numer: i64, denom: i64) -> Result<(i64, i64)> {
    if denom == 0 {
        return Err(RationalError::ZeroDenominator);
    }
    if numer == 0 {
        return Ok((0, 1));
    }

    // |g| <= |denom|, so only gcd(MIN, MIN) has no positive counterpart.
    // Dividing both sides by MIN gives 1/1 there, which is still correct.
    let g = gcd(numer, denom);
    let g = g.checked_abs().unwrap_or(g);
    let numer = numer / g;
    let denom = denom / g;

    let (numer, denom) = if denom < 0 {
        match (numer.checked_neg(), denom.checked_neg()) {
            (Some(n), Some(d)) => (n, d),
            _ => return Err(RationalError::overflow("normalize")),
        }
    } else {
        (numer, denom)
    };

    #[cfg(feature = "trace-arith")]
    log::trace!("normalize -> {}/{}", numer, denom);

    Ok((numer, denom))
}

#[allow(clippy::should_implement_trait)]
impl Rational {
    pub const ZERO: Rational = Rational { numerator: 0, denominator: 1 };
    pub const ONE: Rational = Rational { numerator: 1, denominator: 1 };

    /// Creates `numer/denom` in lowest terms.
    ///
    /// # Panics
    ///
    /// If `denom` is zero, or if the reduced value needs a denominator of
    /// `2^63` (e.g. `Rational::new(1, i64::MIN)`).
    #[track_caller]
    pub fn new(numer: i64, denom: i64) -> Self {
        match Self::try_new(numer, denom) {
            Ok(r) => r,
            Err(err) => fatal(err),
        }
    }

    /// Non-panicking counterpart of [`Rational::new`].
    pub fn try_new(numer: i64, denom: i64) -> Result<Self> {
        let (numerator, denominator) = reduce(numer, denom)?;
        Ok(Rational { numerator, denominator })
    }

    /// `n/1`. Already canonical, no reduction needed.
    pub const fn from_integer(n: i64) -> Self {
        Rational { numerator: n, denominator: 1 }
    }

    pub const fn numer(&self) -> i64 {
        self.numerator
    }

    pub const fn denom(&self) -> i64 {
        self.denominator
    }

    /// Restores canonical form in place. A no-op for any value built through
    /// this type's API.
    #[track_caller]
    pub fn normalize(&mut self) {
        assert!(self.denominator != 0, "zero denominator");
        match reduce(self.numerator, self.denominator) {
            Ok((n, d)) => {
                self.numerator = n;
                self.denominator = d;
            },
            Err(err) => fatal(err),
        }
    }

    /// Replaces the value with `numer/denom`. On a zero denominator this
    /// aborts before the receiver is touched.
    #[track_caller]
    pub fn assign(&mut self, numer: i64, denom: i64) {
        if let Err(err) = self.try_assign(numer, denom) {
            fatal(err)
        }
    }

    pub fn try_assign(&mut self, numer: i64, denom: i64) -> Result<()> {
        *self = Self::try_new(numer, denom)?;
        Ok(())
    }

    /// Replaces the value with `n/1`.
    pub fn set_integer(&mut self, n: i64) {
        self.numerator = n;
        self.denominator = 1;
    }

    // --- canonical arithmetic ---

    /// `a/b + c/d` without ever forming `b*d`.
    ///
    /// With `g = gcd(b, d)`, `b = b1*g` and `d = d1*g`, the sum is
    /// `(a*d1 + c*b1) / (b1*d1*g)`. Any common factor of that numerator and
    /// denominator must divide `g` (a factor of `b1` would have to divide `a`,
    /// which is coprime to `b`; likewise for `d1`), so dividing by
    /// `gcd(a*d1 + c*b1, g)` yields lowest terms directly.
    pub fn try_add_assign(&mut self, rhs: Rational) -> Result<()> {
        self.combine(rhs, false)
    }

    /// Same factoring as addition, with `a*d1 - c*b1` as the numerator.
    pub fn try_sub_assign(&mut self, rhs: Rational) -> Result<()> {
        self.combine(rhs, true)
    }

    fn combine(&mut self, rhs: Rational, subtract: bool) -> Result<()> {
        let (a, b) = (self.numerator, self.denominator);
        let (c, d) = (rhs.numerator, rhs.denominator);
        let op = if subtract { "sub" } else { "add" };
        let overflow = || RationalError::overflow(op);

        // both denominators are positive, so g is too
        let g = gcd(b, d);
        let b1 = b / g;

        // each product is below 2^126 in magnitude, so the i128 sum is exact
        let left = i128::from(a) * i128::from(d / g);
        let right = i128::from(c) * i128::from(b1);
        let numer = if subtract { left - right } else { left + right };

        // gcd() can hand back a negative divisor; the denominator must stay positive
        let g = gcd(numer, i128::from(g)).abs();
        let numer = i64::try_from(numer / g).map_err(|_| overflow())?;
        // g divides the original i64 gcd, so it fits
        let g = g as i64;
        let denom = b1.checked_mul(d / g).ok_or_else(overflow)?;

        #[cfg(feature = "trace-arith")]
        log::trace!("{}/{} {} {}/{} = {}/{}", a, b, op, c, d, numer, denom);

        self.numerator = numer;
        self.denominator = denom;
        Ok(())
    }

    /// Cross-cancels `gcd(a, d)` and `gcd(c, b)` first, then multiplies and
    /// normalizes once.
    pub fn try_mul_assign(&mut self, rhs: Rational) -> Result<()> {
        let (a, b) = (self.numerator, self.denominator);
        let (c, d) = (rhs.numerator, rhs.denominator);
        let overflow = || RationalError::overflow("mul");

        // b, d > 0 bound both divisors by i64::MAX, so abs() cannot overflow
        let g1 = gcd(a, d).abs();
        let g2 = gcd(c, b).abs();
        let numer = (a / g1).checked_mul(c / g2).ok_or_else(overflow)?;
        let denom = (b / g2).checked_mul(d / g1).ok_or_else(overflow)?;

        let (numer, denom) = reduce(numer, denom)?;
        self.numerator = numer;
        self.denominator = denom;
        Ok(())
    }

    /// `(a/b) / (c/d)`, cross-cancelling `gcd(a, c)` and `gcd(b, d)` before
    /// multiplying out `a*d` and `b*c`.
    ///
    /// The divisors are taken in `i128`, where `|gcd(MIN, MIN)| = 2^63` is
    /// representable, so `x / x` works for every nonzero `x`.
    pub fn try_div_assign(&mut self, rhs: Rational) -> Result<()> {
        let (a, b) = (i128::from(self.numerator), i128::from(self.denominator));
        let (c, d) = (i128::from(rhs.numerator), i128::from(rhs.denominator));
        if c == 0 {
            return Err(RationalError::DivisionByZero);
        }
        let overflow = || RationalError::overflow("div");

        let g1 = gcd(a, c).abs();
        let g2 = gcd(b, d).abs();
        let numer = (a / g1) * (d / g2);
        let denom = (b / g2) * (c / g1);
        let (numer, denom) = if denom < 0 { (-numer, -denom) } else { (numer, denom) };

        // already coprime; all that is left is whether it fits
        let numer = i64::try_from(numer).map_err(|_| overflow())?;
        let denom = i64::try_from(denom).map_err(|_| overflow())?;
        self.numerator = numer;
        self.denominator = denom;
        Ok(())
    }

    // --- checked, non-mutating ---

    pub fn checked_add(self, rhs: Rational) -> Result<Self> {
        let mut out = self;
        out.try_add_assign(rhs)?;
        Ok(out)
    }

    pub fn checked_sub(self, rhs: Rational) -> Result<Self> {
        let mut out = self;
        out.try_sub_assign(rhs)?;
        Ok(out)
    }

    pub fn checked_mul(self, rhs: Rational) -> Result<Self> {
        let mut out = self;
        out.try_mul_assign(rhs)?;
        Ok(out)
    }

    pub fn checked_div(self, rhs: Rational) -> Result<Self> {
        let mut out = self;
        out.try_div_assign(rhs)?;
        Ok(out)
    }

    /// Fails only for a numerator of `i64::MIN`.
    pub fn checked_neg(self) -> Result<Self> {
        let numerator = self
            .numerator
            .checked_neg()
            .ok_or_else(|| RationalError::overflow("neg"))?;
        Ok(Rational { numerator, ..self })
    }

    pub fn checked_recip(self) -> Result<Self> {
        match self.numerator.cmp(&0) {
            Ordering::Equal => Err(RationalError::DivisionByZero),
            Ordering::Greater => Ok(Rational {
                numerator: self.denominator,
                denominator: self.numerator,
            }),
            Ordering::Less => match (self.denominator.checked_neg(), self.numerator.checked_neg()) {
                (Some(numerator), Some(denominator)) => Ok(Rational { numerator, denominator }),
                _ => Err(RationalError::overflow("recip")),
            },
        }
    }

    // --- named forms of the operators ---

    #[track_caller]
    pub fn add(self, other: Rational) -> Rational {
        self + other
    }

    #[track_caller]
    pub fn sub(self, other: Rational) -> Rational {
        self - other
    }

    #[track_caller]
    pub fn mul(self, other: Rational) -> Rational {
        self * other
    }

    /// # Panics
    ///
    /// If `other` is zero.
    #[track_caller]
    pub fn div(self, other: Rational) -> Rational {
        self / other
    }

    /// # Panics
    ///
    /// If the numerator is `i64::MIN`, whose negation does not fit.
    #[track_caller]
    pub fn negate(self) -> Rational {
        match self.checked_neg() {
            Ok(r) => r,
            Err(err) => fatal(err),
        }
    }

    /// # Panics
    ///
    /// If `self` is zero, or if it is negative with a numerator of `i64::MIN`.
    #[track_caller]
    pub fn recip(self) -> Rational {
        match self.checked_recip() {
            Ok(r) => r,
            Err(err) => fatal(err),
        }
    }

    pub fn equals(&self, other: &Rational) -> bool {
        self == other
    }

    /// Exact ordering. The cross products are taken in `i128`, where they
    /// cannot overflow.
    pub fn compare_to(&self, other: &Rational) -> Ordering {
        if self.denominator == other.denominator {
            return self.numerator.cmp(&other.numerator);
        }
        let lhs = i128::from(self.numerator) * i128::from(other.denominator);
        let rhs = i128::from(other.numerator) * i128::from(self.denominator);
        lhs.cmp(&rhs)
    }

    /// Same as comparing against `Rational::from_integer(n)`.
    pub fn compare_to_integer(&self, n: i64) -> Ordering {
        if self.denominator == 1 {
            return self.numerator.cmp(&n);
        }
        i128::from(self.numerator).cmp(&(i128::from(n) * i128::from(self.denominator)))
    }

    // --- sign and rounding ---

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    pub fn is_positive(&self) -> bool {
        self.numerator > 0
    }

    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    pub fn signum(&self) -> Rational {
        Rational::from_integer(self.numerator.signum())
    }

    /// # Panics
    ///
    /// If the numerator is `i64::MIN`.
    #[track_caller]
    pub fn abs(self) -> Rational {
        if self.numerator < 0 {
            self.negate()
        } else {
            self
        }
    }

    /// Rounds toward negative infinity.
    pub fn floor(&self) -> Rational {
        if self.is_integer() {
            return *self;
        }
        Rational::from_integer(Integer::div_floor(&self.numerator, &self.denominator))
    }

    /// Rounds toward positive infinity.
    pub fn ceil(&self) -> Rational {
        if self.is_integer() {
            return *self;
        }
        // denominator >= 2 here, so the floor is at most i64::MAX / 2
        Rational::from_integer(Integer::div_floor(&self.numerator, &self.denominator) + 1)
    }

    /// Rounds toward zero.
    pub fn trunc(&self) -> Rational {
        Rational::from_integer(self.numerator / self.denominator)
    }

    /// `self - self.trunc()`, carrying the sign of `self`.
    pub fn fract(&self) -> Rational {
        // numerator % denominator shares no factor with the denominator either
        Rational {
            numerator: self.numerator % self.denominator,
            denominator: self.denominator,
        }
    }

    /// Rounds to the nearest integer, halves away from zero.
    pub fn round(&self) -> Rational {
        if self.is_integer() {
            return *self;
        }
        // floor(|x| + 1/2) == (2|n| + d) / 2d
        let n = i128::from(self.numerator).abs();
        let d = i128::from(self.denominator);
        let rounded = (2 * n + d) / (2 * d);
        let rounded = if self.numerator < 0 { -rounded } else { rounded };
        // |rounded| <= |n| / 2 + 1 for d >= 2
        Rational::from_integer(rounded as i64)
    }
}
