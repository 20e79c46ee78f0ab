// src/math.rs
//
// Integer helpers shared by the rational type.

use num_traits::{CheckedRem, PrimInt, Signed};

/// Greatest common divisor by iterative Euclidean reduction.
///
/// The two operands take turns being reduced modulo the other until one of
/// them reaches zero, and the other one is returned as is. The sign of the
/// result is therefore the sign of whichever operand survived, so callers
/// that need a positive divisor must take its absolute value themselves.
///
/// `gcd(0, 0)` returns `0`. That value is never a usable divisor; callers
/// only reach it with a zero denominator, which they reject beforehand.
pub fn gcd<T>(mut a: T, mut b: T) -> T
where
    T: PrimInt + Signed + CheckedRem,
{
    let zero = T::zero();
    loop {
        if a == zero {
            return b;
        }
        // `MIN % -1` is the one remainder that overflows; mathematically it is 0.
        b = b.checked_rem(&a).unwrap_or(zero);

        if b == zero {
            return a;
        }
        a = a.checked_rem(&b).unwrap_or(zero);
    }
}
