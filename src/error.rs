// src/error.rs
//
// Error type for the recoverable (`try_` / `checked_`) surface of `Rational`.
// The operator forms never return these; they abort with the same message.

use std::fmt;

pub type Result<T> = std::result::Result<T, RationalError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RationalError {
    /// A numerator/denominator pair was given with a zero denominator.
    ZeroDenominator,
    /// Division (or reciprocal) of a zero-valued rational.
    DivisionByZero,
    /// An intermediate or final value does not fit in `i64`.
    Overflow { op: &'static str },
}

impl RationalError {
    pub(crate) fn overflow(op: &'static str) -> Self {
        log::trace!("rational {} overflowed i64", op);
        RationalError::Overflow { op }
    }
}

impl fmt::Display for RationalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RationalError::ZeroDenominator => write!(f, "zero denominator"),
            RationalError::DivisionByZero => write!(f, "Division by zero"),
            RationalError::Overflow { op } => {
                write!(f, "rational arithmetic overflow in {}", op)
            },
        }
    }
}

impl std::error::Error for RationalError {}

/// Aborts on an invariant violation. Used by every non-checked entry point.
#[cold]
#[track_caller]
pub(crate) fn fatal(err: RationalError) -> ! {
    panic!("{}", err)
}
