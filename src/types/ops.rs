// src/types/ops.rs
//
// Operator traits for `Rational`.
//
// The compound-assignment forms defer to the `try_*_assign` methods and abort
// on failure; every other form is a copy followed by the compound operator.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::rational::Rational;
use crate::error::fatal;

macro_rules! impl_binary_op {
    ( $( $Op:ident $op:ident, $OpAssign:ident $op_assign:ident => $try_assign:ident; )* ) => { $(
        impl $OpAssign for Rational {
            #[track_caller]
            fn $op_assign(&mut self, rhs: Rational) {
                if let Err(err) = self.$try_assign(rhs) {
                    fatal(err)
                }
            }
        }

        impl $OpAssign<&Rational> for Rational {
            #[track_caller]
            fn $op_assign(&mut self, rhs: &Rational) {
                $OpAssign::$op_assign(self, *rhs)
            }
        }

        impl $OpAssign<i64> for Rational {
            #[track_caller]
            fn $op_assign(&mut self, rhs: i64) {
                $OpAssign::$op_assign(self, Rational::from_integer(rhs))
            }
        }

        impl $Op for Rational {
            type Output = Rational;

            #[track_caller]
            fn $op(self, rhs: Rational) -> Rational {
                let mut out = self;
                $OpAssign::$op_assign(&mut out, rhs);
                out
            }
        }

        impl $Op<&Rational> for &Rational {
            type Output = Rational;

            #[track_caller]
            fn $op(self, rhs: &Rational) -> Rational {
                $Op::$op(*self, *rhs)
            }
        }

        impl $Op<i64> for Rational {
            type Output = Rational;

            #[track_caller]
            fn $op(self, rhs: i64) -> Rational {
                $Op::$op(self, Rational::from_integer(rhs))
            }
        }

        impl $Op<Rational> for i64 {
            type Output = Rational;

            #[track_caller]
            fn $op(self, rhs: Rational) -> Rational {
                $Op::$op(Rational::from_integer(self), rhs)
            }
        }
    )* };
}

impl_binary_op! {
    Add add, AddAssign add_assign => try_add_assign;
    Sub sub, SubAssign sub_assign => try_sub_assign;
    Mul mul, MulAssign mul_assign => try_mul_assign;
    Div div, DivAssign div_assign => try_div_assign;
}

/// # Panics
///
/// If the numerator is `i64::MIN`.
impl Neg for Rational {
    type Output = Rational;

    #[track_caller]
    fn neg(self) -> Rational {
        self.negate()
    }
}

impl Neg for &Rational {
    type Output = Rational;

    #[track_caller]
    fn neg(self) -> Rational {
        self.negate()
    }
}
