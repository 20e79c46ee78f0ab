// src/types/display.rs
//
// Text form of a rational: "n" for integers, "n/d" otherwise.
// One-directional; there is no parser.

use std::fmt;

use super::rational::Rational;

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer())
        } else {
            write!(f, "{}/{}", self.numer(), self.denom())
        }
    }
}
