// src/types/mod.rs

pub mod rational;

mod cmp;
mod convert;
mod display;
mod ops;


pub use self::rational::Rational;
