#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

extern crate assert_float_eq;

pub mod error;
pub mod matrix;
pub mod number_traits;
pub mod quaternion;
pub mod rotation;
pub mod tolerance;
pub mod vector;
