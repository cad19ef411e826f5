use std::fmt::Display;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

pub trait One {
    fn one() -> Self;
}

impl One for i32 {
    fn one() -> Self {
        1
    }
}

impl One for f32 {
    fn one() -> Self {
        1.0
    }
}

impl One for f64 {
    fn one() -> Self {
        1.0
    }
}

pub trait Zero {
    fn zero() -> Self;
}

impl Zero for i32 {
    fn zero() -> Self {
        0
    }
}

impl Zero for f32 {
    fn zero() -> Self {
        0.0
    }
}

impl Zero for f64 {
    fn zero() -> Self {
        0.0
    }
}

pub trait NumericOps:
    Sized
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Div<Output = Self>
    + DivAssign
    + Neg<Output = Self>
    + PartialOrd
{
}

impl NumericOps for i32 {}

impl NumericOps for f32 {}

impl NumericOps for f64 {}

/// Element types the rotation code can work with.
pub trait Float: Display + Copy + Zero + One + NumericOps {
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn half(self) -> Self;
    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn max(self, other: Self) -> Self;
    fn to_f64(self) -> f64;

    /// Machine epsilon of the type.
    fn epsilon() -> Self;

    /// Epsilon used when validating the norm of a unit quaternion.
    ///
    /// A few ulps wider than [`Float::epsilon`] so that quaternions built from
    /// `sin`/`cos` of a normalized axis are accepted.
    fn unit_norm_epsilon() -> Self;
}

macro_rules! impl_float {
    ($ty:ident) => {
        impl Float for $ty {
            fn sin(self) -> Self {
                self.sin()
            }

            fn cos(self) -> Self {
                self.cos()
            }

            fn half(self) -> Self {
                self * 0.5
            }

            fn sqrt(self) -> Self {
                self.sqrt()
            }

            fn abs(self) -> Self {
                self.abs()
            }

            fn max(self, other: Self) -> Self {
                self.max(other)
            }

            fn to_f64(self) -> f64 {
                f64::from(self)
            }

            fn epsilon() -> Self {
                $ty::EPSILON
            }

            fn unit_norm_epsilon() -> Self {
                $ty::EPSILON * 8.0
            }
        }
    };
}

impl_float!(f32);
impl_float!(f64);
