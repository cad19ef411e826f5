use std::fmt::{Display, Formatter};
use std::ops::{Mul, MulAssign};

use log::debug;

use crate::error::{QuaternionError, Result};
use crate::number_traits::Float;
use crate::tolerance::combined_tolerance_equals_with;
use crate::vector::{Vector, Vector3};

/// Quaternion `(x, y, z, w)` where `(x, y, z)` is the vector part and `w` the
/// scalar part.
///
/// Unit-ness is declared by the caller and checked once, when the quaternion is
/// built. It is never recomputed: writing through [`Quaternion::x_mut`] and
/// friends keeps the flag as it was.
///
/// The flag propagates as follows:
/// - [`Quaternion::conjugate`] keeps it, since only signs change.
/// - The Hamilton product is unit iff both operands are.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct Quaternion<T = f64> {
    components: Vector<T, 4>,
    is_unit: bool,
}

impl<T> Quaternion<T>
where
    T: Float,
{
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self {
            components: Vector::new([x, y, z, w]),
            is_unit: false,
        }
    }

    /// # Errors
    ///
    /// Will return [`Err`] if the norm of `(x, y, z, w)` is not 1.
    pub fn new_unit(x: T, y: T, z: T, w: T) -> Result<Self> {
        Self::from_components(Vector::new([x, y, z, w]), true)
    }

    /// # Panics
    ///
    /// Panics if `values` does not hold exactly 4 elements.
    pub fn from_slice(values: &[T]) -> Self {
        Self {
            components: Vector::from_slice(values),
            is_unit: false,
        }
    }

    /// # Errors
    ///
    /// Will return [`Err`] if the norm of `values` is not 1.
    ///
    /// # Panics
    ///
    /// Panics if `values` does not hold exactly 4 elements.
    pub fn unit_from_slice(values: &[T]) -> Result<Self> {
        Self::from_components(Vector::from_slice(values), true)
    }

    pub fn from_parts(vector_part: &Vector3<T>, w: T) -> Self {
        Self::new(vector_part.x(), vector_part.y(), vector_part.z(), w)
    }

    /// # Errors
    ///
    /// Will return [`Err`] if the norm of `(vector_part, w)` is not 1.
    pub fn unit_from_parts(vector_part: &Vector3<T>, w: T) -> Result<Self> {
        Self::from_components(
            Vector::new([vector_part.x(), vector_part.y(), vector_part.z(), w]),
            true,
        )
    }

    /// The rotation by angle zero.
    pub fn identity() -> Self {
        Self {
            components: Vector::new([T::zero(), T::zero(), T::zero(), T::one()]),
            is_unit: true,
        }
    }

    /// Copies the quaternion with a new unit flag.
    ///
    /// # Errors
    ///
    /// Will return [`Err`] if `is_unit` is set and the norm is not 1.
    pub fn with_unit_flag(&self, is_unit: bool) -> Result<Self> {
        Self::from_components(self.components.clone(), is_unit)
    }

    fn from_components(components: Vector<T, 4>, is_unit: bool) -> Result<Self> {
        let quaternion = Self {
            components,
            is_unit,
        };

        if is_unit {
            let norm = quaternion.l2_norm();
            if !combined_tolerance_equals_with(norm, T::one(), T::unit_norm_epsilon()) {
                debug!("Rejecting unit quaternion {quaternion} with norm {norm}");
                return Err(QuaternionError::NotUnit {
                    norm: norm.to_f64(),
                });
            }
        }

        Ok(quaternion)
    }

    #[must_use]
    pub fn x(&self) -> T {
        self.components.x()
    }

    #[must_use]
    pub fn y(&self) -> T {
        self.components.y()
    }

    #[must_use]
    pub fn z(&self) -> T {
        self.components.z()
    }

    #[must_use]
    pub fn w(&self) -> T {
        self.components[3]
    }

    pub fn x_mut(&mut self) -> &mut T {
        self.components.x_mut()
    }

    pub fn y_mut(&mut self) -> &mut T {
        self.components.y_mut()
    }

    pub fn z_mut(&mut self) -> &mut T {
        self.components.z_mut()
    }

    pub fn w_mut(&mut self) -> &mut T {
        &mut self.components[3]
    }

    pub fn vector_part(&self) -> Vector3<T> {
        Vector3::new([self.x(), self.y(), self.z()])
    }

    pub fn components(&self) -> &Vector<T, 4> {
        &self.components
    }

    #[must_use]
    pub fn l2_norm(&self) -> T {
        self.components.l2_norm()
    }

    /// The declared flag, not a fresh norm check.
    #[must_use]
    pub fn is_unit(&self) -> bool {
        self.is_unit
    }

    pub fn conjugate(&self) -> Self {
        Self {
            components: Vector::new([-self.x(), -self.y(), -self.z(), self.w()]),
            is_unit: self.is_unit,
        }
    }
}

impl<T> Display for Quaternion<T>
where
    T: Float,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.x(),
            self.y(),
            self.z(),
            self.w()
        )
    }
}

/// Hamilton product.
impl<T> Mul for &Quaternion<T>
where
    T: Float,
{
    type Output = Quaternion<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        let v1 = self.vector_part();
        let v2 = rhs.vector_part();
        let w1 = self.w();
        let w2 = rhs.w();

        let vector_part = v2.clone() * w1 + v1.clone() * w2 + (&v1 ^ &v2);
        let scalar_part = w1 * w2 - &v1 * &v2;

        Quaternion {
            components: Vector::new([
                vector_part.x(),
                vector_part.y(),
                vector_part.z(),
                scalar_part,
            ]),
            is_unit: self.is_unit && rhs.is_unit,
        }
    }
}

impl<T> Mul for Quaternion<T>
where
    T: Float,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl<T> MulAssign<&Quaternion<T>> for Quaternion<T>
where
    T: Float,
{
    fn mul_assign(&mut self, rhs: &Quaternion<T>) {
        *self = &*self * rhs;
    }
}

impl<T> MulAssign for Quaternion<T>
where
    T: Float,
{
    fn mul_assign(&mut self, rhs: Self) {
        *self *= &rhs;
    }
}
