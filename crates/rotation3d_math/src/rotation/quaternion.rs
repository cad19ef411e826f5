use log::trace;

use crate::error::Result;
use crate::number_traits::Float;
use crate::quaternion::Quaternion;
use crate::rotation::Rotation;
use crate::vector::Vector3;

/// Rotation stored as a unit quaternion, applied by conjugation `q p q*`.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationQuaternion<T = f64> {
    unit_quaternion: Quaternion<T>,
}

impl<T> RotationQuaternion<T>
where
    T: Float,
{
    /// Creates the rotation of `angle` radians around `unit_axis`, stored as
    /// `(unit_axis * sin(angle / 2), cos(angle / 2))`.
    ///
    /// # Errors
    ///
    /// Will return [`Err`] if `unit_axis` is far enough from unit length for
    /// the resulting quaternion not to be unit.
    pub fn from_axis_angle(unit_axis: &Vector3<T>, angle: T) -> Result<Self> {
        let half_angle = angle.half();
        let unit_quaternion =
            Quaternion::unit_from_parts(&(unit_axis.clone() * half_angle.sin()), half_angle.cos())?;
        trace!("Building quaternion rotation {unit_quaternion}");
        Ok(Self { unit_quaternion })
    }

    /// # Errors
    ///
    /// Will return [`Err`] if `quaternion` does not have unit norm.
    pub fn from_quaternion(quaternion: &Quaternion<T>) -> Result<Self> {
        let unit_quaternion = quaternion.with_unit_flag(true)?;
        trace!("Building quaternion rotation {unit_quaternion}");
        Ok(Self { unit_quaternion })
    }

    pub fn quaternion(&self) -> &Quaternion<T> {
        &self.unit_quaternion
    }
}

impl<T> Rotation<T> for RotationQuaternion<T>
where
    T: Float,
{
    fn rotate(&self, vector: &Vector3<T>) -> Vector3<T> {
        let pure = Quaternion::from_parts(vector, T::zero());
        let rotated = &(&self.unit_quaternion * &pure) * &self.unit_quaternion.conjugate();
        rotated.vector_part()
    }
}
