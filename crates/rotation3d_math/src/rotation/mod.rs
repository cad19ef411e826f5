//! 3D rotations of [`Vector3`]s.

mod axis_angle;
mod quaternion;

pub use axis_angle::RotationAxisAngle;
pub use quaternion::RotationQuaternion;

use crate::matrix::Matrix;
use crate::number_traits::Float;
use crate::vector::{cross_product_matrix, Vector3};

pub trait Rotation<T> {
    fn rotate(&self, vector: &Vector3<T>) -> Vector3<T>;
}

/// Rotation matrix of `angle` radians around `unit_axis`, from Rodrigues'
/// formula `I + sin(angle) [v]x + (1 - cos(angle)) [v]x^2`.
///
/// `unit_axis` must have unit length. This is not checked.
#[must_use]
pub fn rodrigues_matrix<T>(unit_axis: &Vector3<T>, angle: T) -> Matrix<T>
where
    T: Float,
{
    let skew = cross_product_matrix(unit_axis);
    let skew_squared = &skew * &skew;

    Matrix::identity(3) + skew * angle.sin() + skew_squared * (T::one() - angle.cos())
}
