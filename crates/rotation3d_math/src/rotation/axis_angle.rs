use log::trace;

use crate::matrix::Matrix;
use crate::number_traits::Float;
use crate::rotation::{rodrigues_matrix, Rotation};
use crate::vector::Vector3;

/// Rotation stored as the 3x3 matrix built once from an axis and an angle.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationAxisAngle<T = f64> {
    unit_axis: Vector3<T>,
    angle: T,
    rotation_matrix: Matrix<T>,
}

impl<T> RotationAxisAngle<T>
where
    T: Float,
{
    /// Creates the rotation of `angle` radians around `unit_axis`.
    ///
    /// `unit_axis` must have unit length. This is not checked.
    #[must_use]
    pub fn new(unit_axis: &Vector3<T>, angle: T) -> Self {
        trace!(
            "Building axis-angle rotation of {angle} rad around ({}, {}, {})",
            unit_axis.x(),
            unit_axis.y(),
            unit_axis.z()
        );
        Self {
            unit_axis: unit_axis.clone(),
            angle,
            rotation_matrix: rodrigues_matrix(unit_axis, angle),
        }
    }

    pub fn axis(&self) -> &Vector3<T> {
        &self.unit_axis
    }

    pub fn angle(&self) -> T {
        self.angle
    }

    pub fn rotation_matrix(&self) -> &Matrix<T> {
        &self.rotation_matrix
    }
}

impl<T> Rotation<T> for RotationAxisAngle<T>
where
    T: Float,
{
    fn rotate(&self, vector: &Vector3<T>) -> Vector3<T> {
        &self.rotation_matrix * vector
    }
}
