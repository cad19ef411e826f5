use std::fmt::{Debug, Display, Formatter};
use std::ops::{
    Add, AddAssign, BitXor, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::matrix::Matrix;
use crate::number_traits::{Float, NumericOps, Zero};

pub type Vector3<T> = Vector<T, 3>;

/// Column vector of fixed dimension `N`, stored as an `N` x 1 [`Matrix`].
///
/// `N` must be at least 3; instantiating a smaller vector fails to compile.
#[must_use]
#[derive(Clone, PartialEq)]
pub struct Vector<T, const N: usize> {
    matrix: Matrix<T>,
}

impl<T, const N: usize> Vector<T, N> {
    const DIMENSION_CHECK: () = assert!(N >= 3, "vectors need at least 3 dimensions");

    pub(crate) fn from_matrix(matrix: Matrix<T>) -> Self {
        let () = Self::DIMENSION_CHECK;
        assert!(
            matrix.rows() == N && matrix.cols() == 1,
            "expected a {N}x1 matrix, got {}x{}",
            matrix.rows(),
            matrix.cols()
        );
        Self { matrix }
    }

    pub fn new(values: [T; N]) -> Self {
        Self::from_matrix(Matrix::with_values(Vec::from(values), N, 1))
    }

    #[must_use]
    pub fn values(&self) -> &[T] {
        self.matrix.values()
    }

    #[must_use]
    pub fn as_matrix(&self) -> &Matrix<T> {
        &self.matrix
    }

    #[must_use]
    pub fn into_matrix(self) -> Matrix<T> {
        self.matrix
    }

    pub fn x_mut(&mut self) -> &mut T {
        self.matrix.at_mut(0, 0)
    }

    pub fn y_mut(&mut self) -> &mut T {
        self.matrix.at_mut(1, 0)
    }

    pub fn z_mut(&mut self) -> &mut T {
        self.matrix.at_mut(2, 0)
    }
}

impl<T, const N: usize> Vector<T, N>
where
    T: Copy,
{
    /// # Panics
    ///
    /// Panics if `values.len() != N`.
    pub fn from_slice(values: &[T]) -> Self {
        assert_eq!(
            values.len(),
            N,
            "expected {N} values for a vector of dimension {N}"
        );
        Self::from_matrix(Matrix::with_values(values.to_vec(), N, 1))
    }

    #[must_use]
    pub fn x(&self) -> T {
        self.matrix.at(0, 0)
    }

    #[must_use]
    pub fn y(&self) -> T {
        self.matrix.at(1, 0)
    }

    #[must_use]
    pub fn z(&self) -> T {
        self.matrix.at(2, 0)
    }
}

impl<T, const N: usize> Vector<T, N>
where
    T: Copy + Zero + NumericOps,
{
    #[must_use]
    pub fn dot(&self, other: &Self) -> T {
        let mut result = T::zero();
        for (a, b) in self.values().iter().zip(other.values()) {
            result += *a * *b;
        }
        result
    }
}

impl<T, const N: usize> Vector<T, N>
where
    T: Float,
{
    #[must_use]
    pub fn l2_norm(&self) -> T {
        self.dot(self).sqrt()
    }

    pub fn normalize(&mut self) {
        let norm = self.l2_norm();
        for i in 0..N {
            self[i] /= norm;
        }
    }

    pub fn normalized(&self) -> Self {
        let mut normalized = self.clone();
        normalized.normalize();
        normalized
    }
}

impl<T> Vector<T, 3>
where
    T: Copy + NumericOps,
{
    pub fn cross(&self, other: &Self) -> Self {
        Self::new([
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        ])
    }
}

/// Skew-symmetric matrix `[v]x` such that `[v]x * u == v ^ u`.
#[rustfmt::skip]
#[must_use]
pub fn cross_product_matrix<T>(v: &Vector3<T>) -> Matrix<T>
where
    T: Copy + Zero + NumericOps,
{
    Matrix::with_values(vec![
        T::zero(), -v.z(), v.y(),
        v.z(), T::zero(), -v.x(),
        -v.y(), v.x(), T::zero(),
    ], 3, 3)
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Copy + Zero,
{
    fn default() -> Self {
        Self::from_matrix(Matrix::new(N, 1))
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.matrix[(index, 0)]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.matrix[(index, 0)]
    }
}

impl<T, const N: usize> Add for Vector<T, N>
where
    T: Copy + NumericOps,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_matrix(self.matrix + rhs.matrix)
    }
}

impl<T, const N: usize> Add for &Vector<T, N>
where
    T: Copy + NumericOps,
{
    type Output = Vector<T, N>;

    fn add(self, rhs: Self) -> Self::Output {
        Vector::from_matrix(&self.matrix + &rhs.matrix)
    }
}

impl<T, const N: usize> AddAssign for Vector<T, N>
where
    T: Copy + NumericOps,
{
    fn add_assign(&mut self, rhs: Self) {
        self.matrix += &rhs.matrix;
    }
}

impl<T, const N: usize> Sub for Vector<T, N>
where
    T: Copy + NumericOps,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_matrix(self.matrix - rhs.matrix)
    }
}

impl<T, const N: usize> Sub for &Vector<T, N>
where
    T: Copy + NumericOps,
{
    type Output = Vector<T, N>;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector::from_matrix(&self.matrix - &rhs.matrix)
    }
}

impl<T, const N: usize> SubAssign for Vector<T, N>
where
    T: Copy + NumericOps,
{
    fn sub_assign(&mut self, rhs: Self) {
        self.matrix -= &rhs.matrix;
    }
}

impl<T, const N: usize> Mul<T> for Vector<T, N>
where
    T: Copy + NumericOps,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self::from_matrix(self.matrix * rhs)
    }
}

impl<T, const N: usize> MulAssign<T> for Vector<T, N>
where
    T: Copy + NumericOps,
{
    fn mul_assign(&mut self, rhs: T) {
        self.matrix *= rhs;
    }
}

impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Copy + NumericOps,
{
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        for i in 0..N {
            self[i] = -self[i];
        }
        self
    }
}

/// Dot product.
impl<T, const N: usize> Mul for &Vector<T, N>
where
    T: Copy + Zero + NumericOps,
{
    type Output = T;

    fn mul(self, rhs: Self) -> Self::Output {
        self.dot(rhs)
    }
}

/// Dot product.
impl<T, const N: usize> Mul for Vector<T, N>
where
    T: Copy + Zero + NumericOps,
{
    type Output = T;

    fn mul(self, rhs: Self) -> Self::Output {
        self.dot(&rhs)
    }
}

/// Cross product.
impl<T> BitXor for &Vector3<T>
where
    T: Copy + NumericOps,
{
    type Output = Vector3<T>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.cross(rhs)
    }
}

/// Cross product.
impl<T> BitXor for Vector3<T>
where
    T: Copy + NumericOps,
{
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.cross(&rhs)
    }
}

/// Applies an `N` x `N` matrix to the vector.
impl<T, const N: usize> Mul<&Vector<T, N>> for &Matrix<T>
where
    T: Copy + Zero + NumericOps,
{
    type Output = Vector<T, N>;

    fn mul(self, rhs: &Vector<T, N>) -> Self::Output {
        assert!(
            self.rows() == N && self.cols() == N,
            "cannot apply a {}x{} matrix to a vector of dimension {N}",
            self.rows(),
            self.cols()
        );
        Vector::from_matrix(self * &rhs.matrix)
    }
}

impl<T, const N: usize> Mul<Vector<T, N>> for Matrix<T>
where
    T: Copy + Zero + NumericOps,
{
    type Output = Vector<T, N>;

    fn mul(self, rhs: Vector<T, N>) -> Self::Output {
        &self * &rhs
    }
}

impl<T, const N: usize> Display for Vector<T, N>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.matrix)
    }
}

impl<T, const N: usize> Debug for Vector<T, N>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(values: [T; N]) -> Self {
        Self::new(values)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N]
where
    T: Copy,
{
    fn from(vector: Vector<T, N>) -> Self {
        std::array::from_fn(|i| vector[i])
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;

    use super::*;

    fn assert_vector_near(actual: &Vector3<f64>, expected: &Vector3<f64>) {
        assert_float_absolute_eq!(actual.x(), expected.x(), 1e-12);
        assert_float_absolute_eq!(actual.y(), expected.y(), 1e-12);
        assert_float_absolute_eq!(actual.z(), expected.z(), 1e-12);
    }

    #[test]
    fn vector3_new() {
        let v = Vector3::new([1, 2, 3]);

        assert_eq!(v.x(), 1);
        assert_eq!(v.y(), 2);
        assert_eq!(v.z(), 3);
        assert_eq!(v.as_matrix().rows(), 3);
        assert_eq!(v.as_matrix().cols(), 1);
    }

    #[test]
    fn default() {
        let v = Vector::<f32, 4>::default();

        assert_eq!(v.values(), &[0.0; 4]);
    }

    #[test]
    fn from_slice() {
        let v = Vector::<i32, 4>::from_slice(&[1, 2, 3, 4]);

        assert_eq!(v[3], 4);
    }

    #[test]
    #[should_panic(expected = "expected 3 values")]
    fn from_slice_wrong_length() {
        let _ = Vector3::<f64>::from_slice(&[1.0, 2.0]);
    }

    #[test]
    fn mutable_accessors() {
        let mut v = Vector3::new([1, 2, 3]);

        *v.x_mut() = 10;
        *v.y_mut() += 10;
        *v.z_mut() *= 10;
        v[0] += 1;

        assert_eq!(v.values(), &[11, 12, 30]);
    }

    #[test]
    fn add() {
        let a = Vector3::new([1, 2, 3]);
        let b = Vector3::new([4, 5, 6]);

        assert_eq!((&a + &b).values(), &[5, 7, 9]);
        assert_eq!((a + b).values(), &[5, 7, 9]);
    }

    #[test]
    fn add_assign() {
        let mut a = Vector3::new([1, 2, 3]);
        let b = Vector3::new([4, 5, 6]);

        a += b;

        assert_eq!(a.values(), &[5, 7, 9]);
    }

    #[test]
    fn sub() {
        let a = Vector3::new([1, 2, 3]);
        let b = Vector3::new([4, 3, 2]);

        assert_eq!((&a - &b).values(), &[-3, -1, 1]);
        assert_eq!((a - b).values(), &[-3, -1, 1]);
    }

    #[test]
    fn sub_assign() {
        let mut a = Vector3::new([1, 2, 3]);
        let b = Vector3::new([4, 3, 2]);

        a -= b;

        assert_eq!(a.values(), &[-3, -1, 1]);
    }

    #[test]
    fn mul_scalar() {
        let v = Vector::<i32, 4>::new([1, 2, 3, 4]);

        let result = v * 5;

        assert_eq!(result.values(), &[5, 10, 15, 20]);
    }

    #[test]
    fn mul_assign_scalar() {
        let mut v = Vector3::new([1, 2, 3]);

        v *= 5;

        assert_eq!(v.values(), &[5, 10, 15]);
    }

    #[test]
    fn neg() {
        let v = Vector3::new([1, -2, 3]);

        assert_eq!((-v).values(), &[-1, 2, -3]);
    }

    #[test]
    fn dot() {
        let a = Vector3::new([1.0, 2.0, 3.0]);
        let b = Vector3::new([4.0, -5.0, 6.0]);

        assert_float_absolute_eq!(&a * &b, 12.0, 1e-12);
        assert_float_absolute_eq!(a.dot(&b), 12.0, 1e-12);
    }

    #[test]
    fn norm() {
        let v = Vector3::new([1.0, 2.0, 3.0]);
        assert_float_absolute_eq!(v.l2_norm(), 3.74, 0.01);

        let v = Vector::<f64, 4>::new([1.0, 1.0, 1.0, 1.0]);
        assert_float_absolute_eq!(v.l2_norm(), 2.0, 1e-12);
    }

    #[test]
    fn normalized() {
        let v = Vector3::new([1.0, 2.0, 3.0]);

        let normalized = v.normalized();

        assert_float_absolute_eq!(normalized.x(), 0.26, 0.01);
        assert_float_absolute_eq!(normalized.y(), 0.53, 0.01);
        assert_float_absolute_eq!(normalized.z(), 0.80, 0.01);
        assert_float_absolute_eq!(normalized.l2_norm(), 1.0, 1e-12);
    }

    #[test]
    fn cross() {
        let a = Vector3::new([1.0, 2.0, 3.0]);
        let b = Vector3::new([4.0, 5.0, 6.0]);

        let result = &a ^ &b;

        assert_vector_near(&result, &Vector3::new([-3.0, 6.0, -3.0]));
        assert_vector_near(&a.cross(&b), &result);
    }

    #[test]
    fn cross_of_basis_vectors() {
        let e1 = Vector3::new([1, 0, 0]);
        let e2 = Vector3::new([0, 1, 0]);
        let e3 = Vector3::new([0, 0, 1]);

        assert_eq!(&e1 ^ &e2, e3);
        assert_eq!(&e2 ^ &e3, e1);
        assert_eq!(e3 ^ e1, e2);
    }

    #[test]
    fn cross_is_anticommutative_and_orthogonal() {
        let u = Vector3::new([0.4, 5.0, 3.4]);
        let v = Vector3::new([-1.25, 0.5, 7.0]);

        let uv = &u ^ &v;
        let vu = &v ^ &u;

        assert_vector_near(&uv, &-vu);
        assert_float_absolute_eq!(&u * &uv, 0.0, 1e-12);
        assert_float_absolute_eq!(&v * &uv, 0.0, 1e-12);
    }

    #[test]
    fn cross_product_matrix_matches_cross() {
        let v = Vector3::new([0.3, -1.7, 2.2]);
        let u = Vector3::new([4.0, 0.25, -3.5]);

        let skew = cross_product_matrix(&v);

        assert_vector_near(&(&skew * &u), &(&v ^ &u));
        for i in 0..3 {
            assert_float_absolute_eq!(skew[(i, i)], 0.0, 0.0);
            for j in 0..3 {
                assert_float_absolute_eq!(skew[(i, j)], -skew[(j, i)], 0.0);
            }
        }
    }

    #[rustfmt::skip]
    #[test]
    fn matrix_vector_product() {
        let m = Matrix::with_values(vec![
            1, 2, 12,
            4, 5, 6,
            7, 12, 9,
        ], 3, 3);
        let v = Vector3::new([1, 0, -1]);

        let result = &m * &v;

        assert_eq!(result.values(), &[-11, -2, -2]);
        assert_eq!(Matrix::<i32>::identity(3) * v.clone(), v);
    }

    #[test]
    #[should_panic(expected = "cannot apply a 3x3 matrix")]
    fn matrix_vector_dimension_mismatch() {
        let m = Matrix::<i32>::identity(3);
        let v = Vector::<i32, 4>::default();

        let _ = &m * &v;
    }

    #[test]
    fn display() {
        let v = Vector3::new([1, 2, 3]);

        assert_eq!(format!("{v}"), "1\n2\n3\n");
    }

    #[test]
    fn into_array() {
        let v = Vector::<i32, 4>::from([0, 1, 2, 3]);
        let array: [i32; 4] = v.into();

        assert_eq!(array, [0, 1, 2, 3]);
    }
}
