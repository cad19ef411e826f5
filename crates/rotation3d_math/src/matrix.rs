use std::fmt::{Debug, Display, Formatter};
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use crate::number_traits::{NumericOps, One, Zero};

/// Dense row-major matrix.
///
/// Shape mismatches and out of range indices are programming errors and
/// panic.
#[derive(Clone, PartialEq)]
pub struct Matrix<T = f64> {
    rows: usize,
    cols: usize,
    values: Vec<T>,
}

impl<T> Debug for Matrix<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "[")?;
        for i in 0..self.rows {
            write!(f, "\t")?;
            for j in 0..self.cols {
                write!(f, "{:?}, ", self.values[i * self.cols + j])?;
            }
            writeln!(f)?;
        }
        writeln!(f, "]")
    }
}

impl<T> Display for Matrix<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                write!(f, "{}", self.values[i * self.cols + j])?;
                if j + 1 == self.cols {
                    writeln!(f)?;
                } else {
                    write!(f, " ")?;
                }
            }
        }
        Ok(())
    }
}

impl<T> Matrix<T> {
    /// Creates a `rows` x `cols` matrix from row-major `values`.
    ///
    /// # Panics
    ///
    /// Panics if a dimension is zero or if `values.len() != rows * cols`.
    #[must_use]
    pub fn with_values(values: Vec<T>, rows: usize, cols: usize) -> Self {
        assert!(
            rows > 0 && cols > 0,
            "matrix dimensions must be non-zero, got {rows}x{cols}"
        );
        assert_eq!(
            values.len(),
            rows * cols,
            "expected {} values for a {rows}x{cols} matrix",
            rows * cols
        );
        Self { rows, cols, values }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of stored elements.
    #[must_use]
    pub fn size(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    #[must_use]
    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    /// # Panics
    ///
    /// Panics if `i >= rows` or `j >= cols`.
    #[must_use]
    pub fn at(&self, i: usize, j: usize) -> T
    where
        T: Copy,
    {
        self.values[self.offset(i, j)]
    }

    /// # Panics
    ///
    /// Panics if `i >= rows` or `j >= cols`.
    pub fn at_mut(&mut self, i: usize, j: usize) -> &mut T {
        let offset = self.offset(i, j);
        &mut self.values[offset]
    }

    fn offset(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of range for a {}x{} matrix",
            self.rows,
            self.cols
        );
        i * self.cols + j
    }

    fn assert_same_shape(&self, other: &Self) {
        assert!(
            self.rows == other.rows && self.cols == other.cols,
            "shape mismatch: {}x{} vs {}x{}",
            self.rows,
            self.cols,
            other.rows,
            other.cols
        );
    }
}

impl<T> Matrix<T>
where
    T: Copy + Zero,
{
    /// Creates a zero-filled `rows` x `cols` matrix.
    ///
    /// # Panics
    ///
    /// Panics if a dimension is zero.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_values(vec![T::zero(); rows * cols], rows, cols)
    }
}

impl<T> Matrix<T>
where
    T: Copy + Zero + One,
{
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut identity = Self::new(n, n);
        for i in 0..n {
            identity[(i, i)] = T::one();
        }
        identity
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.values[self.offset(i, j)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        self.at_mut(i, j)
    }
}

impl<T> MulAssign<T> for Matrix<T>
where
    T: Copy + NumericOps,
{
    fn mul_assign(&mut self, rhs: T) {
        for value in &mut self.values {
            *value *= rhs;
        }
    }
}

impl<T> Mul<T> for Matrix<T>
where
    T: Copy + NumericOps,
{
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self::Output {
        self *= rhs;
        self
    }
}

impl<T> AddAssign<&Matrix<T>> for Matrix<T>
where
    T: Copy + NumericOps,
{
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        self.assert_same_shape(rhs);
        for (value, other) in self.values.iter_mut().zip(&rhs.values) {
            *value += *other;
        }
    }
}

impl<T> AddAssign for Matrix<T>
where
    T: Copy + NumericOps,
{
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}

impl<T> Add for Matrix<T>
where
    T: Copy + NumericOps,
{
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += &rhs;
        self
    }
}

impl<T> Add for &Matrix<T>
where
    T: Copy + NumericOps,
{
    type Output = Matrix<T>;

    fn add(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result += rhs;
        result
    }
}

impl<T> SubAssign<&Matrix<T>> for Matrix<T>
where
    T: Copy + NumericOps,
{
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        self.assert_same_shape(rhs);
        for (value, other) in self.values.iter_mut().zip(&rhs.values) {
            *value -= *other;
        }
    }
}

impl<T> SubAssign for Matrix<T>
where
    T: Copy + NumericOps,
{
    fn sub_assign(&mut self, rhs: Self) {
        *self -= &rhs;
    }
}

impl<T> Sub for Matrix<T>
where
    T: Copy + NumericOps,
{
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= &rhs;
        self
    }
}

impl<T> Sub for &Matrix<T>
where
    T: Copy + NumericOps,
{
    type Output = Matrix<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result -= rhs;
        result
    }
}

impl<T> Mul for &Matrix<T>
where
    T: Copy + Zero + NumericOps,
{
    type Output = Matrix<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        assert_eq!(
            self.cols, rhs.rows,
            "cannot multiply a {}x{} matrix by a {}x{} matrix",
            self.rows, self.cols, rhs.rows, rhs.cols
        );

        let mut result = Matrix::new(self.rows, rhs.cols);
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut sum = T::zero();
                for k in 0..self.cols {
                    sum += self[(i, k)] * rhs[(k, j)];
                }
                result[(i, j)] = sum;
            }
        }

        result
    }
}

impl<T> Mul for Matrix<T>
where
    T: Copy + Zero + NumericOps,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl<T> MulAssign<&Matrix<T>> for Matrix<T>
where
    T: Copy + Zero + NumericOps,
{
    fn mul_assign(&mut self, rhs: &Matrix<T>) {
        *self = &*self * rhs;
    }
}
