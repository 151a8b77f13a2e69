//! Dense row-major matrices with the block operations Strassen multiplication needs.

use std::fmt;
use std::ops::{Add, Sub};

use malachite::Integer;

use crate::errors::DncError;

/*
                                                  ╒══════════════════╕
    ============================================= │  IMPLEMENTATION  │ =============================================
                                                  ╘══════════════════╛
*/

/// Numeric element of a [`Matrix`].
pub trait Scalar: Clone + fmt::Debug + fmt::Display + PartialEq + Send + Sync {
    fn zero() -> Self;
    fn one() -> Self;

    fn plus(&self, other: &Self) -> Self;
    fn minus(&self, other: &Self) -> Self;
    fn times(&self, other: &Self) -> Self;
}

macro_rules! impl_native_scalar {
    ($zero: expr, $one: expr, $($t: ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn zero() -> Self { $zero }

                #[inline]
                fn one() -> Self { $one }

                #[inline]
                fn plus(&self, other: &Self) -> Self { *self + *other }

                #[inline]
                fn minus(&self, other: &Self) -> Self { *self - *other }

                #[inline]
                fn times(&self, other: &Self) -> Self { *self * *other }
            }
        )*
    };
}

impl_native_scalar!(0, 1, i32, i64, i128);
impl_native_scalar!(0.0, 1.0, f32, f64);

impl Scalar for Integer {
    fn zero() -> Self {
        Integer::from(0)
    }

    fn one() -> Self {
        Integer::from(1)
    }

    fn plus(&self, other: &Self) -> Self {
        self + other
    }

    fn minus(&self, other: &Self) -> Self {
        self - other
    }

    fn times(&self, other: &Self) -> Self {
        self * other
    }
}

/*
    ╒═══════════════╕
    │ Matrix values │
    ╘═══════════════╛
*/

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T: Scalar> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize
}

impl<T: Scalar> Matrix<T> {
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Matrix { data: vec!(T::zero(); nrows * ncols), nrows, ncols }
    }

    pub fn identity(n: usize) -> Self {
        Matrix::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Builds a matrix calling `f(row, col)` for every position.
    pub fn from_fn<F>(nrows: usize, ncols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T
    {
        let data = (0..nrows * ncols).map(|idx| f(idx / ncols, idx % ncols)).collect();

        Matrix { data, nrows, ncols }
    }

    pub fn from_vec(data: Vec<T>, nrows: usize, ncols: usize) -> Result<Self, DncError> {
        if data.len() != nrows * ncols {
            return Err(DncError::dimension_mismatch(format!(
                "{} values cannot fill a {}x{} matrix", data.len(), nrows, ncols
            )));
        }

        Ok(Matrix { data, nrows, ncols })
    }

    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, DncError> {
        let nrows = rows.len();
        let ncols = rows.first().map(Vec::len).unwrap_or(0);

        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != ncols) {
            return Err(DncError::dimension_mismatch(format!(
                "Row {} has {} columns, expected {}", i, row.len(), ncols
            )));
        }

        Ok(Matrix { data: rows.into_iter().flatten().collect(), nrows, ncols })
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> &T {
        &self.data[i * self.ncols + j]
    }

    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.nrows).map(move |i| self.row(i))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Copy of the `nrows` x `ncols` block starting at (`row`, `col`).
    pub fn block(&self, row: usize, col: usize, nrows: usize, ncols: usize) -> Self {
        Matrix::from_fn(nrows, ncols, |i, j| self.get(row + i, col + j).clone())
    }

    /// Splits a matrix with even row and column counts into four equal blocks.
    pub fn quadrants(&self) -> Quadrants<T> {
        debug_assert!(self.nrows % 2 == 0 && self.ncols % 2 == 0, "Quadrants need even dimensions");

        let (h, w) = (self.nrows / 2, self.ncols / 2);

        Quadrants {
            top_left: self.block(0, 0, h, w),
            top_right: self.block(0, w, h, w),
            bottom_left: self.block(h, 0, h, w),
            bottom_right: self.block(h, w, h, w)
        }
    }

    /// Places `right` next to `self`. Both must have the same row count.
    pub fn hstack(&self, right: &Matrix<T>) -> Self {
        assert_eq!(self.nrows, right.nrows, "Horizontal stacking needs equal row counts");

        let mut data = Vec::with_capacity(self.data.len() + right.data.len());

        for (l, r) in self.rows().zip(right.rows()) {
            data.extend_from_slice(l);
            data.extend_from_slice(r);
        }

        Matrix { data, nrows: self.nrows, ncols: self.ncols + right.ncols }
    }

    /// Places `bottom` under `self`. Both must have the same column count.
    pub fn vstack(&self, bottom: &Matrix<T>) -> Self {
        assert_eq!(self.ncols, bottom.ncols, "Vertical stacking needs equal column counts");

        let mut data = self.data.clone();
        data.extend_from_slice(&bottom.data);

        Matrix { data, nrows: self.nrows + bottom.nrows, ncols: self.ncols }
    }

    /// Row by column product.
    pub fn naive_mul(&self, rhs: &Matrix<T>) -> Result<Self, DncError> {
        if self.ncols != rhs.nrows {
            return Err(DncError::dimension_mismatch(format!(
                "Cannot multiply a {}x{} matrix by a {}x{} matrix", self.nrows, self.ncols, rhs.nrows, rhs.ncols
            )));
        }

        Ok(Matrix::from_fn(self.nrows, rhs.ncols, |i, j| {
            (0..self.ncols).fold(T::zero(), |acc, k| acc.plus(&self.get(i, k).times(rhs.get(k, j))))
        }))
    }

    fn zip_with<F: Fn(&T, &T) -> T>(&self, other: &Matrix<T>, f: F) -> Self {
        assert!(
            self.nrows == other.nrows && self.ncols == other.ncols,
            "Element-wise operation between {}x{} and {}x{} matrices",
            self.nrows, self.ncols, other.nrows, other.ncols
        );

        Matrix {
            data: self.data.iter().zip(&other.data).map(|(a, b)| f(a, b)).collect(),
            nrows: self.nrows,
            ncols: self.ncols
        }
    }
}

impl Matrix<f64> {
    pub fn approx_eq(&self, other: &Matrix<f64>, tol: f64) -> bool {
        self.nrows == other.nrows && self.ncols == other.ncols &&
        self.data.iter().zip(&other.data).all(|(a, b)| (a - b).abs() <= tol * (1.0 + a.abs().max(b.abs())))
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.data.iter().map(|i| i.to_string()).collect::<Vec<_>>();
        let width = cells.iter().map(String::len).max().unwrap_or(0);

        for i in 0..self.nrows {
            let row = &cells[i * self.ncols..(i + 1) * self.ncols];
            writeln!(f, "[ {} ]", row.iter().map(|c| format!("{:>width$}", c, width = width)).collect::<Vec<_>>().join("  "))?;
        }

        Ok(())
    }
}

/*
    ╒══════════════════╕
    │ Block operations │
    ╘══════════════════╛
*/

/// The four equal blocks of a matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Quadrants<T: Scalar> {
    pub top_left: Matrix<T>,
    pub top_right: Matrix<T>,
    pub bottom_left: Matrix<T>,
    pub bottom_right: Matrix<T>
}

impl<T: Scalar> Quadrants<T> {
    pub fn join(&self) -> Matrix<T> {
        self.top_left.hstack(&self.top_right).vstack(&self.bottom_left.hstack(&self.bottom_right))
    }
}

// Element-wise operators. Shapes are checked with a panic since blocks are always built
// with matching sizes.

impl<T: Scalar> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.zip_with(rhs, T::plus)
    }
}

impl<T: Scalar> Add<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self + rhs
    }
}

impl<T: Scalar> Add<Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        &self + &rhs
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.zip_with(rhs, T::minus)
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self - rhs
    }
}

impl<T: Scalar> Sub<Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        &self - &rhs
    }
}

/*
                                                  ╒═════════╕
    ============================================= │  TESTS  │ =============================================
                                                  ╘═════════╛
*/

#[cfg(test)]
mod tests {
    use crate::errors::ErrorKind;
    use crate::matrix::*;

    fn sample() -> Matrix<i64> {
        Matrix::from_fn(4, 4, |i, j| (i * 4 + j) as i64)
    }

    #[test]
    fn construction() {
        let m = Matrix::from_rows(vec!(vec!(1, 2, 3), vec!(4, 5, 6))).unwrap();

        assert_eq!((m.nrows(), m.ncols()), (2, 3));
        assert_eq!(*m.get(1, 2), 6);
        assert_eq!(m.row(0), &[1, 2, 3]);
        assert_eq!(m, Matrix::from_vec(vec!(1, 2, 3, 4, 5, 6), 2, 3).unwrap());

        let err = Matrix::from_rows(vec!(vec!(1, 2), vec!(3))).unwrap_err();
        assert_eq!(err.kind, ErrorKind::DimensionMismatch);

        let err = Matrix::from_vec(vec!(1, 2, 3), 2, 2).unwrap_err();
        assert_eq!(err.kind, ErrorKind::DimensionMismatch);
    }

    #[test]
    fn quadrant_decomposition() {
        let q = sample().quadrants();

        assert_eq!(q.top_left, Matrix::from_rows(vec!(vec!(0, 1), vec!(4, 5))).unwrap());
        assert_eq!(q.top_right, Matrix::from_rows(vec!(vec!(2, 3), vec!(6, 7))).unwrap());
        assert_eq!(q.bottom_left, Matrix::from_rows(vec!(vec!(8, 9), vec!(12, 13))).unwrap());
        assert_eq!(q.bottom_right, Matrix::from_rows(vec!(vec!(10, 11), vec!(14, 15))).unwrap());

        assert_eq!(q.join(), sample());
    }

    #[test]
    fn stacking() {
        let a = Matrix::from_rows(vec!(vec!(1), vec!(2))).unwrap();
        let b = Matrix::from_rows(vec!(vec!(3, 4), vec!(5, 6))).unwrap();

        assert_eq!(a.hstack(&b), Matrix::from_rows(vec!(vec!(1, 3, 4), vec!(2, 5, 6))).unwrap());
        assert_eq!(b.vstack(&b).nrows(), 4);
        assert_eq!(b.vstack(&b).row(3), &[5, 6]);
    }

    #[test]
    fn element_wise_operators() {
        let a = sample();
        let b = Matrix::identity(4);

        let sum = &a + &b;
        assert_eq!(*sum.get(0, 0), 1);
        assert_eq!(*sum.get(0, 1), 1);
        assert_eq!(&sum - &b, a);
        assert_eq!(a.clone() + &b - &b, a);
        assert_eq!(a.clone() - a.clone(), Matrix::zeros(4, 4));
    }

    #[test]
    #[should_panic]
    fn element_wise_shape_mismatch() {
        let _ = &Matrix::<i32>::zeros(2, 2) + &Matrix::zeros(2, 3);
    }

    #[test]
    fn naive_product() {
        let a = Matrix::from_rows(vec!(vec!(1, 2), vec!(3, 4))).unwrap();
        let b = Matrix::from_rows(vec!(vec!(5, 6), vec!(7, 8))).unwrap();

        assert_eq!(a.naive_mul(&b).unwrap(), Matrix::from_rows(vec!(vec!(19, 22), vec!(43, 50))).unwrap());
        assert_eq!(a.naive_mul(&Matrix::identity(2)).unwrap(), a);

        let err = Matrix::<i32>::zeros(3, 4).naive_mul(&Matrix::zeros(5, 2)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::DimensionMismatch);
    }

    #[test]
    fn float_tolerance() {
        let a = Matrix::from_rows(vec!(vec!(0.1 + 0.2, 1.0))).unwrap();
        let b = Matrix::from_rows(vec!(vec!(0.3, 1.0))).unwrap();

        assert!(a.approx_eq(&b, 1e-12));
        assert!(!a.approx_eq(&Matrix::from_rows(vec!(vec!(0.31, 1.0))).unwrap(), 1e-12));
    }

    #[test]
    fn display() {
        let a = Matrix::from_rows(vec!(vec!(1, 20), vec!(300, 4))).unwrap();
        assert_eq!(a.to_string(), "[   1   20 ]\n[ 300    4 ]\n");
    }
}
