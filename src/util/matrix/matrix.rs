/* ************************************************************************ **
** This file is part of orbis, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
**                                                                          **
** Be aware that not all of orbis is provided under this permissive         **
** license, and that the project as a whole is licensed under the GPL 3.0.  **
** ************************************************************************ */

use std::ops::{Index, IndexMut};

use orbis_array_types::{V3, M33};
use slice_of_array::prelude::*;

use crate::products::{self, Scalar};
use crate::{MatrixError, MatrixResult};

/// Owned matrix type with C layout.
// please resist the urge to go n-dimensional
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    // c-contiguous, row-contiguous data
    data: Vec<T>,
    // invariant: height * width == data.len()
    height: usize,
    width: usize,
}

impl<T> Matrix<T> {
    /// # Panics
    ///
    /// Panics if `data.len() != height * width`.
    pub fn from_row_major_data((height, width): (usize, usize), data: Vec<T>) -> Self
    {
        assert_eq!(data.len(), height * width);
        Matrix { data, height, width }
    }

    /// Build a matrix out of its rows, which must all have the same length.
    ///
    /// A matrix built from zero rows is `0 x 0`.
    pub fn try_from_rows<R>(rows: impl IntoIterator<Item=R>) -> MatrixResult<Self>
    where R: IntoIterator<Item=T>,
    {
        let mut data = vec![];
        let mut width = None;
        let mut height = 0;
        for (index, row) in rows.into_iter().enumerate() {
            let start = data.len();
            data.extend(row);
            let len = data.len() - start;
            match width {
                None => width = Some(len),
                Some(expected) if expected != len => {
                    return Err(MatrixError::RaggedRows { index, expected, actual: len });
                },
                Some(_) => {},
            }
            height += 1;
        }
        let width = width.unwrap_or(0);
        Ok(Matrix { data, height, width })
    }

    pub fn dims(&self) -> (usize, usize) { (self.height, self.width) }
    pub fn num_rows(&self) -> usize { self.height }
    pub fn num_cols(&self) -> usize { self.width }
    pub fn is_square(&self) -> bool { self.height == self.width }
    pub fn size(&self) -> usize { self.data.len() }

    pub fn row_major_data(&self) -> &[T] { &self.data }
    pub fn row_major_data_mut(&mut self) -> &mut [T] { &mut self.data }
    pub fn into_row_major_data(self) -> Vec<T> { self.data }

    /// Iterate over the rows as slices.
    ///
    /// There are always `num_rows()` of them, even when the rows are empty.
    pub fn rows(&self) -> impl ExactSizeIterator<Item=&[T]> + '_
    {
        let width = self.width;
        (0..self.height).map(move |r| &self.data[r * width..(r + 1) * width])
    }

    pub fn rows_mut(&mut self) -> impl ExactSizeIterator<Item=&mut [T]> + '_
    {
        let width = self.width;
        let mut rest = &mut self.data[..];
        (0..self.height).map(move |_| {
            let (row, tail) = std::mem::take(&mut rest).split_at_mut(width);
            rest = tail;
            row
        })
    }
}

impl<T: Clone> Matrix<T> {
    pub fn new_filled((height, width): (usize, usize), fill: &T) -> Self
    { Matrix {
        data: vec![fill.clone(); height * width],
        height,
        width,
    }}

    pub fn to_nested(&self) -> Vec<Vec<T>>
    { self.rows().map(|row| row.to_vec()).collect() }
}

impl<T: Scalar> Matrix<T> {
    pub fn zeros(dims: (usize, usize)) -> Self
    { Matrix::new_filled(dims, &T::zero()) }

    /// Compute `selfᵗ other`.
    ///
    /// The matrices must have the same number of rows.
    pub fn tmul(&self, other: &Matrix<T>) -> MatrixResult<Matrix<T>>
    {
        self.check_inner("m1ᵗ m2", other, self.height, other.height)?;
        products::mtxmg(&self.data, &other.data, self.width, self.height as isize, other.width)
    }

    /// Compute `self other`.
    pub fn matmul(&self, other: &Matrix<T>) -> MatrixResult<Matrix<T>>
    {
        self.check_inner("m1 m2", other, self.width, other.height)?;
        products::mxmg(&self.data, &other.data, self.height, self.width as isize, other.width)
    }

    /// Compute `self otherᵗ`.
    ///
    /// The matrices must have the same number of columns.
    pub fn mul_t(&self, other: &Matrix<T>) -> MatrixResult<Matrix<T>>
    {
        self.check_inner("m1 m2ᵗ", other, self.width, other.width)?;
        products::mxmtg(&self.data, &other.data, self.height, self.width as isize, other.height)
    }
}

impl<T: Copy> Matrix<T> {
    pub fn t(&self) -> MatrixResult<Matrix<T>>
    { products::xposeg(&self.data, self.height, self.width) }
}

impl<T> Matrix<T> {
    // dimensions are unsigned here, so the summed dimension also needs to fit in an isize
    fn check_inner<U>(&self, op: &'static str, other: &Matrix<U>, a: usize, b: usize) -> MatrixResult<()>
    {
        if a != b || a > isize::max_value() as usize {
            return Err(MatrixError::IncompatibleShapes { op, left: self.dims(), right: other.dims() });
        }
        Ok(())
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline(always)] // inlining should often remove bounds checks
    fn index(&self, (r, c): (usize, usize)) -> &Self::Output
    {
        assert!(c < self.width, "column index {} out of range for width {}", c, self.width);
        &self.data[r * self.width + c]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline(always)]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut Self::Output
    {
        assert!(c < self.width, "column index {} out of range for width {}", c, self.width);
        &mut self.data[r * self.width + c]
    }
}

impl<'a, T: Clone + 'a> From<&'a [[T; 3]]> for Matrix<T> {
    fn from(it: &'a [[T; 3]]) -> Self
    { Matrix {
        data: it.flat().to_vec(),
        height: it.len(),
        width: 3,
    }}
}

impl<'a, T: Clone + 'a> From<&'a [V3<T>]> for Matrix<T> {
    fn from(it: &'a [V3<T>]) -> Self
    { Matrix {
        data: it.iter().flat_map(|v| v.0.iter().cloned()).collect(),
        height: it.len(),
        width: 3,
    }}
}

impl<'a, T: Clone + 'a> From<&'a M33<T>> for Matrix<T> {
    fn from(m: &'a M33<T>) -> Self
    { Matrix::from(&m.0[..]) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_matrix(dims: (usize, usize)) -> Matrix {
        let mut rng = rand::thread_rng();
        let data = (0..dims.0 * dims.1).map(|_| rng.gen_range(-1.0, 1.0)).collect();
        Matrix::from_row_major_data(dims, data)
    }

    #[test]
    fn construction() {
        let m = Matrix::try_from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.dims(), (2, 3));
        assert_eq!(m[(1, 0)], 4);
        assert_eq!(m.to_nested(), vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(m.rows().count(), 2);

        let err = Matrix::try_from_rows(vec![vec![1, 2, 3], vec![4, 5]]).unwrap_err();
        assert_eq!(err, MatrixError::RaggedRows { index: 1, expected: 3, actual: 2 });

        let empty = Matrix::<f64>::try_from_rows(Vec::<Vec<f64>>::new()).unwrap();
        assert_eq!(empty.dims(), (0, 0));
        assert_eq!(empty.rows().count(), 0);
    }

    #[test]
    fn zero_width_rows() {
        let m = Matrix::<f64>::try_from_rows(vec![vec![], vec![]]).unwrap();
        assert_eq!(m.dims(), (2, 0));
        assert_eq!(m.rows().len(), 2);
        assert_eq!(m.to_nested(), vec![Vec::<f64>::new(), vec![]]);

        let mut m = Matrix::<f64>::zeros((3, 0));
        assert!(m.rows_mut().all(|row| row.is_empty()));
        assert_eq!(m.rows_mut().len(), 3);

        // a product whose result has no columns still has its rows
        let a = Matrix::<f64>::zeros((4, 2));
        let b = Matrix::<f64>::zeros((4, 0));
        assert_eq!(a.tmul(&b).unwrap().to_nested(), vec![Vec::<f64>::new(), vec![]]);
    }

    #[test]
    #[should_panic]
    fn column_out_of_range() {
        let m = Matrix::<f64>::zeros((3, 2));
        let _ = m[(0, 2)];
    }

    #[test]
    fn index_mut() {
        let mut m = Matrix::zeros((2, 2));
        m[(0, 1)] = 3.0;
        m.rows_mut().nth(1).unwrap()[0] = 4.0;
        assert_eq!(m.row_major_data(), &[0.0, 3.0, 4.0, 0.0][..]);
    }

    #[test]
    fn methods_match_transposes() {
        for _ in 0..20 {
            let a = random_matrix((4, 3));
            let b = random_matrix((4, 5));
            let c = random_matrix((5, 3));

            let a_t = a.t().unwrap();
            assert_eq!(a_t.dims(), (3, 4));
            assert_eq!(a_t[(2, 1)], a[(1, 2)]);

            let tmul = a.tmul(&b).unwrap();
            let matmul = a_t.matmul(&b).unwrap();
            assert_eq!(tmul.dims(), (3, 5));
            assert_close!(abs=1e-14, tmul.row_major_data(), matmul.row_major_data());

            let mul_t = b.mul_t(&c.t().unwrap()).unwrap();
            let matmul = b.matmul(&c).unwrap();
            assert_close!(abs=1e-14, mul_t.row_major_data(), matmul.row_major_data());
        }
    }

    #[test]
    fn mismatched_operands() {
        let a = Matrix::<f64>::zeros((2, 3));
        let b = Matrix::<f64>::zeros((4, 3));
        assert_eq!(
            a.tmul(&b).unwrap_err(),
            MatrixError::IncompatibleShapes { op: "m1ᵗ m2", left: (2, 3), right: (4, 3) },
        );
        assert!(a.matmul(&b).is_err());
        assert_eq!(a.mul_t(&b).unwrap().dims(), (2, 4));
    }

    #[test]
    fn conversions() {
        let vs = [V3([1.0, 2.0, 3.0]), V3([4.0, 5.0, 6.0])];
        let m = Matrix::from(&vs[..]);
        assert_eq!(m.dims(), (2, 3));
        assert_eq!(m[(1, 2)], 6.0);

        let arrays = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        assert_eq!(Matrix::from(&arrays[..]), m);

        let m33: M33 = orbis_array_types::M3([V3([1.0, 0.0, 0.0]), V3([0.0, 2.0, 0.0]), V3([0.0, 0.0, 3.0])]);
        let m = Matrix::from(&m33);
        assert_eq!(m.dims(), (3, 3));
        assert!(m.is_square());
        assert_eq!(m[(2, 2)], 3.0);
    }
}
