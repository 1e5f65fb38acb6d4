/*!
 * A generic 2 dimensional matrix container type
 */

use std::fmt;
use std::ops::Index;

use num_traits::{Num, Zero};

pub mod errors;
pub mod iterators;
pub mod slices;

use crate::matrices::errors::{Axis, IndexError, MatrixError, ShapeError};
use crate::matrices::iterators::{ColumnIterator, ColumnMajorIterator, RowIterator};
use crate::matrices::slices::Slice;

/**
 * A rectangular container of some type, stored in row major order as a
 * list of rows. A matrix always has at least one row and one column, and
 * every row has the same length; constructors validate their input and
 * refuse data that would break this.
 *
 * Most methods are defined for any type, element access and slicing
 * require [`Clone`](https://doc.rust-lang.org/std/clone/trait.Clone.html),
 * and the zero filled and random filled constructors require numerical
 * types.
 *
 * Each matrix exclusively owns its data. Access operations either borrow
 * (with the lifetime of the borrow tied to the matrix) or construct a new
 * independently owned matrix; no two matrices ever share a backing buffer.
 */
pub struct Matrix<T> {
    data: Vec<Vec<T>>,
}

/// Rows and columns are indexed from 0, the maximum lengths are usize due
/// to the internal storage being backed by nested Vecs
pub type Row = usize;
pub type Column = usize;

/**
 * Methods for matrices of any type.
 */
impl<T> Matrix<T> {
    /**
     * Creates a unit (1x1) matrix from some element
     */
    pub fn unit(value: T) -> Matrix<T> {
        Matrix {
            data: vec![vec![value]],
        }
    }

    /**
     * Creates a row vector (1xN) from a list. The list must not be empty.
     */
    pub fn row(values: Vec<T>) -> Result<Matrix<T>, ShapeError> {
        if values.is_empty() {
            return Err(ShapeError::Empty { axis: Axis::Column });
        }
        Ok(Matrix { data: vec![values] })
    }

    /**
     * Creates a column vector (Nx1) from a list. The list must not be empty.
     */
    pub fn column(values: Vec<T>) -> Result<Matrix<T>, ShapeError> {
        if values.is_empty() {
            return Err(ShapeError::Empty { axis: Axis::Row });
        }
        Ok(Matrix {
            data: values.into_iter().map(|value| vec![value]).collect(),
        })
    }

    /**
     * Creates a matrix from a nested list of values, each inner vector
     * being a row, and hence the outer vector containing all rows in
     * sequence, the same way as when writing matrices in mathematics.
     *
     * The input is taken by value, so the matrix owns its data outright
     * from the moment of construction and no caller can alias it.
     *
     * Example of a 2 x 3 matrix in both notations:
     * ```ignore
     *   [
     *      1, 2, 4
     *      8, 9, 3
     *   ]
     * ```
     * ```
     * use matlite::matrices::Matrix;
     * let matrix = Matrix::from_rows(vec![
     *     vec![ 1.0, 2.0, 4.0 ],
     *     vec![ 8.0, 9.0, 3.0 ]]).unwrap();
     * assert_eq!((2, 3), matrix.size());
     * ```
     *
     * Fails with a [ShapeError] if there are no rows, the first row is
     * empty, or any row has a different length to the first.
     */
    pub fn from_rows(values: Vec<Vec<T>>) -> Result<Matrix<T>, ShapeError> {
        if values.is_empty() {
            return Err(ShapeError::Empty { axis: Axis::Row });
        }
        let columns = values[0].len();
        if columns == 0 {
            return Err(ShapeError::Empty { axis: Axis::Column });
        }
        for (row, elements) in values.iter().enumerate() {
            if elements.len() != columns {
                return Err(ShapeError::Ragged {
                    row,
                    expected: columns,
                    found: elements.len(),
                });
            }
        }
        Ok(Matrix { data: values })
    }

    /**
     * Creates a matrix from a fixed size 2 dimensional array, each inner
     * array being a row. The array form is rectangular by construction, so
     * the only way this can fail is a zero length in either dimension.
     * Each source row is materialized as an independently owned Vec.
     *
     * ```
     * use matlite::matrices::Matrix;
     * let matrix = Matrix::from_array([
     *     [ 1.0, 2.0, 3.0 ],
     *     [ 4.0, 5.0, 6.0 ]]).unwrap();
     * assert_eq!((2, 3), matrix.size());
     * ```
     */
    pub fn from_array<const R: usize, const C: usize>(
        values: [[T; C]; R],
    ) -> Result<Matrix<T>, ShapeError> {
        Matrix::<T>::check_dimensions(R, C)?;
        Ok(Matrix {
            data: values
                .into_iter()
                .map(|row| row.into_iter().collect())
                .collect(),
        })
    }

    fn check_dimensions(rows: Row, columns: Column) -> Result<(), ShapeError> {
        if rows == 0 {
            return Err(ShapeError::Empty { axis: Axis::Row });
        }
        if columns == 0 {
            return Err(ShapeError::Empty { axis: Axis::Column });
        }
        Ok(())
    }

    /**
     * Returns the dimensionality of this matrix in Row, Column format
     */
    pub fn size(&self) -> (Row, Column) {
        (self.data.len(), self.data[0].len())
    }

    /**
     * Gets the number of rows in this matrix.
     */
    pub fn rows(&self) -> Row {
        self.data.len()
    }

    /**
     * Gets the number of columns in this matrix.
     */
    pub fn columns(&self) -> Column {
        self.data[0].len()
    }

    /**
     * Gets a reference to the value at this row and column. Rows and
     * Columns are 0 indexed. Fails with an [IndexError] naming the axis
     * and bound violated if either index is out of range.
     */
    pub fn get_reference(&self, row: Row, column: Column) -> Result<&T, IndexError> {
        if row >= self.rows() {
            return Err(IndexError {
                axis: Axis::Row,
                index: row,
                bound: self.rows(),
            });
        }
        if column >= self.columns() {
            return Err(IndexError {
                axis: Axis::Column,
                index: column,
                bound: self.columns(),
            });
        }
        Ok(&self.data[row][column])
    }

    /**
     * Gets one row of this matrix as a borrowed slice of elements in
     * column order. The borrow is tied to this matrix, so the row stays
     * valid exactly as long as the compiler can prove the matrix is not
     * mutated or dropped; no copy is made.
     */
    pub fn row_reference(&self, row: Row) -> Result<&[T], IndexError> {
        if row >= self.rows() {
            return Err(IndexError {
                axis: Axis::Row,
                index: row,
                bound: self.rows(),
            });
        }
        Ok(&self.data[row])
    }

    /**
     * Replaces one row of this matrix wholesale with the provided values.
     *
     * The replacement must have exactly as many elements as this matrix
     * has columns, or a [ShapeError](errors::ShapeError) is returned; an
     * out of range row index is an [IndexError](errors::IndexError).
     * Either way a failed replacement leaves the matrix unmodified.
     *
     * ```
     * use matlite::matrices::Matrix;
     * let mut matrix = Matrix::from_rows(vec![
     *     vec![ 1.0, 2.0 ],
     *     vec![ 3.0, 4.0 ]]).unwrap();
     * matrix.set_row(1, vec![ 5.0, 6.0 ]).unwrap();
     * assert_eq!(matrix, Matrix::from_rows(vec![
     *     vec![ 1.0, 2.0 ],
     *     vec![ 5.0, 6.0 ]]).unwrap());
     * assert!(matrix.set_row(1, vec![ 7.0 ]).is_err());
     * assert_eq!(matrix[1], [ 5.0, 6.0 ]);
     * ```
     */
    pub fn set_row(&mut self, row: Row, values: Vec<T>) -> Result<(), MatrixError> {
        if row >= self.rows() {
            return Err(IndexError {
                axis: Axis::Row,
                index: row,
                bound: self.rows(),
            }
            .into());
        }
        if values.len() != self.columns() {
            return Err(ShapeError::RowLength {
                expected: self.columns(),
                found: values.len(),
            }
            .into());
        }
        self.data[row] = values;
        Ok(())
    }
}

/**
 * Methods for matrices with types that can be copied, but still not
 * neccessarily numerical.
 */
impl<T: Clone> Matrix<T> {
    /**
     * Creates a matrix of the provided size with all elements initialised
     * to the provided value. Both dimensions must be at least 1.
     */
    pub fn filled(value: T, rows: Row, columns: Column) -> Result<Matrix<T>, ShapeError> {
        Matrix::<T>::check_dimensions(rows, columns)?;
        Ok(Matrix {
            data: vec![vec![value; columns]; rows],
        })
    }

    /**
     * Gets a copy of the value at this row and column. Rows and Columns
     * are 0 indexed. Fails with an [IndexError] naming the axis and bound
     * violated if either index is out of range.
     *
     * ```
     * use matlite::matrices::Matrix;
     * let matrix = Matrix::from_rows(vec![
     *     vec![ 1.0, 2.0, 3.0 ],
     *     vec![ 4.0, 5.0, 6.0 ]]).unwrap();
     * assert_eq!(matrix.get(0, 1), Ok(2.0));
     * assert!(matrix.get(0, 3).is_err());
     * ```
     */
    pub fn get(&self, row: Row, column: Column) -> Result<T, IndexError> {
        self.get_reference(row, column).map(|value| value.clone())
    }

    /**
     * Selects part of this matrix with a selector for each axis, yielding
     * a new independently owned matrix holding copies of the selected
     * elements.
     *
     * Each selector is a single index, a `start..end` range, or `..` for
     * the whole axis, and the shape of the result follows from the kinds
     * of the two selectors alone:
     *
     * | rows | columns | result |
     * |---|---|---|
     * | single | single | 1x1 matrix |
     * | single | range | 1xk row |
     * | range | single | kx1 column |
     * | range | range | submatrix |
     *
     * To extract a scalar instead of a 1x1 matrix use [get](Matrix::get).
     *
     * A selector reaching out of range fails with an
     * [IndexError](errors::IndexError) naming the axis and bound violated;
     * ranges are never silently clipped. A range selecting nothing fails
     * with a [ShapeError](errors::ShapeError) because a matrix cannot be
     * empty.
     *
     * ```
     * use matlite::matrices::Matrix;
     * let matrix = Matrix::from_rows(vec![
     *     vec![ 1.0, 2.0, 3.0 ],
     *     vec![ 4.0, 5.0, 6.0 ]]).unwrap();
     * assert_eq!(
     *     matrix.slice(0..2, 1..3).unwrap(),
     *     Matrix::from_rows(vec![
     *         vec![ 2.0, 3.0 ],
     *         vec![ 5.0, 6.0 ]]).unwrap());
     * assert_eq!(
     *     matrix.slice(1, 0..2).unwrap(),
     *     Matrix::row(vec![ 4.0, 5.0 ]).unwrap());
     * assert_eq!(
     *     matrix.slice(.., 2).unwrap(),
     *     Matrix::column(vec![ 3.0, 6.0 ]).unwrap());
     * assert_eq!(matrix.slice(0, 0).unwrap(), Matrix::unit(1.0));
     * ```
     */
    pub fn slice<R, C>(&self, rows: R, columns: C) -> Result<Matrix<T>, MatrixError>
    where
        R: Into<Slice>,
        C: Into<Slice>,
    {
        let row_range = rows.into().resolve(Axis::Row, self.rows())?;
        let column_range = columns.into().resolve(Axis::Column, self.columns())?;
        let mut selected = Vec::with_capacity(row_range.len());
        for row in row_range {
            let mut elements = Vec::with_capacity(column_range.len());
            for column in column_range.clone() {
                elements.push(self.data[row][column].clone());
            }
            selected.push(elements);
        }
        Ok(Matrix { data: selected })
    }

    /**
     * Computes and returns the transpose of this matrix
     *
     * ```
     * use matlite::matrices::Matrix;
     * let x = Matrix::from_rows(vec![
     *    vec![ 1.0, 2.0 ],
     *    vec![ 3.0, 4.0 ]]).unwrap();
     * let y = Matrix::from_rows(vec![
     *    vec![ 1.0, 3.0 ],
     *    vec![ 2.0, 4.0 ]]).unwrap();
     * assert_eq!(x.transpose(), y);
     * ```
     */
    pub fn transpose(&self) -> Matrix<T> {
        let mut rows = Vec::with_capacity(self.columns());
        for column in 0..self.columns() {
            rows.push(self.column_iter(column).collect());
        }
        Matrix { data: rows }
    }

    /**
     * Returns an iterator over a row vector in this matrix. Rows are 0
     * indexed.
     *
     * If you have a matrix such as:
     * ```ignore
     * [
     *    1, 2, 3
     *    4, 5, 6
     * ]
     * ```
     * then a row of 0 or 1 will yield [1, 2, 3] and [4, 5, 6]
     * respectively.
     */
    pub fn row_iter(&self, row: Row) -> RowIterator<'_, T> {
        RowIterator::new(self, row)
    }

    /**
     * Returns an iterator over a column vector in this matrix. Columns are
     * 0 indexed.
     *
     * If you have a matrix such as:
     * ```ignore
     * [
     *    1, 2, 3
     *    4, 5, 6
     * ]
     * ```
     * then a column of 0, 1, and 2 will yield [1, 4], [2, 5] and [3, 6]
     * respectively.
     */
    pub fn column_iter(&self, column: Column) -> ColumnIterator<'_, T> {
        ColumnIterator::new(self, column)
    }

    /**
     * Returns a column major iterator over all values in this matrix,
     * proceeding through each column in order.
     */
    pub fn column_major_iter(&self) -> ColumnMajorIterator<'_, T> {
        ColumnMajorIterator::new(self)
    }
}

/**
 * Methods for matrices with numerical types that have a zero value, such
 * as f32 or f64.
 */
impl<T: Zero + Clone> Matrix<T> {
    /**
     * Creates a matrix of the provided size with every element zero. Both
     * dimensions must be at least 1 or a [ShapeError] is returned.
     *
     * ```
     * use matlite::matrices::Matrix;
     * let matrix: Matrix<f64> = Matrix::zeros(2, 3).unwrap();
     * assert_eq!((2, 3), matrix.size());
     * assert_eq!(matrix.get(1, 2), Ok(0.0));
     * assert!(Matrix::<f64>::zeros(0, 3).is_err());
     * ```
     */
    pub fn zeros(rows: Row, columns: Column) -> Result<Matrix<T>, ShapeError> {
        Matrix::filled(T::zero(), rows, columns)
    }
}

/**
 * Methods for matrices with numerical types, such as f32 or f64.
 */
impl<T: Num + Clone> Matrix<T> {
    /**
     * Creates a matrix of the provided size with every element drawn
     * independently from the provided source of randomness, scaled into
     * the requested interval.
     *
     * The source must yield uniformly distributed values in the range
     * [0, 1); each element is then computed as `min + u * (max - min)`,
     * placing it in [min, max). A source that includes 1 widens this to
     * the closed interval. As all randomness is supplied by the caller,
     * this method is deterministic and will always produce the same
     * matrix given the same sequence of source values; seeding policy
     * belongs entirely to the caller.
     *
     * Both dimensions must be at least 1 or a [ShapeError] is returned.
     *
     * ```
     * use matlite::matrices::Matrix;
     * let mut state = 0;
     * let matrix = Matrix::random(2, 2, 1.0, 11.0, || {
     *     state += 1;
     *     (state as f64) / 10.0
     * }).unwrap();
     * assert_eq!(matrix, Matrix::from_rows(vec![
     *     vec![ 2.0, 3.0 ],
     *     vec![ 4.0, 5.0 ]]).unwrap());
     * ```
     */
    pub fn random<F>(
        rows: Row,
        columns: Column,
        min: T,
        max: T,
        mut source: F,
    ) -> Result<Matrix<T>, ShapeError>
    where
        F: FnMut() -> T,
    {
        Matrix::<T>::check_dimensions(rows, columns)?;
        let mut data = Vec::with_capacity(rows);
        for _ in 0..rows {
            let mut elements = Vec::with_capacity(columns);
            for _ in 0..columns {
                let uniform = source();
                elements.push(min.clone() + uniform * (max.clone() - min.clone()));
            }
            data.push(elements);
        }
        Ok(Matrix { data })
    }
}

/**
 * Any matrix of a Cloneable type implements Clone as a deep copy: the
 * clone owns an independent buffer with the same values, so mutating
 * either matrix never affects the other.
 */
impl<T: Clone> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Matrix {
            data: self.data.clone(),
        }
    }
}

/**
 * PartialEq is implemented as two matrices are equal if and only if all
 * their elements are equal and they have the same size. Elements compare
 * with `==`, so for floating point types this is exact equality with no
 * tolerance; callers needing approximate comparison must implement that
 * separately. The comparison itself never fails.
 */
impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.rows() != other.rows() {
            return false;
        }
        if self.columns() != other.columns() {
            return false;
        }
        // elementwise check, true only if every pair of elements matches
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(x, y)| x.iter().zip(y.iter()).all(|(a, b)| a == b))
    }
}

/**
 * Selects a whole row by index, as `matrix[row]`, yielding the row as a
 * borrowed slice of elements.
 *
 * # Panics
 *
 * Panics if the row is out of range; for a fallible version see
 * [row_reference](Matrix::row_reference).
 */
impl<T> Index<Row> for Matrix<T> {
    type Output = [T];

    fn index(&self, row: Row) -> &Self::Output {
        match self.row_reference(row) {
            Ok(values) => values,
            Err(error) => panic!("{}", error),
        }
    }
}

/**
 * Selects a single element by row and column pair, as
 * `matrix[(row, column)]`.
 *
 * # Panics
 *
 * Panics if either index is out of range; for fallible versions see
 * [get](Matrix::get) and [get_reference](Matrix::get_reference).
 */
impl<T> Index<(Row, Column)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, column): (Row, Column)) -> &Self::Output {
        match self.get_reference(row, column) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

/**
 * A human oriented rendering of the full matrix contents: comma separated
 * bracketed rows, one row per line, with continuation rows indented so
 * the columns line up.
 *
 * ```
 * use matlite::matrices::Matrix;
 * let matrix = Matrix::from_rows(vec![
 *     vec![ 1.0, 2.5, 3.0 ],
 *     vec![ 4.0, 5.0, 6.0 ]]).unwrap();
 * assert_eq!(matrix.to_string(), "[[1, 2.5, 3]\n [4, 5, 6]]");
 * ```
 */
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (row, elements) in self.data.iter().enumerate() {
            if row > 0 {
                write!(f, "\n ")?;
            }
            write!(f, "[")?;
            for (column, value) in elements.iter().enumerate() {
                if column > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

/**
 * The debug rendering shows the full row contents on a single line as
 * `Matrix([[1.0, 2.0], [3.0, 4.0]])`.
 */
impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix(")?;
        f.debug_list().entries(self.data.iter()).finish()?;
        write!(f, ")")
    }
}

/**
 * A nested list of rows can be fallibly converted into a matrix with the
 * same validation as [from_rows](Matrix::from_rows).
 */
impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = ShapeError;

    fn try_from(values: Vec<Vec<T>>) -> Result<Matrix<T>, ShapeError> {
        Matrix::from_rows(values)
    }
}

/**
 * A matrix can be consumed back into the nested list of rows it stores.
 */
impl<T> From<Matrix<T>> for Vec<Vec<T>> {
    fn from(matrix: Matrix<T>) -> Vec<Vec<T>> {
        matrix.data
    }
}

/**
 * A matrix serializes as its nested list of rows.
 */
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Matrix<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.data, serializer)
    }
}

/**
 * Deserialization reads a nested list of rows and validates it exactly as
 * [from_rows](Matrix::from_rows) does, so ragged or empty payloads fail
 * to deserialize rather than producing an invalid matrix.
 */
#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Matrix<T> {
    fn deserialize<D>(deserializer: D) -> Result<Matrix<T>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data: Vec<Vec<T>> = serde::Deserialize::deserialize(deserializer)?;
        Matrix::from_rows(data).map_err(|error| <D::Error as serde::de::Error>::custom(error))
    }
}
