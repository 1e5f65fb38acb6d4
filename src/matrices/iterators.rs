/*!
 * Iterators over parts of a Matrix
 *
 * Each iterator copies the elements it yields and borrows the matrix it
 * was created from, so the matrix cannot be modified while iteration is
 * in progress. Constructing an iterator for a row or column that does not
 * exist does not fail immediately; the first call to `next` panics with
 * the out of bounds index.
 */

use std::ops::Range;

use crate::matrices::{Column, Matrix, Row};

/**
 * An iterator over the elements of one row in a matrix, in column order.
 *
 * For the matrix:
 * ```ignore
 * [
 *   1, 2
 *   3, 4
 * ]
 * ```
 * a row of 0 or 1 yields 1, 2 or 3, 4 respectively.
 */
pub struct RowIterator<'a, T: Clone> {
    matrix: &'a Matrix<T>,
    row: Row,
    columns: Range<Column>,
}

impl<'a, T: Clone> RowIterator<'a, T> {
    /**
     * Constructs a row iterator over this matrix.
     */
    pub fn new(matrix: &Matrix<T>, row: Row) -> RowIterator<'_, T> {
        RowIterator {
            matrix,
            row,
            columns: 0..matrix.columns(),
        }
    }
}

impl<'a, T: Clone> Iterator for RowIterator<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let column = self.columns.next()?;
        Some(self.matrix[(self.row, column)].clone())
    }
}

/**
 * An iterator over the elements of one column in a matrix, in row order.
 *
 * For the matrix:
 * ```ignore
 * [
 *   1, 2
 *   3, 4
 * ]
 * ```
 * a column of 0 or 1 yields 1, 3 or 2, 4 respectively.
 */
pub struct ColumnIterator<'a, T: Clone> {
    matrix: &'a Matrix<T>,
    column: Column,
    rows: Range<Row>,
}

impl<'a, T: Clone> ColumnIterator<'a, T> {
    /**
     * Constructs a column iterator over this matrix.
     */
    pub fn new(matrix: &Matrix<T>, column: Column) -> ColumnIterator<'_, T> {
        ColumnIterator {
            matrix,
            column,
            rows: 0..matrix.rows(),
        }
    }
}

impl<'a, T: Clone> Iterator for ColumnIterator<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        Some(self.matrix[(row, self.column)].clone())
    }
}

/**
 * A column major iterator over all elements in a matrix, proceeding down
 * each column in turn.
 *
 * For the matrix:
 * ```ignore
 * [
 *   1, 2
 *   3, 4
 * ]
 * ```
 * the elements are yielded as 1, 3, 2, 4.
 */
pub struct ColumnMajorIterator<'a, T: Clone> {
    matrix: &'a Matrix<T>,
    row: Row,
    column: Column,
}

impl<'a, T: Clone> ColumnMajorIterator<'a, T> {
    /**
     * Constructs a column major iterator over this matrix.
     */
    pub fn new(matrix: &Matrix<T>) -> ColumnMajorIterator<'_, T> {
        ColumnMajorIterator {
            matrix,
            row: 0,
            column: 0,
        }
    }
}

impl<'a, T: Clone> Iterator for ColumnMajorIterator<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.column == self.matrix.columns() {
            return None;
        }
        let value = self.matrix[(self.row, self.column)].clone();
        self.row += 1;
        if self.row == self.matrix.rows() {
            // reached the end of a column, continue from the top of the next
            self.row = 0;
            self.column += 1;
        }
        Some(value)
    }
}
