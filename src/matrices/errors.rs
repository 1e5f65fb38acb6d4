/*!
 * Error types reported by matrix construction and access
 */

use std::error::Error;
use std::fmt;

/**
 * The axis of a matrix an index or selection applies to, naming which
 * bound a failed operation violated.
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/**
 * An error indicating input data that cannot form a valid matrix, or a row
 * replacement that does not fit the matrix it was given to.
 *
 * A matrix must always have at least one row and one column, and every row
 * must have the same length.
 */
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ShapeError {
    /**
     * The input had no data along this axis: no rows at all, an empty
     * first row, a requested dimension of zero, or a selection that
     * selected nothing.
     */
    Empty { axis: Axis },
    /**
     * A row had a different length to the first row.
     */
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /**
     * A replacement row did not match the number of columns in the matrix.
     */
    RowLength { expected: usize, found: usize },
}

impl Error for ShapeError {}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::Empty { axis: Axis::Row } => {
                write!(f, "Matrix must have at least one row")
            }
            ShapeError::Empty {
                axis: Axis::Column,
            } => {
                write!(f, "Matrix must have at least one column")
            }
            ShapeError::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} has {} elements but the first row has {}",
                row, found, expected
            ),
            ShapeError::RowLength { expected, found } => write!(
                f,
                "Replacement row has {} elements but the matrix has {} columns",
                found, expected
            ),
        }
    }
}

/**
 * An error indicating an index outside the valid bound of an axis.
 *
 * Valid indexes on an axis run from `0` inclusive to `bound` exclusive,
 * where `bound` is the number of rows or columns of the matrix accessed.
 */
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IndexError {
    pub axis: Axis,
    pub index: usize,
    pub bound: usize,
}

impl Error for IndexError {}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} index {} out of bounds for a matrix with {} {}s",
            self.axis, self.index, self.bound, self.axis
        )
    }
}

/**
 * Either kind of failure for operations that validate both an index and a
 * shape, such as slicing and row replacement.
 */
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MatrixError {
    Shape(ShapeError),
    Index(IndexError),
}

impl From<ShapeError> for MatrixError {
    fn from(error: ShapeError) -> MatrixError {
        MatrixError::Shape(error)
    }
}

impl From<IndexError> for MatrixError {
    fn from(error: IndexError) -> MatrixError {
        MatrixError::Index(error)
    }
}

impl Error for MatrixError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MatrixError::Shape(error) => Some(error),
            MatrixError::Index(error) => Some(error),
        }
    }
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::Shape(error) => fmt::Display::fmt(error, f),
            MatrixError::Index(error) => fmt::Display::fmt(error, f),
        }
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(
        IndexError {
            axis: Axis::Row,
            index: 3,
            bound: 2,
        }
        .to_string(),
        "row index 3 out of bounds for a matrix with 2 rows"
    );
    assert_eq!(
        ShapeError::Ragged {
            row: 1,
            expected: 2,
            found: 1,
        }
        .to_string(),
        "Row 1 has 1 elements but the first row has 2"
    );
}
