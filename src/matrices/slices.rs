/*!
 * Axis selectors for slicing matrices
 *
 * A [Slice] picks out either a single index or a contiguous range of
 * indexes along one axis of a matrix. Applying one selector to the row
 * axis and one to the column axis describes any scalar, row, column or
 * submatrix selection, and the kind of result is determined entirely by
 * which variants were used, never by inspecting the selected data.
 */

use std::ops::{Range, RangeFull};

use crate::matrices::errors::{Axis, IndexError, MatrixError, ShapeError};

/**
 * A selection along one axis of a matrix.
 *
 * Selectors are unsigned, so negative indexing does not arise; all indexes
 * count from the start of the axis.
 */
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Slice {
    /**
     * A single index, selecting an extent of exactly 1 along its axis.
     */
    Single(usize),
    /**
     * A range of indexes, start inclusive to end exclusive, selecting an
     * extent of `end - start` along its axis.
     */
    Range(Range<usize>),
    /**
     * Every index along the axis.
     */
    Full,
}

/** A single index selects just that row or column. */
impl From<usize> for Slice {
    fn from(index: usize) -> Slice {
        Slice::Single(index)
    }
}

/** A start..end range selects that span of rows or columns. */
impl From<Range<usize>> for Slice {
    fn from(range: Range<usize>) -> Slice {
        Slice::Range(range)
    }
}

/** The .. range selects the entire axis. */
impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Slice {
        Slice::Full
    }
}

impl Slice {
    /**
     * Resolves this selector against the length of the axis it is applied
     * to, yielding the concrete range of indexes selected.
     *
     * A selector that reaches past the end of the axis is an
     * [IndexError](crate::matrices::errors::IndexError), reporting the
     * largest index it asked for. A range that selects nothing is a
     * [ShapeError](crate::matrices::errors::ShapeError), because no valid
     * matrix can be built from an empty selection. Selectors are never
     * silently clipped to fit.
     */
    pub(crate) fn resolve(self, axis: Axis, bound: usize) -> Result<Range<usize>, MatrixError> {
        match self {
            Slice::Single(index) => {
                if index >= bound {
                    return Err(IndexError { axis, index, bound }.into());
                }
                Ok(index..(index + 1))
            }
            Slice::Range(range) => {
                if range.start >= range.end {
                    return Err(ShapeError::Empty { axis }.into());
                }
                if range.end > bound {
                    return Err(IndexError {
                        axis,
                        index: range.end - 1,
                        bound,
                    }
                    .into());
                }
                Ok(range)
            }
            // a matrix always has at least one row and one column, so the
            // full axis is never an empty selection
            Slice::Full => Ok(0..bound),
        }
    }
}

#[test]
fn test_resolving_selectors() {
    assert_eq!(Slice::Single(2).resolve(Axis::Row, 4), Ok(2..3));
    assert_eq!(Slice::Range(1..3).resolve(Axis::Column, 3), Ok(1..3));
    assert_eq!(Slice::Full.resolve(Axis::Row, 2), Ok(0..2));
    assert_eq!(
        Slice::Single(4).resolve(Axis::Row, 4),
        Err(IndexError {
            axis: Axis::Row,
            index: 4,
            bound: 4,
        }
        .into())
    );
    assert_eq!(
        Slice::Range(1..5).resolve(Axis::Column, 3),
        Err(IndexError {
            axis: Axis::Column,
            index: 4,
            bound: 3,
        }
        .into())
    );
    assert_eq!(
        Slice::Range(2..2).resolve(Axis::Row, 4),
        Err(ShapeError::Empty { axis: Axis::Row }.into())
    );
    assert_eq!(
        Slice::Range(3..1).resolve(Axis::Row, 4),
        Err(ShapeError::Empty { axis: Axis::Row }.into())
    );
}

#[test]
fn test_selector_conversions() {
    assert_eq!(Slice::from(2), Slice::Single(2));
    assert_eq!(Slice::from(0..3), Slice::Range(0..3));
    assert_eq!(Slice::from(..), Slice::Full);
}
