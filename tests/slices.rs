extern crate matlite;

#[cfg(test)]
mod tests {
    use matlite::matrices::Matrix;
    use matlite::matrices::errors::{Axis, IndexError, MatrixError, ShapeError};
    use matlite::matrices::slices::Slice;

    #[test]
    fn test_slicing_submatrix() {
        let matrix = Matrix::from_rows(vec![
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0, 1.0, 2.0, 3.0],
        ])
        .unwrap();
        assert_eq!(
            matrix.slice(0..2, 3..5).unwrap(),
            Matrix::from_rows(vec![vec![4.0, 5.0], vec![1.0, 2.0]]).unwrap()
        );
    }

    #[test]
    fn test_slicing_single_row_to_row_vector() {
        let matrix = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        // a single row index with a column range stays a 1xk matrix
        assert_eq!(
            matrix.slice(1, 0..2).unwrap(),
            Matrix::row(vec![4.0, 5.0]).unwrap()
        );
        assert_eq!(
            matrix.slice(0, ..).unwrap(),
            Matrix::row(vec![1.0, 2.0, 3.0]).unwrap()
        );
    }

    #[test]
    fn test_slicing_single_column_to_column_vector() {
        let matrix = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(
            matrix.slice(.., 1).unwrap(),
            Matrix::column(vec![2.0, 5.0]).unwrap()
        );
        assert_eq!(
            matrix.slice(0..2, 0).unwrap(),
            Matrix::column(vec![1.0, 4.0]).unwrap()
        );
    }

    #[test]
    fn test_slicing_single_element() {
        let matrix = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(matrix.slice(1, 0).unwrap(), Matrix::unit(3.0));
    }

    #[test]
    fn test_slicing_everything() {
        let matrix = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(matrix.slice(.., ..).unwrap(), matrix);
    }

    #[test]
    fn test_slicing_with_explicit_selectors() {
        let matrix = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(
            matrix.slice(Slice::Single(0), Slice::Range(1..3)).unwrap(),
            Matrix::row(vec![2.0, 3.0]).unwrap()
        );
        assert_eq!(
            matrix.slice(Slice::Full, Slice::Single(0)).unwrap(),
            Matrix::column(vec![1.0, 4.0]).unwrap()
        );
    }

    #[test]
    fn test_slicing_out_of_range() {
        let matrix = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(
            matrix.slice(2, ..),
            Err(MatrixError::Index(IndexError {
                axis: Axis::Row,
                index: 2,
                bound: 2,
            }))
        );
        // ranges are not clipped to fit, they fail
        assert_eq!(
            matrix.slice(.., 1..5),
            Err(MatrixError::Index(IndexError {
                axis: Axis::Column,
                index: 4,
                bound: 3,
            }))
        );
    }

    #[test]
    fn test_slicing_nothing() {
        let matrix = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(
            matrix.slice(1..1, ..),
            Err(MatrixError::Shape(ShapeError::Empty { axis: Axis::Row }))
        );
        assert_eq!(
            matrix.slice(.., 2..1),
            Err(MatrixError::Shape(ShapeError::Empty {
                axis: Axis::Column,
            }))
        );
    }

    #[test]
    fn test_slices_are_independent_copies() {
        let mut matrix =
            Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let submatrix = matrix.slice(.., 0..2).unwrap();
        matrix.set_row(0, vec![9.0, 9.0, 9.0]).unwrap();
        assert_eq!(
            submatrix,
            Matrix::from_rows(vec![vec![1.0, 2.0], vec![4.0, 5.0]]).unwrap()
        );
    }
}
