/*!
 * matlite is a lightweight two dimensional matrix container. It provides
 * construction from literal data, zero fill, uniform random fill or an
 * existing array, element/row/submatrix access via indexing and slicing,
 * transposition, deep copying, equality comparison and human readable
 * formatting — and deliberately nothing else. If you need arithmetic,
 * decompositions or broadcasting you want a full linear algebra library,
 * not this crate.
 *
 * Start with the [Matrix](./matrices/struct.Matrix.html) type.
 *
 * ```
 * use matlite::matrices::Matrix;
 *
 * let matrix = Matrix::from_rows(vec![
 *     vec![ 1.0, 2.0, 3.0 ],
 *     vec![ 4.0, 5.0, 6.0 ]]).unwrap();
 * assert_eq!(matrix[(0, 1)], 2.0);
 * assert_eq!(matrix[1], [ 4.0, 5.0, 6.0 ]);
 * assert_eq!(
 *     matrix.transpose(),
 *     Matrix::from_rows(vec![
 *         vec![ 1.0, 4.0 ],
 *         vec![ 2.0, 5.0 ],
 *         vec![ 3.0, 6.0 ]]).unwrap());
 * ```
 */

pub mod matrices;
