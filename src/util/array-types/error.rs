/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
**                                                                          **
** Be aware that not all of fixmat is provided under this permissive        **
** license, and that the project as a whole is licensed under the GPL 3.0.  **
** ************************************************************************ */

/// Runtime-sized data did not fit a fixed-size matrix or vector.
///
/// Shapes are normally checked by the type system; this only comes up at
/// the boundary with slices, `Vec`s and deserialized data, which are never
/// truncated or padded to fit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("a {rows}x{cols} matrix needs {} elements, got {actual}", .rows * .cols)]
    ElementCount { rows: usize, cols: usize, actual: usize },

    #[error("a {rows}x{cols} matrix needs {rows} rows, got {actual}")]
    RowCount { rows: usize, cols: usize, actual: usize },

    #[error("row {row} of a {rows}x{cols} matrix has {actual} elements")]
    RowLength { row: usize, rows: usize, cols: usize, actual: usize },

    #[error("expected a vector of length {expected}, got {actual}")]
    VectorLength { expected: usize, actual: usize },
}
