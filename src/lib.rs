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

//! Fixed-size dense matrices and vectors.
//!
//! ```
//! use fixmat::prelude::*;
//! use fixmat::{mat, M22, Vector};
//!
//! let m = M22::from_rows([[2.0, 0.0], [0.0, 2.0]]);
//! assert_eq!(m.det(), 4.0);
//! assert_eq!(m.inv(), mat::from_rows([[0.5, 0.0], [0.0, 0.5]]));
//! assert_eq!(&m * &Vector([1.0, 3.0]), Vector([2.0, 6.0]));
//! assert_eq!(m.l2_norm(), 8f64.sqrt());
//! ```
//!
//! This crate only re-exports the `fixmat-*` workspace crates; see
//! `fixmat-array-types` for the types and `fixmat-linalg` for everything
//! that needs elimination.

pub use fixmat_array_types::*;

/// Determinants, inverses and linear solves.
pub mod linalg {
    pub use fixmat_linalg::*;
}

pub use fixmat_linalg::{
    determinant, inverse, inverse_reporting, try_inverse, solve, solve_matrix,
    SingularMatrixError,
};

pub mod prelude {
    pub use fixmat_array_types::{HLift, HProject};
    pub use fixmat_linalg::prelude::*;
}
