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
//! The physical order of matrix storage is a type parameter
//! ([`RowMajor`] or [`ColMajor`]), defaulting to [`DefaultLayout`], which is
//! chosen by the `column-major` cargo feature.  Element access by `(row, col)`
//! never depends on it.

#[cfg(test)]
#[macro_use]
extern crate fixmat_assert_close;

#[macro_use] mod macros;
mod traits;
mod error;
mod layout;

pub use self::types::*;
mod types;

mod ops;
mod products;
mod norms;
mod homogeneous;

#[cfg(feature = "serde")]
mod serde_impls;

// Expose neatly-named modules, but let the .rs files have names that are close alphabetically.
#[doc(hidden)] pub mod methods_v;
#[doc(hidden)] pub mod methods_m;
pub use self::methods_v as vee;
pub use self::methods_m as mat;

pub use self::methods_v::dot;

pub use self::traits::{Semiring, Ring, Field};
pub use self::error::ShapeError;
pub use self::layout::{Layout, RowMajor, ColMajor, DefaultLayout, Table};
pub use self::homogeneous::{HLift, HProject};
