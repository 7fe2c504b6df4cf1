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

// Matrices are written as a list of rows no matter the layout, so that data
// written under one layout reads back the same under the other.

use serde::{Serialize, Deserialize, ser, de};

use crate::layout::Layout;

use super::types::*;

impl<const N: usize, X: Serialize> Serialize for Vector<N, X> {
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>
    { serializer.collect_seq(self.iter()) }
}

impl<'de, const N: usize, X: Deserialize<'de>> Deserialize<'de> for Vector<N, X> {
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<X>::deserialize(deserializer)?;
        Vector::try_from(raw).map_err(de::Error::custom)
    }
}

impl<const R: usize, const C: usize, X: Copy + Serialize, L: Layout> Serialize for Matrix<R, C, X, L> {
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>
    { serializer.collect_seq((0..R).map(|r| self.row(r))) }
}

impl<'de, const R: usize, const C: usize, X: Copy + Deserialize<'de>, L: Layout> Deserialize<'de> for Matrix<R, C, X, L> {
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<Vec<X>>::deserialize(deserializer)?;
        Matrix::try_from(raw).map_err(de::Error::custom)
    }
}
