// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::error::Error;
use std::fmt;

use super::Dimensionality;

/// Returned by the checked conversion API when the target unit belongs to
/// a different dimensionality than the source.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ConvertError {
    pub from: Dimensionality,
    pub to: Dimensionality,
}

impl fmt::Display for ConvertError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            fmt,
            "Conversion of {} into {} is not meaningful",
            self.from, self.to
        )
    }
}

impl Error for ConvertError {}
