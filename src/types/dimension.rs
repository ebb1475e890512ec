// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::{fmt, sync::Arc};

use serde_derive::{Deserialize, Serialize};

/// A newtype for a string family ID, so that we can implement traits for it.
///
/// Units sharing a dimension are mutually convertible; the simplification
/// combinators cancel factors by comparing dimensions, never by comparing
/// display suffixes.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[serde(transparent)]
pub struct Dimension {
    pub id: Arc<String>,
}

impl fmt::Display for Dimension {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.id.fmt(fmt)
    }
}

impl Dimension {
    pub fn new(id: &str) -> Dimension {
        Dimension {
            id: Arc::new(id.to_owned()),
        }
    }

    /// The pseudo-family of dimensionless results (empty ID).
    pub fn scalar() -> Dimension {
        Dimension::new("")
    }

    pub fn is_scalar(&self) -> bool {
        self.id.is_empty()
    }
}
