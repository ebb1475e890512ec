// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod dimension;
mod dimensionality;
mod error;
mod measure;
mod unit;

pub use dimension::Dimension;
pub use dimensionality::Dimensionality;
pub use error::ConvertError;
pub use measure::Measure;
pub use unit::{Atom, Product, Ratio, Unit};
