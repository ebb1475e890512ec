// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `measures` is a dimensional-analysis arithmetic library: a small
//! algebra of units (named scale factors relative to a family base) and
//! measures (an amount paired with a unit). Arithmetic between measures
//! derives the shape of the resulting unit automatically (length times
//! length is an area, length over time is a velocity) and converts
//! between compatible representations (miles against kilometers, minutes
//! against seconds) without losing the semantic meaning of the quantity.
//!
//! Units form a closed algebra of atoms, products, ratios, and inverses.
//! When two measures are multiplied or divided, the simplification
//! combinators in [`algorithms::simplify`] cancel matching factors rather
//! than piling up nested compounds, down to a plain number when
//! everything cancels.
//!
//! ## Example
//!
//! ```rust
//! use measures::catalog::{meters, minutes, seconds};
//!
//! let velocity = 5.0 * meters() / seconds();
//! let time = 1.0 * minutes();
//!
//! // The time factors cancel; the minutes-to-seconds scale moves into
//! // the amount.
//! let distance = velocity * time;
//! assert_eq!(distance, 300.0 * meters());
//! assert_eq!(distance.to_string(), "300 m");
//! ```
//!
//! Quantities convert explicitly with [`Measure::convert_to`] and
//! [`Measure::value_in`]:
//!
//! ```rust
//! use measures::catalog::{kilometers, meters};
//!
//! let trip = 16500.0 * meters();
//! assert_eq!(trip.convert_to(&kilometers()), 16.5 * kilometers());
//! assert_eq!(trip.value_in(&kilometers()), 16.5);
//! ```
//!
//! Every value in the crate is immutable; all operations are pure
//! functions over IEEE doubles and return new values.

pub mod algorithms;
pub mod catalog;
pub mod types;

pub use crate::algorithms::simplify::{self, Reduced};
pub use crate::types::{Atom, ConvertError, Dimension, Dimensionality, Measure, Product, Ratio, Unit};
