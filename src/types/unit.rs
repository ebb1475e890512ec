// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Div, Mul};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde_derive::{Deserialize, Serialize};

use super::{Dimension, Dimensionality};

/// An immutable named scale factor: the leaf building block of all units.
///
/// `ratio` scales an amount into the base unit of the atom's family
/// (`amount_in_base = amount * ratio`); the base unit itself has
/// `ratio = 1.0`. No validation is performed on `ratio`; zero and
/// negative factors propagate through arithmetic under IEEE semantics.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Atom {
    pub dimension: Dimension,
    pub suffix: Arc<String>,
    pub ratio: f64,
    pub space_between_suffix: bool,
}

/// A product of two unit shapes, `A·B`.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub first: Unit,
    pub second: Unit,
}

/// A quotient of two unit shapes, `A/B`, with a memoized reciprocal.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Ratio {
    pub numerator: Unit,
    pub denominator: Unit,
    // Lazy rather than eager: the reciprocal of a ratio is itself a
    // ratio, so eager construction would never terminate. OnceCell makes
    // concurrent first access compute-at-most-once.
    #[serde(skip)]
    reciprocal: OnceCell<Unit>,
}

impl Ratio {
    pub fn new(numerator: Unit, denominator: Unit) -> Ratio {
        Ratio {
            numerator,
            denominator,
            reciprocal: OnceCell::new(),
        }
    }

    /// The flipped ratio, computed on first access and cached for the
    /// lifetime of this instance.
    pub fn reciprocal(&self) -> &Unit {
        self.reciprocal.get_or_init(|| {
            Unit::Ratio(Box::new(Ratio::new(
                self.denominator.clone(),
                self.numerator.clone(),
            )))
        })
    }
}

/// A unit shape: an atom, or a compound closed under products, quotients,
/// and reciprocals. All variants are immutable values; the arithmetic in
/// [`crate::algorithms::simplify`] reduces compounds back down whenever
/// factors cancel.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub enum Unit {
    Atom(Atom),
    Product(Box<Product>),
    Ratio(Box<Ratio>),
    Inverse(Box<Unit>),
}

impl Unit {
    /// Constructs a unit atom. `ratio` is the scale factor to the base
    /// unit of `dimension`; it is not validated.
    pub fn atom(dimension: &str, suffix: &str, ratio: f64) -> Unit {
        Unit::Atom(Atom {
            dimension: Dimension::new(dimension),
            suffix: Arc::new(suffix.to_owned()),
            ratio,
            space_between_suffix: true,
        })
    }

    /// An atom rendered flush against its amount, e.g. `45°`.
    pub fn atom_unspaced(dimension: &str, suffix: &str, ratio: f64) -> Unit {
        Unit::Atom(Atom {
            dimension: Dimension::new(dimension),
            suffix: Arc::new(suffix.to_owned()),
            ratio,
            space_between_suffix: false,
        })
    }

    /// The base unit of a family (`ratio = 1.0`).
    pub fn base(dimension: &str, suffix: &str) -> Unit {
        Unit::atom(dimension, suffix, 1.0)
    }

    /// The dimensionless unit carried by fully-cancelled results.
    pub fn scalar() -> Unit {
        Unit::Atom(Atom {
            dimension: Dimension::scalar(),
            suffix: Arc::new(String::new()),
            ratio: 1.0,
            space_between_suffix: false,
        })
    }

    pub fn product(first: Unit, second: Unit) -> Unit {
        Unit::Product(Box::new(Product { first, second }))
    }

    pub fn quotient(numerator: Unit, denominator: Unit) -> Unit {
        Unit::Ratio(Box::new(Ratio::new(numerator, denominator)))
    }

    pub fn inverse(unit: Unit) -> Unit {
        Unit::Inverse(Box::new(unit))
    }

    /// The display label. Products concatenate (`ms`), except a squared
    /// factor which renders as `(m)^2`; ratios join with a slash; inverses
    /// prefix `1/`.
    pub fn suffix(&self) -> String {
        match self {
            Unit::Atom(atom) => (*atom.suffix).clone(),
            Unit::Product(product) => {
                if product.first == product.second {
                    format!("({})^2", product.first.suffix())
                } else {
                    format!("{}{}", product.first.suffix(), product.second.suffix())
                }
            }
            Unit::Ratio(ratio) => format!(
                "{}/{}",
                ratio.numerator.suffix(),
                ratio.denominator.suffix()
            ),
            Unit::Inverse(unit) => format!("1/{}", unit.suffix()),
        }
    }

    /// The scale factor to the (compound) base of this shape.
    pub fn ratio(&self) -> f64 {
        match self {
            Unit::Atom(atom) => atom.ratio,
            Unit::Product(product) => product.first.ratio() * product.second.ratio(),
            Unit::Ratio(ratio) => ratio.numerator.ratio() / ratio.denominator.ratio(),
            Unit::Inverse(unit) => 1.0 / unit.ratio(),
        }
    }

    /// Formatting hint: whether an amount is separated from the suffix by
    /// a space (`45 kg` vs `45°`). Compounds always take the space.
    pub fn space_between_suffix(&self) -> bool {
        match self {
            Unit::Atom(atom) => atom.space_between_suffix,
            _ => true,
        }
    }

    /// The net family powers of this shape.
    pub fn dimensionality(&self) -> Dimensionality {
        match self {
            Unit::Atom(atom) => Dimensionality::base(atom.dimension.clone()),
            Unit::Product(product) => product
                .first
                .dimensionality()
                .multiply(&product.second.dimensionality()),
            Unit::Ratio(ratio) => ratio
                .numerator
                .dimensionality()
                .divide(&ratio.denominator.dimensionality()),
            Unit::Inverse(unit) => unit.dimensionality().invert(),
        }
    }

    pub fn is_scalar(&self) -> bool {
        self.dimensionality().is_empty()
    }

    pub fn as_ratio(&self) -> Option<&Ratio> {
        match self {
            Unit::Ratio(ratio) => Some(ratio),
            _ => None,
        }
    }
}

/// Equality is structural over the rendered surface (suffix, ratio, and
/// the spacing hint) and deliberately family-blind: atoms from unrelated
/// families that coincide on all three compare equal. This mirrors the
/// permissive comparison semantics of the measure layer.
impl PartialEq for Unit {
    fn eq(&self, other: &Unit) -> bool {
        self.ratio() == other.ratio()
            && self.space_between_suffix() == other.space_between_suffix()
            && self.suffix() == other.suffix()
    }
}

/// Units order by scale factor alone. Only meaningful within a family.
impl PartialOrd for Unit {
    fn partial_cmp(&self, other: &Unit) -> Option<Ordering> {
        self.ratio().partial_cmp(&other.ratio())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}", self.suffix())
    }
}

impl Mul for Unit {
    type Output = Unit;

    /// Structural composition: builds a product, except that a factor
    /// times an inverse collapses directly to a ratio.
    fn mul(self, other: Unit) -> Unit {
        match (self, other) {
            (lhs, Unit::Inverse(rhs)) => Unit::quotient(lhs, *rhs),
            (Unit::Inverse(lhs), rhs) => Unit::quotient(rhs, *lhs),
            (lhs, rhs) => Unit::product(lhs, rhs),
        }
    }
}

impl Div for Unit {
    type Output = Unit;

    /// Structural composition: builds a ratio, except that dividing by an
    /// inverse collapses to a product.
    fn div(self, other: Unit) -> Unit {
        match (self, other) {
            (lhs, Unit::Inverse(rhs)) => Unit::product(lhs, *rhs),
            (lhs, rhs) => Unit::quotient(lhs, rhs),
        }
    }
}
