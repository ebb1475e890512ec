// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The unit simplification combinators.
//!
//! Multiplying or dividing two unit shapes has three possible outcomes:
//! every factor cancels and the result is a pure scalar; some factors
//! cancel and a smaller compound remains; or nothing is shared and a new
//! compound is built. Cancellation is decided by *value*, not by shape:
//! a numerator factor cancels a denominator factor whenever they belong
//! to the same family, and the quotient of their scale factors is carried
//! out of the unit and into the amount (so `m/s` times `minutes` cancels
//! the time factors and scales the amount by 60).
//!
//! Structural factor matching with cancellation always takes priority
//! over building a new nested compound.

use crate::types::{Atom, Unit};

/// Outcome of combining two unit shapes.
#[derive(Clone, Debug)]
pub enum Reduced {
    /// Full cancellation: the operands differ only by this scale factor.
    Scalar(f64),
    /// A (possibly simplified) shape. `factor` is the scale picked up by
    /// cancelling factors of mismatched representation; the invariant
    /// `lhs.ratio() op rhs.ratio() == factor * unit.ratio()` holds.
    Shaped { factor: f64, unit: Unit },
}

/// Combines the units of a multiplication.
pub fn multiply(lhs: &Unit, rhs: &Unit) -> Reduced {
    let mut numerators = Vec::new();
    let mut denominators = Vec::new();
    decompose(lhs, &mut numerators, &mut denominators);
    decompose(rhs, &mut numerators, &mut denominators);
    reduce(numerators, denominators)
}

/// Combines the units of a division, by multiplying with the flipped
/// right-hand side. A ratio divisor contributes its memoized reciprocal.
pub fn divide(lhs: &Unit, rhs: &Unit) -> Reduced {
    let mut numerators = Vec::new();
    let mut denominators = Vec::new();
    decompose(lhs, &mut numerators, &mut denominators);
    match rhs {
        Unit::Ratio(ratio) => decompose(ratio.reciprocal(), &mut numerators, &mut denominators),
        other => decompose(other, &mut denominators, &mut numerators),
    }
    reduce(numerators, denominators)
}

/// Flattens a shape into its numerator and denominator atoms, preserving
/// left-to-right order. Recursing into a denominator swaps the sides.
fn decompose(unit: &Unit, numerators: &mut Vec<Atom>, denominators: &mut Vec<Atom>) {
    match unit {
        Unit::Atom(atom) => numerators.push(atom.clone()),
        Unit::Product(product) => {
            decompose(&product.first, numerators, denominators);
            decompose(&product.second, numerators, denominators);
        }
        Unit::Ratio(ratio) => {
            decompose(&ratio.numerator, numerators, denominators);
            decompose(&ratio.denominator, denominators, numerators);
        }
        Unit::Inverse(inner) => decompose(inner, denominators, numerators),
    }
}

fn reduce(mut numerators: Vec<Atom>, mut denominators: Vec<Atom>) -> Reduced {
    // The scale carried out of the unit is accumulated as one quotient,
    // divided exactly once, so it lands on the same floating-point value
    // as the ratio quotient of the operand shapes.
    let mut scale = Scale::default();

    // Dimensionless pseudo-atoms carry no shape, only scale.
    numerators.retain(|atom| {
        let keep = !atom.dimension.is_scalar();
        if !keep {
            scale.numerator *= atom.ratio;
        }
        keep
    });
    denominators.retain(|atom| {
        let keep = !atom.dimension.is_scalar();
        if !keep {
            scale.denominator *= atom.ratio;
        }
        keep
    });

    // Identical units first, so that `min/(s min)` reduces to `1/s`
    // rather than to an equivalent but scaled `1/min`.
    cancel(&mut numerators, &mut denominators, &mut scale, |a, b| {
        a.dimension == b.dimension && a.ratio == b.ratio && a.suffix == b.suffix
    });
    cancel(&mut numerators, &mut denominators, &mut scale, |a, b| {
        a.dimension == b.dimension
    });

    let factor = scale.numerator / scale.denominator;
    match (rebuild(numerators), rebuild(denominators)) {
        (None, None) => Reduced::Scalar(factor),
        (Some(unit), None) => Reduced::Shaped { factor, unit },
        (Some(numerator), Some(denominator)) => Reduced::Shaped {
            factor,
            unit: Unit::quotient(numerator, denominator),
        },
        (None, Some(denominator)) => Reduced::Shaped {
            factor,
            unit: Unit::inverse(denominator),
        },
    }
}

/// Scale factors cancelled out of a unit, kept as an undivided quotient.
struct Scale {
    numerator: f64,
    denominator: f64,
}

impl Default for Scale {
    fn default() -> Scale {
        Scale {
            numerator: 1.0,
            denominator: 1.0,
        }
    }
}

/// Removes every numerator/denominator pair accepted by `matches`,
/// folding their scale factors into `scale`.
fn cancel<F: Fn(&Atom, &Atom) -> bool>(
    numerators: &mut Vec<Atom>,
    denominators: &mut Vec<Atom>,
    scale: &mut Scale,
    matches: F,
) {
    let mut i = 0;
    while i < numerators.len() {
        if let Some(j) = denominators
            .iter()
            .position(|den| matches(&numerators[i], den))
        {
            scale.numerator *= numerators[i].ratio;
            scale.denominator *= denominators[j].ratio;
            numerators.remove(i);
            denominators.remove(j);
        } else {
            i += 1;
        }
    }
}

/// Folds surviving atoms back into a left-associated product chain.
fn rebuild(atoms: Vec<Atom>) -> Option<Unit> {
    atoms
        .into_iter()
        .map(Unit::Atom)
        .fold(None, |acc, unit| match acc {
            None => Some(unit),
            Some(acc) => Some(Unit::product(acc, unit)),
        })
}
