// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use serde_derive::{Deserialize, Serialize};

use super::{ConvertError, Unit};
use crate::algorithms::simplify::{self, Reduced};

/// The basic representation of a number with a unit.
///
/// Immutable: every operation yields a new value. All arithmetic is total
/// over IEEE doubles, and the unit of a product or quotient is derived by
/// the simplification combinators.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measure {
    pub amount: f64,
    pub unit: Unit,
}

impl Measure {
    pub fn new(amount: f64, unit: Unit) -> Measure {
        Measure { amount, unit }
    }

    /// A raw number, carrying the dimensionless unit.
    pub fn scalar(amount: f64) -> Measure {
        Measure::new(amount, Unit::scalar())
    }

    /// Re-expresses this quantity in `target`. Converting into the unit
    /// already held returns the amount untouched, avoiding a
    /// floating-point round trip. Cross-family targets are not guarded:
    /// the result is numerically defined but semantically meaningless
    /// (see [`Measure::try_convert_to`] for the checked form).
    pub fn convert_to(&self, target: &Unit) -> Measure {
        Measure::new(self.value_in(target), target.clone())
    }

    /// The raw amount this quantity takes when expressed in `target`.
    pub fn value_in(&self, target: &Unit) -> f64 {
        if self.unit == *target {
            self.amount
        } else {
            self.amount * (self.unit.ratio() / target.ratio())
        }
    }

    /// Checked conversion: fails unless `target` has the same
    /// dimensionality as the current unit.
    pub fn try_convert_to(&self, target: &Unit) -> Result<Measure, ConvertError> {
        let from = self.unit.dimensionality();
        let to = target.dimensionality();
        if from == to {
            Ok(self.convert_to(target))
        } else {
            Err(ConvertError { from, to })
        }
    }

    pub fn is_compatible_with(&self, other: &Measure) -> bool {
        self.unit.dimensionality() == other.unit.dimensionality()
    }

    /// The raw number held by a dimensionless measure, with the unit's
    /// residual scale folded in; `None` for shaped measures.
    pub fn as_scalar(&self) -> Option<f64> {
        if self.unit.is_scalar() {
            Some(self.amount * self.unit.ratio())
        } else {
            None
        }
    }

    pub fn abs(&self) -> Measure {
        Measure::new(self.amount.abs(), self.unit.clone())
    }

    pub fn round(&self) -> Measure {
        Measure::new(self.amount.round(), self.unit.clone())
    }

    pub fn floor(&self) -> Measure {
        Measure::new(self.amount.floor(), self.unit.clone())
    }

    pub fn ceil(&self) -> Measure {
        Measure::new(self.amount.ceil(), self.unit.clone())
    }

    pub fn round_to_int(&self) -> i64 {
        self.amount.round() as i64
    }

    /// Rounds to the nearest multiple of `step`, expressed in this
    /// measure's own unit.
    pub fn to_nearest(&self, step: &Measure) -> Measure {
        let step = step.value_in(&self.unit);
        Measure::new((self.amount / step).round() * step, self.unit.clone())
    }

    // Addition-like operations convert into whichever operand unit has
    // the smaller ratio, so the larger-scaled quantity is the one
    // converted down and less magnitude is lost.
    fn smaller_unit(&self, other: &Measure) -> Unit {
        if other.unit.ratio() < self.unit.ratio() {
            other.unit.clone()
        } else {
            self.unit.clone()
        }
    }

    fn wrap(reduced: Reduced, amount: f64) -> Measure {
        match reduced {
            Reduced::Scalar(factor) => Measure::scalar(amount * factor),
            Reduced::Shaped { factor, unit } => Measure::new(amount * factor, unit),
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let space = if self.unit.space_between_suffix() {
            " "
        } else {
            ""
        };
        write!(fmt, "{}{}{}", self.amount, space, self.unit.suffix())
    }
}

impl fmt::Debug for Measure {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}", self)
    }
}

/// Equality projects both operands into the smaller-ratio unit of the
/// pair and compares the converted amounts, so `1 km == 1000 m` holds no
/// matter which representation either side was expressed in. Like unit
/// equality this is family-blind; comparing incompatible measures is a
/// silent logic error, not a trapped failure.
impl PartialEq for Measure {
    fn eq(&self, other: &Measure) -> bool {
        let unit = self.smaller_unit(other);
        self.value_in(&unit) == other.value_in(&unit)
    }
}

/// Dimensionless measures compare directly against raw numbers.
impl PartialEq<f64> for Measure {
    fn eq(&self, other: &f64) -> bool {
        self.as_scalar() == Some(*other)
    }
}

impl PartialEq<Measure> for f64 {
    fn eq(&self, other: &Measure) -> bool {
        other == self
    }
}

/// Ordering converts `other` into this measure's unit and compares
/// amounts there.
impl PartialOrd for Measure {
    fn partial_cmp(&self, other: &Measure) -> Option<Ordering> {
        self.amount.partial_cmp(&other.value_in(&self.unit))
    }
}

impl Add for Measure {
    type Output = Measure;

    fn add(self, other: Measure) -> Measure {
        let unit = self.smaller_unit(&other);
        let amount = self.value_in(&unit) + other.value_in(&unit);
        Measure::new(amount, unit)
    }
}

impl Sub for Measure {
    type Output = Measure;

    fn sub(self, other: Measure) -> Measure {
        let unit = self.smaller_unit(&other);
        let amount = self.value_in(&unit) - other.value_in(&unit);
        Measure::new(amount, unit)
    }
}

impl Rem for Measure {
    type Output = Measure;

    fn rem(self, other: Measure) -> Measure {
        let unit = self.smaller_unit(&other);
        let amount = self.value_in(&unit) % other.value_in(&unit);
        Measure::new(amount, unit)
    }
}

impl Neg for Measure {
    type Output = Measure;

    fn neg(self) -> Measure {
        Measure::new(-self.amount, self.unit)
    }
}

impl Mul<f64> for Measure {
    type Output = Measure;

    fn mul(self, scalar: f64) -> Measure {
        Measure::new(self.amount * scalar, self.unit)
    }
}

impl Div<f64> for Measure {
    type Output = Measure;

    fn div(self, scalar: f64) -> Measure {
        Measure::new(self.amount / scalar, self.unit)
    }
}

impl Rem<f64> for Measure {
    type Output = Measure;

    fn rem(self, scalar: f64) -> Measure {
        Measure::new(self.amount % scalar, self.unit)
    }
}

impl Mul<Measure> for Measure {
    type Output = Measure;

    /// The unit of the result is decided by the simplification
    /// combinators; full cancellation yields a dimensionless measure
    /// holding the pure quotient of scales (see [`Measure::as_scalar`]).
    fn mul(self, other: Measure) -> Measure {
        Measure::wrap(
            simplify::multiply(&self.unit, &other.unit),
            self.amount * other.amount,
        )
    }
}

impl Div<Measure> for Measure {
    type Output = Measure;

    fn div(self, other: Measure) -> Measure {
        Measure::wrap(
            simplify::divide(&self.unit, &other.unit),
            self.amount / other.amount,
        )
    }
}

impl Mul<Unit> for Measure {
    type Output = Measure;

    fn mul(self, unit: Unit) -> Measure {
        Measure::wrap(simplify::multiply(&self.unit, &unit), self.amount)
    }
}

impl Div<Unit> for Measure {
    type Output = Measure;

    fn div(self, unit: Unit) -> Measure {
        Measure::wrap(simplify::divide(&self.unit, &unit), self.amount)
    }
}

/// Lifts a raw numeric literal: `5.0 * meters()`.
impl Mul<Unit> for f64 {
    type Output = Measure;

    fn mul(self, unit: Unit) -> Measure {
        Measure::new(self, unit)
    }
}

/// Lifts a raw numeric literal into a reciprocal quantity:
/// `10.0 / seconds()` is ten per second.
impl Div<Unit> for f64 {
    type Output = Measure;

    fn div(self, unit: Unit) -> Measure {
        Measure::new(self, Unit::inverse(unit))
    }
}

impl Mul<Measure> for f64 {
    type Output = Measure;

    fn mul(self, measure: Measure) -> Measure {
        Measure::new(self * measure.amount, measure.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::Measure;
    use crate::catalog::{
        degrees, feet, grams, kilograms, kilometers, meters, minutes, seconds,
    };
    use crate::types::Unit;

    #[test]
    fn test_conversion() {
        let km = 1.0 * kilometers();
        assert_eq!(km.value_in(&meters()), 1000.0);
        assert_eq!(km.convert_to(&meters()), 1000.0 * meters());
        assert_eq!(km, 1000.0 * meters());
    }

    #[test]
    fn test_identity_conversion_is_exact() {
        // Zero and negative ratios are permitted on construction; the
        // identity short-circuit keeps even a degenerate unit stable.
        let odd = Unit::atom("length", "odd", 0.0);
        let m = 7.0 * odd.clone();
        assert_eq!(m.value_in(&odd), 7.0);
        assert!(m.value_in(&meters()).is_nan() || m.value_in(&meters()) == 0.0);
    }

    #[test]
    fn test_addition_prefers_smaller_unit() {
        let sum = 1.0 * kilometers() + 1.0 * meters();
        assert_eq!(sum.unit, meters());
        assert_eq!(sum.amount, 1001.0);
        // Operand order picks the same unit.
        let sum = 1.0 * meters() + 1.0 * kilometers();
        assert_eq!(sum.unit, meters());
        assert_eq!(sum.amount, 1001.0);
    }

    #[test]
    fn test_subtraction_and_negation() {
        let diff = 1.0 * kilometers() - 250.0 * meters();
        assert_eq!(diff, 750.0 * meters());
        assert_eq!(-(5.0 * meters()), -5.0 * meters());
    }

    #[test]
    fn test_remainder() {
        let rem = 2500.0 * meters() % (1.0 * kilometers());
        assert_eq!(rem, 500.0 * meters());
        let rem = 7.5 * meters() % 2.0;
        assert_eq!(rem, 1.5 * meters());
    }

    #[test]
    fn test_scalar_scaling() {
        assert_eq!((5.0 * meters()) * 3.0, 15.0 * meters());
        assert_eq!((5.0 * meters()) / 2.0, 2.5 * meters());
        assert_eq!(2.0 * (5.0 * meters()), 10.0 * meters());
    }

    #[test]
    fn test_measure_product_and_quotient() {
        let area = (3.0 * meters()) * (2.0 * meters());
        assert_eq!(area.amount, 6.0);
        assert_eq!(area.unit.suffix(), "(m)^2");

        let velocity = (300.0 * meters()) / (1.0 * minutes());
        assert_eq!(velocity.unit, meters() / minutes());
        assert_eq!(velocity.amount, 300.0);
    }

    #[test]
    fn test_full_cancellation_yields_scalar() {
        let quotient = (3.0 * kilometers()) / (500.0 * meters());
        assert_eq!(quotient.as_scalar(), Some(6.0));
        assert_eq!(quotient, 6.0);
        assert_eq!(6.0, quotient);
        assert_eq!((5.0 * meters()).as_scalar(), None);
    }

    #[test]
    fn test_division_by_unit() {
        let velocity = 5.0 * meters() / seconds();
        assert_eq!(velocity.unit, meters() / seconds());
        assert_eq!(velocity.amount, 5.0);
    }

    #[test]
    fn test_reciprocal_lift() {
        let rate = 10.0 / seconds();
        assert_eq!(rate.unit, Unit::inverse(seconds()));
        let total = rate * (30.0 * seconds());
        assert_eq!(total.as_scalar(), Some(300.0));
    }

    #[test]
    fn test_ordering_converts_into_left_unit() {
        let km = 1.0 * kilometers();
        let m = 999.0 * meters();
        assert!(km > m);
        assert!(m < km);
        assert_eq!(
            km.partial_cmp(&m).map(|ord| ord.reverse()),
            m.partial_cmp(&km)
        );
    }

    #[test]
    fn test_zero_amounts_compare_equal_across_units() {
        assert_eq!(0.0 * meters(), 0.0 * kilometers());
        assert_eq!(0.0 * feet(), 0.0 * meters());
    }

    #[test]
    fn test_cross_family_comparison_is_permissive() {
        // Dimensional mismatch is a silent logic error, not a trapped
        // failure: the conversion below is numerically defined nonsense.
        let mass = 5.0 * grams();
        let length = 5.0 * meters();
        assert_eq!(mass, length);
        assert_eq!(mass.convert_to(&meters()), 5.0 * meters());
        assert!(!mass.is_compatible_with(&length));
    }

    #[test]
    fn test_try_convert_rejects_cross_family() {
        let err = (5.0 * grams()).try_convert_to(&meters()).unwrap_err();
        assert_eq!(err.to_string(), "Conversion of mass into length is not meaningful");
        assert!((5.0 * kilometers()).try_convert_to(&meters()).is_ok());
    }

    #[test]
    fn test_rounding_helpers() {
        let m = 2.6 * meters();
        assert_eq!(m.round(), 3.0 * meters());
        assert_eq!(m.floor(), 2.0 * meters());
        assert_eq!(m.ceil(), 3.0 * meters());
        assert_eq!((-2.6 * meters()).abs(), 2.6 * meters());
        assert_eq!(m.round_to_int(), 3);
    }

    #[test]
    fn test_to_nearest() {
        let m = 1234.0 * meters();
        assert_eq!(m.to_nearest(&(0.5 * kilometers())), 1000.0 * meters());
        assert_eq!(m.to_nearest(&(250.0 * meters())), 1250.0 * meters());
    }

    #[test]
    fn test_display() {
        assert_eq!((45.0 * kilograms()).to_string(), "45 kg");
        assert_eq!((45.0 * degrees()).to_string(), "45°");
        assert_eq!((5.0 * meters() / seconds()).to_string(), "5 m/s");
    }

    #[test]
    fn test_nan_propagates() {
        let m = f64::NAN * meters();
        assert_ne!(m.clone() + 1.0 * meters(), 1.0 * meters());
        assert!((m * 2.0).amount.is_nan());
    }
}
