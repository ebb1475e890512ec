// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::{
    collections::{btree_map::Iter, BTreeMap},
    fmt,
    iter::FromIterator,
};

use serde_derive::{Deserialize, Serialize};

use super::Dimension;
use crate::algorithms::merge_powers;

type Map = BTreeMap<Dimension, i64>;

/// The dimension vector of a unit shape: each family mapped to its net
/// power. Two units are mutually convertible exactly when their
/// dimensionalities are equal; an empty map is dimensionless.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[serde(transparent)]
pub struct Dimensionality {
    dims: Map,
}

impl Default for Dimensionality {
    fn default() -> Self {
        Dimensionality::new()
    }
}

impl Dimensionality {
    pub fn new() -> Dimensionality {
        Dimensionality {
            dims: BTreeMap::new(),
        }
    }

    /// A single family raised to the first power. The scalar pseudo-family
    /// contributes nothing.
    pub fn base(dimension: Dimension) -> Dimensionality {
        let mut dims = BTreeMap::new();
        if !dimension.is_scalar() {
            dims.insert(dimension, 1);
        }
        Dimensionality { dims }
    }

    pub fn iter(&self) -> Iter<'_, Dimension, i64> {
        self.dims.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dims.len()
    }

    /// Dimensionality of a product of shapes: powers add.
    pub fn multiply(&self, other: &Dimensionality) -> Dimensionality {
        Dimensionality {
            dims: merge_powers(&self.dims, &other.dims, |a, b| a + b),
        }
    }

    /// Dimensionality of a quotient of shapes: powers subtract.
    pub fn divide(&self, other: &Dimensionality) -> Dimensionality {
        Dimensionality {
            dims: merge_powers(&self.dims, &other.dims, |a, b| a - b),
        }
    }

    /// Dimensionality of a reciprocal shape: powers negate.
    pub fn invert(&self) -> Dimensionality {
        self.iter()
            .map(|(dim, &power)| (dim.clone(), -power))
            .collect()
    }
}

impl FromIterator<(Dimension, i64)> for Dimensionality {
    fn from_iter<T: IntoIterator<Item = (Dimension, i64)>>(iter: T) -> Self {
        let dims = iter.into_iter().filter(|&(_, power)| power != 0).collect();
        Dimensionality { dims }
    }
}

impl fmt::Display for Dimensionality {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(fmt, "1");
        }
        let mut positive = vec![];
        let mut negative = vec![];
        for (dim, &power) in self.iter() {
            if power < 0 {
                negative.push((dim, -power));
            } else {
                positive.push((dim, power));
            }
        }
        fn write_side(fmt: &mut fmt::Formatter<'_>, side: &[(&Dimension, i64)]) -> fmt::Result {
            for (i, &(dim, power)) in side.iter().enumerate() {
                if i > 0 {
                    write!(fmt, " ")?;
                }
                write!(fmt, "{}", dim)?;
                if power != 1 {
                    write!(fmt, "^{}", power)?;
                }
            }
            Ok(())
        }
        if positive.is_empty() {
            write!(fmt, "1")?;
        } else {
            write_side(fmt, &positive)?;
        }
        if !negative.is_empty() {
            write!(fmt, " / ")?;
            write_side(fmt, &negative)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Dimension, Dimensionality};

    fn length() -> Dimensionality {
        Dimensionality::base(Dimension::new("length"))
    }

    fn time() -> Dimensionality {
        Dimensionality::base(Dimension::new("time"))
    }

    #[test]
    fn test_scalar_family_is_empty() {
        assert!(Dimensionality::base(Dimension::scalar()).is_empty());
    }

    #[test]
    fn test_velocity_times_time_is_length() {
        let velocity = length().divide(&time());
        assert_eq!(velocity.multiply(&time()), length());
    }

    #[test]
    fn test_divide_by_self_is_dimensionless() {
        let velocity = length().divide(&time());
        assert!(velocity.divide(&velocity).is_empty());
    }

    #[test]
    fn test_invert_round_trips() {
        let acceleration = length().divide(&time()).divide(&time());
        assert_eq!(acceleration.invert().invert(), acceleration);
    }

    #[test]
    fn test_display() {
        let acceleration = length().divide(&time()).divide(&time());
        assert_eq!(acceleration.to_string(), "length / time^2");
        assert_eq!(Dimensionality::new().to_string(), "1");
        assert_eq!(time().invert().to_string(), "1 / time");
    }
}
