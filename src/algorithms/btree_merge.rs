// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cmp::Ord;
use std::collections::BTreeMap;

/// Merges two ordered power maps with a combining function. Entries
/// present on only one side are combined against an implicit zero, and
/// entries whose combined power is zero are dropped, so full cancellation
/// leaves an empty map.
pub(crate) fn merge_powers<K: Ord + Clone, F: Fn(i64, i64) -> i64>(
    left: &BTreeMap<K, i64>,
    right: &BTreeMap<K, i64>,
    combine: F,
) -> BTreeMap<K, i64> {
    let mut res = BTreeMap::new();
    let mut insert = |key: &K, power: i64| {
        if power != 0 {
            res.insert(key.clone(), power);
        }
    };
    let mut a = left.iter().peekable();
    let mut b = right.iter().peekable();
    loop {
        match (a.peek().cloned(), b.peek().cloned()) {
            (Some((akey, &aval)), Some((bkey, &bval))) if akey == bkey => {
                insert(akey, combine(aval, bval));
                a.next();
                b.next();
            }
            (Some((akey, _)), Some((bkey, &bval))) if akey > bkey => {
                insert(bkey, combine(0, bval));
                b.next();
            }
            (Some((akey, &aval)), Some(_)) => {
                insert(akey, combine(aval, 0));
                a.next();
            }
            (None, Some((bkey, &bval))) => {
                insert(bkey, combine(0, bval));
                b.next();
            }
            (Some((akey, &aval)), None) => {
                insert(akey, combine(aval, 0));
                a.next();
            }
            (None, None) => break,
        }
    }
    res
}

#[cfg(test)]
mod tests {
    use super::merge_powers;
    use std::collections::BTreeMap;

    fn map(entries: &[(&str, i64)]) -> BTreeMap<String, i64> {
        entries
            .iter()
            .map(|&(k, v)| (k.to_owned(), v))
            .collect()
    }

    #[test]
    fn test_add_powers() {
        let left = map(&[("length", 1), ("time", -1)]);
        let right = map(&[("time", -1)]);
        let res = merge_powers(&left, &right, |a, b| a + b);
        assert_eq!(res, map(&[("length", 1), ("time", -2)]));
    }

    #[test]
    fn test_annihilation_drops_entry() {
        let left = map(&[("length", 1)]);
        let right = map(&[("length", 1)]);
        let res = merge_powers(&left, &right, |a, b| a - b);
        assert!(res.is_empty());
    }

    #[test]
    fn test_one_sided_entries_pass_through_combine() {
        let left = map(&[("length", 2)]);
        let right = map(&[("time", 1)]);
        let res = merge_powers(&left, &right, |a, b| a - b);
        assert_eq!(res, map(&[("length", 2), ("time", -1)]));
    }
}
