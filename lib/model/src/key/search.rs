use crate::{IncomparableError, Key};
use std::cmp::Ordering;

/// Returns the first position in the sorted `keys` at which `key` could be inserted while keeping
/// the order. Equal keys are placed after the returned position.
pub fn bisect_left(keys: &[Key], key: &Key) -> Result<usize, IncomparableError> {
    let mut low = 0;
    let mut high = keys.len();
    while low < high {
        let mid = low + (high - low) / 2;
        if keys[mid].try_cmp(key)? == Ordering::Less {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    Ok(low)
}

/// Like [bisect_left], but equal keys are placed before the returned position.
pub fn bisect_right(keys: &[Key], key: &Key) -> Result<usize, IncomparableError> {
    let mut low = 0;
    let mut high = keys.len();
    while low < high {
        let mid = low + (high - low) / 2;
        if key.try_cmp(&keys[mid])? == Ordering::Less {
            high = mid;
        } else {
            low = mid + 1;
        }
    }
    Ok(low)
}

/// Inserts `key` into the sorted `keys` after all equal keys and returns its position.
///
/// `keys` is left untouched if `key` cannot be ordered relative to the keys it must be compared
/// with.
pub fn insert_sorted(keys: &mut Vec<Key>, key: Key) -> Result<usize, IncomparableError> {
    let position = bisect_right(keys, &key)?;
    keys.insert(position, key);
    Ok(position)
}

/// Sorts `keys` with a stable merge sort.
///
/// Fails if two keys that must be compared are incomparable. In this case, `keys` is left
/// untouched.
pub fn sort_keys(keys: &mut Vec<Key>) -> Result<(), IncomparableError> {
    *keys = merge_sort(keys)?;
    Ok(())
}

fn merge_sort(keys: &[Key]) -> Result<Vec<Key>, IncomparableError> {
    if keys.len() <= 1 {
        return Ok(keys.to_vec());
    }

    let (left, right) = keys.split_at(keys.len() / 2);
    let mut left = merge_sort(left)?.into_iter().peekable();
    let mut right = merge_sort(right)?.into_iter().peekable();

    let mut merged = Vec::with_capacity(keys.len());
    while let (Some(lhs), Some(rhs)) = (left.peek(), right.peek()) {
        // Taking from the left on equality keeps the sort stable.
        if rhs.try_cmp(lhs)? == Ordering::Less {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }
    merged.extend(left);
    merged.extend(right);
    Ok(merged)
}
