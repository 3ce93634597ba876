use std::cmp::Ordering;

/// Finds `target` in `items`, which must be sorted by `compare`.
///
/// Returns the index of some element equal to `target`, or `None`.
pub fn binary_search<T, F>(items: &[T], target: &T, compare: F) -> Option<usize>
where
    F: Fn(&T, &T) -> Ordering,
{
    let (mut lo, mut hi) = (0usize, items.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match compare(&items[mid], target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    None
}
