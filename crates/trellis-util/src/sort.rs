use std::cmp::Ordering;

/// Stable merge sort. The input is left untouched.
pub fn merge_sort<T, F>(items: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    fn sort<T: Clone, F: Fn(&T, &T) -> Ordering>(items: &[T], compare: &F) -> Vec<T> {
        if items.len() <= 1 {
            return items.to_vec();
        }
        let (left, right) = items.split_at(items.len() / 2);
        let left = sort(left, compare);
        let right = sort(right, compare);

        let mut out = Vec::with_capacity(items.len());
        let (mut i, mut j) = (0, 0);
        while i < left.len() && j < right.len() {
            // `<=` keeps equal elements in their original order.
            if compare(&left[i], &right[j]) != Ordering::Greater {
                out.push(left[i].clone());
                i += 1;
            } else {
                out.push(right[j].clone());
                j += 1;
            }
        }
        out.extend_from_slice(&left[i..]);
        out.extend_from_slice(&right[j..]);
        out
    }

    sort(items, &compare)
}
