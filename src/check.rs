//! Order predicates over views.

use ndarray::ArrayView1;

/// Whether every parent is greater than or equal to its children.
pub fn is_heap<T, F>(v: ArrayView1<'_, T>, is_less: &mut F) -> bool
where
	F: FnMut(&T, &T) -> bool,
{
	(1..v.len()).all(|child| !is_less(&v[(child - 1) / 2], &v[child]))
}

/// Whether every element is greater than or equal to its predecessor.
pub fn is_sorted<T, F>(v: ArrayView1<'_, T>, is_less: &mut F) -> bool
where
	F: FnMut(&T, &T) -> bool,
{
	(1..v.len()).all(|i| !is_less(&v[i], &v[i - 1]))
}
