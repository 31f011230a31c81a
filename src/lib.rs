//! In-place [heapsort] for plain slices and for (sub)views into *n*-dimensional arrays with
//! arbitrary memory layout (e.g., non-contiguous).
//!
//! # Example
//!
//! ```
//! use ndarray_heapsort::{ndarray::arr2, HeapSort1Ext};
//!
//! // 2-dimensional array of 3 rows and 2 columns.
//! let mut v = arr2(&[[ 4, 58],
//!                    [ 6, -1],
//!                    [-10, 9]]);
//!
//! // Due to row-major memory layout, columns are non-contiguous
//! // but can be sorted in place nonetheless.
//! let mut column = v.column_mut(0);
//! assert_eq!(column.as_slice_mut(), None);
//! column.heap_sort();
//!
//! assert!(v == arr2(&[[-10, 58],
//!                     [  4, -1],
//!                     [  6,  9]]));
//! ```
//!
//! Plain slices are sorted with [`sort`]:
//!
//! ```
//! let mut v = [4, 6, 8, 5, 9, 58, -10];
//! ndarray_heapsort::sort(&mut v);
//! assert_eq!(v, [-10, 4, 5, 6, 8, 9, 58]);
//! ```
//!
//! # Current Implementation
//!
//! Complexities where *n* is the length of the (sub)view.
//!
//! | Resource | Complexity | Sorting (unstable) |
//! |----------|------------|--------------------|
//! | Time     | Best       | *O*(*n* log *n*)   |
//! | Time     | Average    | *O*(*n* log *n*)   |
//! | Time     | Worst      | *O*(*n* log *n*)   |
//! | Space    | Worst      | *O*(1)             |
//!
//! [heapsort]: https://en.wikipedia.org/wiki/Heapsort
//!
//! # Features
//!
//!   * `std` for the standard library. Enabled by `default`.
//!   * `tracing` for `debug` and `trace` events of every sort via [`tracing`](https://docs.rs/tracing).

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

macro_rules! debug {
	($($arg:tt)*) => {
		#[cfg(feature = "tracing")]
		tracing::debug!($($arg)*);
	};
}

macro_rules! trace {
	($($arg:tt)*) => {
		#[cfg(feature = "tracing")]
		tracing::trace!($($arg)*);
	};
}

mod check;
mod heap_sort;
mod sift;

pub use crate::heap_sort::Step;

use crate::{
	check::{is_heap, is_sorted},
	heap_sort::{build_heap, heap_sort},
};
use ndarray::{ArrayBase, ArrayView1, ArrayViewMut1, Data, DataMut, Ix1};

pub use ndarray;

/// Sorts the slice in place.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// and *O*(*n* \* log(*n*)) worst-case.
///
/// # Examples
///
/// ```
/// let mut v = [5, 3, 5, 1, 5];
///
/// ndarray_heapsort::sort(&mut v);
/// assert_eq!(v, [1, 3, 5, 5, 5]);
/// ```
#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
	heap_sort(ArrayViewMut1::from(v), T::lt, |_, _| {});
}

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or (sub)view with
/// arbitrary memory layout (e.g., non-contiguous) providing in-place [heapsort] and its building
/// blocks.
///
/// [heapsort]: https://en.wikipedia.org/wiki/Heapsort
pub trait HeapSort1Ext<A, S>
where
	S: Data<Elem = A>,
{
	/// Sorts the array.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not
	/// allocate), and *O*(*n* \* log(*n*)) worst-case.
	///
	/// # Current Implementation
	///
	/// The array is first rearranged into a binary max-heap in linear time. Then, the maximum is
	/// repeatedly swapped with the last element of the shrinking heap, and the heap is restored by
	/// sifting the new root down.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heapsort::{ndarray::arr1, HeapSort1Ext};
	///
	/// let mut v = arr1(&[4, 6, 8, 5, 9]);
	///
	/// v.heap_sort();
	/// assert!(v == arr1(&[4, 5, 6, 8, 9]));
	/// ```
	fn heap_sort(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array with a key extraction function.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not
	/// allocate), and *O*(*m* \* *n* \* log(*n*)) worst-case, where the key function is *O*(*m*).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heapsort::{ndarray::arr1, HeapSort1Ext};
	///
	/// let mut v = arr1(&[-5i32, 4, 1, -3, 2]);
	///
	/// v.heap_sort_by_key(|k| k.abs());
	/// assert!(v == arr1(&[1, 2, -3, 4, -5]));
	/// ```
	fn heap_sort_by_key<K, F>(&mut self, f: F)
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut;
	/// Sorts the array while passing each intermediate state to `observer`.
	///
	/// The observer is called after every sift-down with the [`Step`] just completed and a view of
	/// the whole array. During [`Step::Build`], the subtree rooted at `node` is a max-heap. During
	/// [`Step::Extract`], `..end` is a max-heap and `end..` is sorted.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heapsort::{ndarray::arr1, HeapSort1Ext, Step};
	///
	/// let mut v = arr1(&[4, 6, 8, 5, 9]);
	/// let mut heaps = Vec::new();
	///
	/// v.heap_sort_observed(|step, v| {
	///     if let Step::Build { node } = step {
	///         heaps.push((node, v.to_vec()));
	///     }
	/// });
	/// assert_eq!(heaps, [(1, vec![4, 9, 8, 5, 6]), (0, vec![9, 6, 8, 5, 4])]);
	/// assert!(v == arr1(&[4, 5, 6, 8, 9]));
	/// ```
	fn heap_sort_observed<O>(&mut self, observer: O)
	where
		A: Ord,
		O: FnMut(Step, ArrayView1<'_, A>),
		S: DataMut;
	/// Rearranges the array into a binary max-heap in *O*(*n*) worst-case.
	///
	/// Afterwards, every element at index `i` is greater than or equal to its children at indices
	/// `2 * i + 1` and `2 * i + 2`, if any. Hence, the first element is the maximum.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heapsort::{ndarray::arr1, HeapSort1Ext};
	///
	/// let mut v = arr1(&[4, 6, 8, 5, 9]);
	///
	/// v.heapify();
	/// assert!(v == arr1(&[9, 6, 8, 5, 4]));
	/// assert!(v.is_heap());
	/// ```
	fn heapify(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Checks if the elements of this array form a binary max-heap.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heapsort::{ndarray::arr1, HeapSort1Ext};
	///
	/// assert!(arr1(&[9, 6, 8, 5, 4]).is_heap());
	/// assert!(!arr1(&[4, 9, 8, 5, 6]).is_heap());
	/// ```
	fn is_heap(&self) -> bool
	where
		A: Ord;
	/// Checks if the elements of this array are sorted.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heapsort::{ndarray::arr1, HeapSort1Ext};
	///
	/// assert!(arr1(&[1, 3, 5, 5, 5]).is_sorted());
	/// assert!(!arr1(&[5, 3, 5, 1, 5]).is_sorted());
	/// ```
	fn is_sorted(&self) -> bool
	where
		A: Ord;
}

impl<A, S> HeapSort1Ext<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[inline]
	fn heap_sort(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		heap_sort(self.view_mut(), A::lt, |_, _| {});
	}
	#[inline]
	fn heap_sort_by_key<K, F>(&mut self, mut f: F)
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut,
	{
		heap_sort(self.view_mut(), |a: &A, b: &A| f(a).lt(&f(b)), |_, _| {});
	}
	#[inline]
	fn heap_sort_observed<O>(&mut self, observer: O)
	where
		A: Ord,
		O: FnMut(Step, ArrayView1<'_, A>),
		S: DataMut,
	{
		heap_sort(self.view_mut(), A::lt, observer);
	}
	#[inline]
	fn heapify(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		build_heap(self.view_mut(), &mut A::lt, &mut |_, _| {});
	}
	#[inline]
	fn is_heap(&self) -> bool
	where
		A: Ord,
	{
		is_heap(self.view(), &mut A::lt)
	}
	#[inline]
	fn is_sorted(&self) -> bool
	where
		A: Ord,
	{
		is_sorted(self.view(), &mut A::lt)
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{HeapSort1Ext, sort};
	use ndarray::{Array1, arr1, arr2};
	use quickcheck_macros::quickcheck;
	use rand::{Rng, seq::SliceRandom};

	#[quickcheck]
	fn sorted_like_std(xs: Vec<i32>) {
		let mut expected = xs.clone();
		expected.sort_unstable();
		let mut array = Array1::from_vec(xs);
		array.heap_sort();
		assert!(array.is_sorted());
		assert_eq!(array.to_vec(), expected);
	}

	#[quickcheck]
	fn slice_sorted_like_std(mut xs: Vec<String>) {
		let mut expected = xs.clone();
		expected.sort_unstable();
		sort(&mut xs);
		assert_eq!(xs, expected);
	}

	#[quickcheck]
	fn heapify_then_sort(xs: Vec<u16>) {
		let mut array = Array1::from_vec(xs);
		array.heapify();
		assert!(array.is_heap());
		if let Some(max) = array.iter().max() {
			assert_eq!(array[0], *max);
		}
		array.heap_sort();
		assert!(array.is_sorted());
	}

	#[quickcheck]
	fn sorted_by_key(xs: Vec<(u8, u8)>) {
		let mut array = Array1::from_vec(xs);
		array.heap_sort_by_key(|&(key, _)| key);
		for i in 1..array.len() {
			assert!(array[i - 1].0 <= array[i].0);
		}
	}

	#[test]
	fn shuffled_duplicates() {
		let mut rng = rand::rng();
		for len in [0, 1, 2, 3, 7, 64, 1000, 4097] {
			let mut xs = (0..len)
				.map(|_| rng.random_range(-50..50))
				.collect::<Vec<i64>>();
			xs.shuffle(&mut rng);
			let mut expected = xs.clone();
			expected.sort();
			sort(&mut xs);
			assert_eq!(xs, expected);
			sort(&mut xs);
			assert_eq!(xs, expected);
		}
	}

	#[test]
	fn strided_views() {
		let mut v = arr2(&[[5, 0], [3, 1], [5, 2], [1, 3], [5, 4]]);
		v.column_mut(0).heap_sort();
		assert_eq!(v.column(0), arr1(&[1, 3, 5, 5, 5]));
		assert_eq!(v.column(1), arr1(&[0, 1, 2, 3, 4]));

		let mut v = arr1(&[9, 0, 7, 0, 8, 0, -1]);
		v.slice_mut(ndarray::s![..;2]).heap_sort();
		assert_eq!(v, arr1(&[-1, 0, 7, 0, 8, 0, 9]));
	}
}
