//! Restores the max-heap invariant below a single node.

use core::{mem::ManuallyDrop, ptr};
use ndarray::ArrayViewMut1;

/// When dropped, copies from `src` into `dest`.
struct CopyOnDrop<T> {
	src: *const T,
	dest: *mut T,
}

impl<T> Drop for CopyOnDrop<T> {
	fn drop(&mut self) {
		// SAFETY: `src` is the element held aside on the stack and `dest` is the current hole in
		// the view. Both are valid for one element and never overlap.
		unsafe {
			ptr::copy_nonoverlapping(self.src, self.dest, 1);
		}
	}
}

/// Sinks the element at `node` until the subtree rooted at `node` is a max-heap.
///
/// The active heap region is the whole of `v`, so elements beyond it are out of reach. Both
/// subtrees of `node` must already respect the invariant `parent >= child`. Of two equal children,
/// the left one is moved up. This function is *O*(log(*n*)) worst-case.
pub fn sift_down<T, F>(mut v: ArrayViewMut1<'_, T>, node: usize, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();
	debug_assert!(node < len, "node {node} out of heap of length {len}");

	// Leaves trivially respect the invariant.
	let mut child = 2 * node + 1;
	if child >= len {
		return;
	}

	// SAFETY: The unsafe operations below involve indexing without a bounds check and copying
	// memory (`ptr::copy_nonoverlapping`).
	//
	// a. Indexing:
	//  1. `node < len` is asserted above.
	//  2. Every `child` we index is checked against `len` first.
	//
	// b. Memory copying
	//  1. All pointers are obtained from references into `v` and hence valid.
	//  2. They never overlap, as a child always has a greater index than its parent hole.
	//  3. The held element is written back exactly once, by `hole` when it is dropped, even if
	//     `is_less` panics.
	unsafe {
		// Read the element at `node` into a stack-allocated variable. From now on, `node` is a
		// hole that moves down the tree.
		let tmp = ManuallyDrop::new(ptr::read(v.uget(node)));
		let mut hole = CopyOnDrop {
			src: &*tmp,
			dest: v.uget_mut(node) as *mut T,
		};

		while child < len {
			// Choose the greater child.
			if child + 1 < len && is_less(v.uget(child), v.uget(child + 1)) {
				child += 1;
			}

			// Stop if the invariant holds for the held element.
			if !is_less(&*tmp, v.uget(child)) {
				break;
			}

			// Move the greater child up, thus shifting the hole down.
			let src = v.uget_mut(child) as *mut T;
			ptr::copy_nonoverlapping(src, hole.dest, 1);
			hole.dest = src;
			child = 2 * child + 1;
		}
		// `hole` gets dropped and thus copies `tmp` into the remaining hole in `v`.
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::sift_down;
	use ndarray::{arr1, s};

	#[test]
	fn sinks_to_leaf() {
		let mut v = arr1(&[4, 9, 8, 5, 6]);
		sift_down(v.view_mut(), 0, &mut i32::lt);
		assert_eq!(v, arr1(&[9, 6, 8, 5, 4]));
	}

	#[test]
	fn stops_at_greater_root() {
		let mut v = arr1(&[4, 6, 8, 5, 9]);
		sift_down(v.view_mut(), 1, &mut i32::lt);
		assert_eq!(v, arr1(&[4, 9, 8, 5, 6]));
		sift_down(v.view_mut(), 1, &mut i32::lt);
		assert_eq!(v, arr1(&[4, 9, 8, 5, 6]));
	}

	#[test]
	fn leaf_is_untouched() {
		let mut v = arr1(&[1, 2, 3]);
		sift_down(v.view_mut(), 2, &mut i32::lt);
		assert_eq!(v, arr1(&[1, 2, 3]));
	}

	#[test]
	fn equal_children_prefer_left() {
		let mut v = arr1(&[(1, 'a'), (3, 'l'), (3, 'r')]);
		sift_down(v.view_mut(), 0, &mut |a: &(i32, char), b: &(i32, char)| a.0 < b.0);
		assert_eq!(v, arr1(&[(3, 'l'), (1, 'a'), (3, 'r')]));
	}

	#[test]
	fn limit_bounds_region() {
		let mut v = arr1(&[1, 2, 3, 100]);
		sift_down(v.slice_mut(s![..3]), 0, &mut i32::lt);
		assert_eq!(v, arr1(&[3, 2, 1, 100]));
	}

	#[test]
	fn non_contiguous_view() {
		let mut v = ndarray::arr2(&[[1, 0], [7, 0], [5, 0]]);
		sift_down(v.column_mut(0), 0, &mut i32::lt);
		assert_eq!(v, ndarray::arr2(&[[7, 0], [1, 0], [5, 0]]));
	}

	#[test]
	fn panicking_comparison_keeps_elements() {
		use std::panic::{AssertUnwindSafe, catch_unwind};

		for panic_at in 1..5 {
			let mut v = arr1(&[
				String::from("a"),
				String::from("h"),
				String::from("g"),
				String::from("f"),
				String::from("e"),
				String::from("d"),
				String::from("c"),
			]);
			let mut calls = 0;
			let result = catch_unwind(AssertUnwindSafe(|| {
				sift_down(v.view_mut(), 0, &mut |a: &String, b: &String| {
					calls += 1;
					if calls == panic_at {
						panic!("comparison {panic_at}");
					}
					a < b
				});
			}));
			assert!(result.is_err());
			let mut elements = v.to_vec();
			elements.sort();
			assert_eq!(elements, ["a", "c", "d", "e", "f", "g", "h"]);
		}
	}
}
