//! Heapsort in two phases: build a max-heap, then pop its maxima into the sorted suffix.

use crate::sift::sift_down;
use ndarray::{ArrayView1, ArrayViewMut1, s};

/// Step of [`heap_sort_observed`](crate::HeapSort1Ext::heap_sort_observed) after which the observer
/// is called.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
	/// Heap construction turned the subtree rooted at `node` into a max-heap.
	Build {
		/// Root of the sifted subtree.
		node: usize,
	},
	/// The maximum was moved to `end` and the heap shrunk to `..end` was restored.
	Extract {
		/// First index of the sorted suffix.
		end: usize,
	},
}

/// Rearranges `v` into a max-heap in linear time.
pub fn build_heap<T, F, O>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F, observer: &mut O)
where
	F: FnMut(&T, &T) -> bool,
	O: FnMut(Step, ArrayView1<'_, T>),
{
	// Leaves are heaps already. Sifting non-leaves bottom-up keeps both subtrees of each node valid.
	for node in (0..v.len() / 2).rev() {
		sift_down(v.view_mut(), node, is_less);
		trace!(node, "sifted subtree");
		observer(Step::Build { node }, v.view());
	}
}

/// Sorts `v` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
pub fn heap_sort<T, F, O>(mut v: ArrayViewMut1<'_, T>, mut is_less: F, mut observer: O)
where
	F: FnMut(&T, &T) -> bool,
	O: FnMut(Step, ArrayView1<'_, T>),
{
	let len = v.len();
	debug!(len, "heap sort");

	build_heap(v.view_mut(), &mut is_less, &mut observer);

	// Pop maximal elements from the heap.
	for end in (1..len).rev() {
		v.swap(0, end);
		sift_down(v.slice_mut(s![..end]), 0, &mut is_less);
		trace!(end, "extracted maximum");
		observer(Step::Extract { end }, v.view());
	}
}
