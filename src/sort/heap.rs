use super::{greater, Sorter};

/// Heap sort - O(n log n) worst case, in-place
pub struct HeapSort;

impl Sorter for HeapSort {
    fn sort(&self, data: &mut [f64]) {
        let n = data.len();
        if n <= 1 {
            return;
        }

        // Build max heap
        for i in (0..n / 2).rev() {
            sift_down(data, n, i);
        }

        // Move the root to the tail and shrink the heap
        for end in (1..n).rev() {
            data.swap(0, end);
            sift_down(data, end, 0);
        }
    }
}

/// Restore the heap property for the subtree at `root` within `data[..n]`
fn sift_down(data: &mut [f64], n: usize, mut root: usize) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < n && greater(data[left], data[largest]) {
            largest = left;
        }
        if right < n && greater(data[right], data[largest]) {
            largest = right;
        }
        if largest == root {
            return;
        }

        data.swap(root, largest);
        root = largest;
    }
}
