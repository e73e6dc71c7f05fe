use super::{greater, Sorter};

/// Top-down merge sort - O(n log n), stable, O(n) scratch space
pub struct MergeSort;

impl Sorter for MergeSort {
    fn sort(&self, data: &mut [f64]) {
        if data.len() <= 1 {
            return;
        }
        let mut scratch = data.to_vec();
        merge_sort(data, &mut scratch);
    }
}

/// Sort `data`, using `scratch` (same length) as merge space
fn merge_sort(data: &mut [f64], scratch: &mut [f64]) {
    let len = data.len();
    if len <= 1 {
        return;
    }

    let mid = len / 2;
    {
        let (left, right) = data.split_at_mut(mid);
        let (scratch_left, scratch_right) = scratch.split_at_mut(mid);
        merge_sort(left, scratch_left);
        merge_sort(right, scratch_right);
    }

    merge(&data[..mid], &data[mid..], scratch);
    data.copy_from_slice(scratch);
}

/// Merge two sorted runs into `out`, taking from `left` on ties
fn merge(left: &[f64], right: &[f64], out: &mut [f64]) {
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        if j >= right.len() || (i < left.len() && !greater(left[i], right[j])) {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}
