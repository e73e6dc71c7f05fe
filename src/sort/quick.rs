use super::{greater, Sorter};

/// Quicksort over an inclusive index range with a median-of-three pivot.
///
/// Recurses into the smaller partition and loops over the larger one, so
/// stack depth stays O(log n). Inputs dominated by one repeated value still
/// degrade towards O(n^2).
pub struct QuickSort;

impl Sorter for QuickSort {
    fn sort(&self, data: &mut [f64]) {
        let len = data.len();
        if len > 1 {
            quick_sort(data, 0, len - 1);
        }
    }
}

fn quick_sort(data: &mut [f64], mut low: usize, mut high: usize) {
    while low < high {
        let p = partition(data, low, high);

        if p - low < high - p {
            if p > low {
                quick_sort(data, low, p - 1);
            }
            low = p + 1;
        } else {
            // p > low here, the left side is the larger one
            if p < high {
                quick_sort(data, p + 1, high);
            }
            high = p - 1;
        }
    }
}

/// Lomuto partition of `data[low..=high]`; returns the pivot's final index
fn partition(data: &mut [f64], low: usize, high: usize) -> usize {
    let mid = low + (high - low) / 2;

    // Median of three
    if greater(data[low], data[mid]) {
        data.swap(low, mid);
    }
    if greater(data[mid], data[high]) {
        data.swap(mid, high);
    }
    if greater(data[low], data[mid]) {
        data.swap(low, mid);
    }

    data.swap(mid, high);
    let pivot = data[high];

    let mut i = low;
    for j in low..high {
        if !greater(data[j], pivot) {
            data.swap(i, j);
            i += 1;
        }
    }
    data.swap(i, high);
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_places_pivot() {
        let mut data = [9.0, 4.0, 7.0, 1.0, 8.0, 2.0, 5.0];
        let high = data.len() - 1;
        let p = partition(&mut data, 0, high);
        let pivot = data[p];
        assert!(data[..p].iter().all(|&v| v <= pivot));
        assert!(data[p + 1..].iter().all(|&v| v >= pivot));
    }

    #[test]
    fn test_sub_range_only() {
        let mut data = [5.0, 4.0, 3.0, 2.0, 1.0];
        quick_sort(&mut data, 1, 3);
        assert_eq!(data, [5.0, 2.0, 3.0, 4.0, 1.0]);
    }

    #[test]
    fn test_large_sorted_input() {
        let mut data: Vec<f64> = (0..100_000i32).map(f64::from).collect();
        let expected = data.clone();
        QuickSort.sort(&mut data);
        assert_eq!(data, expected);
    }
}
