use super::{greater, Sorter};

/// Insertion sort - O(n^2), the correctness baseline for the others
pub struct InsertionSort;

impl Sorter for InsertionSort {
    fn sort(&self, data: &mut [f64]) {
        for i in 1..data.len() {
            let key = data[i];
            let mut j = i;
            while j > 0 && greater(data[j - 1], key) {
                data[j] = data[j - 1];
                j -= 1;
            }
            data[j] = key;
        }
    }
}
