use super::{greater, Sorter};

/// Shell sort with Knuth's gap sequence (1, 4, 13, 40, ...)
pub struct ShellSort;

impl Sorter for ShellSort {
    fn sort(&self, data: &mut [f64]) {
        let n = data.len();
        if n <= 1 {
            return;
        }

        let mut gap = 1;
        while gap < n / 3 {
            gap = 3 * gap + 1;
        }

        while gap > 0 {
            // Gapped insertion sort
            for i in gap..n {
                let key = data[i];
                let mut j = i;
                while j >= gap && greater(data[j - gap], key) {
                    data[j] = data[j - gap];
                    j -= gap;
                }
                data[j] = key;
            }
            gap /= 3;
        }
    }
}
