use rand::Rng;

/*
--------------------------------------------------------------------------------
   QUICKSORT (recursive) - Lomuto partition with randomized pivot
--------------------------------------------------------------------------------
*/

/// Sort ascending in place. Pivots come from the thread-local generator.
pub fn quick_sort_recursive(data: &mut [i64]) {
    let mut rng = rand::thread_rng();
    quick_sort_recursive_with(data, &mut rng);
}

/// Sort ascending in place with a caller-supplied pivot generator.
/// Seed the generator to make the pivot sequence reproducible.
pub fn quick_sort_recursive_with<R: Rng>(data: &mut [i64], rng: &mut R) {
    if data.len() > 1 {
        quick_recurse(data, 0, data.len() - 1, rng);
    }
}

fn quick_recurse<R: Rng>(data: &mut [i64], mut low: usize, mut high: usize, rng: &mut R) {
    // Recurse into the smaller side and loop on the larger one, so the
    // call depth stays O(log n) whatever the input order.
    while low < high {
        let pivot = random_partition(data, low, high, rng);

        if pivot - low < high - pivot {
            if pivot > low {
                quick_recurse(data, low, pivot - 1, rng);
            }
            low = pivot + 1;
        } else {
            if pivot < high {
                quick_recurse(data, pivot + 1, high, rng);
            }
            // pivot > low on this branch, no underflow
            high = pivot - 1;
        }
    }
}

/*
--------------------------------------------------------------------------------
   QUICKSORT (iterative) - same partition, explicit stack instead of recursion
--------------------------------------------------------------------------------
*/

/// Sort ascending in place without recursion.
pub fn quick_sort_iterative(data: &mut [i64]) {
    let mut rng = rand::thread_rng();
    quick_sort_iterative_with(data, &mut rng);
}

/// Iterative variant with a caller-supplied pivot generator. Pending
/// sub-ranges wait on an explicit stack; only ranges of two or more
/// elements are ever pushed.
pub fn quick_sort_iterative_with<R: Rng>(data: &mut [i64], rng: &mut R) {
    if data.len() <= 1 {
        return;
    }

    let mut stack: Vec<(usize, usize)> = vec![(0, data.len() - 1)];

    while let Some((low, high)) = stack.pop() {
        let pivot = random_partition(data, low, high, rng);

        if pivot + 1 < high {
            stack.push((pivot + 1, high));
        }
        if pivot > low + 1 {
            stack.push((low, pivot - 1));
        }
    }
}

/*
--------------------------------------------------------------------------------
   Shared partition step
--------------------------------------------------------------------------------
*/

/// Swap a uniformly chosen element into the pivot slot, then partition.
fn random_partition<R: Rng>(data: &mut [i64], low: usize, high: usize, rng: &mut R) -> usize {
    let choice = rng.gen_range(low..=high);
    data.swap(choice, high);
    partition(data, low, high)
}

/// Lomuto partition of [low, high] around the pivot at data[high].
/// Everything at or below the pivot value ends up left of its final
/// position, everything greater to the right. Returns that position.
fn partition(data: &mut [i64], low: usize, high: usize) -> usize {
    let pivot = data[high];
    let mut store = low;

    for j in low..high {
        if data[j] <= pivot {
            data.swap(store, j);
            store += 1;
        }
    }

    data.swap(store, high);
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn recursive_sorts_mixed_input() {
        let mut v = vec![64, 34, 25, 12, 22, 11, 90];
        quick_sort_recursive(&mut v);
        assert_eq!(v, vec![11, 12, 22, 25, 34, 64, 90]);
    }

    #[test]
    fn iterative_sorts_mixed_input() {
        let mut v = vec![64, 34, 25, 12, 22, 11, 90];
        quick_sort_iterative(&mut v);
        assert_eq!(v, vec![11, 12, 22, 25, 34, 64, 90]);
    }

    #[test]
    fn recursive_handles_empty_and_single() {
        let mut empty: Vec<i64> = vec![];
        quick_sort_recursive(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![42];
        quick_sort_recursive(&mut one);
        assert_eq!(one, vec![42]);
    }

    #[test]
    fn iterative_handles_empty_and_single() {
        let mut empty: Vec<i64> = vec![];
        quick_sort_iterative(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![42];
        quick_sort_iterative(&mut one);
        assert_eq!(one, vec![42]);
    }

    #[test]
    fn negatives_sort_ascending() {
        let mut v = vec![-1, 5, -3, 0, 2, -10, 8];
        quick_sort_recursive(&mut v);
        assert_eq!(v, vec![-10, -3, -1, 0, 2, 5, 8]);

        let mut v = vec![-1, 5, -3, 0, 2, -10, 8];
        quick_sort_iterative(&mut v);
        assert_eq!(v, vec![-10, -3, -1, 0, 2, 5, 8]);
    }

    #[test]
    fn partition_splits_around_pivot() {
        let mut v = vec![9, 1, 8, 2, 7, 3, 5];
        let p = partition(&mut v, 0, 6);

        assert_eq!(v[p], 5);
        for i in 0..p {
            assert!(v[i] <= 5);
        }
        for i in p + 1..v.len() {
            assert!(v[i] > 5);
        }
    }

    #[test]
    fn partition_with_all_equal_elements() {
        let mut v = vec![7, 7, 7, 7, 7];
        let p = partition(&mut v, 0, 4);
        assert_eq!(p, 4);
        assert_eq!(v, vec![7, 7, 7, 7, 7]);
    }

    #[test]
    fn seeded_generator_gives_correct_result() {
        let mut a = vec![5, 2, 8, 2, 5, 1, 5];
        let mut rng = StdRng::seed_from_u64(7);
        quick_sort_recursive_with(&mut a, &mut rng);
        assert_eq!(a, vec![1, 2, 2, 5, 5, 5, 8]);

        let mut b = vec![5, 2, 8, 2, 5, 1, 5];
        let mut rng = StdRng::seed_from_u64(7);
        quick_sort_iterative_with(&mut b, &mut rng);
        assert_eq!(b, vec![1, 2, 2, 5, 5, 5, 8]);
    }
}
