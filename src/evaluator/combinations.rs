/// Iterator over all `K`-element index combinations of `0..n`, in lexicographic order.
///
/// The arrangement search drives it twice: C(13,3) fronts, then C(10,5)
/// middles from the cards left over.
pub struct Combinations<const K: usize> {
    n: usize,
    indices: [usize; K],
    done: bool,
}

impl<const K: usize> Combinations<K> {
    pub fn new(n: usize) -> Self {
        let mut indices = [0; K];
        for (i, slot) in indices.iter_mut().enumerate() {
            *slot = i;
        }
        Self { n, indices, done: K == 0 || K > n }
    }
}

impl<const K: usize> Iterator for Combinations<K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.indices;

        // Find the rightmost index that can be incremented
        let mut i = K - 1;
        loop {
            if self.indices[i] < self.n - (K - i) {
                self.indices[i] += 1;

                // Reset all indices to the right
                for j in (i + 1)..K {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }

            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
        }

        Some(result)
    }
}

/// Number of ways to choose `k` of `n`.
pub const fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let mut result = 1;
    let mut i = 0;
    while i < k {
        result = result * (n - i) / (i + 1);
        i += 1;
    }
    result
}
