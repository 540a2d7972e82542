/// Binary min-heap priority queue.
///
/// Entries carry an explicit `f64` key chosen by the caller per
/// algorithm: tentative distance for shortest-path work, connecting
/// edge weight for spanning-tree work. The order in which equal keys
/// dequeue is unspecified.
///
/// Stale entries are never removed. A node enqueued again with a
/// better key leaves its old entry in the heap, and consumers must
/// compare the dequeued key against their authoritative best-known
/// value and skip entries that no longer match (lazy deletion).
/// Dijkstra and Prim's depend on that discipline for correct
/// relaxation and for their observable step counts.
#[derive(Debug, Clone, Default)]
pub struct MinQueue<T> {
    entries: Vec<Entry<T>>,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    key: f64,
    item: T,
}

impl<T> MinQueue<T> {
    pub fn new() -> Self {
        MinQueue {
            entries: Vec::new(),
        }
    }

    /// Append an entry and sift it up
    pub fn enqueue(&mut self, key: f64, item: T) {
        self.entries.push(Entry { key, item });
        self.sift_up(self.entries.len() - 1);
    }

    /// Remove and return the minimum-key entry, or `None` when empty
    pub fn dequeue(&mut self) -> Option<(f64, T)> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let min = self.entries.pop().map(|e| (e.key, e.item));
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        min
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.entries[idx].key >= self.entries[parent].key {
                break;
            }
            self.entries.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut swap = None;

            if left < len && self.entries[left].key < self.entries[idx].key {
                swap = Some(left);
            }
            if right < len {
                let against = swap.unwrap_or(idx);
                if self.entries[right].key < self.entries[against].key {
                    swap = Some(right);
                }
            }

            match swap {
                Some(child) => {
                    self.entries.swap(idx, child);
                    idx = child;
                }
                None => break,
            }
        }
    }
}
