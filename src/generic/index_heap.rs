/*!
A max heap over a subset of some fixed collection of indicies.

Each index has a value, whether or not the index is on the heap.
So, an index may be removed from the heap and later *activated* without loss of its value.

[IndexHeap] is used to order [atoms](crate::structures::atom) by activity.
An atom is removed from the heap when chosen for a decision (or found to be valued), and activated again when the atom loses its value on a backjump.

```rust
# use otter_lcg::generic::index_heap::IndexHeap;
let mut heap = IndexHeap::default();

heap.add(600, 10);
heap.add(0, 70);

heap.activate(600);
heap.activate(0);

assert_eq!(heap.count(), 601);
assert_eq!(heap.active_count(), 2);
assert_eq!(heap.value_at(5), &i32::default());

assert_eq!(heap.pop_max(), Some(0));
assert_eq!(heap.pop_max(), Some(600));
assert!(heap.pop_max().is_none());
```
*/

/// The index heap struct.
pub struct IndexHeap<V: PartialOrd + Default> {
    /// The value of each index.
    values: Vec<V>,

    /// The position of each index on the heap, if active.
    positions: Vec<Option<usize>>,

    /// The active indicies, ordered as a max heap on their values.
    heap: Vec<usize>,
}

impl<V: PartialOrd + Default> Default for IndexHeap<V> {
    fn default() -> Self {
        IndexHeap {
            values: Vec::default(),
            positions: Vec::default(),
            heap: Vec::default(),
        }
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    /// Sets the value of `index` to `value`, growing the structure as required for `index` to be valid.
    /// Returns true if `index` was a fresh index, false otherwise.
    ///
    /// A fresh index is not active, see [activate](IndexHeap::activate).
    pub fn add(&mut self, index: usize, value: V) -> bool {
        let fresh = self.values.len() <= index;
        if fresh {
            self.values.resize_with(index + 1, V::default);
            self.positions.resize(index + 1, None);
        }
        self.values[index] = value;
        if !fresh {
            self.heapify_if_active(index);
        }
        fresh
    }

    /// True if `index` is on the heap.
    pub fn contains(&self, index: usize) -> bool {
        matches!(self.positions.get(index), Some(Some(_)))
    }

    /// Places `index` on the heap, if `index` is not already on the heap.
    /// Returns true if `index` was placed on the heap, false otherwise.
    pub fn activate(&mut self, index: usize) -> bool {
        match self.positions[index] {
            Some(_) => false,

            None => {
                let position = self.heap.len();
                self.heap.push(index);
                self.positions[index] = Some(position);
                self.sift_up(position);
                true
            }
        }
    }

    /// Removes `index` from the heap, if present.
    /// Returns true if `index` was removed, false otherwise.
    pub fn remove(&mut self, index: usize) -> bool {
        let Some(position) = self.positions[index] else {
            return false;
        };

        let last = self.heap.len() - 1;
        self.swap(position, last);
        self.heap.pop();
        self.positions[index] = None;

        if position < self.heap.len() {
            let position = self.sift_up(position);
            self.sift_down(position);
        }
        true
    }

    /// The index with maximum value on the heap.
    pub fn peek_max(&self) -> Option<usize> {
        self.heap.first().copied()
    }

    /// Removes and returns the index with maximum value on the heap.
    pub fn pop_max(&mut self) -> Option<usize> {
        let index = self.peek_max()?;
        self.remove(index);
        Some(index)
    }

    /// The value of `index`.
    pub fn value_at(&self, index: usize) -> &V {
        &self.values[index]
    }

    /// Sets the value of `index` to `value`, and restores the heap order if `index` is active.
    pub fn revalue(&mut self, index: usize, value: V) {
        self.values[index] = value;
        self.heapify_if_active(index);
    }

    /// Applies `f` to the value of `index`, and restores the heap order if `index` is active.
    pub fn apply_to_index(&mut self, index: usize, f: impl Fn(&V) -> V) {
        self.values[index] = f(&self.values[index]);
        self.heapify_if_active(index);
    }

    /// Applies `f` to every value, active or not.
    ///
    /// As `f` may not preserve order, the heap is rebuilt.
    pub fn apply_to_all(&mut self, f: impl Fn(&V) -> V) {
        for value in self.values.iter_mut() {
            *value = f(value);
        }
        self.heapify();
    }

    /// Restores the heap order around `index`, if `index` is active.
    pub fn heapify_if_active(&mut self, index: usize) {
        if let Some(position) = self.positions[index] {
            let position = self.sift_up(position);
            self.sift_down(position);
        }
    }

    /// Restores the heap order of every active index.
    pub fn heapify(&mut self) {
        for position in (0..self.heap.len() / 2).rev() {
            self.sift_down(position);
        }
    }

    /// A count of all indicies, active or not.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// A count of the indicies on the heap.
    pub fn active_count(&self) -> usize {
        self.heap.len()
    }

    /// True if no index is on the heap.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a]] = Some(a);
        self.positions[self.heap[b]] = Some(b);
    }

    /// Whether the index at heap position `a` has a (strictly) greater value than the index at heap position `b`.
    fn greater(&self, a: usize, b: usize) -> bool {
        self.values[self.heap[a]] > self.values[self.heap[b]]
    }

    /// Moves the index at `position` towards the root while greater than its parent.
    /// Returns the final position of the index.
    fn sift_up(&mut self, mut position: usize) -> usize {
        while position > 0 {
            let parent = (position - 1) / 2;
            if !self.greater(position, parent) {
                break;
            }
            self.swap(position, parent);
            position = parent;
        }
        position
    }

    /// Moves the index at `position` away from the root while some child is greater.
    fn sift_down(&mut self, mut position: usize) {
        loop {
            let left = 2 * position + 1;
            let right = left + 1;

            let mut largest = position;
            if left < self.heap.len() && self.greater(left, largest) {
                largest = left;
            }
            if right < self.heap.len() && self.greater(right, largest) {
                largest = right;
            }

            if largest == position {
                break;
            }
            self.swap(position, largest);
            position = largest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_simple() {
        let mut test_heap = IndexHeap::default();
        for (index, value) in [(6, 10), (5, 20), (4, 30), (1, 60), (0, 70)] {
            test_heap.add(index, value);
            test_heap.activate(index);
        }

        assert_eq!(test_heap.pop_max(), Some(0));
        assert_eq!(test_heap.pop_max(), Some(1));
        assert_eq!(test_heap.pop_max(), Some(4));
        assert_eq!(test_heap.pop_max(), Some(5));
        assert_eq!(test_heap.pop_max(), Some(6));
        assert!(test_heap.is_empty());
    }

    #[test]
    fn heap_update() {
        let mut test_heap = IndexHeap::default();
        for (index, value) in [(6, 10), (4, 30), (1, 60), (0, 70)] {
            test_heap.add(index, value);
            test_heap.activate(index);
        }

        test_heap.revalue(0, 0);
        test_heap.revalue(1, 1);
        test_heap.revalue(4, 4);
        test_heap.revalue(6, 6);

        assert_eq!(test_heap.pop_max(), Some(6));
        assert_eq!(test_heap.pop_max(), Some(4));
        assert_eq!(test_heap.pop_max(), Some(1));
        assert_eq!(test_heap.pop_max(), Some(0));
        assert!(test_heap.pop_max().is_none());
    }

    #[test]
    fn heap_sparse() {
        let mut test_heap = IndexHeap::default();
        test_heap.add(600, 10);
        test_heap.add(0, 70);
        test_heap.activate(600);
        test_heap.activate(0);

        assert_eq!(test_heap.count(), 601);
        assert!(!test_heap.contains(5));

        assert_eq!(test_heap.pop_max(), Some(0));
        assert_eq!(test_heap.pop_max(), Some(600));
        assert!(test_heap.pop_max().is_none());
    }

    #[test]
    fn heap_remove() {
        let mut test_heap = IndexHeap::default();
        for index in 0..10 {
            test_heap.add(index, index as i32);
            test_heap.activate(index);
        }

        assert!(test_heap.remove(9));
        assert!(test_heap.remove(3));
        assert!(!test_heap.remove(3));

        assert_eq!(test_heap.peek_max(), Some(8));
        assert_eq!(test_heap.active_count(), 8);

        assert!(test_heap.activate(9));
        assert!(!test_heap.activate(9));
        assert_eq!(test_heap.pop_max(), Some(9));
    }

    #[test]
    fn heap_scale() {
        let mut test_heap = IndexHeap::default();
        for index in 0..5 {
            test_heap.add(index, index as f64);
            test_heap.activate(index);
        }
        test_heap.remove(2);

        test_heap.apply_to_all(|value| 4.0 - value);
        test_heap.apply_to_index(1, |value| value - 10.0);

        assert_eq!(test_heap.value_at(2), &2.0);
        assert_eq!(test_heap.pop_max(), Some(0));
        assert_eq!(test_heap.pop_max(), Some(3));
        assert_eq!(test_heap.pop_max(), Some(4));
        assert_eq!(test_heap.pop_max(), Some(1));
    }
}
