use std::fmt;

use crate::order::{MaxOrder, MinOrder, OrderPredicate};

/// Array-backed binary heap.
///
/// The `Vec` encodes a complete binary tree: for index `i` the children live
/// at `2i + 1` and `2i + 2`, the parent at `(i - 1) / 2`. Which element wins
/// the top slot is decided by the injected [`OrderPredicate`]; see
/// [`MinHeap`] and [`MaxHeap`] for the two canonical configurations.
pub struct Heap<T, O = MinOrder> {
    container: Vec<T>,
    order: O,
}

/// Binary heap keeping its smallest element at the top.
pub type MinHeap<T> = Heap<T, MinOrder>;

/// Binary heap keeping its greatest element at the top.
pub type MaxHeap<T> = Heap<T, MaxOrder>;

impl<T, O: OrderPredicate<T>> Heap<T, O> {
    pub fn with_order(order: O) -> Self {
        Heap {
            container: Vec::new(),
            order,
        }
    }

    pub fn peek(&self) -> Option<&T> {
        self.container.first()
    }

    pub fn size(&self) -> usize {
        self.container.len()
    }

    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    pub fn clear(&mut self) {
        self.container.clear();
    }

    /// Elements in index order. Index 0 is the top; siblings are unordered
    /// relative to each other.
    pub fn as_slice(&self) -> &[T] {
        &self.container
    }

    pub fn insert(&mut self, item: T) {
        self.container.push(item);
        self.sift_up(self.container.len() - 1);
    }

    pub fn extract_top(&mut self) -> Option<T> {
        if self.container.is_empty() {
            return None;
        }
        if self.container.len() == 1 {
            return self.container.pop();
        }
        // Tail element replaces the root, then sinks to its place.
        let top = self.container.swap_remove(0);
        self.sift_down(0);
        Some(top)
    }

    pub fn find(&self, target: &T) -> Vec<usize>
    where
        T: PartialEq,
    {
        self.find_by(target, |a, b| a == b)
    }

    /// Indices of every element equal to `target` under `equal`, ascending.
    pub fn find_by<F>(&self, target: &T, equal: F) -> Vec<usize>
    where
        F: Fn(&T, &T) -> bool,
    {
        self.container
            .iter()
            .enumerate()
            .filter(|&(_, item)| equal(target, item))
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn remove(&mut self, target: &T) -> &mut Self
    where
        T: PartialEq,
    {
        self.remove_by(target, |a, b| a == b)
    }

    /// Removes every element equal to `target` under `equal`.
    ///
    /// Each removal splices the tail element into the vacated slot and
    /// repairs the invariant in a single direction. O(n log n) worst case:
    /// indices shift after every splice, so the container is rescanned per
    /// removed occurrence. Removal is not the hot path of a priority queue.
    pub fn remove_by<F>(&mut self, target: &T, equal: F) -> &mut Self
    where
        F: Fn(&T, &T) -> bool,
    {
        let occurrences = self.find_by(target, &equal).len();
        for _ in 0..occurrences {
            let idx = match self.find_by(target, &equal).pop() {
                Some(idx) => idx,
                None => break,
            };
            if idx == self.container.len() - 1 {
                // Tail element: drop it, nothing to repair.
                self.container.pop();
                continue;
            }
            self.container.swap_remove(idx);
            let ordered_with_parent = !Self::has_parent(idx)
                || self
                    .order
                    .in_order(&self.container[Self::parent_index(idx)], &self.container[idx]);
            if self.has_left_child(idx) && ordered_with_parent {
                self.sift_down(idx);
            } else {
                self.sift_up(idx);
            }
        }
        self
    }

    fn sift_up(&mut self, mut idx: usize) {
        while Self::has_parent(idx) {
            let parent = Self::parent_index(idx);
            if self
                .order
                .in_order(&self.container[parent], &self.container[idx])
            {
                break;
            }
            self.container.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        while self.has_left_child(idx) {
            let left = Self::left_child_index(idx);
            let right = Self::right_child_index(idx);
            // Ties between children break toward the right child.
            let preferred = if self.has_right_child(idx)
                && self
                    .order
                    .in_order(&self.container[right], &self.container[left])
            {
                right
            } else {
                left
            };
            if self
                .order
                .in_order(&self.container[idx], &self.container[preferred])
            {
                break;
            }
            self.container.swap(idx, preferred);
            idx = preferred;
        }
    }

    fn parent_index(idx: usize) -> usize {
        (idx - 1) / 2
    }

    fn left_child_index(idx: usize) -> usize {
        2 * idx + 1
    }

    fn right_child_index(idx: usize) -> usize {
        2 * idx + 2
    }

    fn has_parent(idx: usize) -> bool {
        idx > 0
    }

    fn has_left_child(&self, idx: usize) -> bool {
        Self::left_child_index(idx) < self.container.len()
    }

    fn has_right_child(&self, idx: usize) -> bool {
        Self::right_child_index(idx) < self.container.len()
    }
}

impl<T: PartialOrd> Heap<T, MinOrder> {
    pub fn new() -> Self {
        Heap::with_order(MinOrder)
    }

    /// Builds the heap by inserting the items one at a time, in input order.
    /// The resulting layout depends on that order, not just on the multiset.
    pub fn from_vec(items: Vec<T>) -> Self {
        let mut heap = Self::new();
        for item in items {
            heap.insert(item);
        }
        heap
    }
}

impl<T: PartialOrd> Heap<T, MaxOrder> {
    pub fn new() -> Self {
        Heap::with_order(MaxOrder)
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        let mut heap = Self::new();
        for item in items {
            heap.insert(item);
        }
        heap
    }
}

impl<T, O: OrderPredicate<T> + Default> Default for Heap<T, O> {
    fn default() -> Self {
        Heap::with_order(O::default())
    }
}

impl<T: Clone, O: Clone> Clone for Heap<T, O> {
    fn clone(&self) -> Self {
        Heap {
            container: self.container.clone(),
            order: self.order.clone(),
        }
    }
}

impl<T, O: OrderPredicate<T> + Default> FromIterator<T> for Heap<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Heap::with_order(O::default());
        heap.extend(iter);
        heap
    }
}

impl<T, O: OrderPredicate<T>> Extend<T> for Heap<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: fmt::Debug, O> fmt::Debug for Heap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.container).finish()
    }
}

impl<T: fmt::Display, O> fmt::Display for Heap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.container.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
