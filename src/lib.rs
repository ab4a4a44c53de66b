//! Array-backed binary heap with a pluggable ordering strategy.
//!
//! [`Heap`] stores its elements in a single growable array that encodes a
//! complete binary tree, and takes the min/max decision as an injected
//! [`OrderPredicate`]. [`MinHeap`] and [`MaxHeap`] are the two canonical
//! configurations; [`OrderFn`] adapts any `Fn(&T, &T) -> bool` closure into
//! a custom one.

mod heap;
mod order;

pub use heap::{Heap, MaxHeap, MinHeap};
pub use order::{MaxOrder, MinOrder, OrderFn, OrderPredicate};
