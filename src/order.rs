/// Ordering strategy for a heap.
///
/// `in_order(a, b)` answers "does `a` belong at or before `b` in heap
/// order?". A min-heap answers with `<=`, a max-heap with `>=`. The
/// predicate must be a total preorder over the elements actually inserted.
/// An inconsistent predicate corrupts heap order, never memory.
pub trait OrderPredicate<T> {
    fn in_order(&self, a: &T, b: &T) -> bool;
}

/// Min-heap ordering: the smaller element comes first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MinOrder;

impl<T: PartialOrd> OrderPredicate<T> for MinOrder {
    fn in_order(&self, a: &T, b: &T) -> bool {
        a <= b
    }
}

/// Max-heap ordering: the greater element comes first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MaxOrder;

impl<T: PartialOrd> OrderPredicate<T> for MaxOrder {
    fn in_order(&self, a: &T, b: &T) -> bool {
        a >= b
    }
}

/// Adapter turning any `Fn(&T, &T) -> bool` closure into an order strategy,
/// for heaps ordered by a derived key rather than the element's own
/// `PartialOrd`.
#[derive(Debug, Clone, Copy)]
pub struct OrderFn<F>(pub F);

impl<T, F> OrderPredicate<T> for OrderFn<F>
where
    F: Fn(&T, &T) -> bool,
{
    fn in_order(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}
