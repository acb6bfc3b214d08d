//! Max-priority queue of cells ordered by potential.

use super::cell::Cell;
use num_traits::Float;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Entry for the priority queue.
struct QueueEntry<F> {
    cell: Cell<F>,
    /// Insertion counter; earlier entries win ties.
    seq: u64,
}

impl<F: Float> PartialEq for QueueEntry<F> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<F: Float> Eq for QueueEntry<F> {}

impl<F: Float> PartialOrd for QueueEntry<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: Float> Ord for QueueEntry<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Higher potential first, then lower sequence number (FIFO among equals).
        self.cell
            .potential()
            .partial_cmp(&other.cell.potential())
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Cells ordered by descending [`Cell::potential`].
///
/// Cells with equal potential come out in insertion order, so a search over
/// the same input always visits cells in the same sequence.
pub struct CellQueue<F> {
    heap: BinaryHeap<QueueEntry<F>>,
    next_seq: u64,
}

impl<F: Float> CellQueue<F> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Creates an empty queue with room for `capacity` cells.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Adds a cell.
    pub fn push(&mut self, cell: Cell<F>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(QueueEntry { cell, seq });
    }

    /// Removes and returns the cell with the greatest potential.
    pub fn pop(&mut self) -> Option<Cell<F>> {
        self.heap.pop().map(|entry| entry.cell)
    }

    /// Returns the cell that [`pop`](Self::pop) would return next.
    pub fn peek(&self) -> Option<&Cell<F>> {
        self.heap.peek().map(|entry| &entry.cell)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drops all cells and resets the tie-break counter.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }
}

impl<F: Float> Default for CellQueue<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> Extend<Cell<F>> for CellQueue<F> {
    fn extend<I: IntoIterator<Item = Cell<F>>>(&mut self, iter: I) {
        for cell in iter {
            self.push(cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Point2;

    fn ring() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ]
    }

    fn cell(x: f64, y: f64, half: f64) -> Cell<f64> {
        Cell::new(Point2::new(x, y), half, &ring(), 1e-10)
    }

    #[test]
    fn test_pops_highest_potential_first() {
        let mut queue = CellQueue::new();
        queue.push(cell(1.0, 1.0, 1.0));
        queue.push(cell(5.0, 5.0, 1.0));
        queue.push(cell(3.0, 3.0, 1.0));
        assert_eq!(queue.len(), 3);

        let order: Vec<_> = std::iter::from_fn(|| queue.pop())
            .map(|c| c.center())
            .collect();
        assert_eq!(
            order,
            vec![
                Point2::new(5.0, 5.0),
                Point2::new(3.0, 3.0),
                Point2::new(1.0, 1.0)
            ]
        );
        assert!(queue.is_empty());
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_equal_potential_is_fifo() {
        // All four centers sit 2 units from the nearest edge.
        let mut queue = CellQueue::new();
        let centers = [(2.0, 5.0), (8.0, 5.0), (5.0, 2.0), (5.0, 8.0)];
        queue.extend(centers.iter().map(|&(x, y)| cell(x, y, 1.0)));

        for &(x, y) in &centers {
            assert_eq!(queue.pop().map(|c| c.center()), Some(Point2::new(x, y)));
        }
    }

    #[test]
    fn test_peek_and_clear() {
        let mut queue = CellQueue::with_capacity(4);
        assert!(queue.peek().is_none());
        queue.push(cell(2.0, 2.0, 0.5));
        queue.push(cell(4.0, 4.0, 0.5));
        assert_eq!(queue.peek().map(|c| c.center()), Some(Point2::new(4.0, 4.0)));
        assert_eq!(queue.len(), 2);

        queue.clear();
        assert!(queue.is_empty());
        assert!(queue.peek().is_none());
    }
}
