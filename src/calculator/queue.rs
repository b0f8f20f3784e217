//! FIFO queue used to sequence operands and operators.

use std::collections::VecDeque;
use thiserror::Error;

/// Failure raised when taking an element from an empty queue.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("No element found in the queue.")]
    NotFoundElement,
}

/// A first-in, first-out queue of calculator items.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorItemQueue<T> {
    items: VecDeque<T>,
}

impl<T> CalculatorItemQueue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Append an item to the tail.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the head item.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        self.items.pop_front().ok_or(QueueError::NotFoundElement)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for CalculatorItemQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for CalculatorItemQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_queue_is_empty() {
        let queue = CalculatorItemQueue::<f64>::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_dequeue_preserves_insertion_order() {
        let mut queue = CalculatorItemQueue::new();
        queue.enqueue(1.0);
        queue.enqueue(2.0);
        queue.enqueue(3.0);

        assert_eq!(queue.dequeue(), Ok(1.0));
        assert_eq!(queue.dequeue(), Ok(2.0));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.dequeue(), Ok(3.0));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dequeue_on_empty_fails() {
        let mut queue = CalculatorItemQueue::<i32>::default();
        assert_eq!(queue.dequeue(), Err(QueueError::NotFoundElement));
    }

    #[test]
    fn test_enqueue_after_draining() {
        let mut queue: CalculatorItemQueue<_> = [7].into_iter().collect();
        assert_eq!(queue.dequeue(), Ok(7));
        assert!(queue.dequeue().is_err());

        queue.enqueue(8);
        assert!(!queue.is_empty());
        assert_eq!(queue.dequeue(), Ok(8));
    }

    #[test]
    fn test_error_description() {
        assert_eq!(
            QueueError::NotFoundElement.to_string(),
            "No element found in the queue."
        );
    }
}
